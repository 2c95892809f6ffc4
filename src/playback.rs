//! # Playback Data
//!
//! Turns a chord voicing into pitched events a synthesizer can play. Nothing
//! here produces sound; the front end owns the audio graph.
//!
//! ## MIDI Note Reference
//! Standard tuning open strings, low to high: E2 = 40, A2 = 45, D3 = 50,
//! G3 = 55, B3 = 59, E4 = 64. A4 = 69 = 440 Hz.
//!
//! ```rust
//! use fretboard::{chord_playback, lookup_voicing, ChordType, Note, PlaybackStyle};
//!
//! let c = lookup_voicing(Note::C, ChordType::Major).unwrap();
//! let events = chord_playback(&c, PlaybackStyle::Block);
//! let midi: Vec<u8> = events.iter().map(|e| e.midi_note).collect();
//! assert_eq!(midi, vec![48, 52, 55, 60, 64]);
//! ```

use serde::Serialize;

use crate::chord::Voicing;
use crate::note::STRING_COUNT;

/// MIDI note of each open string in standard tuning, lowest string first.
pub const STANDARD_TUNING_MIDI: [u8; STRING_COUNT] = [40, 45, 50, 55, 59, 64];

/// Default gap between strings in a strum.
pub const DEFAULT_STRUM_DELAY_MS: f64 = 30.0;

/// How the strings of a chord are started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "style")]
pub enum PlaybackStyle {
    /// All strings at once
    Block,
    /// Low to high, `delay_ms` apart
    Strum { delay_ms: f64 },
}

/// One sounding string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackNote {
    pub string: usize,
    pub midi_note: u8,
    pub frequency: f64,
    pub offset_ms: f64,
}

/// Equal-tempered frequency of a MIDI note, A4 = 440 Hz.
pub fn midi_to_frequency(midi_note: u8) -> f64 {
    440.0 * 2f64.powf((midi_note as f64 - 69.0) / 12.0)
}

/// MIDI notes sounded by `voicing`, lowest string first.
pub fn voicing_midi_notes(voicing: &Voicing) -> Vec<u8> {
    voicing
        .played()
        .map(|(string, fret, _)| STANDARD_TUNING_MIDI[string] + fret)
        .collect()
}

/// Playback events for `voicing`, one per played string, lowest first.
pub fn chord_playback(voicing: &Voicing, style: PlaybackStyle) -> Vec<PlaybackNote> {
    voicing
        .played()
        .enumerate()
        .map(|(i, (string, fret, _))| {
            let midi_note = STANDARD_TUNING_MIDI[string] + fret;
            let offset_ms = match style {
                PlaybackStyle::Block => 0.0,
                PlaybackStyle::Strum { delay_ms } => i as f64 * delay_ms,
            };
            PlaybackNote {
                string,
                midi_note,
                frequency: midi_to_frequency(midi_note),
                offset_ms,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::voicing;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_midi_to_frequency() {
        assert!(approx_eq(midi_to_frequency(69), 440.0));
        assert!(approx_eq(midi_to_frequency(57), 220.0));
        assert!(approx_eq(midi_to_frequency(40), 82.41));
        assert!(approx_eq(midi_to_frequency(64), 329.63));
    }

    #[test]
    fn test_open_e_major_midi_notes() {
        let e = voicing([0, 2, 2, 1, 0, 0], [0, 2, 2, 1, 0, 0]);
        assert_eq!(voicing_midi_notes(&e), vec![40, 47, 52, 56, 59, 64]);
    }

    #[test]
    fn test_muted_strings_are_skipped() {
        let d = voicing([-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2]);
        let events = chord_playback(&d, PlaybackStyle::Block);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].string, 2);
        assert_eq!(events[0].midi_note, 50);
        assert!(events.iter().all(|e| e.offset_ms == 0.0));
    }

    #[test]
    fn test_strum_offsets_count_played_strings_only() {
        let d = voicing([-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2]);
        let events = chord_playback(&d, PlaybackStyle::Strum { delay_ms: 25.0 });
        let offsets: Vec<f64> = events.iter().map(|e| e.offset_ms).collect();
        assert_eq!(offsets, vec![0.0, 25.0, 50.0, 75.0]);
    }
}
