//! # Neck Geometry
//!
//! Maps notes onto (string, fret) positions and decides how each position is
//! labelled. String 0 is the lowest-pitched string throughout.
//!
//! ## Key Functions
//! - [`fretboard_notes()`] - Note at every fret of every string
//! - [`scale_positions()`] - Positions to highlight for a scale
//! - [`voicing_positions()`] - Positions fretted by a chord voicing
//! - [`chord_tones()`] - Distinct pitch classes a voicing sounds, root first
//! - [`position_label()`] - Text drawn on a position for a [`LabelMode`]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chord::Voicing;
use crate::error::FretboardError;
use crate::note::{degree_name, note_at_fret, Note, STRING_COUNT};
use crate::scale::scale_notes;

/// Frets carrying a single inlay dot.
pub const FRET_MARKERS: [u8; 9] = [3, 5, 7, 9, 12, 15, 17, 19, 21];

/// Frets whose inlay is a pair of dots.
pub const DOUBLE_MARKERS: [u8; 1] = [12];

/// Inlay drawn at a fret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    None,
    Single,
    Double,
}

pub fn marker_at(fret: u8) -> Marker {
    if DOUBLE_MARKERS.contains(&fret) {
        Marker::Double
    } else if FRET_MARKERS.contains(&fret) {
        Marker::Single
    } else {
        Marker::None
    }
}

/// What to print on a highlighted position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    #[default]
    Note,
    Degree,
    Finger,
}

impl LabelMode {
    pub const fn name(self) -> &'static str {
        match self {
            LabelMode::Note => "note",
            LabelMode::Degree => "degree",
            LabelMode::Finger => "finger",
        }
    }
}

impl fmt::Display for LabelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelMode {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "note" => Ok(LabelMode::Note),
            "degree" => Ok(LabelMode::Degree),
            "finger" => Ok(LabelMode::Finger),
            _ => Err(FretboardError::UnknownLabelMode(s.trim().to_string())),
        }
    }
}

/// A highlighted spot on the neck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub string: usize,
    pub fret: u8,
    pub note: Note,
    pub is_root: bool,
    /// Suggested finger, only present for chord positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
}

/// Notes at frets `0..=fret_count` for each string of `tuning`.
pub fn fretboard_notes(tuning: &[Note; STRING_COUNT], fret_count: u8) -> Vec<Vec<Note>> {
    tuning
        .iter()
        .map(|&open| (0..=fret_count).map(|fret| note_at_fret(open, fret)).collect())
        .collect()
}

/// Every position up to `fret_count` whose note belongs to the scale.
///
/// Ordered by string, then by fret.
pub fn scale_positions(
    tuning: &[Note; STRING_COUNT],
    root: Note,
    intervals: &[u8],
    fret_count: u8,
) -> Vec<FretPosition> {
    let notes = scale_notes(root, intervals);
    let mut positions = Vec::new();
    for (string, &open) in tuning.iter().enumerate() {
        for fret in 0..=fret_count {
            let note = note_at_fret(open, fret);
            if notes.contains(&note) {
                positions.push(FretPosition {
                    string,
                    fret,
                    note,
                    is_root: note == root,
                    finger: None,
                });
            }
        }
    }
    positions
}

/// Positions played by `voicing`, one per sounding string.
pub fn voicing_positions(
    tuning: &[Note; STRING_COUNT],
    voicing: &Voicing,
    root: Note,
) -> Vec<FretPosition> {
    voicing
        .played()
        .map(|(string, fret, finger)| {
            let note = note_at_fret(tuning[string], fret);
            FretPosition {
                string,
                fret,
                note,
                is_root: note == root,
                finger: Some(finger),
            }
        })
        .collect()
}

/// A distinct pitch class sounded by a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordTone {
    pub note: Note,
    pub degree: &'static str,
}

/// Distinct pitch classes sounded by `voicing`, ordered by upward distance
/// from `root` so the root (when sounded) comes first.
pub fn chord_tones(tuning: &[Note; STRING_COUNT], voicing: &Voicing, root: Note) -> Vec<ChordTone> {
    let mut notes: Vec<Note> = Vec::new();
    for (string, fret, _) in voicing.played() {
        let note = note_at_fret(tuning[string], fret);
        if !notes.contains(&note) {
            notes.push(note);
        }
    }
    notes.sort_by_key(|note| note.interval_from(root));
    notes
        .into_iter()
        .map(|note| ChordTone { note, degree: degree_name(root, note) })
        .collect()
}

/// Text for a position under `mode`.
///
/// Finger mode only applies where a finger is assigned; open strings and
/// scale positions fall back to the note name.
pub fn position_label(mode: LabelMode, root: Note, note: Note, finger: Option<u8>) -> String {
    match (mode, finger) {
        (LabelMode::Finger, Some(finger)) if finger > 0 => finger.to_string(),
        (LabelMode::Degree, _) => degree_name(root, note).to_string(),
        _ => note.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::voicing;
    use crate::note::STANDARD_TUNING;

    #[test]
    fn test_fretboard_notes_grid() {
        let grid = fretboard_notes(&STANDARD_TUNING, 12);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|string| string.len() == 13));
        assert_eq!(grid[0][0], Note::E);
        assert_eq!(grid[0][5], Note::A);
        assert_eq!(grid[1][3], Note::C);
        assert_eq!(grid[4][1], Note::C);
        assert_eq!(grid[5][12], Note::E);
    }

    #[test]
    fn test_scale_positions_for_a_minor_pentatonic() {
        let positions = scale_positions(&STANDARD_TUNING, Note::A, &[0, 3, 5, 7, 10], 5);
        let low_e: Vec<u8> = positions.iter().filter(|p| p.string == 0).map(|p| p.fret).collect();
        // E, G, A on the low E string up to the fifth fret
        assert_eq!(low_e, vec![0, 3, 5]);

        let roots: Vec<(usize, u8)> = positions
            .iter()
            .filter(|p| p.is_root)
            .map(|p| (p.string, p.fret))
            .collect();
        assert_eq!(roots, vec![(0, 5), (1, 0), (3, 2), (5, 5)]);
        assert!(positions.iter().all(|p| p.finger.is_none()));
    }

    #[test]
    fn test_voicing_positions() {
        let c = voicing([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0]);
        let positions = voicing_positions(&STANDARD_TUNING, &c, Note::C);
        assert_eq!(positions.len(), 5);
        assert_eq!(positions[0].string, 1);
        assert_eq!(positions[0].note, Note::C);
        assert!(positions[0].is_root);
        assert_eq!(positions[0].finger, Some(3));
        assert_eq!(positions[2].note, Note::G);
        assert_eq!(positions[2].finger, Some(0));
    }

    #[test]
    fn test_chord_tones_of_open_c() {
        let c = voicing([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0]);
        let tones = chord_tones(&STANDARD_TUNING, &c, Note::C);
        assert_eq!(
            tones,
            vec![
                ChordTone { note: Note::C, degree: "R" },
                ChordTone { note: Note::E, degree: "3" },
                ChordTone { note: Note::G, degree: "5" },
            ]
        );
    }

    #[test]
    fn test_chord_tones_order_from_root() {
        // Open G7: G B D F, low string first is G but B and D recur
        let g7 = voicing([3, 2, 0, 0, 0, 1], [3, 2, 0, 0, 0, 1]);
        let tones = chord_tones(&STANDARD_TUNING, &g7, Note::G);
        let notes: Vec<Note> = tones.iter().map(|t| t.note).collect();
        assert_eq!(notes, vec![Note::G, Note::B, Note::D, Note::F]);
        let degrees: Vec<&str> = tones.iter().map(|t| t.degree).collect();
        assert_eq!(degrees, vec!["R", "3", "5", "b7"]);
    }

    #[test]
    fn test_chord_tones_without_root() {
        let rootless = voicing([-1, -1, 2, 2, 2, -1], [0, 0, 1, 1, 1, 0]);
        let tones = chord_tones(&STANDARD_TUNING, &rootless, Note::D);
        let notes: Vec<Note> = tones.iter().map(|t| t.note).collect();
        assert_eq!(notes, vec![Note::E, Note::A, Note::CSharp]);
    }

    #[test]
    fn test_position_labels() {
        assert_eq!(position_label(LabelMode::Note, Note::C, Note::E, Some(2)), "E");
        assert_eq!(position_label(LabelMode::Degree, Note::C, Note::E, Some(2)), "3");
        assert_eq!(position_label(LabelMode::Finger, Note::C, Note::E, Some(2)), "2");
        assert_eq!(position_label(LabelMode::Finger, Note::C, Note::E, Some(0)), "E");
        assert_eq!(position_label(LabelMode::Finger, Note::C, Note::FSharp, None), "F#");
    }

    #[test]
    fn test_markers() {
        assert_eq!(marker_at(0), Marker::None);
        assert_eq!(marker_at(3), Marker::Single);
        assert_eq!(marker_at(12), Marker::Double);
        assert_eq!(marker_at(13), Marker::None);
        assert_eq!(marker_at(21), Marker::Single);
    }

    #[test]
    fn test_label_mode_parse() {
        assert_eq!("Degree".parse::<LabelMode>().unwrap(), LabelMode::Degree);
        assert!(matches!("tab".parse::<LabelMode>(), Err(FretboardError::UnknownLabelMode(_))));
    }
}
