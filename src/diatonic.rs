//! Diatonic triads of a seven-note scale.
//!
//! Each degree stacks the scale tones two and four steps above it, wrapping
//! around the scale. Quality is read from the two resulting intervals; any
//! combination other than major, minor, diminished or augmented is reported
//! as major.

use serde::Serialize;

use crate::chord::ChordType;
use crate::note::Note;

/// Triad quality of a diatonic chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TriadQuality {
    Major,
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
}

impl TriadQuality {
    /// Classify from the root-to-third and root-to-fifth semitone distances.
    pub fn from_intervals(root_to_third: usize, root_to_fifth: usize) -> TriadQuality {
        match (root_to_third, root_to_fifth) {
            (4, 7) => TriadQuality::Major,
            (3, 7) => TriadQuality::Minor,
            (3, 6) => TriadQuality::Diminished,
            (4, 8) => TriadQuality::Augmented,
            _ => TriadQuality::Major,
        }
    }

    /// Suffix appended to the root in chord labels.
    pub const fn label_suffix(self) -> &'static str {
        match self {
            TriadQuality::Major => "",
            TriadQuality::Minor => "m",
            TriadQuality::Diminished => "dim",
            TriadQuality::Augmented => "aug",
        }
    }

    /// Chord type selected when the chord is picked from the diatonic row.
    pub const fn chord_type(self) -> ChordType {
        match self {
            TriadQuality::Major => ChordType::Major,
            TriadQuality::Minor => ChordType::Minor,
            TriadQuality::Diminished => ChordType::Diminished,
            TriadQuality::Augmented => ChordType::Augmented,
        }
    }
}

/// One triad per scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiatonicChord {
    /// 1-based scale degree.
    pub degree: usize,
    pub root: Note,
    pub quality: TriadQuality,
    /// Root name plus quality suffix, e.g. `Dm` or `Bdim`.
    pub label: String,
}

const ROMAN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

impl DiatonicChord {
    pub fn chord_type(&self) -> ChordType {
        self.quality.chord_type()
    }

    /// Roman numeral for the degree: lower case for minor and diminished,
    /// with `°` for diminished and `+` for augmented.
    pub fn roman_numeral(&self) -> String {
        let numeral = ROMAN_NUMERALS[(self.degree - 1) % ROMAN_NUMERALS.len()];
        match self.quality {
            TriadQuality::Major => numeral.to_string(),
            TriadQuality::Minor => numeral.to_lowercase(),
            TriadQuality::Diminished => format!("{}°", numeral.to_lowercase()),
            TriadQuality::Augmented => format!("{}+", numeral),
        }
    }
}

/// Triads for every degree of the scale built on `root`.
///
/// Only seven-note scales have diatonic triads here; any other length
/// returns an empty list.
pub fn diatonic_chords(root: Note, intervals: &[u8]) -> Vec<DiatonicChord> {
    if intervals.len() != 7 {
        return Vec::new();
    }

    (0..7)
        .map(|i| {
            let this = intervals[i] as usize;
            let third = intervals[(i + 2) % 7] as usize;
            let fifth = intervals[(i + 4) % 7] as usize;

            let root_to_third = (third + 12 - this % 12) % 12;
            let root_to_fifth = (fifth + 12 - this % 12) % 12;
            let quality = TriadQuality::from_intervals(root_to_third, root_to_fifth);

            let chord_root = root.transpose(this);
            DiatonicChord {
                degree: i + 1,
                root: chord_root,
                quality,
                label: format!("{}{}", chord_root, quality.label_suffix()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: &[u8] = &[0, 2, 4, 5, 7, 9, 11];
    const HARMONIC_MINOR: &[u8] = &[0, 2, 3, 5, 7, 8, 11];

    #[test]
    fn test_c_major_diatonic_chords() {
        let chords = diatonic_chords(Note::C, MAJOR);
        let labels: Vec<&str> = chords.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);

        let degrees: Vec<usize> = chords.iter().map(|c| c.degree).collect();
        assert_eq!(degrees, vec![1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(chords[1].root, Note::D);
        assert_eq!(chords[1].quality, TriadQuality::Minor);
        assert_eq!(chords[6].quality, TriadQuality::Diminished);
    }

    #[test]
    fn test_harmonic_minor_has_augmented_third() {
        let chords = diatonic_chords(Note::A, HARMONIC_MINOR);
        assert_eq!(chords[2].label, "Caug");
        assert_eq!(chords[2].quality, TriadQuality::Augmented);
        assert_eq!(chords[4].label, "E");
        assert_eq!(chords[6].label, "G#dim");
    }

    #[test]
    fn test_non_heptatonic_scales_have_no_chords() {
        assert!(diatonic_chords(Note::C, &[0, 2, 4, 7, 9]).is_empty());
        assert!(diatonic_chords(Note::E, &[0, 3, 5, 6, 7, 10]).is_empty());
        assert!(diatonic_chords(Note::G, &[]).is_empty());
        assert!(diatonic_chords(Note::G, &[0, 1, 2, 3, 4, 5, 6, 7]).is_empty());
    }

    #[test]
    fn test_unrecognized_intervals_fall_back_to_major() {
        // Stacked seconds give (2, 4), which matches no triad quality
        let chords = diatonic_chords(Note::C, &[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(chords[0].quality, TriadQuality::Major);
        assert_eq!(chords[0].label, "C");
    }

    #[test]
    fn test_roman_numerals() {
        let chords = diatonic_chords(Note::C, MAJOR);
        let numerals: Vec<String> = chords.iter().map(|c| c.roman_numeral()).collect();
        assert_eq!(numerals, vec!["I", "ii", "iii", "IV", "V", "vi", "vii°"]);

        let minor = diatonic_chords(Note::A, HARMONIC_MINOR);
        assert_eq!(minor[2].roman_numeral(), "III+");
    }

    #[test]
    fn test_selected_chord_type() {
        let chords = diatonic_chords(Note::G, MAJOR);
        assert_eq!(chords[0].chord_type(), ChordType::Major);
        assert_eq!(chords[5].chord_type(), ChordType::Minor);
        assert_eq!(chords[6].chord_type(), ChordType::Diminished);
    }
}
