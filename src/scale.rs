//! Scale catalog and scale-to-note projection.

use serde::Serialize;

use crate::error::FretboardError;
use crate::note::Note;

/// A named set of semitone offsets from a root, in ascending scale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub name: &'static str,
    pub intervals: &'static [u8],
}

/// Scales offered to the user, in menu order.
pub const SCALES: &[Scale] = &[
    Scale { name: "Major", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    Scale { name: "Natural Minor", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    Scale { name: "Harmonic Minor", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    Scale { name: "Melodic Minor", intervals: &[0, 2, 3, 5, 7, 9, 11] },
    Scale { name: "Major Pentatonic", intervals: &[0, 2, 4, 7, 9] },
    Scale { name: "Minor Pentatonic", intervals: &[0, 3, 5, 7, 10] },
    Scale { name: "Blues", intervals: &[0, 3, 5, 6, 7, 10] },
    Scale { name: "Dorian", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    Scale { name: "Phrygian", intervals: &[0, 1, 3, 5, 7, 8, 10] },
    Scale { name: "Lydian", intervals: &[0, 2, 4, 6, 7, 9, 11] },
    Scale { name: "Mixolydian", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    Scale { name: "Locrian", intervals: &[0, 1, 3, 5, 6, 8, 10] },
];

fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c.to_ascii_lowercase() })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up a scale by name, ignoring case and treating `-`/`_` as spaces.
pub fn find_scale(name: &str) -> Result<&'static Scale, FretboardError> {
    let wanted = normalize_name(name);
    SCALES
        .iter()
        .find(|scale| normalize_name(scale.name) == wanted)
        .ok_or_else(|| FretboardError::UnknownScale(name.trim().to_string()))
}

/// Notes of the scale built on `root`, in the order of `intervals`.
pub fn scale_notes(root: Note, intervals: &[u8]) -> Vec<Note> {
    intervals
        .iter()
        .map(|&interval| root.transpose(interval as usize))
        .collect()
}

/// Whether `note` belongs to the scale built on `root`.
pub fn is_in_scale(note: Note, root: Note, intervals: &[u8]) -> bool {
    scale_notes(root, intervals).contains(&note)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAJOR: &[u8] = &[0, 2, 4, 5, 7, 9, 11];

    #[test]
    fn test_c_major_notes() {
        assert_eq!(
            scale_notes(Note::C, MAJOR),
            vec![Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B]
        );
    }

    #[test]
    fn test_scale_order_follows_intervals_across_wrap() {
        // A major crosses the octave boundary between G# and A
        assert_eq!(
            scale_notes(Note::A, MAJOR),
            vec![
                Note::A,
                Note::B,
                Note::CSharp,
                Note::D,
                Note::E,
                Note::FSharp,
                Note::GSharp
            ]
        );
    }

    #[test]
    fn test_duplicate_intervals_are_kept() {
        assert_eq!(scale_notes(Note::C, &[0, 0, 12]), vec![Note::C, Note::C, Note::C]);
    }

    #[test]
    fn test_is_in_scale() {
        assert!(is_in_scale(Note::E, Note::C, MAJOR));
        assert!(!is_in_scale(Note::DSharp, Note::C, MAJOR));
        assert!(is_in_scale(Note::DSharp, Note::C, &[0, 3, 5, 7, 10]));
    }

    #[test]
    fn test_find_scale() {
        assert_eq!(find_scale("Major").unwrap().intervals, MAJOR);
        assert_eq!(find_scale("natural-minor").unwrap().name, "Natural Minor");
        assert_eq!(find_scale("  MINOR_PENTATONIC ").unwrap().intervals.len(), 5);
        assert!(matches!(find_scale("bebop"), Err(FretboardError::UnknownScale(_))));
    }

    #[test]
    fn test_catalog_scales_start_on_unison() {
        for scale in SCALES {
            assert_eq!(scale.intervals[0], 0, "{} must start on the root", scale.name);
            assert!(scale.intervals.windows(2).all(|w| w[0] < w[1]), "{} not ascending", scale.name);
            assert!(scale.intervals.iter().all(|&i| i < 12));
        }
    }
}
