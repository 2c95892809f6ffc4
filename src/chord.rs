//! # Chord Types and Voicings
//!
//! Chord types are catalog keys only; no interval formula is attached to
//! them. Fingerings come from a hand-authored table keyed by
//! `(root, chord type)`, and the table is deliberately incomplete: the
//! sharp roots have no `7sus4`, `add9` or `9` entries.
//!
//! Frets and fingers are listed per string, lowest-pitched string first,
//! matching [`STANDARD_TUNING`](crate::note::STANDARD_TUNING).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;
use crate::note::{Note, STRING_COUNT};

/// Chord quality used as a catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "7")]
    Seventh,
    #[serde(rename = "m7")]
    MinorSeventh,
    #[serde(rename = "maj7")]
    MajorSeventh,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "7sus4")]
    SeventhSus4,
    #[serde(rename = "dim7")]
    DiminishedSeventh,
    #[serde(rename = "m7b5")]
    HalfDiminished,
    #[serde(rename = "add9")]
    Add9,
    #[serde(rename = "9")]
    Ninth,
}

/// All chord types, in menu order.
pub const CHORD_TYPES: [ChordType; 14] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Seventh,
    ChordType::MinorSeventh,
    ChordType::MajorSeventh,
    ChordType::Diminished,
    ChordType::Augmented,
    ChordType::Sus4,
    ChordType::Sus2,
    ChordType::SeventhSus4,
    ChordType::DiminishedSeventh,
    ChordType::HalfDiminished,
    ChordType::Add9,
    ChordType::Ninth,
];

impl ChordType {
    /// Identifier used in keys and settings files.
    pub const fn suffix(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Seventh => "7",
            ChordType::MinorSeventh => "m7",
            ChordType::MajorSeventh => "maj7",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus4 => "sus4",
            ChordType::Sus2 => "sus2",
            ChordType::SeventhSus4 => "7sus4",
            ChordType::DiminishedSeventh => "dim7",
            ChordType::HalfDiminished => "m7b5",
            ChordType::Add9 => "add9",
            ChordType::Ninth => "9",
        }
    }

    /// Text shown on the chord type selector.
    pub const fn label(self) -> &'static str {
        // Labels currently match the suffixes one for one.
        self.suffix()
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChordType {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CHORD_TYPES
            .iter()
            .copied()
            .find(|chord_type| chord_type.suffix() == trimmed)
            .ok_or_else(|| FretboardError::UnknownChordType(trimmed.to_string()))
    }
}

/// Frets and suggested fingers for one chord, one entry per string.
///
/// A fret of `None` is a muted string, `Some(0)` an open string. Fingers are
/// 0 for open or muted strings and 1-4 for index through pinky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Voicing {
    pub frets: [Option<u8>; STRING_COUNT],
    pub fingers: [u8; STRING_COUNT],
}

impl Voicing {
    /// Played strings as `(string, fret, finger)`, lowest string first.
    pub fn played(&self) -> impl Iterator<Item = (usize, u8, u8)> + '_ {
        self.frets
            .iter()
            .enumerate()
            .filter_map(move |(string, fret)| fret.map(|fret| (string, fret, self.fingers[string])))
    }

    pub fn is_muted(&self, string: usize) -> bool {
        self.frets.get(string).map_or(false, |fret| fret.is_none())
    }

    /// Highest fret used, 0 when every played string is open.
    pub fn highest_fret(&self) -> u8 {
        self.played().map(|(_, fret, _)| fret).max().unwrap_or(0)
    }
}

/// Build a voicing from table notation, where -1 marks a muted string.
pub(crate) const fn voicing(frets: [i8; STRING_COUNT], fingers: [u8; STRING_COUNT]) -> Voicing {
    let mut out = [None; STRING_COUNT];
    let mut i = 0;
    while i < STRING_COUNT {
        if frets[i] >= 0 {
            out[i] = Some(frets[i] as u8);
        }
        i += 1;
    }
    Voicing { frets: out, fingers }
}

static VOICINGS: &[(Note, ChordType, Voicing)] = &[
    // C
    (Note::C, ChordType::Major, voicing([-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0])),
    (Note::C, ChordType::Minor, voicing([-1, 3, 5, 5, 4, 3], [0, 1, 3, 3, 2, 1])),
    (Note::C, ChordType::Seventh, voicing([-1, 3, 2, 3, 1, 0], [0, 3, 2, 4, 1, 0])),
    (Note::C, ChordType::MinorSeventh, voicing([-1, 3, 5, 3, 4, 3], [0, 1, 3, 1, 2, 1])),
    (Note::C, ChordType::MajorSeventh, voicing([-1, 3, 2, 0, 0, 0], [0, 3, 2, 0, 0, 0])),
    (Note::C, ChordType::Diminished, voicing([-1, 3, 4, 5, 4, -1], [0, 1, 2, 3, 2, 0])),
    (Note::C, ChordType::Augmented, voicing([-1, 3, 6, 5, 5, 4], [0, 1, 4, 3, 3, 2])),
    (Note::C, ChordType::Sus4, voicing([-1, 3, 3, 0, 1, 1], [0, 2, 3, 0, 1, 1])),
    (Note::C, ChordType::Sus2, voicing([-1, 3, 0, 0, 1, 3], [0, 2, 0, 0, 1, 3])),
    (Note::C, ChordType::SeventhSus4, voicing([-1, 3, 3, 3, 1, 1], [0, 2, 3, 4, 1, 1])),
    (Note::C, ChordType::DiminishedSeventh, voicing([-1, 3, 4, 5, 4, 5], [0, 1, 2, 3, 2, 3])),
    (Note::C, ChordType::HalfDiminished, voicing([-1, 3, 4, 3, 4, 3], [0, 1, 2, 1, 2, 1])),
    (Note::C, ChordType::Add9, voicing([-1, 3, 2, 0, 3, 0], [0, 2, 1, 0, 3, 0])),
    (Note::C, ChordType::Ninth, voicing([-1, 3, 2, 3, 3, 3], [0, 2, 1, 3, 3, 3])),

    // D
    (Note::D, ChordType::Major, voicing([-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2])),
    (Note::D, ChordType::Minor, voicing([-1, -1, 0, 2, 3, 1], [0, 0, 0, 2, 3, 1])),
    (Note::D, ChordType::Seventh, voicing([-1, -1, 0, 2, 1, 2], [0, 0, 0, 2, 1, 3])),
    (Note::D, ChordType::MinorSeventh, voicing([-1, -1, 0, 2, 1, 1], [0, 0, 0, 2, 1, 1])),
    (Note::D, ChordType::MajorSeventh, voicing([-1, -1, 0, 2, 2, 2], [0, 0, 0, 1, 2, 3])),
    (Note::D, ChordType::Diminished, voicing([-1, 5, 6, 7, 6, -1], [0, 1, 2, 3, 2, 0])),
    (Note::D, ChordType::Augmented, voicing([-1, 5, 8, 7, 7, 6], [0, 1, 4, 3, 3, 2])),
    (Note::D, ChordType::Sus4, voicing([-1, -1, 0, 2, 3, 3], [0, 0, 0, 1, 2, 3])),
    (Note::D, ChordType::Sus2, voicing([-1, -1, 0, 2, 3, 0], [0, 0, 0, 1, 2, 0])),
    (Note::D, ChordType::SeventhSus4, voicing([-1, -1, 0, 2, 1, 3], [0, 0, 0, 2, 1, 3])),
    (Note::D, ChordType::DiminishedSeventh, voicing([-1, 5, 6, 7, 6, 7], [0, 1, 2, 3, 2, 3])),
    (Note::D, ChordType::HalfDiminished, voicing([-1, 5, 6, 5, 6, 5], [0, 1, 2, 1, 2, 1])),
    (Note::D, ChordType::Add9, voicing([-1, -1, 0, 2, 3, 0], [0, 0, 0, 1, 2, 0])),
    (Note::D, ChordType::Ninth, voicing([-1, 5, 7, 9, 7, 8], [0, 1, 2, 4, 2, 3])),

    // E
    (Note::E, ChordType::Major, voicing([0, 2, 2, 1, 0, 0], [0, 2, 2, 1, 0, 0])),
    (Note::E, ChordType::Minor, voicing([0, 2, 2, 0, 0, 0], [0, 1, 1, 0, 0, 0])),
    (Note::E, ChordType::Seventh, voicing([0, 2, 0, 1, 0, 0], [0, 2, 0, 1, 0, 0])),
    (Note::E, ChordType::MinorSeventh, voicing([0, 2, 0, 0, 0, 0], [0, 1, 0, 0, 0, 0])),
    (Note::E, ChordType::MajorSeventh, voicing([0, 2, 1, 1, 0, 0], [0, 2, 1, 1, 0, 0])),
    (Note::E, ChordType::Diminished, voicing([0, 1, 2, 0, -1, -1], [0, 1, 2, 0, 0, 0])),
    (Note::E, ChordType::Augmented, voicing([0, 3, 2, 1, 1, 0], [0, 4, 3, 2, 1, 0])),
    (Note::E, ChordType::Sus4, voicing([0, 2, 2, 2, 0, 0], [0, 2, 3, 4, 0, 0])),
    (Note::E, ChordType::Sus2, voicing([0, 2, 4, 4, 0, 0], [0, 1, 3, 4, 0, 0])),
    (Note::E, ChordType::SeventhSus4, voicing([0, 2, 0, 2, 0, 0], [0, 1, 0, 2, 0, 0])),
    (Note::E, ChordType::DiminishedSeventh, voicing([0, 1, 2, 0, 2, 0], [0, 1, 2, 0, 3, 0])),
    (Note::E, ChordType::HalfDiminished, voicing([0, 1, 0, 0, 0, 0], [0, 1, 0, 0, 0, 0])),
    (Note::E, ChordType::Add9, voicing([0, 2, 4, 1, 0, 0], [0, 1, 3, 2, 0, 0])),
    (Note::E, ChordType::Ninth, voicing([0, 2, 0, 1, 0, 2], [0, 2, 0, 1, 0, 3])),

    // F
    (Note::F, ChordType::Major, voicing([1, 3, 3, 2, 1, 1], [1, 3, 3, 2, 1, 1])),
    (Note::F, ChordType::Minor, voicing([1, 3, 3, 1, 1, 1], [1, 2, 2, 1, 1, 1])),
    (Note::F, ChordType::Seventh, voicing([1, 3, 1, 2, 1, 1], [1, 3, 1, 2, 1, 1])),
    (Note::F, ChordType::MinorSeventh, voicing([1, 3, 1, 1, 1, 1], [1, 2, 1, 1, 1, 1])),
    (Note::F, ChordType::MajorSeventh, voicing([1, 3, 2, 2, 1, 1], [1, 3, 2, 2, 1, 1])),
    (Note::F, ChordType::Diminished, voicing([1, 2, 3, 1, -1, -1], [1, 2, 3, 1, 0, 0])),
    (Note::F, ChordType::Augmented, voicing([1, 4, 3, 2, 2, 1], [1, 4, 3, 2, 2, 1])),
    (Note::F, ChordType::Sus4, voicing([1, 3, 3, 3, 1, 1], [1, 2, 2, 2, 1, 1])),
    (Note::F, ChordType::Sus2, voicing([1, 3, 5, 2, 1, 1], [1, 3, 4, 2, 1, 1])),
    (Note::F, ChordType::SeventhSus4, voicing([1, 3, 1, 3, 1, 1], [1, 2, 1, 2, 1, 1])),
    (Note::F, ChordType::DiminishedSeventh, voicing([1, 2, 3, 1, 3, 1], [1, 2, 3, 1, 3, 1])),
    (Note::F, ChordType::HalfDiminished, voicing([1, 2, 1, 1, 1, 1], [1, 2, 1, 1, 1, 1])),
    (Note::F, ChordType::Add9, voicing([1, 3, 3, 2, 1, 3], [1, 3, 3, 2, 1, 3])),
    (Note::F, ChordType::Ninth, voicing([1, 3, 1, 2, 1, 3], [1, 3, 1, 2, 1, 3])),

    // G
    (Note::G, ChordType::Major, voicing([3, 2, 0, 0, 0, 3], [2, 1, 0, 0, 0, 3])),
    (Note::G, ChordType::Minor, voicing([3, 5, 5, 3, 3, 3], [1, 2, 2, 1, 1, 1])),
    (Note::G, ChordType::Seventh, voicing([3, 2, 0, 0, 0, 1], [3, 2, 0, 0, 0, 1])),
    (Note::G, ChordType::MinorSeventh, voicing([3, 5, 3, 3, 3, 3], [1, 2, 1, 1, 1, 1])),
    (Note::G, ChordType::MajorSeventh, voicing([3, 2, 0, 0, 0, 2], [3, 1, 0, 0, 0, 2])),
    (Note::G, ChordType::Diminished, voicing([3, 4, 5, 3, -1, -1], [1, 2, 3, 1, 0, 0])),
    (Note::G, ChordType::Augmented, voicing([3, 6, 5, 4, 4, 3], [1, 4, 3, 2, 2, 1])),
    (Note::G, ChordType::Sus4, voicing([3, 3, 0, 0, 1, 3], [2, 3, 0, 0, 1, 4])),
    (Note::G, ChordType::Sus2, voicing([3, 0, 0, 2, 3, 3], [2, 0, 0, 1, 3, 4])),
    (Note::G, ChordType::SeventhSus4, voicing([3, 3, 0, 0, 1, 1], [3, 4, 0, 0, 1, 1])),
    (Note::G, ChordType::DiminishedSeventh, voicing([3, 4, 5, 3, 5, 3], [1, 2, 3, 1, 3, 1])),
    (Note::G, ChordType::HalfDiminished, voicing([3, 4, 3, 3, 3, 3], [1, 2, 1, 1, 1, 1])),
    (Note::G, ChordType::Add9, voicing([3, 2, 0, 2, 0, 3], [3, 2, 0, 1, 0, 4])),
    (Note::G, ChordType::Ninth, voicing([3, 5, 3, 4, 3, 5], [1, 3, 1, 2, 1, 3])),

    // A
    (Note::A, ChordType::Major, voicing([-1, 0, 2, 2, 2, 0], [0, 0, 1, 1, 1, 0])),
    (Note::A, ChordType::Minor, voicing([-1, 0, 2, 2, 1, 0], [0, 0, 2, 2, 1, 0])),
    (Note::A, ChordType::Seventh, voicing([-1, 0, 2, 0, 2, 0], [0, 0, 1, 0, 1, 0])),
    (Note::A, ChordType::MinorSeventh, voicing([-1, 0, 2, 0, 1, 0], [0, 0, 2, 0, 1, 0])),
    (Note::A, ChordType::MajorSeventh, voicing([-1, 0, 2, 1, 2, 0], [0, 0, 2, 1, 2, 0])),
    (Note::A, ChordType::Diminished, voicing([-1, 0, 1, 2, 1, -1], [0, 0, 1, 3, 2, 0])),
    (Note::A, ChordType::Augmented, voicing([-1, 0, 3, 2, 2, 1], [0, 0, 4, 3, 2, 1])),
    (Note::A, ChordType::Sus4, voicing([-1, 0, 2, 2, 3, 0], [0, 0, 1, 2, 3, 0])),
    (Note::A, ChordType::Sus2, voicing([-1, 0, 2, 2, 0, 0], [0, 0, 1, 2, 0, 0])),
    (Note::A, ChordType::SeventhSus4, voicing([-1, 0, 2, 0, 3, 0], [0, 0, 1, 0, 3, 0])),
    (Note::A, ChordType::DiminishedSeventh, voicing([-1, 0, 1, 2, 1, 2], [0, 0, 1, 3, 2, 4])),
    (Note::A, ChordType::HalfDiminished, voicing([-1, 0, 1, 0, 1, 0], [0, 0, 1, 0, 2, 0])),
    (Note::A, ChordType::Add9, voicing([-1, 0, 2, 4, 2, 0], [0, 0, 1, 4, 2, 0])),
    (Note::A, ChordType::Ninth, voicing([-1, 0, 2, 4, 2, 3], [0, 0, 1, 3, 1, 2])),

    // B
    (Note::B, ChordType::Major, voicing([-1, 2, 4, 4, 4, 2], [0, 1, 2, 2, 2, 1])),
    (Note::B, ChordType::Minor, voicing([-1, 2, 4, 4, 3, 2], [0, 1, 3, 3, 2, 1])),
    (Note::B, ChordType::Seventh, voicing([-1, 2, 1, 2, 0, 2], [0, 2, 1, 3, 0, 4])),
    (Note::B, ChordType::MinorSeventh, voicing([-1, 2, 0, 2, 0, 2], [0, 2, 0, 1, 0, 3])),
    (Note::B, ChordType::MajorSeventh, voicing([-1, 2, 4, 3, 4, 2], [0, 1, 3, 2, 3, 1])),
    (Note::B, ChordType::Diminished, voicing([-1, 2, 3, 4, 3, -1], [0, 1, 2, 3, 2, 0])),
    (Note::B, ChordType::Augmented, voicing([-1, 2, 5, 4, 4, 3], [0, 1, 4, 3, 3, 2])),
    (Note::B, ChordType::Sus4, voicing([-1, 2, 4, 4, 5, 2], [0, 1, 2, 2, 3, 1])),
    (Note::B, ChordType::Sus2, voicing([-1, 2, 4, 4, 2, 2], [0, 1, 2, 2, 1, 1])),
    (Note::B, ChordType::SeventhSus4, voicing([-1, 2, 4, 2, 5, 2], [0, 1, 3, 1, 4, 2])),
    (Note::B, ChordType::DiminishedSeventh, voicing([-1, 2, 3, 4, 3, 4], [0, 1, 2, 3, 2, 3])),
    (Note::B, ChordType::HalfDiminished, voicing([-1, 2, 3, 2, 3, 2], [0, 1, 2, 1, 2, 1])),
    (Note::B, ChordType::Add9, voicing([-1, 2, 1, 4, 2, 2], [0, 2, 1, 4, 3, 3])),
    (Note::B, ChordType::Ninth, voicing([-1, 2, 1, 2, 2, 2], [0, 2, 1, 3, 3, 3])),

    // C#
    (Note::CSharp, ChordType::Major, voicing([-1, 4, 6, 6, 6, 4], [0, 1, 2, 2, 2, 1])),
    (Note::CSharp, ChordType::Minor, voicing([-1, 4, 6, 6, 5, 4], [0, 1, 3, 3, 2, 1])),
    (Note::CSharp, ChordType::Seventh, voicing([-1, 4, 6, 4, 6, 4], [0, 1, 2, 1, 2, 1])),
    (Note::CSharp, ChordType::MinorSeventh, voicing([-1, 4, 6, 4, 5, 4], [0, 1, 3, 1, 2, 1])),
    (Note::CSharp, ChordType::MajorSeventh, voicing([-1, 4, 6, 5, 6, 4], [0, 1, 3, 2, 3, 1])),
    (Note::CSharp, ChordType::Diminished, voicing([-1, 4, 5, 6, 5, -1], [0, 1, 2, 3, 2, 0])),
    (Note::CSharp, ChordType::Augmented, voicing([-1, 4, 7, 6, 6, 5], [0, 1, 4, 3, 3, 2])),
    (Note::CSharp, ChordType::Sus4, voicing([-1, 4, 6, 6, 7, 4], [0, 1, 2, 2, 3, 1])),
    (Note::CSharp, ChordType::Sus2, voicing([-1, 4, 6, 6, 4, 4], [0, 1, 2, 2, 1, 1])),
    (Note::CSharp, ChordType::DiminishedSeventh, voicing([-1, 4, 5, 6, 5, 6], [0, 1, 2, 3, 2, 3])),
    (Note::CSharp, ChordType::HalfDiminished, voicing([-1, 4, 5, 4, 5, 4], [0, 1, 2, 1, 2, 1])),

    // D#
    (Note::DSharp, ChordType::Major, voicing([-1, 6, 8, 8, 8, 6], [0, 1, 2, 2, 2, 1])),
    (Note::DSharp, ChordType::Minor, voicing([-1, 6, 8, 8, 7, 6], [0, 1, 3, 3, 2, 1])),
    (Note::DSharp, ChordType::Seventh, voicing([-1, 6, 8, 6, 8, 6], [0, 1, 2, 1, 2, 1])),
    (Note::DSharp, ChordType::MinorSeventh, voicing([-1, 6, 8, 6, 7, 6], [0, 1, 3, 1, 2, 1])),
    (Note::DSharp, ChordType::MajorSeventh, voicing([-1, 6, 8, 7, 8, 6], [0, 1, 3, 2, 3, 1])),
    (Note::DSharp, ChordType::Diminished, voicing([-1, 6, 7, 8, 7, -1], [0, 1, 2, 3, 2, 0])),
    (Note::DSharp, ChordType::Augmented, voicing([-1, 6, 9, 8, 8, 7], [0, 1, 4, 3, 3, 2])),
    (Note::DSharp, ChordType::Sus4, voicing([-1, 6, 8, 8, 9, 6], [0, 1, 2, 2, 3, 1])),
    (Note::DSharp, ChordType::Sus2, voicing([-1, 6, 8, 8, 6, 6], [0, 1, 2, 2, 1, 1])),
    (Note::DSharp, ChordType::DiminishedSeventh, voicing([-1, 6, 7, 8, 7, 8], [0, 1, 2, 3, 2, 3])),
    (Note::DSharp, ChordType::HalfDiminished, voicing([-1, 6, 7, 6, 7, 6], [0, 1, 2, 1, 2, 1])),

    // F#
    (Note::FSharp, ChordType::Major, voicing([2, 4, 4, 3, 2, 2], [1, 3, 3, 2, 1, 1])),
    (Note::FSharp, ChordType::Minor, voicing([2, 4, 4, 2, 2, 2], [1, 2, 2, 1, 1, 1])),
    (Note::FSharp, ChordType::Seventh, voicing([2, 4, 2, 3, 2, 2], [1, 3, 1, 2, 1, 1])),
    (Note::FSharp, ChordType::MinorSeventh, voicing([2, 4, 2, 2, 2, 2], [1, 2, 1, 1, 1, 1])),
    (Note::FSharp, ChordType::MajorSeventh, voicing([2, 4, 3, 3, 2, 2], [1, 3, 2, 2, 1, 1])),
    (Note::FSharp, ChordType::Diminished, voicing([2, 3, 4, 2, -1, -1], [1, 2, 3, 1, 0, 0])),
    (Note::FSharp, ChordType::Augmented, voicing([2, 5, 4, 3, 3, 2], [1, 4, 3, 2, 2, 1])),
    (Note::FSharp, ChordType::Sus4, voicing([2, 4, 4, 4, 2, 2], [1, 2, 2, 2, 1, 1])),
    (Note::FSharp, ChordType::Sus2, voicing([2, 4, 6, 3, 2, 2], [1, 3, 4, 2, 1, 1])),
    (Note::FSharp, ChordType::DiminishedSeventh, voicing([2, 3, 4, 2, 4, 2], [1, 2, 3, 1, 3, 1])),
    (Note::FSharp, ChordType::HalfDiminished, voicing([2, 3, 2, 2, 2, 2], [1, 2, 1, 1, 1, 1])),

    // G#
    (Note::GSharp, ChordType::Major, voicing([4, 6, 6, 5, 4, 4], [1, 3, 3, 2, 1, 1])),
    (Note::GSharp, ChordType::Minor, voicing([4, 6, 6, 4, 4, 4], [1, 2, 2, 1, 1, 1])),
    (Note::GSharp, ChordType::Seventh, voicing([4, 6, 4, 5, 4, 4], [1, 3, 1, 2, 1, 1])),
    (Note::GSharp, ChordType::MinorSeventh, voicing([4, 6, 4, 4, 4, 4], [1, 2, 1, 1, 1, 1])),
    (Note::GSharp, ChordType::MajorSeventh, voicing([4, 6, 5, 5, 4, 4], [1, 3, 2, 2, 1, 1])),
    (Note::GSharp, ChordType::Diminished, voicing([4, 5, 6, 4, -1, -1], [1, 2, 3, 1, 0, 0])),
    (Note::GSharp, ChordType::Augmented, voicing([4, 7, 6, 5, 5, 4], [1, 4, 3, 2, 2, 1])),
    (Note::GSharp, ChordType::Sus4, voicing([4, 6, 6, 6, 4, 4], [1, 2, 2, 2, 1, 1])),
    (Note::GSharp, ChordType::Sus2, voicing([4, 6, 8, 5, 4, 4], [1, 3, 4, 2, 1, 1])),
    (Note::GSharp, ChordType::DiminishedSeventh, voicing([4, 5, 6, 4, 6, 4], [1, 2, 3, 1, 3, 1])),
    (Note::GSharp, ChordType::HalfDiminished, voicing([4, 5, 4, 4, 4, 4], [1, 2, 1, 1, 1, 1])),

    // A#
    (Note::ASharp, ChordType::Major, voicing([-1, 1, 3, 3, 3, 1], [0, 1, 2, 2, 2, 1])),
    (Note::ASharp, ChordType::Minor, voicing([-1, 1, 3, 3, 2, 1], [0, 1, 3, 3, 2, 1])),
    (Note::ASharp, ChordType::Seventh, voicing([-1, 1, 3, 1, 3, 1], [0, 1, 2, 1, 2, 1])),
    (Note::ASharp, ChordType::MinorSeventh, voicing([-1, 1, 3, 1, 2, 1], [0, 1, 3, 1, 2, 1])),
    (Note::ASharp, ChordType::MajorSeventh, voicing([-1, 1, 3, 2, 3, 1], [0, 1, 3, 2, 3, 1])),
    (Note::ASharp, ChordType::Diminished, voicing([-1, 1, 2, 3, 2, -1], [0, 1, 2, 3, 2, 0])),
    (Note::ASharp, ChordType::Augmented, voicing([-1, 1, 4, 3, 3, 2], [0, 1, 4, 3, 3, 2])),
    (Note::ASharp, ChordType::Sus4, voicing([-1, 1, 3, 3, 4, 1], [0, 1, 2, 2, 3, 1])),
    (Note::ASharp, ChordType::Sus2, voicing([-1, 1, 3, 3, 1, 1], [0, 1, 2, 2, 1, 1])),
    (Note::ASharp, ChordType::DiminishedSeventh, voicing([-1, 1, 2, 3, 2, 3], [0, 1, 2, 3, 2, 3])),
    (Note::ASharp, ChordType::HalfDiminished, voicing([-1, 1, 2, 1, 2, 1], [0, 1, 2, 1, 2, 1])),];

/// Pre-authored voicing for `root` and `chord_type`, if the catalog has one.
pub fn lookup_voicing(root: Note, chord_type: ChordType) -> Option<Voicing> {
    let found = VOICINGS
        .iter()
        .find(|(r, t, _)| *r == root && *t == chord_type)
        .map(|(_, _, voicing)| *voicing);
    if found.is_none() {
        log::debug!("no voicing for {} {}", root, chord_type);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NOTES;

    #[test]
    fn test_lookup_c_major() {
        let v = lookup_voicing(Note::C, ChordType::Major).unwrap();
        assert_eq!(v.frets, [None, Some(3), Some(2), Some(0), Some(1), Some(0)]);
        assert_eq!(v.fingers, [0, 3, 2, 0, 1, 0]);
    }

    #[test]
    fn test_lookup_sharp_root() {
        let v = lookup_voicing(Note::FSharp, ChordType::Minor).unwrap();
        assert_eq!(v.frets, [Some(2), Some(4), Some(4), Some(2), Some(2), Some(2)]);
    }

    #[test]
    fn test_lookup_missing_combination() {
        assert_eq!(lookup_voicing(Note::CSharp, ChordType::SeventhSus4), None);
        assert_eq!(lookup_voicing(Note::DSharp, ChordType::Add9), None);
        assert_eq!(lookup_voicing(Note::ASharp, ChordType::Ninth), None);
    }

    #[test]
    fn test_catalog_coverage() {
        let naturals = [Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B];
        for root in NOTES {
            for chord_type in CHORD_TYPES {
                let expected = naturals.contains(&root)
                    || !matches!(
                        chord_type,
                        ChordType::SeventhSus4 | ChordType::Add9 | ChordType::Ninth
                    );
                assert_eq!(
                    lookup_voicing(root, chord_type).is_some(),
                    expected,
                    "{} {}",
                    root,
                    chord_type
                );
            }
        }
    }

    #[test]
    fn test_fingers_align_with_muted_strings() {
        for (root, chord_type, v) in VOICINGS {
            for string in 0..STRING_COUNT {
                if v.frets[string].is_none() {
                    assert_eq!(v.fingers[string], 0, "{} {} string {}", root, chord_type, string);
                }
                assert!(v.fingers[string] <= 4);
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for (i, (root, chord_type, _)) in VOICINGS.iter().enumerate() {
            assert!(
                !VOICINGS[i + 1..].iter().any(|(r, t, _)| r == root && t == chord_type),
                "duplicate entry for {} {}",
                root,
                chord_type
            );
        }
    }

    #[test]
    fn test_chord_type_parse() {
        assert_eq!("maj7".parse::<ChordType>().unwrap(), ChordType::MajorSeventh);
        assert_eq!("9".parse::<ChordType>().unwrap(), ChordType::Ninth);
        assert!(matches!("13".parse::<ChordType>(), Err(FretboardError::UnknownChordType(_))));
        for chord_type in CHORD_TYPES {
            assert_eq!(chord_type.suffix().parse::<ChordType>().unwrap(), chord_type);
        }
    }

    #[test]
    fn test_voicing_helpers() {
        let v = voicing([-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2]);
        assert!(v.is_muted(0));
        assert!(!v.is_muted(2));
        assert!(!v.is_muted(9));
        assert_eq!(v.highest_fret(), 3);
        let played: Vec<_> = v.played().collect();
        assert_eq!(played, vec![(2, 0, 0), (3, 2, 1), (4, 3, 3), (5, 2, 2)]);
    }
}
