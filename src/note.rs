//! # Notes and Tuning
//!
//! The closed twelve-tone alphabet, spelled with sharps only, and the
//! arithmetic the rest of the engine builds on. All note arithmetic is
//! modulo 12.
//!
//! ```rust
//! use fretboard::note::{degree_name, note_at_fret, Note};
//!
//! assert_eq!(note_at_fret(Note::E, 3), Note::G);
//! assert_eq!(degree_name(Note::C, Note::G), "5");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FretboardError;

/// Number of pitch classes in the chromatic alphabet.
pub const NOTE_COUNT: usize = 12;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

/// Playable range of the reference fretboard.
pub const FRET_COUNT: u8 = 22;

/// Open strings in standard tuning, lowest-pitched string first.
pub const STANDARD_TUNING: [Note; STRING_COUNT] =
    [Note::E, Note::A, Note::D, Note::G, Note::B, Note::E];

/// A pitch class, without octave information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Note {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

/// Canonical ordering, C first.
pub const NOTES: [Note; NOTE_COUNT] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

impl Note {
    /// Position in the canonical ordering, 0 for C through 11 for B.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Note at the given index, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Note {
        NOTES[index % NOTE_COUNT]
    }

    /// Canonical sharp spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Note `semitones` above this one.
    pub const fn transpose(self, semitones: usize) -> Note {
        Note::from_index(self.index() + semitones)
    }

    /// Upward distance from `root` to this note, in `0..12`.
    pub const fn interval_from(self, root: Note) -> usize {
        (self.index() + NOTE_COUNT - root.index()) % NOTE_COUNT
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        NOTES
            .iter()
            .copied()
            .find(|note| note.name() == trimmed)
            .ok_or_else(|| FretboardError::UnknownNote(trimmed.to_string()))
    }
}

/// Position of `note` in the canonical ordering.
pub fn note_index(note: Note) -> usize {
    note.index()
}

/// Note sounding at `fret` on a string tuned to `open_note`.
///
/// No upper bound is enforced; limiting the range is up to the caller.
pub fn note_at_fret(open_note: Note, fret: u8) -> Note {
    open_note.transpose(fret as usize)
}

const DEGREE_NAMES: [&str; NOTE_COUNT] = [
    "R", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

/// Degree label of `note` relative to `root`.
pub fn degree_name(root: Note, note: Note) -> &'static str {
    DEGREE_NAMES[note.interval_from(root)]
}
