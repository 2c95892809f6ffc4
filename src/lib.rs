//! # fretboard
//!
//! Music theory engine behind an interactive guitar fretboard: note and
//! interval arithmetic, scale projection, diatonic triads, a catalog of chord
//! voicings and movable CAGED shapes.
//!
//! Every function is pure and works over read-only catalogs, so results can
//! be recomputed on each render or cached freely by the caller.
//!
//! ```rust
//! use fretboard::{diatonic_chords, find_scale, scale_notes, Note};
//!
//! let major = find_scale("Major").unwrap();
//! assert_eq!(scale_notes(Note::G, major.intervals).len(), 7);
//!
//! let labels: Vec<String> = diatonic_chords(Note::C, major.intervals)
//!     .into_iter()
//!     .map(|chord| chord.label)
//!     .collect();
//! assert_eq!(labels, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
//! ```

pub mod caged;
pub mod chord;
pub mod config;
pub mod diatonic;
pub mod error;
pub mod neck;
pub mod note;
pub mod playback;
pub mod render;
pub mod scale;
pub mod view;

pub use caged::{caged_shape, transpose_caged_form, CagedForm, CagedShape, CAGED_FORMS};
pub use chord::{lookup_voicing, ChordType, Voicing, CHORD_TYPES};
pub use config::{Settings, ViewMode};
pub use diatonic::{diatonic_chords, DiatonicChord, TriadQuality};
pub use error::*;
pub use neck::{
    chord_tones, fretboard_notes, position_label, scale_positions, voicing_positions, ChordTone,
    FretPosition, LabelMode,
};
pub use note::{degree_name, note_at_fret, note_index, Note, FRET_COUNT, NOTES, STANDARD_TUNING};
pub use playback::{chord_playback, midi_to_frequency, voicing_midi_notes, PlaybackNote, PlaybackStyle};
pub use render::render_fretboard;
pub use scale::{find_scale, is_in_scale, scale_notes, Scale, SCALES};
pub use view::{resolve_voicing, FretboardView, ViewContent};
