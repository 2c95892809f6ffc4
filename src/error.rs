//! # Error Types
//!
//! Errors only occur at the string boundary: parsing note names, chord types,
//! scale names and settings files. The engine itself never fails. A missing
//! catalog entry is `None`, a scale of the wrong length yields an empty list.
//!
//! ## Usage
//! ```rust
//! use fretboard::{FretboardError, Note};
//!
//! match "Db".parse::<Note>() {
//!     Ok(note) => println!("root is {}", note),
//!     Err(FretboardError::UnknownNote(name)) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// A note name outside the twelve sharp spellings.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnknownNote("H".to_string());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unknown note: H (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)"
    /// );
    /// ```
    #[error("Unknown note: {0} (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)")]
    UnknownNote(String),

    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    #[error("Unknown CAGED form: {0} (expected one of C, A, G, E, D)")]
    UnknownCagedForm(String),

    #[error("Unknown scale: {0}")]
    UnknownScale(String),

    #[error("Unknown label mode: {0} (expected note, degree or finger)")]
    UnknownLabelMode(String),

    #[error("Unknown view mode: {0} (expected scale or chord)")]
    UnknownViewMode(String),

    /// Invalid settings file content.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::SettingsError("fret-count must be between 1 and 24".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: fret-count must be between 1 and 24");
    /// ```
    #[error("Invalid settings: {0}")]
    SettingsError(String),

    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
