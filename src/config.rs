//! # Settings
//!
//! The selection that drives a fretboard view, optionally read from a YAML
//! file. Every key is optional; missing keys take the defaults below.
//!
//! ```yaml
//! root: A
//! mode: chord
//! scale: natural-minor
//! chord-type: m7
//! caged-form: E
//! label-mode: degree
//! fret-count: 15
//! ```

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::caged::CagedForm;
use crate::chord::ChordType;
use crate::error::FretboardError;
use crate::neck::LabelMode;
use crate::note::{Note, FRET_COUNT};
use crate::scale::{find_scale, Scale, SCALES};

/// Largest fret count a settings file may ask for.
pub const MAX_FRET_COUNT: u8 = 24;

/// Whether the neck shows a scale or a single chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Scale,
    Chord,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Scale => f.write_str("scale"),
            ViewMode::Chord => f.write_str("chord"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scale" => Ok(ViewMode::Scale),
            "chord" => Ok(ViewMode::Chord),
            _ => Err(FretboardError::UnknownViewMode(s.trim().to_string())),
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSettings {
    pub root: Option<String>,
    pub mode: Option<String>,
    pub scale: Option<String>,
    pub chord_type: Option<String>,
    pub caged_form: Option<String>,
    pub label_mode: Option<String>,
    pub fret_count: Option<u8>,
}

/// Validated view settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: Note,
    pub mode: ViewMode,
    pub scale: &'static Scale,
    pub chord_type: ChordType,
    pub caged_form: Option<CagedForm>,
    pub label_mode: LabelMode,
    pub fret_count: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: Note::C,
            mode: ViewMode::Scale,
            scale: &SCALES[0],
            chord_type: ChordType::Major,
            caged_form: None,
            label_mode: LabelMode::Note,
            fret_count: FRET_COUNT,
        }
    }
}

fn field<T, F>(value: Option<&str>, key: &str, parse: F) -> Result<Option<T>, FretboardError>
where
    F: FnOnce(&str) -> Result<T, FretboardError>,
{
    value
        .map(|v| parse(v).map_err(|e| FretboardError::SettingsError(format!("{}: {}", key, e))))
        .transpose()
}

impl Settings {
    /// Parse settings from YAML content.
    ///
    /// # Errors
    /// Returns [`FretboardError::SettingsError`] naming the offending key.
    pub fn from_yaml(content: &str) -> Result<Settings, FretboardError> {
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| FretboardError::SettingsError(e.to_string()))?
        };
        Settings::from_raw(raw)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Settings, FretboardError> {
        let content = fs::read_to_string(path).map_err(|source| FretboardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded settings from {}", path.display());
        Settings::from_yaml(&content)
    }

    fn from_raw(raw: RawSettings) -> Result<Settings, FretboardError> {
        let defaults = Settings::default();

        let fret_count = raw.fret_count.unwrap_or(defaults.fret_count);
        if fret_count == 0 || fret_count > MAX_FRET_COUNT {
            return Err(FretboardError::SettingsError(format!(
                "fret-count must be between 1 and {}",
                MAX_FRET_COUNT
            )));
        }

        Ok(Settings {
            root: field(raw.root.as_deref(), "root", |s| s.parse::<Note>())?.unwrap_or(defaults.root),
            mode: field(raw.mode.as_deref(), "mode", |s| s.parse::<ViewMode>())?.unwrap_or(defaults.mode),
            scale: field(raw.scale.as_deref(), "scale", find_scale)?.unwrap_or(defaults.scale),
            chord_type: field(raw.chord_type.as_deref(), "chord-type", |s| s.parse::<ChordType>())?
                .unwrap_or(defaults.chord_type),
            caged_form: field(raw.caged_form.as_deref(), "caged-form", |s| s.parse::<CagedForm>())?,
            label_mode: field(raw.label_mode.as_deref(), "label-mode", |s| s.parse::<LabelMode>())?
                .unwrap_or(defaults.label_mode),
            fret_count,
        })
    }
}
