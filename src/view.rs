//! # Fretboard Views
//!
//! Combines a selection (root, scale or chord, CAGED form, label mode) into
//! everything a front end needs to draw one screen: highlighted positions,
//! muted strings and the derived scale or chord details.
//!
//! ## Related Modules
//! - `config` - Settings a view can be built from
//! - `render` - Text output of a view
//! - `neck` - Position and label helpers used here

use serde::Serialize;

use crate::caged::{transpose_caged_form, CagedForm};
use crate::chord::{lookup_voicing, ChordType, Voicing};
use crate::config::{Settings, ViewMode};
use crate::diatonic::{diatonic_chords, DiatonicChord};
use crate::neck::{
    chord_tones, scale_positions, voicing_positions, ChordTone, FretPosition, LabelMode,
};
use crate::note::{Note, STANDARD_TUNING, STRING_COUNT};
use crate::scale::{scale_notes, Scale};

/// Voicing for a chord selection: the CAGED shape when a form is chosen,
/// otherwise the catalog voicing.
///
/// `None` means the combination is not supported and the caller should say
/// so instead of drawing a chord.
pub fn resolve_voicing(root: Note, chord_type: ChordType, form: Option<CagedForm>) -> Option<Voicing> {
    match form {
        Some(form) => transpose_caged_form(form, chord_type, root),
        None => lookup_voicing(root, chord_type),
    }
}

/// Details specific to what the view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ViewContent {
    #[serde(rename_all = "camelCase")]
    Scale {
        notes: Vec<Note>,
        diatonic_chords: Vec<DiatonicChord>,
    },
    Chord {
        voicing: Voicing,
        tones: Vec<ChordTone>,
    },
    Unsupported {
        notice: String,
    },
}

/// One screen of the fretboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretboardView {
    pub root: Note,
    pub title: String,
    pub label_mode: LabelMode,
    pub fret_count: u8,
    pub positions: Vec<FretPosition>,
    pub muted: [bool; STRING_COUNT],
    pub content: ViewContent,
}

impl FretboardView {
    /// Every occurrence of the scale's notes up to `fret_count`.
    pub fn scale(root: Note, scale: &Scale, label_mode: LabelMode, fret_count: u8) -> FretboardView {
        FretboardView {
            root,
            title: format!("{} {}", root, scale.name),
            label_mode,
            fret_count,
            positions: scale_positions(&STANDARD_TUNING, root, scale.intervals, fret_count),
            muted: [false; STRING_COUNT],
            content: ViewContent::Scale {
                notes: scale_notes(root, scale.intervals),
                diatonic_chords: diatonic_chords(root, scale.intervals),
            },
        }
    }

    /// A single chord voicing, or an empty neck with a notice when the
    /// combination is missing from the catalog.
    ///
    /// The fret range grows to fit voicings shifted past `fret_count`.
    pub fn chord(
        root: Note,
        chord_type: ChordType,
        form: Option<CagedForm>,
        label_mode: LabelMode,
        fret_count: u8,
    ) -> FretboardView {
        let title = match form {
            Some(form) => format!("{} {} - {} form", root, chord_type, form),
            None => format!("{} {}", root, chord_type),
        };

        let Some(voicing) = resolve_voicing(root, chord_type, form) else {
            let notice = match form {
                Some(form) => format!("{} form x {} is not supported", form, chord_type),
                None => format!("No voicing data for {} {}", root, chord_type),
            };
            return FretboardView {
                root,
                title,
                label_mode,
                fret_count,
                positions: Vec::new(),
                muted: [false; STRING_COUNT],
                content: ViewContent::Unsupported { notice },
            };
        };

        let highest = voicing.highest_fret();
        if highest > fret_count {
            log::warn!(
                "{} reaches fret {}, beyond the {} frets shown; extending the range",
                title,
                highest,
                fret_count
            );
        }

        let mut muted = [false; STRING_COUNT];
        for (string, is_muted) in muted.iter_mut().enumerate() {
            *is_muted = voicing.is_muted(string);
        }

        FretboardView {
            root,
            title,
            label_mode,
            fret_count: fret_count.max(highest),
            positions: voicing_positions(&STANDARD_TUNING, &voicing, root),
            muted,
            content: ViewContent::Chord {
                tones: chord_tones(&STANDARD_TUNING, &voicing, root),
                voicing,
            },
        }
    }

    pub fn from_settings(settings: &Settings) -> FretboardView {
        match settings.mode {
            ViewMode::Scale => FretboardView::scale(
                settings.root,
                settings.scale,
                settings.label_mode,
                settings.fret_count,
            ),
            ViewMode::Chord => FretboardView::chord(
                settings.root,
                settings.chord_type,
                settings.caged_form,
                settings.label_mode,
                settings.fret_count,
            ),
        }
    }

    /// The position drawn at `string`/`fret`, if any.
    pub fn position_at(&self, string: usize, fret: u8) -> Option<&FretPosition> {
        self.positions
            .iter()
            .find(|position| position.string == string && position.fret == fret)
    }
}
