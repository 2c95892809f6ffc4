//! # CAGED Shapes
//!
//! Five open-position reference shapes (C, A, G, E, D) per chord type, each
//! moved up the neck to reach any root. A shape records the root it produces
//! when played as written; transposing shifts every played fret upward by the
//! distance from that root to the target.
//!
//! Shapes only exist for major, minor, 7, m7 and maj7. Any other chord type
//! reports no shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chord::{voicing, ChordType, Voicing};
use crate::error::FretboardError;
use crate::note::{Note, STRING_COUNT};

/// The open chord a movable shape is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CagedForm {
    C,
    A,
    G,
    E,
    D,
}

/// Forms in CAGED order.
pub const CAGED_FORMS: [CagedForm; 5] = [
    CagedForm::C,
    CagedForm::A,
    CagedForm::G,
    CagedForm::E,
    CagedForm::D,
];

impl CagedForm {
    pub const fn name(self) -> &'static str {
        match self {
            CagedForm::C => "C",
            CagedForm::A => "A",
            CagedForm::G => "G",
            CagedForm::E => "E",
            CagedForm::D => "D",
        }
    }
}

impl fmt::Display for CagedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CagedForm {
    type Err = FretboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CAGED_FORMS
            .iter()
            .copied()
            .find(|form| form.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FretboardError::UnknownCagedForm(trimmed.to_string()))
    }
}

/// An open-position template and the root it sounds when unshifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CagedShape {
    pub form: CagedForm,
    pub chord_type: ChordType,
    pub base_root: Note,
    pub voicing: Voicing,
}

const fn shape(
    form: CagedForm,
    chord_type: ChordType,
    base_root: Note,
    frets: [i8; STRING_COUNT],
    fingers: [u8; STRING_COUNT],
) -> CagedShape {
    CagedShape { form, chord_type, base_root, voicing: voicing(frets, fingers) }
}

static CAGED_SHAPES: &[CagedShape] = &[
    // C form
    shape(CagedForm::C, ChordType::Major, Note::C, [-1, 3, 2, 0, 1, 0], [0, 3, 2, 0, 1, 0]),
    shape(CagedForm::C, ChordType::Minor, Note::C, [-1, 3, 1, 0, 1, 3], [0, 3, 1, 0, 2, 4]),
    shape(CagedForm::C, ChordType::Seventh, Note::C, [-1, 3, 2, 3, 1, 0], [0, 3, 2, 4, 1, 0]),
    shape(CagedForm::C, ChordType::MinorSeventh, Note::C, [-1, 3, 1, 3, 1, 3], [0, 2, 1, 3, 1, 4]),
    shape(CagedForm::C, ChordType::MajorSeventh, Note::C, [-1, 3, 2, 0, 0, 0], [0, 3, 2, 0, 0, 0]),

    // A form
    shape(CagedForm::A, ChordType::Major, Note::A, [-1, 0, 2, 2, 2, 0], [0, 0, 1, 2, 3, 0]),
    shape(CagedForm::A, ChordType::Minor, Note::A, [-1, 0, 2, 2, 1, 0], [0, 0, 2, 3, 1, 0]),
    shape(CagedForm::A, ChordType::Seventh, Note::A, [-1, 0, 2, 0, 2, 0], [0, 0, 2, 0, 3, 0]),
    shape(CagedForm::A, ChordType::MinorSeventh, Note::A, [-1, 0, 2, 0, 1, 0], [0, 0, 2, 0, 1, 0]),
    shape(CagedForm::A, ChordType::MajorSeventh, Note::A, [-1, 0, 2, 1, 2, 0], [0, 0, 2, 1, 3, 0]),

    // G form
    shape(CagedForm::G, ChordType::Major, Note::G, [3, 2, 0, 0, 0, 3], [2, 1, 0, 0, 0, 3]),
    shape(CagedForm::G, ChordType::Minor, Note::G, [3, 5, 5, 3, 3, 3], [1, 3, 4, 1, 1, 1]),
    shape(CagedForm::G, ChordType::Seventh, Note::G, [3, 2, 0, 0, 0, 1], [3, 2, 0, 0, 0, 1]),
    shape(CagedForm::G, ChordType::MinorSeventh, Note::G, [3, 5, 3, 3, 3, 3], [1, 3, 1, 1, 1, 1]),
    shape(CagedForm::G, ChordType::MajorSeventh, Note::G, [3, 2, 0, 0, 0, 2], [3, 1, 0, 0, 0, 2]),

    // E form
    shape(CagedForm::E, ChordType::Major, Note::E, [0, 2, 2, 1, 0, 0], [0, 2, 3, 1, 0, 0]),
    shape(CagedForm::E, ChordType::Minor, Note::E, [0, 2, 2, 0, 0, 0], [0, 2, 3, 0, 0, 0]),
    shape(CagedForm::E, ChordType::Seventh, Note::E, [0, 2, 0, 1, 0, 0], [0, 2, 0, 1, 0, 0]),
    shape(CagedForm::E, ChordType::MinorSeventh, Note::E, [0, 2, 0, 0, 0, 0], [0, 2, 0, 0, 0, 0]),
    shape(CagedForm::E, ChordType::MajorSeventh, Note::E, [0, 2, 1, 1, 0, 0], [0, 3, 1, 2, 0, 0]),

    // D form
    shape(CagedForm::D, ChordType::Major, Note::D, [-1, -1, 0, 2, 3, 2], [0, 0, 0, 1, 3, 2]),
    shape(CagedForm::D, ChordType::Minor, Note::D, [-1, -1, 0, 2, 3, 1], [0, 0, 0, 2, 3, 1]),
    shape(CagedForm::D, ChordType::Seventh, Note::D, [-1, -1, 0, 2, 1, 2], [0, 0, 0, 2, 1, 3]),
    shape(CagedForm::D, ChordType::MinorSeventh, Note::D, [-1, -1, 0, 2, 1, 1], [0, 0, 0, 2, 1, 1]),
    shape(CagedForm::D, ChordType::MajorSeventh, Note::D, [-1, -1, 0, 2, 2, 2], [0, 0, 0, 1, 2, 3]),
];

/// Reference shape for `form` and `chord_type`, if one exists.
pub fn caged_shape(form: CagedForm, chord_type: ChordType) -> Option<&'static CagedShape> {
    CAGED_SHAPES
        .iter()
        .find(|shape| shape.form == form && shape.chord_type == chord_type)
}

/// Move the `form` shape for `chord_type` so that it sounds `target_root`.
///
/// The shift is always upward, between 0 and 11 frets, so shapes whose base
/// root sits just above the target end up high on the neck. Muted strings
/// stay muted and played strings keep their fingers.
///
/// Returns `None` when the form has no shape for this chord type.
pub fn transpose_caged_form(
    form: CagedForm,
    chord_type: ChordType,
    target_root: Note,
) -> Option<Voicing> {
    let Some(shape) = caged_shape(form, chord_type) else {
        log::debug!("no {} form shape for {}", form, chord_type);
        return None;
    };

    let shift = target_root.interval_from(shape.base_root) as u8;
    if shift == 0 {
        return Some(shape.voicing);
    }

    log::debug!(
        "shifting {} form {} from {} to {} by {} frets",
        form,
        chord_type,
        shape.base_root,
        target_root,
        shift
    );

    let source = &shape.voicing;
    let mut frets = [None; STRING_COUNT];
    let mut fingers = [0; STRING_COUNT];
    for string in 0..STRING_COUNT {
        if let Some(fret) = source.frets[string] {
            frets[string] = Some(fret + shift);
            fingers[string] = source.fingers[string];
        }
    }

    Some(Voicing { frets, fingers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::CHORD_TYPES;
    use crate::note::NOTES;

    #[test]
    fn test_e_form_major_to_g() {
        let v = transpose_caged_form(CagedForm::E, ChordType::Major, Note::G).unwrap();
        assert_eq!(v.frets, [Some(3), Some(5), Some(5), Some(4), Some(3), Some(3)]);
        assert_eq!(v.fingers, [0, 2, 3, 1, 0, 0]);
    }

    #[test]
    fn test_unshifted_shape_is_returned_as_is() {
        let v = transpose_caged_form(CagedForm::C, ChordType::Major, Note::C).unwrap();
        assert_eq!(v, caged_shape(CagedForm::C, ChordType::Major).unwrap().voicing);
    }

    #[test]
    fn test_a_form_minor_to_c_keeps_muted_string() {
        let v = transpose_caged_form(CagedForm::A, ChordType::Minor, Note::C).unwrap();
        assert_eq!(v.frets, [None, Some(3), Some(5), Some(5), Some(4), Some(3)]);
        assert_eq!(v.fingers, [0, 0, 2, 3, 1, 0]);
    }

    #[test]
    fn test_shift_is_always_upward() {
        // C# sits one semitone below D, so the D form climbs 11 frets
        let v = transpose_caged_form(CagedForm::D, ChordType::Major, Note::CSharp).unwrap();
        assert_eq!(v.frets, [None, None, Some(11), Some(13), Some(14), Some(13)]);
    }

    #[test]
    fn test_missing_shape() {
        assert_eq!(transpose_caged_form(CagedForm::G, ChordType::Add9, Note::C), None);
        assert_eq!(transpose_caged_form(CagedForm::E, ChordType::DiminishedSeventh, Note::A), None);
        assert!(caged_shape(CagedForm::D, ChordType::Sus4).is_none());
    }

    #[test]
    fn test_transposition_preserves_mutes_and_fingers() {
        for shape in CAGED_SHAPES {
            for root in NOTES {
                let v = transpose_caged_form(shape.form, shape.chord_type, root).unwrap();
                let shift = root.interval_from(shape.base_root) as u8;
                for string in 0..STRING_COUNT {
                    match shape.voicing.frets[string] {
                        None => {
                            assert_eq!(v.frets[string], None);
                            assert_eq!(v.fingers[string], 0);
                        }
                        Some(fret) => {
                            assert_eq!(v.frets[string], Some(fret + shift));
                            assert_eq!(v.fingers[string], shape.voicing.fingers[string]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_every_form_covers_the_open_chord_types() {
        for form in CAGED_FORMS {
            for chord_type in CHORD_TYPES {
                let expected = matches!(
                    chord_type,
                    ChordType::Major
                        | ChordType::Minor
                        | ChordType::Seventh
                        | ChordType::MinorSeventh
                        | ChordType::MajorSeventh
                );
                assert_eq!(caged_shape(form, chord_type).is_some(), expected);
            }
        }
    }

    #[test]
    fn test_parse_form() {
        assert_eq!("e".parse::<CagedForm>().unwrap(), CagedForm::E);
        assert_eq!("G".parse::<CagedForm>().unwrap(), CagedForm::G);
        assert!(matches!("F".parse::<CagedForm>(), Err(FretboardError::UnknownCagedForm(_))));
    }
}
