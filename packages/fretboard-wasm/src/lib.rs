use serde::Serialize;
use wasm_bindgen::prelude::*;

use fretboard::{
    CagedForm, ChordType, FretboardError, FretboardView, LabelMode, Note, PlaybackStyle, Settings,
    Voicing,
};

#[derive(Serialize)]
struct BindingError {
    kind: &'static str,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Catalog {
    notes: Vec<Note>,
    scales: &'static [fretboard::Scale],
    chord_types: Vec<&'static str>,
    caged_forms: Vec<CagedForm>,
}

fn error_to_binding_error(e: FretboardError) -> BindingError {
    let kind = match &e {
        FretboardError::UnknownNote(_) => "note",
        FretboardError::UnknownChordType(_) => "chordType",
        FretboardError::UnknownCagedForm(_) => "cagedForm",
        FretboardError::UnknownScale(_) => "scale",
        FretboardError::UnknownLabelMode(_) => "labelMode",
        FretboardError::UnknownViewMode(_) => "mode",
        FretboardError::SettingsError(_) | FretboardError::Io { .. } => "settings",
    };
    BindingError {
        kind,
        message: e.to_string(),
    }
}

fn to_js_error(e: FretboardError) -> JsValue {
    let json = serde_json::to_string(&error_to_binding_error(e))
        .unwrap_or_else(|_| r#"{"kind":"internal","message":"unserializable error"}"#.to_string());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, FretboardError> {
    serde_json::to_string(value).map_err(|e| FretboardError::SettingsError(e.to_string()))
}

fn parse_form(form: Option<&str>) -> Result<Option<CagedForm>, FretboardError> {
    form.filter(|f| !f.trim().is_empty())
        .map(|f| f.parse::<CagedForm>())
        .transpose()
}

fn voicing_for(root: &str, chord_type: &str, form: Option<&str>) -> Result<Option<Voicing>, FretboardError> {
    let root: Note = root.parse()?;
    let chord_type: ChordType = chord_type.parse()?;
    Ok(fretboard::resolve_voicing(root, chord_type, parse_form(form)?))
}

fn scale_view_json(root: &str, scale: &str, label_mode: &str, fret_count: u8) -> Result<String, FretboardError> {
    let view = FretboardView::scale(root.parse()?, fretboard::find_scale(scale)?, label_mode.parse()?, fret_count);
    to_json(&view)
}

fn chord_view_json(
    root: &str,
    chord_type: &str,
    form: Option<&str>,
    label_mode: &str,
    fret_count: u8,
) -> Result<String, FretboardError> {
    let view = FretboardView::chord(
        root.parse()?,
        chord_type.parse()?,
        parse_form(form)?,
        label_mode.parse::<LabelMode>()?,
        fret_count,
    );
    to_json(&view)
}

fn diatonic_chords_json(root: &str, scale: &str) -> Result<String, FretboardError> {
    let root: Note = root.parse()?;
    let scale = fretboard::find_scale(scale)?;
    to_json(&fretboard::diatonic_chords(root, scale.intervals))
}

fn chord_playback_json(
    root: &str,
    chord_type: &str,
    form: Option<&str>,
    strum_delay_ms: Option<f64>,
) -> Result<String, FretboardError> {
    let style = match strum_delay_ms {
        Some(delay_ms) => PlaybackStyle::Strum { delay_ms },
        None => PlaybackStyle::Block,
    };
    let events = voicing_for(root, chord_type, form)?
        .map(|voicing| fretboard::chord_playback(&voicing, style))
        .unwrap_or_default();
    to_json(&events)
}

fn catalog() -> Catalog {
    Catalog {
        notes: fretboard::NOTES.to_vec(),
        scales: fretboard::SCALES,
        chord_types: fretboard::CHORD_TYPES.iter().map(|t| t.label()).collect(),
        caged_forms: fretboard::CAGED_FORMS.to_vec(),
    }
}

/// Scale view as JSON: positions, notes and diatonic chords
#[wasm_bindgen]
pub fn scale_view(root: &str, scale: &str, label_mode: &str, fret_count: u8) -> Result<String, JsValue> {
    scale_view_json(root, scale, label_mode, fret_count).map_err(to_js_error)
}

/// Chord view as JSON. Unsupported combinations come back as a view with an
/// `unsupported` content notice rather than an error.
#[wasm_bindgen]
pub fn chord_view(
    root: &str,
    chord_type: &str,
    form: Option<String>,
    label_mode: &str,
    fret_count: u8,
) -> Result<String, JsValue> {
    chord_view_json(root, chord_type, form.as_deref(), label_mode, fret_count).map_err(to_js_error)
}

/// View described by a YAML settings document
#[wasm_bindgen]
pub fn settings_view(yaml: &str) -> Result<String, JsValue> {
    Settings::from_yaml(yaml)
        .and_then(|settings| to_json(&FretboardView::from_settings(&settings)))
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub fn diatonic_chords(root: &str, scale: &str) -> Result<String, JsValue> {
    diatonic_chords_json(root, scale).map_err(to_js_error)
}

/// Voicing as JSON, or `null` when the combination is not in the catalog
#[wasm_bindgen]
pub fn chord_voicing(root: &str, chord_type: &str, form: Option<String>) -> Result<String, JsValue> {
    voicing_for(root, chord_type, form.as_deref())
        .and_then(|voicing| to_json(&voicing))
        .map_err(to_js_error)
}

/// Playback events for a chord; block when `strum_delay_ms` is absent
#[wasm_bindgen]
pub fn chord_playback(
    root: &str,
    chord_type: &str,
    form: Option<String>,
    strum_delay_ms: Option<f64>,
) -> Result<String, JsValue> {
    chord_playback_json(root, chord_type, form.as_deref(), strum_delay_ms).map_err(to_js_error)
}

/// Notes, scales, chord types and CAGED forms for populating menus
#[wasm_bindgen]
pub fn catalog_options() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&catalog()).map_err(JsValue::from)
}
