//! Core state API
//!
//! JavaScript-facing operations on the WASM-owned fretboard state. Every UI
//! event maps to one call here: the state mutex is locked, one full
//! transition is applied, and the updated snapshot is returned for the host
//! to reconcile against.

use lazy_static::lazy_static;
use std::sync::Mutex;
use wasm_bindgen::prelude::*;

use crate::models::{CellId, Tuning};
use crate::state::{ArrowKey, FretboardState};
use crate::{wasm_info, wasm_log};

use super::errors::ApiError;
use super::helpers::serialize;
use super::preferences;

// WASM-owned fretboard state (canonical source of truth)
lazy_static! {
    pub(crate) static ref STATE: Mutex<FretboardState> = Mutex::new(FretboardState::new());
}

/// Reset to the initial state and apply the persisted tuning preference
///
/// # Returns
/// The starting state snapshot
#[wasm_bindgen(js_name = initFretboard)]
pub fn init_fretboard() -> Result<JsValue, JsValue> {
    wasm_info!("initFretboard called");

    let mut state = STATE.lock().unwrap();
    *state = FretboardState::new();

    if let Some(tuning) = preferences::load_tuning() {
        wasm_log!("  Restored persisted tuning: {}", tuning);
        state.tuning = tuning;
    }

    serialize(&state.snapshot(), "State serialization error")
}

/// Apply one arrow-key navigation transition
///
/// # Parameters
/// - `key`: DOM key name (`ArrowUp`, `ArrowDown`, `ArrowLeft`, `ArrowRight`)
///
/// # Returns
/// The state snapshot after the transition
#[wasm_bindgen(js_name = navigate)]
pub fn navigate(key: &str) -> Result<JsValue, JsValue> {
    wasm_log!("navigate called: key={}", key);

    let arrow: ArrowKey = key
        .parse()
        .map_err(|_| ApiError::UnknownArrowKey(key.to_string()))?;

    let mut state = STATE.lock().unwrap();
    state.navigate(arrow);
    wasm_log!(
        "  Position now string={}, fret={} (continuous {})",
        state.current.string,
        state.current.fret,
        state.continuous_fret
    );

    serialize(&state.snapshot(), "State serialization error")
}

/// Flip the marker on one cell
///
/// # Parameters
/// - `string`: string index, 0 (top) to 5 (bottom)
/// - `fret`: displayed fret number, 1 to 24
///
/// # Returns
/// The state snapshot after the flip
#[wasm_bindgen(js_name = toggleCell)]
pub fn toggle_cell(string: usize, fret: i32) -> Result<JsValue, JsValue> {
    wasm_log!("toggleCell called: string={}, fret={}", string, fret);

    let cell = CellId::new(string, fret);
    if !cell.on_board() {
        return Err(ApiError::CellOutOfRange { string, fret }.into());
    }

    let mut state = STATE.lock().unwrap();
    state.toggle_cell(cell);

    serialize(&state.snapshot(), "State serialization error")
}

/// Switch tunings and persist the choice
///
/// Unlike the startup preference read, an explicit switch rejects unknown
/// ids instead of falling back.
///
/// # Parameters
/// - `tuning`: tuning id (`standard` or `allFourths`)
///
/// # Returns
/// The state snapshot under the new tuning
#[wasm_bindgen(js_name = setTuning)]
pub fn set_tuning(tuning: &str) -> Result<JsValue, JsValue> {
    wasm_info!("setTuning called: tuning={}", tuning);

    let parsed: Tuning = tuning
        .parse()
        .map_err(|_| ApiError::UnknownTuning(tuning.to_string()))?;

    let mut state = STATE.lock().unwrap();
    state.tuning = parsed;
    preferences::store_tuning(parsed);

    serialize(&state.snapshot(), "State serialization error")
}

/// Show or hide the text in the dimmed (non-center) overlay columns
#[wasm_bindgen(js_name = setShowDimmedNotes)]
pub fn set_show_dimmed_notes(show: bool) -> Result<JsValue, JsValue> {
    wasm_log!("setShowDimmedNotes called: show={}", show);

    let mut state = STATE.lock().unwrap();
    state.show_dimmed_notes = show;

    serialize(&state.snapshot(), "State serialization error")
}

/// Label diatonic cells with scale degrees instead of note names
#[wasm_bindgen(js_name = setShowScaleDegrees)]
pub fn set_show_scale_degrees(show: bool) -> Result<JsValue, JsValue> {
    wasm_log!("setShowScaleDegrees called: show={}", show);

    let mut state = STATE.lock().unwrap();
    state.show_degrees = show;

    serialize(&state.snapshot(), "State serialization error")
}

/// Current state snapshot without any mutation
#[wasm_bindgen(js_name = getState)]
pub fn get_state() -> Result<JsValue, JsValue> {
    let state = STATE.lock().unwrap();
    serialize(&state.snapshot(), "State serialization error")
}
