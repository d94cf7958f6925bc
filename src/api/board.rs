//! Static board description
//!
//! Fixed data the host needs to draw the base grid: string labels for the
//! active tuning, the fret count, and the inlay marker positions.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::models::{Tuning, FRET_COUNT};
use crate::wasm_log;

use super::core::STATE;
use super::helpers::serialize;

/// Frets carrying an inlay marker.
pub const MARKER_FRETS: [i32; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];

/// Frets carrying a double marker (the octaves).
pub const DOUBLE_MARKER_FRETS: [i32; 2] = [12, 24];

/// String row the markers are drawn on, centered between the D and G rows.
pub const MARKER_STRING: usize = 2;

/// Fixed description of the base grid for one tuning
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BoardSpec {
    /// Open-string labels, top string first
    pub string_labels: Vec<String>,

    /// Number of fret columns
    pub fret_count: i32,

    /// Frets carrying an inlay marker
    pub marker_frets: Vec<i32>,

    /// Frets carrying a double marker
    pub double_marker_frets: Vec<i32>,

    /// String row the markers are drawn on
    pub marker_string: usize,
}

impl BoardSpec {
    pub fn for_tuning(tuning: Tuning) -> Self {
        BoardSpec {
            string_labels: tuning
                .string_labels()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            fret_count: FRET_COUNT,
            marker_frets: MARKER_FRETS.to_vec(),
            double_marker_frets: DOUBLE_MARKER_FRETS.to_vec(),
            marker_string: MARKER_STRING,
        }
    }
}

/// Static board description for the active tuning
///
/// # Returns
/// A `BoardSpec` the host draws the base grid from
#[wasm_bindgen(js_name = boardSpec)]
pub fn board_spec() -> Result<JsValue, JsValue> {
    wasm_log!("boardSpec called");

    let state = STATE.lock().unwrap();
    serialize(
        &BoardSpec::for_tuning(state.tuning),
        "Board spec serialization error",
    )
}
