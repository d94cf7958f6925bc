//! Layout API
//!
//! The one call the host makes per render pass: measurements in, display
//! list out. Everything position-dependent (overlay tiling, row offsets,
//! cell text and spelling) is resolved here so JavaScript only paints.

use wasm_bindgen::prelude::*;

use crate::layout::{LayoutConfig, LayoutEngine};
use crate::wasm_log;

use super::core::STATE;
use super::helpers::{deserialize, serialize};

/// Compute the display list for the current state
///
/// # Parameters
/// - `config`: `LayoutConfig` with the host's DOM measurements (cell size
///   and the base x/y pixel centers)
///
/// # Returns
/// A `DisplayList` positioning all overlay instances, ready to paint
#[wasm_bindgen(js_name = computeLayout)]
pub fn compute_layout(config: JsValue) -> Result<JsValue, JsValue> {
    wasm_log!("computeLayout called");

    let config: LayoutConfig = deserialize(config, "Layout config deserialization error")?;

    let state = STATE.lock().unwrap();
    let display_list = LayoutEngine::new().compute_layout(&state, &config);
    wasm_log!(
        "  Display list ready: {} overlays, key estimate {}",
        display_list.overlays.len(),
        display_list.estimate.key
    );

    serialize(&display_list, "Display list serialization error")
}
