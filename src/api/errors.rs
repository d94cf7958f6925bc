//! Error types for the API boundary
//!
//! The core stays total over its input domains; the only failures are bad
//! inputs arriving from JavaScript. They are reported here and converted to
//! JsValue strings at the boundary.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::wasm_error;

/// Invalid input from the host
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Key name that is not one of the four arrow keys
    #[error("Unknown arrow key: '{0}' (expected ArrowUp/ArrowDown/ArrowLeft/ArrowRight)")]
    UnknownArrowKey(String),

    /// Tuning id that is not one of the supported tunings
    #[error("Unknown tuning: '{0}' (expected 'standard' or 'allFourths')")]
    UnknownTuning(String),

    /// Cell coordinates outside the board
    #[error("Cell out of range: string {string}, fret {fret}")]
    CellOutOfRange { string: usize, fret: i32 },
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> JsValue {
        let msg = err.to_string();
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    }
}
