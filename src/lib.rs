//! Fretboard Visualizer WASM Module
//!
//! This is the computation core of an interactive guitar-fretboard
//! visualizer. It owns the navigation state machine, the note and key
//! math, and the overlay layout engine; a JavaScript host renders the
//! display list it produces.

pub mod api;
pub mod layout;
pub mod models;
pub mod state;
pub mod theory;

// Re-export commonly used types
pub use models::{CellId, FretPosition, KeyName, PitchClass, Tuning};
pub use state::{ArrowKey, FretboardState, StateSnapshot};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Fretboard visualizer WASM module initialized");
}
