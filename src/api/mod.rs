//! Fretboard Visualizer WASM API
//!
//! This module provides the JavaScript-facing API for the fretboard
//! visualizer. It includes shared utilities for serialization and error
//! handling, as well as the API functions organized by functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `errors`: Boundary error types for invalid host input
//! - `core`: State lifecycle and mutations (init, navigation, toggles, tuning)
//! - `layout`: Display-list computation from host measurements
//! - `board`: Static board description for the base grid
//! - `preferences`: Tuning persistence in browser storage

pub mod board;
pub mod core;
pub mod errors;
pub mod helpers;
pub mod layout;
pub mod preferences;

// Re-export all public API functions
pub use self::board::board_spec;
pub use self::core::{
    get_state, init_fretboard, navigate, set_show_dimmed_notes, set_show_scale_degrees,
    set_tuning, toggle_cell,
};
pub use self::errors::ApiError;
pub use self::layout::compute_layout;
