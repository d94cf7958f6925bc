//! Models module for the fretboard visualizer
//!
//! This module contains the core data types the board is computed from:
//! pitch classes, tunings, board coordinates, and major keys.

pub mod key;
pub mod pitch;
pub mod position;
pub mod tuning;

// Re-export commonly used types
pub use key::KeyName;
pub use pitch::PitchClass;
pub use position::{wrap_fret, CellId, FretPosition, FRET_COUNT, STRING_COUNT};
pub use tuning::{OpenString, Tuning};
