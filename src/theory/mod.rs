//! Music-theory computations
//!
//! Pure functions from board coordinates to display text: note lookup,
//! key estimation, accidental spelling, and scale-degree labels. Nothing
//! in here touches state or the JS boundary.

pub mod degrees;
pub mod estimate;
pub mod notes;
pub mod spelling;

pub use degrees::degree_label;
pub use estimate::{estimate_key, AccidentalStyle, KeyEstimate};
pub use notes::note_at;
pub use spelling::spell;
