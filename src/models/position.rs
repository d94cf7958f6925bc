//! Board geometry primitives
//!
//! String and fret coordinates shared by navigation, layout, and the toggle
//! overlay. Strings are indexed 0..=5 top to bottom; display frets live in
//! the wrapped range 1..=24.

use serde::{Deserialize, Serialize};

/// Number of strings on the board.
pub const STRING_COUNT: usize = 6;

/// Number of frets before the board wraps.
pub const FRET_COUNT: i32 = 24;

/// Normalize an arbitrary fret number into the wrapped range 1..=24.
///
/// Fret 25 wraps to 1, fret 0 wraps to 24, and so on in either direction.
/// Total over all of `i32`; the subtraction widens so the extremes cannot
/// overflow.
pub fn wrap_fret(fret: i32) -> i32 {
    ((fret as i64 - 1).rem_euclid(FRET_COUNT as i64) + 1) as i32
}

/// The anchor position: which string/fret the overlay stack is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretPosition {
    pub string: usize,
    /// Wrapped display fret in 1..=24.
    pub fret: i32,
}

impl FretPosition {
    pub fn new(string: usize, fret: i32) -> Self {
        FretPosition { string, fret }
    }
}

/// Identity of a single toggleable cell on the board.
///
/// Ordered so collections of cells serialize deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellId {
    pub string: usize,
    pub fret: i32,
}

impl CellId {
    pub fn new(string: usize, fret: i32) -> Self {
        CellId { string, fret }
    }

    /// Whether the cell still lies on the board after a remap.
    pub fn on_board(&self) -> bool {
        self.string < STRING_COUNT && self.fret >= 1 && self.fret <= FRET_COUNT
    }
}
