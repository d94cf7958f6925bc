//! Overlay row tables
//!
//! Each overlay variant places one row per string, described by a static
//! table of start offsets and widths. The two variants interleave so their
//! staggered 5- and 7-cell rows tile into the repeating diagonal pattern
//! across the board.

use serde::{Deserialize, Serialize};

use crate::models::Tuning;

/// Global horizontal nudge applied to every row, in fret units.
pub const OVERLAY_SHIFT_FRETS: i32 = 2;

/// Placement of one overlay row: the string it sits on, where its first
/// cell starts relative to the current fret, and how many cells it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowConfig {
    pub string: usize,
    pub start_fret: i32,
    pub num_frets: usize,
}

const fn row(string: usize, start_fret: i32, num_frets: usize) -> RowConfig {
    RowConfig {
        string,
        start_fret,
        num_frets,
    }
}

const PRIMARY_ROWS: [RowConfig; 6] = [
    row(0, -6, 5),
    row(1, -8, 7),
    row(2, -9, 5),
    row(3, -11, 7),
    row(4, -11, 5),
    row(5, -1, 7),
];

const SECONDARY_ROWS: [RowConfig; 6] = [
    row(0, -1, 7),
    row(1, -1, 5),
    row(2, -4, 7),
    row(3, -4, 5),
    row(4, -6, 7),
    row(5, -6, 5),
];

/// The two overlay shapes tiled across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayVariant {
    Primary,
    Secondary,
}

impl OverlayVariant {
    /// Row table for this shape, one entry per string.
    pub fn row_configs(self) -> &'static [RowConfig; 6] {
        match self {
            OverlayVariant::Primary => &PRIMARY_ROWS,
            OverlayVariant::Secondary => &SECONDARY_ROWS,
        }
    }

    /// Stacking order. Secondary instances sit above primary ones.
    pub fn z_index(self) -> i32 {
        match self {
            OverlayVariant::Primary => 999,
            OverlayVariant::Secondary => 1001,
        }
    }
}

/// Tuning-dependent fret shift for a row. All-fourths moves only the top
/// two strings one fret left; every other string keeps its place.
pub fn tuning_shift(tuning: Tuning, string: usize) -> i32 {
    if tuning == Tuning::AllFourths && string <= 1 {
        -1
    } else {
        0
    }
}

/// Combined horizontal shift for a row's fret window.
pub fn total_shift(tuning: Tuning, string: usize) -> i32 {
    OVERLAY_SHIFT_FRETS + tuning_shift(tuning, string)
}
