//! Display List for Overlay Rendering
//!
//! This module defines the output structure returned from the layout engine
//! to JavaScript. The DisplayList contains all pre-calculated positions,
//! cell text, and stacking data needed for JavaScript to render DOM elements
//! without any layout calculations.

use serde::{Deserialize, Serialize};

use super::rows::OverlayVariant;
use crate::theory::KeyEstimate;

/// Top-level display list containing all rendering information
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DisplayList {
    /// Key estimate for this pass; also drives the host's key readout
    pub estimate: KeyEstimate,

    /// All overlay instances, ordered by instance index
    pub overlays: Vec<RenderOverlay>,
}

/// Which of the two alternating background colors an overlay uses
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BgVariant {
    A,
    B,
}

/// One overlay instance with its six positioned rows
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderOverlay {
    /// Shape of this instance
    pub variant: OverlayVariant,

    /// Which 12-fret cycle the instance belongs to (0 = the current one)
    pub cycle_offset: i32,

    /// Background selection after any swap
    pub bg_variant: BgVariant,

    /// CSS stacking order
    pub z_index: i32,

    /// Rows, one per string, top to bottom
    pub rows: Vec<RenderRow>,
}

/// A single positioned row of cells
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderRow {
    /// String index this row sits on
    pub string: usize,

    /// X of the row's center in pixels (the host centers the element on it)
    pub left: f32,

    /// Y of the row's center in pixels
    pub top: f32,

    /// Cells left to right
    pub cells: Vec<RenderCell>,
}

/// A single cell with its display text
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RenderCell {
    /// Text shown in the cell: spelled note name, or scale degree when the
    /// degree toggle is on and the note is diatonic
    pub display_text: String,

    /// Fret number this cell represents (before wrapping)
    pub fret_number: i32,

    /// Whether this is an emphasized center column
    pub is_center: bool,

    /// Off-board filler cell; renders blank
    pub is_empty: bool,

    /// Whether the text is visible under the dimmed-notes setting
    pub show_text: bool,
}
