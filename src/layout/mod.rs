//! Overlay Layout Engine
//!
//! This module computes the placement of every overlay instance, row, and
//! cell for the current state, generating a DisplayList with all positions,
//! text, and stacking data needed for JavaScript to render DOM elements
//! without any layout calculations.

pub mod display_list;
pub mod engine;
pub mod rows;

pub use display_list::{BgVariant, DisplayList, RenderCell, RenderOverlay, RenderRow};
pub use engine::{LayoutConfig, LayoutEngine};
pub use rows::{OverlayVariant, RowConfig, OVERLAY_SHIFT_FRETS};
