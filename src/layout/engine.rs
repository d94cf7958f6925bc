//! Layout computation
//!
//! Turns the current state plus host measurements into a DisplayList. One
//! key estimate is computed per pass, from every center note both overlay
//! shapes currently show, and applied to all cells so simultaneously
//! visible overlays spell consistently.

use serde::{Deserialize, Serialize};

use crate::models::{PitchClass, FRET_COUNT, STRING_COUNT};
use crate::state::{FretboardState, INITIAL_FRET};
use crate::theory::{degree_label, estimate_key, note_at, spell, KeyEstimate};

use super::display_list::{BgVariant, DisplayList, RenderCell, RenderOverlay, RenderRow};
use super::rows::{total_shift, OverlayVariant, RowConfig};

/// Number of overlay instances tiled across the board.
const OVERLAY_INSTANCES: usize = 21;

/// Fret span of one overlay cycle; instances repeat every 12 frets.
const CYCLE_FRETS: i32 = 12;

/// Layout configuration with measurements from JavaScript
///
/// The host measures the starting cell (string 4, fret 12) after fonts and
/// scaling settle and hands the numbers over; nothing here is computed on
/// this side of the boundary. Rows are placed relative to the current
/// string, so after a vertical move the host re-measures `base_y` from the
/// current position's cell. `base_x` is never re-measured; horizontal
/// movement is folded into the anchor as a fret offset.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LayoutConfig {
    /// Measured width of one fret cell in pixels
    pub cell_width: f32,

    /// Measured height of one fret cell in pixels
    pub cell_height: f32,

    /// X of the fret-12 column's center in pixels
    pub base_x: f32,

    /// Y of the current row's center in pixels
    pub base_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            cell_width: 64.0,
            cell_height: 48.0,
            base_x: 0.0,
            base_y: 0.0,
        }
    }
}

/// Computes overlay layout from navigable state
#[derive(Debug, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    /// Create a new layout engine
    pub fn new() -> Self {
        LayoutEngine
    }

    /// Compute the complete layout for one state
    ///
    /// This is the main entry point: it estimates the key from the center
    /// notes of both overlay shapes, then places all 21 tiled instances.
    ///
    /// # Arguments
    /// * `state` - The navigable state to lay out
    /// * `config` - Layout configuration with measurements from JavaScript
    ///
    /// # Returns
    /// DisplayList with all positioning, text, and stacking data
    pub fn compute_layout(&self, state: &FretboardState, config: &LayoutConfig) -> DisplayList {
        let estimate = estimate_key(&self.center_notes(state));

        let effective_fret = (state.continuous_fret - INITIAL_FRET).rem_euclid(FRET_COUNT);
        let anchor_x = config.base_x + effective_fret as f32 * config.cell_width;
        let anchor_y = config.base_y;

        let mut overlays = Vec::with_capacity(OVERLAY_INSTANCES);
        for i in 0..OVERLAY_INSTANCES {
            let cycle_offset = (i / 2) as i32 - 5;
            let variant = if i % 2 == 0 {
                OverlayVariant::Primary
            } else {
                OverlayVariant::Secondary
            };
            let x = anchor_x + (cycle_offset * CYCLE_FRETS) as f32 * config.cell_width;
            overlays.push(self.layout_overlay(
                state,
                config,
                variant,
                cycle_offset,
                x,
                anchor_y,
                &estimate,
            ));
        }

        DisplayList { estimate, overlays }
    }

    /// Lay out one row: pixel anchor plus its cells.
    ///
    /// The row element is centered by the host, so `left` points at the
    /// middle column of the grid: start offset plus half the span.
    pub fn layout_row(
        &self,
        state: &FretboardState,
        config: &LayoutConfig,
        row: &RowConfig,
        anchor_x: f32,
        anchor_y: f32,
        estimate: &KeyEstimate,
    ) -> RenderRow {
        let shift = total_shift(state.tuning, row.string);

        let left = anchor_x
            + ((row.start_fret + shift) as f32 + (row.num_frets as f32 - 1.0) / 2.0)
                * config.cell_width;
        let top = anchor_y
            + (row.string as i32 - state.current.string as i32) as f32 * config.cell_height;

        let mut cells = Vec::with_capacity(row.num_frets);
        for i in 0..row.num_frets {
            let fret_number = state.current.fret + row.start_fret + shift + i as i32;
            if row.string < STRING_COUNT {
                let is_center = i % 2 == 0;
                let pc = note_at(row.string, fret_number, state.tuning);
                cells.push(RenderCell {
                    display_text: cell_text(pc, estimate, state.show_degrees),
                    fret_number,
                    is_center,
                    is_empty: false,
                    show_text: is_center || state.show_dimmed_notes,
                });
            } else {
                cells.push(RenderCell {
                    display_text: String::new(),
                    fret_number,
                    is_center: false,
                    is_empty: true,
                    show_text: false,
                });
            }
        }

        RenderRow {
            string: row.string,
            left,
            top,
            cells,
        }
    }

    fn layout_overlay(
        &self,
        state: &FretboardState,
        config: &LayoutConfig,
        variant: OverlayVariant,
        cycle_offset: i32,
        x: f32,
        y: f32,
        estimate: &KeyEstimate,
    ) -> RenderOverlay {
        let rows = variant
            .row_configs()
            .iter()
            .map(|row| self.layout_row(state, config, row, x, y, estimate))
            .collect();

        RenderOverlay {
            variant,
            cycle_offset,
            bg_variant: bg_variant_for(variant, state.swap_bg),
            z_index: variant.z_index(),
            rows,
        }
    }

    /// Every center-column note both shapes currently show; the estimation
    /// input. Tiled instances repeat the same content, so one pass over the
    /// two shapes covers everything visible.
    fn center_notes(&self, state: &FretboardState) -> Vec<PitchClass> {
        let mut notes = Vec::new();
        for variant in [OverlayVariant::Primary, OverlayVariant::Secondary] {
            for row in variant.row_configs() {
                let shift = total_shift(state.tuning, row.string);
                for i in (0..row.num_frets).step_by(2) {
                    let fret_number = state.current.fret + row.start_fret + shift + i as i32;
                    notes.push(note_at(row.string, fret_number, state.tuning));
                }
            }
        }
        notes
    }
}

fn bg_variant_for(variant: OverlayVariant, swapped: bool) -> BgVariant {
    match (variant, swapped) {
        (OverlayVariant::Primary, false) | (OverlayVariant::Secondary, true) => BgVariant::A,
        _ => BgVariant::B,
    }
}

fn cell_text(pc: PitchClass, estimate: &KeyEstimate, show_degrees: bool) -> String {
    if show_degrees {
        if let Some(degree) = degree_label(pc, estimate.display_key) {
            return degree.to_string();
        }
    }
    spell(pc, estimate.display_key, estimate.accidental_style).to_string()
}
