//! Navigation state machine
//!
//! The single mutable state behind the API: the anchor position, the
//! unbounded continuous-fret counter that drives overlay tiling, display
//! toggles, and the toggled-cell set that follows the view as it moves.
//! Every transition is total; arrow input can never be rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::{wrap_fret, CellId, FretPosition, Tuning, FRET_COUNT, STRING_COUNT};

/// Starting string (the A string).
pub const INITIAL_STRING: usize = 4;

/// Starting fret; also the origin of the continuous-fret counter.
pub const INITIAL_FRET: i32 = 12;

/// One navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for ArrowKey {
    type Err = String;

    /// Parses the DOM `KeyboardEvent.key` names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowUp" => Ok(ArrowKey::Up),
            "ArrowDown" => Ok(ArrowKey::Down),
            "ArrowLeft" => Ok(ArrowKey::Left),
            "ArrowRight" => Ok(ArrowKey::Right),
            _ => Err(format!("Invalid arrow key: '{}'", s)),
        }
    }
}

/// Complete navigable state of the board.
#[derive(Debug, Clone)]
pub struct FretboardState {
    /// Anchor the overlays are centered on. `current.fret` is always the
    /// wrapped image of `continuous_fret`.
    pub current: FretPosition,
    /// Unbounded counter; left/right move it by 1, up/down by 5.
    pub continuous_fret: i32,
    pub tuning: Tuning,
    /// Show text in the dimmed (non-center) columns too.
    pub show_dimmed_notes: bool,
    /// Label cells with scale degrees instead of note names where possible.
    pub show_degrees: bool,
    /// Flipped by every vertical move; alternates overlay backgrounds.
    pub swap_bg: bool,
    /// Click-toggled cells. Entries flagged off linger until the next
    /// navigation sweep discards them.
    pub toggled: HashMap<CellId, bool>,
}

/// Serializable view of the state handed to the host after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub current: FretPosition,
    pub continuous_fret: i32,
    pub tuning: Tuning,
    pub show_dimmed_notes: bool,
    pub show_degrees: bool,
    pub swap_bg: bool,
    /// Cells currently marked, sorted for deterministic output.
    pub toggled: Vec<CellId>,
}

impl FretboardState {
    pub fn new() -> Self {
        FretboardState {
            current: FretPosition::new(INITIAL_STRING, INITIAL_FRET),
            continuous_fret: INITIAL_FRET,
            tuning: Tuning::Standard,
            show_dimmed_notes: false,
            show_degrees: false,
            swap_bg: false,
            toggled: HashMap::new(),
        }
    }

    /// Apply one arrow command.
    ///
    /// Horizontal arrows move the continuous counter by one fret; vertical
    /// arrows move it by five, step the string (clamped to the board), and
    /// flip the background swap whether or not the string actually moved.
    /// Toggled cells ride along by the deltas the view really moved.
    pub fn navigate(&mut self, key: ArrowKey) {
        let mut desired_string_delta = 0i32;
        let mut fret_delta = 0i32;

        match key {
            ArrowKey::Up => {
                self.continuous_fret += 5;
                desired_string_delta = -1;
                self.swap_bg = !self.swap_bg;
            }
            ArrowKey::Down => {
                self.continuous_fret -= 5;
                desired_string_delta = 1;
                self.swap_bg = !self.swap_bg;
            }
            ArrowKey::Left => {
                self.continuous_fret -= 1;
                fret_delta = -1;
            }
            ArrowKey::Right => {
                self.continuous_fret += 1;
                fret_delta = 1;
            }
        }

        let next_string = (self.current.string as i32 + desired_string_delta)
            .clamp(0, STRING_COUNT as i32 - 1) as usize;
        let actual_string_delta = next_string as i32 - self.current.string as i32;

        self.remap_toggled(actual_string_delta, fret_delta);

        self.current = FretPosition::new(next_string, wrap_fret(self.continuous_fret));
    }

    /// Flip one cell's marker.
    pub fn toggle_cell(&mut self, cell: CellId) {
        let flag = self.toggled.entry(cell).or_insert(false);
        *flag = !*flag;
    }

    /// Cells currently marked, sorted string-major.
    pub fn toggled_cells(&self) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .toggled
            .iter()
            .filter(|&(_, &on)| on)
            .map(|(&cell, _)| cell)
            .collect();
        cells.sort_unstable();
        cells
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            current: self.current,
            continuous_fret: self.continuous_fret,
            tuning: self.tuning,
            show_dimmed_notes: self.show_dimmed_notes,
            show_degrees: self.show_degrees,
            swap_bg: self.swap_bg,
            toggled: self.toggled_cells(),
        }
    }

    /// Shift marked cells by the deltas the view moved, single-step
    /// wrapping the fret and dropping cells pushed off the strings. Only
    /// entries still flagged on survive the rewrite.
    fn remap_toggled(&mut self, string_delta: i32, fret_delta: i32) {
        self.toggled = self
            .toggled
            .iter()
            .filter(|&(_, &on)| on)
            .filter_map(|(cell, _)| {
                let string = cell.string as i32 + string_delta;
                let mut fret = cell.fret + fret_delta;
                if fret < 1 {
                    fret = FRET_COUNT;
                }
                if fret > FRET_COUNT {
                    fret = 1;
                }
                if (0..STRING_COUNT as i32).contains(&string) {
                    Some((CellId::new(string as usize, fret), true))
                } else {
                    None
                }
            })
            .collect();
    }
}

impl Default for FretboardState {
    fn default() -> Self {
        Self::new()
    }
}
