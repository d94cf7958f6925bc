//! Scale-degree labels
//!
//! Optional cell text showing where a note sits in the display key instead
//! of its name.

use crate::models::{KeyName, PitchClass};

const DEGREE_LABELS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

/// Degree of `pc` within `display_key`, as display text ("1" through "7").
/// Non-diatonic pitch classes have no degree; callers fall back to the
/// spelled note name.
pub fn degree_label(pc: PitchClass, display_key: KeyName) -> Option<&'static str> {
    display_key.scale_position(pc).map(|i| DEGREE_LABELS[i])
}
