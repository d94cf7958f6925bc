//! Note lookup
//!
//! Maps a (string, fret) coordinate to the sounding pitch class under a
//! tuning. Fret numbers wrap into 1..=24 first, so the lookup is total over
//! `i32` and periodic with the two-octave board.

use crate::models::position::wrap_fret;
use crate::models::{PitchClass, Tuning, STRING_COUNT};

/// Pitch class sounding at `string`/`fret` under `tuning`.
///
/// `fret` may be any integer and is normalized into 1..=24 before the
/// lookup. `string` must be a real string index (0..=5).
pub fn note_at(string: usize, fret: i32, tuning: Tuning) -> PitchClass {
    debug_assert!(string < STRING_COUNT, "string index out of range");
    let open = tuning.open_strings()[string].pitch;
    PitchClass::from_semitone(open.semitone() + wrap_fret(fret))
}
