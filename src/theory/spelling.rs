//! Accidental spelling
//!
//! Display-only respelling of the canonical sharp note names. The Gb and Db
//! display keys use fixed tables; every other key spells by the estimate's
//! circle-of-fifths side. Spelling never changes which pitch class a cell
//! holds, only its text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{KeyName, PitchClass};

use super::estimate::AccidentalStyle;

/// Respellings for the Gb major display key. Note the E → F fold: E natural
/// renders as F here, not Fb.
static GB_SPELLINGS: Lazy<HashMap<PitchClass, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (PitchClass::Fs, "Gb"),
        (PitchClass::Gs, "Ab"),
        (PitchClass::As, "Bb"),
        (PitchClass::B, "Cb"),
        (PitchClass::Cs, "Db"),
        (PitchClass::Ds, "Eb"),
        (PitchClass::E, "F"),
    ])
});

/// Respellings for the Db major display key.
static DB_SPELLINGS: Lazy<HashMap<PitchClass, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (PitchClass::Cs, "Db"),
        (PitchClass::Ds, "Eb"),
        (PitchClass::Fs, "Gb"),
        (PitchClass::Gs, "Ab"),
        (PitchClass::As, "Bb"),
    ])
});

/// Spelled display text for a pitch class under the current estimate.
pub fn spell(pc: PitchClass, display_key: KeyName, style: AccidentalStyle) -> &'static str {
    match display_key {
        KeyName::GFlat => GB_SPELLINGS.get(&pc).copied().unwrap_or_else(|| pc.as_str()),
        KeyName::DFlat => DB_SPELLINGS.get(&pc).copied().unwrap_or_else(|| pc.as_str()),
        _ => match style {
            AccidentalStyle::Flat => pc.flat_spelling(),
            AccidentalStyle::Sharp => pc.as_str(),
        },
    }
}
