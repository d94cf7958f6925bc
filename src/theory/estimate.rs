//! Key estimation
//!
//! Scores every candidate major key against the notes currently highlighted
//! and keeps the best fit. One estimate is computed per layout pass and
//! drives the key readout and all accidental spelling for that pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{KeyName, PitchClass};

/// Whether accidentals outside the Gb/Db special cases render as sharps or
/// flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalStyle {
    Sharp,
    Flat,
}

impl fmt::Display for AccidentalStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccidentalStyle::Sharp => write!(f, "sharp"),
            AccidentalStyle::Flat => write!(f, "flat"),
        }
    }
}

/// Result of one estimation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Best-fitting candidate key.
    pub key: KeyName,
    /// Key shown to the user. F# and C# fold to Gb and Db.
    pub display_key: KeyName,
    /// Spelling style, from the candidate key's circle-of-fifths side.
    pub accidental_style: AccidentalStyle,
}

impl KeyEstimate {
    fn from_key(key: KeyName) -> Self {
        KeyEstimate {
            key,
            display_key: key.display_key(),
            accidental_style: if key.is_sharp_key() {
                AccidentalStyle::Sharp
            } else {
                AccidentalStyle::Flat
            },
        }
    }
}

/// Pick the major key containing the most of `notes`.
///
/// Candidates are scored in `KeyName::ALL` order and only a strictly
/// greater count takes the lead, so earlier candidates keep ties. An empty
/// input lands on C major with sharp spelling.
pub fn estimate_key(notes: &[PitchClass]) -> KeyEstimate {
    let mut best = KeyName::C;
    let mut best_count = -1i32;

    for key in KeyName::ALL {
        let count = notes.iter().filter(|&&n| key.contains_pitch(n)).count() as i32;
        if count > best_count {
            best = key;
            best_count = count;
        }
    }

    KeyEstimate::from_key(best)
}
