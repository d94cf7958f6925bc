//! Tuning table
//!
//! Static lookup of open-string pitches per supported tuning. String index 0
//! is the highest-pitched (top) string, index 5 the lowest. The octave is
//! part of the tuning definition but only the pitch class feeds note math.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch::PitchClass;

/// One open string of a tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenString {
    pub pitch: PitchClass,
    pub octave: i8,
}

/// Supported tunings. The string identifiers double as the persisted
/// preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tuning {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "allFourths")]
    AllFourths,
}

/// Standard tuning, high E to low E.
const STANDARD_STRINGS: [OpenString; 6] = [
    OpenString { pitch: PitchClass::E, octave: 4 },
    OpenString { pitch: PitchClass::B, octave: 3 },
    OpenString { pitch: PitchClass::G, octave: 3 },
    OpenString { pitch: PitchClass::D, octave: 3 },
    OpenString { pitch: PitchClass::A, octave: 2 },
    OpenString { pitch: PitchClass::E, octave: 2 },
];

/// All-fourths tuning, high F to low E.
const ALL_FOURTHS_STRINGS: [OpenString; 6] = [
    OpenString { pitch: PitchClass::F, octave: 4 },
    OpenString { pitch: PitchClass::C, octave: 4 },
    OpenString { pitch: PitchClass::G, octave: 3 },
    OpenString { pitch: PitchClass::D, octave: 3 },
    OpenString { pitch: PitchClass::A, octave: 2 },
    OpenString { pitch: PitchClass::E, octave: 2 },
];

impl Tuning {
    /// Persisted identifier for this tuning.
    pub fn as_str(self) -> &'static str {
        match self {
            Tuning::Standard => "standard",
            Tuning::AllFourths => "allFourths",
        }
    }

    /// Open strings from the top (highest) string down.
    pub fn open_strings(self) -> &'static [OpenString; 6] {
        match self {
            Tuning::Standard => &STANDARD_STRINGS,
            Tuning::AllFourths => &ALL_FOURTHS_STRINGS,
        }
    }

    /// Open-string note names, top to bottom, for the host's label column.
    pub fn string_labels(self) -> [&'static str; 6] {
        self.open_strings().map(|s| s.pitch.as_str())
    }

    /// Resolve a stored preference value. Anything other than a known
    /// identifier (including absence) falls back to standard tuning.
    pub fn from_preference(value: Option<&str>) -> Tuning {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or(Tuning::Standard)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::Standard
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tuning {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Tuning::Standard),
            "allFourths" => Ok(Tuning::AllFourths),
            _ => Err(format!(
                "Invalid tuning: '{}'. Expected 'standard' or 'allFourths'",
                s
            )),
        }
    }
}
