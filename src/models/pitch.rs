//! Pitch-class representation
//!
//! A pitch class is one of the 12 semitone names, octave-agnostic. The
//! canonical spelling is sharp-based (C, C#, D, ...); flat and boundary
//! enharmonic spellings (Db, E#, Cb, ...) are display-only transforms and
//! never a distinct identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 12 canonical pitch classes, declared in semitone order (C = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl PitchClass {
    /// All pitch classes in semitone order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Semitones above C (0..=11).
    pub fn semitone(self) -> i32 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Pitch class for an arbitrary semitone count, wrapping modulo 12.
    /// Total over all integers, including negatives.
    pub fn from_semitone(semitones: i32) -> PitchClass {
        PitchClass::ALL[semitones.rem_euclid(12) as usize]
    }

    /// Canonical (sharp-spelled) name.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling for the five accidentals; naturals spell themselves.
    pub fn flat_spelling(self) -> &'static str {
        match self {
            PitchClass::Cs => "Db",
            PitchClass::Ds => "Eb",
            PitchClass::Fs => "Gb",
            PitchClass::Gs => "Ab",
            PitchClass::As => "Bb",
            other => other.as_str(),
        }
    }

    /// Boundary enharmonic alias, where one exists. These are the four
    /// spellings the theoretical keys (F#, C#, Gb, Cb) need: E↔Fb, F↔E#,
    /// B↔Cb, C↔B#.
    pub fn enharmonic_alias(self) -> Option<&'static str> {
        match self {
            PitchClass::C => Some("B#"),
            PitchClass::E => Some("Fb"),
            PitchClass::F => Some("E#"),
            PitchClass::B => Some("Cb"),
            _ => None,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = String;

    /// Parses canonical names plus flat and boundary enharmonic aliases.
    /// Enharmonic spellings collapse onto the same pitch class.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "B#" => Ok(PitchClass::C),
            "C#" | "Db" => Ok(PitchClass::Cs),
            "D" => Ok(PitchClass::D),
            "D#" | "Eb" => Ok(PitchClass::Ds),
            "E" | "Fb" => Ok(PitchClass::E),
            "F" | "E#" => Ok(PitchClass::F),
            "F#" | "Gb" => Ok(PitchClass::Fs),
            "G" => Ok(PitchClass::G),
            "G#" | "Ab" => Ok(PitchClass::Gs),
            "A" => Ok(PitchClass::A),
            "A#" | "Bb" => Ok(PitchClass::As),
            "B" | "Cb" => Ok(PitchClass::B),
            _ => Err(format!(
                "Invalid pitch class: '{}'. Expected one of: C, C#, D, D#, E, F, F#, G, G#, A, A#, B (or a flat/enharmonic alias)",
                s
            )),
        }
    }
}
