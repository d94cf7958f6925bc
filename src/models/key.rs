//! Major-key definitions
//!
//! The fifteen major keys the estimator considers, each with its spelled
//! scale. Scales are stored as note names rather than pitch classes because
//! spelling (F# vs Gb) is exactly what distinguishes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch::PitchClass;

/// A major key. Variants are declared in candidate order: when two keys
/// match the same number of notes, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyName {
    C,
    G,
    D,
    A,
    E,
    B,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "C#")]
    CSharp,
    F,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "Db")]
    DFlat,
    #[serde(rename = "Gb")]
    GFlat,
    #[serde(rename = "Cb")]
    CFlat,
}

impl KeyName {
    /// Every key, in candidate (tie-break) order.
    pub const ALL: [KeyName; 15] = [
        KeyName::C,
        KeyName::G,
        KeyName::D,
        KeyName::A,
        KeyName::E,
        KeyName::B,
        KeyName::FSharp,
        KeyName::CSharp,
        KeyName::F,
        KeyName::BFlat,
        KeyName::EFlat,
        KeyName::AFlat,
        KeyName::DFlat,
        KeyName::GFlat,
        KeyName::CFlat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            KeyName::C => "C",
            KeyName::G => "G",
            KeyName::D => "D",
            KeyName::A => "A",
            KeyName::E => "E",
            KeyName::B => "B",
            KeyName::FSharp => "F#",
            KeyName::CSharp => "C#",
            KeyName::F => "F",
            KeyName::BFlat => "Bb",
            KeyName::EFlat => "Eb",
            KeyName::AFlat => "Ab",
            KeyName::DFlat => "Db",
            KeyName::GFlat => "Gb",
            KeyName::CFlat => "Cb",
        }
    }

    /// The spelled major scale, tonic first.
    pub fn major_scale(self) -> [&'static str; 7] {
        match self {
            KeyName::C => ["C", "D", "E", "F", "G", "A", "B"],
            KeyName::G => ["G", "A", "B", "C", "D", "E", "F#"],
            KeyName::D => ["D", "E", "F#", "G", "A", "B", "C#"],
            KeyName::A => ["A", "B", "C#", "D", "E", "F#", "G#"],
            KeyName::E => ["E", "F#", "G#", "A", "B", "C#", "D#"],
            KeyName::B => ["B", "C#", "D#", "E", "F#", "G#", "A#"],
            KeyName::FSharp => ["F#", "G#", "A#", "B", "C#", "D#", "E#"],
            KeyName::CSharp => ["C#", "D#", "E#", "F#", "G#", "A#", "B#"],
            KeyName::F => ["F", "G", "A", "Bb", "C", "D", "E"],
            KeyName::BFlat => ["Bb", "C", "D", "Eb", "F", "G", "A"],
            KeyName::EFlat => ["Eb", "F", "G", "Ab", "Bb", "C", "D"],
            KeyName::AFlat => ["Ab", "Bb", "C", "Db", "Eb", "F", "G"],
            KeyName::DFlat => ["Db", "Eb", "F", "Gb", "Ab", "Bb", "C"],
            KeyName::GFlat => ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"],
            KeyName::CFlat => ["Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bb"],
        }
    }

    /// Circle-of-fifths side: C and the sharp keys spell with sharps,
    /// everything else with flats.
    pub fn is_sharp_key(self) -> bool {
        matches!(
            self,
            KeyName::C
                | KeyName::G
                | KeyName::D
                | KeyName::A
                | KeyName::E
                | KeyName::B
                | KeyName::FSharp
                | KeyName::CSharp
        )
    }

    /// The key shown to the user. F# and C# always present as their flat
    /// equivalents Gb and Db.
    pub fn display_key(self) -> KeyName {
        match self {
            KeyName::FSharp => KeyName::GFlat,
            KeyName::CSharp => KeyName::DFlat,
            other => other,
        }
    }

    /// Zero-based position of a pitch class in this key's scale, matching
    /// the canonical sharp name, its flat spelling, or a boundary alias
    /// (E#/Fb/B#/Cb).
    pub fn scale_position(self, pc: PitchClass) -> Option<usize> {
        let scale = self.major_scale();
        let position = |name: &str| scale.iter().position(|&s| s == name);
        position(pc.as_str())
            .or_else(|| position(pc.flat_spelling()))
            .or_else(|| pc.enharmonic_alias().and_then(position))
    }

    /// Whether a pitch class is diatonic to this key under any accepted
    /// spelling.
    pub fn contains_pitch(self, pc: PitchClass) -> bool {
        self.scale_position(pc).is_some()
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeyName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyName::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Invalid key name: '{}'", s))
    }
}
