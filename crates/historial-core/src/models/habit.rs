use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Oral habits screened for orthodontic follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OralHabit {
    ThumbSucking,
    PacifierUse,
    MouthBreathing,
    TongueThrust,
    PoorBrushing,
    NailBiting,
}

impl OralHabit {
    pub const ALL: [OralHabit; 6] = [
        OralHabit::ThumbSucking,
        OralHabit::PacifierUse,
        OralHabit::MouthBreathing,
        OralHabit::TongueThrust,
        OralHabit::PoorBrushing,
        OralHabit::NailBiting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OralHabit::ThumbSucking => "thumb_sucking",
            OralHabit::PacifierUse => "pacifier_use",
            OralHabit::MouthBreathing => "mouth_breathing",
            OralHabit::TongueThrust => "tongue_thrust",
            OralHabit::PoorBrushing => "poor_brushing",
            OralHabit::NailBiting => "nail_biting",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OralHabit::ThumbSucking => "Thumb sucking",
            OralHabit::PacifierUse => "Pacifier use",
            OralHabit::MouthBreathing => "Mouth breathing",
            OralHabit::TongueThrust => "Tongue thrust",
            OralHabit::PoorBrushing => "Poor brushing",
            OralHabit::NailBiting => "Bites nails or objects",
        }
    }
}

impl FromStr for OralHabit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OralHabit::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| CoreError::UnknownHabit(s.to_string()))
    }
}

impl fmt::Display for OralHabit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often a habit occurs. Variants are declared in ascending order so
/// the derived `Ord` matches the clinical ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HabitFrequency {
    Never,
    Sometimes,
    Frequently,
    Always,
}

impl HabitFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            HabitFrequency::Never => "never",
            HabitFrequency::Sometimes => "sometimes",
            HabitFrequency::Frequently => "frequently",
            HabitFrequency::Always => "always",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HabitFrequency::Never => "Never",
            HabitFrequency::Sometimes => "Sometimes",
            HabitFrequency::Frequently => "Frequently",
            HabitFrequency::Always => "Always",
        }
    }
}

impl FromStr for HabitFrequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never" => Ok(HabitFrequency::Never),
            "sometimes" => Ok(HabitFrequency::Sometimes),
            "frequently" => Ok(HabitFrequency::Frequently),
            "always" => Ok(HabitFrequency::Always),
            other => Err(CoreError::UnknownFrequency(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HabitRecord {
    pub habit: OralHabit,
    pub frequency: HabitFrequency,
}

impl HabitRecord {
    pub fn new(habit: OralHabit, frequency: HabitFrequency) -> Self {
        Self { habit, frequency }
    }
}
