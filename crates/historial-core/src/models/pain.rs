use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A rating on the 11-point numeric pain scale (0 = no pain, 10 = worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct PainLevel(u8);

impl PainLevel {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::PainOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every level on the scale, lowest first.
    pub fn all() -> impl Iterator<Item = PainLevel> {
        (0..=Self::MAX).map(PainLevel)
    }

    /// The face at or just below this level: 0–1 → 0, 2–3 → 2, … , 10 → 10.
    pub fn banded_face(self) -> FaceRating {
        FaceRating(self.0 - self.0 % 2)
    }
}

impl TryFrom<u8> for PainLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PainLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl FromStr for PainLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| CoreError::PainOutOfRange(u8::MAX))?;
        Self::new(value)
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A face on the pictorial (Wong-Baker) scale. Faces sit on the even
/// numeric values, so the value doubles as its numeric equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct FaceRating(u8);

impl FaceRating {
    pub const VALUES: [u8; 6] = [0, 2, 4, 6, 8, 10];

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if !Self::VALUES.contains(&value) {
            return Err(CoreError::InvalidFaceRating(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = FaceRating> {
        Self::VALUES.into_iter().map(FaceRating)
    }

    /// The numeric level this face stands for. Faces sit on even levels.
    pub fn level(self) -> PainLevel {
        PainLevel(self.0)
    }

    /// The caption printed under the face.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "No hurt",
            2 => "Hurts a little bit",
            4 => "Hurts a little more",
            6 => "Hurts even more",
            8 => "Hurts a whole lot",
            _ => "Hurts worst",
        }
    }
}

impl TryFrom<u8> for FaceRating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for FaceRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u8::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl FromStr for FaceRating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidFaceRating(u8::MAX))?;
        Self::new(value)
    }
}

impl fmt::Display for FaceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two pain scales the user last touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainScale {
    Numeric,
    Faces,
}
