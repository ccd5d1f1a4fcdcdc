use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The vital signs captured by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalKind {
    Pulse,
    BloodPressure,
    Temperature,
    RespiratoryRate,
}

impl VitalKind {
    pub const ALL: [VitalKind; 4] = [
        VitalKind::Pulse,
        VitalKind::BloodPressure,
        VitalKind::Temperature,
        VitalKind::RespiratoryRate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::Pulse => "pulse",
            VitalKind::BloodPressure => "blood_pressure",
            VitalKind::Temperature => "temperature",
            VitalKind::RespiratoryRate => "respiratory_rate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VitalKind::Pulse => "Pulse",
            VitalKind::BloodPressure => "Blood pressure",
            VitalKind::Temperature => "Temperature",
            VitalKind::RespiratoryRate => "Respiratory rate",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::Pulse => "bpm",
            VitalKind::BloodPressure => "mmHg",
            VitalKind::Temperature => "°C",
            VitalKind::RespiratoryRate => "breaths/min",
        }
    }
}

impl FromStr for VitalKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VitalKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVitalKind(s.to_string()))
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed vital-sign value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum VitalReading {
    Pulse { bpm: u32 },
    BloodPressure { systolic: u32, diastolic: u32 },
    Temperature { celsius: f64 },
    RespiratoryRate { breaths_per_min: u32 },
}

impl VitalReading {
    pub fn kind(&self) -> VitalKind {
        match self {
            VitalReading::Pulse { .. } => VitalKind::Pulse,
            VitalReading::BloodPressure { .. } => VitalKind::BloodPressure,
            VitalReading::Temperature { .. } => VitalKind::Temperature,
            VitalReading::RespiratoryRate { .. } => VitalKind::RespiratoryRate,
        }
    }

    /// Read a raw field value the way the form does: a leading integer (or a
    /// leading decimal for temperature) is taken and trailing junk ignored.
    ///
    /// Returns `None` for empty input and for input with no leading number.
    /// Blood pressure must split on `/` into exactly two integer parts.
    pub fn parse(kind: VitalKind, raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match kind {
            VitalKind::Pulse => leading_integer(raw).map(|bpm| VitalReading::Pulse { bpm }),
            VitalKind::RespiratoryRate => leading_integer(raw)
                .map(|breaths_per_min| VitalReading::RespiratoryRate { breaths_per_min }),
            VitalKind::Temperature => {
                leading_decimal(raw).map(|celsius| VitalReading::Temperature { celsius })
            }
            VitalKind::BloodPressure => {
                let parts: Vec<&str> = raw.split('/').collect();
                let [systolic, diastolic] = parts.as_slice() else {
                    return None;
                };
                Some(VitalReading::BloodPressure {
                    systolic: leading_integer(systolic)?,
                    diastolic: leading_integer(diastolic)?,
                })
            }
        }
    }
}

fn leading_integer(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail here; an absurdly large value still reads as
    // out of range.
    Some(digits.parse().unwrap_or(u32::MAX))
}

fn leading_decimal(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut seen_dot = false;
    let mut end = 0;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    let number = s[..end].trim_end_matches('.');
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}
