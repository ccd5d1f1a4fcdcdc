use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RulesError;

/// Inclusive normal range for a measurement. Values outside are abnormal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    pub min: f64,
    pub max: f64,
}

impl ReferenceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, measure: &str) -> Result<(), RulesError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(RulesError::InvalidRange {
                measure: measure.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Normal ranges in force for one form session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalThresholds {
    /// Beats per minute.
    pub pulse: ReferenceRange,
    /// mmHg.
    pub systolic: ReferenceRange,
    /// mmHg.
    pub diastolic: ReferenceRange,
    /// Degrees Celsius.
    pub temperature: ReferenceRange,
    /// Breaths per minute.
    pub respiratory_rate: ReferenceRange,
}

impl Default for VitalThresholds {
    fn default() -> Self {
        Self {
            pulse: ReferenceRange::new(60.0, 100.0),
            systolic: ReferenceRange::new(90.0, 140.0),
            diastolic: ReferenceRange::new(60.0, 90.0),
            temperature: ReferenceRange::new(36.0, 37.5),
            respiratory_rate: ReferenceRange::new(12.0, 20.0),
        }
    }
}

impl VitalThresholds {
    pub fn validate(&self) -> Result<(), RulesError> {
        self.pulse.validate("pulse")?;
        self.systolic.validate("systolic")?;
        self.diastolic.validate("diastolic")?;
        self.temperature.validate("temperature")?;
        self.respiratory_rate.validate("respiratory_rate")
    }
}
