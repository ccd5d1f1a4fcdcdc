use serde::{Deserialize, Serialize};
use ts_rs::TS;

use historial_core::models::habit::{HabitFrequency, HabitRecord};

/// Frequency at or above which a habit is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRiskPolicy {
    pub threshold: HabitFrequency,
}

impl Default for HabitRiskPolicy {
    fn default() -> Self {
        Self {
            threshold: HabitFrequency::Frequently,
        }
    }
}

impl HabitRiskPolicy {
    pub fn is_risky(&self, frequency: HabitFrequency) -> bool {
        frequency >= self.threshold
    }

    /// The records at risk, in input order.
    pub fn flag(&self, records: &[HabitRecord]) -> Vec<HabitRecord> {
        records
            .iter()
            .filter(|r| self.is_risky(r.frequency))
            .copied()
            .collect()
    }

    pub fn highlight(&self, frequency: HabitFrequency) -> HabitHighlight {
        if frequency == HabitFrequency::Never {
            HabitHighlight::Neutral
        } else if self.is_risky(frequency) {
            HabitHighlight::Risk
        } else {
            HabitHighlight::Caution
        }
    }

    pub fn alert(&self, records: &[HabitRecord]) -> Option<HabitAlert> {
        let flagged = self.flag(records);
        if flagged.is_empty() {
            return None;
        }
        let names: Vec<&str> = flagged.iter().map(|r| r.habit.label()).collect();
        Some(HabitAlert {
            message: format!(
                "Frequent habits detected: {}. Consider orthodontic follow-up.",
                names.join(", ")
            ),
            habits: flagged,
        })
    }
}

/// Flag records at `frequently` or `always`.
pub fn flag_risky(records: &[HabitRecord]) -> Vec<HabitRecord> {
    HabitRiskPolicy::default().flag(records)
}

pub fn habit_alert(records: &[HabitRecord]) -> Option<HabitAlert> {
    HabitRiskPolicy::default().alert(records)
}

/// Summary banner listing every flagged habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HabitAlert {
    pub habits: Vec<HabitRecord>,
    pub message: String,
}

/// Emphasis for a single habit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HabitHighlight {
    Neutral,
    Caution,
    Risk,
}

pub fn highlight(frequency: HabitFrequency) -> HabitHighlight {
    HabitRiskPolicy::default().highlight(frequency)
}
