use serde::{Deserialize, Serialize};
use ts_rs::TS;

use historial_core::models::vital::VitalKind;

use crate::get_rule;
use crate::ranges::VitalThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalVerdict {
    Normal,
    Abnormal,
}

impl VitalVerdict {
    pub fn from_in_range(in_range: bool) -> Self {
        if in_range {
            VitalVerdict::Normal
        } else {
            VitalVerdict::Abnormal
        }
    }

    pub fn is_abnormal(self) -> bool {
        matches!(self, VitalVerdict::Abnormal)
    }
}

/// Validate a raw field value.
///
/// `None` means no verdict: the field is empty or does not hold a reading
/// of the expected shape (e.g. a blood pressure without a `/`).
pub fn evaluate(kind: VitalKind, raw: &str, thresholds: &VitalThresholds) -> Option<VitalVerdict> {
    get_rule(kind, thresholds).evaluate(raw)
}

/// Apply the form's keystroke filter: blood pressure keeps digits and `/`,
/// every other kind keeps digits and `.`.
pub fn sanitize(kind: VitalKind, raw: &str) -> String {
    let separator = match kind {
        VitalKind::BloodPressure => '/',
        _ => '.',
    };
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == separator)
        .collect()
}
