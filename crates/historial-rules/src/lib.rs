//! historial-rules
//!
//! Clinical alert and validation rules for the medical-history form. Pure
//! functions over `historial-core` types, with no I/O and no session state.
//! Covers the pain scale mapper and classifier, vital-sign reference
//! ranges, and oral-habit risk flagging.

pub mod alert;
pub mod error;
pub mod habits;
pub mod ranges;
pub mod rules;
pub mod scale;
pub mod vitals;

use historial_core::models::vital::{VitalKind, VitalReading};

use ranges::{ReferenceRange, VitalThresholds};
use vitals::VitalVerdict;

/// Trait implemented by the validation rule for each vital sign.
pub trait VitalRule: Send + Sync {
    /// The vital sign this rule checks.
    fn kind(&self) -> VitalKind;

    /// Human-readable name (e.g., "Pulse").
    fn name(&self) -> &str {
        self.kind().label()
    }

    /// Named normal ranges, in display order.
    fn normal_ranges(&self) -> Vec<(&'static str, ReferenceRange)>;

    /// Judge a parsed reading. Readings of another kind get no verdict.
    fn assess(&self, reading: &VitalReading) -> Option<VitalVerdict>;

    /// Parse and judge a raw field value.
    fn evaluate(&self, raw: &str) -> Option<VitalVerdict> {
        let reading = VitalReading::parse(self.kind(), raw)?;
        self.assess(&reading)
    }

    /// One-line description of the normal ranges, e.g. for a field tooltip.
    fn describe(&self) -> String {
        let unit = self.kind().unit();
        let ranges: Vec<String> = self
            .normal_ranges()
            .iter()
            .map(|(label, range)| format!("{label} {}–{} {unit}", range.min, range.max))
            .collect();
        format!("{}: normal {}", self.name(), ranges.join(", "))
    }
}

/// Return the rules for every vital sign under the given thresholds.
pub fn all_rules(thresholds: &VitalThresholds) -> Vec<Box<dyn VitalRule>> {
    VitalKind::ALL
        .into_iter()
        .map(|kind| get_rule(kind, thresholds))
        .collect()
}

/// Build the rule for one vital sign.
pub fn get_rule(kind: VitalKind, thresholds: &VitalThresholds) -> Box<dyn VitalRule> {
    match kind {
        VitalKind::Pulse => Box::new(rules::pulse::Pulse {
            normal: thresholds.pulse,
        }),
        VitalKind::BloodPressure => Box::new(rules::blood_pressure::BloodPressure {
            systolic: thresholds.systolic,
            diastolic: thresholds.diastolic,
        }),
        VitalKind::Temperature => Box::new(rules::temperature::Temperature {
            normal: thresholds.temperature,
        }),
        VitalKind::RespiratoryRate => Box::new(rules::respiratory_rate::RespiratoryRate {
            normal: thresholds.respiratory_rate,
        }),
    }
}
