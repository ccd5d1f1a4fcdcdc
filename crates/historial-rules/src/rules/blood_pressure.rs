use historial_core::models::vital::{VitalKind, VitalReading};

use crate::ranges::ReferenceRange;
use crate::vitals::VitalVerdict;
use crate::VitalRule;

/// Arterial blood pressure entered as "systolic/diastolic" in mmHg.
/// Abnormal when either component leaves its range.
pub struct BloodPressure {
    pub systolic: ReferenceRange,
    pub diastolic: ReferenceRange,
}

impl VitalRule for BloodPressure {
    fn kind(&self) -> VitalKind {
        VitalKind::BloodPressure
    }

    fn normal_ranges(&self) -> Vec<(&'static str, ReferenceRange)> {
        vec![("systolic", self.systolic), ("diastolic", self.diastolic)]
    }

    fn assess(&self, reading: &VitalReading) -> Option<VitalVerdict> {
        match reading {
            VitalReading::BloodPressure {
                systolic,
                diastolic,
            } => Some(VitalVerdict::from_in_range(
                self.systolic.contains(f64::from(*systolic))
                    && self.diastolic.contains(f64::from(*diastolic)),
            )),
            _ => None,
        }
    }
}
