use historial_core::models::vital::{VitalKind, VitalReading};

use crate::ranges::ReferenceRange;
use crate::vitals::VitalVerdict;
use crate::VitalRule;

/// Breaths per minute at rest.
pub struct RespiratoryRate {
    pub normal: ReferenceRange,
}

impl VitalRule for RespiratoryRate {
    fn kind(&self) -> VitalKind {
        VitalKind::RespiratoryRate
    }

    fn normal_ranges(&self) -> Vec<(&'static str, ReferenceRange)> {
        vec![("rate", self.normal)]
    }

    fn assess(&self, reading: &VitalReading) -> Option<VitalVerdict> {
        match reading {
            VitalReading::RespiratoryRate { breaths_per_min } => Some(VitalVerdict::from_in_range(
                self.normal.contains(f64::from(*breaths_per_min)),
            )),
            _ => None,
        }
    }
}
