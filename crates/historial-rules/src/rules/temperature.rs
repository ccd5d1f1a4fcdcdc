use historial_core::models::vital::{VitalKind, VitalReading};

use crate::ranges::ReferenceRange;
use crate::vitals::VitalVerdict;
use crate::VitalRule;

/// Body temperature in degrees Celsius.
pub struct Temperature {
    pub normal: ReferenceRange,
}

impl VitalRule for Temperature {
    fn kind(&self) -> VitalKind {
        VitalKind::Temperature
    }

    fn normal_ranges(&self) -> Vec<(&'static str, ReferenceRange)> {
        vec![("temperature", self.normal)]
    }

    fn assess(&self, reading: &VitalReading) -> Option<VitalVerdict> {
        match reading {
            VitalReading::Temperature { celsius } => {
                Some(VitalVerdict::from_in_range(self.normal.contains(*celsius)))
            }
            _ => None,
        }
    }
}
