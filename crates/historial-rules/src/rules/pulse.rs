use historial_core::models::vital::{VitalKind, VitalReading};

use crate::ranges::ReferenceRange;
use crate::vitals::VitalVerdict;
use crate::VitalRule;

/// Resting heart rate, beats per minute.
pub struct Pulse {
    pub normal: ReferenceRange,
}

impl VitalRule for Pulse {
    fn kind(&self) -> VitalKind {
        VitalKind::Pulse
    }

    fn normal_ranges(&self) -> Vec<(&'static str, ReferenceRange)> {
        vec![("pulse", self.normal)]
    }

    fn assess(&self, reading: &VitalReading) -> Option<VitalVerdict> {
        match reading {
            VitalReading::Pulse { bpm } => {
                Some(VitalVerdict::from_in_range(self.normal.contains(f64::from(*bpm))))
            }
            _ => None,
        }
    }
}
