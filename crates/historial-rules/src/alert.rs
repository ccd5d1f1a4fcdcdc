use serde::{Deserialize, Serialize};
use ts_rs::TS;

use historial_core::models::pain::PainLevel;

/// Severity band of a pain rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PainBand {
    /// 0–3.
    Low,
    /// 4–6.
    Moderate,
    /// 7–10.
    Severe,
}

impl PainBand {
    pub fn of(level: PainLevel) -> Self {
        match level.value() {
            0..=3 => PainBand::Low,
            4..=6 => PainBand::Moderate,
            _ => PainBand::Severe,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PainBand::Low => "Mild or no pain. Continue with routine evaluation.",
            PainBand::Moderate => {
                "Moderate pain. Consider pain management and a more detailed evaluation."
            }
            PainBand::Severe => "SEVERE PAIN. Requires immediate attention and pain management.",
        }
    }
}

/// Advisory shown next to the pain scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainAlert {
    pub level: PainLevel,
    pub band: PainBand,
    pub message: String,
}

pub fn classify(level: PainLevel) -> PainAlert {
    let band = PainBand::of(level);
    PainAlert {
        level,
        band,
        message: band.message().to_string(),
    }
}
