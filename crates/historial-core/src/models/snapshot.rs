use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::family::{FamilyCondition, Relative, VitalStatus};
use super::habit::{HabitFrequency, HabitRecord, OralHabit};
use super::pain::{FaceRating, PainLevel};
use super::vital::{VitalKind, VitalReading};

/// Point-in-time aggregate of every form selection, ready for submission.
///
/// Unset fields are omitted from the serialized form rather than written
/// as `null` or empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRecordSnapshot {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pain_numeric: Option<PainLevel>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pain_faces: Option<FaceRating>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub family_history: BTreeMap<Relative, BTreeSet<FamilyCondition>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub relative_status: BTreeMap<Relative, VitalStatus>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub relative_notes: BTreeMap<Relative, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub habits: BTreeMap<OralHabit, HabitFrequency>,
    /// Trimmed raw values as typed, keyed by kind.
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub vital_signs: BTreeMap<VitalKind, String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub chief_complaint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub medical_alert: Option<String>,
}

impl ClinicalRecordSnapshot {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check that the two pain scales, when both are recorded, name the
    /// same band: the face must be the numeric level rounded down to even.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(numeric), Some(faces)) = (self.pain_numeric, self.pain_faces) {
            if numeric.banded_face() != faces {
                return Err(CoreError::PainScalesDisagree {
                    numeric: numeric.value(),
                    faces: faces.value(),
                });
            }
        }
        Ok(())
    }

    pub fn habit_records(&self) -> Vec<HabitRecord> {
        self.habits
            .iter()
            .map(|(habit, frequency)| HabitRecord::new(*habit, *frequency))
            .collect()
    }

    /// Parse the recorded vital signs. Values that do not parse are skipped.
    pub fn vital_readings(&self) -> Vec<VitalReading> {
        self.vital_signs
            .iter()
            .filter_map(|(kind, raw)| VitalReading::parse(*kind, raw))
            .collect()
    }
}
