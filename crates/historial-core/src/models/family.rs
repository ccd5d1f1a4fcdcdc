use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Relative categories asked about in the family-history section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Relative {
    Father,
    Mother,
    PaternalGrandfather,
    PaternalGrandmother,
    MaternalGrandfather,
    MaternalGrandmother,
}

impl Relative {
    pub const ALL: [Relative; 6] = [
        Relative::Father,
        Relative::Mother,
        Relative::PaternalGrandfather,
        Relative::PaternalGrandmother,
        Relative::MaternalGrandfather,
        Relative::MaternalGrandmother,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relative::Father => "father",
            Relative::Mother => "mother",
            Relative::PaternalGrandfather => "paternal_grandfather",
            Relative::PaternalGrandmother => "paternal_grandmother",
            Relative::MaternalGrandfather => "maternal_grandfather",
            Relative::MaternalGrandmother => "maternal_grandmother",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Relative::Father => "Father",
            Relative::Mother => "Mother",
            Relative::PaternalGrandfather => "Paternal grandfather",
            Relative::PaternalGrandmother => "Paternal grandmother",
            Relative::MaternalGrandfather => "Maternal grandfather",
            Relative::MaternalGrandmother => "Maternal grandmother",
        }
    }
}

impl FromStr for Relative {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relative::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::UnknownRelative(s.to_string()))
    }
}

impl fmt::Display for Relative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a relative is alive. Conditions are only recorded for relatives
/// whose status is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalStatus {
    Alive,
    Deceased,
    Unknown,
}

impl VitalStatus {
    pub fn is_known(self) -> bool {
        !matches!(self, VitalStatus::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VitalStatus::Alive => "alive",
            VitalStatus::Deceased => "deceased",
            VitalStatus::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Alive => "Alive",
            VitalStatus::Deceased => "Deceased",
            VitalStatus::Unknown => "Unknown",
        }
    }
}

impl FromStr for VitalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alive" => Ok(VitalStatus::Alive),
            "deceased" => Ok(VitalStatus::Deceased),
            "unknown" => Ok(VitalStatus::Unknown),
            other => Err(CoreError::UnknownVitalStatus(other.to_string())),
        }
    }
}

/// Hereditary or familial conditions on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FamilyCondition {
    Diabetes,
    Hypertension,
    HeartDisease,
    Alcoholism,
    Smoking,
    Cancer,
    Neurological,
    Hematological,
    Renal,
    Venereal,
    Overweight,
}

impl FamilyCondition {
    pub const ALL: [FamilyCondition; 11] = [
        FamilyCondition::Diabetes,
        FamilyCondition::Hypertension,
        FamilyCondition::HeartDisease,
        FamilyCondition::Alcoholism,
        FamilyCondition::Smoking,
        FamilyCondition::Cancer,
        FamilyCondition::Neurological,
        FamilyCondition::Hematological,
        FamilyCondition::Renal,
        FamilyCondition::Venereal,
        FamilyCondition::Overweight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FamilyCondition::Diabetes => "diabetes",
            FamilyCondition::Hypertension => "hypertension",
            FamilyCondition::HeartDisease => "heart_disease",
            FamilyCondition::Alcoholism => "alcoholism",
            FamilyCondition::Smoking => "smoking",
            FamilyCondition::Cancer => "cancer",
            FamilyCondition::Neurological => "neurological",
            FamilyCondition::Hematological => "hematological",
            FamilyCondition::Renal => "renal",
            FamilyCondition::Venereal => "venereal",
            FamilyCondition::Overweight => "overweight",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FamilyCondition::Diabetes => "Diabetes",
            FamilyCondition::Hypertension => "Hypertension",
            FamilyCondition::HeartDisease => "Heart disease",
            FamilyCondition::Alcoholism => "Alcoholism",
            FamilyCondition::Smoking => "Smoking",
            FamilyCondition::Cancer => "Cancer",
            FamilyCondition::Neurological => "Neurological",
            FamilyCondition::Hematological => "Hematological",
            FamilyCondition::Renal => "Renal",
            FamilyCondition::Venereal => "Venereal",
            FamilyCondition::Overweight => "Overweight",
        }
    }
}

impl FromStr for FamilyCondition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FamilyCondition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCondition(s.to_string()))
    }
}

/// One relative's row in the family-history section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FamilyHistoryEntry {
    pub relative: Relative,
    pub status: VitalStatus,
    pub conditions: BTreeSet<FamilyCondition>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

impl FamilyHistoryEntry {
    pub fn new(relative: Relative, status: VitalStatus) -> Self {
        Self {
            relative,
            status,
            conditions: BTreeSet::new(),
            notes: None,
        }
    }

    /// Change the vital status. Moving to `Unknown` clears every checked
    /// condition, mirroring the section being hidden.
    pub fn set_status(&mut self, status: VitalStatus) {
        self.status = status;
        if !status.is_known() {
            self.conditions.clear();
        }
    }

    /// Check or uncheck a condition. Returns `false` (and changes nothing)
    /// when the status is unknown.
    pub fn toggle(&mut self, condition: FamilyCondition, checked: bool) -> bool {
        if !self.status.is_known() {
            return false;
        }
        if checked {
            self.conditions.insert(condition);
        } else {
            self.conditions.remove(&condition);
        }
        true
    }
}
