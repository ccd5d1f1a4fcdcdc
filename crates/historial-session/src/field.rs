use std::fmt;

use serde::{Deserialize, Serialize};

use historial_core::models::family::{FamilyCondition, Relative};
use historial_core::models::habit::OralHabit;
use historial_core::models::vital::VitalKind;

use crate::error::SessionError;

/// Identifies one input on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldId {
    PainNumeric,
    PainFaces,
    RelativeStatus { relative: Relative },
    FamilyCondition { relative: Relative, condition: FamilyCondition },
    RelativeNotes { relative: Relative },
    Habit { habit: OralHabit },
    Vital { kind: VitalKind },
    ChiefComplaint,
    MedicalAlert,
}

/// The shape of a field, without its payload. Keys the dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    PainNumeric,
    PainFaces,
    RelativeStatus,
    FamilyCondition,
    RelativeNotes,
    Habit,
    Vital,
    ChiefComplaint,
    MedicalAlert,
}

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::PainNumeric,
        FieldKind::PainFaces,
        FieldKind::RelativeStatus,
        FieldKind::FamilyCondition,
        FieldKind::RelativeNotes,
        FieldKind::Habit,
        FieldKind::Vital,
        FieldKind::ChiefComplaint,
        FieldKind::MedicalAlert,
    ];
}

impl FieldId {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::PainNumeric => FieldKind::PainNumeric,
            FieldId::PainFaces => FieldKind::PainFaces,
            FieldId::RelativeStatus { .. } => FieldKind::RelativeStatus,
            FieldId::FamilyCondition { .. } => FieldKind::FamilyCondition,
            FieldId::RelativeNotes { .. } => FieldKind::RelativeNotes,
            FieldId::Habit { .. } => FieldKind::Habit,
            FieldId::Vital { .. } => FieldKind::Vital,
            FieldId::ChiefComplaint => FieldKind::ChiefComplaint,
            FieldId::MedicalAlert => FieldKind::MedicalAlert,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldId::PainNumeric => f.write_str("pain_numeric"),
            FieldId::PainFaces => f.write_str("pain_faces"),
            FieldId::RelativeStatus { relative } => write!(f, "relative_status[{relative}]"),
            FieldId::FamilyCondition {
                relative,
                condition,
            } => write!(f, "family_condition[{relative}/{}]", condition.as_str()),
            FieldId::RelativeNotes { relative } => write!(f, "relative_notes[{relative}]"),
            FieldId::Habit { habit } => write!(f, "habit[{habit}]"),
            FieldId::Vital { kind } => write!(f, "vital[{kind}]"),
            FieldId::ChiefComplaint => f.write_str("chief_complaint"),
            FieldId::MedicalAlert => f.write_str("medical_alert"),
        }
    }
}

/// Current value of an input: text for inputs and selects, a flag for
/// checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self, field: &FieldId) -> Result<&str, SessionError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            FieldValue::Checked(_) => Err(self.invalid_for(field)),
        }
    }

    pub fn as_checked(&self, field: &FieldId) -> Result<bool, SessionError> {
        match self {
            FieldValue::Checked(checked) => Ok(*checked),
            FieldValue::Text(_) => Err(self.invalid_for(field)),
        }
    }

    pub fn invalid_for(&self, field: &FieldId) -> SessionError {
        let value = match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Checked(checked) => checked.to_string(),
        };
        SessionError::InvalidValue {
            field: field.to_string(),
            value,
        }
    }
}

/// "User changed field X to V", as delivered by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    #[serde(flatten)]
    pub field: FieldId,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn new(field: FieldId, value: FieldValue) -> Self {
        Self { field, value }
    }

    pub fn text(field: FieldId, value: impl Into<String>) -> Self {
        Self::new(field, FieldValue::text(value))
    }

    pub fn checked(field: FieldId, checked: bool) -> Self {
        Self::new(field, FieldValue::Checked(checked))
    }
}
