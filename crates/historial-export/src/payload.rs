use historial_core::models::snapshot::ClinicalRecordSnapshot;

use crate::error::ExportError;

/// Name of the hidden form input that carries the payload.
pub const PAYLOAD_FIELD: &str = "historial_json";

/// Encode a snapshot for embedding in the form before it is posted.
pub fn to_payload(snapshot: &ClinicalRecordSnapshot) -> Result<String, ExportError> {
    Ok(serde_json::to_string(snapshot)?)
}

pub fn to_payload_pretty(snapshot: &ClinicalRecordSnapshot) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Decode a submitted payload. Out-of-range pain values, unknown keys in
/// the vocabulary maps and pain scales that disagree are rejected.
pub fn from_payload(payload: &str) -> Result<ClinicalRecordSnapshot, ExportError> {
    let snapshot: ClinicalRecordSnapshot = serde_json::from_str(payload)?;
    snapshot.validate()?;
    Ok(snapshot)
}
