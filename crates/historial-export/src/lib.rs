//! historial-export
//!
//! Submission payload and plain-text history narrative for a
//! `ClinicalRecordSnapshot`.

pub mod error;
pub mod payload;
pub mod render;
