//! historial-core
//!
//! Pure domain types for the medical-history form: pain ratings, vital-sign
//! readings, family history, oral habits, and the exportable snapshot.
//! No rule logic lives here; this is the shared vocabulary of the system.

pub mod error;
pub mod models;
