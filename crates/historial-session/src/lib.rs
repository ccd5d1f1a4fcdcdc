//! historial-session
//!
//! Form-session controller for the medical-history form. Owns the mutable
//! form state explicitly and routes field changes through a dispatch table
//! to the pure rules in `historial-rules`.
//!
//! Public API:
//! - `FormConfig`: which fields the form renders and the thresholds in force
//! - `FormSession`: current selections, derived alerts, snapshot collection
//! - `DispatchTable`: field kind to handler
//! - `FormController`: drains a `FieldEventSource` through the table

pub mod collect;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod pain;
pub mod session;

pub use crate::config::FormConfig;
pub use crate::dispatch::{DispatchTable, FieldEventSource, FormController, QueuedEvents, Reaction};
pub use crate::error::SessionError;
pub use crate::field::{FieldChange, FieldId, FieldKind, FieldValue};
pub use crate::pain::PainSelection;
pub use crate::session::FormSession;
