use std::path::PathBuf;

use thiserror::Error;

use historial_core::error::CoreError;
use historial_rules::error::RulesError;

use crate::field::FieldKind;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: String, value: String },

    #[error("no handler registered for {0:?} fields")]
    UnhandledField(FieldKind),

    #[error("field {0} is not part of this form")]
    FieldNotInForm(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("failed to access config at {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedConfigVersion { found: u32, supported: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
