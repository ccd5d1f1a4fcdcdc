use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("pain level {0} is outside the 0-10 scale")]
    PainOutOfRange(u8),

    #[error("{0} is not a face on the pictorial scale (0, 2, 4, 6, 8, 10)")]
    InvalidFaceRating(u8),

    #[error("pain scales disagree: numeric {numeric} does not band onto face {faces}")]
    PainScalesDisagree { numeric: u8, faces: u8 },

    #[error("unknown vital sign kind: {0}")]
    UnknownVitalKind(String),

    #[error("unknown relative: {0}")]
    UnknownRelative(String),

    #[error("unknown vital status: {0}")]
    UnknownVitalStatus(String),

    #[error("unknown family condition: {0}")]
    UnknownCondition(String),

    #[error("unknown oral habit: {0}")]
    UnknownHabit(String),

    #[error("unknown habit frequency: {0}")]
    UnknownFrequency(String),
}
