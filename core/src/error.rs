use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown preset '{name}'")]
    UnknownPreset { name: String },

    #[error("No binding for key {key:?}")]
    UnboundKey { key: char },

    #[error("Expected a single key, got {line:?}")]
    NotASingleKey { line: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ClockResult<T> = Result<T, ClockError>;
