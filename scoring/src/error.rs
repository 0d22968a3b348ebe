use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown scoring kind: '{0}'")]
    UnknownScoringKind(String),

    #[error("unsupported snapshot format version: '{0}'")]
    UnsupportedFormatVersion(String),

    #[error("failed to parse snapshot document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("snapshot validation failed: {0}")]
    Validation(String),
}
