use thiserror::Error;

/// Core-level errors.
///
/// The recurrence engine itself never fails: incomplete or invalid rules
/// degrade to an empty occurrence list. These errors cover the boundaries
/// around it (JSON wire form, configuration).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
