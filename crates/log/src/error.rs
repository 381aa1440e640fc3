//! Logger errors

/// Logger setup failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The filter directive did not parse.
    #[error("invalid log filter {0}")]
    Filter(String),

    /// The global subscriber could not be installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Result alias for logger setup.
pub type LogResult<T> = Result<T, LogError>;
