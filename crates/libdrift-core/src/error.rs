use thiserror::Error;

/// Main error type for drift operations
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("summarization error: {0}")]
    Summarization(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DriftError {
    /// Get the exit code for the CLI process
    pub fn exit_code(&self) -> i32 {
        match self {
            DriftError::Config(_) => 2,
            DriftError::Storage(_) => 5,
            DriftError::Io(_) => 5,
            _ => 1,
        }
    }
}
