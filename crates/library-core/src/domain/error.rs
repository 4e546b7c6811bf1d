//! Domain-level errors

use thiserror::Error;

/// Common result type for library operations
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The backend answered but refused the operation (`success: false`)
    #[error("Rejected by backend: {0}")]
    Rejected(String),
    #[error("Backend error: {0}")]
    Backend(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::Config(err.to_string())
    }
}
