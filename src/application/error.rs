//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize entry '{title}'")]
    Serialize {
        title: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("entry not found: {0}")]
    EntryNotFound(String),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    /// Whether the error stems from file content rather than file access.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            ApplicationError::Parse { .. } | ApplicationError::Domain(DomainError::MissingField { .. })
        )
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
