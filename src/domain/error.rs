//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the tree's own rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("missing field `{field}` at {location}")]
    MissingField {
        field: &'static str,
        location: String,
    },

    #[error("cycle detected: cannot move '{0}' below itself")]
    CycleDetected(String),

    #[error("root entry cannot be moved: {0}")]
    RootImmovable(String),

    #[error("entry id does not belong to this tree")]
    UnknownEntry,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
