//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Data(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Data(_) => crate::exitcode::DATAERR,
            CliError::Infra(InfraError::Application(app)) => match app {
                e if e.is_data_error() => crate::exitcode::DATAERR,
                ApplicationError::EntryNotFound(_) => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                _ => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_sysexits_values() {
        let missing: CliError = ApplicationError::Domain(DomainError::MissingField {
            field: "title",
            location: "$".into(),
        })
        .into();
        assert_eq!(missing.exit_code(), crate::exitcode::DATAERR);

        let parse: CliError = ApplicationError::Parse {
            path: PathBuf::from("X.json"),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
        .into();
        assert_eq!(parse.exit_code(), crate::exitcode::DATAERR);

        let not_found: CliError = ApplicationError::EntryNotFound("Fruit".into()).into();
        assert_eq!(not_found.exit_code(), crate::exitcode::NOINPUT);

        assert_eq!(
            CliError::Usage("nope".into()).exit_code(),
            crate::exitcode::USAGE
        );
    }
}
