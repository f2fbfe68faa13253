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

    #[error("{0}")]
    Usage(String),
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
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(e) => match e {
                    ApplicationError::DatabaseNotFound(_) => crate::exitcode::NOINPUT,
                    ApplicationError::InvalidDatabase { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                    ApplicationError::Domain(d) if d.is_malformed_input() => {
                        crate::exitcode::DATAERR
                    }
                    ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
                },
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
    fn test_exit_codes() {
        let missing: CliError = ApplicationError::DatabaseNotFound(PathBuf::from("x")).into();
        assert_eq!(missing.exit_code(), crate::exitcode::NOINPUT);

        let malformed: CliError = ApplicationError::InvalidDatabase {
            path: PathBuf::from("x"),
            source: DomainError::UnexpectedEnd { position: 0 },
        }
        .into();
        assert_eq!(malformed.exit_code(), crate::exitcode::DATAERR);

        let broken: CliError =
            ApplicationError::Domain(DomainError::BrokenInvariant("x".into())).into();
        assert_eq!(broken.exit_code(), crate::exitcode::SOFTWARE);
    }
}
