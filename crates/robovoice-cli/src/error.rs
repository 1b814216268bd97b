//! CLI-specific error types and mappings.
//!
//! Speech failures never surface here: the invoker folds them into an
//! outcome and the process exits 0. These errors cover bad input and the
//! diagnostic flags.

use robovoice_core::CoreError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (output directory cannot be created, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// A required external program is not installed.
    #[error("Missing required program: {0}")]
    MissingDependency(String),

    /// External program could not be run.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2,          // EX_USAGE
            Self::Io(_) => 74,                // EX_IOERR
            Self::MissingDependency(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,           // EX_OSERR
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_usage() {
        let err = CliError::from(CoreError::Validation("empty".into()));
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_exit_code() {
        let err = CliError::Io("cannot create output directory out: disk full".into());
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("disk full"));
    }
}
