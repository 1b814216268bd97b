//! Error types for the core domain.
//!
//! `ToolError` covers failures to *run* an external tool. A tool that runs
//! and exits non-zero is not an error here; that is reported through
//! [`crate::ToolOutput`] so the invoker can branch on it.

use thiserror::Error;

/// Failure to launch or talk to an external command.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The program could not be located on `PATH`.
    #[error("{program} not found (is it installed and on PATH?)")]
    NotFound { program: String },

    /// The program exists but could not be spawned or awaited.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    /// Classify an IO error raised while spawning `program`.
    pub fn from_spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { program }
        } else {
            Self::Spawn { program, source }
        }
    }
}

/// Core error type for request validation.
///
/// Orchestration never fails with this type: tool failures are folded into
/// an `Outcome` or returned as a [`ToolError`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_spawn_not_found_is_classified() {
        let err = ToolError::from_spawn("say", Error::new(ErrorKind::NotFound, "nope"));
        assert!(matches!(err, ToolError::NotFound { ref program } if program == "say"));
        assert!(err.to_string().contains("say not found"));
    }

    #[test]
    fn test_spawn_other_error_keeps_source() {
        let err = ToolError::from_spawn(
            "ffmpeg",
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ToolError::Spawn { .. }));
        assert!(err.to_string().contains("Failed to run ffmpeg"));
    }
}
