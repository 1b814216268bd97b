//! Results of running external tools and of a whole invocation.

use std::path::PathBuf;

/// Exit status and captured error text of a finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
}

/// Result of invoking the speech command.
pub type SynthesisResult = ToolOutput;

impl ToolOutput {
    pub fn new(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// A zero-exit result with no error text.
    pub fn ok() -> Self {
        Self::new(Some(0), "")
    }

    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }

    /// Human-readable explanation of a failed run.
    ///
    /// Prefers the captured error text and falls back to the exit status.
    pub fn failure_summary(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.exit_code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// How an invocation ended.
///
/// Each variant corresponds to one leaf of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Synthesis and conversion both succeeded; the intermediate was removed.
    Converted { path: PathBuf },
    /// Synthesis succeeded but conversion did not; the intermediate is kept.
    IntermediateOnly { path: PathBuf, reason: String },
    /// Audio went straight to the playback device with the configured voice.
    ///
    /// `synthesis_error` holds the speech command's error text when this is
    /// the fallback after a failed file synthesis.
    PlayedDirectly { synthesis_error: Option<String> },
    /// Plain playback without voice or rate, after an unexpected failure.
    PlayedWithDefaultVoice { cause: String },
}

impl Outcome {
    /// The file left on disk by this invocation, if any.
    pub fn output_file(&self) -> Option<&PathBuf> {
        match self {
            Self::Converted { path } | Self::IntermediateOnly { path, .. } => Some(path),
            Self::PlayedDirectly { .. } | Self::PlayedWithDefaultVoice { .. } => None,
        }
    }
}
