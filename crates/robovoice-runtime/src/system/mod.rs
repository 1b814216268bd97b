//! System probe implementation for robovoice-runtime.
//!
//! This module provides the `DefaultSystemProbe` which implements
//! `SystemProbePort` from robovoice-core. It probes the configured speech
//! and conversion programs by looking them up on `PATH`.

mod commands;

use robovoice_core::{Dependency, DependencyStatus, SystemProbePort};

use commands::{command_exists, get_ffmpeg_version};

/// Default implementation of `SystemProbePort`.
///
/// Constructed by the CLI bootstrap with the same program names the
/// adapters use, so `--check-deps` reports on what a real run would invoke.
#[derive(Debug, Clone)]
pub struct DefaultSystemProbe {
    say_program: String,
    ffmpeg_program: String,
}

impl DefaultSystemProbe {
    /// Create a probe for the given program names or paths.
    pub fn new(say_program: impl Into<String>, ffmpeg_program: impl Into<String>) -> Self {
        Self {
            say_program: say_program.into(),
            ffmpeg_program: ffmpeg_program.into(),
        }
    }
}

impl Default for DefaultSystemProbe {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SAY_PROGRAM, crate::DEFAULT_FFMPEG_PROGRAM)
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn check_all_dependencies(&self) -> Vec<Dependency> {
        // `say` has no version flag; presence on PATH is all we can report.
        let say_status = if command_exists(&self.say_program) {
            DependencyStatus::Present {
                version: String::new(),
            }
        } else {
            DependencyStatus::Missing
        };

        let ffmpeg_status = get_ffmpeg_version(&self.ffmpeg_program)
            .map_or(DependencyStatus::Missing, |version| {
                DependencyStatus::Present { version }
            });

        vec![
            Dependency::required(&self.say_program, "Speech synthesis (macOS text-to-speech)")
                .with_hint("Ships with macOS; not available on other platforms")
                .with_status(say_status),
            Dependency::optional(&self.ffmpeg_program, "Converts AIFF output to WAV")
                .with_hint("brew install ffmpeg")
                .with_status(ffmpeg_status),
        ]
    }
}
