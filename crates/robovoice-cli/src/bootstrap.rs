//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Concrete implementations are instantiated here:
//! - Speech synthesizer (`say`, via robovoice-runtime)
//! - Transcoder (`ffmpeg`, via robovoice-runtime)
//! - System probe (via robovoice-runtime)
//! - Console reporter (via presentation)
//!
//! Command handlers receive the composed context and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use robovoice_core::ports::{Reporter, SpeechSynthesizer, SystemProbePort, Transcoder};
use robovoice_core::{InvokerService, VoiceSettings};
use robovoice_runtime::{
    DEFAULT_FFMPEG_PROGRAM, DEFAULT_SAY_PROGRAM, DefaultSystemProbe, FfmpegTranscoder,
    SaySynthesizer,
};
use tracing_subscriber::EnvFilter;

use crate::parser::Cli;
use crate::presentation::ConsoleReporter;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Speech synthesis program name or path.
    pub say_program: String,
    /// Media conversion program name or path.
    pub ffmpeg_program: String,
    /// Voice and rate for synthesis and direct playback.
    pub voice: VoiceSettings,
    /// Directory output files are written to.
    pub output_dir: PathBuf,
}

impl CliConfig {
    /// Create config with default programs and voice.
    pub fn with_defaults() -> Self {
        Self {
            say_program: DEFAULT_SAY_PROGRAM.to_string(),
            ffmpeg_program: DEFAULT_FFMPEG_PROGRAM.to_string(),
            voice: VoiceSettings::default(),
            output_dir: PathBuf::from("."),
        }
    }

    /// Build config from parsed arguments (flags and env already applied).
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            say_program: cli.say_program.clone(),
            ffmpeg_program: cli.ffmpeg_program.clone(),
            voice: VoiceSettings::new(cli.voice.clone(), cli.rate),
            output_dir: cli.output_dir.clone(),
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The invoker that runs speech requests.
    pub invoker: InvokerService,
    /// Speech synthesizer, for voice listing.
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// System probe for dependency checks.
    pub probe: Arc<dyn SystemProbePort>,
    /// Resolved configuration.
    pub config: CliConfig,
}

impl CliContext {
    /// Assemble a context from already-built ports.
    ///
    /// `bootstrap` uses this with the real adapters; tests pass fakes.
    pub fn new(
        config: CliConfig,
        speech: Arc<dyn SpeechSynthesizer>,
        transcoder: Arc<dyn Transcoder>,
        probe: Arc<dyn SystemProbePort>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        let invoker = InvokerService::new(speech.clone(), transcoder, reporter);
        Self {
            invoker,
            speech,
            probe,
            config,
        }
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root: it builds the process-backed adapters for
/// the configured programs and hands them to the core invoker.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let speech: Arc<dyn SpeechSynthesizer> =
        Arc::new(SaySynthesizer::new(config.say_program.clone()));
    let transcoder: Arc<dyn Transcoder> =
        Arc::new(FfmpegTranscoder::new(config.ffmpeg_program.clone()));
    let probe: Arc<dyn SystemProbePort> = Arc::new(DefaultSystemProbe::new(
        config.say_program.clone(),
        config.ffmpeg_program.clone(),
    ));

    CliContext::new(config, speech, transcoder, probe, Arc::new(ConsoleReporter))
}

/// Initialize tracing.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn` so normal runs only show the console messages.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "robovoice",
            "--voice",
            "Whisper",
            "--rate",
            "90",
            "-o",
            "/tmp/voices",
            "--say-program",
            "/usr/bin/say",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.voice, VoiceSettings::new("Whisper", 90));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/voices"));
        assert_eq!(config.say_program, "/usr/bin/say");
    }

    #[test]
    fn test_bootstrap_uses_configured_program() {
        let mut config = CliConfig::with_defaults();
        config.say_program = "my-say".into();
        let ctx = bootstrap(config);
        assert_eq!(ctx.speech.program(), "my-say");
    }
}
