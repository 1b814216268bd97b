//! Speak handler: the default action.
//!
//! Builds a `SpeechRequest` from the arguments and runs it through the
//! invoker. Every speech failure is recovered or reported; this handler only
//! errors on invalid input or an unusable output directory.

use anyhow::Result;
use robovoice_core::{Outcome, SpeechRequest};
use tracing::{info, warn};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::parser::Cli;

/// Arguments for the speak handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakArgs {
    pub text: String,
    pub filename: Option<String>,
    pub play_only: bool,
}

impl From<&Cli> for SpeakArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            text: cli.text.clone(),
            filename: cli.filename.clone(),
            play_only: cli.play,
        }
    }
}

/// Turn arguments plus configuration into a validated request.
pub fn build_request(ctx: &CliContext, args: SpeakArgs) -> Result<SpeechRequest, CliError> {
    let request = SpeechRequest::new(args.text)?
        .with_filename(args.filename)?
        .with_play_only(args.play_only)
        .with_voice(ctx.config.voice.clone())
        .with_output_dir(ctx.config.output_dir.clone());
    Ok(request)
}

/// Execute the speak command.
pub async fn execute(ctx: &CliContext, args: SpeakArgs) -> Result<()> {
    let request = build_request(ctx, args)?;

    if !request.play_only {
        tokio::fs::create_dir_all(&request.output_dir)
            .await
            .map_err(|e| {
                CliError::Io(format!(
                    "cannot create output directory {}: {e}",
                    request.output_dir.display()
                ))
            })?;
    }

    match ctx.invoker.run(&request).await {
        Ok(outcome) => {
            log_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            // Nothing could be played; still a normal exit.
            warn!("All playback fallbacks failed: {e}");
            eprintln!("Could not produce any audio: {e}");
            Ok(())
        }
    }
}

fn log_outcome(outcome: &Outcome) {
    match outcome.output_file() {
        Some(path) => info!(?outcome, "Audio saved to {}", path.display()),
        None => info!(?outcome, "No audio file written"),
    }
}
