//! The invoker: synthesize, convert, clean up, and fall back.
//!
//! Every branch of the flow ends in exactly one [`Outcome`]:
//!
//! ```text
//! Start -> Synthesizing -> Converted
//!                       -> ConversionFailed (IntermediateOnly)
//!                       -> SynthesisFailed -> Playback (PlayedDirectly)
//!       -> (tool cannot be run) -> PlayedWithDefaultVoice
//! ```
//!
//! Each external command is awaited to completion before the next one
//! starts. There are no retries beyond the single fallback step.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    CONVERTED_EXTENSION, INTERMEDIATE_EXTENSION, Outcome, OutputPaths, SpeechRequest,
};
use crate::error::ToolError;
use crate::ports::{Reporter, SpeechJob, SpeechSynthesizer, Transcoder};

/// Why the primary path gave up and the default-voice playback must run.
struct Fallback(String);

impl From<ToolError> for Fallback {
    fn from(err: ToolError) -> Self {
        Self(err.to_string())
    }
}

/// Runs one [`SpeechRequest`] against the injected tools.
#[derive(Clone)]
pub struct InvokerService {
    speech: Arc<dyn SpeechSynthesizer>,
    transcoder: Arc<dyn Transcoder>,
    reporter: Arc<dyn Reporter>,
}

impl InvokerService {
    pub fn new(
        speech: Arc<dyn SpeechSynthesizer>,
        transcoder: Arc<dyn Transcoder>,
        reporter: Arc<dyn Reporter>,
    ) -> Self {
        Self {
            speech,
            transcoder,
            reporter,
        }
    }

    /// Run the request to completion.
    ///
    /// Recoverable failures are folded into the returned [`Outcome`]. The
    /// only error is the case where even plain playback cannot be launched.
    pub async fn run(&self, request: &SpeechRequest) -> Result<Outcome, ToolError> {
        debug!(
            text = %request.text,
            filename = %request.filename,
            play_only = request.play_only,
            "Starting speech request"
        );

        let attempt = if request.play_only {
            self.play(request).await
        } else {
            self.synthesize_to_file(request).await
        };

        match attempt {
            Ok(outcome) => Ok(outcome),
            Err(Fallback(cause)) => self.play_default_voice(&request.text, cause).await,
        }
    }

    async fn play(&self, request: &SpeechRequest) -> Result<Outcome, Fallback> {
        self.reporter.info("Playing robot voice...");
        let job = SpeechJob::playback(&request.text, request.voice.clone());
        let result = self.speech.speak(&job).await?;

        if result.success() {
            self.reporter.info("Done!");
            Ok(Outcome::PlayedDirectly {
                synthesis_error: None,
            })
        } else {
            Err(Fallback(format!(
                "{} exited unsuccessfully: {}",
                self.speech.program(),
                result.failure_summary()
            )))
        }
    }

    async fn synthesize_to_file(&self, request: &SpeechRequest) -> Result<Outcome, Fallback> {
        let paths = request.output_paths();
        let intermediate_existed = exists(&paths.intermediate).await;

        let job = SpeechJob::to_file(
            &request.text,
            request.voice.clone(),
            paths.intermediate.clone(),
        );
        let result = self.speech.speak(&job).await?;

        if result.success() {
            self.reporter.info(&format!(
                "Done! Robot voice '{}' created!",
                paths.intermediate.display()
            ));
            return Ok(self.convert(&paths).await);
        }

        let stderr = result.failure_summary();
        self.reporter.error(&format!("Error: {stderr}"));
        if !intermediate_existed {
            remove_if_exists(&paths.intermediate).await;
        }

        self.reporter.info("Trying direct playback...");
        let playback = self
            .speech
            .speak(&SpeechJob::playback(&request.text, request.voice.clone()))
            .await?;
        if !playback.success() {
            let summary = playback.failure_summary();
            warn!("Direct playback also failed: {summary}");
            self.reporter
                .error(&format!("Direct playback failed too, nothing was played: {summary}"));
        }

        Ok(Outcome::PlayedDirectly {
            synthesis_error: Some(stderr),
        })
    }

    /// Convert the intermediate file. Never fails: a broken conversion keeps
    /// the intermediate file and reports why.
    async fn convert(&self, paths: &OutputPaths) -> Outcome {
        let converted_existed = exists(&paths.converted).await;

        let reason = match self
            .transcoder
            .transcode(&paths.intermediate, &paths.converted)
            .await
        {
            Ok(output) if output.success() => {
                if let Err(e) = tokio::fs::remove_file(&paths.intermediate).await {
                    warn!(
                        "Converted, but could not remove {}: {}",
                        paths.intermediate.display(),
                        e
                    );
                }
                info!("Converted {}", paths.converted.display());
                self.reporter.info(&format!(
                    "Converted to {} format!",
                    CONVERTED_EXTENSION.to_uppercase()
                ));
                return Outcome::Converted {
                    path: paths.converted.clone(),
                };
            }
            Ok(output) => format!(
                "{} exited unsuccessfully: {}",
                self.transcoder.program(),
                output.failure_summary()
            ),
            Err(e) => e.to_string(),
        };

        debug!(%reason, "Conversion failed");
        if !converted_existed {
            remove_if_exists(&paths.converted).await;
        }
        self.reporter.info(&format!(
            "{} conversion failed, but {} file works fine!",
            CONVERTED_EXTENSION.to_uppercase(),
            INTERMEDIATE_EXTENSION.to_uppercase()
        ));
        self.reporter.info(&format!("  ({reason})"));

        Outcome::IntermediateOnly {
            path: paths.intermediate.clone(),
            reason,
        }
    }

    async fn play_default_voice(&self, text: &str, cause: String) -> Result<Outcome, ToolError> {
        self.reporter.error(&format!("Error: {cause}"));
        self.reporter.info("Using simple approach...");

        let result = self.speech.speak(&SpeechJob::plain(text)).await?;
        if !result.success() {
            warn!("Plain playback failed: {}", result.failure_summary());
        }

        Ok(Outcome::PlayedWithDefaultVoice { cause })
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn remove_if_exists(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => debug!("Removed partial output {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove {}: {}", path.display(), e),
    }
}
