//! Speech synthesizer port.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::{SynthesisResult, VoiceInfo, VoiceSettings};
use crate::error::ToolError;

/// One call to the speech command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechJob {
    /// Text to speak.
    pub text: String,
    /// Voice and rate; `None` uses the command's own defaults.
    pub voice: Option<VoiceSettings>,
    /// Write audio to this file instead of the playback device.
    pub output: Option<PathBuf>,
}

impl SpeechJob {
    /// Synthesize `text` into `output`.
    pub fn to_file(text: impl Into<String>, voice: VoiceSettings, output: PathBuf) -> Self {
        Self {
            text: text.into(),
            voice: Some(voice),
            output: Some(output),
        }
    }

    /// Speak `text` on the playback device with the given voice.
    pub fn playback(text: impl Into<String>, voice: VoiceSettings) -> Self {
        Self {
            text: text.into(),
            voice: Some(voice),
            output: None,
        }
    }

    /// Speak `text` with no customisation at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
            output: None,
        }
    }
}

/// Port for the operating system's text-to-speech command.
///
/// Implementations run the command to completion before returning.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Run the speech command for `job` and wait for it to exit.
    async fn speak(&self, job: &SpeechJob) -> Result<SynthesisResult, ToolError>;

    /// Voices the command can speak with.
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, ToolError> {
        Ok(Vec::new())
    }

    /// Program name, for messages.
    fn program(&self) -> &str;
}
