//! Speech request and output path types.

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Text spoken when none is given on the command line.
pub const DEFAULT_TEXT: &str = "Ready";

/// Robot voice used for synthesis and direct playback.
pub const DEFAULT_VOICE: &str = "Zarvox";

/// Speaking rate in words per minute.
pub const DEFAULT_RATE: u32 = 180;

/// Extension of the file written by the speech command.
pub const INTERMEDIATE_EXTENSION: &str = "aiff";

/// Extension of the file written by the converter.
pub const CONVERTED_EXTENSION: &str = "wav";

/// Derive an output base filename from spoken text.
///
/// The text is lower-cased and every character outside `[a-z0-9_-]` is
/// dropped. Text with no usable characters (e.g. `"!!!"`) falls back to the
/// name derived from [`DEFAULT_TEXT`].
pub fn derive_filename(text: &str) -> String {
    let name = filter_filename(text);
    if name.is_empty() {
        filter_filename(DEFAULT_TEXT)
    } else {
        name
    }
}

fn filter_filename(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_')
        .collect()
}

/// Voice customisation passed to the speech command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSettings {
    /// Voice identifier understood by the speech command.
    pub voice: String,
    /// Speaking rate in words per minute.
    pub rate: u32,
}

impl VoiceSettings {
    pub fn new(voice: impl Into<String>, rate: u32) -> Self {
        Self {
            voice: voice.into(),
            rate,
        }
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::new(DEFAULT_VOICE, DEFAULT_RATE)
    }
}

/// Intermediate and converted file locations for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// File written by the speech command.
    pub intermediate: PathBuf,
    /// File written by the converter.
    pub converted: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, filename: &str) -> Self {
        Self {
            intermediate: dir.join(format!("{filename}.{INTERMEDIATE_EXTENSION}")),
            converted: dir.join(format!("{filename}.{CONVERTED_EXTENSION}")),
        }
    }
}

/// One invocation of the invoker, built from command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to speak. Never empty.
    pub text: String,
    /// Output base filename without extension.
    pub filename: String,
    /// Route audio to the playback device instead of a file.
    pub play_only: bool,
    /// Voice and rate for synthesis and direct playback.
    pub voice: VoiceSettings,
    /// Directory the output files are written to.
    pub output_dir: PathBuf,
}

impl SpeechRequest {
    /// Create a request for `text`, deriving the filename from it.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CoreError::Validation("text to speak must not be empty".into()));
        }
        let filename = derive_filename(&text);
        Ok(Self {
            text,
            filename,
            play_only: false,
            voice: VoiceSettings::default(),
            output_dir: PathBuf::from("."),
        })
    }

    /// Override the derived filename. `None` keeps the derived one.
    pub fn with_filename(mut self, filename: Option<String>) -> Result<Self, CoreError> {
        let Some(name) = filename else {
            return Ok(self);
        };
        if name.trim().is_empty() {
            return Err(CoreError::Validation("filename must not be empty".into()));
        }
        if name.contains(['/', '\\']) {
            return Err(CoreError::Validation(format!(
                "filename '{name}' must not contain path separators; use --output-dir instead"
            )));
        }
        self.filename = name;
        Ok(self)
    }

    #[must_use]
    pub const fn with_play_only(mut self, play_only: bool) -> Self {
        self.play_only = play_only;
        self
    }

    #[must_use]
    pub fn with_voice(mut self, voice: VoiceSettings) -> Self {
        self.voice = voice;
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.output_dir, &self.filename)
    }
}
