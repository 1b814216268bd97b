//! macOS `say` adapter for the speech synthesizer port.

use std::ffi::OsString;

use async_trait::async_trait;
use robovoice_core::{SpeechJob, SpeechSynthesizer, SynthesisResult, ToolError, VoiceInfo};
use tracing::{debug, warn};

use crate::exec;
use crate::voices::parse_voice_list;

/// Program looked up on `PATH` when none is configured.
pub const DEFAULT_SAY_PROGRAM: &str = "say";

/// Speech synthesizer backed by the `say` command.
#[derive(Debug, Clone)]
pub struct SaySynthesizer {
    program: String,
}

impl SaySynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the argument list for `job`.
    ///
    /// `say -v <voice> -r <rate> [-o <file>] -- <text>`
    ///
    /// `--` keeps text that starts with `-` from being read as an option.
    pub fn build_args(job: &SpeechJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        if let Some(voice) = &job.voice {
            args.push("-v".into());
            args.push(voice.voice.clone().into());
            args.push("-r".into());
            args.push(voice.rate.to_string().into());
        }
        if let Some(output) = &job.output {
            args.push("-o".into());
            args.push(output.clone().into_os_string());
        }
        args.push("--".into());
        args.push(job.text.clone().into());
        args
    }
}

impl Default for SaySynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_SAY_PROGRAM)
    }
}

#[async_trait]
impl SpeechSynthesizer for SaySynthesizer {
    async fn speak(&self, job: &SpeechJob) -> Result<SynthesisResult, ToolError> {
        let out = exec::run(&self.program, Self::build_args(job)).await?;
        Ok(out.tool)
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, ToolError> {
        let out = exec::run(&self.program, ["-v", "?"]).await?;
        if !out.tool.success() {
            warn!(
                "{} could not list voices: {}",
                self.program,
                out.tool.failure_summary()
            );
            return Ok(Vec::new());
        }
        let voices = parse_voice_list(&out.stdout);
        debug!("{} reported {} voices", self.program, voices.len());
        Ok(voices)
    }

    fn program(&self) -> &str {
        &self.program
    }
}
