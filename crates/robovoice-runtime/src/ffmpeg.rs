//! `ffmpeg` adapter for the transcoder port.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use robovoice_core::{ToolError, ToolOutput, Transcoder};

use crate::exec;

/// Program looked up on `PATH` when none is configured.
pub const DEFAULT_FFMPEG_PROGRAM: &str = "ffmpeg";

/// Transcoder backed by the `ffmpeg` command.
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `ffmpeg -hide_banner -loglevel error -y -i <input> <output>`
    ///
    /// `-y` overwrites an existing output; the container follows the output
    /// extension.
    pub fn build_args(input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-hide_banner".into(),
            "-loglevel".into(),
            "error".into(),
            "-y".into(),
            "-i".into(),
            input.as_os_str().to_owned(),
            output.as_os_str().to_owned(),
        ]
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_PROGRAM)
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<ToolOutput, ToolError> {
        let out = exec::run(&self.program, Self::build_args(input, output)).await?;
        Ok(out.tool)
    }

    fn program(&self) -> &str {
        &self.program
    }
}
