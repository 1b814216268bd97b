//! Process-backed adapters for robovoice.
//!
//! Implements the `robovoice-core` ports by shelling out to the macOS `say`
//! command and to `ffmpeg`. All commands are spawned with `tokio::process`
//! and awaited to completion; nothing runs in the background.

#![deny(unsafe_code)]

mod exec;
mod ffmpeg;
mod say;
pub mod system;
mod voices;

pub use ffmpeg::{DEFAULT_FFMPEG_PROGRAM, FfmpegTranscoder};
pub use say::{DEFAULT_SAY_PROGRAM, SaySynthesizer};
pub use system::DefaultSystemProbe;
pub use voices::parse_voice_list;
