//! Domain types.
//!
//! Everything here is plain data: no process handling, no filesystem access.

mod outcome;
mod request;
mod system;

pub use outcome::{Outcome, SynthesisResult, ToolOutput};
pub use request::{
    CONVERTED_EXTENSION, DEFAULT_RATE, DEFAULT_TEXT, DEFAULT_VOICE, INTERMEDIATE_EXTENSION,
    OutputPaths, SpeechRequest, VoiceSettings, derive_filename,
};
pub use system::{Dependency, DependencyStatus, VoiceInfo};
