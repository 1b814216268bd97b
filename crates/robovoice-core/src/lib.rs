//! Core domain for robovoice.
//!
//! This crate owns the request/outcome types, the port traits for the two
//! external tools (speech synthesizer and media transcoder), and the
//! [`InvokerService`] that orchestrates them. It never spawns a process
//! itself; concrete adapters live in `robovoice-runtime`.

#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export primary types for convenient access
pub use domain::{
    CONVERTED_EXTENSION, DEFAULT_RATE, DEFAULT_TEXT, DEFAULT_VOICE, Dependency, DependencyStatus,
    INTERMEDIATE_EXTENSION, Outcome, OutputPaths, SpeechRequest, SynthesisResult, ToolOutput,
    VoiceInfo, VoiceSettings, derive_filename,
};
pub use error::{CoreError, ToolError};
pub use ports::{NoopReporter, Reporter, SpeechJob, SpeechSynthesizer, SystemProbePort, Transcoder};
pub use services::InvokerService;
