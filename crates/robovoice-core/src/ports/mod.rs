//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` or `std::process` types in any signature
//! - Intent-based methods ("speak this", "convert that") rather than argv
//! - A tool that runs and exits non-zero returns `Ok(ToolOutput)`; only a
//!   tool that cannot be run at all returns `Err(ToolError)`

pub mod reporter;
pub mod speech;
pub mod system_probe;
pub mod transcoder;

pub use reporter::{NoopReporter, Reporter};
pub use speech::{SpeechJob, SpeechSynthesizer};
pub use system_probe::SystemProbePort;
pub use transcoder::Transcoder;
