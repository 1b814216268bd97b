//! User-facing progress messages.
//!
//! The invoker narrates what it does ("created", "conversion failed", ...)
//! through this port so the CLI can print it and tests can capture it.

/// Sink for user-facing messages.
pub trait Reporter: Send + Sync {
    /// Progress or success message.
    fn info(&self, message: &str);

    /// Failure message, including recovered ones.
    fn error(&self, message: &str);
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
