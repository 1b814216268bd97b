//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call the core invoker or a port on `CliContext`
//!   3. Format output for the terminal
//!
//! Handlers should NOT spawn processes or contain fallback logic.

pub mod check_deps;
pub mod speak;
pub mod voices;
