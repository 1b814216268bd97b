//! Terminal presentation: console reporter and table formatting.

mod console;
mod tables;

pub use console::ConsoleReporter;
pub use tables::{format_dependency_row, format_voice_table};

// ANSI color codes for better UX
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const YELLOW: &str = "\x1b[33m";
pub(crate) const BLUE: &str = "\x1b[34m";
pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const RESET: &str = "\x1b[0m";
