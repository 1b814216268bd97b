//! System probe port for external tool detection.
//!
//! Core owns the trait and types; `robovoice-runtime` owns the
//! implementation, which actively runs `--version` style probes.

use crate::domain::Dependency;

/// Port for probing which external tools are installed.
pub trait SystemProbePort: Send + Sync {
    /// Check every external tool robovoice uses.
    fn check_all_dependencies(&self) -> Vec<Dependency>;
}
