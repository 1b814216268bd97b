//! Check external tool dependencies handler.

use anyhow::Result;
use robovoice_core::ports::SystemProbePort;

use crate::error::CliError;
use crate::presentation::{BLUE, BOLD, GREEN, RED, RESET, YELLOW, format_dependency_row};

/// Execute the check-deps command.
///
/// Prints a status table for the speech and conversion programs. Returns an
/// error when a required program is missing.
pub fn execute(probe: &dyn SystemProbePort) -> Result<()> {
    println!("{BOLD}{BLUE}Checking external tools...{RESET}\n");

    let dependencies = probe.check_all_dependencies();

    println!(
        "{}{:<20} {:<15} {:<40}{}",
        BOLD, "PROGRAM", "STATUS", "NOTES", RESET
    );
    println!("{}", "=".repeat(75));

    for dep in &dependencies {
        println!("{}", format_dependency_row(dep));
    }
    println!();

    for dep in dependencies.iter().filter(|d| d.is_missing()) {
        if let Some(hint) = &dep.install_hint {
            println!("  {YELLOW}{}:{RESET} {hint}", dep.name);
        }
    }

    let missing_required: Vec<&str> = dependencies
        .iter()
        .filter(|d| d.required && d.is_missing())
        .map(|d| d.name.as_str())
        .collect();

    if missing_required.is_empty() {
        println!("{GREEN}✓ All required programs are installed!{RESET}");
        Ok(())
    } else {
        println!("{RED}✗ Required programs are missing.{RESET}");
        Err(CliError::MissingDependency(missing_required.join(", ")).into())
    }
}
