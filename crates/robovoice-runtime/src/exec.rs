//! Run an external command to completion and capture its output.

use std::ffi::OsStr;
use std::process::Stdio;

use robovoice_core::{ToolError, ToolOutput};
use tokio::process::Command;
use tracing::debug;

/// Output of a finished command.
#[derive(Debug)]
pub struct ExecOutput {
    /// Exit status and stderr.
    pub tool: ToolOutput,
    /// Captured stdout, lossily decoded.
    pub stdout: String,
}

/// Spawn `program` with `args`, wait for it, and capture stdout/stderr.
///
/// No timeout is applied: a hung tool blocks the caller.
pub async fn run<I, S>(program: &str, args: I) -> Result<ExecOutput, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!("Running {:?}", cmd.as_std());

    let output = cmd
        .output()
        .await
        .map_err(|e| ToolError::from_spawn(program, e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    debug!(
        program,
        status = ?output.status.code(),
        stderr = %stderr.trim(),
        "Command finished"
    );

    Ok(ExecOutput {
        tool: ToolOutput::new(output.status.code(), stderr),
        stdout,
    })
}
