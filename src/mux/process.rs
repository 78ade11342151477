//! Child-process helpers for driving the multiplexer binary.

use crate::error::MuxError;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of one multiplexer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExecOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Spawn `program` with argv `args` and wait for it.
///
/// Arguments go straight to the child, so nothing here is re-parsed by a
/// shell.
pub(crate) async fn run_process(program: &str, args: &[&str]) -> Result<ExecOutput, MuxError> {
    let mut cmd = Command::new(program);
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd
        .output()
        .await
        .map_err(|e| MuxError(format!("{program}: {e}")))?;

    Ok(ExecOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert non-zero exit status into a contextual error.
pub(crate) fn ensure_success(output: ExecOutput, context: &str) -> Result<ExecOutput, MuxError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("command exited with {}", output.exit_code);
    }

    Err(MuxError(format!("{context}: {details}")))
}
