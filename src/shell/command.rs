//! Blocking subprocess execution.
//!
//! Every external interaction in this tool is a synchronous, sequential
//! subprocess call. Results carry a success flag plus captured output;
//! spawn failures are converted into error values at the call site and
//! never propagate as panics.

use crate::error::{HookstrapError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }

    /// Combined stderr-then-stdout text, trimmed, for one-line error display.
    pub fn error_text(&self) -> String {
        let text = if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        };
        text.to_string()
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Execute a shell command, capturing stdout and stderr.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandOutput> {
    let shell = detect_shell();
    let flag = shell_flag();

    let mut cmd = Command::new(&shell);
    cmd.arg(flag);
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|_| HookstrapError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if output.status.success() {
        Ok(CommandOutput::success(stdout, stderr))
    } else {
        Ok(CommandOutput::failure(output.status.code(), stdout, stderr))
    }
}

/// Execute a command and return success/failure.
pub fn execute_check(command: &str, cwd: Option<&Path>) -> bool {
    execute_quiet(command, cwd).success
}

/// Execute a command, converting spawn failures into a failure result.
///
/// This is the shape the orchestration layer wants: external-process
/// failures become `(success flag, captured output)` values rather than
/// errors that need unwinding.
pub fn execute_quiet(command: &str, cwd: Option<&Path>) -> CommandOutput {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        ..Default::default()
    };

    match execute(command, &options) {
        Ok(result) => result,
        Err(e) => CommandOutput::failure(None, String::new(), e.to_string()),
    }
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}
