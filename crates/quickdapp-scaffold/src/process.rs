//! External process execution
//!
//! All external programs (git, forge, package managers) are invoked
//! through the [`CommandRunner`] trait so callers can be exercised with
//! a fake runner in tests.

use crate::error::{Error, Result};
use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Options for running an external command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Working directory (defaults to the process working directory)
    pub cwd: Option<Utf8PathBuf>,
    /// Capture output instead of streaming it to the terminal
    pub silent: bool,
}

impl RunOptions {
    /// Captured output, running in `cwd`
    pub fn silent_in(cwd: impl Into<Utf8PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
            silent: true,
        }
    }

    /// Captured output, running in the process working directory
    pub fn silent() -> Self {
        Self {
            cwd: None,
            silent: true,
        }
    }
}

/// Seam for invoking external programs
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion
    ///
    /// Returns `Ok(())` only on exit status 0. Non-zero exit, spawn
    /// failure, and signal termination are all normalized into
    /// [`Error::CommandFailed`] carrying the full command line.
    async fn run(&self, command: &str, args: &[&str], options: &RunOptions) -> Result<()>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &str, args: &[&str], options: &RunOptions) -> Result<()> {
        let rendered = render_command(command, args);
        debug!("Running: {}", rendered);

        let mut cmd = Command::new(command);
        cmd.args(args);
        if let Some(cwd) = &options.cwd {
            cmd.current_dir(cwd);
        }

        if options.silent {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

            let output = cmd
                .output()
                .await
                .map_err(|e| Error::command_failed(rendered.as_str(), e.to_string()))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let message = if stderr.trim().is_empty() {
                    exit_message(output.status)
                } else {
                    stderr.trim().to_string()
                };
                return Err(Error::command_failed(rendered, message));
            }
        } else {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            let status = cmd
                .status()
                .await
                .map_err(|e| Error::command_failed(rendered.as_str(), e.to_string()))?;

            if !status.success() {
                return Err(Error::command_failed(rendered, exit_message(status)));
            }
        }

        Ok(())
    }
}

fn render_command(command: &str, args: &[&str]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}

fn exit_message(status: std::process::ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}
