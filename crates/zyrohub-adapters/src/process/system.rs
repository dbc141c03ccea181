//! Runs commands with `std::process::Command`, blocking until they exit.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Output};

use thiserror::Error;
use tracing::{debug, instrument};
use zyrohub_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, ProcessCommand},
    },
    error::{ZyroError, ZyroResult},
};

/// Failures of a single process invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("'{program}' was not found")]
    NotFound { program: String },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Exit {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.trim().lines().last() {
        Some(line) if !line.is_empty() => format!(": {line}"),
        _ => String::new(),
    }
}

impl From<RunnerError> for ZyroError {
    fn from(e: RunnerError) -> Self {
        match e {
            RunnerError::NotFound { program } => ApplicationError::CommandNotFound { program },
            RunnerError::Spawn { ref command, .. } | RunnerError::Exit { ref command, .. } => {
                ApplicationError::CommandFailed {
                    command: command.clone(),
                    reason: e.to_string(),
                }
            }
        }
        .into()
    }
}

/// Production runner.
///
/// Shell commands go through `sh -c` (or `cmd /C` on Windows) so package
/// manager shims resolve the way they do in a terminal; argv commands are
/// started directly. Output is captured and only surfaced on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(command: &ProcessCommand) -> Command {
        match command {
            ProcessCommand::Shell(line) => {
                let mut cmd = if cfg!(windows) {
                    let mut cmd = Command::new("cmd");
                    cmd.arg("/C");
                    cmd
                } else {
                    let mut cmd = Command::new("sh");
                    cmd.arg("-c");
                    cmd
                };
                cmd.arg(line);
                cmd
            }
            ProcessCommand::Exec { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        }
    }

    fn check(command: &ProcessCommand, output: Output) -> Result<(), RunnerError> {
        if output.status.success() {
            return Ok(());
        }

        // 127 is the shell's "command not found".
        if matches!(command, ProcessCommand::Shell(_)) && output.status.code() == Some(127) {
            return Err(RunnerError::NotFound {
                program: command.program().to_string(),
            });
        }

        Err(RunnerError::Exit {
            command: command.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run `command` in `cwd`, returning the adapter-level error.
    pub fn run_raw(&self, command: &ProcessCommand, cwd: &Path) -> Result<(), RunnerError> {
        let output = Self::build(command)
            .current_dir(cwd)
            .output()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    RunnerError::NotFound {
                        program: command.program().to_string(),
                    }
                } else {
                    RunnerError::Spawn {
                        command: command.to_string(),
                        source,
                    }
                }
            })?;

        debug!(status = %output.status, "Process exited");
        Self::check(command, output)
    }
}

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip_all, fields(command = %command, cwd = %cwd.display()))]
    fn run(&self, command: &ProcessCommand, cwd: &Path) -> ZyroResult<()> {
        Ok(self.run_raw(command, cwd)?)
    }
}
