//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the setup pipeline needs from the outside
//! world. The `zyrohub-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::error::ZyroResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `zyrohub_adapters::filesystem::LocalFilesystem` (production)
/// - `zyrohub_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a single directory. Fails if it already exists.
    fn create_dir(&self, path: &Path) -> ZyroResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ZyroResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ZyroResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ZyroResult<()>;
}

/// A child process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessCommand {
    /// A command line handed to the platform shell (`sh -c` / `cmd /C`).
    Shell(String),
    /// A program run directly with an argument vector.
    Exec { program: String, args: Vec<String> },
}

impl ProcessCommand {
    pub fn shell(line: impl Into<String>) -> Self {
        Self::Shell(line.into())
    }

    pub fn exec<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The executable this command starts, for error messages.
    pub fn program(&self) -> &str {
        match self {
            Self::Shell(line) => line.split_whitespace().next().unwrap_or_default(),
            Self::Exec { program, .. } => program,
        }
    }
}

impl fmt::Display for ProcessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell(line) => f.write_str(line),
            Self::Exec { program, args } => {
                f.write_str(program)?;
                for arg in args {
                    write!(f, " {arg}")?;
                }
                Ok(())
            }
        }
    }
}

/// Port for running child processes.
///
/// `run` blocks until the process exits. A non-zero exit status is an error.
///
/// Implemented by:
/// - `zyrohub_adapters::process::SystemCommandRunner` (production)
/// - `zyrohub_adapters::process::RecordingCommandRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ProcessCommand, cwd: &Path) -> ZyroResult<()>;
}

/// Port for step progress display.
pub trait ProgressReporter {
    /// A step began; `label` is its start label.
    fn step_started(&mut self, label: &str);

    /// Interim message while a step runs.
    fn message(&mut self, text: &str);

    /// The step finished; `completion` is its success line.
    fn step_succeeded(&mut self, completion: &str);

    /// The step failed and the pipeline stopped.
    fn step_failed(&mut self, label: &str);
}

/// A reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step_started(&mut self, _label: &str) {}
    fn message(&mut self, _text: &str) {}
    fn step_succeeded(&mut self, _completion: &str) {}
    fn step_failed(&mut self, _label: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exec_displays_as_command_line() {
        let cmd = ProcessCommand::exec("git", ["branch", "-M", "main"]);
        assert_eq!(cmd.to_string(), "git branch -M main");
        assert_eq!(cmd.program(), "git");
    }

    #[test]
    fn shell_program_is_first_word() {
        let cmd = ProcessCommand::shell("pnpm add -D typescript");
        assert_eq!(cmd.program(), "pnpm");
    }
}
