//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the setup pipeline and implemented by
//! infrastructure:
//!   - `Filesystem`: directory and file operations
//!   - `CommandRunner`: package manager and git invocations
//!   - `ProgressReporter`: per-step progress display

pub mod output;

pub use output::{CommandRunner, Filesystem, ProcessCommand, ProgressReporter, SilentReporter};

#[cfg(test)]
pub use output::MockCommandRunner;
