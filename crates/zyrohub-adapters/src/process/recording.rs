//! A runner that records commands instead of running them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use zyrohub_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, ProcessCommand},
    },
    error::ZyroResult,
};

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<(ProcessCommand, PathBuf)>,
    fail_program: Option<String>,
}

/// Test double for [`CommandRunner`]. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingCommandRunner {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every command whose program is `program`.
    pub fn failing(program: impl Into<String>) -> Self {
        let runner = Self::default();
        if let Ok(mut inner) = runner.inner.lock() {
            inner.fail_program = Some(program.into());
        }
        runner
    }

    /// Command lines seen so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.inner
            .lock()
            .map(|inner| inner.calls.iter().map(|(c, _)| c.to_string()).collect())
            .unwrap_or_default()
    }

    /// Working directories seen so far, in order.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.inner
            .lock()
            .map(|inner| inner.calls.iter().map(|(_, d)| d.clone()).collect())
            .unwrap_or_default()
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(&self, command: &ProcessCommand, cwd: &Path) -> ZyroResult<()> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::CommandFailed {
            command: command.to_string(),
            reason: "recorder lock poisoned".into(),
        })?;
        inner.calls.push((command.clone(), cwd.to_path_buf()));

        if inner.fail_program.as_deref() == Some(command.program()) {
            return Err(ApplicationError::CommandFailed {
                command: command.to_string(),
                reason: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
