//! Application layer for ZyroHub.
//!
//! - **Services**: the setup plan and the orchestrator that executes it
//! - **Ports**: traits for the filesystem, child processes and progress
//! - **Errors**: orchestration failures
//!
//! Business rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{SetupPlan, SetupReport, SetupService, SetupStep, StepAction, StepKind};

pub use ports::{CommandRunner, Filesystem, ProcessCommand, ProgressReporter, SilentReporter};

pub use error::{ApplicationError, CleanupStatus};
