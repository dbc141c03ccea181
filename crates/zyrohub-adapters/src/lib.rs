//! Infrastructure adapters for ZyroHub.
//!
//! This crate implements the ports defined in
//! `zyrohub_core::application::ports`. It owns every real I/O operation the
//! setup pipeline performs.

pub mod filesystem;
pub mod process;
pub mod progress;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingCommandRunner, SystemCommandRunner};
pub use progress::{ProgressEvent, RecordingReporter};
