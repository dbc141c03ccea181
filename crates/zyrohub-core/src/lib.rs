//! ZyroHub Core - project scaffolding as ports and adapters.
//!
//! This crate provides the domain and application layers for the `zyrohub`
//! scaffolder. It performs no I/O of its own; the filesystem, child
//! processes and progress display are reached through the traits in
//! [`application::ports`].
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           zyrohub-cli (CLI)             │
//! │   prompts, progress, error display      │
//! └──────────────────┬──────────────────────┘
//!                    │ ProjectConfiguration
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (SetupPlan, SetupService)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, CommandRunner, Progress)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     zyrohub-adapters (Infrastructure)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zyrohub_core::prelude::*;
//!
//! let config = ProjectConfiguration::builder(ProjectType::Application)
//!     .name("api")
//!     .package_manager(PackageManager::Pnpm)
//!     .initialize_version_control(true)
//!     .use_formatter_config(true)
//!     .build()?;
//!
//! let service = SetupService::new(filesystem, runner);
//! let report = service.setup(&config, &cwd, &mut reporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// Everything a driving adapter needs.
pub mod prelude {
    pub use crate::application::{
        ApplicationError, CleanupStatus, SetupPlan, SetupReport, SetupService,
        ports::{CommandRunner, Filesystem, ProcessCommand, ProgressReporter},
    };
    pub use crate::domain::{
        PackageManager, ProjectConfiguration, ProjectConfigurationBuilder, ProjectType,
        naming::normalize,
    };
    pub use crate::error::{ZyroError, ZyroResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
