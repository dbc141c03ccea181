pub mod common;
pub mod manifest;
pub mod project_config;

pub use crate::domain::DomainError;
pub use manifest::PackageManifest;
pub use project_config::{ProjectConfiguration, ProjectConfigurationBuilder};
