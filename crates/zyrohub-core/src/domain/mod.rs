//! Core domain layer for ZyroHub.
//!
//! Pure business logic: naming rules, the project configuration record, the
//! package manifest model, file renderers and install command building.
//! All filesystem and process effects go through the ports defined in
//! [`crate::application::ports`].
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, process or network calls
//! - **Immutable entities**: a finalized [`ProjectConfiguration`] never changes

pub mod entities;
pub mod error;
pub mod install;
pub mod naming;
pub mod templates;
pub mod value_objects;

mod validation;

pub use entities::{
    PackageManifest, ProjectConfiguration, ProjectConfigurationBuilder, common::RelativePath,
    project_config::{BLANK_ANSWER, DEFAULT_BRANCH},
};
pub use error::{DomainError, ErrorCategory};
pub use install::{DependencySet, build_install_command, dev_dependencies, runtime_dependencies};
pub use validation::DomainValidator;
pub use value_objects::{PackageManager, ProjectType};

#[cfg(test)]
mod tests {
    use super::*;

    fn module_config(name: &str) -> ProjectConfiguration {
        ProjectConfiguration::builder(ProjectType::Module)
            .name(name)
            .package_manager(PackageManager::Pnpm)
            .initialize_version_control(true)
            .use_formatter_config(true)
            .build()
            .unwrap()
    }

    #[test]
    fn configuration_feeds_every_renderer() {
        let cfg = module_config("auth tools");
        assert_eq!(cfg.name(), "module-auth-tools");

        let manifest = templates::render_manifest(&cfg).unwrap();
        assert!(manifest.contains("\"name\": \"module-auth-tools\""));

        let skeleton = templates::render_module_skeleton(&cfg);
        assert!(skeleton.contains("class AuthToolsModule"));
    }

    #[test]
    fn dev_install_command_for_formatted_module() {
        let cfg = module_config("auth");
        let command = build_install_command(
            cfg.package_manager(),
            &dev_dependencies(&cfg),
            true,
        );
        assert!(command.starts_with("pnpm add -D "));
        assert!(command.contains("prettier"));
        assert!(command.contains("@zyrohub/config-prettier"));
    }
}
