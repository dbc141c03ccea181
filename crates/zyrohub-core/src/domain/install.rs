//! Dependency sets and package-manager install commands.
//!
//! [`build_install_command`] is the only place that knows how each package
//! manager spells "add these packages". The dependency sets are derived from
//! the configuration; the manifest itself always starts with empty
//! dependency maps.

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{
    entities::ProjectConfiguration,
    value_objects::{PackageManager, ProjectType},
};

/// An ordered, de-duplicated set of package names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet(BTreeSet<String>);

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, package: impl Into<String>) -> Self {
        self.0.insert(package.into());
        self
    }

    pub fn with_if(self, condition: bool, package: impl Into<String>) -> Self {
        if condition { self.with(package) } else { self }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.0.contains(package)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for DependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        f.write_str(&names.join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for DependencySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Runtime dependencies for a configuration. Empty for an unstructured
/// project without dotenv support.
pub fn runtime_dependencies(config: &ProjectConfiguration) -> DependencySet {
    DependencySet::new()
        .with_if(config.create_dot_env(), "@dotenvx/dotenvx")
        .with_if(config.project_type().uses_runtime_core(), "@zyrohub/core")
}

/// Development dependencies for a configuration. Never empty: the compiler
/// toolchain is always installed.
pub fn dev_dependencies(config: &ProjectConfiguration) -> DependencySet {
    DependencySet::new()
        .with("typescript")
        .with("tsc-alias")
        .with("rimraf")
        .with("ts-node")
        .with("@types/node")
        .with_if(config.use_formatter_config(), "prettier")
        .with_if(config.use_formatter_config(), "@zyrohub/config-prettier")
}

/// Shell command installing `packages` with `package_manager`.
///
/// An empty set still yields a valid command (`npm install`); callers skip
/// the invocation when there is nothing to install. Names are joined with
/// single spaces and not quoted.
///
/// ```
/// use zyrohub_core::domain::{install::{build_install_command, DependencySet}, PackageManager};
///
/// let packages: DependencySet = ["typescript", "tsc-alias"].into_iter().collect();
/// assert_eq!(
///     build_install_command(PackageManager::Pnpm, &packages, true),
///     "pnpm add -D tsc-alias typescript"
/// );
/// ```
pub fn build_install_command(
    package_manager: PackageManager,
    packages: &DependencySet,
    dev: bool,
) -> String {
    let mut parts = vec![package_manager.as_str(), package_manager.install_subcommand()];
    if dev {
        parts.push(package_manager.dev_flag());
    }
    parts.extend(packages.iter());
    parts.join(" ")
}

/// Human description of a dependency set for progress messages.
pub fn describe(project_type: ProjectType, dev: bool) -> String {
    let kind = if dev { "development" } else { "runtime" };
    format!("{kind} dependencies for {project_type} project")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProjectType;

    fn config(ty: ProjectType, dot_env: bool, formatter: bool) -> ProjectConfiguration {
        ProjectConfiguration::builder(ty)
            .name("demo")
            .create_dot_env(dot_env)
            .package_manager(PackageManager::Npm)
            .initialize_version_control(false)
            .use_formatter_config(formatter)
            .build()
            .unwrap()
    }

    #[test]
    fn each_manager_uses_its_own_spelling() {
        let pkgs: DependencySet = ["a", "b"].into_iter().collect();
        assert_eq!(build_install_command(PackageManager::Npm, &pkgs, false), "npm install a b");
        assert_eq!(
            build_install_command(PackageManager::Npm, &pkgs, true),
            "npm install --save-dev a b"
        );
        assert_eq!(build_install_command(PackageManager::Yarn, &pkgs, true), "yarn add --dev a b");
        assert_eq!(build_install_command(PackageManager::Pnpm, &pkgs, false), "pnpm add a b");
        assert_eq!(build_install_command(PackageManager::Bun, &pkgs, true), "bun add -d a b");
    }

    #[test]
    fn empty_set_still_builds_a_command() {
        let empty = DependencySet::new();
        for pm in PackageManager::ALL {
            let cmd = build_install_command(pm, &empty, false);
            assert!(cmd.starts_with(pm.as_str()));
            assert!(!cmd.ends_with(' '));
        }
    }

    #[test]
    fn duplicates_collapse_and_order_is_stable() {
        let pkgs: DependencySet = ["zod", "axios", "zod"].into_iter().collect();
        assert_eq!(pkgs.len(), 2);
        assert_eq!(build_install_command(PackageManager::Bun, &pkgs, false), "bun add axios zod");
    }

    #[test]
    fn unstructured_without_dotenv_has_no_runtime_dependencies() {
        assert!(runtime_dependencies(&config(ProjectType::Unstructured, false, false)).is_empty());
    }

    #[test]
    fn application_with_dotenv_pulls_dotenvx_and_core() {
        let deps = runtime_dependencies(&config(ProjectType::Application, true, false));
        assert!(deps.contains("@dotenvx/dotenvx"));
        assert!(deps.contains("@zyrohub/core"));
    }

    #[test]
    fn module_depends_on_core_only() {
        let deps = runtime_dependencies(&config(ProjectType::Module, true, false));
        assert_eq!(deps, ["@zyrohub/core"].into_iter().collect());
    }

    #[test]
    fn dev_dependencies_always_include_compiler() {
        let deps = dev_dependencies(&config(ProjectType::Unstructured, false, false));
        assert!(deps.contains("typescript"));
        assert!(deps.contains("tsc-alias"));
        assert!(!deps.contains("prettier"));
    }

    #[test]
    fn formatter_adds_prettier_packages() {
        let deps = dev_dependencies(&config(ProjectType::Module, false, true));
        assert!(deps.contains("prettier"));
        assert!(deps.contains("@zyrohub/config-prettier"));
    }
}
