//! Domain value objects: ProjectType and PackageManager.
//!
//! Pure value types: `Copy`, equality-by-value, no identity. Each carries its
//! string representation and the facts intrinsic to the variant, such as the
//! name prefix of a project type or the install subcommand of a package
//! manager. Only package managers are parsed from text (the config file).

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ProjectType ──────────────────────────────────────────────────────────────

/// The kind of project to scaffold. Selected first; gates every later question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// An application built on the ZyroHub runtime core.
    Application,
    /// A reusable ZyroHub core module.
    Module,
    /// A project without a specific structure.
    Unstructured,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [Self::Application, Self::Module, Self::Unstructured];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Module => "module",
            Self::Unstructured => "unstructured",
        }
    }

    /// Required prefix of the canonical project name.
    pub const fn name_prefix(&self) -> &'static str {
        match self {
            Self::Application => "app-",
            Self::Module => "module-",
            Self::Unstructured => "",
        }
    }

    /// Whether the cluster and dotenv questions apply.
    pub const fn is_application(&self) -> bool {
        matches!(self, Self::Application)
    }

    /// Whether the library-fields question applies.
    pub const fn supports_library_fields(&self) -> bool {
        matches!(self, Self::Module | Self::Unstructured)
    }

    /// Whether the generated sources import the runtime core.
    pub const fn uses_runtime_core(&self) -> bool {
        matches!(self, Self::Application | Self::Module)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// A JavaScript package manager used to install dependencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];

    /// Executable name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Human-facing label used in prompts.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Npm => "NPM",
            Self::Yarn => "Yarn",
            Self::Pnpm => "PNPM",
            Self::Bun => "Bun",
        }
    }

    /// Subcommand that adds packages to the manifest.
    pub const fn install_subcommand(&self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Yarn | Self::Pnpm | Self::Bun => "add",
        }
    }

    /// Flag that marks packages as development dependencies.
    pub const fn dev_flag(&self) -> &'static str {
        match self {
            Self::Npm => "--save-dev",
            Self::Yarn => "--dev",
            Self::Pnpm => "-D",
            Self::Bun => "-d",
        }
    }

    /// Parse a configured name, falling back to npm for anything unknown.
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            other => Err(DomainError::InvalidValue {
                field: "package manager",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_prefixes() {
        assert_eq!(ProjectType::Application.name_prefix(), "app-");
        assert_eq!(ProjectType::Module.name_prefix(), "module-");
        assert_eq!(ProjectType::Unstructured.name_prefix(), "");
    }

    #[test]
    fn question_gates_follow_project_type() {
        assert!(ProjectType::Application.is_application());
        assert!(!ProjectType::Application.supports_library_fields());
        assert!(ProjectType::Module.supports_library_fields());
        assert!(ProjectType::Unstructured.supports_library_fields());
        assert!(!ProjectType::Unstructured.uses_runtime_core());
    }

    #[test]
    fn package_manager_display_is_executable_name() {
        assert_eq!(PackageManager::Pnpm.to_string(), "pnpm");
        assert_eq!(PackageManager::default(), PackageManager::Npm);
    }

    #[test]
    fn package_manager_from_str_unknown_errors() {
        assert_eq!("Yarn".parse::<PackageManager>().unwrap(), PackageManager::Yarn);
        assert!("deno".parse::<PackageManager>().is_err());
    }

    #[test]
    fn unknown_configured_manager_falls_back_to_npm() {
        assert_eq!(PackageManager::parse_or_default("bun"), PackageManager::Bun);
        assert_eq!(PackageManager::parse_or_default("deno"), PackageManager::Npm);
    }
}
