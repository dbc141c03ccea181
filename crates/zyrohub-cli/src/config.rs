//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ZYROHUB_DEFAULTS__PACKAGE_MANAGER=pnpm`
//! 3. Config file (`--config` or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use zyrohub_core::prelude::PackageManager;

const ENV_PREFIX: &str = "ZYROHUB";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preselected answers for the create prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub package_manager: String,
    pub author: Option<String>,
    pub initialize_git: bool,
    pub use_formatter_config: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            package_manager: PackageManager::default().as_str().into(),
            author: None,
            initialize_git: true,
            use_formatter_config: true,
        }
    }
}

impl Defaults {
    /// Configured package manager; unknown names fall back to npm.
    pub fn package_manager(&self) -> PackageManager {
        PackageManager::parse_or_default(&self.package_manager)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path given with `--config`; that file must
    /// exist. Without it the platform default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");
        Self::layered(&path, config_file.is_some(), env)
    }

    fn layered(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.zyrohub.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "zyrohub", "zyrohub")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".zyrohub.toml"))
    }
}
