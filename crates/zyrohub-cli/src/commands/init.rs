//! `zyrohub init`: create a default configuration file.

use std::path::Path;

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default ZyroHub configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();

    if write_default(&config_path, args.force)? {
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    } else {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
    }

    Ok(())
}

/// Write the built-in defaults as TOML. Returns `false` when the file
/// exists and `force` is off.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    info!(path = %path.display(), "default configuration written");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_defaults_into_new_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zyrohub").join("config.toml");

        assert!(write_default(&path, false).unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[defaults]"));
        assert!(written.contains("package_manager = \"npm\""));
        assert!(written.contains("[output]"));
    }

    #[test]
    fn keeps_existing_file_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(!write_default(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_default(&path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
