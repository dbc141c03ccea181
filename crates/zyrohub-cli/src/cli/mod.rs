//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "zyrohub",
    bin_name = "zyrohub",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2615} Scaffold ZyroHub TypeScript projects",
    long_about = "ZyroHub asks a few questions and sets up an application, \
                  a reusable module or a plain TypeScript project: manifest, \
                  compiler settings, sources, git and dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 zyrohub create\n\
        \x20 zyrohub create billing-api\n\
        \x20 zyrohub config list\n\
        \x20 zyrohub completions bash > /usr/share/bash-completion/completions/zyrohub",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project interactively.
    #[command(
        visible_alias = "c",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 zyrohub create\n\
            \x20 zyrohub create \"Billing API\""
    )]
    Create(CreateArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 zyrohub init\n\
            \x20 zyrohub init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 zyrohub completions bash > ~/.local/share/bash-completion/completions/zyrohub\n\
            \x20 zyrohub completions zsh  > ~/.zfunc/_zyrohub\n\
            \x20 zyrohub completions fish > ~/.config/fish/completions/zyrohub.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ZyroHub configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 zyrohub config get defaults.package_manager\n\
            \x20 zyrohub config list\n\
            \x20 zyrohub config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `zyrohub create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Initial answer for the project name question.
    #[arg(value_name = "PROJECT_NAME", help = "Project name (prefilled in the prompt)")]
    pub project_name: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `zyrohub init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `zyrohub completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `zyrohub config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.package_manager`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
