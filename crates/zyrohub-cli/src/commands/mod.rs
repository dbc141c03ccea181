//! Subcommand handlers; one module per subcommand.

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
