//! Template renderers for every generated file.
//!
//! Each renderer is a pure function of a [`ProjectConfiguration`] (or of
//! nothing, for fixed boilerplate) returning the file contents. No I/O.
//! JSON files are emitted with four-space indentation and a trailing
//! newline, matching what the package managers themselves write.

mod compiler;
mod formatter;
mod ignore;
mod source;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::domain::{
    entities::{PackageManifest, ProjectConfiguration},
    error::DomainError,
};

pub use compiler::render_compiler_config;
pub use formatter::{render_formatter_config, render_formatter_ignore};
pub use ignore::render_gitignore;
pub use source::{render_entry_point, render_module_skeleton};

/// File names of everything the pipeline may write.
pub mod files {
    pub const MANIFEST: &str = "package.json";
    pub const COMPILER_CONFIG: &str = "tsconfig.json";
    pub const GITIGNORE: &str = ".gitignore";
    pub const FORMATTER_CONFIG: &str = ".prettierrc.js";
    pub const FORMATTER_IGNORE: &str = ".prettierignore";
    pub const ENV_FILES: [&str; 3] = [".env", ".env.example", ".env.development"];
    pub const SOURCE_DIR: &str = "src";
    pub const ENTRY_POINT: &str = "src/index.ts";
    pub const MODULE_DEFINITION: &str = "src/Module.ts";
}

/// `package.json` contents.
pub fn render_manifest(config: &ProjectConfiguration) -> Result<String, DomainError> {
    to_pretty_json(files::MANIFEST, &PackageManifest::from_config(config))
}

pub(crate) fn to_pretty_json<T: Serialize>(
    file: &'static str,
    value: &T,
) -> Result<String, DomainError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|e| DomainError::RenderFailed {
            file,
            reason: e.to_string(),
        })?;

    let mut text = String::from_utf8(buf).map_err(|e| DomainError::RenderFailed {
        file,
        reason: e.to_string(),
    })?;
    text.push('\n');
    Ok(text)
}
