//! Typed model of the generated `package.json`.
//!
//! The manifest has a fixed shape with a few optional keys. Optional keys are
//! `Option` fields skipped during serialization when unset, so the shape of
//! the output is decided by the data rather than by conditional splicing.
//! Field order here is the key order in the emitted file.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::project_config::ProjectConfiguration;

pub const MANIFEST_VERSION: &str = "1.0.0";
pub const ENTRY_POINT: &str = "./dist/index.js";
pub const TYPES_ENTRY_POINT: &str = "./dist/index.d.ts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub main: String,
    pub types: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports: Option<BTreeMap<String, ExportTarget>>,
    pub scripts: Scripts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<RepositoryField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_config: Option<PublishConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    pub keywords: Vec<String>,
    pub license: String,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportTarget {
    pub import: String,
    pub types: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub start: String,
    pub dev: String,
    pub build: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryField {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishConfig {
    pub access: String,
}

impl PackageManifest {
    /// Build the manifest for a configuration. Dependencies start empty; the
    /// install steps populate them through the package manager.
    pub fn from_config(config: &ProjectConfiguration) -> Self {
        let library = config.add_library_fields();

        Self {
            name: config.name().to_string(),
            version: MANIFEST_VERSION.into(),
            author: config.author().map(str::to_string),
            module_type: "module".into(),
            description: config.description().map(str::to_string),
            main: ENTRY_POINT.into(),
            types: TYPES_ENTRY_POINT.into(),
            exports: library.then(|| {
                BTreeMap::from([(
                    ".".to_string(),
                    ExportTarget {
                        import: ENTRY_POINT.into(),
                        types: TYPES_ENTRY_POINT.into(),
                    },
                )])
            }),
            scripts: Scripts::for_config(config),
            repository: config.repository().map(|url| RepositoryField {
                kind: "git".into(),
                url: format!("{url}.git"),
            }),
            publish_config: library.then(|| PublishConfig {
                access: "public".into(),
            }),
            files: library.then(|| vec!["/dist".to_string()]),
            keywords: Vec::new(),
            license: "MIT".into(),
            dependencies: BTreeMap::new(),
            dev_dependencies: BTreeMap::new(),
        }
    }
}

impl Scripts {
    fn for_config(config: &ProjectConfiguration) -> Self {
        let secrets = |env_file: &str| {
            if config.create_dot_env() {
                format!("dotenvx run -f {env_file} -- ")
            } else {
                String::new()
            }
        };

        Self {
            start: format!("{}node {ENTRY_POINT}", secrets(".env")),
            dev: format!(
                "{}node --watch --no-warnings --loader ts-node/esm src/index.ts",
                secrets(".env.development")
            ),
            build: "rimraf dist && tsc && tsc-alias".into(),
        }
    }
}
