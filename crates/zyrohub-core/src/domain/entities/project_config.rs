//! The `ProjectConfiguration` record and its builder.
//!
//! A `ProjectConfiguration` is everything the setup pipeline needs to know
//! about the project being created. The prompt session folds each answer
//! into a [`ProjectConfigurationBuilder`] value; `build()` checks required
//! answers and drops toggles that do not apply to the chosen project type,
//! so a finished configuration never carries a meaningless flag.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;

use crate::domain::{
    error::DomainError, naming, validation::DomainValidator, value_objects::PackageManager,
    value_objects::ProjectType,
};

/// Placeholder stored for optional text answers left blank.
pub const BLANK_ANSWER: &str = " ";

/// Branch created by `git init` is renamed to this.
pub const DEFAULT_BRANCH: &str = "main";

// ── Aggregate ────────────────────────────────────────────────────────────────

/// A finalized, immutable project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfiguration {
    project_type: ProjectType,
    use_cluster: bool,
    add_library_fields: bool,
    create_dot_env: bool,
    name: String,
    description: Option<String>,
    author: Option<String>,
    repository: Option<String>,
    initialize_version_control: bool,
    create_initial_commit: bool,
    package_manager: PackageManager,
    use_formatter_config: bool,
}

impl ProjectConfiguration {
    /// Start a configuration. The project type comes first because it gates
    /// every later answer.
    pub fn builder(project_type: ProjectType) -> ProjectConfigurationBuilder {
        ProjectConfigurationBuilder::new(project_type)
    }

    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }
    pub const fn use_cluster(&self) -> bool {
        self.use_cluster
    }
    pub const fn add_library_fields(&self) -> bool {
        self.add_library_fields
    }
    pub const fn create_dot_env(&self) -> bool {
        self.create_dot_env
    }
    /// Canonical (normalized) project name.
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Description, `None` when absent or empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
    /// Author, `None` when absent or empty.
    pub fn author(&self) -> Option<&str> {
        non_empty(self.author.as_deref())
    }
    /// Repository URL as entered (without the `.git` suffix).
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }
    /// Repository type implied by the presence of a repository.
    pub fn repository_type(&self) -> Option<&'static str> {
        self.repository.as_ref().map(|_| "git")
    }
    pub const fn initialize_version_control(&self) -> bool {
        self.initialize_version_control
    }
    pub const fn create_initial_commit(&self) -> bool {
        self.create_initial_commit
    }
    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
    pub const fn use_formatter_config(&self) -> bool {
        self.use_formatter_config
    }

    /// PascalCase identifier derived from the name.
    pub fn pascal_name(&self) -> String {
        naming::pascal_case(&self.name)
    }
}

impl fmt::Display for ProjectConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name, self.project_type, self.package_manager
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Consuming builder for [`ProjectConfiguration`].
///
/// Every setter takes `self` by value and returns the updated builder, so a
/// prompt step is a plain `builder = builder.answer(value)` fold.
#[derive(Debug, Clone)]
pub struct ProjectConfigurationBuilder {
    project_type: ProjectType,
    use_cluster: Option<bool>,
    add_library_fields: Option<bool>,
    create_dot_env: Option<bool>,
    name: Option<String>,
    description: Option<String>,
    author: Option<String>,
    repository: Option<String>,
    initialize_version_control: Option<bool>,
    create_initial_commit: Option<bool>,
    package_manager: Option<PackageManager>,
    use_formatter_config: Option<bool>,
}

impl ProjectConfigurationBuilder {
    pub fn new(project_type: ProjectType) -> Self {
        Self {
            project_type,
            use_cluster: None,
            add_library_fields: None,
            create_dot_env: None,
            name: None,
            description: None,
            author: None,
            repository: None,
            initialize_version_control: None,
            create_initial_commit: None,
            package_manager: None,
            use_formatter_config: None,
        }
    }

    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Whether a repository URL has been recorded so far.
    pub fn has_repository(&self) -> bool {
        self.repository.is_some()
    }

    pub fn use_cluster(mut self, value: bool) -> Self {
        self.use_cluster = Some(value);
        self
    }

    pub fn add_library_fields(mut self, value: bool) -> Self {
        self.add_library_fields = Some(value);
        self
    }

    pub fn create_dot_env(mut self, value: bool) -> Self {
        self.create_dot_env = Some(value);
        self
    }

    /// Record the project name, normalized for the project type.
    pub fn name(mut self, raw: impl AsRef<str>) -> Self {
        self.name = Some(naming::normalize(self.project_type, Some(raw.as_ref())));
        self
    }

    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    pub fn author(mut self, value: impl Into<String>) -> Self {
        self.author = Some(value.into());
        self
    }

    /// Record the repository URL.
    ///
    /// A blank answer clears the repository. Anything else must parse as a
    /// URL.
    pub fn repository(mut self, value: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            self.repository = None;
        } else {
            DomainValidator::validate_repository_url(trimmed)?;
            self.repository = Some(trimmed.to_string());
        }
        Ok(self)
    }

    pub fn initialize_version_control(mut self, value: bool) -> Self {
        self.initialize_version_control = Some(value);
        self
    }

    pub fn create_initial_commit(mut self, value: bool) -> Self {
        self.create_initial_commit = Some(value);
        self
    }

    pub fn package_manager(mut self, value: PackageManager) -> Self {
        self.package_manager = Some(value);
        self
    }

    pub fn use_formatter_config(mut self, value: bool) -> Self {
        self.use_formatter_config = Some(value);
        self
    }

    /// Finalize the configuration.
    ///
    /// Toggles that are not meaningful for the project type are dropped
    /// rather than rejected.
    pub fn build(self) -> Result<ProjectConfiguration, DomainError> {
        let ty = self.project_type;
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let package_manager = self
            .package_manager
            .ok_or(DomainError::MissingRequiredField {
                field: "package manager",
            })?;
        let use_formatter_config =
            self.use_formatter_config
                .ok_or(DomainError::MissingRequiredField {
                    field: "formatter configuration",
                })?;
        let initialize_version_control =
            self.initialize_version_control
                .ok_or(DomainError::MissingRequiredField {
                    field: "version control",
                })?;

        let create_initial_commit = initialize_version_control
            && self.repository.is_some()
            && self.create_initial_commit.unwrap_or(false);

        Ok(ProjectConfiguration {
            project_type: ty,
            use_cluster: ty.is_application() && self.use_cluster.unwrap_or(false),
            add_library_fields: ty.supports_library_fields()
                && self.add_library_fields.unwrap_or(false),
            create_dot_env: ty.is_application() && self.create_dot_env.unwrap_or(false),
            name,
            description: self.description,
            author: self.author,
            repository: self.repository,
            initialize_version_control,
            create_initial_commit,
            package_manager,
            use_formatter_config,
        })
    }
}
