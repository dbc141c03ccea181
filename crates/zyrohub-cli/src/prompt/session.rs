use std::path::Path;

use tracing::{debug, instrument};

use zyrohub_core::application::Filesystem;
use zyrohub_core::domain::{BLANK_ANSWER, DomainError, DomainValidator, naming};
use zyrohub_core::error::ZyroError;
use zyrohub_core::prelude::{PackageManager, ProjectConfiguration, ProjectType};

use super::{Choice, Prompter};
use crate::config::Defaults;
use crate::error::CliResult;

pub(crate) const TYPE_QUESTION: &str = "\u{1f9e9} What type of project do you want to create?";
pub(crate) const CLUSTER_QUESTION: &str = "\u{1f517} Do you want to use cluster mode?";
pub(crate) const DOTENV_QUESTION: &str =
    "\u{1f510} Do you want to use dotenvx for environment variables?";
pub(crate) const LIBRARY_QUESTION: &str =
    "\u{1f4e6} Add exports, publishConfig and files to package.json?";
pub(crate) const NAME_QUESTION: &str = "\u{1f4c1} Project name:";
pub(crate) const DESCRIPTION_QUESTION: &str = "\u{1f4dd} Project description:";
pub(crate) const AUTHOR_QUESTION: &str = "\u{1f464} Author:";
pub(crate) const REPOSITORY_QUESTION: &str = "\u{1f310} Repository URL (optional):";
pub(crate) const GIT_QUESTION: &str = "\u{1f419} Do you want to initialize a Git repository?";
pub(crate) const COMMIT_QUESTION: &str = "\u{1f4cc} Do you want to create an initial commit?";
pub(crate) const PACKAGE_MANAGER_QUESTION: &str =
    "\u{1f4e6} Which package manager do you want to use?";
pub(crate) const FORMATTER_QUESTION: &str =
    "\u{1f3a8} Do you want to create a Prettier configuration file?";

const TYPE_CHOICES: [Choice; 3] = [
    Choice::new("Application", "a ZyroHub application"),
    Choice::new("Module", "a reusable ZyroHub module"),
    Choice::new("Other", "a plain TypeScript project"),
];

/// The create questionnaire.
///
/// Questions that do not apply to the chosen project type are skipped, and
/// invalid names or URLs are re-asked until accepted.
pub struct PromptSession<'a> {
    prompter: &'a mut dyn Prompter,
    filesystem: &'a dyn Filesystem,
    cwd: &'a Path,
    defaults: &'a Defaults,
}

impl<'a> PromptSession<'a> {
    pub fn new(
        prompter: &'a mut dyn Prompter,
        filesystem: &'a dyn Filesystem,
        cwd: &'a Path,
        defaults: &'a Defaults,
    ) -> Self {
        Self {
            prompter,
            filesystem,
            cwd,
            defaults,
        }
    }

    /// Ask every applicable question and finalize the configuration.
    ///
    /// `seed_name` prefills the name question.
    #[instrument(skip_all)]
    pub fn run(mut self, seed_name: Option<String>) -> CliResult<ProjectConfiguration> {
        let project_type = self.ask_project_type()?;
        let mut builder = ProjectConfiguration::builder(project_type);

        if project_type.is_application() {
            builder = builder
                .use_cluster(self.prompter.confirm(CLUSTER_QUESTION, true)?)
                .create_dot_env(self.prompter.confirm(DOTENV_QUESTION, true)?);
        }
        if project_type.supports_library_fields() {
            builder = builder.add_library_fields(self.prompter.confirm(LIBRARY_QUESTION, true)?);
        }

        let name = self.ask_name(project_type, seed_name)?;
        builder = builder
            .name(&name)
            .description(self.ask_blankable(DESCRIPTION_QUESTION, None)?)
            .author(self.ask_blankable(AUTHOR_QUESTION, self.defaults.author.clone())?);

        if let Some(url) = self.ask_repository()? {
            builder = builder.repository(url).map_err(ZyroError::from)?;
        }

        let git = self
            .prompter
            .confirm(GIT_QUESTION, self.defaults.initialize_git)?;
        builder = builder.initialize_version_control(git);
        if git && builder.has_repository() {
            builder = builder.create_initial_commit(self.prompter.confirm(COMMIT_QUESTION, true)?);
        }

        let project = builder
            .package_manager(self.ask_package_manager()?)
            .use_formatter_config(
                self.prompter
                    .confirm(FORMATTER_QUESTION, self.defaults.use_formatter_config)?,
            )
            .build()
            .map_err(ZyroError::from)?;

        debug!(name = project.name(), project_type = %project.project_type(), "answers collected");
        Ok(project)
    }

    fn ask_project_type(&mut self) -> CliResult<ProjectType> {
        let index = self.prompter.select(TYPE_QUESTION, &TYPE_CHOICES, 0)?;
        Ok(ProjectType::ALL
            .get(index)
            .copied()
            .unwrap_or(ProjectType::Application))
    }

    /// Canonical name whose directory does not exist yet.
    fn ask_name(&mut self, project_type: ProjectType, seed: Option<String>) -> CliResult<String> {
        let fallback = naming::default_name(project_type);
        let mut initial = seed;

        loop {
            let answer = self.prompter.text(NAME_QUESTION, &fallback, initial.take())?;
            let candidate = if answer.trim().is_empty() {
                fallback.clone()
            } else {
                answer
            };

            let name = naming::normalize(project_type, Some(&candidate));
            if !name.is_empty() && !self.filesystem.exists(&self.cwd.join(&name)) {
                return Ok(name);
            }

            debug!(%name, "name already taken");
            self.prompter
                .reject(&DomainError::NameTaken { name }.to_string());
            initial = Some(candidate);
        }
    }

    fn ask_blankable(&mut self, question: &str, initial: Option<String>) -> CliResult<String> {
        let answer = self.prompter.text(question, "", initial)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            Ok(BLANK_ANSWER.to_string())
        } else {
            Ok(trimmed.to_string())
        }
    }

    /// `None` when left blank.
    fn ask_repository(&mut self) -> CliResult<Option<String>> {
        let mut initial = None;
        loop {
            let answer = self.prompter.text(REPOSITORY_QUESTION, "", initial.take())?;
            let trimmed = answer.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match DomainValidator::validate_repository_url(trimmed) {
                Ok(()) => return Ok(Some(trimmed.to_string())),
                Err(e) => {
                    debug!(error = %e, "repository rejected");
                    self.prompter.reject("Please enter a valid URL.");
                    initial = Some(answer);
                }
            }
        }
    }

    fn ask_package_manager(&mut self) -> CliResult<PackageManager> {
        let choices = PackageManager::ALL.map(|pm| Choice::new(pm.label(), ""));
        let preferred = self.defaults.package_manager();
        let default = PackageManager::ALL
            .iter()
            .position(|pm| *pm == preferred)
            .unwrap_or(0);

        let index = self
            .prompter
            .select(PACKAGE_MANAGER_QUESTION, &choices, default)?;
        Ok(PackageManager::ALL.get(index).copied().unwrap_or(preferred))
    }
}
