//! The setup pipeline as data.
//!
//! [`SetupPlan::for_config`] decides which steps run and renders every file
//! up front. Executing the plan is [`super::SetupService`]'s job; building
//! it performs no I/O, so step selection is tested without a filesystem.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    application::ports::ProcessCommand,
    domain::{
        DEFAULT_BRANCH, ProjectConfiguration, ProjectType, RelativePath,
        install::{self, build_install_command},
        templates::{self, files},
    },
    error::ZyroResult,
};

/// The ten pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepKind {
    CreateDirectory,
    WriteManifest,
    WriteCompilerConfig,
    WriteEnvFiles,
    InstallDependencies,
    InstallDevDependencies,
    InitializeVersionControl,
    WriteGitignore,
    WriteFormatterConfig,
    WriteSourceFiles,
}

impl StepKind {
    /// 1-based position in the full pipeline.
    pub const fn number(&self) -> u8 {
        *self as u8 + 1
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.number())
    }
}

/// One effect inside a step. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Create the project root itself; fails if it already exists.
    CreateProjectDir,
    CreateDir(RelativePath),
    WriteFile { path: RelativePath, contents: String },
    /// Run a command with the project root as working directory.
    Run(ProcessCommand),
    /// Interim progress text.
    Message(String),
}

/// A named, independently failable unit of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStep {
    pub kind: StepKind,
    /// Shown while the step runs.
    pub label: String,
    /// Shown when the step succeeds.
    pub completion: String,
    pub actions: Vec<StepAction>,
}

impl SetupStep {
    fn new(kind: StepKind, label: impl Into<String>, completion: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            completion: completion.into(),
            actions: Vec::new(),
        }
    }

    fn action(mut self, action: StepAction) -> Self {
        self.actions.push(action);
        self
    }

    fn write(self, path: &str, contents: impl Into<String>) -> Self {
        self.action(StepAction::WriteFile {
            path: RelativePath::new(path),
            contents: contents.into(),
        })
    }

    fn git<const N: usize>(self, args: [&str; N]) -> Self {
        self.action(StepAction::Run(ProcessCommand::exec("git", args)))
    }
}

/// Ordered steps for one project, rooted at `root`.
#[derive(Debug, Clone)]
pub struct SetupPlan {
    root: PathBuf,
    steps: Vec<SetupStep>,
}

impl SetupPlan {
    /// Build the plan for `config`, creating the project at `root`.
    ///
    /// Fails only if a JSON document cannot be rendered.
    pub fn for_config(config: &ProjectConfiguration, root: impl Into<PathBuf>) -> ZyroResult<Self> {
        let pm = config.package_manager();
        let mut steps = Vec::with_capacity(10);

        steps.push(
            SetupStep::new(
                StepKind::CreateDirectory,
                "Setting up your project",
                "Project directory created successfully.",
            )
            .action(StepAction::CreateProjectDir),
        );

        steps.push(
            SetupStep::new(
                StepKind::WriteManifest,
                "Creating package.json",
                "package.json created successfully.",
            )
            .write(files::MANIFEST, templates::render_manifest(config)?),
        );

        steps.push(
            SetupStep::new(
                StepKind::WriteCompilerConfig,
                "Creating tsconfig.json",
                "tsconfig.json created successfully.",
            )
            .write(files::COMPILER_CONFIG, templates::render_compiler_config(config)?),
        );

        if config.create_dot_env() {
            let step = files::ENV_FILES.iter().fold(
                SetupStep::new(
                    StepKind::WriteEnvFiles,
                    "Creating environment files",
                    "Environment files created successfully.",
                ),
                |step, name| step.write(name, ""),
            );
            steps.push(step);
        }

        let runtime = install::runtime_dependencies(config);
        if !runtime.is_empty() {
            steps.push(
                SetupStep::new(
                    StepKind::InstallDependencies,
                    format!("Installing dependencies with {pm}"),
                    "Dependencies installed successfully.",
                )
                .action(StepAction::Message(format!(
                    "Installing {}: {runtime}",
                    install::describe(config.project_type(), false)
                )))
                .action(StepAction::Run(ProcessCommand::shell(build_install_command(
                    pm, &runtime, false,
                )))),
            );
        }

        let dev = install::dev_dependencies(config);
        steps.push(
            SetupStep::new(
                StepKind::InstallDevDependencies,
                format!("Installing development dependencies with {pm}"),
                "Development dependencies installed successfully.",
            )
            .action(StepAction::Message(format!(
                "Installing {}: {dev}",
                install::describe(config.project_type(), true)
            )))
            .action(StepAction::Run(ProcessCommand::shell(build_install_command(
                pm, &dev, true,
            )))),
        );

        if config.initialize_version_control() {
            steps.push(version_control_step(config));
        }

        steps.push(
            SetupStep::new(
                StepKind::WriteGitignore,
                "Creating .gitignore file",
                ".gitignore file created successfully.",
            )
            .write(files::GITIGNORE, templates::render_gitignore()),
        );

        if config.use_formatter_config() {
            steps.push(
                SetupStep::new(
                    StepKind::WriteFormatterConfig,
                    "Creating Prettier configuration file",
                    "Prettier configuration file created successfully.",
                )
                .write(files::FORMATTER_CONFIG, templates::render_formatter_config())
                .write(files::FORMATTER_IGNORE, templates::render_formatter_ignore()),
            );
        }

        let mut source = SetupStep::new(
            StepKind::WriteSourceFiles,
            "Creating source files",
            "Source files created successfully.",
        )
        .action(StepAction::CreateDir(RelativePath::new(files::SOURCE_DIR)))
        .write(files::ENTRY_POINT, templates::render_entry_point(config));
        if config.project_type() == ProjectType::Module {
            source = source.write(
                files::MODULE_DEFINITION,
                templates::render_module_skeleton(config),
            );
        }
        steps.push(source);

        Ok(Self {
            root: root.into(),
            steps,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn steps(&self) -> &[SetupStep] {
        &self.steps
    }

    pub fn kinds(&self) -> Vec<StepKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }

    pub fn step(&self, kind: StepKind) -> Option<&SetupStep> {
        self.steps.iter().find(|s| s.kind == kind)
    }

    pub fn contains(&self, kind: StepKind) -> bool {
        self.step(kind).is_some()
    }
}

fn version_control_step(config: &ProjectConfiguration) -> SetupStep {
    let mut step = SetupStep::new(
        StepKind::InitializeVersionControl,
        "Initializing Git repository",
        "Git repository initialized successfully.",
    )
    .git(["init"])
    .git(["branch", "-M", DEFAULT_BRANCH]);

    if let Some(url) = config.repository() {
        step = step.git(["remote", "add", "origin", url]);
    }

    // node_modules is not ignored yet at this point.
    if config.create_initial_commit() {
        step = step
            .git(["add", "--all", "--", ".", ":(exclude)node_modules"])
            .git(["commit", "-m", "Initial commit"]);
    }

    step
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PackageManager;

    fn base(ty: ProjectType) -> crate::domain::ProjectConfigurationBuilder {
        ProjectConfiguration::builder(ty)
            .name("demo")
            .package_manager(PackageManager::Npm)
            .initialize_version_control(false)
            .use_formatter_config(false)
    }

    fn commands(step: &SetupStep) -> Vec<String> {
        step.actions
            .iter()
            .filter_map(|a| match a {
                StepAction::Run(cmd) => Some(cmd.to_string()),
                _ => None,
            })
            .collect()
    }

    fn written(plan: &SetupPlan) -> Vec<String> {
        plan.steps()
            .iter()
            .flat_map(|s| s.actions.iter())
            .filter_map(|a| match a {
                StepAction::WriteFile { path, .. } => Some(path.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn minimal_unstructured_skips_runtime_install() {
        let config = base(ProjectType::Unstructured).build().unwrap();
        let plan = SetupPlan::for_config(&config, "/w/demo").unwrap();
        assert_eq!(
            plan.kinds(),
            vec![
                StepKind::CreateDirectory,
                StepKind::WriteManifest,
                StepKind::WriteCompilerConfig,
                StepKind::InstallDevDependencies,
                StepKind::WriteGitignore,
                StepKind::WriteSourceFiles,
            ]
        );
    }

    #[test]
    fn full_application_runs_every_step_in_order() {
        let cfg = base(ProjectType::Application)
            .create_dot_env(true)
            .initialize_version_control(true)
            .use_formatter_config(true)
            .build()
            .unwrap();
        let plan = SetupPlan::for_config(&cfg, "/w/app-demo").unwrap();
        let kinds = plan.kinds();
        assert_eq!(kinds.len(), 10);
        assert!(kinds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(plan.root(), Path::new("/w/app-demo"));
    }

    #[test]
    fn env_files_are_written_empty() {
        let cfg = base(ProjectType::Application).create_dot_env(true).build().unwrap();
        let plan = SetupPlan::for_config(&cfg, "/w/x").unwrap();
        let step = plan.step(StepKind::WriteEnvFiles).unwrap();
        let files: Vec<_> = step
            .actions
            .iter()
            .map(|a| match a {
                StepAction::WriteFile { path, contents } => {
                    assert!(contents.is_empty());
                    path.to_string()
                }
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(files, vec![".env", ".env.example", ".env.development"]);
    }

    #[test]
    fn only_modules_get_a_module_definition() {
        for ty in ProjectType::ALL {
            let plan = SetupPlan::for_config(&base(ty).build().unwrap(), "/w/x").unwrap();
            let has_module = written(&plan).iter().any(|p| p == "src/Module.ts");
            assert_eq!(has_module, ty == ProjectType::Module, "{ty}");
        }
    }

    #[test]
    fn install_commands_use_selected_manager() {
        let cfg = base(ProjectType::Module)
            .package_manager(PackageManager::Bun)
            .build()
            .unwrap();
        let plan = SetupPlan::for_config(&cfg, "/w/x").unwrap();
        assert_eq!(
            commands(plan.step(StepKind::InstallDependencies).unwrap()),
            vec!["bun add @zyrohub/core"]
        );
        let dev = commands(plan.step(StepKind::InstallDevDependencies).unwrap());
        assert!(dev[0].starts_with("bun add -d "));
    }

    #[test]
    fn git_step_without_repository() {
        let cfg = base(ProjectType::Module)
            .initialize_version_control(true)
            .create_initial_commit(true)
            .build()
            .unwrap();
        let plan = SetupPlan::for_config(&cfg, "/w/x").unwrap();
        assert_eq!(
            commands(plan.step(StepKind::InitializeVersionControl).unwrap()),
            vec!["git init", "git branch -M main"]
        );
    }

    #[test]
    fn git_step_with_repository_and_commit() {
        let cfg = base(ProjectType::Module)
            .repository("https://github.com/acme/module-demo")
            .unwrap()
            .initialize_version_control(true)
            .create_initial_commit(true)
            .build()
            .unwrap();
        let plan = SetupPlan::for_config(&cfg, "/w/x").unwrap();
        assert_eq!(
            commands(plan.step(StepKind::InitializeVersionControl).unwrap()),
            vec![
                "git init",
                "git branch -M main",
                "git remote add origin https://github.com/acme/module-demo",
                "git add --all -- . :(exclude)node_modules",
                "git commit -m Initial commit",
            ]
        );
    }

    #[test]
    fn step_numbers_follow_pipeline_order() {
        assert_eq!(StepKind::CreateDirectory.number(), 1);
        assert_eq!(StepKind::InstallDependencies.number(), 5);
        assert_eq!(StepKind::WriteSourceFiles.number(), 10);
    }
}
