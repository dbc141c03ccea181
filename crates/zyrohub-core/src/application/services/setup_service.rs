//! Setup Service - main application orchestrator.
//!
//! Runs a [`SetupPlan`] step by step against the filesystem and process
//! ports:
//! 1. Announce the step
//! 2. Apply its actions in order
//! 3. Report success, or stop, clean up and return the wrapped failure
//!
//! The first failing step aborts the whole pipeline.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, CleanupStatus,
        ports::{CommandRunner, Filesystem, ProgressReporter},
        services::setup_plan::{SetupPlan, SetupStep, StepAction},
    },
    domain::ProjectConfiguration,
    error::ZyroResult,
};

/// Outcome of a completed setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Absolute path of the created project.
    pub root: PathBuf,
    /// Labels of the steps that ran, in order.
    pub completed: Vec<String>,
}

/// Main setup service.
pub struct SetupService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Create the project described by `config` under `cwd`.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            cwd = %cwd.display()
        )
    )]
    pub fn setup(
        &self,
        config: &ProjectConfiguration,
        cwd: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> ZyroResult<SetupReport> {
        info!("Setting up {} project", config.project_type());
        let plan = SetupPlan::for_config(config, cwd.join(config.name()))?;
        self.execute(&plan, reporter)
    }

    /// Run every step of `plan`, aborting with cleanup on the first failure.
    #[instrument(skip_all, fields(root = %plan.root().display(), steps = plan.steps().len()))]
    pub fn execute(
        &self,
        plan: &SetupPlan,
        reporter: &mut dyn ProgressReporter,
    ) -> ZyroResult<SetupReport> {
        let root = plan.root();
        let mut completed = Vec::with_capacity(plan.steps().len());
        let mut root_created = false;

        for step in plan.steps() {
            reporter.step_started(&step.label);
            debug!(step = %step.kind, label = %step.label, "Step started");

            if let Err(cause) = self.run_step(root, step, &mut root_created, reporter) {
                reporter.step_failed(&step.label);
                warn!(step = %step.kind, error = %cause, "Step failed, aborting setup");

                let cleanup = if root_created {
                    self.cleanup(root)
                } else {
                    CleanupStatus::NotNeeded
                };

                return Err(ApplicationError::SetupAborted {
                    step: step.label.clone(),
                    cause: Box::new(cause),
                    cleanup,
                }
                .into());
            }

            reporter.step_succeeded(&step.completion);
            completed.push(step.label.clone());
        }

        info!("Setup completed successfully");
        Ok(SetupReport {
            root: root.to_path_buf(),
            completed,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_step(
        &self,
        root: &Path,
        step: &SetupStep,
        root_created: &mut bool,
        reporter: &mut dyn ProgressReporter,
    ) -> ZyroResult<()> {
        for action in &step.actions {
            match action {
                StepAction::CreateProjectDir => {
                    if self.filesystem.exists(root) {
                        return Err(ApplicationError::ProjectExists {
                            path: root.to_path_buf(),
                        }
                        .into());
                    }
                    self.filesystem.create_dir(root)?;
                    *root_created = true;
                }
                StepAction::CreateDir(path) => {
                    self.filesystem.create_dir_all(&path.under(root))?;
                }
                StepAction::WriteFile { path, contents } => {
                    let target = path.under(root);
                    if let Some(parent) = target.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&target, contents)?;
                    debug!(file = %path, bytes = contents.len(), "File written");
                }
                StepAction::Run(command) => {
                    debug!(%command, "Running command");
                    self.runner.run(command, root)?;
                }
                StepAction::Message(text) => reporter.message(text),
            }
        }
        Ok(())
    }

    /// Best-effort removal of the project directory.
    fn cleanup(&self, root: &Path) -> CleanupStatus {
        if !self.filesystem.exists(root) {
            return CleanupStatus::NotNeeded;
        }
        match self.filesystem.remove_dir_all(root) {
            Ok(()) => {
                info!(path = %root.display(), "Cleanup successful");
                CleanupStatus::Removed
            }
            Err(e) => {
                warn!(error = %e, path = %root.display(), "Cleanup failed");
                CleanupStatus::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::{
            ports::{MockCommandRunner, ProcessCommand},
            services::setup_plan::StepKind,
        },
        domain::{PackageManager, ProjectType},
        error::ZyroError,
    };
    use mockall::predicate::*;
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct State {
        dirs: BTreeSet<PathBuf>,
        files: BTreeMap<PathBuf, String>,
        fail_write: Option<PathBuf>,
        fail_remove: bool,
    }

    /// Shared in-memory filesystem so the test keeps a handle after the
    /// service takes ownership of its box.
    #[derive(Clone, Default)]
    struct FakeFs(Arc<Mutex<State>>);

    impl FakeFs {
        fn failing_write(path: &str) -> Self {
            let fs = Self::default();
            fs.0.lock().unwrap().fail_write = Some(PathBuf::from(path));
            fs
        }
        fn has_file(&self, path: &str) -> bool {
            self.0.lock().unwrap().files.contains_key(Path::new(path))
        }
        fn read(&self, path: &str) -> String {
            self.0.lock().unwrap().files[Path::new(path)].clone()
        }
    }

    fn io_err(path: &Path, reason: &str) -> ZyroError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
        .into()
    }

    impl Filesystem for FakeFs {
        fn create_dir(&self, path: &Path) -> ZyroResult<()> {
            let mut s = self.0.lock().unwrap();
            if !s.dirs.insert(path.to_path_buf()) {
                return Err(io_err(path, "exists"));
            }
            Ok(())
        }
        fn create_dir_all(&self, path: &Path) -> ZyroResult<()> {
            self.0.lock().unwrap().dirs.insert(path.to_path_buf());
            Ok(())
        }
        fn write_file(&self, path: &Path, content: &str) -> ZyroResult<()> {
            let mut s = self.0.lock().unwrap();
            if s.fail_write.as_deref() == Some(path) {
                return Err(io_err(path, "disk full"));
            }
            s.files.insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
        fn exists(&self, path: &Path) -> bool {
            let s = self.0.lock().unwrap();
            s.dirs.contains(path) || s.files.contains_key(path)
        }
        fn remove_dir_all(&self, path: &Path) -> ZyroResult<()> {
            let mut s = self.0.lock().unwrap();
            if s.fail_remove {
                return Err(io_err(path, "busy"));
            }
            s.dirs.retain(|p| !p.starts_with(path));
            s.files.retain(|p, _| !p.starts_with(path));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Events(Vec<String>);

    impl ProgressReporter for Events {
        fn step_started(&mut self, label: &str) {
            self.0.push(format!("start {label}"));
        }
        fn message(&mut self, text: &str) {
            self.0.push(format!("msg {text}"));
        }
        fn step_succeeded(&mut self, completion: &str) {
            self.0.push(format!("ok {completion}"));
        }
        fn step_failed(&mut self, label: &str) {
            self.0.push(format!("fail {label}"));
        }
    }

    fn config(ty: ProjectType) -> crate::domain::ProjectConfigurationBuilder {
        ProjectConfiguration::builder(ty)
            .name("demo")
            .package_manager(PackageManager::Npm)
            .initialize_version_control(false)
            .use_formatter_config(false)
    }

    fn accept_all() -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_, _| Ok(()));
        runner
    }

    #[test]
    fn unstructured_without_dotenv_skips_runtime_install() {
        let fs = FakeFs::default();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, cwd| {
                let dev_install = matches!(
                    cmd,
                    ProcessCommand::Shell(line) if line.starts_with("npm install --save-dev ")
                );
                dev_install && cwd == Path::new("/work/demo")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SetupService::new(Box::new(fs.clone()), Box::new(runner));
        let cfg = config(ProjectType::Unstructured).build().unwrap();
        let report = service
            .setup(&cfg, Path::new("/work"), &mut Events::default())
            .unwrap();

        assert_eq!(report.root, PathBuf::from("/work/demo"));
        assert!(!report.completed.iter().any(|l| l == "Installing dependencies with npm"));
        assert!(fs.has_file("/work/demo/package.json"));
        assert_eq!(fs.read("/work/demo/src/index.ts"), "\n");
    }

    #[test]
    fn failure_at_compiler_config_stops_and_removes_directory() {
        let fs = FakeFs::failing_write("/work/app-demo/tsconfig.json");
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = SetupService::new(Box::new(fs.clone()), Box::new(runner));
        let cfg = config(ProjectType::Application)
            .create_dot_env(true)
            .build()
            .unwrap();
        let mut events = Events::default();
        let err = service
            .setup(&cfg, Path::new("/work"), &mut events)
            .unwrap_err();

        match err {
            ZyroError::Application(ApplicationError::SetupAborted { step, cleanup, .. }) => {
                assert_eq!(step, "Creating tsconfig.json");
                assert_eq!(cleanup, CleanupStatus::Removed);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!fs.exists(Path::new("/work/app-demo")));
        assert!(!fs.has_file("/work/app-demo/.env"));
        assert!(!events.0.iter().any(|e| e.contains("environment files")));
        assert_eq!(events.0.last().unwrap(), "fail Creating tsconfig.json");
    }

    #[test]
    fn cleanup_failure_does_not_mask_step_failure() {
        let fs = FakeFs::failing_write("/work/demo/package.json");
        fs.0.lock().unwrap().fail_remove = true;

        let service = SetupService::new(Box::new(fs.clone()), Box::new(accept_all()));
        let cfg = config(ProjectType::Unstructured).build().unwrap();
        let err = service
            .setup(&cfg, Path::new("/work"), &mut Events::default())
            .unwrap_err();

        let ZyroError::Application(ApplicationError::SetupAborted { cause, cleanup, .. }) = err
        else {
            panic!("expected SetupAborted");
        };
        assert!(cause.to_string().contains("disk full"));
        assert!(matches!(cleanup, CleanupStatus::Failed(reason) if reason.contains("busy")));
    }

    #[test]
    fn existing_directory_is_left_alone() {
        let fs = FakeFs::default();
        fs.create_dir(Path::new("/work/demo")).unwrap();
        fs.write_file(Path::new("/work/demo/keep.txt"), "mine").unwrap();

        let service = SetupService::new(Box::new(fs.clone()), Box::new(accept_all()));
        let cfg = config(ProjectType::Unstructured).build().unwrap();
        let err = service
            .setup(&cfg, Path::new("/work"), &mut Events::default())
            .unwrap_err();

        let ZyroError::Application(ApplicationError::SetupAborted { cause, cleanup, .. }) = err
        else {
            panic!("expected SetupAborted");
        };
        assert!(matches!(
            *cause,
            ZyroError::Application(ApplicationError::ProjectExists { .. })
        ));
        assert_eq!(cleanup, CleanupStatus::NotNeeded);
        assert!(fs.has_file("/work/demo/keep.txt"));
    }

    #[test]
    fn failed_install_aborts_before_git() {
        let fs = FakeFs::default();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _| cmd.program() == "pnpm")
            .times(1)
            .returning(|cmd, _| {
                Err(ApplicationError::CommandFailed {
                    command: cmd.to_string(),
                    reason: "exit status: 1".into(),
                }
                .into())
            });

        let service = SetupService::new(Box::new(fs.clone()), Box::new(runner));
        let cfg = config(ProjectType::Module)
            .package_manager(PackageManager::Pnpm)
            .initialize_version_control(true)
            .build()
            .unwrap();
        let err = service
            .setup(&cfg, Path::new("/work"), &mut Events::default())
            .unwrap_err();

        assert!(err.to_string().starts_with("Installing dependencies with pnpm failed"));
        assert!(!fs.exists(Path::new("/work/module-demo")));
    }

    #[test]
    fn git_commands_run_in_project_root() {
        let fs = FakeFs::default();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd, _| matches!(cmd, ProcessCommand::Shell(_)))
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .withf(|cmd, cwd| {
                *cmd == ProcessCommand::exec("git", ["init"])
                    && cwd == Path::new("/work/module-demo")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        runner
            .expect_run()
            .with(eq(ProcessCommand::exec("git", ["branch", "-M", "main"])), always())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = SetupService::new(Box::new(fs.clone()), Box::new(runner));
        let cfg = config(ProjectType::Module)
            .initialize_version_control(true)
            .build()
            .unwrap();
        let report = service
            .setup(&cfg, Path::new("/work"), &mut Events::default())
            .unwrap();

        assert!(report.completed.contains(&"Initializing Git repository".to_string()));
        assert!(fs.read("/work/module-demo/src/Module.ts").contains("class DemoModule"));
    }

    #[test]
    fn progress_messages_name_the_package_set() {
        let plan = SetupPlan::for_config(
            &config(ProjectType::Application).build().unwrap(),
            "/work/app-demo",
        )
        .unwrap();
        let service = SetupService::new(Box::new(FakeFs::default()), Box::new(accept_all()));
        let mut events = Events::default();
        service.execute(&plan, &mut events).unwrap();

        assert!(events.0.contains(
            &"msg Installing runtime dependencies for application project: @zyrohub/core"
                .to_string()
        ));
        assert_eq!(
            events.0.iter().filter(|e| e.starts_with("ok ")).count(),
            plan.steps().len()
        );
        assert!(plan.contains(StepKind::InstallDependencies));
    }
}
