//! `zyrohub create`: ask the questions, then set the project up.

use std::path::Path;

use tracing::{info, instrument};

use zyrohub_adapters::{LocalFilesystem, SystemCommandRunner};
use zyrohub_core::prelude::{ProjectConfiguration, SetupReport, SetupService};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    progress::SpinnerReporter,
    prompt::{self, PromptSession},
};

const HEADER: &str = "\u{2615} ZyroHub - Create a new project";

#[instrument(skip_all)]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.header(HEADER)?;

    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to read the current directory")?;
    let filesystem = LocalFilesystem::new();

    let project = {
        let mut prompter = prompt::terminal()?;
        PromptSession::new(prompter.as_mut(), &filesystem, &cwd, &config.defaults)
            .run(args.project_name)?
    };

    let service = SetupService::new(Box::new(filesystem), Box::new(SystemCommandRunner::new()));
    let report = {
        let mut reporter = SpinnerReporter::new(&output);
        service.setup(&project, &cwd, &mut reporter)?
    };

    info!(root = %report.root.display(), steps = report.completed.len(), "project created");
    print_next_steps(&output, &project, &report, &cwd)?;
    Ok(())
}

fn print_next_steps(
    output: &OutputManager,
    project: &ProjectConfiguration,
    report: &SetupReport,
    cwd: &Path,
) -> CliResult<()> {
    let shown = report.root.strip_prefix(cwd).unwrap_or(&report.root);

    output.print("")?;
    output.success(&format!("Project {} is ready.", project.name()))?;
    output.info(&format!("Created in {}", report.root.display()))?;
    output.print("Next steps:")?;
    output.bullet(&format!("cd {}", shown.display()))?;
    output.bullet(&format!("{} run dev", project.package_manager()))?;
    Ok(())
}
