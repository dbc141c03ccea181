//! Spinner-backed progress reporting for the setup pipeline.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use zyrohub_core::application::ProgressReporter;

use crate::output::OutputManager;

const TICK: Duration = Duration::from_millis(80);

/// Shows one spinner per running step and a status line when it ends.
///
/// Without a terminal (or with `--quiet`) the spinner is hidden and step
/// labels are printed as plain lines instead.
pub struct SpinnerReporter<'a> {
    output: &'a OutputManager,
    current: Option<ProgressBar>,
}

impl<'a> SpinnerReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            current: None,
        }
    }

    fn animated(&self) -> bool {
        self.output.is_interactive() && !self.output.is_quiet()
    }

    fn spinner(&self, label: &str) -> ProgressBar {
        if !self.animated() {
            return ProgressBar::hidden();
        }
        let template = if self.output.supports_color() {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        let style = ProgressStyle::with_template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        let bar = ProgressBar::new_spinner().with_style(style);
        bar.set_message(label.to_string());
        bar.enable_steady_tick(TICK);
        bar
    }

    fn finish(&mut self) {
        if let Some(bar) = self.current.take() {
            bar.finish_and_clear();
        }
    }

    fn write(&self, result: std::io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "could not write progress line");
        }
    }
}

impl ProgressReporter for SpinnerReporter<'_> {
    fn step_started(&mut self, label: &str) {
        self.finish();
        if !self.animated() {
            self.write(self.output.print(&format!("{label}...")));
        }
        self.current = Some(self.spinner(label));
    }

    fn message(&mut self, text: &str) {
        match &self.current {
            Some(bar) if self.animated() => bar.set_message(text.to_string()),
            _ => self.write(self.output.print(text)),
        }
    }

    fn step_succeeded(&mut self, completion: &str) {
        self.finish();
        self.write(self.output.success(completion));
    }

    fn step_failed(&mut self, label: &str) {
        self.finish();
        self.write(self.output.error(&format!("{label} stopped.")));
    }
}

impl Drop for SpinnerReporter<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}
