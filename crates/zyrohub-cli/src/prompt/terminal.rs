use console::{Term, style};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use tracing::debug;

use super::{Choice, Prompter};
use crate::error::{CliError, CliResult};

/// [`Prompter`] drawing on stderr with dialoguer's colourful theme.
///
/// Esc on a select or confirm question cancels; Ctrl-C cancels anywhere.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl DialoguerPrompter {
    pub fn new() -> CliResult<Self> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(CliError::Prompt {
                message: "stderr is not an interactive terminal".into(),
            });
        }
        Ok(Self {
            theme: ColorfulTheme::default(),
            term,
        })
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, question: &str, choices: &[Choice], default: usize) -> CliResult<usize> {
        let items: Vec<String> = choices.iter().map(Choice::to_string).collect();
        Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(&items)
            .default(default)
            .interact_on_opt(&self.term)?
            .ok_or(CliError::Cancelled)
    }

    fn confirm(&mut self, question: &str, default: bool) -> CliResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact_on_opt(&self.term)?
            .ok_or(CliError::Cancelled)
    }

    fn text(
        &mut self,
        question: &str,
        placeholder: &str,
        initial: Option<String>,
    ) -> CliResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true);
        if !placeholder.trim().is_empty() {
            input = input.default(placeholder.to_string());
        }
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        Ok(input.interact_text_on(&self.term)?)
    }

    fn reject(&mut self, reason: &str) {
        let line = format!("{} {}", style("\u{2717}").red().bold(), style(reason).red());
        if let Err(e) = self.term.write_line(&line) {
            debug!(error = %e, "could not show validation message");
        }
    }
}
