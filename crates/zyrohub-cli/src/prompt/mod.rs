//! Interactive questions.
//!
//! [`Prompter`] is the seam between the question flow in [`PromptSession`]
//! and whatever draws the questions. The terminal implementation uses
//! dialoguer and only exists with the `interactive` feature.

use std::fmt;

use crate::error::CliResult;
#[cfg(not(feature = "interactive"))]
use crate::error::CliError;

mod session;
#[cfg(feature = "interactive")]
mod terminal;

pub use session::PromptSession;
#[cfg(feature = "interactive")]
pub use terminal::DialoguerPrompter;

/// One option of a select question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub hint: &'static str,
}

impl Choice {
    pub const fn new(label: &'static str, hint: &'static str) -> Self {
        Self { label, hint }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hint.is_empty() {
            f.write_str(self.label)
        } else {
            write!(f, "{} ({})", self.label, self.hint)
        }
    }
}

/// Asks one question at a time.
///
/// Every method returns [`CliError::Cancelled`](crate::error::CliError::Cancelled)
/// when the user backs out.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `choices`; returns its index.
    fn select(&mut self, question: &str, choices: &[Choice], default: usize) -> CliResult<usize>;

    fn confirm(&mut self, question: &str, default: bool) -> CliResult<bool>;

    /// Free text. `placeholder` is shown as the default when non-blank and
    /// `initial` prefills the editable answer.
    fn text(&mut self, question: &str, placeholder: &str, initial: Option<String>)
    -> CliResult<String>;

    /// Tell the user why the last answer was not accepted.
    fn reject(&mut self, reason: &str);
}

/// Prompter bound to the current terminal.
#[cfg(feature = "interactive")]
pub fn terminal() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(DialoguerPrompter::new()?))
}

#[cfg(not(feature = "interactive"))]
pub fn terminal() -> CliResult<Box<dyn Prompter>> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
