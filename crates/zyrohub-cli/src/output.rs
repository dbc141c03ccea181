//! Terminal output: headers, status lines and follow-up hints.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn glyph(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Error => "\u{2717}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

/// Writes user-facing lines to stdout, honouring `--quiet` and colour settings.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    interactive: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// Colour is also dropped when stdout is not a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let interactive = io::stdout().is_terminal();
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !interactive,
            interactive,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Success, msg)
    }

    /// `✗ <msg>` in red. Printed even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Error, msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Warning, msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Status::Info, msg)
    }

    fn status(&self, kind: Status, msg: &str) -> io::Result<()> {
        if self.quiet && kind != Status::Error {
            return Ok(());
        }
        let glyph = kind.glyph();
        let line = if self.no_color {
            format!("{glyph} {msg}")
        } else {
            match kind {
                Status::Success => format!("{} {}", glyph.green().bold(), msg.green()),
                Status::Error => format!("{} {}", glyph.red().bold(), msg.red()),
                Status::Warning => format!("{} {}", glyph.yellow().bold(), msg.yellow()),
                Status::Info => format!("{} {}", glyph.blue().bold(), msg.blue()),
            }
        };
        self.term.write_line(&line)
    }

    /// Indented line with a dimmed bullet, for follow-up instructions.
    pub fn bullet(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("  - {msg}")
        } else {
            format!("  {} {}", "-".dimmed(), msg.bold())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Whether status glyphs and headers are coloured.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Stdout is a terminal.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}
