//! Shell output for the goreplace CLI.
//!
//! All operator-facing messages go through [`Shell`] so that status words are
//! aligned and colored consistently. Colors are purely cosmetic: they are
//! dropped when stderr is not a terminal, unless `--color always` is given,
//! and always dropped with `--color never` or `--no-color`.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "invalid color choice '{}'; expected 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // Success (green)
    Replaced,

    // Info (blue)
    Info,

    // Warning (yellow)
    Skipped,
    Cancelled,

    // Error (red)
    Error,
}

impl Status {
    fn as_str(&self) -> &'static str {
        match self {
            Status::Replaced => "Replaced",
            Status::Info => "Info",
            Status::Skipped => "Skipped",
            Status::Cancelled => "Cancelled",
            Status::Error => "error",
        }
    }

    fn color_code(&self) -> &'static str {
        match self {
            Status::Replaced => "\x1b[1;32m",
            Status::Info => "\x1b[1;34m",
            Status::Skipped | Status::Cancelled => "\x1b[1;33m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Width status words are right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Text styles used by interactive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Heading,
    Choice,
    Selected,
}

impl Style {
    fn color_code(&self) -> &'static str {
        match self {
            Style::Heading => "\x1b[33m",
            Style::Choice => "\x1b[34m",
            Style::Selected => "\x1b[32m",
        }
    }
}

/// Central shell for all CLI output.
#[derive(Debug, Clone)]
pub struct Shell {
    use_color: bool,
    verbose: bool,
}

impl Shell {
    /// Create a new shell.
    pub fn new(color: ColorChoice, verbose: bool) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };

        Shell { use_color, verbose }
    }

    /// Check if colors are enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Check if shell is in verbose mode.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print a status message.
    ///
    /// Format: `{status:>12} {message}`
    pub fn status(&self, status: Status, msg: impl Display) {
        eprintln!("{} {}", self.format_status(status), msg);
    }

    /// Print an info message.
    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Print a `help:` line under a previous error.
    pub fn help(&self, msg: impl Display) {
        eprintln!("{:>width$} {}", "help:", msg, width = STATUS_WIDTH);
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            format!(
                "{}{:>width$}\x1b[0m",
                status.color_code(),
                text,
                width = STATUS_WIDTH
            )
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}

/// Wrap `text` in the ANSI sequence for `style`, if `use_color` is set.
pub fn paint(use_color: bool, style: Style, text: impl Display) -> String {
    if use_color {
        format!("{}{}\x1b[0m", style.color_code(), text)
    } else {
        text.to_string()
    }
}
