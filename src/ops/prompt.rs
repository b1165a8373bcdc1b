//! Interactive selection and confirmation.
//!
//! The replace workflow only talks to the [`Prompt`] trait. The CLI plugs in
//! a [`TerminalPrompt`] over stdin/stderr; tests plug in scripted answers.

use std::io::{BufRead, Write};

use crate::util::errors::{ReplaceError, ReplaceResult};
use crate::util::shell::{paint, Style};

/// Operator interaction needed by the replace workflow.
pub trait Prompt {
    /// Pick one of several matches. Returns a 0-based index into `matches`.
    fn select(&mut self, matches: &[String]) -> ReplaceResult<usize>;

    /// Ask whether to go ahead with `selected`.
    fn confirm(&mut self, selected: &str) -> ReplaceResult<bool>;
}

/// Reject operator input longer than `max_len` bytes.
pub fn validate_input(input: &str, max_len: usize) -> ReplaceResult<()> {
    if input.len() > max_len {
        return Err(ReplaceError::InputTooLong { max: max_len });
    }
    Ok(())
}

/// Turn a typed 1-based answer into a 0-based index into `count` items.
pub fn parse_selection(input: &str, count: usize, max_len: usize) -> ReplaceResult<usize> {
    let input = input.trim();
    validate_input(input, max_len)?;

    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(ReplaceError::InvalidSelection {
            input: input.to_string(),
        }),
    }
}

/// Line-based prompt over any reader/writer pair.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    use_color: bool,
    max_input_len: usize,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W, max_input_len: usize) -> Self {
        TerminalPrompt {
            input,
            output,
            use_color: false,
            max_input_len,
        }
    }

    /// Enable ANSI colors in prompt text.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Read one line. `None` means end of input.
    fn read_line(&mut self) -> ReplaceResult<Option<String>> {
        self.output.flush().map_err(ReplaceError::PromptRead)?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(ReplaceError::PromptRead)?;

        Ok((n > 0).then_some(line))
    }

    fn write(&mut self, text: impl AsRef<str>) -> ReplaceResult<()> {
        self.output
            .write_all(text.as_ref().as_bytes())
            .map_err(ReplaceError::PromptRead)
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn select(&mut self, matches: &[String]) -> ReplaceResult<usize> {
        let c = self.use_color;

        self.write(format!(
            "\n{}\n",
            paint(c, Style::Heading, "Multiple matches found:")
        ))?;
        for (i, m) in matches.iter().enumerate() {
            self.write(format!("{}\n", paint(c, Style::Choice, format!("{}) {}", i + 1, m))))?;
        }
        self.write(format!(
            "{} ",
            paint(c, Style::Heading, "Enter the number of the desired package:")
        ))?;

        let answer = self.read_line()?.unwrap_or_default();
        parse_selection(&answer, matches.len(), self.max_input_len)
    }

    fn confirm(&mut self, selected: &str) -> ReplaceResult<bool> {
        let c = self.use_color;

        self.write(format!(
            "\n{} {}\n",
            paint(c, Style::Heading, "You selected:"),
            paint(c, Style::Selected, selected)
        ))?;
        self.write(format!(
            "{} ",
            paint(
                c,
                Style::Heading,
                "Confirm selection (press Enter to continue, any other key to cancel):"
            )
        ))?;

        // End of input is not an acknowledgement.
        Ok(matches!(self.read_line()?, Some(answer) if answer.trim().is_empty()))
    }
}
