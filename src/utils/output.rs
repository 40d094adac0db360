use crate::utils::errors::Result;
use colored::Colorize;
use std::io::Write;

/// How a status line should stand out on the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Success,
    Warning,
    Failure,
}

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub color: bool,
}

impl OutputFormat {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Apply the colour for `tone`, or return the text untouched when colour is off.
    ///
    /// Colour is still subject to `NO_COLOR`/`CLICOLOR` handling in the `colored` crate.
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Plain => text.to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.yellow().to_string(),
            Tone::Failure => text.red().to_string(),
        }
    }

    /// Write a single line to `out`
    pub fn print_line<W: Write>(&self, out: &mut W, tone: Tone, text: &str) -> Result<()> {
        writeln!(out, "{}", self.paint(tone, text))?;
        Ok(())
    }
}
