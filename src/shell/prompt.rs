//! Line prompts that re-ask until the answer is usable.

use crate::errors::{Error, Result};
use std::io::{BufRead, Write};

/// Reads answers from `input` after writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps a reader and writer pair.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer, for output that is not a prompt.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Writes `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` once input has ended.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `prompt` and reads one line, treating end of input as an error.
    ///
    /// # Errors
    /// Returns `Error::InputClosed` if input has ended.
    pub fn read_required(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?.ok_or(Error::InputClosed)
    }

    /// Asks until a non-blank answer is given; the answer is trimmed.
    ///
    /// # Errors
    /// Returns `Error::InputClosed` if input ends first.
    pub fn string(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.read_required(prompt)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "Please enter a value")?;
        }
    }

    /// Asks until `parse` accepts the trimmed answer and the number is greater than zero.
    ///
    /// # Errors
    /// Returns `Error::InputClosed` if input ends first.
    pub fn positive_number<F>(&mut self, prompt: &str, parse: F) -> Result<i64>
    where
        F: Fn(&str) -> Option<i64>,
    {
        loop {
            let answer = self.read_required(prompt)?;
            match parse(answer.trim()) {
                Some(number) if number > 0 => return Ok(number),
                Some(_) => writeln!(self.output, "Please enter a number greater than 0")?,
                None => writeln!(self.output, "Please enter a number")?,
            }
        }
    }
}
