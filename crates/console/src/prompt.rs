//! Line-oriented prompting with re-prompt on invalid input.

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{ConsoleError, ConsoleResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Asks questions on `output` and reads answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl Display) -> ConsoleResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    fn read_line(&mut self) -> ConsoleResult<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// A finite real number greater than zero. Asks again until one arrives.
    pub fn positive_f64(&mut self, prompt: &str) -> ConsoleResult<f64> {
        loop {
            self.say(prompt)?;
            match self.read_line()?.parse::<f64>() {
                Ok(value) if value.is_finite() && value > 0.0 => return Ok(value),
                _ => self.say("Enter a valid number greater than 0.")?,
            }
        }
    }

    /// An integer greater than zero. Asks again until one arrives.
    pub fn positive_count(&mut self, prompt: &str) -> ConsoleResult<usize> {
        self.say(prompt)?;
        loop {
            match self.read_line()?.parse::<usize>() {
                Ok(count) if count > 0 => return Ok(count),
                _ => self.say("Invalid input. Try again:")?,
            }
        }
    }

    /// An optional `YYYY-MM-DD` date.
    ///
    /// Empty input means no date. Text that is not a date is also treated as
    /// no date, after a warning.
    pub fn optional_date(&mut self, prompt: &str) -> ConsoleResult<Option<NaiveDate>> {
        self.say(prompt)?;
        let line = self.read_line()?;
        if line.is_empty() {
            return Ok(None);
        }

        match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(err) => {
                tracing::warn!(input = %line, error = %err, "unparseable date treated as absent");
                self.say("Invalid date format. Leaving the value empty.")?;
                Ok(None)
            }
        }
    }
}
