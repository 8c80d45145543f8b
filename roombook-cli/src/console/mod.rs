//! Line-oriented prompting for the interactive menu.
//!
//! `Console` is generic over its input and output so the menu can be
//! driven from stdin/stdout or from in-memory buffers in tests.

pub mod menu;

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use roombook::model::{parse_date, parse_time};

pub use menu::Menu;

/// Why a prompt did not produce a value.
#[derive(Debug)]
pub enum ConsoleError {
    /// Input reached end of file.
    Closed,
    /// Reading or writing failed.
    Io(io::Error),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Closed => write!(f, "input closed"),
            ConsoleError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

/// Result of a prompt.
pub type Prompt<T> = Result<T, ConsoleError>;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for callers that format whole blocks.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl fmt::Display) -> Prompt<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `prompt` and reads one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> Prompt<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as a number.
    pub fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> Prompt<T> {
        loop {
            let answer = self.read_line(prompt)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Prompts until `parse` accepts the answer, printing each rejection.
    pub fn prompt_parsed<T, E, F>(&mut self, prompt: &str, parse: F) -> Prompt<T>
    where
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.read_line(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Prompts until the answer is a `YYYY-MM-DD` date.
    pub fn prompt_date(&mut self, prompt: &str) -> Prompt<NaiveDate> {
        self.prompt_parsed(prompt, parse_date)
    }

    /// Prompts until the answer is an `HH:MM` or `HH:MM:SS` time.
    pub fn prompt_time(&mut self, field: &str, prompt: &str) -> Prompt<NaiveTime> {
        self.prompt_parsed(prompt, |text| parse_time(field, text))
    }

    /// Asks a yes/no question until one of the two is given.
    pub fn confirm(&mut self, prompt: &str) -> Prompt<bool> {
        loop {
            let answer = self.read_line(prompt)?.to_lowercase();
            match answer.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => self.say("Please answer yes or no.")?,
            }
        }
    }
}
