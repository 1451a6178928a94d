//! User input utilities for interactive CLI prompts
//!
//! This module asks for the values that were not usable on the command
//! line (input file and row separator) and for confirmation when the header
//! and the enrollment schema have different column counts. All prompts go
//! through the [`Console`] trait so they can be driven from tests.

use crate::app::services::csv_parser::ColumnCountConfirmation;
use crate::config::parse_row_separator;
use crate::{Error, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const INPUT_PATH_PROMPT: &str = "Please type the location of the file you'd like to parse.";
const INPUT_PATH_INVALID: &str = "Please select a valid file. File does not exist.";
const SEPARATOR_PROMPT: &str = "Please type the character that separates the rows (eg. ';' or '\\n'";
const SEPARATOR_INVALID: &str = "Not a valid character. Please try again.";
const RESPONSE_INVALID: &str = "Not a valid response. Please try again.";

/// Line-oriented text exchange with the user
pub trait Console {
    /// Show one line of text
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Read one line, without its line terminator
    fn read_line(&mut self) -> Result<String>;
}

/// Console on the process's stdin and stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|_| stdout.flush())
            .map_err(|e| Error::io("Failed to write to stdout".to_string(), e))
    }

    fn read_line(&mut self) -> Result<String> {
        let mut input = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

        if bytes == 0 {
            return Err(Error::io(
                "Failed to read user input".to_string(),
                io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            ));
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Answer to a yes/no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueResponse {
    Yes,
    No,
    Unrecognized,
}

/// Interpret a yes/no answer: anything starting with `y` or `n`, any case
pub fn parse_continue_response(input: &str) -> ContinueResponse {
    let input = input.to_lowercase();
    if input.starts_with('y') {
        ContinueResponse::Yes
    } else if input.starts_with('n') {
        ContinueResponse::No
    } else {
        ContinueResponse::Unrecognized
    }
}

/// Ask for the input file until `exists` accepts the answer
pub fn prompt_input_path<C, F>(console: &mut C, exists: F) -> Result<PathBuf>
where
    C: Console + ?Sized,
    F: Fn(&Path) -> bool,
{
    loop {
        console.write_line(INPUT_PATH_PROMPT)?;
        let response = console.read_line()?;

        if !response.is_empty() && exists(Path::new(&response)) {
            return Ok(PathBuf::from(response));
        }
        console.write_line(INPUT_PATH_INVALID)?;
    }
}

/// Ask for the row separator until a single character or escape is given
pub fn prompt_row_separator<C: Console + ?Sized>(console: &mut C) -> Result<char> {
    loop {
        console.write_line(SEPARATOR_PROMPT)?;
        let response = console.read_line()?;

        if let Some(separator) = parse_row_separator(&response) {
            return Ok(separator);
        }
        console.write_line(SEPARATOR_INVALID)?;
    }
}

/// Ask whether to continue when header and schema column counts differ
///
/// Returns `Ok(false)` when the user answers no.
pub fn prompt_column_count_mismatch<C: Console + ?Sized>(
    console: &mut C,
    header_count: usize,
    schema_count: usize,
) -> Result<bool> {
    loop {
        console.write_line(&format!(
            "The amount of properties that will be mapped are not equal to the amount of \
             properties in the headers line of the CSV file. Properties to be mapped: {}; \
             Properties in header: {}. Would you like to continue? y/N",
            schema_count, header_count
        ))?;
        let response = console.read_line()?;

        match parse_continue_response(&response) {
            ContinueResponse::Yes => return Ok(true),
            ContinueResponse::No => return Ok(false),
            ContinueResponse::Unrecognized => console.write_line(RESPONSE_INVALID)?,
        }
    }
}

/// Column count confirmation that asks the user on a console
pub struct PromptConfirmation<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> PromptConfirmation<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self { console }
    }
}

impl<C: Console + ?Sized> ColumnCountConfirmation for PromptConfirmation<'_, C> {
    fn confirm_column_count(&mut self, header_count: usize, schema_count: usize) -> Result<bool> {
        prompt_column_count_mismatch(&mut *self.console, header_count, schema_count)
    }
}
