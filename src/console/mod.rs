//! Line-based console used by the interactive fallback

mod scripted;

pub use scripted::ScriptedConsole;

use colored::Colorize;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Prompt/readline capability
pub trait ConsoleIo {
    /// Write a line to standard output
    fn write_line(&mut self, message: &str);

    /// Report a fallback transition on standard error
    fn write_info(&mut self, message: &str);

    /// Report an error on standard error
    fn write_error(&mut self, message: &str);

    /// Read one line without its terminator. `Ok(None)` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// The process's real stdin/stdout/stderr
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleIo for StdConsole {
    fn write_line(&mut self, message: &str) {
        println!("{}", message);
    }

    fn write_info(&mut self, message: &str) {
        eprintln!("{} {}", "→".cyan(), message);
    }

    fn write_error(&mut self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        io::stdout().flush()?;

        if io::stdin().is_terminal() {
            let line = Input::<String>::new()
                .allow_empty(true)
                .report(false)
                .interact_text()
                .map_err(dialoguer_io_error);
            return end_of_input_as_none(line);
        }

        read_line_from(&mut io::stdin().lock())
    }
}

/// Read one line from `reader`, stripping `\n` or `\r\n`.
/// Zero bytes read means end of input.
fn read_line_from(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Unwrap the io error behind a prompt failure, keeping its kind
fn dialoguer_io_error(e: dialoguer::Error) -> io::Error {
    let kind = std::error::Error::source(&e)
        .and_then(|s| s.downcast_ref::<io::Error>())
        .map_or(io::ErrorKind::Other, io::Error::kind);
    io::Error::new(kind, e.to_string())
}

/// Ctrl-D on a terminal is end of input, same as a closed pipe
fn end_of_input_as_none(result: io::Result<String>) -> io::Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}
