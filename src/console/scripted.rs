//! Console driven by a fixed input script

use std::collections::VecDeque;
use std::io;

use super::ConsoleIo;

/// [`ConsoleIo`] that replays queued input lines and records output.
///
/// Once the script runs out, reads report end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    fail_reads: bool,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub reads: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Console whose every read fails with a broken pipe
    pub fn broken() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Whether the console was touched at all
    pub fn is_untouched(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty() && self.reads == 0
    }
}

impl ConsoleIo for ScriptedConsole {
    fn write_line(&mut self, message: &str) {
        self.stdout.push(message.to_string());
    }

    fn write_info(&mut self, message: &str) {
        self.stderr.push(message.to_string());
    }

    fn write_error(&mut self, message: &str) {
        self.stderr.push(message.to_string());
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads += 1;
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"));
        }
        Ok(self.input.pop_front())
    }
}
