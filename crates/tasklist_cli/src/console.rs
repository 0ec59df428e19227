//! Terminal notifier sharing one input stream with the command loop.

use std::io::{self, BufRead, Write};
use tasklist_core::Notifier;

/// Line-oriented console: frames go to `output`, alerts to `errors`.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Reads the next line, or `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.errors, "{text}")
    }
}

impl<R: BufRead, W: Write, E: Write> Notifier for Console<R, W, E> {
    fn alert(&mut self, message: &str) {
        // Nowhere left to report a broken stderr.
        let _ = writeln!(self.errors, "error: {message}");
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ")
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}
