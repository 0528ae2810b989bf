//! Line-oriented console I/O
//!
//! Wraps any reader/writer pair so the shell runs the same against a terminal
//! or in-memory buffers.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Prints a label and reads one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.read(label)?.map(|line| line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt), but only the line ending is removed.
    pub fn prompt_password(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.read(label)?.map(str::to_string))
    }

    fn read(&mut self, label: &str) -> io::Result<Option<&str>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        let line = self.line.strip_suffix('\n').unwrap_or(self.line.as_str());
        Ok(Some(line.strip_suffix('\r').unwrap_or(line)))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        if text.ends_with('\n') {
            write!(self.output, "{}", text)
        } else {
            writeln!(self.output, "{}", text)
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
