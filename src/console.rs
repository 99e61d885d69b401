//! Prompt/answer I/O over any line source and sink.
//!
//! The binary wires this to locked stdin/stdout; tests feed a scripted
//! `Cursor` and capture the output in a `Vec<u8>`.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::error::ExplorerError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt`, then blocks for one line of input.
    ///
    /// The returned answer has its line terminator removed but is otherwise
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InputClosed`] when the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ExplorerError::InputClosed.into());
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Asks a yes/no question; only "yes" in any casing counts as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self.ask(prompt)?.eq_ignore_ascii_case("yes"))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
