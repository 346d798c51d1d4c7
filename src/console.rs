//! Line-oriented prompting over any reader/writer pair.
//!
//! The interactive binary wires this to stdin/stdout; tests drive it with
//! an in-memory cursor and a `Vec<u8>` sink.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

/// Message printed when a yes/no question gets any other answer.
pub const INVALID_YES_NO: &str = "Invalid input. Please enter 'yes' or 'no'";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and reads one line of input with the line ending
    /// stripped. Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input reached");
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(answer = %answer, "Console answer");
        Ok(Some(answer))
    }

    /// Asks a yes/no question until the answer is `yes` or `no`
    /// (case-insensitive). Returns `None` on end of input.
    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };

            match answer.trim().to_lowercase().as_str() {
                "yes" => return Ok(Some(true)),
                "no" => return Ok(Some(false)),
                _ => self.say(INVALID_YES_NO)?,
            }
        }
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
