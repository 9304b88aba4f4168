use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal the menu talks through.
///
/// Generic over the reader and writer so the whole menu can be driven from
/// an in-memory transcript.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Reads one trimmed line. `None` means the input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn ask(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        self.say(prompt)?;
        self.read_line()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a row or seat number typed by the customer.
///
/// Anything that is not a non-negative integer becomes 0, which no hall
/// accepts as a coordinate or dimension.
pub fn parse_number(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(0)
}
