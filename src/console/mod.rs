//! Console prompting over any `BufRead` / `Write` pair.  The programs use
//! stdin and stdout; tests script the input with a `Cursor` and capture the
//! output in a `Vec<u8>`.
//!
//! End of input (Ctrl-D on a terminal) is reported as `None`, an
//! interrupt, which ends the current prompt loop.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::utils::errors::ExperimentError;

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

/// Console over the process's stdin and stdout.
pub fn stdio() -> Console<io::StdinLock<'static>, io::Stdout> {
    Console::new(io::stdin().lock(), io::stdout())
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write `message` without a newline, then read one line of input.
    /// Returns the line without its line ending, or `None` on interrupt.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, ExperimentError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input");
                Ok(None)
            }
            Ok(_) => Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string())),
            Err(err) => Err(err.into()),
        }
    }

    /// Prompt until `parse` accepts the input.  Each rejection prints the
    /// message `parse` returns and asks again.
    pub fn prompt_until<T, F>(
        &mut self,
        message: &str,
        mut parse: F,
    ) -> Result<Option<T>, ExperimentError>
    where
        F: FnMut(&str) -> Result<T, &'static str>,
    {
        loop {
            let line = match self.prompt(message)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(rejection) => {
                    warn!(input = %line, "rejected input");
                    self.say(rejection)?;
                }
            }
        }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl Display) -> Result<(), ExperimentError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Write `text` as is.
    pub fn print(&mut self, text: impl Display) -> Result<(), ExperimentError> {
        write!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ExperimentError> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Parse a whole-number answer, ignoring surrounding whitespace.
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn prompt_strips_line_endings() {
        let mut console = console("42\r\nnext\n");
        assert_eq!(console.prompt("? ").unwrap(), Some("42".to_string()));
        assert_eq!(console.prompt("? ").unwrap(), Some("next".to_string()));
        assert_eq!(console.prompt("? ").unwrap(), None);
        assert_eq!(output(console), "? ? ? ");
    }

    #[test]
    fn prompt_until_reprompts_on_rejection() {
        let mut console = console("abc\n7\n");
        let value = console
            .prompt_until("n: ", |line| parse_integer(line).ok_or("not a number"))
            .unwrap();
        assert_eq!(value, Some(7));
        assert_eq!(output(console), "n: not a number\nn: ");
    }

    #[test]
    fn prompt_until_stops_on_interrupt() {
        let mut console = console("abc\n");
        let value = console
            .prompt_until("n: ", |line| parse_integer(line).ok_or("not a number"))
            .unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn integers_allow_whitespace_and_sign() {
        assert_eq!(parse_integer(" 12 "), Some(12));
        assert_eq!(parse_integer("-3"), Some(-3));
        assert_eq!(parse_integer("+5"), Some(5));
        assert_eq!(parse_integer("1.5"), None);
        assert_eq!(parse_integer(""), None);
    }
}
