//! Line-oriented prompting over arbitrary reader/writer pairs

use super::{CliError, CliResult};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Writes prompts and reads one answer per line.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The underlying output stream.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Write `message` followed by a newline.
    pub fn say(&mut self, message: impl Display) -> CliResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Print `prompt` and read one line without its terminator.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> CliResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    /// Like [`read_line`](Self::read_line), but end of input is an error.
    pub fn ask_line(&mut self, prompt: &str) -> CliResult<String> {
        self.read_line(prompt)?.ok_or(CliError::EndOfInput)
    }

    /// Print `prompt` and parse the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidInput`] if the answer does not parse and
    /// [`CliError::EndOfInput`] if input is exhausted.
    pub fn ask<T>(&mut self, prompt: &str) -> CliResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let line = self.ask_line(prompt)?;
        let answer = line.trim();
        answer
            .parse()
            .map_err(|e| CliError::InvalidInput(format!("{answer:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graykit_core::Point;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut p = prompter("first\r\n  second  \n");
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(p.read_line("> ").unwrap().as_deref(), Some("  second  "));
        assert_eq!(p.read_line("> ").unwrap(), None);
        assert_eq!(p.output().as_slice(), b"> > > ");
    }

    #[test]
    fn test_ask_parses() {
        let mut p = prompter(" 42 \n1.5\n3 4\n");
        assert_eq!(p.ask::<u8>("").unwrap(), 42);
        assert_eq!(p.ask::<f64>("").unwrap(), 1.5);
        assert_eq!(p.ask::<Point>("").unwrap(), Point::new(3, 4));
    }

    #[test]
    fn test_ask_errors() {
        let mut p = prompter("256\nabc\n");
        assert!(matches!(p.ask::<u8>(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(p.ask::<i32>(""), Err(CliError::InvalidInput(_))));
        assert!(matches!(p.ask::<i32>(""), Err(CliError::EndOfInput)));
    }
}
