//! Line-oriented console I/O.
//!
//! Every read fails with [`io::ErrorKind::UnexpectedEof`] once input is
//! exhausted, which the menu loop treats as a request to quit.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub struct Console {
    input: Box<dyn BufRead>,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>, out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Self { input, out, err }
    }

    /// Console over the process's stdin, stdout, and stderr.
    pub fn stdio() -> Self {
        Self::new(
            Box::new(io::BufReader::new(io::stdin())),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    pub fn println(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Write a message to the error stream.
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.err, "Error: {message}")?;
        self.err.flush()
    }

    /// Read one line without its trailing newline.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print `label` without a newline and read the answer.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    /// Re-prompt until `parse` accepts the trimmed answer.
    pub fn read_with<T, E, F>(&mut self, label: &str, parse: F) -> io::Result<T>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        loop {
            let answer = self.prompt(label)?;
            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => self.error(e)?,
            }
        }
    }

    /// Like [`read_with`](Self::read_with), but a blank answer is `None`.
    pub fn read_optional_with<T, E, F>(&mut self, label: &str, parse: F) -> io::Result<Option<T>>
    where
        E: Display,
        F: Fn(&str) -> Result<T, E>,
    {
        self.read_with(label, |answer| {
            if answer.is_empty() {
                Ok(None)
            } else {
                parse(answer).map(Some)
            }
        })
    }

    /// Read an integer in `min..=max`.
    pub fn read_int(&mut self, label: &str, min: i64, max: i64) -> io::Result<i64> {
        self.read_with(label, |answer| match answer.parse::<i64>() {
            Ok(n) if (min..=max).contains(&n) => Ok(n),
            _ => Err(format!("Please enter a number between {min} and {max}")),
        })
    }

    pub fn read_non_empty(&mut self, label: &str) -> io::Result<String> {
        self.read_with(label, |answer| {
            if answer.is_empty() {
                Err("A value is required")
            } else {
                Ok(answer.to_string())
            }
        })
    }

    /// Read a secret exactly as typed. Only an empty line is re-prompted;
    /// surrounding spaces are part of the value.
    pub fn read_password(&mut self, label: &str) -> io::Result<String> {
        loop {
            let answer = self.prompt(label)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.error("A password is required")?;
        }
    }

    /// Trimmed answer, or `None` when left blank.
    pub fn read_optional(&mut self, label: &str) -> io::Result<Option<String>> {
        let answer = self.prompt(label)?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    /// Ask a yes/no question; anything but `y`/`yes` is a no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{question} (y/n): "))?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// In-memory writer whose contents stay readable after the console that
/// owns a clone has been consumed.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn scripted(input: &str) -> (Console, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let console = Console::new(
            Box::new(Cursor::new(input.to_string())),
            Box::new(out.clone()),
            Box::new(err.clone()),
        );
        (console, out, err)
    }

    #[test]
    fn read_line_strips_line_endings() {
        let (mut console, _, _) = scripted("hello\r\nworld\n");
        assert_eq!(console.read_line().unwrap(), "hello");
        assert_eq!(console.read_line().unwrap(), "world");
    }

    #[test]
    fn exhausted_input_is_unexpected_eof() {
        let (mut console, _, _) = scripted("");
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_int_reprompts_until_in_range() {
        let (mut console, out, err) = scripted("abc\n9\n 2 \n");
        assert_eq!(console.read_int("Choice: ", 1, 3).unwrap(), 2);
        assert_eq!(out.contents().matches("Choice: ").count(), 3);
        assert_eq!(
            err.contents().matches("between 1 and 3").count(),
            2,
            "{}",
            err.contents()
        );
    }

    #[test]
    fn read_non_empty_skips_blank_answers() {
        let (mut console, _, _) = scripted("\n   \n  yoga \n");
        assert_eq!(console.read_non_empty("Name: ").unwrap(), "yoga");
    }

    #[test]
    fn read_password_keeps_surrounding_spaces() {
        let (mut console, _, err) = scripted("\n  padded pass \n");
        let password = console.read_password("Password: ").unwrap();
        assert_eq!(password, "  padded pass ");
        assert!(err.contents().contains("A password is required"));
    }

    #[test]
    fn read_optional_maps_blank_to_none() {
        let (mut console, _, _) = scripted("\n goals \n");
        assert_eq!(console.read_optional("Goals: ").unwrap(), None);
        let goals = console.read_optional("Goals: ").unwrap();
        assert_eq!(goals.as_deref(), Some("goals"));
    }

    #[test]
    fn read_optional_with_parses_or_keeps_blank() {
        let (mut console, _, err) = scripted("\nx\n15\n");
        let parse = |s: &str| s.parse::<i32>().map_err(|e| e.to_string());
        let blank = console.read_optional_with("Minutes: ", parse).unwrap();
        assert_eq!(blank, None);
        let minutes = console.read_optional_with("Minutes: ", parse).unwrap();
        assert_eq!(minutes, Some(15));
        assert!(err.contents().contains("invalid digit"));
    }

    #[test]
    fn confirm_accepts_only_yes() {
        let (mut console, _, _) = scripted("Y\nyes\nn\nsure\n");
        assert!(console.confirm("Delete?").unwrap());
        assert!(console.confirm("Delete?").unwrap());
        assert!(!console.confirm("Delete?").unwrap());
        assert!(!console.confirm("Delete?").unwrap());
    }
}
