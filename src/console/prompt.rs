//! Line-oriented prompts that retry until the input is acceptable
//!
//! Every read returns `Ok(None)` once input is exhausted so the session can
//! end cleanly on EOF.

use crate::config::RosterConfig;
use crate::roster::validation::{normalize_id, normalize_name, validate_score};
use crate::types::StudentId;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Reads answers from `input` and writes prompts and messages to `output`
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, mostly for inspecting scripted sessions
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to console")
    }

    /// Print a prompt and read one line, `None` on end of input
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write to console")?;
        self.output.flush().context("Failed to flush console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Read an integer within `[min, max]`
    pub fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => self.say(&format!(
                    "Value must be in [{}, {}]. Try again.",
                    min, max
                ))?,
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Read an assessment score within [0, 100]
    pub fn read_score(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match line.trim().parse::<f64>() {
                Ok(value) => match validate_score(value) {
                    Ok(()) => return Ok(Some(value)),
                    Err(_) => self.say("Score must be in [0, 100]. Try again.")?,
                },
                Err(_) => self.say("Invalid number. Try again.")?,
            }
        }
    }

    /// Read a student ID that satisfies the roster's format rule
    pub fn read_id(&mut self, prompt: &str, config: &RosterConfig) -> Result<Option<StudentId>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match normalize_id(&line, config) {
                Ok(id) => return Ok(Some(id)),
                Err(e) => self.say(&format!("{}. Try again.", e))?,
            }
        }
    }

    /// Read a non-empty display name within the roster's length limit
    pub fn read_name(&mut self, prompt: &str, config: &RosterConfig) -> Result<Option<String>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            match normalize_name(&line, config) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => self.say(&format!("{}. Try again.", e))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_read_int_retries_until_in_range() {
        let mut p = prompter("abc\n12\n4\n");
        assert_eq!(p.read_int_in_range("Choice: ", 0, 5).unwrap(), Some(4));

        let output = output_of(p);
        assert!(output.contains("Invalid number. Try again."));
        assert!(output.contains("Value must be in [0, 5]. Try again."));
    }

    #[test]
    fn test_read_returns_none_on_eof() {
        let mut p = prompter("");
        assert_eq!(p.read_int_in_range("Choice: ", 0, 5).unwrap(), None);

        let mut p = prompter("oops\n");
        assert_eq!(p.read_score("Score: ").unwrap(), None);
    }

    #[test]
    fn test_read_score() {
        let mut p = prompter("101\n-3\n87.5\n");
        assert_eq!(p.read_score("Score: ").unwrap(), Some(87.5));
        assert!(output_of(p).contains("Score must be in [0, 100]. Try again."));
    }

    #[test]
    fn test_read_id_normalizes_and_retries() {
        let config = RosterConfig::default();
        let mut p = prompter("abc1\nets\nETS042\n");
        assert_eq!(p.read_id("ID: ", &config).unwrap(), Some("ets042".to_string()));

        let output = output_of(p);
        assert_eq!(output.matches("Try again.").count(), 2);
    }

    #[test]
    fn test_read_name() {
        let config = RosterConfig::default();
        let mut p = prompter("\n  Ada Lovelace \n");
        assert_eq!(
            p.read_name("Name: ", &config).unwrap(),
            Some("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn test_read_line_strips_crlf() {
        let mut p = prompter("ets1\r\n");
        assert_eq!(p.read_line("> ").unwrap(), Some("ets1".to_string()));
    }
}
