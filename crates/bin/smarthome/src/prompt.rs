//! Line-oriented prompting over any reader/writer pair.
//!
//! Numeric prompts loop until the answer parses and lies inside the field's
//! declared range; end of input ends the loop with [`ShellError::EndOfInput`].

use std::fmt;
use std::io::{BufRead, Write};

use smarthome_domain::range::FieldRange;

use crate::ShellError;

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `message` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] if the output cannot be written.
    pub fn say(&mut self, message: impl fmt::Display) -> Result<(), ShellError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Show `prompt` and read one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::EndOfInput`] when the input is exhausted, or
    /// [`ShellError::Io`] if reading or writing fails.
    pub fn line(&mut self, prompt: &str) -> Result<String, ShellError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(buf)
    }

    /// Ask for a number until one inside `range` is entered.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::EndOfInput`] if the input ends before a valid
    /// number arrives, or [`ShellError::Io`] on a terminal failure.
    pub fn number_in(&mut self, prompt: &str, range: FieldRange) -> Result<u16, ShellError> {
        let mut answer = self.line(prompt)?;
        loop {
            match answer.trim().parse::<u16>() {
                Ok(value) if range.contains(value) => return Ok(value),
                _ => {
                    tracing::debug!(field = range.field, input = %answer, "rejected numeric input");
                    let retry = format!(
                        "Please enter a valid number between {} and {}: ",
                        range.min, range.max
                    );
                    answer = self.line(&retry)?;
                }
            }
        }
    }

    /// Ask a yes/no question. Only `yes` (any case) counts as yes.
    ///
    /// # Errors
    ///
    /// Same as [`Prompter::line`].
    pub fn yes_no(&mut self, prompt: &str) -> Result<bool, ShellError> {
        let answer = self.line(prompt)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use smarthome_domain::range;

    use super::*;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn should_strip_line_terminator_only() {
        let mut p = prompter("  Living Room \r\n");
        assert_eq!(p.line("Name: ").unwrap(), "  Living Room ");
        assert_eq!(output(p), "Name: ");
    }

    #[test]
    fn should_report_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.line("Name: "), Err(ShellError::EndOfInput)));
    }

    #[test]
    fn should_accept_number_on_first_try() {
        let mut p = prompter("22\n");
        let value = p
            .number_in("Set temperature (16-30): ", range::THERMOSTAT_TEMPERATURE)
            .unwrap();
        assert_eq!(value, 22);
    }

    #[test]
    fn should_reprompt_until_number_is_in_range() {
        let mut p = prompter("warm\n15\n31\n-3\n 30 \n");
        let value = p
            .number_in("Set temperature (16-30): ", range::AIR_CONDITIONER_TEMPERATURE)
            .unwrap();
        assert_eq!(value, 30);

        let out = output(p);
        assert_eq!(
            out.matches("Please enter a valid number between 16 and 30: ").count(),
            4
        );
    }

    #[test]
    fn should_stop_retrying_at_end_of_input() {
        let mut p = prompter("0\n");
        let result = p.number_in("Enter speed level (1-5): ", range::EXHAUST_FAN_SPEED);
        assert!(matches!(result, Err(ShellError::EndOfInput)));
    }

    #[test]
    fn should_treat_only_yes_as_yes() {
        let mut p = prompter("YES\nyes please\nno\n");
        assert!(p.yes_no("Start recording? ").unwrap());
        assert!(!p.yes_no("Start recording? ").unwrap());
        assert!(!p.yes_no("Start recording? ").unwrap());
    }
}
