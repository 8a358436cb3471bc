//! Retry-until-valid scalar input.
//!
//! [`ScalarReader`] reads whitespace-delimited tokens from a line-oriented
//! source, the way a terminal user types them. A prompt is written before
//! every attempt. A malformed token throws away the rest of its line; a token
//! that parses but fails its constraint does not, since the reader has
//! already consumed exactly that token.

use crate::domain::model::Scalar;
use crate::utils::error::{InputError, Result};
use crate::utils::validation::{accept_any, ConstraintResult};
use std::io::{BufRead, Write};

/// What to show the operator for one read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    text: &'a str,
    malformed: Option<&'a str>,
}

impl<'a> Prompt<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, malformed: None }
    }

    /// No prompt text; used when a header line already told the operator
    /// what to type.
    pub fn silent() -> Self {
        Self::new("")
    }

    pub fn with_malformed_message(mut self, message: &'a str) -> Self {
        self.malformed = Some(message);
        self
    }

    pub fn text(&self) -> &str {
        self.text
    }

    fn malformed_message<T: Scalar>(&self) -> &str {
        self.malformed.unwrap_or(T::KIND.default_malformed_message())
    }
}

/// Checks one token against a scalar type and a constraint.
pub fn validate_token<T, C>(
    token: &str,
    prompt: &Prompt<'_>,
    constraint: C,
) -> std::result::Result<T, InputError>
where
    T: Scalar,
    C: Fn(&T) -> ConstraintResult,
{
    let value = T::parse_token(token).ok_or_else(|| InputError::MalformedToken {
        token: token.to_string(),
        message: prompt.malformed_message::<T>().to_string(),
    })?;

    constraint(&value).map_err(|message| InputError::DomainViolation {
        value: value.to_string(),
        message,
    })?;

    Ok(value)
}

pub struct ScalarReader<R, W> {
    input: R,
    output: W,
    line: String,
    cursor: usize,
}

impl<R: BufRead, W: Write> ScalarReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Reads a value of any magnitude with the default malformed message.
    pub fn read_value<T: Scalar>(&mut self, prompt: &str) -> Result<Option<T>> {
        self.read_with(Prompt::new(prompt), accept_any)
    }

    /// Prompts until a token parses as `T` and satisfies `constraint`.
    ///
    /// Returns `Ok(None)` once the input is exhausted. Rejections are
    /// reported on the output stream and never returned.
    pub fn read_with<T, C>(&mut self, prompt: Prompt<'_>, constraint: C) -> Result<Option<T>>
    where
        T: Scalar,
        C: Fn(&T) -> ConstraintResult,
    {
        loop {
            if !prompt.text().is_empty() {
                write!(self.output, "{}", prompt.text())?;
                self.output.flush()?;
            }

            let Some(token) = self.next_token()? else {
                tracing::debug!("Input exhausted while waiting for {} value", T::KIND);
                return Ok(None);
            };

            match validate_token(&token, &prompt, &constraint) {
                Ok(value) => {
                    tracing::debug!("Accepted {} value {}", T::KIND, value);
                    return Ok(Some(value));
                }
                Err(err) => {
                    tracing::debug!("Rejected input: {}", err);
                    self.report(&err)?;
                    if matches!(err, InputError::MalformedToken { .. }) {
                        self.discard_line();
                    }
                }
            }
        }
    }

    /// Writes one line of program output.
    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn report(&mut self, err: &InputError) -> Result<()> {
        self.write_line(&format!("Error: {}.", err.user_friendly_message()))
    }

    fn discard_line(&mut self) {
        self.cursor = self.line.len();
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            let rest = &self.line[self.cursor..];
            let start = self.cursor + (rest.len() - rest.trim_start().len());
            if start < self.line.len() {
                let tail = &self.line[start..];
                let len = tail.find(char::is_whitespace).unwrap_or(tail.len());
                self.cursor = start + len;
                return Ok(Some(tail[..len].to_string()));
            }

            if !self.fill_line()? {
                return Ok(None);
            }
        }
    }

    fn fill_line(&mut self) -> Result<bool> {
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf)?;
        // Undecodable bytes become U+FFFD and fail to parse like any other junk.
        self.line = String::from_utf8_lossy(&buf).into_owned();
        self.cursor = 0;
        Ok(read > 0)
    }
}
