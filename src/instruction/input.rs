//! The numeric input boundary.
//!
//! Instructions that need an externally supplied value go through an [`InputSource`], so the
//! console can be swapped for a scripted queue in tests.
//!
//! - [`ConsoleInput`] - Prompts on a writer and reads a line from a reader
//! - [`ScriptedInput`] - Hands out canned responses in order
//!
//! Parsing is separate from sourcing: [`parse_integer`] turns raw text into a value and fails
//! with [`Error::InputParse`] rather than defaulting to zero.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    num::IntErrorKind,
};

use crate::{Error, Result};

/// A source of raw, line-oriented input.
pub trait InputSource {
    /// Presents `prompt` and returns the next raw response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputExhausted`] when no more input is available, or
    /// [`Error::Io`] if the underlying stream fails.
    fn next_value(&mut self, prompt: &str) -> Result<String>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_value(&mut self, prompt: &str) -> Result<String> {
        (**self).next_value(prompt)
    }
}

/// Parses a signed decimal integer, ignoring surrounding whitespace.
///
/// Integers outside the `i64` range are reduced modulo 2^64, which leaves every 8- and
/// 16-bit encoding unchanged.
///
/// # Errors
///
/// Returns [`Error::InputParse`] carrying the trimmed text if it is not an integer.
///
/// # Examples
///
/// ```rust
/// use bytewise::{parse_integer, Error};
///
/// assert_eq!(parse_integer(" -42\n").unwrap(), -42);
/// assert_eq!(parse_integer("18446744073709551617").unwrap(), 1);
/// assert!(matches!(parse_integer("forty"), Err(Error::InputParse { .. })));
/// ```
pub fn parse_integer(raw: &str) -> Result<i64> {
    let input = raw.trim();
    input.parse::<i64>().or_else(|source| {
        let overflowed = matches!(
            source.kind(),
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
        );
        match wrap_decimal(input) {
            Some(value) if overflowed => Ok(value),
            _ => Err(Error::InputParse {
                input: input.to_string(),
                source,
            }),
        }
    })
}

/// Reduces a decimal string modulo 2^64, or returns `None` if it is not all digits.
fn wrap_decimal(input: &str) -> Option<i64> {
    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.bytes().fold(0_i64, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
    });
    Some(if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    })
}

/// Console-style input: writes the prompt, then reads one line.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input source over an arbitrary reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        ConsoleInput { reader, writer }
    }
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Creates an input source bound to the process console.
    #[must_use]
    pub fn stdio() -> Self {
        ConsoleInput::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn next_value(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputExhausted);
        }
        Ok(line)
    }
}

/// Input that replays a fixed list of responses, ignoring prompts.
///
/// # Examples
///
/// ```rust
/// use bytewise::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::new(["7", "x"]);
/// assert_eq!(input.next_value("a? ")?, "7");
/// assert_eq!(input.next_value("b? ")?, "x");
/// assert!(input.next_value("c? ").is_err());
/// # Ok::<(), bytewise::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    responses: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Creates a source that returns `responses` in order.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            responses: responses.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Returns the prompts presented so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns the number of responses not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_value(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.responses.pop_front().ok_or(Error::InputExhausted)
    }
}
