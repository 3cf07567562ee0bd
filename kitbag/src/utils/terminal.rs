//! # Terminal Input Helper
//!
//! This module provides utilities for interacting with the terminal to
//! request typed user input. It repeatedly prompts the user until the input
//! parses as the requested type, satisfies that type's
//! [`InputValidator`](crate::utils::InputValidator) rule and passes an optional
//! caller-supplied predicate.
//!
//! ## Features
//! - Continuously prompts the user until a valid value is received.
//! - Type-driven validation: the rule is picked from the requested type.
//! - Range prompts for every primitive number ([`Terminal::ask_number`]).
//! - Works over any `BufRead` / `Write` pair, so sessions can be scripted.
//! - Optional attempt bound and cancellation flag.
//!
//! ## Retry semantics
//!
//! Every attempt writes the prompt, then consumes one input unit:
//!
//! - numbers, `char` and `bool` take the first whitespace-delimited token of the
//!   next non-blank line; the rest of that line is discarded;
//! - `String` takes one whole line.
//!
//! A malformed token, or a line that is not valid UTF-8, prints
//! `Error: Invalid <type> format. <message>`; a value
//! rejected by the type rule or the predicate prints `<message>`. Both re-prompt.
//! Only a closed input, an I/O failure, a configured attempt bound or a raised
//! cancellation flag end the loop without a value.
//!
//! ## Usage
//!
//! ### Example 1: Integer in a range
//! ```rust,no_run
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let threads: u8 = terminal.ask_number("Enter threads (1-16): ", 1, 16).unwrap();
//! println!("Threads: {}", threads);
//! ```
//!
//! ### Example 2: Custom predicate
//! ```rust,no_run
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let even: i64 = terminal
//!     .ask_with("Enter an even number: ", |n: &i64| n % 2 == 0, "That number is odd.")
//!     .unwrap();
//! println!("The input: {}", even);
//! ```
//!
//! ### Example 3: Scripted session
//! ```rust
//! use std::io::Cursor;
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("abc\n42\n"), Vec::new());
//! let answer: i32 = terminal.ask("Number: ").unwrap();
//! assert_eq!(answer, 42);
//! ```

use crate::utils::numeric::Numeric;
use crate::utils::validators::{self, DEFAULT_ERROR_MESSAGE, InputUnit, Readable, Rejection};
use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead, StdinLock, Stdout, Write},
    num::NonZeroUsize,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{debug, warn};

/// Reasons a prompt ends without a value.
///
/// Rejected input is never reported here: it is displayed and retried.
#[derive(Debug)]
pub enum PromptErrors {
    /// The input reached its end before a valid value was entered.
    InputClosed,
    /// Reading the input or writing the prompt failed.
    Io(io::Error),
    /// The configured attempt bound was reached.
    AttemptsExceeded(usize),
    /// The cancellation flag was raised.
    Cancelled,
}

impl Display for PromptErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputClosed => write!(f, "The input was closed before a valid value was entered"),
            Self::Io(e) => write!(f, "Couldn't read line.. {}", e),
            Self::AttemptsExceeded(n) => write!(f, "No valid value after {} attempts", n),
            Self::Cancelled => write!(f, "The prompt was cancelled"),
        }
    }
}

impl Error for PromptErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptErrors {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A prompt session over an input source and an output sink.
///
/// The session owns no per-prompt state: each `ask*` call is an independent
/// retry loop. By default the loop is unbounded.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    max_attempts: Option<NonZeroUsize>,
    cancel: Option<Arc<AtomicBool>>,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// A session reading from stdin and writing to stdout.
    ///
    /// The session holds the stdin lock until it is dropped. The stdin lock is
    /// not reentrant: calling [`read_value`], [`read_number`] or [`read_name`]
    /// on the same thread while the session is alive blocks forever. Use the
    /// session's own `ask*` methods instead, or drop it first.
    ///
    /// ```rust,no_run
    /// use kitbag::utils::{Terminal, read_number};
    ///
    /// let mut terminal = Terminal::stdio();
    /// let first: i32 = terminal.ask_number("First: ", 1, 10).unwrap();
    /// drop(terminal);
    ///
    /// let second: i32 = read_number("Second: ", 1, 10).unwrap();
    /// println!("{} {}", first, second);
    /// ```
    pub fn stdio() -> Self {
        Terminal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
            cancel: None,
        }
    }

    /// Bounds every `ask*` call to `attempts` read attempts.
    pub fn with_max_attempts(mut self, attempts: NonZeroUsize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Stops prompting with [`PromptErrors::Cancelled`] once `flag` is set.
    ///
    /// The flag is checked before each attempt, so a blocked read still
    /// completes first.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Prompts for a `T` accepted by its type rule alone.
    pub fn ask<T: Readable>(&mut self, prompt: &str) -> Result<T, PromptErrors> {
        self.ask_with(prompt, |_: &T| true, DEFAULT_ERROR_MESSAGE)
    }

    /// Prompts for a `T` accepted by its type rule and by `predicate`.
    ///
    /// `error_msg` is shown for rejected values and appended to format errors.
    pub fn ask_with<T, P>(&mut self, prompt: &str, predicate: P, error_msg: &str) -> Result<T, PromptErrors>
    where
        T: Readable,
        P: Fn(&T) -> bool,
    {
        let mut attempts = 0usize;

        loop {
            if self.is_cancelled() {
                warn!(prompt, attempts, "prompt cancelled");
                return Err(PromptErrors::Cancelled);
            }

            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let unit = self.next_unit(T::UNIT)?;
            attempts += 1;

            let outcome = match unit {
                Some(raw) => validators::check::<T, _>(&raw, &predicate, error_msg),
                None => Err(Rejection::Format(T::type_name(), error_msg)),
            };

            match outcome {
                Ok(value) => return Ok(value),
                Err(rejection) => {
                    debug!(attempt = attempts, type_name = T::type_name(), reason = %rejection, "input rejected");
                    writeln!(self.output, "{}", rejection)?;
                }
            }

            if let Some(max) = self.max_attempts {
                if attempts >= max.get() {
                    warn!(prompt, attempts, "attempt limit reached");
                    return Err(PromptErrors::AttemptsExceeded(max.get()));
                }
            }
        }
    }

    /// Prompts for a number in the inclusive range `[min, max]`.
    pub fn ask_number<T: Numeric>(&mut self, prompt: &str, min: T, max: T) -> Result<T, PromptErrors> {
        let error_msg = format!("Please enter a number between {} and {}.", min, max);
        self.ask_with(prompt, |n: &T| *n >= min && *n <= max, &error_msg)
    }

    /// Prompts for any number representable by `T`.
    pub fn ask_any_number<T: Numeric>(&mut self, prompt: &str) -> Result<T, PromptErrors> {
        self.ask_number(prompt, T::LOWEST, T::HIGHEST)
    }

    /// Prompts for a person's name: letters, spaces, hyphens and apostrophes.
    pub fn ask_name(&mut self, prompt: &str) -> Result<String, PromptErrors> {
        self.ask_with(
            prompt,
            |name: &String| {
                !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'')
            },
            "Name should contain only letters, spaces, hyphens, and apostrophes.",
        )
    }

    /// Writes one line to the session output.
    pub fn say(&mut self, line: &str) -> Result<(), PromptErrors> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Consumes one input unit. `Ok(None)` means the consumed line was not valid UTF-8.
    fn next_unit(&mut self, unit: InputUnit) -> Result<Option<String>, PromptErrors> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("input closed while waiting for a value");
                return Err(PromptErrors::InputClosed);
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                return Ok(None);
            };

            match unit {
                InputUnit::Line => {
                    let trimmed = line.strip_suffix('\n').unwrap_or(line);
                    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
                    return Ok(Some(trimmed.to_string()));
                }
                InputUnit::Token => {
                    if let Some(token) = line.split_whitespace().next() {
                        return Ok(Some(token.to_string()));
                    }
                }
            }
        }
    }
}

/// Prompts on stdin/stdout until a `T` passes its type rule and `predicate`.
///
/// Locks stdin for the duration of the call; see [`Terminal::stdio`].
pub fn read_value<T, P>(prompt: &str, predicate: P, error_msg: &str) -> Result<T, PromptErrors>
where
    T: Readable,
    P: Fn(&T) -> bool,
{
    Terminal::stdio().ask_with(prompt, predicate, error_msg)
}

/// Prompts on stdin/stdout for a number in `[min, max]`.
///
/// Locks stdin for the duration of the call; see [`Terminal::stdio`].
pub fn read_number<T: Numeric>(prompt: &str, min: T, max: T) -> Result<T, PromptErrors> {
    Terminal::stdio().ask_number(prompt, min, max)
}

/// Prompts on stdin/stdout for a name, using `"Enter your name: "` when `prompt` is `None`.
///
/// Locks stdin for the duration of the call; see [`Terminal::stdio`].
pub fn read_name(prompt: Option<&str>) -> Result<String, PromptErrors> {
    Terminal::stdio().ask_name(prompt.unwrap_or("Enter your name: "))
}
