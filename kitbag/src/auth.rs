//! # Authentication Prompts
//!
//! PIN and username/password loops built on [`Terminal`]. Unlike the plain
//! value prompts these loops can be bounded: after `max_attempts` wrong
//! answers they give up and return a failed [`AuthResult`].
//!
//! ```rust
//! use std::io::Cursor;
//! use std::num::NonZeroUsize;
//! use kitbag::auth::{authenticate_with_pin, PinOptions};
//! use kitbag::utils::Terminal;
//!
//! let mut terminal = Terminal::new(Cursor::new("0000\n1234\n"), Vec::new());
//! let options = PinOptions {
//!     max_attempts: NonZeroUsize::new(3),
//!     ..PinOptions::default()
//! };
//!
//! let result = authenticate_with_pin(&mut terminal, "1234", &options).unwrap();
//! assert!(result.is_success());
//! ```

use crate::utils::terminal::{PromptErrors, Terminal};
use std::{
    fmt::Display,
    io::{BufRead, Write},
    num::NonZeroUsize,
};
use tracing::{info, warn};

const SUCCESS_MESSAGE: &str = "Authentication successful";
const EXHAUSTED_MESSAGE: &str = "Maximum authentication attempts exceeded";

/// Outcome of an authentication loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
}

impl AuthResult {
    fn granted() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn exhausted() -> Self {
        Self {
            success: false,
            message: EXHAUSTED_MESSAGE.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl Display for AuthResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Options for [`authenticate_with_pin`].
///
/// `max_attempts: None` keeps asking until the right PIN is entered.
#[derive(Debug, Clone)]
pub struct PinOptions<'a> {
    pub prompt: &'a str,
    pub max_attempts: Option<NonZeroUsize>,
    pub failure_message: &'a str,
}

impl Default for PinOptions<'_> {
    fn default() -> Self {
        Self {
            prompt: "Please enter PIN code: ",
            max_attempts: None,
            failure_message: "Wrong PIN",
        }
    }
}

/// Options for [`authenticate_with_credentials`].
#[derive(Debug, Clone)]
pub struct CredentialOptions<'a> {
    pub username_prompt: &'a str,
    pub password_prompt: &'a str,
    pub max_attempts: Option<NonZeroUsize>,
    pub failure_message: &'a str,
}

impl Default for CredentialOptions<'_> {
    fn default() -> Self {
        Self {
            username_prompt: "Username: ",
            password_prompt: "Password: ",
            max_attempts: None,
            failure_message: "Invalid credentials",
        }
    }
}

fn non_empty(input: &String) -> bool {
    !input.is_empty()
}

fn has_attempts_left(attempts: usize, max_attempts: Option<NonZeroUsize>) -> bool {
    max_attempts.is_none_or(|max| attempts < max.get())
}

/// Asks for a PIN until it matches `correct_pin` or the attempts run out.
///
/// The failure message is shown between attempts, not after the last one.
pub fn authenticate_with_pin<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    correct_pin: &str,
    options: &PinOptions<'_>,
) -> Result<AuthResult, PromptErrors> {
    let mut attempts = 0usize;

    while has_attempts_left(attempts, options.max_attempts) {
        let pin: String = terminal.ask_with(
            options.prompt,
            non_empty,
            "Invalid PIN format. Please try again.",
        )?;
        attempts += 1;

        if pin == correct_pin {
            info!(attempts, "pin accepted");
            return Ok(AuthResult::granted());
        }

        if has_attempts_left(attempts, options.max_attempts) {
            terminal.say(options.failure_message)?;
        }
    }

    warn!(attempts, "pin authentication exhausted");
    Ok(AuthResult::exhausted())
}

/// Asks for a username and a password until `validator` accepts the pair
/// or the attempts run out.
pub fn authenticate_with_credentials<R, W, V>(
    terminal: &mut Terminal<R, W>,
    validator: V,
    options: &CredentialOptions<'_>,
) -> Result<AuthResult, PromptErrors>
where
    R: BufRead,
    W: Write,
    V: Fn(&str, &str) -> bool,
{
    let mut attempts = 0usize;

    while has_attempts_left(attempts, options.max_attempts) {
        let username: String =
            terminal.ask_with(options.username_prompt, non_empty, "Username cannot be empty")?;
        let password: String =
            terminal.ask_with(options.password_prompt, non_empty, "Password cannot be empty")?;
        attempts += 1;

        if validator(&username, &password) {
            info!(attempts, username = %username, "credentials accepted");
            return Ok(AuthResult::granted());
        }

        if has_attempts_left(attempts, options.max_attempts) {
            terminal.say(options.failure_message)?;
        }
    }

    warn!(attempts, "credential authentication exhausted");
    Ok(AuthResult::exhausted())
}
