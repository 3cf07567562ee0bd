//! # Input Validation
//!
//! Per-type validity rules for values read from an interactive prompt.
//!
//! Every type that can be requested through [`crate::utils::Terminal`] carries two
//! pieces of static knowledge:
//!
//! - an [`InputValidator`]: a pure `is_valid` check plus a human-readable
//!   `type_name` used in error messages;
//! - a [`Readable`] description: whether one whitespace-delimited token or one
//!   whole line is consumed per attempt, and how the raw text is parsed.
//!
//! The rule is chosen by the compiler from the value's type, never at runtime.
//!
//! | category       | types                                   | rule          | name        |
//! |----------------|-----------------------------------------|---------------|-------------|
//! | unconstrained  | anything using the trait defaults       | always valid  | `value`     |
//! | integral       | `i8`..`i128`, `isize`, `u8`..`u128`, `usize` | always valid | `integer` |
//! | floating point | `f32`, `f64`                            | finite        | `number`    |
//! | text           | `String`                                | non-empty     | `text`      |
//! | character      | `char`                                  | always valid  | `character` |
//! | boolean        | `bool`                                  | always valid  | `boolean`   |
//!
//! ## Custom types
//!
//! ```rust
//! use std::str::FromStr;
//! use kitbag::readable_from_str;
//! use kitbag::utils::InputValidator;
//!
//! #[derive(Debug, Default)]
//! struct Percent(u8);
//!
//! impl FromStr for Percent {
//!     type Err = std::num::ParseIntError;
//!     fn from_str(s: &str) -> Result<Self, Self::Err> {
//!         s.parse().map(Percent)
//!     }
//! }
//!
//! impl InputValidator for Percent {
//!     fn type_name() -> &'static str {
//!         "percentage"
//!     }
//!     fn is_valid(&self) -> bool {
//!         self.0 <= 100
//!     }
//! }
//!
//! readable_from_str!(Percent);
//! ```
use std::{error::Error, fmt::Display};

/// Default message shown when a parsed value is rejected.
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid input. Please try again.";

/// Type-intrinsic validity rule.
///
/// The default methods describe an unconstrained type: every value is valid
/// and it is displayed as `"value"`.
pub trait InputValidator {
    /// Name used in format error messages, e.g. `"integer"`.
    fn type_name() -> &'static str {
        "value"
    }

    /// Returns `true` when the value is acceptable for its type.
    fn is_valid(&self) -> bool {
        true
    }
}

/// How much input a single read attempt consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputUnit {
    /// The first whitespace-delimited token of a line. The rest of the line is discarded.
    Token,
    /// A whole line without its terminator.
    Line,
}

/// A type that can be parsed from raw prompt input.
pub trait Readable: InputValidator + Sized {
    const UNIT: InputUnit = InputUnit::Token;

    /// Parses the raw token or line. `None` means the text is malformed for this type.
    fn parse_input(raw: &str) -> Option<Self>;
}

/// Implements [`Readable`] for a type through its [`std::str::FromStr`] impl.
///
/// The type must implement [`InputValidator`] itself.
#[macro_export]
macro_rules! readable_from_str {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::utils::validators::Readable for $t {
                fn parse_input(raw: &str) -> Option<Self> {
                    raw.parse::<$t>().ok()
                }
            }
        )+
    };
}

macro_rules! impl_input_validator {
    ($name:literal => $($t:ty),+ $(,)?) => {
        $(
            impl InputValidator for $t {
                fn type_name() -> &'static str {
                    $name
                }
            }
        )+
    };
    ($name:literal, |$v:ident| $check:expr => $($t:ty),+ $(,)?) => {
        $(
            impl InputValidator for $t {
                fn type_name() -> &'static str {
                    $name
                }

                fn is_valid(&self) -> bool {
                    let $v = *self;
                    $check
                }
            }
        )+
    };
}

impl_input_validator!("integer" => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_input_validator!("number", |v| v.is_finite() => f32, f64);
// `char` and `bool` are not integral types in Rust, so they get their own names.
impl_input_validator!("character" => char);
impl_input_validator!("boolean" => bool);

readable_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

impl InputValidator for String {
    fn type_name() -> &'static str {
        "text"
    }

    fn is_valid(&self) -> bool {
        !self.is_empty()
    }
}

impl Readable for String {
    const UNIT: InputUnit = InputUnit::Line;

    fn parse_input(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl Readable for char {
    fn parse_input(raw: &str) -> Option<Self> {
        raw.chars().next()
    }
}

/// Why a single read attempt was rejected.
///
/// - [`Rejection::Format`]: the raw input could not be parsed as the requested type.
/// - [`Rejection::Invalid`]: the value parsed but failed the type rule or the caller's predicate.
#[derive(Debug)]
pub(crate) enum Rejection<'a> {
    Format(&'static str, &'a str),
    Invalid(&'a str),
}

impl Display for Rejection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(type_name, msg) => write!(f, "Error: Invalid {} format. {}", type_name, msg),
            Self::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for Rejection<'_> {}

/// Runs the parse step, the type rule and the caller's predicate, in that order.
pub(crate) fn check<'a, T, P>(raw: &str, predicate: &P, error_msg: &'a str) -> Result<T, Rejection<'a>>
where
    T: Readable,
    P: Fn(&T) -> bool + ?Sized,
{
    let value = T::parse_input(raw).ok_or(Rejection::Format(T::type_name(), error_msg))?;

    if value.is_valid() && predicate(&value) {
        Ok(value)
    } else {
        Err(Rejection::Invalid(error_msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any<T>(_: &T) -> bool {
        true
    }

    #[test]
    fn test_type_names() {
        assert_eq!(i32::type_name(), "integer");
        assert_eq!(u128::type_name(), "integer");
        assert_eq!(f64::type_name(), "number");
        assert_eq!(String::type_name(), "text");
        assert_eq!(char::type_name(), "character");
        assert_eq!(bool::type_name(), "boolean");
    }

    #[test]
    fn test_unconstrained_defaults() {
        struct Opaque;
        impl InputValidator for Opaque {}

        assert_eq!(Opaque::type_name(), "value");
        assert!(Opaque.is_valid());
    }

    #[test]
    fn test_float_rule_rejects_non_finite() {
        assert!(1.5f64.is_valid());
        assert!((-0.0f32).is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
    }

    #[test]
    fn test_text_rule_rejects_empty() {
        assert!(String::from("Alice").is_valid());
        assert!(String::from(" ").is_valid());
        assert!(!String::new().is_valid());
    }

    #[test]
    fn test_integral_rule_accepts_everything() {
        assert!(i64::MIN.is_valid());
        assert!(0u8.is_valid());
        assert!((-5i32).is_valid());
    }

    #[test]
    fn test_input_units() {
        assert_eq!(<i32 as Readable>::UNIT, InputUnit::Token);
        assert_eq!(<char as Readable>::UNIT, InputUnit::Token);
        assert_eq!(<String as Readable>::UNIT, InputUnit::Line);
    }

    #[test]
    fn test_check_format_error() {
        let res = check::<u8, _>("256", &any, DEFAULT_ERROR_MESSAGE);
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(
                format!("{}", e),
                "Error: Invalid integer format. Invalid input. Please try again."
            );
        }
    }

    #[test]
    fn test_check_rule_error() {
        let res = check::<f64, _>("NaN", &any, "Bad number");
        assert!(matches!(res, Err(Rejection::Invalid("Bad number"))));
    }

    #[test]
    fn test_check_predicate_error() {
        let res = check::<i32, _>("15", &|v: &i32| *v <= 10, "Too big");
        assert!(res.is_err());
        if let Err(e) = res {
            assert_eq!(format!("{}", e), "Too big");
        }
    }

    #[test]
    fn test_check_success() {
        assert_eq!(check::<i32, _>("-5", &any, DEFAULT_ERROR_MESSAGE).unwrap(), -5);
        assert_eq!(check::<char, _>("xyz", &any, DEFAULT_ERROR_MESSAGE).unwrap(), 'x');
        assert!(check::<bool, _>("true", &any, DEFAULT_ERROR_MESSAGE).unwrap());
        assert_eq!(
            check::<String, _>("Ada Lovelace", &any, DEFAULT_ERROR_MESSAGE).unwrap(),
            "Ada Lovelace"
        );
    }
}
