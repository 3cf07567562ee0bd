//! # Number Properties
//!
//! Classification helpers: parity and sign ([`analyze_number`]), primality
//! ([`check_prime`]) and perfect numbers ([`is_perfect_number`]).
//!
//! ```rust
//! use kitbag::numbers::{analyze_number, NumberType};
//!
//! assert_eq!(analyze_number(-4), vec![NumberType::Even, NumberType::Negative]);
//! assert_eq!(analyze_number(0.5), vec![NumberType::Positive]);
//! ```

use crate::utils::numeric::{Integer, Numeric};
use std::{
    error::Error,
    fmt::Display,
    io::{self, Write},
};

/// A property of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberType {
    Even,
    Odd,
    Positive,
    Negative,
    Zero,
}

impl Display for NumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Even => write!(f, "Even"),
            Self::Odd => write!(f, "Odd"),
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Zero => write!(f, "Zero"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimeType {
    Prime,
    NotPrime,
}

impl Display for PrimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prime => write!(f, "Prime"),
            Self::NotPrime => write!(f, "Not Prime"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerfectNumberType {
    Perfect,
    NotPerfect,
}

impl Display for PerfectNumberType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Perfect => write!(f, "Perfect"),
            Self::NotPerfect => write!(f, "Not Perfect"),
        }
    }
}

/// Errors returned by the number helpers.
#[derive(Debug, PartialEq, Eq)]
pub enum NumberErrors {
    NotPositive,
}

impl Display for NumberErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotPositive => write!(f, "Number must be positive"),
        }
    }
}

impl Error for NumberErrors {}

/// Numbers that can be classified by [`analyze_number`].
///
/// Integers report parity and sign, floats report sign only.
pub trait Classify: Numeric {
    fn properties(self) -> Vec<NumberType>;
}

fn sign<T: Numeric>(number: T) -> NumberType {
    if number > T::ZERO {
        NumberType::Positive
    } else if number < T::ZERO {
        NumberType::Negative
    } else {
        NumberType::Zero
    }
}

macro_rules! impl_classify_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Classify for $t {
                fn properties(self) -> Vec<NumberType> {
                    let parity = if self % 2 == 0 { NumberType::Even } else { NumberType::Odd };
                    vec![parity, sign(self)]
                }
            }
        )+
    };
}

macro_rules! impl_classify_float {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Classify for $t {
                fn properties(self) -> Vec<NumberType> {
                    vec![sign(self)]
                }
            }
        )+
    };
}

impl_classify_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_classify_float!(f32, f64);

pub fn analyze_number<T: Classify>(number: T) -> Vec<NumberType> {
    number.properties()
}

/// Trial division up to the square root. Numbers below 2 are not prime.
pub fn check_prime<T: Integer>(number: T) -> PrimeType {
    if number < T::TWO {
        return PrimeType::NotPrime;
    }

    let mut divisor = T::TWO;
    while divisor <= number / divisor {
        if number % divisor == T::ZERO {
            return PrimeType::NotPrime;
        }
        divisor = divisor + T::ONE;
    }
    PrimeType::Prime
}

/// Checks whether `number` equals the sum of its proper divisors.
///
/// Fails with [`NumberErrors::NotPositive`] for zero and negative numbers.
pub fn is_perfect_number<T: Integer>(number: T) -> Result<PerfectNumberType, NumberErrors> {
    if number <= T::ZERO {
        return Err(NumberErrors::NotPositive);
    }

    // sum never exceeds number, so `number - sum` cannot underflow
    let mut sum = T::ZERO;
    let mut add_divisor = |divisor: T| -> bool {
        if divisor == number {
            return true;
        }
        if divisor > number - sum {
            return false;
        }
        sum = sum + divisor;
        true
    };

    let mut divisor = T::ONE;
    while divisor <= number / divisor {
        if number % divisor == T::ZERO {
            let pair = number / divisor;
            if !add_divisor(divisor) || (pair != divisor && !add_divisor(pair)) {
                return Ok(PerfectNumberType::NotPerfect);
            }
        }
        divisor = divisor + T::ONE;
    }

    if sum == number {
        Ok(PerfectNumberType::Perfect)
    } else {
        Ok(PerfectNumberType::NotPerfect)
    }
}

/// Writes `"Number <n> is: <p1>, <p2>"`.
pub fn write_number_properties<T: Classify, W: Write>(out: &mut W, number: T) -> io::Result<()> {
    let properties: Vec<String> = analyze_number(number)
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "Number {} is: {}", number, properties.join(", "))
}

pub fn print_number_properties<T: Classify>(number: T) -> io::Result<()> {
    write_number_properties(&mut io::stdout().lock(), number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_integers() {
        assert_eq!(analyze_number(4), vec![NumberType::Even, NumberType::Positive]);
        assert_eq!(analyze_number(-7i64), vec![NumberType::Odd, NumberType::Negative]);
        assert_eq!(analyze_number(0u8), vec![NumberType::Even, NumberType::Zero]);
        assert_eq!(analyze_number(i32::MIN), vec![NumberType::Even, NumberType::Negative]);
    }

    #[test]
    fn test_analyze_floats() {
        assert_eq!(analyze_number(2.5), vec![NumberType::Positive]);
        assert_eq!(analyze_number(-0.1f32), vec![NumberType::Negative]);
        assert_eq!(analyze_number(0.0), vec![NumberType::Zero]);
    }

    #[test]
    fn test_check_prime() {
        let primes: Vec<u32> = (0..30).filter(|n| check_prime(*n) == PrimeType::Prime).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        assert_eq!(check_prime(-7), PrimeType::NotPrime);
        assert_eq!(check_prime(251u8), PrimeType::Prime);
        assert_eq!(check_prime(255u8), PrimeType::NotPrime);
        assert_eq!(check_prime(2_147_483_647i32), PrimeType::Prime);
    }

    #[test]
    fn test_is_perfect_number() {
        let perfect: Vec<u32> = (1..10_000)
            .filter(|n| is_perfect_number(*n) == Ok(PerfectNumberType::Perfect))
            .collect();
        assert_eq!(perfect, vec![6, 28, 496, 8128]);
    }

    #[test]
    fn test_is_perfect_number_rejects_non_positive() {
        assert_eq!(is_perfect_number(0), Err(NumberErrors::NotPositive));
        assert_eq!(is_perfect_number(-6), Err(NumberErrors::NotPositive));
        assert_eq!(NumberErrors::NotPositive.to_string(), "Number must be positive");
    }

    #[test]
    fn test_is_perfect_number_near_type_max() {
        assert_eq!(is_perfect_number(u8::MAX), Ok(PerfectNumberType::NotPerfect));
        assert_eq!(is_perfect_number(240u8), Ok(PerfectNumberType::NotPerfect));
        assert_eq!(is_perfect_number(8128u16), Ok(PerfectNumberType::Perfect));
    }

    #[test]
    fn test_display() {
        assert_eq!(PrimeType::NotPrime.to_string(), "Not Prime");
        assert_eq!(PerfectNumberType::NotPerfect.to_string(), "Not Perfect");
        assert_eq!(NumberType::Zero.to_string(), "Zero");
    }

    #[test]
    fn test_write_number_properties() {
        let mut out = Vec::new();
        write_number_properties(&mut out, 12).unwrap();
        write_number_properties(&mut out, -1.5).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Number 12 is: Even, Positive\nNumber -1.5 is: Negative\n"
        );
    }
}
