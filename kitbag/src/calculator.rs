//! # Calculator
//!
//! Generic arithmetic one-liners. Operands may be of different types as long
//! as the corresponding `std::ops` trait is implemented for the pair.
//!
//! ```rust
//! use kitbag::calculator;
//!
//! assert_eq!(calculator::add(2, 3), 5);
//! assert_eq!(calculator::divide(9.0, 2.0).unwrap(), 4.5);
//! assert!(calculator::divide(1, 0).is_err());
//! assert_eq!(calculator::half(7), 3.5);
//! assert_eq!(calculator::power(2, 10), 1024.0);
//! ```

use crate::utils::numeric::Numeric;
use std::{
    error::Error,
    fmt::Display,
    ops::{Add, Div, Mul, Sub},
};

/// Errors returned by the calculator helpers.
#[derive(Debug, PartialEq, Eq)]
pub enum CalculatorErrors {
    DivisionByZero,
}

impl Display for CalculatorErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
        }
    }
}

impl Error for CalculatorErrors {}

pub fn add<T: Add<U>, U>(a: T, b: U) -> T::Output {
    a + b
}

pub fn subtract<T: Sub<U>, U>(a: T, b: U) -> T::Output {
    a - b
}

pub fn multiply<T: Mul<U>, U>(a: T, b: U) -> T::Output {
    a * b
}

/// Divides `a` by `b`.
///
/// A zero divisor is rejected for floats too, instead of producing an infinity.
/// Integer overflow (`i32::MIN / -1`) behaves like the `/` operator.
pub fn divide<T: Div<U>, U: Numeric>(a: T, b: U) -> Result<T::Output, CalculatorErrors> {
    if b == U::ZERO {
        return Err(CalculatorErrors::DivisionByZero);
    }
    Ok(a / b)
}

/// Half of `number` as a float.
pub fn half<T: Numeric>(number: T) -> f64 {
    number.to_f64() * 0.5
}

/// `base` raised to `exponent`, computed in `f64`.
pub fn power<T: Numeric, U: Numeric>(base: T, exponent: U) -> f64 {
    base.to_f64().powf(exponent.to_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(1.5, 2.25), 3.75);
        assert_eq!(subtract(2, 5), -3);
        assert_eq!(multiply(-4, 6), -24);
        assert_eq!(multiply(0.5, 8.0), 4.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10, 3), Ok(3));
        assert_eq!(divide(-9.0, 2.0), Ok(-4.5));
        assert_eq!(divide(7u8, 0u8), Err(CalculatorErrors::DivisionByZero));
        assert_eq!(divide(1.0, 0.0), Err(CalculatorErrors::DivisionByZero));
        assert_eq!(divide(1.0, -0.0), Err(CalculatorErrors::DivisionByZero));
    }

    #[test]
    fn test_divide_error_message() {
        if let Err(e) = divide(1, 0) {
            assert_eq!(format!("{}", e), "Division by zero");
        } else {
            panic!("division by zero accepted");
        }
    }

    #[test]
    fn test_half_and_power() {
        assert_eq!(half(7), 3.5);
        assert_eq!(half(-3.0f32), -1.5);
        assert_eq!(power(2, 10), 1024.0);
        assert_eq!(power(2.0, -1), 0.5);
        assert_eq!(power(5u8, 0), 1.0);
    }
}
