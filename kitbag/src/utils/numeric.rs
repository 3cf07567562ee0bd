//! Numeric traits shared by the range prompts, the calculator and the number helpers.

use crate::utils::validators::Readable;
use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Rem, Sub},
};

/// A primitive number that can be prompted for and compared against bounds.
pub trait Numeric: Readable + PartialOrd + Copy + Display {
    /// The lowest representable value (`MIN` for both integers and floats).
    const LOWEST: Self;
    /// The highest representable value.
    const HIGHEST: Self;
    /// Additive identity.
    const ZERO: Self;

    /// Lossy widening used by the floating-point helpers.
    fn to_f64(self) -> f64;
}

/// A primitive integer.
pub trait Integer:
    Numeric
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    const ONE: Self;
    const TWO: Self;
}

macro_rules! impl_numeric_for {
    ($zero:expr => $($t:ty),+ $(,)?) => {
        $(
            impl Numeric for $t {
                const LOWEST: Self = <$t>::MIN;
                const HIGHEST: Self = <$t>::MAX;
                const ZERO: Self = $zero;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

macro_rules! impl_integer_for {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Integer for $t {
                const ONE: Self = 1;
                const TWO: Self = 2;
            }
        )+
    };
}

impl_numeric_for!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_for!(0.0 => f32, f64);
impl_integer_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::{Integer, Numeric};

    #[test]
    fn test_bounds_match_primitives() {
        assert_eq!(<i32 as Numeric>::LOWEST, i32::MIN);
        assert_eq!(<u8 as Numeric>::HIGHEST, 255);
        assert_eq!(<u64 as Numeric>::LOWEST, 0);
        assert_eq!(<f64 as Numeric>::LOWEST, f64::MIN);
        assert_eq!(<f32 as Numeric>::ZERO, 0.0);
    }

    #[test]
    fn test_integer_constants() {
        assert_eq!(<u8 as Integer>::ONE + <u8 as Integer>::TWO, 3);
        assert_eq!(<i128 as Integer>::TWO, 2);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(7i32.to_f64(), 7.0);
        assert_eq!(2.5f32.to_f64(), 2.5);
        assert_eq!(u8::MAX.to_f64(), 255.0);
    }
}
