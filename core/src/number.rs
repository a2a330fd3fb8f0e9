//! Numeric domain of the evaluator.
//!
//! Every formula is computed in a single floating-point type chosen by the
//! caller. [`Number`] names the operations the opcode families need, so the
//! compiler, checker and VM can stay generic over `f32` and `f64`.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};
use core::str::FromStr;

/// A floating-point type usable as the evaluator's numeric domain.
///
/// Domain errors (square root of a negative, logarithm of zero, ...) follow
/// IEEE 754 and produce NaN or infinities rather than failing.
pub trait Number:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TEN: Self;

    /// Parse a numeric literal token, `None` if it isn't one.
    fn parse_literal(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn powf(self, exponent: Self) -> Self;

    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;

    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;

    /// Logarithm of `self` in the given base.
    fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    /// The `index`-th root of `self`.
    fn root(self, index: Self) -> Self {
        self.powf(Self::ONE / index)
    }
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TEN: Self = 10.0;

                #[inline] fn sqrt(self) -> Self { <$t>::sqrt(self) }
                #[inline] fn cbrt(self) -> Self { <$t>::cbrt(self) }
                #[inline] fn powf(self, exponent: Self) -> Self { <$t>::powf(self, exponent) }

                #[inline] fn exp(self) -> Self { <$t>::exp(self) }
                #[inline] fn exp2(self) -> Self { <$t>::exp2(self) }
                #[inline] fn ln(self) -> Self { <$t>::ln(self) }
                #[inline] fn log2(self) -> Self { <$t>::log2(self) }
                #[inline] fn log10(self) -> Self { <$t>::log10(self) }

                #[inline] fn sin(self) -> Self { <$t>::sin(self) }
                #[inline] fn cos(self) -> Self { <$t>::cos(self) }
                #[inline] fn tan(self) -> Self { <$t>::tan(self) }
                #[inline] fn asin(self) -> Self { <$t>::asin(self) }
                #[inline] fn acos(self) -> Self { <$t>::acos(self) }
                #[inline] fn atan(self) -> Self { <$t>::atan(self) }

                #[inline] fn sinh(self) -> Self { <$t>::sinh(self) }
                #[inline] fn cosh(self) -> Self { <$t>::cosh(self) }
                #[inline] fn tanh(self) -> Self { <$t>::tanh(self) }
                #[inline] fn asinh(self) -> Self { <$t>::asinh(self) }
                #[inline] fn acosh(self) -> Self { <$t>::acosh(self) }
                #[inline] fn atanh(self) -> Self { <$t>::atanh(self) }
            }
        )*
    };
}

impl_number!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        assert_eq!(f64::parse_literal("3.5"), Some(3.5));
        assert_eq!(f64::parse_literal("-2e3"), Some(-2000.0));
        assert_eq!(f64::parse_literal(".5"), Some(0.5));
        assert_eq!(f32::parse_literal("1.25"), Some(1.25));
        assert_eq!(f64::parse_literal("add"), None);
        assert_eq!(f64::parse_literal("-"), None);
        assert_eq!(f64::parse_literal("1.2.3"), None);
    }

    #[test]
    fn test_special_literals() {
        assert_eq!(f64::parse_literal("inf"), Some(f64::INFINITY));
        assert_eq!(f64::parse_literal("-inf"), Some(f64::NEG_INFINITY));
        assert!(f64::parse_literal("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_log_and_root() {
        assert!((Number::log(8.0_f64, 2.0) - 3.0).abs() < 1e-12);
        assert!((Number::root(27.0_f64, 3.0) - 3.0).abs() < 1e-12);
        // Negative root index yields the reciprocal root, not an error.
        assert!((Number::root(4.0_f64, -2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_domain_errors_are_ieee() {
        assert!(Number::sqrt(-1.0_f64).is_nan());
        assert_eq!(Number::ln(0.0_f64), f64::NEG_INFINITY);
        assert!(Number::log10(-1.0_f64).is_nan());
    }
}
