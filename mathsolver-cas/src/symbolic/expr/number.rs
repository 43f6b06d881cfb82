//! Exact and approximate numbers.

use crate::primitive::{float, int, PRECISION};
use rug::{ops::Pow, Float, Integer, Rational};
use std::{cmp::Ordering, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest exponent magnitude for which integer powers of exact numbers are computed. Larger
/// powers are left unevaluated.
const MAX_EXACT_EXPONENT: u32 = 4096;

/// A number appearing in an expression.
///
/// Exact numbers are kept as [`Rational`]s, so that `1/3 + 1/6` is exactly `1/2`. Any operation
/// involving a [`Number::Float`] produces a [`Number::Float`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An exact rational number, such as `2` or `-3/4`.
    Rational(Rational),

    /// An approximate number, such as `0.5`.
    Float(Float),
}

/// Two numbers are equal only if they have the same kind and the same value; `2` and `2.0` are
/// different numbers. This module **must never** produce non-normal [`Float`]s (such as `NaN`).
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rational(lhs), Self::Rational(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Rational(Rational::from(n))
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Self::Rational(Rational::from(n))
    }
}

impl From<Rational> for Number {
    fn from(n: Rational) -> Self {
        Self::Rational(n)
    }
}

impl From<Float> for Number {
    fn from(n: Float) -> Self {
        Self::Float(n)
    }
}

impl Number {
    /// Returns true if the number is zero (exact or approximate).
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(r) => r.cmp0() == Ordering::Equal,
            Self::Float(f) => f.is_zero(),
        }
    }

    /// Returns true if the number is exactly one. `1.0` is not exactly one.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Rational(r) if *r == 1)
    }

    /// Returns true if the number is exactly negative one.
    pub fn is_neg_one(&self) -> bool {
        matches!(self, Self::Rational(r) if *r == -1)
    }

    /// Returns true if the number is an approximation.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Compares the number to zero.
    pub fn cmp0(&self) -> Ordering {
        match self {
            Self::Rational(r) => r.cmp0(),
            Self::Float(f) => f.cmp0().unwrap_or(Ordering::Equal),
        }
    }

    /// Returns true if the number is less than zero.
    pub fn is_negative(&self) -> bool {
        self.cmp0() == Ordering::Less
    }

    /// Returns the exact rational value of the number, if it is exact.
    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Rational(r) => Some(r),
            Self::Float(_) => None,
        }
    }

    /// Returns the integer value of the number, if it is an exact integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Rational(r) if *r.denom() == 1 => Some(r.numer()),
            _ => None,
        }
    }

    /// Returns the value of the number as a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Rational(r) => float(r),
            Self::Float(f) => f.clone(),
        }
    }

    /// Returns the value of the number as an [`f64`].
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Rational(r) => r.to_f64(),
            Self::Float(f) => f.to_f64(),
        }
    }

    /// Adds two numbers.
    pub fn add(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Rational(lhs), Self::Rational(rhs)) => Self::Rational(Rational::from(lhs + rhs)),
            _ => Self::Float(self.to_float() + other.to_float()),
        }
    }

    /// Multiplies two numbers.
    pub fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Self::Rational(lhs), Self::Rational(rhs)) => Self::Rational(Rational::from(lhs * rhs)),
            _ => Self::Float(self.to_float() * other.to_float()),
        }
    }

    /// Negates the number.
    pub fn neg(&self) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(-r.clone()),
            Self::Float(f) => Self::Float(-f.clone()),
        }
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        match self {
            Self::Rational(r) => Self::Rational(r.clone().abs()),
            Self::Float(f) => Self::Float(f.clone().abs()),
        }
    }

    /// Returns the reciprocal of the number, or [`None`] if the number is zero.
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        Some(match self {
            Self::Rational(r) => Self::Rational(r.clone().recip()),
            Self::Float(f) => Self::Float(f.clone().recip()),
        })
    }

    /// Raises the number to an integer power.
    ///
    /// Returns [`None`] if the result is undefined (zero to a negative power), or if the exponent
    /// is too large to compute exactly.
    pub fn pow_int(&self, exp: &Integer) -> Option<Self> {
        let small = exp.to_i32()?;
        if small.unsigned_abs() > MAX_EXACT_EXPONENT {
            return None;
        }
        if small < 0 && self.is_zero() {
            return None;
        }

        Some(match self {
            Self::Rational(r) => Self::Rational(r.clone().pow(small)),
            Self::Float(f) => Self::Float(f.clone().pow(small)),
        })
    }

    /// Raises a positive number to an arbitrary power, approximating the result.
    ///
    /// Returns [`None`] if the base is not positive.
    pub fn pow_float(&self, exp: &Self) -> Option<Self> {
        if self.cmp0() != Ordering::Greater {
            return None;
        }

        Some(Self::Float(self.to_float().pow(exp.to_float())))
    }

    /// Returns the integer `floor(self)`, if the number is exact.
    pub fn floor(&self) -> Option<Integer> {
        let r = self.as_rational()?;
        Some(r.clone().floor().numer().clone())
    }
}

/// Formats a floating point value with at most 15 significant digits, always showing a decimal
/// point, such as `2.0` or `0.333333333333333`.
pub fn fmt_float(value: f64) -> String {
    if value == 0.0 {
        return "0.0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    if !(-6..16).contains(&magnitude) {
        return format!("{:e}", value);
    }

    let decimals = (14 - magnitude).clamp(1, 17) as usize;
    let mut s = format!("{:.*}", decimals, value);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    if s == "-0.0" {
        s = "0.0".to_string();
    }
    s
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(r) if *r.denom() == 1 => write!(f, "{}", r.numer()),
            Self::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
            Self::Float(n) => write!(f, "{}", fmt_float(n.to_f64())),
        }
    }
}

/// Creates a [`Float`] number with the given value.
pub(crate) fn approx(value: f64) -> Number {
    Number::Float(Float::with_val(PRECISION, value))
}

/// Returns the integer `n` as a [`Number`].
pub(crate) fn integer(n: i64) -> Number {
    Number::Rational(Rational::from(int(n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_arithmetic() {
        let third = Number::from(rational(1, 3));
        let sixth = Number::from(rational(1, 6));
        assert_eq!(third.add(&sixth), Number::from(rational(1, 2)));
        assert_eq!(third.mul(&sixth), Number::from(rational(1, 18)));
    }

    #[test]
    fn float_is_contagious() {
        let sum = integer(2).add(&approx(0.5));
        assert!(sum.is_float());
        assert_eq!(sum.to_string(), "2.5");
    }

    #[test]
    fn exact_and_float_differ() {
        assert_ne!(integer(2), approx(2.0));
    }

    #[test]
    fn powers() {
        let two_thirds = Number::from(rational(2, 3));
        assert_eq!(two_thirds.pow_int(&int(-2)), Some(Number::from(rational(9, 4))));
        assert_eq!(integer(0).pow_int(&int(-1)), None);
        assert_eq!(integer(2).pow_int(&int(100_000)), None);
    }

    #[test]
    fn display() {
        assert_eq!(integer(-4).to_string(), "-4");
        assert_eq!(Number::from(rational(-3, 2)).to_string(), "-3/2");
        assert_eq!(approx(2.0).to_string(), "2.0");
        assert_eq!(approx(1.0 / 3.0).to_string(), "0.333333333333333");
        assert_eq!(approx(-1.324717957244746).to_string(), "-1.32471795724475");
    }

    #[test]
    fn floor() {
        assert_eq!(Number::from(rational(-1, 2)).floor(), Some(int(-1)));
        assert_eq!(Number::from(rational(7, 2)).floor(), Some(int(3)));
        assert_eq!(approx(1.5).floor(), None);
    }
}
