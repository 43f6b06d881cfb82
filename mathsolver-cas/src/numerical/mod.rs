//! Arbitrary-precision numerical evaluation of expressions.
//!
//! Exact manipulation in [`symbolic`](crate::symbolic) is preferred wherever possible. This module
//! is used where no exact result exists: evaluating functions of approximate numbers, deciding
//! the sign of closed expressions such as `3 - pi`, and computing the roots of polynomials that
//! have no closed form.

pub mod eval;
pub mod roots;

use crate::symbolic::expr::{Number, SymExpr, IMAGINARY_UNIT};
use roots::IMAGINARY_EPSILON;
use rug::Complex;

/// Converts a complex value into an approximate expression, `a + b*i`.
///
/// Negligible real or imaginary parts are dropped. Returns [`None`] if the value is not finite.
pub fn from_complex(value: &Complex) -> Option<SymExpr> {
    let (re, im) = (value.real(), value.imag());
    if !re.is_finite() || !im.is_finite() {
        return None;
    }

    let (re_size, im_size) = (re.to_f64().abs(), im.to_f64().abs());
    let keep_re = re_size > IMAGINARY_EPSILON * im_size.max(1.0) || im_size == 0.0;
    let keep_im = im_size > IMAGINARY_EPSILON * re_size.max(1.0);

    let real = SymExpr::from(Number::Float(re.clone()));
    let imag = SymExpr::Mul(vec![
        SymExpr::from(Number::Float(im.clone())),
        SymExpr::symbol(IMAGINARY_UNIT),
    ]);
    let expr = match (keep_re, keep_im) {
        (_, false) => real,
        (false, true) => imag,
        (true, true) => real + imag,
    };
    Some(expr.canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::complex;
    use pretty_assertions::assert_eq;

    #[test]
    fn real_value() {
        assert_eq!(from_complex(&complex(2.5)).unwrap().to_string(), "2.5");
    }

    #[test]
    fn complex_value() {
        let value = complex((-0.5, 1.5));
        assert_eq!(from_complex(&value).unwrap().to_string(), "-0.5 + 1.5*i");
    }

    #[test]
    fn negligible_parts_are_dropped() {
        let value = complex((1e-70, -2.0));
        assert_eq!(from_complex(&value).unwrap().to_string(), "-2.0*i");

        let value = complex((3.0, 1e-70));
        assert_eq!(from_complex(&value).unwrap().to_string(), "3.0");
    }
}
