//! Numerical roots of polynomials with the Durand-Kerner method.

use crate::primitive::{complex, float, PRECISION};
use rug::{ops::Pow, Complex, Float};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// The maximum number of iterations of the Durand-Kerner method.
const MAX_ITERATIONS: usize = 1000;

/// The iteration stops when no root estimate moves more than this amount.
const TOLERANCE: f64 = 1e-60;

/// Roots closer than this (relative to their magnitude) are considered the same root.
const DISTINCT_EPSILON: f64 = 1e-20;

/// Imaginary parts smaller than this (relative to the magnitude of the root) are discarded.
pub const IMAGINARY_EPSILON: f64 = 1e-40;

/// Evaluates the monic polynomial with the given coefficients (highest degree first, leading
/// coefficient omitted) at `z`, using Horner's method.
fn eval_monic(coefficients: &[Complex], z: &Complex) -> Complex {
    let mut result = complex(1);
    for coefficient in coefficients {
        result *= z;
        result += coefficient;
    }
    result
}

/// Returns true if the imaginary part of the value is negligible.
pub fn is_real(value: &Complex) -> bool {
    let scale = value.real().to_f64().abs().max(1.0);
    value.imag().to_f64().abs() <= IMAGINARY_EPSILON * scale
}

/// Orders the roots of a polynomial: real roots in ascending order first, then complex roots by
/// real part, then by imaginary part.
pub fn cmp_roots(lhs: &Complex, rhs: &Complex) -> Ordering {
    let by_part = |lhs: &Float, rhs: &Float| lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal);
    is_real(rhs).cmp(&is_real(lhs))
        .then_with(|| by_part(lhs.real(), rhs.real()))
        .then_with(|| by_part(lhs.imag(), rhs.imag()))
}

/// Computes all roots of the polynomial with the given coefficients, from the highest degree to
/// the constant term.
///
/// The roots are returned in the order given by [`cmp_roots`], with negligible imaginary parts
/// removed. Returns [`None`] if the leading coefficient is zero.
pub fn roots(coefficients: &[Complex]) -> Option<Vec<Complex>> {
    let (leading, rest) = coefficients.split_first()?;
    if leading.is_zero() {
        return None;
    }

    let monic = rest.iter()
        .map(|coefficient| Complex::with_val(PRECISION, coefficient / leading))
        .collect::<Vec<_>>();
    let degree = monic.len();

    // initial estimates are powers of a number that is neither real nor a root of unity
    let seed = Complex::with_val(PRECISION, (0.4, 0.9));
    let mut estimates = (0..degree)
        .map(|k| seed.clone().pow(k as u32))
        .collect::<Vec<_>>();

    let tolerance = float(TOLERANCE);
    let mut converged = false;
    for iteration in 0..MAX_ITERATIONS {
        let mut max_delta = float(0);
        for i in 0..degree {
            let mut denominator = complex(1);
            for (j, other) in estimates.iter().enumerate() {
                if i != j {
                    denominator *= Complex::with_val(PRECISION, &estimates[i] - other);
                }
            }
            if denominator.is_zero() {
                continue;
            }

            let delta = eval_monic(&monic, &estimates[i]) / denominator;
            let size = Float::with_val(PRECISION, delta.abs_ref());
            if size > max_delta {
                max_delta = size;
            }
            estimates[i] -= delta;
        }

        if max_delta <= tolerance {
            debug!(degree, iterations = iteration + 1, "polynomial roots converged");
            converged = true;
            break;
        }
    }
    if !converged {
        warn!(degree, "polynomial roots did not fully converge");
    }

    for estimate in &mut estimates {
        if is_real(estimate) {
            *estimate.mut_imag() = float(0);
        }
    }
    estimates.sort_by(cmp_roots);
    Some(estimates)
}

/// Merges roots that approximate the same value, such as the copies of a repeated root.
///
/// The order of the roots is kept.
pub fn distinct_roots(roots: Vec<Complex>) -> Vec<Complex> {
    let mut distinct: Vec<Complex> = Vec::with_capacity(roots.len());
    for root in roots {
        let scale = Float::with_val(PRECISION, root.abs_ref()).to_f64().max(1.0);
        let seen = distinct.iter().any(|other| {
            let distance = Float::with_val(PRECISION, Complex::with_val(PRECISION, &root - other).abs_ref());
            distance.to_f64() <= DISTINCT_EPSILON * scale
        });
        if !seen {
            distinct.push(root);
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn real_coefficients(values: &[f64]) -> Vec<Complex> {
        values.iter().map(|&value| complex(value)).collect()
    }

    #[test]
    fn cubic_with_real_roots() {
        // (x - 1)(x - 2)(x - 3)
        let roots = roots(&real_coefficients(&[1.0, -6.0, 11.0, -6.0])).unwrap();
        let values = roots.iter().map(|root| root.real().to_f64()).collect::<Vec<_>>();
        assert_eq!(values.len(), 3);
        assert_float_absolute_eq!(values[0], 1.0);
        assert_float_absolute_eq!(values[1], 2.0);
        assert_float_absolute_eq!(values[2], 3.0);
        assert!(roots.iter().all(|root| root.imag().is_zero()));
    }

    #[test]
    fn real_roots_come_first() {
        // x^3 - 1 = (x - 1)(x^2 + x + 1)
        let roots = roots(&real_coefficients(&[1.0, 0.0, 0.0, -1.0])).unwrap();
        assert_float_absolute_eq!(roots[0].real().to_f64(), 1.0);
        assert!(roots[0].imag().is_zero());

        assert_float_absolute_eq!(roots[1].real().to_f64(), -0.5);
        assert_float_absolute_eq!(roots[1].imag().to_f64(), -(3f64.sqrt()) / 2.0);
        assert_float_absolute_eq!(roots[2].imag().to_f64(), 3f64.sqrt() / 2.0);
    }

    #[test]
    fn quintic() {
        // x^5 - x + 1 has a single real root
        let roots = roots(&real_coefficients(&[1.0, 0.0, 0.0, 0.0, -1.0, 1.0])).unwrap();
        assert_eq!(roots.len(), 5);
        assert_float_absolute_eq!(roots[0].real().to_f64(), -1.1673039782614187);
        assert_eq!(roots.iter().filter(|root| is_real(root)).count(), 1);
    }

    #[test]
    fn repeated_roots_are_merged() {
        // (x - 2)^2 (x + 1) = x^3 - 3x^2 + 4
        let found = distinct_roots(roots(&real_coefficients(&[1.0, -3.0, 0.0, 4.0])).unwrap());
        assert_eq!(found.len(), 2);
        assert_float_absolute_eq!(found[0].real().to_f64(), -1.0);
        assert_float_absolute_eq!(found[1].real().to_f64(), 2.0);
        assert!(found.iter().all(is_real));
    }

    #[test]
    fn zero_leading_coefficient() {
        assert!(roots(&real_coefficients(&[0.0, 1.0])).is_none());
    }
}
