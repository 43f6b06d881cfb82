//! Exact rational roots and square-free parts of polynomials with rational coefficients.

use crate::primitive::divisors;
use rug::{Integer, Rational};

/// Divides the polynomial by `x - root` with synthetic division, returning the quotient if the
/// remainder is zero.
fn deflate(coefficients: &[Rational], root: &Rational) -> Option<Vec<Rational>> {
    let mut quotient = Vec::with_capacity(coefficients.len());
    let mut carry = Rational::new();
    for coefficient in coefficients {
        carry = Rational::from(&carry * root) + coefficient;
        quotient.push(carry.clone());
    }

    // the last value is the remainder
    let remainder = quotient.pop()?;
    (remainder == 0).then_some(quotient)
}

/// Multiplies the coefficients by the least common multiple of their denominators, returning
/// integer coefficients.
fn clear_denominators(coefficients: &[Rational]) -> Vec<Integer> {
    let lcm = coefficients.iter()
        .fold(Integer::from(1), |lcm, coefficient| lcm.lcm(coefficient.denom()));
    coefficients.iter()
        .map(|coefficient| {
            let scaled = coefficient.clone() * Rational::from(lcm.clone());
            scaled.numer().clone()
        })
        .collect()
}

/// Finds the distinct rational roots of the polynomial with the given coefficients (highest degree
/// first), using the rational root theorem.
///
/// Returns the roots in ascending order, and the coefficients of the polynomial that remains after
/// dividing out every rational root (with multiplicity). If the constant term or leading
/// coefficient is too large to be factored, only the root `0` is searched for.
pub fn rational_roots(coefficients: &[Rational]) -> (Vec<Rational>, Vec<Rational>) {
    let mut remaining = coefficients.to_vec();
    let mut roots = Vec::new();

    // x = 0 is a root if the constant term is zero
    let zero = Rational::new();
    while remaining.len() > 1 && remaining.last().is_some_and(|c| *c == 0) {
        remaining.pop();
        if roots.is_empty() {
            roots.push(zero.clone());
        }
    }

    if remaining.len() > 1 {
        let integers = clear_denominators(&remaining);
        let candidates = match (integers.last().and_then(divisors), integers.first().and_then(divisors)) {
            (Some(p), Some(q)) => candidates(&p, &q),
            _ => Vec::new(),
        };

        for candidate in candidates {
            let mut found = false;
            while remaining.len() > 1 {
                match deflate(&remaining, &candidate) {
                    Some(quotient) => {
                        remaining = quotient;
                        found = true;
                    },
                    None => break,
                }
            }
            if found {
                roots.push(candidate);
            }
        }
    }

    roots.sort();
    (roots, remaining)
}

/// Removes leading zero coefficients. The zero polynomial has no coefficients.
fn trim(coefficients: &[Rational]) -> Vec<Rational> {
    coefficients.iter()
        .skip_while(|coefficient| **coefficient == 0)
        .cloned()
        .collect()
}

/// Returns the derivative of the polynomial.
fn derivative(coefficients: &[Rational]) -> Vec<Rational> {
    let degree = coefficients.len().saturating_sub(1);
    coefficients.iter()
        .take(degree)
        .enumerate()
        .map(|(i, coefficient)| coefficient.clone() * Rational::from((degree - i, 1)))
        .collect()
}

/// Divides one polynomial by another with long division, returning the quotient and remainder.
/// The divisor must have a non-zero leading coefficient.
fn div_rem(dividend: &[Rational], divisor: &[Rational]) -> (Vec<Rational>, Vec<Rational>) {
    let Some(lead) = divisor.first() else {
        return (Vec::new(), trim(dividend));
    };
    if dividend.len() < divisor.len() {
        return (Vec::new(), trim(dividend));
    }

    let mut remainder = dividend.to_vec();
    let steps = dividend.len() - divisor.len() + 1;
    let mut quotient = Vec::with_capacity(steps);
    for i in 0..steps {
        let factor = Rational::from(&remainder[i] / lead);
        for (j, coefficient) in divisor.iter().enumerate() {
            remainder[i + j] -= Rational::from(&factor * coefficient);
        }
        quotient.push(factor);
    }
    (quotient, trim(&remainder[steps..]))
}

/// Returns the monic greatest common divisor of two polynomials, with Euclid's algorithm.
fn gcd(a: &[Rational], b: &[Rational]) -> Vec<Rational> {
    let (mut a, mut b) = (trim(a), trim(b));
    while !b.is_empty() {
        let (_, remainder) = div_rem(&a, &b);
        a = b;
        b = remainder;
    }

    match a.first().cloned() {
        Some(lead) => a.into_iter().map(|coefficient| coefficient / &lead).collect(),
        None => a,
    }
}

/// Returns the square-free part of the polynomial: the polynomial with the same roots, each with
/// multiplicity one.
///
/// `x^4 - 4x^2 + 4 = (x^2 - 2)^2` has the square-free part `x^2 - 2`.
pub fn square_free(coefficients: &[Rational]) -> Vec<Rational> {
    let poly = trim(coefficients);
    if poly.len() <= 2 {
        return poly;
    }

    let repeated = gcd(&poly, &derivative(&poly));
    if repeated.len() <= 1 {
        return poly;
    }
    div_rem(&poly, &repeated).0
}

/// Lists the candidates `±p/q` for rational roots, in ascending order.
fn candidates(p: &[Integer], q: &[Integer]) -> Vec<Rational> {
    let mut candidates = Vec::with_capacity(p.len() * q.len() * 2);
    for p in p {
        for q in q {
            let candidate = Rational::from((p.clone(), q.clone()));
            candidates.push(-candidate.clone());
            candidates.push(candidate);
        }
    }
    candidates.sort();
    candidates.dedup();
    candidates
}
