//! Plain-text formatting of expressions.
//!
//! Expressions are printed the way a reader would write them by hand: `x^2 - 5*x + 6`,
//! `3*x/2`, `sqrt(3)*i`, `exp(x)`. Terms of a sum are ordered by degree (highest first, constants
//! last, anything involving the imaginary unit after the real part); factors of a product are
//! ordered numbers first, then radicals of numbers, symbols, calls, and finally parenthesized sums.

use super::{Number, Primary, SymExpr, EULER, IMAGINARY_UNIT, CONSTANTS};
use std::{cmp::Ordering, fmt};

/// A product split into its sign, numerator factors, and denominator factors. All factors are
/// positive; numeric factors come first.
pub(super) struct Fraction {
    /// Whether the product is negative.
    pub negative: bool,

    /// Factors of the numerator. Empty if the numerator is `1`.
    pub numerator: Vec<SymExpr>,

    /// Factors of the denominator. Empty if there is no denominator.
    pub denominator: Vec<SymExpr>,
}

impl Fraction {
    /// Splits the factors of a product.
    pub fn split(factors: &[SymExpr]) -> Self {
        let mut negative = false;
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();

        for factor in factors {
            match factor {
                SymExpr::Primary(Primary::Number(n)) => {
                    if n.is_negative() {
                        negative = !negative;
                    }
                    match n.abs() {
                        Number::Rational(r) => {
                            if *r.numer() != 1 {
                                numerator.push(SymExpr::from(Number::from(r.numer().clone())));
                            }
                            if *r.denom() != 1 {
                                denominator.push(SymExpr::from(Number::from(r.denom().clone())));
                            }
                        },
                        abs => numerator.push(SymExpr::from(abs)),
                    }
                },
                SymExpr::Exp(base, exp) if exp.as_number().is_some_and(Number::is_negative) => {
                    let exp = exp.as_number().map(Number::neg).unwrap_or_else(|| Number::from(1));
                    if exp.is_one() {
                        denominator.push(*base.clone());
                    } else {
                        denominator.push(base.as_ref().clone().pow(SymExpr::from(exp)));
                    }
                },
                other => numerator.push(other.clone()),
            }
        }

        numerator.sort_by(cmp_factors);
        denominator.sort_by(cmp_factors);
        Self { negative, numerator, denominator }
    }
}

/// Returns the rank of a factor in a product.
fn factor_rank(factor: &SymExpr) -> u8 {
    match factor {
        SymExpr::Primary(Primary::Number(_)) => 0,
        SymExpr::Exp(base, _) if base.is_number() => 1,
        SymExpr::Primary(Primary::Symbol(_)) => 2,
        SymExpr::Exp(base, _) if base.as_symbol().is_some() => 2,
        SymExpr::Primary(Primary::Call(..)) => 3,
        SymExpr::Exp(base, _) if matches!(**base, SymExpr::Primary(Primary::Call(..))) => 3,
        _ => 4,
    }
}

/// Returns the constant term of a sum, or zero.
fn constant_term(terms: &[SymExpr]) -> f64 {
    terms.iter()
        .find_map(|term| term.as_number().map(Number::to_f64))
        .unwrap_or(0.0)
}

/// Orders the factors of a product.
fn cmp_factors(lhs: &SymExpr, rhs: &SymExpr) -> Ordering {
    factor_rank(lhs).cmp(&factor_rank(rhs))
        .then_with(|| match (lhs, rhs) {
            // `(x - 1)*(x + 1)`: sums that differ only in their constant are ordered by it
            (SymExpr::Add(lhs_terms), SymExpr::Add(rhs_terms)) => {
                let variable_part = |terms: &[SymExpr]| terms.iter()
                    .filter(|term| !term.is_number())
                    .map(ToString::to_string)
                    .collect::<Vec<_>>();
                variable_part(lhs_terms).cmp(&variable_part(rhs_terms))
                    .then_with(|| {
                        constant_term(lhs_terms)
                            .partial_cmp(&constant_term(rhs_terms))
                            .unwrap_or(Ordering::Equal)
                    })
            },
            _ => lhs.to_string().cmp(&rhs.to_string()),
        })
}

/// Returns the degree of a factor: the number of times a free symbol (or call) is multiplied in.
fn factor_degree(factor: &SymExpr) -> f64 {
    match factor {
        SymExpr::Primary(Primary::Symbol(sym)) if !CONSTANTS.contains(&sym.as_str()) => 1.0,
        SymExpr::Primary(Primary::Call(..)) => 1.0,
        SymExpr::Exp(base, exp) => exp.as_number()
            .map(|exp| factor_degree(base) * exp.to_f64())
            .unwrap_or_else(|| factor_degree(base)),
        SymExpr::Add(terms) => terms.iter().map(term_degree).fold(0.0, f64::max),
        SymExpr::Mul(factors) => factors.iter().map(factor_degree).sum(),
        SymExpr::Primary(_) => 0.0,
    }
}

/// Returns the degree of a term of a sum.
fn term_degree(term: &SymExpr) -> f64 {
    factor_degree(term)
}

/// Orders the terms of a sum.
pub(super) fn cmp_terms(lhs: &SymExpr, rhs: &SymExpr) -> Ordering {
    let has_i = |term: &SymExpr| term.contains_symbol(IMAGINARY_UNIT);
    has_i(lhs).cmp(&has_i(rhs))
        .then_with(|| {
            term_degree(rhs)
                .partial_cmp(&term_degree(lhs))
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| lhs.is_number().cmp(&rhs.is_number()))
        .then_with(|| negated(lhs).to_string().cmp(&negated(rhs).to_string()))
}

/// Returns the terms of a sum in display order.
pub(super) fn sorted_terms(terms: &[SymExpr]) -> Vec<&SymExpr> {
    let mut sorted = terms.iter().collect::<Vec<_>>();
    sorted.sort_by(|lhs, rhs| cmp_terms(lhs, rhs));
    sorted
}

/// Returns true if the term is printed with a leading minus sign.
pub(super) fn is_negative_term(term: &SymExpr) -> bool {
    match term {
        SymExpr::Primary(Primary::Number(n)) => n.is_negative(),
        SymExpr::Mul(factors) => factors.iter()
            .filter_map(SymExpr::as_number)
            .fold(false, |negative, n| negative ^ n.is_negative()),
        _ => false,
    }
}

/// Returns the term with its numeric coefficient negated, if it is negative. Otherwise, returns
/// the term unchanged.
pub(super) fn negated(term: &SymExpr) -> SymExpr {
    if !is_negative_term(term) {
        return term.clone();
    }

    match term {
        SymExpr::Primary(Primary::Number(n)) => SymExpr::from(n.neg()),
        SymExpr::Mul(factors) => {
            let mut done = false;
            let factors = factors.iter()
                .filter_map(|factor| match factor.as_number() {
                    Some(n) if !done && n.is_negative() => {
                        done = true;
                        let abs = n.neg();
                        (!abs.is_one()).then(|| SymExpr::from(abs))
                    },
                    _ => Some(factor.clone()),
                })
                .collect::<Vec<_>>();
            SymExpr::Mul(factors).downgrade()
        },
        _ => term.clone(),
    }
}

/// Returns true if the number must be parenthesized when used as a base or exponent.
fn is_compound_number(n: &Number) -> bool {
    n.is_negative() || n.as_rational().is_some_and(|r| *r.denom() != 1)
}

/// Writes a factor of a product, parenthesizing sums.
fn fmt_factor(f: &mut fmt::Formatter<'_>, factor: &SymExpr) -> fmt::Result {
    match factor {
        SymExpr::Add(_) => write!(f, "({})", factor),
        _ => write!(f, "{}", factor),
    }
}

/// Writes a list of factors joined by `*`.
fn fmt_factors(f: &mut fmt::Formatter<'_>, factors: &[SymExpr]) -> fmt::Result {
    let mut iter = factors.iter();
    if let Some(factor) = iter.next() {
        fmt_factor(f, factor)?;
        for factor in iter {
            write!(f, "*")?;
            fmt_factor(f, factor)?;
        }
    }
    Ok(())
}

/// Writes a product.
fn fmt_product(f: &mut fmt::Formatter<'_>, factors: &[SymExpr]) -> fmt::Result {
    let fraction = Fraction::split(factors);
    if fraction.negative {
        write!(f, "-")?;
    }

    if fraction.numerator.is_empty() {
        write!(f, "1")?;
    } else {
        fmt_factors(f, &fraction.numerator)?;
    }

    match fraction.denominator.as_slice() {
        [] => Ok(()),
        [single] => {
            write!(f, "/")?;
            fmt_factor(f, single)
        },
        many => {
            write!(f, "/(")?;
            fmt_factors(f, many)?;
            write!(f, ")")
        },
    }
}

/// Writes a power.
fn fmt_power(f: &mut fmt::Formatter<'_>, expr: &SymExpr, base: &SymExpr, exp: &SymExpr) -> fmt::Result {
    if exp.as_number().is_some_and(Number::is_negative) {
        return fmt_product(f, std::slice::from_ref(expr));
    }
    if base.as_symbol() == Some(EULER) {
        return write!(f, "exp({})", exp);
    }
    if *exp == SymExpr::rational(1, 2) {
        return write!(f, "sqrt({})", base);
    }

    match &*base {
        SymExpr::Primary(Primary::Number(n)) if is_compound_number(n) => write!(f, "({})", base)?,
        SymExpr::Primary(_) => write!(f, "{}", base)?,
        _ => write!(f, "({})", base)?,
    }
    write!(f, "^")?;
    match exp {
        SymExpr::Primary(Primary::Number(n)) if is_compound_number(n) => write!(f, "({})", exp),
        SymExpr::Primary(_) => write!(f, "{}", exp),
        _ => write!(f, "({})", exp),
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    write!(f, "{}", arg)?;
                    for arg in iter {
                        write!(f, ", {}", arg)?;
                    }
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                for (idx, term) in sorted_terms(terms).into_iter().enumerate() {
                    let negative = is_negative_term(term);
                    match (idx, negative) {
                        (0, false) => (),
                        (0, true) => write!(f, "-")?,
                        (_, false) => write!(f, " + ")?,
                        (_, true) => write!(f, " - ")?,
                    }
                    write!(f, "{}", negated(term))?;
                }
                Ok(())
            },
            Self::Mul(factors) => fmt_product(f, factors),
            Self::Exp(base, exp) => fmt_power(f, self, base, exp),
        }
    }
}
