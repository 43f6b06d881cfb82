//! Solving polynomial equations in one variable.
//!
//! Equations are normalized to `lhs - rhs = 0` and classified by the degree of the polynomial:
//!
//! - degree 0 has no solutions (the equation is either always or never true, and neither case has
//!   a value for the variable);
//! - degree 1 and 2 are solved in closed form;
//! - higher degrees with rational coefficients are solved exactly as far as the rational root
//!   theorem allows, with the remaining roots given as `RootOf(p, k)` placeholders;
//! - higher degrees with closed, non-rational coefficients (such as `pi`) are solved numerically.

pub mod rational;

use crate::error::{EvaluationFailed, UnsupportedEquation};
use crate::numerical::{eval::eval, from_complex, roots::{distinct_roots, roots}};
use crate::symbolic::{
    expand::expand,
    expr::{Number, SymExpr, ROOT_OF},
    poly::{coefficients, from_coefficients},
};
use mathsolver_error::Error;
use rational::{rational_roots, square_free};
use std::{collections::BTreeSet, fmt};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation `lhs = rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: SymExpr,

    /// The right-hand side of the equation.
    pub rhs: SymExpr,
}

impl Equation {
    /// Creates a new equation.
    pub fn new(lhs: SymExpr, rhs: SymExpr) -> Self {
        Self { lhs, rhs }
    }

    /// Returns the canonical form of `lhs - rhs`.
    pub fn normalized(&self) -> SymExpr {
        (self.lhs.clone() - self.rhs.clone()).canonical()
    }

    /// Returns the free symbols of both sides of the equation in lexicographic order.
    pub fn free_symbols(&self) -> BTreeSet<String> {
        let mut symbols = self.lhs.free_symbols();
        symbols.extend(self.rhs.free_symbols());
        symbols
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}

/// Returns the root `-b/a` of the linear polynomial `a*x + b`.
///
/// Returns an error if `a` is zero.
pub fn linear(a: &SymExpr, b: &SymExpr) -> Result<SymExpr, Error> {
    (-b.clone()).checked_div(a)
}

/// Returns the discriminant `b^2 - 4*a*c` of the quadratic polynomial `a*x^2 + b*x + c`.
pub fn discriminant(a: &SymExpr, b: &SymExpr, c: &SymExpr) -> SymExpr {
    let raw = b.clone().pow(SymExpr::int(2))
        - SymExpr::Mul(vec![SymExpr::int(4), a.clone(), c.clone()]);
    expand(&raw.canonical())
}

/// Returns the roots `(-b ± sqrt(D))/(2*a)` of the quadratic polynomial `a*x^2 + b*x + c`, the
/// root with `+` first. If the discriminant is zero, the single root `-b/(2*a)` is returned.
pub fn quadratic(a: &SymExpr, b: &SymExpr, c: &SymExpr) -> Result<Vec<SymExpr>, Error> {
    let d = discriminant(a, b, c);
    let two_a = (SymExpr::int(2) * a.clone()).canonical();
    if d.is_zero() {
        return Ok(vec![(-b.clone()).checked_div(&two_a)?]);
    }

    let root = d.sqrt().canonical();
    let plus = (-b.clone() + root.clone()).checked_div(&two_a)?;
    let minus = (-b.clone() - root).checked_div(&two_a)?;
    Ok(vec![plus, minus])
}

/// Solves the polynomial equation with the given coefficients (highest degree first) equal to
/// zero.
pub fn solve_polynomial(coefficients: &[SymExpr], var: &str) -> Result<Vec<SymExpr>, Error> {
    match coefficients {
        [] | [_] => Ok(Vec::new()),
        [a, b] => Ok(vec![linear(a, b)?]),
        [a, b, c] => quadratic(a, b, c),
        _ => higher_degree(coefficients, var),
    }
}

/// Solves a polynomial equation of degree 3 or higher.
fn higher_degree(coefficients: &[SymExpr], var: &str) -> Result<Vec<SymExpr>, Error> {
    let degree = coefficients.len() - 1;

    let exact = coefficients.iter()
        .map(|coefficient| coefficient.as_rational().cloned())
        .collect::<Option<Vec<_>>>();
    if let Some(exact) = exact {
        let (roots, remaining) = rational_roots(&exact);
        debug!(degree, rational_roots = roots.len(), "searched for rational roots");

        // repeated irrational roots are reported once
        let remaining = square_free(&remaining);

        let mut solutions = roots.into_iter()
            .map(|root| SymExpr::from(Number::from(root)))
            .collect::<Vec<_>>();
        let remaining = remaining.into_iter()
            .map(|coefficient| SymExpr::from(Number::from(coefficient)))
            .collect::<Vec<_>>();
        match remaining.len().saturating_sub(1) {
            0 => (),
            1 | 2 => solutions.extend(solve_polynomial(&remaining, var)?),
            n => {
                let poly = from_coefficients(&remaining, var);
                solutions.extend((0..n).map(|k| {
                    SymExpr::call(ROOT_OF, vec![poly.clone(), SymExpr::int(k as i64)])
                }));
            },
        }
        return Ok(solutions);
    }

    if coefficients.iter().all(|coefficient| coefficient.free_symbols().is_empty()) {
        let failed = |expr: &SymExpr| Error::unspanned(EvaluationFailed { expr: expr.to_string() });
        let values = coefficients.iter()
            .map(|coefficient| eval(coefficient).ok_or_else(|| failed(coefficient)))
            .collect::<Result<Vec<_>, _>>()?;
        let poly = from_coefficients(coefficients, var);
        let found = roots(&values).ok_or_else(|| failed(&poly))?;
        return distinct_roots(found)
            .iter()
            .map(|root| from_complex(root).ok_or_else(|| failed(&poly)))
            .collect();
    }

    Err(Error::unspanned(UnsupportedEquation { degree }))
}

/// Solves the equation for the given variable.
///
/// Returns an error if the equation is not a polynomial equation in the variable, or if it is of
/// degree 3 or higher with symbolic coefficients.
pub fn solve(equation: &Equation, var: &str) -> Result<Vec<SymExpr>, Error> {
    let expr = equation.normalized();
    let coefficients = coefficients(&expr, var)?;
    debug!(%expr, degree = coefficients.len() - 1, "solving polynomial equation");
    solve_polynomial(&coefficients, var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::{parse_input, parser::ast::Input};
    use pretty_assertions::assert_eq;

    /// Parses the equation and solves it for `x`, formatting the solutions.
    fn solutions(input: &str) -> Result<Vec<String>, Error> {
        let Input::Equation { lhs, rhs, .. } = parse_input(input).unwrap() else {
            panic!("not an equation");
        };
        let equation = Equation::new(SymExpr::try_from(lhs)?, SymExpr::try_from(rhs)?);
        let solutions = solve(&equation, "x")?;
        Ok(solutions.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn linear_equation() {
        assert_eq!(solutions("2x + 3 = 7").unwrap(), vec!["2"]);
        assert_eq!(solutions("3x = 1").unwrap(), vec!["1/3"]);
    }

    #[test]
    fn quadratic_two_real_roots() {
        assert_eq!(solutions("x^2 - 5x + 6 = 0").unwrap(), vec!["3", "2"]);
        assert_eq!(solutions("x^2 = 2").unwrap(), vec!["sqrt(2)", "-sqrt(2)"]);
    }

    #[test]
    fn quadratic_double_root() {
        assert_eq!(solutions("x^2 - 2x + 1 = 0").unwrap(), vec!["1"]);
    }

    #[test]
    fn quadratic_complex_roots() {
        assert_eq!(solutions("x^2 + 1 = 0").unwrap(), vec!["i", "-i"]);
        assert_eq!(
            solutions("x^2 + x + 1 = 0").unwrap(),
            vec!["-1/2 + sqrt(3)*i/2", "-1/2 - sqrt(3)*i/2"],
        );
    }

    #[test]
    fn cubic_rational_roots() {
        assert_eq!(solutions("x^3 - 6x^2 + 11x - 6 = 0").unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn cubic_with_quadratic_factor() {
        // (x - 1)(x^2 - 2)
        assert_eq!(
            solutions("x^3 - x^2 - 2x + 2 = 0").unwrap(),
            vec!["1", "sqrt(2)", "-sqrt(2)"],
        );
    }

    #[test]
    fn quintic_without_closed_form() {
        let found = solutions("x^5 - x + 1 = 0").unwrap();
        assert_eq!(found.len(), 5);
        assert_eq!(found[0], "RootOf(x^5 - x + 1, 0)");
        assert_eq!(found[4], "RootOf(x^5 - x + 1, 4)");
    }

    #[test]
    fn repeated_irrational_roots() {
        // (x^2 - 2)^2
        assert_eq!(solutions("x^4 - 4x^2 + 4 = 0").unwrap(), vec!["sqrt(2)", "-sqrt(2)"]);

        // (x - 1)(x^2 - 2)^2
        assert_eq!(
            solutions("(x - 1)(x^2 - 2)^2 = 0").unwrap(),
            vec!["1", "sqrt(2)", "-sqrt(2)"],
        );
    }

    #[test]
    fn repeated_numerical_roots() {
        // (x - pi)^2 (x - 1)
        assert_eq!(solutions("(x - pi)^2 (x - 1) = 0").unwrap().len(), 2);
    }

    #[test]
    fn degree_too_large() {
        let err = solutions("x^100000000 = 1").unwrap_err();
        assert_eq!(err.to_string(), "polynomial degree 100000000 is too large");
    }

    #[test]
    fn constant_equation() {
        assert!(solutions("x - x = 1").unwrap().is_empty());
    }

    #[test]
    fn symbolic_cubic_is_unsupported() {
        let err = solutions("x^3 + a x + 1 = 0").unwrap_err();
        assert_eq!(err.to_string(), "cannot solve equations of degree 3 with symbolic coefficients");
    }

    #[test]
    fn not_polynomial() {
        let err = solutions("sin(x) = 0").unwrap_err();
        assert_eq!(err.to_string(), "expression is not a polynomial in x");
    }
}
