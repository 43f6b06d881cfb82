//! Polynomial coefficient extraction.

use crate::error::{DegreeTooLarge, NotPolynomial};
use crate::symbolic::{collect::split_term, expand::expand, expr::SymExpr};
use mathsolver_error::Error;

/// The largest degree of a polynomial whose coefficients can be extracted.
pub const MAX_DEGREE: usize = 64;

/// Returns the coefficients of the expression as a polynomial in the given variable, from the
/// highest degree to the constant term.
///
/// The expression is expanded first, so that `(x + 1)^2` has the coefficients `[1, 2, 1]`.
/// Leading zero coefficients are removed; the zero polynomial has the coefficients `[0]`.
///
/// Returns an error if the variable appears in any other way than as a non-negative integer power,
/// such as in `1/x`, `sqrt(x)` or `sin(x)`, or if its degree is larger than [`MAX_DEGREE`].
pub fn coefficients(expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, Error> {
    let not_polynomial = || Error::unspanned(NotPolynomial { var: var.to_string() });

    let expanded = expand(expr);
    let terms = match expanded {
        SymExpr::Add(terms) => terms,
        other => vec![other],
    };

    let mut by_degree: Vec<Vec<SymExpr>> = Vec::new();
    for term in &terms {
        let (power, coefficient) = split_term(term, var);
        if coefficient.contains_symbol(var) {
            return Err(not_polynomial());
        }

        let degree = power.as_integer()
            .filter(|n| n.cmp0() != std::cmp::Ordering::Less)
            .ok_or_else(not_polynomial)?;
        let degree = degree.to_usize()
            .filter(|&n| n <= MAX_DEGREE)
            .ok_or_else(|| Error::unspanned(DegreeTooLarge {
                degree: degree.to_string(),
                max: MAX_DEGREE,
            }))?;
        if by_degree.len() <= degree {
            by_degree.resize(degree + 1, Vec::new());
        }
        by_degree[degree].push(coefficient);
    }

    let mut coefficients = by_degree.into_iter()
        .rev()
        .map(|terms| SymExpr::Add(terms).canonical())
        .skip_while(SymExpr::is_zero)
        .collect::<Vec<_>>();
    if coefficients.is_empty() {
        coefficients.push(SymExpr::int(0));
    }
    Ok(coefficients)
}

/// Builds the polynomial with the given coefficients, from the highest degree to the constant
/// term, in the given variable.
pub fn from_coefficients(coefficients: &[SymExpr], var: &str) -> SymExpr {
    let degree = coefficients.len().saturating_sub(1);
    let terms = coefficients.iter()
        .enumerate()
        .map(|(idx, coefficient)| {
            let power = SymExpr::int((degree - idx) as i64);
            coefficient.clone() * SymExpr::symbol(var).pow(power)
        })
        .collect();
    SymExpr::Add(terms).canonical()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    /// Parses the expression and returns its coefficients in `x`, formatted.
    fn coefficients_of(input: &str) -> Result<Vec<String>, Error> {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        let expr = SymExpr::try_from(expr).unwrap().canonical();
        coefficients(&expr, "x")
            .map(|coefficients| coefficients.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn quadratic() {
        assert_eq!(coefficients_of("x^2 - 5x + 6").unwrap(), vec!["1", "-5", "6"]);
    }

    #[test]
    fn missing_degrees_are_zero() {
        assert_eq!(coefficients_of("2x^3 - 1").unwrap(), vec!["2", "0", "0", "-1"]);
    }

    #[test]
    fn expands_first() {
        assert_eq!(coefficients_of("(x + 1)^2 - x^2").unwrap(), vec!["2", "1"]);
    }

    #[test]
    fn symbolic_coefficients() {
        assert_eq!(coefficients_of("a x^2 + b x + x + c").unwrap(), vec!["a", "b + 1", "c"]);
    }

    #[test]
    fn zero_polynomial() {
        assert_eq!(coefficients_of("x - x").unwrap(), vec!["0"]);
    }

    #[test]
    fn not_polynomial() {
        for input in ["1/x", "sqrt(x)", "sin(x) + 1", "2^x"] {
            let err = coefficients_of(input).unwrap_err();
            assert_eq!(err.to_string(), "expression is not a polynomial in x");
        }
    }

    #[test]
    fn degree_too_large() {
        let err = coefficients_of("x^100000000 - 1").unwrap_err();
        assert_eq!(err.to_string(), "polynomial degree 100000000 is too large");

        let err = coefficients_of("x^100000000000000000000000").unwrap_err();
        assert_eq!(err.to_string(), "polynomial degree 100000000000000000000000 is too large");
    }

    #[test]
    fn largest_degree() {
        let coefficients = coefficients_of(&format!("x^{} + 1", MAX_DEGREE)).unwrap();
        assert_eq!(coefficients.len(), MAX_DEGREE + 1);
    }

    #[test]
    fn rebuild() {
        let coefficients = [SymExpr::int(1), SymExpr::int(0), SymExpr::int(-4)];
        assert_eq!(from_coefficients(&coefficients, "x").to_string(), "x^2 - 4");
    }
}
