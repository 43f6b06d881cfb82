//! Collection of the terms of a sum by powers of a variable.

use crate::symbolic::expr::{Number, SymExpr};

/// If the factor is the variable, or the variable raised to a numeric power, returns the power.
fn var_power(factor: &SymExpr, var: &str) -> Option<Number> {
    match factor {
        SymExpr::Primary(_) if factor.as_symbol() == Some(var) => Some(Number::from(1)),
        SymExpr::Exp(base, exp) if base.as_symbol() == Some(var) => exp.as_number().cloned(),
        _ => None,
    }
}

/// Splits a term into the power of the variable it contains and its coefficient.
///
/// - `3*x^2*y` -> `(2, 3*y)`
/// - `y` -> `(0, y)`
pub(crate) fn split_term(term: &SymExpr, var: &str) -> (Number, SymExpr) {
    let factors = match term {
        SymExpr::Mul(factors) => factors.as_slice(),
        _ => std::slice::from_ref(term),
    };

    let mut power = Number::from(0);
    let mut coefficient = Vec::with_capacity(factors.len());
    for factor in factors {
        match var_power(factor, var) {
            Some(n) => power = power.add(&n),
            None => coefficient.push(factor.clone()),
        }
    }
    (power, SymExpr::Mul(coefficient).downgrade())
}

/// Collects the terms of a sum by the powers of the given variable.
///
/// `x*y + x*z + 2*x^2 + x^2*y = x*(y + z) + x^2*(y + 2)`
///
/// Expressions that are not sums are returned unchanged. The output is in canonical form.
pub fn collect(expr: &SymExpr, var: &str) -> SymExpr {
    let SymExpr::Add(terms) = expr else {
        return expr.clone();
    };

    let mut groups: Vec<(Number, Vec<SymExpr>)> = Vec::new();
    for term in terms {
        let (power, coefficient) = split_term(term, var);
        match groups.iter_mut().find(|(other, _)| *other == power) {
            Some((_, coefficients)) => coefficients.push(coefficient),
            None => groups.push((power, vec![coefficient])),
        }
    }

    let new_terms = groups.into_iter()
        .map(|(power, coefficients)| {
            let coefficient = SymExpr::Add(coefficients).downgrade();
            coefficient * SymExpr::symbol(var).pow(SymExpr::from(power))
        })
        .collect();
    SymExpr::Add(new_terms).canonical()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    /// Parses, canonicalizes and collects the given expression by `x`.
    fn collected(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        collect(&SymExpr::try_from(expr).unwrap().canonical(), "x")
    }

    #[test]
    fn groups_by_power() {
        assert_eq!(collected("x y + x z").to_string(), "x*(y + z)");
        assert_eq!(collected("a x^2 + b x^2 + c").to_string(), "x^2*(a + b) + c");
    }

    #[test]
    fn polynomial_is_unchanged() {
        let expr = Parser::new("x^2 - 5x + 6").try_parse_full::<Expr>().unwrap();
        let canonical = SymExpr::try_from(expr).unwrap().canonical();
        assert_eq!(collect(&canonical, "x"), canonical);
    }

    #[test]
    fn no_variable() {
        assert_eq!(collected("y + 2 y").to_string(), "3*y");
    }
}
