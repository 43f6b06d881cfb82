//! Expansion of products and powers of sums.

use crate::symbolic::expr::{Primary, SymExpr};
use tracing::debug;

/// The largest exponent for which a power of a sum is expanded.
const MAX_EXPANDED_POWER: u32 = 256;

/// The largest number of terms a distributed product may have. Products that would grow beyond
/// this are left unexpanded.
const MAX_EXPANDED_TERMS: usize = 2048;

/// Returns the terms of an expression: the terms of a sum, or the expression itself.
fn terms_of(expr: SymExpr) -> Vec<SymExpr> {
    match expr {
        SymExpr::Add(terms) => terms,
        other => vec![other],
    }
}

/// Multiplies the given factors, distributing the product over every sum.
///
/// `(a + b)*(c + d) = a*c + a*d + b*c + b*d`
///
/// Like terms are combined after each factor, so the partial product never holds more terms than
/// the expanded result of the factors seen so far. Returns [`None`] if that result would exceed
/// [`MAX_EXPANDED_TERMS`] terms.
fn distribute(factors: &[SymExpr]) -> Option<SymExpr> {
    let mut product = vec![SymExpr::int(1)];
    for factor in factors {
        let terms = terms_of(factor.clone());
        if product.len() * terms.len() > MAX_EXPANDED_TERMS {
            debug!(terms = product.len() * terms.len(), "product too large to expand");
            return None;
        }

        let mut next = Vec::with_capacity(product.len() * terms.len());
        for lhs in &product {
            for rhs in &terms {
                next.push((lhs.clone() * rhs.clone()).canonical());
            }
        }
        product = terms_of(SymExpr::Add(next).canonical());
    }

    Some(SymExpr::Add(product).canonical())
}

/// Expands the expression, distributing products and positive integer powers over sums.
///
/// Negative integer powers of sums are expanded in the denominator: `(x + 1)^-2` becomes
/// `(x^2 + 2*x + 1)^-1`. Arguments of function calls are expanded as well.
///
/// The input is expected to be in canonical form, and the output is in canonical form.
pub fn expand(expr: &SymExpr) -> SymExpr {
    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => {
            SymExpr::call(name.clone(), args.iter().map(expand).collect()).canonical()
        },
        SymExpr::Primary(_) => expr.clone(),
        SymExpr::Add(terms) => SymExpr::Add(terms.iter().map(expand).collect()).canonical(),
        SymExpr::Mul(factors) => {
            let factors = factors.iter().map(expand).collect::<Vec<_>>();
            distribute(&factors).unwrap_or_else(|| SymExpr::Mul(factors).canonical())
        },
        SymExpr::Exp(base, exp) => {
            let base = expand(base);
            let exp = expand(exp);
            expand_power(base, exp)
        },
    }
}

/// Expands `base^exp`, where both the base and exponent are already expanded.
fn expand_power(base: SymExpr, exp: SymExpr) -> SymExpr {
    let is_sum = matches!(base, SymExpr::Add(_));
    let power = exp.as_integer().and_then(|n| n.to_i32());
    let expanded = match power {
        Some(n) if is_sum && n > 1 && n.unsigned_abs() <= MAX_EXPANDED_POWER => {
            debug!(%base, n, "expanding power of sum");
            distribute(&vec![base.clone(); n as usize])
        },
        Some(n) if is_sum && n < -1 && n.unsigned_abs() <= MAX_EXPANDED_POWER => {
            distribute(&vec![base.clone(); n.unsigned_abs() as usize])
                .map(|positive| positive.recip().canonical())
        },
        _ => None,
    };
    expanded.unwrap_or_else(|| base.pow(exp).canonical())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    /// Parses, canonicalizes and expands the given expression.
    fn expanded(input: &str) -> String {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        expand(&SymExpr::try_from(expr).unwrap().canonical()).to_string()
    }

    #[test]
    fn product_of_sums() {
        assert_eq!(expanded("(x + 1)(x - 1)"), "x^2 - 1");
        assert_eq!(expanded("x(y + z)"), "x*y + x*z");
    }

    #[test]
    fn power_of_sum() {
        assert_eq!(expanded("(x + 1)^2"), "x^2 + 2*x + 1");
        assert_eq!(expanded("(x - 2)^3"), "x^3 - 6*x^2 + 12*x - 8");
    }

    #[test]
    fn power_of_sum_combines_as_it_goes() {
        let expr = Parser::new("(x + 1)^40").try_parse_full::<Expr>().unwrap();
        let expanded = expand(&SymExpr::try_from(expr).unwrap().canonical());
        let coefficients = crate::symbolic::poly::coefficients(&expanded, "x").unwrap();
        assert_eq!(coefficients.len(), 41);

        // binomial coefficients C(40, k), highest degree first
        let mut binomial = rug::Integer::from(1);
        for (k, coefficient) in coefficients.iter().enumerate() {
            assert_eq!(coefficient.as_integer(), Some(&binomial), "coefficient of x^{}", 40 - k);
            binomial *= 40 - k as u32;
            binomial /= k as u32 + 1;
        }
    }

    #[test]
    fn oversized_product_is_left_alone() {
        let expr = Parser::new("(a + b + c + d + e + f)^200").try_parse_full::<Expr>().unwrap();
        let canonical = SymExpr::try_from(expr).unwrap().canonical();
        assert_eq!(expand(&canonical), canonical);
    }

    #[test]
    fn negative_power_of_sum() {
        assert_eq!(expanded("1 / (x + 1)^2"), "1/(x^2 + 2*x + 1)");
    }

    #[test]
    fn inside_function_calls() {
        assert_eq!(expanded("sin((x + 1)^2)"), "sin(x^2 + 2*x + 1)");
    }

    #[test]
    fn already_expanded() {
        let expr = Parser::new("x^2 - 5x + 6").try_parse_full::<Expr>().unwrap();
        let canonical = SymExpr::try_from(expr).unwrap().canonical();
        assert_eq!(expand(&canonical), canonical);
    }
}
