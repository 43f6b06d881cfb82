//! The computer algebra interface used by the simplifier and equation solver.
//!
//! [`Cas`] groups the primitive operations on expressions behind one trait, so that callers can
//! drive their own algorithms (such as the step-by-step simplification loop) without depending
//! on how each operation is carried out. [`Symbolic`] implements it with the exact algorithms of
//! this crate.

use crate::error::EvaluationFailed;
use crate::numerical::{eval::{eval, RootCache}, from_complex};
use crate::solve::{self, Equation};
use crate::symbolic::{
    collect::collect,
    expand::expand,
    expr::{Primary, SymExpr, ROOT_OF},
    poly,
    simplify::general,
    step_collector::Traced,
};
use mathsolver_error::Error;
use tracing::debug;

/// Operations on expressions that a computer algebra system provides.
pub trait Cas {
    /// Multiplies out products and integer powers of sums.
    fn expand(&self, expr: &SymExpr) -> Result<SymExpr, Error>;

    /// Groups the terms of a sum by the power of the given variable.
    fn collect(&self, expr: &SymExpr, var: &str) -> Result<SymExpr, Error>;

    /// Simplifies the expression, including trigonometric identities.
    fn simplify(&self, expr: &SymExpr) -> Result<SymExpr, Error>;

    /// Returns the coefficients of the expression as a polynomial in the given variable, highest
    /// degree first.
    fn coefficients(&self, expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, Error>;

    /// Solves the polynomial equation for the given variable.
    fn solve(&self, equation: &Equation, var: &str) -> Result<Vec<SymExpr>, Error>;

    /// Replaces parts of the expression that have no exact closed form with approximations.
    fn evaluate(&self, expr: &SymExpr) -> Result<SymExpr, Error>;

    /// Evaluates each of the expressions, as with [`Cas::evaluate`].
    ///
    /// Implementations can override this to share work between the expressions, such as the
    /// roots of a polynomial that several solutions refer to.
    fn evaluate_all(&self, exprs: &[SymExpr]) -> Result<Vec<SymExpr>, Error> {
        exprs.iter().map(|expr| self.evaluate(expr)).collect()
    }
}

/// The exact [`Cas`] of this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symbolic;

/// Replaces every [`ROOT_OF`] placeholder in the expression with its numerical value.
fn resolve_root_of(expr: &SymExpr, cache: &mut RootCache) -> Result<SymExpr, Error> {
    fn resolve_all(exprs: &[SymExpr], cache: &mut RootCache) -> Result<Vec<SymExpr>, Error> {
        exprs.iter()
            .map(|expr| resolve_root_of(expr, cache))
            .collect()
    }

    Ok(match expr {
        SymExpr::Primary(Primary::Call(name, args)) if name == ROOT_OF => {
            cache.root_of(args)
                .and_then(|value| from_complex(&value))
                .ok_or_else(|| Error::unspanned(EvaluationFailed { expr: expr.to_string() }))?
        },
        SymExpr::Primary(Primary::Call(name, args)) => {
            SymExpr::Primary(Primary::Call(name.clone(), resolve_all(args, cache)?))
        },
        SymExpr::Primary(_) => expr.clone(),
        SymExpr::Add(terms) => SymExpr::Add(resolve_all(terms, cache)?),
        SymExpr::Mul(factors) => SymExpr::Mul(resolve_all(factors, cache)?),
        SymExpr::Exp(base, exp) => {
            let base = resolve_root_of(base, cache)?;
            base.pow(resolve_root_of(exp, cache)?)
        },
    })
}

/// Evaluates the expression, resolving its [`ROOT_OF`] placeholders through the given cache.
fn evaluate_with(expr: &SymExpr, cache: &mut RootCache) -> Result<SymExpr, Error> {
    let resolved = resolve_root_of(expr, cache)?;
    if resolved.free_symbols().is_empty() {
        return eval(&resolved)
            .and_then(|value| from_complex(&value))
            .ok_or_else(|| Error::unspanned(EvaluationFailed { expr: expr.to_string() }));
    }

    Ok(resolved.canonical())
}

impl Cas for Symbolic {
    fn expand(&self, expr: &SymExpr) -> Result<SymExpr, Error> {
        Ok(expand(expr))
    }

    fn collect(&self, expr: &SymExpr, var: &str) -> Result<SymExpr, Error> {
        Ok(collect(expr, var))
    }

    fn simplify(&self, expr: &SymExpr) -> Result<SymExpr, Error> {
        let mut traced = Traced::default();
        let simplified = general(expr, &mut traced);
        debug!(%expr, %simplified, rules = traced.count, "simplified expression");
        Ok(simplified)
    }

    fn coefficients(&self, expr: &SymExpr, var: &str) -> Result<Vec<SymExpr>, Error> {
        poly::coefficients(expr, var)
    }

    fn solve(&self, equation: &Equation, var: &str) -> Result<Vec<SymExpr>, Error> {
        solve::solve(equation, var)
    }

    /// Expressions without free symbols are evaluated to a number. Otherwise, only the
    /// [`ROOT_OF`] placeholders in the expression are.
    fn evaluate(&self, expr: &SymExpr) -> Result<SymExpr, Error> {
        evaluate_with(expr, &mut RootCache::default())
    }

    fn evaluate_all(&self, exprs: &[SymExpr]) -> Result<Vec<SymExpr>, Error> {
        let mut cache = RootCache::default();
        exprs.iter().map(|expr| evaluate_with(expr, &mut cache)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        SymExpr::try_from(expr).unwrap().canonical()
    }

    #[test]
    fn expand_and_collect() {
        let cas = Symbolic;
        let expanded = cas.expand(&parse("x(y + z)")).unwrap();
        assert_eq!(expanded.to_string(), "x*y + x*z");
        assert_eq!(cas.collect(&expanded, "x").unwrap().to_string(), "x*(y + z)");
    }

    #[test]
    fn simplify_uses_identities() {
        let cas = Symbolic;
        assert_eq!(cas.simplify(&parse("sin(x)^2 + cos(x)^2")).unwrap().to_string(), "1");
    }

    #[test]
    fn evaluate_closed_expression() {
        let cas = Symbolic;
        assert_eq!(cas.evaluate(&parse("1/4 + 1/4")).unwrap().to_string(), "0.5");
    }

    #[test]
    fn evaluate_root_of_inside_expression() {
        let cas = Symbolic;
        let x = SymExpr::symbol("x");
        let poly = x.clone().pow(SymExpr::int(5)) - x + SymExpr::int(1);
        let root = SymExpr::call(ROOT_OF, vec![poly, SymExpr::int(0)]);
        let expr = (SymExpr::symbol("y") * root).canonical();
        let evaluated = cas.evaluate(&expr).unwrap();
        assert!(!evaluated.contains_call(ROOT_OF));
        assert!(evaluated.contains_symbol("y"));
    }

    #[test]
    fn evaluate_undefined() {
        let cas = Symbolic;
        let err = cas.evaluate(&parse("log(0)")).unwrap_err();
        assert_eq!(err.to_string(), "cannot evaluate `log(0)` numerically");
    }

    #[test]
    fn evaluate_all_roots_of_one_polynomial() {
        let cas = Symbolic;
        // x^3 + x + 1, one real root and two complex roots
        let x = SymExpr::symbol("x");
        let poly = x.clone().pow(SymExpr::int(3)) + x + SymExpr::int(1);
        let roots = (0..3)
            .map(|k| SymExpr::call(ROOT_OF, vec![poly.clone(), SymExpr::int(k)]))
            .collect::<Vec<_>>();

        let evaluated = cas.evaluate_all(&roots).unwrap();
        assert_eq!(evaluated.len(), 3);
        for (root, value) in roots.iter().zip(&evaluated) {
            assert_eq!(value, &cas.evaluate(root).unwrap());
            assert!(!value.contains_call(ROOT_OF));
        }
    }
}
