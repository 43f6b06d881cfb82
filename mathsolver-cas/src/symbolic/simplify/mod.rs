//! Functions to bring expressions into canonical form.
//!
//! Simplification is done by applying a set of rules to every node of an expression, bottom-up.
//! Each rule is a function that accepts an expression whose children are already simplified, and
//! returns `Some(expr)` with the rewritten expression if the rule applies. When a rule fires, the
//! rewritten node is simplified again, until no rule applies to it.
//!
//! Two rule sets exist:
//!
//! - [`rules::all`], the canonical rules, applied by [`simplify`] after every construction of an
//! expression. They never make an expression more complex.
//! - [`rules::all_general`], which adds trigonometric identities on top of the canonical rules,
//! applied by [`general`].

pub mod rules;
pub mod step;

use crate::symbolic::{
    expr::{Primary, SymExpr},
    step_collector::StepCollector,
};
use step::Step;
use tracing::warn;

/// The maximum number of times rules may rewrite a single node. Reaching this limit means that
/// two rules undo each other; the node is returned as it stands.
const MAX_REWRITES: usize = 256;

/// A set of simplification rules.
type Rules = fn(&SymExpr, &mut dyn StepCollector<Step>) -> Option<SymExpr>;

/// Simplifies the children of the expression, then applies the rules to the expression itself.
fn simplify_node(expr: &SymExpr, rules: Rules, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut current = simplify_children(expr, rules, step_collector);
    for _ in 0..MAX_REWRITES {
        match rules(&current, step_collector) {
            Some(next) => current = simplify_children(&next, rules, step_collector),
            None => return current,
        }
    }

    warn!(expr = %current, "simplification rules did not settle");
    current
}

/// Simplifies each child of the expression.
fn simplify_children(expr: &SymExpr, rules: Rules, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut simplify = |child: &SymExpr| simplify_node(child, rules, step_collector);
    match expr {
        SymExpr::Primary(Primary::Call(name, args)) => {
            SymExpr::Primary(Primary::Call(name.clone(), args.iter().map(&mut simplify).collect()))
        },
        SymExpr::Primary(primary) => SymExpr::Primary(primary.clone()),
        SymExpr::Add(terms) => SymExpr::Add(terms.iter().map(&mut simplify).collect()),
        SymExpr::Mul(factors) => SymExpr::Mul(factors.iter().map(&mut simplify).collect()),
        SymExpr::Exp(base, exp) => {
            let base = simplify(&**base);
            let exp = simplify(&**exp);
            SymExpr::Exp(Box::new(base), Box::new(exp))
        },
    }
}

/// Brings the expression into canonical form.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    simplify_with(expr, &mut ())
}

/// Brings the expression into canonical form, reporting each rule applied to the given
/// [`StepCollector`].
pub fn simplify_with(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    simplify_node(expr, rules::all, step_collector)
}

/// Brings the expression into canonical form, returning the list of rules applied.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

/// Simplifies the expression with the canonical rules and trigonometric identities, reporting
/// each rule applied to the given [`StepCollector`].
pub fn general(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    simplify_node(expr, rules::all_general, step_collector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    /// Parses and simplifies the given expression.
    fn simplified(input: &str) -> String {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        simplify(&SymExpr::try_from(expr).unwrap()).to_string()
    }

    #[test]
    fn combine_like_terms() {
        assert_eq!(simplified("x + x + x"), "3*x");
        assert_eq!(simplified("2x + 3 - 7"), "2*x - 4");
        assert_eq!(simplified("x - x"), "0");
    }

    #[test]
    fn combine_like_factors() {
        assert_eq!(simplified("x * x^2"), "x^3");
        assert_eq!(simplified("x / x"), "1");
        assert_eq!(simplified("2x * 3y"), "6*x*y");
    }

    #[test]
    fn numbers() {
        assert_eq!(simplified("1/3 + 1/6"), "1/2");
        assert_eq!(simplified("2^10"), "1024");
        assert_eq!(simplified("(2/3)^-2"), "9/4");
        assert_eq!(simplified("0.5 + 1"), "1.5");
    }

    #[test]
    fn distributes_numbers_only() {
        assert_eq!(simplified("2(x + 1)"), "2*x + 2");
        assert_eq!(simplified("-(x - 3)"), "-x + 3");
        assert_eq!(simplified("(x + 1)(x - 1)"), "(x - 1)*(x + 1)");
    }

    #[test]
    fn roots() {
        assert_eq!(simplified("sqrt(8)"), "2*sqrt(2)");
        assert_eq!(simplified("sqrt(4)"), "2");
        assert_eq!(simplified("sqrt(-4)"), "2*i");
        assert_eq!(simplified("1 / sqrt(2)"), "sqrt(2)/2");
        assert_eq!(simplified("8^(2/3)"), "4");
        assert_eq!(simplified("sqrt(x)^2"), "x");
    }

    #[test]
    fn imaginary_unit() {
        assert_eq!(simplified("i^2"), "-1");
        assert_eq!(simplified("i^7"), "-i");
        assert_eq!(simplified("I * i"), "-1");
    }

    #[test]
    fn trigonometric_values() {
        assert_eq!(simplified("sin(pi/6)"), "1/2");
        assert_eq!(simplified("cos(pi)"), "-1");
        assert_eq!(simplified("sin(pi/3)"), "sqrt(3)/2");
        assert_eq!(simplified("tan(pi/4)"), "1");
        assert_eq!(simplified("sin(-x)"), "-sin(x)");
        assert_eq!(simplified("cos(-2x)"), "cos(2*x)");
    }

    #[test]
    fn logarithms() {
        assert_eq!(simplified("ln(1)"), "0");
        assert_eq!(simplified("log(E)"), "1");
        assert_eq!(simplified("exp(ln(x))"), "x");
    }

    #[test]
    fn canonical_form_is_fixed_point() {
        let expr = Parser::new("3x^2 y - 2(x + y)^2 + sin(pi/4) x").try_parse_full::<Expr>().unwrap();
        let once = simplify(&SymExpr::try_from(expr).unwrap());
        let (twice, steps) = simplify_with_steps(&once);
        assert_eq!(once, twice);
        assert!(steps.is_empty());
    }

    #[test]
    fn steps_are_reported() {
        let expr = SymExpr::Add(vec![SymExpr::symbol("x"), SymExpr::symbol("x")]);
        let (_, steps) = simplify_with_steps(&expr);
        assert_eq!(steps, vec![Step::CombineLikeTerms]);
    }
}
