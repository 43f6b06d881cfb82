//! Simplification rules for distributing a number over a sum.
//!
//! Only numeric factors are distributed; `x*(y + z)` is left as it is, since distributing it would
//! make the expression more complex. Full distribution is done by
//! [`expand`](crate::symbolic::expand::expand).

use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `n*(a + b) = n*a + n*b`, where `n` is a number
pub fn distribute_number(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let [lhs, rhs] = factors else {
            return None;
        };

        let (number, terms) = match (lhs, rhs) {
            (SymExpr::Add(terms), other) | (other, SymExpr::Add(terms)) => (other.as_number()?, terms),
            _ => return None,
        };

        let new_terms = terms.iter()
            .map(|term| SymExpr::from(number.clone()) * term.clone())
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributeNumber);
    Some(opt)
}

/// Applies all distribution rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    distribute_number(expr, step_collector)
}
