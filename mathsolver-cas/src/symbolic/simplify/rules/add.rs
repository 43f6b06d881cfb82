//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    expr::{Number, SymExpr},
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// `a + (b + c) = a + b + c`
pub fn flatten_sum(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, SymExpr::Add(_))) {
            return None;
        }

        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                SymExpr::Add(inner) => new_terms.extend(inner.iter().cloned()),
                other => new_terms.push(other.clone()),
            }
        }
        Some(SymExpr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// A sum of zero terms is `0`, and a sum of one term is that term.
pub fn unwrap_sum(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        (terms.len() < 2).then(|| SymExpr::Add(terms.to_vec()).downgrade())
    })?;

    step_collector.push(Step::Unwrap);
    Some(opt)
}

/// `2 + 3 = 5`
pub fn add_numbers(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        if terms.iter().filter(|term| term.is_number()).count() < 2 {
            return None;
        }

        let mut sum = Number::from(0);
        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term.as_number() {
                Some(n) => sum = sum.add(n),
                None => new_terms.push(term.clone()),
            }
        }
        new_terms.push(SymExpr::from(sum));
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::AddNumbers);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(SymExpr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Utility function to extract the numeric coefficient and the remaining factors of a term. If
/// the term has no numeric factor, the coefficient is 1.
///
/// - `3*a` -> `(3, a)`
/// - `1/4*a*b` -> `(1/4, a*b)`
/// - `sqrt(6)` -> `(1, sqrt(6))`
pub(crate) fn split_coefficient(term: &SymExpr) -> (Number, SymExpr) {
    match term {
        SymExpr::Mul(factors) => {
            let mut coefficient = Number::from(1);
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                match factor.as_number() {
                    Some(n) => coefficient = coefficient.mul(n),
                    None => rest.push(factor.clone()),
                }
            }
            (coefficient, SymExpr::Mul(rest).downgrade())
        },
        _ => (Number::from(1), term.clone()),
    }
}

/// Combines like terms.
///
/// `a+a = 2a`
/// `a+a+a = 3a`
/// `2a+3a = 5a`
/// etc.
pub fn combine_like_terms(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let mut groups: Vec<(Number, SymExpr)> = Vec::with_capacity(terms.len());
        let mut numbers = Vec::new();
        let mut combined = false;

        for term in terms {
            if term.is_number() {
                numbers.push(term.clone());
                continue;
            }

            // factors must be strictly equal
            let (coefficient, rest) = split_coefficient(term);
            match groups.iter_mut().find(|(_, other)| *other == rest) {
                Some((sum, _)) => {
                    // if so, apply a*n + a*m = (n+m)*a
                    *sum = sum.add(&coefficient);
                    combined = true;
                },
                None => groups.push((coefficient, rest)),
            }
        }

        if !combined {
            return None;
        }

        let new_terms = groups.into_iter()
            .filter(|(coefficient, _)| !coefficient.is_zero())
            .map(|(coefficient, rest)| {
                if coefficient.is_one() {
                    rest
                } else {
                    SymExpr::from(coefficient) * rest
                }
            })
            .chain(numbers)
            .collect::<Vec<_>>();
        Some(SymExpr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
///
/// All addition rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten_sum(expr, step_collector)
        .or_else(|| unwrap_sum(expr, step_collector))
        .or_else(|| add_numbers(expr, step_collector))
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}
