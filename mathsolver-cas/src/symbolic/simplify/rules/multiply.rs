//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::symbolic::{
    expr::{Number, SymExpr},
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// `a*(b*c) = a*b*c`
pub fn flatten_product(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, SymExpr::Mul(_))) {
            return None;
        }

        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                SymExpr::Mul(inner) => new_factors.extend(inner.iter().cloned()),
                other => new_factors.push(other.clone()),
            }
        }
        Some(SymExpr::Mul(new_factors))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// A product of zero factors is `1`, and a product of one factor is that factor.
pub fn unwrap_product(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        (factors.len() < 2).then(|| SymExpr::Mul(factors.to_vec()).downgrade())
    })?;

    step_collector.push(Step::Unwrap);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        factors.iter()
            .find(|factor| factor.is_zero())
            .cloned()
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `2*3 = 6`
pub fn multiply_numbers(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().filter(|factor| factor.is_number()).count() < 2 {
            return None;
        }

        let mut product = Number::from(1);
        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor.as_number() {
                Some(n) => product = product.mul(n),
                None => new_factors.push(factor.clone()),
            }
        }
        new_factors.push(SymExpr::from(product));
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::MultiplyNumbers);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(SymExpr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Utility function to extract the base and exponent of an expression. If the expression is not
/// [`SymExpr::Exp`], the exponent is `1`.
///
/// - `a^b` -> `(a, b)`
/// - `a` -> `(a, 1)`
pub(crate) fn split_power(expr: &SymExpr) -> (SymExpr, SymExpr) {
    match expr {
        SymExpr::Exp(lhs, rhs) => (*lhs.clone(), *rhs.clone()),
        expr => (expr.clone(), SymExpr::int(1)),
    }
}

/// Combines like factors.
///
/// `a^b*a^c = a^(b+c)`
/// `a*a = a^2`
/// etc.
///
/// Plain numbers are folded by [`multiply_numbers`] instead, so that `2*sqrt(2)` is kept as is.
pub fn combine_like_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let mut groups: Vec<(SymExpr, SymExpr)> = Vec::with_capacity(factors.len());
        let mut numbers = Vec::new();
        let mut combined = false;

        for factor in factors {
            if factor.is_number() {
                numbers.push(factor.clone());
                continue;
            }

            // bases must be strictly equal
            let (base, exp) = split_power(factor);
            match groups.iter_mut().find(|(other, _)| *other == base) {
                Some((_, sum)) => {
                    // if so, apply a^b*a^c = a^(b+c)
                    *sum = sum.clone() + exp;
                    combined = true;
                },
                None => groups.push((base, exp)),
            }
        }

        if !combined {
            return None;
        }

        let new_factors = groups.into_iter()
            .map(|(base, exp)| base.pow(exp))
            .chain(numbers)
            .collect::<Vec<_>>();
        Some(SymExpr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    flatten_product(expr, step_collector)
        .or_else(|| unwrap_product(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_numbers(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
}
