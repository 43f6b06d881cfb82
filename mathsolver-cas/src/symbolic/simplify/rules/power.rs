//! Simplification rules for powers.

use crate::symbolic::{
    expr::{SymExpr, EULER},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use std::cmp::Ordering;

/// `a^0 = 1`
pub fn power_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |_, rhs| {
        // only an exact zero; `a^0.0` is left to `power_numbers`
        if rhs.as_rational()?.cmp0() == Ordering::Equal {
            Some(SymExpr::int(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.is_one().then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `1^a = 1`
pub fn one_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, _| {
        lhs.is_one().then(|| SymExpr::int(1))
    })?;

    step_collector.push(Step::OnePower);
    Some(opt)
}

/// `0^a = 0`, where `a` is a positive number
pub fn zero_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        if lhs.is_zero() && rhs.as_number()?.cmp0() == Ordering::Greater {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::ZeroPower);
    Some(opt)
}

/// `2^3 = 8`, `(2/3)^-2 = 9/4`, `2^0.5 = 1.414..`
///
/// Exact numbers are only raised to integer powers; roots of exact numbers are handled by
/// [`root`](super::root).
pub fn power_numbers(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let base = lhs.as_number()?;
        let exp = rhs.as_number()?;
        if let Some(exp) = exp.as_integer() {
            return base.pow_int(exp).map(SymExpr::from);
        }

        if base.is_float() || exp.is_float() {
            base.pow_float(exp).map(SymExpr::from)
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerNumbers);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, where `n` is an integer
pub fn power_of_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let SymExpr::Exp(base, exp) = lhs else {
            return None;
        };
        rhs.as_integer()?;

        Some(base.as_ref().clone().pow(exp.as_ref().clone() * rhs.clone()))
    })?;

    step_collector.push(Step::PowerOfPower);
    Some(opt)
}

/// `(a*b)^n = a^n*b^n`, where `n` is an integer
///
/// For other exponents, only a positive numeric factor is pulled out: `(4*x)^b = 4^b*x^b`.
pub fn distribute_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let SymExpr::Mul(factors) = lhs else {
            return None;
        };

        if rhs.as_integer().is_some() {
            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(rhs.clone()))
                .collect();
            return Some(SymExpr::Mul(new_factors));
        }

        let idx = factors.iter()
            .position(|factor| factor.as_number().is_some_and(|n| n.cmp0() == Ordering::Greater))?;
        let mut rest = factors.clone();
        let number = rest.remove(idx);
        Some(number.pow(rhs.clone()) * SymExpr::Mul(rest).downgrade().pow(rhs.clone()))
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// `E^log(a) = a`
pub fn exp_log(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        if lhs.as_symbol()? != EULER {
            return None;
        }

        match rhs.as_call("log")? {
            [arg] => Some(arg.clone()),
            _ => None,
        }
    })?;

    step_collector.push(Step::ExpLog);
    Some(opt)
}

/// Applies all power rules.
///
/// All power rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| one_power(expr, step_collector))
        .or_else(|| zero_power(expr, step_collector))
        .or_else(|| power_numbers(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
        .or_else(|| distribute_power(expr, step_collector))
        .or_else(|| exp_log(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn trivial_powers() {
        assert_eq!(power_zero(&x().pow(SymExpr::int(0)), &mut ()), Some(SymExpr::int(1)));
        assert_eq!(power_one(&x().pow(SymExpr::int(1)), &mut ()), Some(x()));
        assert_eq!(one_power(&SymExpr::int(1).pow(x()), &mut ()), Some(SymExpr::int(1)));
        assert_eq!(zero_power(&SymExpr::int(0).pow(x()), &mut ()), None);
    }

    #[test]
    fn exact_roots_are_not_numbers() {
        let expr = SymExpr::int(2).sqrt();
        assert_eq!(power_numbers(&expr, &mut ()), None);
    }

    #[test]
    fn product_to_integer_power() {
        let expr = SymExpr::Mul(vec![SymExpr::int(2), x()]).pow(SymExpr::int(3));
        let mut steps = Vec::new();
        let result = distribute_power(&expr, &mut steps).unwrap();
        assert_eq!(result, SymExpr::Mul(vec![
            SymExpr::int(2).pow(SymExpr::int(3)),
            x().pow(SymExpr::int(3)),
        ]));
        assert_eq!(steps, vec![Step::DistributePower]);
    }
}
