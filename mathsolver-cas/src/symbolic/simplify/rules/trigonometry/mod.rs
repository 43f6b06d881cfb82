//! Simplification rules for trigonometric functions.
//!
//! The canonical rules evaluate trigonometric functions at rational multiples of `pi` with
//! well-known exact values, and apply the odd / even symmetry of each function. The identities in
//! [`identities`] are not canonical, and are only applied by
//! [`general`](crate::symbolic::simplify::general).

pub mod identities;
mod table;

use crate::primitive::rational;
use crate::symbolic::{
    expr::{Primary, SymExpr, PI},
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};
use rug::Rational;

/// Functions where `f(-x) = -f(x)`.
const ODD_FUNCTIONS: &[&str] = &["sin", "tan", "cot", "csc", "asin", "atan", "sinh", "tanh"];

/// Functions where `f(-x) = f(x)`.
const EVEN_FUNCTIONS: &[&str] = &["cos", "sec", "cosh"];

/// If the argument is a rational multiple of `pi`, returns the multiple, normalized to the range
/// `[0, 2)`.
///
/// - `0` -> `0`
/// - `pi` -> `1`
/// - `-pi/6` -> `11/6`
fn pi_multiple(arg: &SymExpr) -> Option<Rational> {
    let multiple = match arg {
        SymExpr::Primary(Primary::Number(_)) if arg.is_zero() => Rational::new(),
        SymExpr::Primary(Primary::Symbol(sym)) if sym == PI => Rational::from(1),
        SymExpr::Mul(factors) => match factors.as_slice() {
            [lhs, rhs] if rhs.as_symbol() == Some(PI) => lhs.as_rational()?.clone(),
            [lhs, rhs] if lhs.as_symbol() == Some(PI) => rhs.as_rational()?.clone(),
            _ => return None,
        },
        _ => return None,
    };

    Some(reduce(multiple))
}

/// Reduces a multiple of `pi` to the range `[0, 2)`.
fn reduce(multiple: Rational) -> Rational {
    let turns = Rational::from(&multiple / 2u32).floor();
    multiple - turns * 2u32
}

/// Returns the exact value of `sin(pi*angle)`, where `0 <= angle < 2`.
fn sin_value(angle: Rational) -> Option<SymExpr> {
    if angle >= 1 {
        // sin(x + pi) = -sin(x)
        return sin_value(angle - 1u32).map(|value| -value);
    }

    // sin(pi - x) = sin(x)
    let half = rational(1, 2);
    let angle = if angle > half { Rational::from(1) - angle } else { angle };
    table::lookup(&angle)
}

/// Returns the exact value of `cos(pi*angle)`, where `0 <= angle < 2`.
fn cos_value(angle: Rational) -> Option<SymExpr> {
    // cos(x) = sin(x + pi/2)
    sin_value(reduce(angle + rational(1, 2)))
}

/// Returns the exact value of `tan(pi*angle)`, or [`None`] if it is undefined.
fn tan_value(angle: Rational) -> Option<SymExpr> {
    sin_value(angle.clone())?.checked_div(&cos_value(angle)?).ok()
}

/// Returns the exact value of `cot(pi*angle)`, or [`None`] if it is undefined.
fn cot_value(angle: Rational) -> Option<SymExpr> {
    cos_value(angle.clone())?.checked_div(&sin_value(angle)?).ok()
}

/// Returns the exact value of `sec(pi*angle)`, or [`None`] if it is undefined.
fn sec_value(angle: Rational) -> Option<SymExpr> {
    SymExpr::int(1).checked_div(&cos_value(angle)?).ok()
}

/// Returns the exact value of `csc(pi*angle)`, or [`None`] if it is undefined.
fn csc_value(angle: Rational) -> Option<SymExpr> {
    SymExpr::int(1).checked_div(&sin_value(angle)?).ok()
}

/// Evaluates the function with the given name using the given evaluation function, if its
/// argument is a rational multiple of `pi` with a known exact value.
fn do_trig(
    expr: &SymExpr,
    name: &str,
    value: fn(Rational) -> Option<SymExpr>,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<SymExpr> {
    let opt = do_call(expr, name, |args| {
        match args {
            [arg] => value(pi_multiple(arg)?),
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::TrigValue);
    Some(opt)
}

/// `sin(pi/6) = 1/2`
pub fn sin(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "sin", sin_value, step_collector)
}

/// `cos(pi) = -1`
pub fn cos(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "cos", cos_value, step_collector)
}

/// `tan(pi/4) = 1`
pub fn tan(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "tan", tan_value, step_collector)
}

/// `cot(pi/4) = 1`
pub fn cot(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "cot", cot_value, step_collector)
}

/// `sec(pi/3) = 2`
pub fn sec(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "sec", sec_value, step_collector)
}

/// `csc(pi/6) = 2`
pub fn csc(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    do_trig(expr, "csc", csc_value, step_collector)
}

/// If the argument has a negative numeric coefficient, returns the negated argument.
///
/// - `-2` -> `2`
/// - `-x` -> `x`
/// - `-x + 1` -> [`None`]
fn negated_argument(arg: &SymExpr) -> Option<SymExpr> {
    match arg {
        SymExpr::Primary(Primary::Number(n)) if n.is_negative() => Some(SymExpr::from(n.neg())),
        SymExpr::Mul(factors) if factors.iter().any(|factor| {
            factor.as_number().is_some_and(|n| n.is_negative())
        }) => Some(-arg.clone()),
        _ => None,
    }
}

/// `sin(-x) = -sin(x)`, `cos(-x) = cos(x)`
pub fn parity(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(name, args)) = expr else {
        return None;
    };
    let [arg] = args.as_slice() else {
        return None;
    };

    let result = if ODD_FUNCTIONS.contains(&name.as_str()) {
        -SymExpr::call(name.clone(), vec![negated_argument(arg)?])
    } else if EVEN_FUNCTIONS.contains(&name.as_str()) {
        SymExpr::call(name.clone(), vec![negated_argument(arg)?])
    } else {
        return None;
    };

    step_collector.push(Step::TrigParity);
    Some(result)
}

/// Applies all trigonometric rules.
///
/// All trigonometric rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    sin(expr, step_collector)
        .or_else(|| cos(expr, step_collector))
        .or_else(|| tan(expr, step_collector))
        .or_else(|| cot(expr, step_collector))
        .or_else(|| sec(expr, step_collector))
        .or_else(|| csc(expr, step_collector))
        .or_else(|| parity(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pi_times(numerator: i64, denominator: i64) -> SymExpr {
        SymExpr::Mul(vec![SymExpr::rational(numerator, denominator), SymExpr::symbol(PI)])
    }

    #[test]
    fn multiples_are_normalized() {
        assert_eq!(pi_multiple(&pi_times(-1, 6)), Some(rational(11, 6)));
        assert_eq!(pi_multiple(&pi_times(9, 4)), Some(rational(1, 4)));
        assert_eq!(pi_multiple(&SymExpr::symbol(PI)), Some(rational(1, 1)));
        assert_eq!(pi_multiple(&SymExpr::symbol("x")), None);
    }

    #[test]
    fn values_by_symmetry() {
        assert_eq!(sin_value(rational(7, 6)).map(|v| v.canonical()), Some(SymExpr::rational(-1, 2)));
        assert_eq!(cos_value(rational(2, 3)).map(|v| v.canonical()), Some(SymExpr::rational(-1, 2)));
        assert_eq!(sin_value(rational(1, 5)), None);
    }

    #[test]
    fn undefined_tangent() {
        assert_eq!(tan_value(rational(1, 2)), None);
        assert_eq!(sec_value(rational(0, 1)), Some(SymExpr::int(1)));
    }

    #[test]
    fn odd_and_even() {
        let minus_x = SymExpr::Mul(vec![SymExpr::int(-1), SymExpr::symbol("x")]);
        let sin = SymExpr::call("sin", vec![minus_x.clone()]);
        assert_eq!(parity(&sin, &mut ()).unwrap().canonical().to_string(), "-sin(x)");

        let cos = SymExpr::call("cos", vec![minus_x]);
        assert_eq!(parity(&cos, &mut ()).unwrap().canonical().to_string(), "cos(x)");
    }
}
