//! Simplification rules for logarithms, absolute values, inverse trigonometric and hyperbolic
//! functions, and calls with approximate arguments.

use crate::numerical::{eval::eval, from_complex};
use crate::symbolic::{
    expr::{Primary, SymExpr, EULER, PI, ROOT_OF},
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};

/// `log(1) = 0`, `log(E) = 1`
pub fn log_value(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "log", |args| {
        let [arg] = args else {
            return None;
        };

        if arg.is_one() {
            Some(SymExpr::int(0))
        } else if arg.as_symbol() == Some(EULER) {
            Some(SymExpr::int(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::LogValue);
    Some(opt)
}

/// `abs(-2) = 2`
pub fn abs_value(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_call(expr, "abs", |args| {
        let [arg] = args else {
            return None;
        };

        arg.as_number().map(|n| SymExpr::from(n.abs()))
    })?;

    step_collector.push(Step::AbsValue);
    Some(opt)
}

/// Returns `pi*r`.
fn pi_times(r: SymExpr) -> SymExpr {
    SymExpr::Mul(vec![r, SymExpr::symbol(PI)])
}

/// Exact values of inverse trigonometric and hyperbolic functions.
///
/// `asin(1) = pi/2`, `acos(0) = pi/2`, `atan(1) = pi/4`, `cosh(0) = 1`, etc.
pub fn inverse_trig_value(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(name, args)) = expr else {
        return None;
    };
    let [arg] = args.as_slice() else {
        return None;
    };
    let value = arg.as_rational()?;

    let result = match name.as_str() {
        "asin" | "atan" | "sinh" | "tanh" if *value == 0 => SymExpr::int(0),
        "cosh" if *value == 0 => SymExpr::int(1),
        "asin" if *value == 1 => pi_times(SymExpr::rational(1, 2)),
        "asin" if *value == -1 => pi_times(SymExpr::rational(-1, 2)),
        "acos" if *value == 1 => SymExpr::int(0),
        "acos" if *value == 0 => pi_times(SymExpr::rational(1, 2)),
        "acos" if *value == -1 => SymExpr::symbol(PI),
        "atan" if *value == 1 => pi_times(SymExpr::rational(1, 4)),
        "atan" if *value == -1 => pi_times(SymExpr::rational(-1, 4)),
        _ => return None,
    };

    step_collector.push(Step::InverseTrigValue);
    Some(result)
}

/// `sin(0.5) = 0.479425538604203`
///
/// A call whose arguments are all numbers, at least one of them approximate, is evaluated
/// numerically.
pub fn evaluate_call(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let SymExpr::Primary(Primary::Call(name, args)) = expr else {
        return None;
    };
    if name == ROOT_OF
        || !args.iter().all(SymExpr::is_number)
        || !args.iter().any(SymExpr::is_float) {
        return None;
    }

    let result = from_complex(&eval(expr)?)?;
    step_collector.push(Step::EvaluateCall);
    Some(result)
}

/// Applies all function rules.
///
/// All function rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    log_value(expr, step_collector)
        .or_else(|| abs_value(expr, step_collector))
        .or_else(|| inverse_trig_value(expr, step_collector))
        .or_else(|| evaluate_call(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::expr::number::approx;
    use pretty_assertions::assert_eq;

    #[test]
    fn logarithm_values() {
        let log_one = SymExpr::call("log", vec![SymExpr::int(1)]);
        assert_eq!(log_value(&log_one, &mut ()), Some(SymExpr::int(0)));

        let log_x = SymExpr::call("log", vec![SymExpr::symbol("x")]);
        assert_eq!(log_value(&log_x, &mut ()), None);
    }

    #[test]
    fn inverse_values() {
        let acos = SymExpr::call("acos", vec![SymExpr::int(-1)]);
        assert_eq!(inverse_trig_value(&acos, &mut ()), Some(SymExpr::symbol(PI)));

        let asin = SymExpr::call("asin", vec![SymExpr::rational(1, 3)]);
        assert_eq!(inverse_trig_value(&asin, &mut ()), None);
    }

    #[test]
    fn approximate_argument() {
        let expr = SymExpr::call("sin", vec![SymExpr::from(approx(0.5))]);
        let mut steps = Vec::new();
        let result = evaluate_call(&expr, &mut steps).unwrap();
        assert_eq!(result.to_string(), "0.479425538604203");
        assert_eq!(steps, vec![Step::EvaluateCall]);
    }

    #[test]
    fn exact_argument_is_kept() {
        let expr = SymExpr::call("sin", vec![SymExpr::int(1)]);
        assert_eq!(evaluate_call(&expr, &mut ()), None);
    }
}
