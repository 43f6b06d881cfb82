//! Simplification rules for expressions involving the imaginary unit.

use crate::primitive::int;
use crate::symbolic::{
    expr::{SymExpr, IMAGINARY_UNIT},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};

// i^..
// 0 1 2  3
// 1 i -1 -i
//
// 4 5 6  7
// 1 i -1 -i

/// `i^(4n) = 1`, `i^(4n+1) = i`, `i^(4n+2) = -1`, `i^(4n+3) = -i`
///
/// Negative exponents follow the same cycle: `i^-1 = i^3 = -i`.
pub fn i_pow(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        if !lhs.is_imaginary_unit() {
            return None;
        }

        let (_, rem) = rhs.as_integer()?.clone().div_rem_floor(int(4));
        let i = SymExpr::symbol(IMAGINARY_UNIT);
        match rem.to_u8()? {
            0 => Some(SymExpr::int(1)),
            1 => Some(i),
            2 => Some(SymExpr::int(-1)),
            _ => Some(SymExpr::Mul(vec![SymExpr::int(-1), i])),
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::ImaginaryPower);
    Some(opt)
}

/// Applies all imaginary unit rules.
///
/// All imaginary unit rules will reduce the complexity of the expression.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    i_pow(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn i_to(n: i64) -> Option<SymExpr> {
        i_pow(&SymExpr::symbol(IMAGINARY_UNIT).pow(SymExpr::int(n)), &mut ())
    }

    #[test]
    fn cycle() {
        assert_eq!(i_to(4), Some(SymExpr::int(1)));
        assert_eq!(i_to(5), Some(SymExpr::symbol(IMAGINARY_UNIT)));
        assert_eq!(i_to(2), Some(SymExpr::int(-1)));
        assert_eq!(i_to(-1), Some(SymExpr::Mul(vec![SymExpr::int(-1), SymExpr::symbol(IMAGINARY_UNIT)])));
    }

    #[test]
    fn symbolic_exponent_is_kept() {
        let expr = SymExpr::symbol(IMAGINARY_UNIT).pow(SymExpr::symbol("n"));
        assert_eq!(i_pow(&expr, &mut ()), None);
    }
}
