//! Simplification rules for roots of exact numbers, such as `sqrt(8) = 2*sqrt(2)`.
//!
//! A root is represented as a power with a rational exponent: `sqrt(8)` is `8^(1/2)`. An exact
//! power `n^(a/b)` is in canonical form when `n` is a positive integer with no perfect `b`-th power
//! factor, and `0 < a/b < 1`.

use crate::primitive::{factorize, int};
use crate::symbolic::{
    expr::{Number, SymExpr, IMAGINARY_UNIT},
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::{ops::Pow, Integer, Rational};
use std::cmp::Ordering;

/// Extracts perfect powers from `n^(a/b)`, where `n` is a positive integer.
///
/// Returns [`None`] if nothing can be extracted.
fn extract_root(n: &Integer, exp: &Rational) -> Option<SymExpr> {
    let (numer, denom) = (exp.numer(), exp.denom());

    // n^(a/b) = n^w * n^(r/b), where 0 <= r < b
    let (whole, rem) = numer.clone().div_rem_floor(denom.clone());

    let factors = factorize(n);
    let mut outside = int(1);
    let mut inside = Vec::with_capacity(factors.len());
    let mut gcd = denom.clone();
    for (prime, count) in factors {
        // p^(k*r/b) = p^q * p^(t/b)
        let total = Integer::from(&rem * count);
        let (quotient, remainder) = total.div_rem(denom.clone());
        let quotient = quotient.to_u32()?;
        outside *= Integer::from((&prime).pow(quotient));
        gcd.gcd_mut(&remainder);
        inside.push((prime, remainder));
    }

    // the root can be reduced if all remaining exponents share a factor with the root
    if whole == 0 && outside == 1 && gcd == 1 {
        return None;
    }

    let mut radicand = int(1);
    for (prime, remainder) in inside {
        let power = Integer::from(&remainder / &gcd).to_u32()?;
        radicand *= Integer::from((&prime).pow(power));
    }
    let root = Integer::from(denom / &gcd);

    let mut new_factors = vec![SymExpr::from(Number::from(outside))];
    if whole != 0 {
        new_factors.push(SymExpr::from(Number::from(n.clone())).pow(SymExpr::from(Number::from(whole))));
    }
    if radicand != 1 {
        new_factors.push(
            SymExpr::from(Number::from(radicand))
                .pow(SymExpr::from(Number::from(Rational::from((int(1), root))))),
        );
    }
    Some(SymExpr::Mul(new_factors))
}

/// `sqrt(8) = 2*sqrt(2)`, `8^(2/3) = 4`, `(1/2)^(1/2) = 2^(-1/2)`
pub fn extract_perfect_powers(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let base = lhs.as_rational()?;
        let exp = rhs.as_rational()?;
        if base.cmp0() != Ordering::Greater || *exp.denom() == 1 {
            return None;
        }

        if *base.denom() != 1 {
            // (p/q)^e = p^e * q^-e
            let numer = SymExpr::from(Number::from(base.numer().clone())).pow(rhs.clone());
            let denom = SymExpr::from(Number::from(base.denom().clone())).pow(-rhs.clone());
            return Some(numer * denom);
        }

        extract_root(base.numer(), exp)
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::ExtractRoot);
    Some(opt)
}

/// `(-1)^(1/2) = i`, `(-4)^(1/2) = (-1)^(1/2)*4^(1/2)`
pub fn negative_base(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let base = lhs.as_rational()?;
        let exp = rhs.as_rational()?;
        if base.cmp0() != Ordering::Less || *exp.denom() == 1 {
            return None;
        }

        if *base == -1 {
            // (-1)^(a/2) = i^a
            return (*exp.denom() == 2).then(|| {
                SymExpr::symbol(IMAGINARY_UNIT).pow(SymExpr::from(Number::from(exp.numer().clone())))
            });
        }

        let abs = SymExpr::from(Number::from(base.clone().abs()));
        Some(SymExpr::int(-1).pow(rhs.clone()) * abs.pow(rhs.clone()))
    })?;

    step_collector.push(Step::NegativeBase);
    Some(opt)
}

/// Applies all root rules.
///
/// Root simplification may or may not reduce the complexity of the expression, since it can
/// introduce additional factors. However, it is necessary for like factors to be recognized.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    extract_perfect_powers(expr, step_collector)
        .or_else(|| negative_base(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn square_root_of_perfect_square() {
        let result = extract_perfect_powers(&SymExpr::int(36).sqrt(), &mut ()).unwrap();
        assert_eq!(result, SymExpr::Mul(vec![SymExpr::int(6)]));
    }

    #[test]
    fn square_root_of_prime_is_kept() {
        assert_eq!(extract_perfect_powers(&SymExpr::int(7).sqrt(), &mut ()), None);
    }

    #[test]
    fn fourth_root_is_reduced() {
        // 4^(1/4) = 2^(1/2)
        let expr = SymExpr::int(4).pow(SymExpr::rational(1, 4));
        let result = extract_perfect_powers(&expr, &mut ()).unwrap();
        assert_eq!(result, SymExpr::Mul(vec![SymExpr::int(1), SymExpr::int(2).sqrt()]));
    }

    #[test]
    fn negative_square_root() {
        let expr = SymExpr::int(-1).pow(SymExpr::rational(3, 2));
        let result = negative_base(&expr, &mut ()).unwrap();
        assert_eq!(result, SymExpr::symbol("i").pow(SymExpr::int(3)));
    }
}
