//! Trigonometric identities.
//!
//! These rules are not part of the canonical form, since there is no single "simplest" way to
//! write most trigonometric expressions. They are applied on request by
//! [`general`](crate::symbolic::simplify::general), on top of the canonical rules.

use crate::symbolic::{
    expr::{Number, Primary, SymExpr},
    simplify::{rules::{do_add, do_multiply}, step::Step},
    step_collector::StepCollector,
};

/// Utility function to extract the numeric coefficient and the non-numeric factors of a term.
///
/// - `3*a*b` -> `(3, [a, b])`
/// - `a` -> `(1, [a])`
/// - `2` -> `(2, [])`
fn split_term(term: &SymExpr) -> (Number, Vec<SymExpr>) {
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
            (coefficient, rest)
        },
        SymExpr::Primary(Primary::Number(n)) => (n.clone(), Vec::new()),
        _ => (Number::from(1), vec![term.clone()]),
    }
}

/// If the factor is a call to the function with the given name, or a power of such a call,
/// returns the argument of the call and the exponent.
///
/// - `sin(x)` -> `(x, 1)`
/// - `sin(x)^2` -> `(x, 2)`
fn call_power(factor: &SymExpr, name: &str) -> Option<(SymExpr, SymExpr)> {
    let (base, exp) = match factor {
        SymExpr::Exp(base, exp) => (base.as_ref(), exp.as_ref().clone()),
        _ => (factor, SymExpr::int(1)),
    };

    match base.as_call(name)? {
        [arg] => Some((arg.clone(), exp)),
        _ => None,
    }
}

/// Returns true if the two lists of factors are equal as multisets.
fn same_factors(lhs: &[SymExpr], rhs: &[SymExpr]) -> bool {
    SymExpr::Mul(lhs.to_vec()) == SymExpr::Mul(rhs.to_vec())
}

/// A term of a sum of the form `c*R*f(u)^2`, where `f` is `sin` or `cos`.
struct SquareTerm {
    /// Index of the term in the sum.
    index: usize,

    /// The numeric coefficient `c`.
    coefficient: Number,

    /// The remaining factors `R`.
    rest: Vec<SymExpr>,

    /// The argument `u`.
    arg: SymExpr,
}

/// Finds all terms of the form `c*R*f(u)^2` in the sum.
fn square_terms(terms: &[SymExpr], name: &str) -> Vec<SquareTerm> {
    let mut found = Vec::new();
    for (index, term) in terms.iter().enumerate() {
        let (coefficient, factors) = split_term(term);
        for (k, factor) in factors.iter().enumerate() {
            let Some((arg, exp)) = call_power(factor, name) else {
                continue;
            };
            if exp.as_integer().is_some_and(|n| *n == 2) {
                let mut rest = factors.clone();
                rest.remove(k);
                found.push(SquareTerm { index, coefficient: coefficient.clone(), rest, arg });
            }
        }
    }
    found
}

/// Replaces the terms at the given indices with the new term.
fn replace_terms(terms: &[SymExpr], remove: [usize; 2], new_term: SymExpr) -> SymExpr {
    let mut new_terms = terms.iter()
        .enumerate()
        .filter(|(idx, _)| !remove.contains(idx))
        .map(|(_, term)| term.clone())
        .collect::<Vec<_>>();
    new_terms.push(new_term);
    SymExpr::Add(new_terms)
}

/// Builds the term `c*R*f`.
fn build_term(coefficient: &Number, rest: &[SymExpr], f: SymExpr) -> SymExpr {
    let mut factors = Vec::with_capacity(rest.len() + 2);
    factors.push(SymExpr::from(coefficient.clone()));
    factors.extend(rest.iter().cloned());
    factors.push(f);
    SymExpr::Mul(factors)
}

/// `c*R*sin(u)^2 + c*R*cos(u)^2 = c*R`
pub fn pythagorean(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let sines = square_terms(terms, "sin");
        let cosines = square_terms(terms, "cos");
        for sin in &sines {
            let found = cosines.iter().find(|cos| {
                cos.index != sin.index
                    && cos.coefficient == sin.coefficient
                    && cos.arg == sin.arg
                    && same_factors(&cos.rest, &sin.rest)
            });
            if let Some(cos) = found {
                let new_term = build_term(&sin.coefficient, &sin.rest, SymExpr::int(1));
                return Some(replace_terms(terms, [sin.index, cos.index], new_term));
            }
        }
        None
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Pythagorean);
    Some(opt)
}

/// `c*R - c*R*sin(u)^2 = c*R*cos(u)^2`
/// `c*R - c*R*cos(u)^2 = c*R*sin(u)^2`
pub fn pythagorean_complement(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        for (name, other) in [("sin", "cos"), ("cos", "sin")] {
            for square in square_terms(terms, name) {
                let negated = square.coefficient.neg();
                let found = terms.iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != square.index)
                    .find(|(_, term)| {
                        let (coefficient, factors) = split_term(term);
                        coefficient == negated && same_factors(&factors, &square.rest)
                    });
                if let Some((idx, _)) = found {
                    let f = SymExpr::call(other, vec![square.arg.clone()]).pow(SymExpr::int(2));
                    let new_term = build_term(&negated, &square.rest, f);
                    return Some(replace_terms(terms, [square.index, idx], new_term));
                }
            }
        }
        None
    })?;

    step_collector.push(Step::PythagoreanComplement);
    Some(opt)
}

/// `c*R*cos(u)^2 - c*R*sin(u)^2 = c*R*cos(2u)`
pub fn double_angle_cosine(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let sines = square_terms(terms, "sin");
        let cosines = square_terms(terms, "cos");
        for cos in &cosines {
            let negated = cos.coefficient.neg();
            let found = sines.iter().find(|sin| {
                sin.index != cos.index
                    && sin.coefficient == negated
                    && sin.arg == cos.arg
                    && same_factors(&sin.rest, &cos.rest)
            });
            if let Some(sin) = found {
                let double = SymExpr::int(2) * cos.arg.clone();
                let new_term = build_term(&cos.coefficient, &cos.rest, SymExpr::call("cos", vec![double]));
                return Some(replace_terms(terms, [cos.index, sin.index], new_term));
            }
        }
        None
    })?;

    step_collector.push(Step::DoubleAngleCosine);
    Some(opt)
}

/// Finds two factors `f(u)^a` and `g(u)^b` in the product, where `f` and `g` are the given
/// functions, and the exponents satisfy the given predicate. Returns the indices of the factors,
/// the argument `u` and the exponent `a`.
fn find_pair(
    factors: &[SymExpr],
    f: &str,
    g: &str,
    exponents_match: impl Fn(&Number, &Number) -> bool,
) -> Option<(usize, usize, SymExpr, SymExpr)> {
    for (i, lhs) in factors.iter().enumerate() {
        let Some((arg, exp)) = call_power(lhs, f) else {
            continue;
        };
        let Some(a) = exp.as_number() else {
            continue;
        };

        for (j, rhs) in factors.iter().enumerate() {
            if i == j {
                continue;
            }
            let Some((other_arg, other_exp)) = call_power(rhs, g) else {
                continue;
            };
            if other_arg == arg && other_exp.as_number().is_some_and(|b| exponents_match(a, b)) {
                return Some((i, j, arg, exp.clone()));
            }
        }
    }
    None
}

/// Replaces the factors at the given indices with the new factor.
fn replace_factors(factors: &[SymExpr], remove: [usize; 2], new_factor: SymExpr) -> SymExpr {
    let mut new_factors = factors.iter()
        .enumerate()
        .filter(|(idx, _)| !remove.contains(idx))
        .map(|(_, factor)| factor.clone())
        .collect::<Vec<_>>();
    new_factors.push(new_factor);
    SymExpr::Mul(new_factors)
}

/// `sin(u)^a/cos(u)^a = tan(u)^a`
pub fn tangent(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (i, j, arg, exp) = find_pair(factors, "sin", "cos", |a, b| a.add(b).is_zero())?;
        let tan = SymExpr::call("tan", vec![arg]).pow(exp);
        Some(replace_factors(factors, [i, j], tan))
    })?;

    step_collector.push(Step::Tangent);
    Some(opt)
}

/// `tan(u)^a*cos(u)^a = sin(u)^a`
pub fn tangent_cosine(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (i, j, arg, exp) = find_pair(factors, "tan", "cos", |a, b| a == b)?;
        let sin = SymExpr::call("sin", vec![arg]).pow(exp);
        Some(replace_factors(factors, [i, j], sin))
    })?;

    step_collector.push(Step::TangentCosine);
    Some(opt)
}

/// `sin(u)*cos(u) = sin(2u)/2`
pub fn double_angle_sine(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let (i, j, arg, _) = find_pair(factors, "sin", "cos", |a, b| a.is_one() && b.is_one())?;
        let double = SymExpr::int(2) * arg;
        let sin = SymExpr::Mul(vec![SymExpr::rational(1, 2), SymExpr::call("sin", vec![double])]);
        Some(replace_factors(factors, [i, j], sin))
    })?;

    step_collector.push(Step::DoubleAngleSine);
    Some(opt)
}

/// Applies all trigonometric identities.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    pythagorean(expr, step_collector)
        .or_else(|| pythagorean_complement(expr, step_collector))
        .or_else(|| double_angle_cosine(expr, step_collector))
        .or_else(|| tangent(expr, step_collector))
        .or_else(|| tangent_cosine(expr, step_collector))
        .or_else(|| double_angle_sine(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{expr::SymExpr, simplify::general};
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    /// Parses the expression and applies the canonical rules and identities.
    fn identities(input: &str) -> String {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        general(&SymExpr::try_from(expr).unwrap(), &mut ()).to_string()
    }

    #[test]
    fn pythagorean() {
        assert_eq!(identities("sin(x)^2 + cos(x)^2"), "1");
        assert_eq!(identities("3y sin(2x)^2 + 3y cos(2x)^2 + 1"), "3*y + 1");
    }

    #[test]
    fn complement() {
        assert_eq!(identities("1 - sin(x)^2"), "cos(x)^2");
        assert_eq!(identities("2 - 2cos(x)^2"), "2*sin(x)^2");
    }

    #[test]
    fn tangent() {
        assert_eq!(identities("sin(x) / cos(x)"), "tan(x)");
        assert_eq!(identities("tan(x) cos(x)"), "sin(x)");
    }

    #[test]
    fn double_angles() {
        assert_eq!(identities("2 sin(x) cos(x)"), "sin(2*x)");
        assert_eq!(identities("cos(x)^2 - sin(x)^2"), "cos(2*x)");
    }

    #[test]
    fn unrelated_arguments_are_kept() {
        assert_eq!(identities("sin(x)^2 + cos(y)^2"), "cos(y)^2 + sin(x)^2");
    }
}
