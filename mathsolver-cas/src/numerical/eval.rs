//! Numerical evaluation of symbolic expressions.

use crate::numerical::roots::roots;
use crate::primitive::{complex, float, PRECISION};
use crate::symbolic::{
    expr::{Number, Primary, SymExpr, EULER, IMAGINARY_UNIT, PI, ROOT_OF},
    poly::coefficients,
};
use rug::{float::Constant, ops::Pow, Complex, Float};

/// Returns the value of a number.
fn eval_number(n: &Number) -> Complex {
    complex(n.to_float())
}

/// Returns the value of a constant, or [`None`] if the symbol is a free variable.
fn eval_symbol(sym: &str) -> Option<Complex> {
    match sym {
        PI => Some(complex(Float::with_val(PRECISION, Constant::Pi))),
        EULER => Some(complex(float(1).exp())),
        IMAGINARY_UNIT => Some(Complex::with_val(PRECISION, (0, 1))),
        _ => None,
    }
}

/// Returns the numerical roots of the polynomial of a `RootOf(p, k)` placeholder, in the order
/// the index `k` refers to.
fn root_of_values(poly: &SymExpr) -> Option<Vec<Complex>> {
    // the polynomial has at most one free symbol
    let var = {
        let mut symbols = poly.free_symbols().into_iter();
        let var = symbols.next().unwrap_or_else(|| "x".to_string());
        if symbols.next().is_some() {
            return None;
        }
        var
    };

    let coefficients = coefficients(poly, &var).ok()?
        .iter()
        .map(eval)
        .collect::<Option<Vec<_>>>()?;
    roots(&coefficients)
}

/// Numerical values of `RootOf(p, k)` placeholders.
///
/// The roots of each distinct polynomial are computed once, however many of its placeholders are
/// evaluated through the same cache.
#[derive(Debug, Default)]
pub struct RootCache {
    polys: Vec<(SymExpr, Option<Vec<Complex>>)>,
}

impl RootCache {
    /// Evaluates `RootOf(p, k)` given its arguments, the polynomial `p` and the index `k`.
    pub fn root_of(&mut self, args: &[SymExpr]) -> Option<Complex> {
        let [poly, index] = args else {
            return None;
        };
        let index = index.as_integer()?.to_usize()?;

        let position = match self.polys.iter().position(|(cached, _)| cached == poly) {
            Some(position) => position,
            None => {
                self.polys.push((poly.clone(), root_of_values(poly)));
                self.polys.len() - 1
            },
        };
        self.polys[position].1.as_ref()?.get(index).cloned()
    }
}

/// Evaluates a call to the function with the given name.
fn eval_call(name: &str, args: &[SymExpr]) -> Option<Complex> {
    if name == ROOT_OF {
        return RootCache::default().root_of(args);
    }

    let [arg] = args else {
        return None;
    };
    let n = eval(arg)?;

    Some(match name {
        "sin" => n.sin(),
        "cos" => n.cos(),
        "tan" => n.tan(),
        "cot" => n.tan().recip(),
        "sec" => n.cos().recip(),
        "csc" => n.sin().recip(),
        "asin" => n.asin(),
        "acos" => n.acos(),
        "atan" => n.atan(),
        "sinh" => n.sinh(),
        "cosh" => n.cosh(),
        "tanh" => n.tanh(),
        "log" => {
            if n.is_zero() {
                return None;
            }
            n.ln()
        },
        "exp" => n.exp(),
        "sqrt" => n.sqrt(),
        "abs" => n.abs(),
        _ => return None,
    })
}

/// Evaluates `base^exp`.
fn eval_power(base: &SymExpr, exp: &SymExpr) -> Option<Complex> {
    let base = eval(base)?;

    // integer powers are computed exactly with repeated multiplication
    if let Some(n) = exp.as_integer().and_then(|n| n.to_i32()) {
        if n < 0 && base.is_zero() {
            return None;
        }
        return Some(base.pow(n));
    }

    let exp = eval(exp)?;
    if base.is_zero() {
        // 0^a = 0 for positive a
        return (exp.imag().is_zero() && exp.real().is_sign_positive() && !exp.real().is_zero())
            .then(|| complex(0));
    }
    Some(base.pow(exp))
}

/// Numerically evaluates the expression.
///
/// Returns [`None`] if the expression contains free symbols, unknown functions, or if its value
/// is undefined or not finite (such as `1/0` or `log(0)`).
pub fn eval(expr: &SymExpr) -> Option<Complex> {
    let value = match expr {
        SymExpr::Primary(Primary::Number(n)) => eval_number(n),
        SymExpr::Primary(Primary::Symbol(sym)) => eval_symbol(sym)?,
        SymExpr::Primary(Primary::Call(name, args)) => eval_call(name, args)?,
        SymExpr::Add(terms) => {
            let mut sum = complex(0);
            for term in terms {
                sum += eval(term)?;
            }
            sum
        },
        SymExpr::Mul(factors) => {
            let mut product = complex(1);
            for factor in factors {
                product *= eval(factor)?;
            }
            product
        },
        SymExpr::Exp(base, exp) => eval_power(base, exp)?,
    };

    (value.real().is_finite() && value.imag().is_finite()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn constants() {
        let value = eval(&SymExpr::symbol(PI)).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), std::f64::consts::PI);

        let value = eval(&SymExpr::symbol(EULER)).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), std::f64::consts::E);
    }

    #[test]
    fn square_root_of_negative() {
        let value = eval(&SymExpr::int(-4).sqrt()).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), 0.0);
        assert_float_absolute_eq!(value.imag().to_f64(), 2.0);
    }

    #[test]
    fn free_symbols_have_no_value() {
        assert!(eval(&SymExpr::symbol("x")).is_none());
    }

    #[test]
    fn undefined_values() {
        assert!(eval(&SymExpr::int(0).recip()).is_none());
        assert!(eval(&SymExpr::call("log", vec![SymExpr::int(0)])).is_none());
    }

    #[test]
    fn root_of() {
        // x^5 - x + 1
        let x = SymExpr::symbol("x");
        let poly = x.clone().pow(SymExpr::int(5)) - x + SymExpr::int(1);
        let root = SymExpr::call(ROOT_OF, vec![poly, SymExpr::int(0)]);
        let value = eval(&root).unwrap();
        assert_float_absolute_eq!(value.real().to_f64(), -1.1673039782614187);
    }

    #[test]
    fn roots_of_a_polynomial_are_computed_once() {
        // x^3 - 2
        let poly = SymExpr::symbol("x").pow(SymExpr::int(3)) - SymExpr::int(2);
        let mut cache = RootCache::default();
        let values = (0..3)
            .map(|k| cache.root_of(&[poly.clone(), SymExpr::int(k)]).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(cache.polys.len(), 1);

        for value in &values {
            let cube = Complex::with_val(PRECISION, value.pow(3));
            assert_float_absolute_eq!(cube.real().to_f64(), 2.0);
            assert_float_absolute_eq!(cube.imag().to_f64(), 0.0);
        }
        assert!(cache.root_of(&[poly, SymExpr::int(3)]).is_none());
    }
}
