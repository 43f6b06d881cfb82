//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](mathsolver_parser::parser::ast::Expr) type from `mathsolver_parser` is a recursive
//! `enum` that represents the AST of the input. It's convenient for parsing, but not so much for
//! algebraic manipulation.
//!
//! This module defines [`SymExpr`], which **flattens** the tree into lists of terms and factors and
//! normalizes every operation into a sum of products: subtraction is `a + (-1)*b`, and division is
//! `a * b^-1`.
//!
//! # Strict equality
//!
//! Two expressions are **strictly equal** if they are the same kind of node, and:
//!
//! - both are [`SymExpr::Primary`] with strictly equal values;
//! - both are [`SymExpr::Add`] or [`SymExpr::Mul`] whose terms / factors are strictly equal as
//! multisets, in any order;
//! - both are [`SymExpr::Exp`] with strictly equal base and exponent.
//!
//! Strict equality is a subset of semantic equality: `x^2 + 2x + 1` and `(x + 1)^2` are **not**
//! strictly equal. It is fast to compute and never reports false positives, which is all the
//! simplification rules need to decide if terms / factors can be combined, and all the engine needs
//! to decide if a transformation changed an expression.
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`SymExpr`] implement **strict equality**.

pub mod convert;
mod fmt;
mod latex;
pub mod number;

pub use number::Number;

use crate::{
    error::DivisionByZero,
    numerical::eval::eval,
    primitive::rational,
    symbolic::simplify::simplify,
};
use mathsolver_error::Error;
use std::{
    cmp::Ordering,
    collections::BTreeSet,
    ops::{Add, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The imaginary unit. `I` is accepted as an alias when parsing.
pub const IMAGINARY_UNIT: &str = "i";

/// The ratio of a circle's circumference to its diameter.
pub const PI: &str = "pi";

/// Euler's number, the base of the natural logarithm.
pub const EULER: &str = "E";

/// Names that refer to constants. These are never free symbols.
pub const CONSTANTS: &[&str] = &[IMAGINARY_UNIT, PI, EULER];

/// The name of the placeholder call representing the `k`-th root of a polynomial that has no
/// closed form.
pub const ROOT_OF: &str = "RootOf";

/// A single term / factor, such as a number, variable, or function call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A number, such as `2`, `-3/4` or `0.5`.
    Number(Number),

    /// A variable or constant, such as `x` or `pi`.
    Symbol(String),

    /// A function call, such as `sin(x)`.
    Call(String, Vec<SymExpr>),
}

/// A mathematical expression with information about its terms and factors.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to a power.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

/// Returns true if both slices contain strictly equal expressions, in any order.
fn multiset_eq(lhs: &[SymExpr], rhs: &[SymExpr]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|lhs| {
        let found = rhs.iter()
            .enumerate()
            .position(|(idx, rhs)| !used[idx] && lhs == rhs);
        match found {
            Some(idx) => {
                used[idx] = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                multiset_eq(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            _ => false,
        }
    }
}

impl From<Number> for SymExpr {
    fn from(number: Number) -> Self {
        Self::Primary(Primary::Number(number))
    }
}

impl SymExpr {
    /// Creates an integer expression.
    pub fn int(n: i64) -> Self {
        Self::from(Number::from(n))
    }

    /// Creates an exact fraction. **Panics if the denominator is zero.**
    pub fn rational(numerator: i64, denominator: i64) -> Self {
        Self::from(Number::from(rational(numerator, denominator)))
    }

    /// Creates a symbol expression.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a function call expression.
    pub fn call(name: impl Into<String>, args: Vec<SymExpr>) -> Self {
        Self::Primary(Primary::Call(name.into(), args))
    }

    /// Creates the expression `self^exp`. No simplification is done.
    pub fn pow(self, exp: SymExpr) -> Self {
        Self::Exp(Box::new(self), Box::new(exp))
    }

    /// Returns the square root of this expression. No simplification is done.
    pub fn sqrt(self) -> Self {
        self.pow(Self::rational(1, 2))
    }

    /// Returns `self^-1`. No simplification is done.
    pub fn recip(self) -> Self {
        self.pow(Self::int(-1))
    }

    /// If the expression is a number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Primary(Primary::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// If the expression is an exact number, returns a reference to its value.
    pub fn as_rational(&self) -> Option<&rug::Rational> {
        self.as_number()?.as_rational()
    }

    /// If the expression is an exact integer, returns a reference to its value.
    pub fn as_integer(&self) -> Option<&rug::Integer> {
        self.as_number()?.as_integer()
    }

    /// If the expression is a [`Primary::Symbol`], returns its name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// If the expression is a call to the function with the given name, returns its arguments.
    pub fn as_call(&self, name: &str) -> Option<&[SymExpr]> {
        match self {
            Self::Primary(Primary::Call(target, args)) if target == name => Some(args),
            _ => None,
        }
    }

    /// Returns true if the expression is a number.
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    /// Returns true if the expression is a floating-point number.
    pub fn is_float(&self) -> bool {
        self.as_number().is_some_and(Number::is_float)
    }

    /// Returns true if the expression is the number zero, exact or approximate.
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    /// Returns true if the expression is exactly the number one.
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Returns true if the expression is the imaginary unit.
    pub fn is_imaginary_unit(&self) -> bool {
        self.as_symbol() == Some(IMAGINARY_UNIT)
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or the integer 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => match terms.len() {
                0 => Self::int(0),
                1 => terms.remove(0),
                _ => Self::Add(terms),
            },
            Self::Mul(mut factors) => match factors.len() {
                0 => Self::int(1),
                1 => factors.remove(0),
                _ => Self::Mul(factors),
            },
            _ => self,
        }
    }

    /// Returns the canonical form of the expression.
    pub fn canonical(&self) -> Self {
        simplify(self)
    }

    /// Divides `self` by `rhs`, returning the canonical quotient.
    ///
    /// Returns an error if `rhs` is zero.
    pub fn checked_div(&self, rhs: &SymExpr) -> Result<Self, Error> {
        let rhs = rhs.canonical();
        if rhs.is_zero() {
            return Err(Error::unspanned(DivisionByZero));
        }

        Ok((self.clone() * rhs.recip()).canonical())
    }

    /// Returns the free symbols of the expression in lexicographic order. Constants such as `pi`
    /// are not free symbols, and neither is the variable bound by a [`ROOT_OF`] placeholder.
    pub fn free_symbols(&self) -> BTreeSet<String> {
        fn inner(expr: &SymExpr, symbols: &mut BTreeSet<String>) {
            match expr {
                SymExpr::Primary(Primary::Symbol(sym)) => {
                    if !CONSTANTS.contains(&sym.as_str()) {
                        symbols.insert(sym.clone());
                    }
                },
                SymExpr::Primary(Primary::Call(name, _)) if name == ROOT_OF => (),
                SymExpr::Primary(Primary::Call(_, args)) => {
                    args.iter().for_each(|arg| inner(arg, symbols));
                },
                SymExpr::Primary(Primary::Number(_)) => (),
                SymExpr::Add(children) | SymExpr::Mul(children) => {
                    children.iter().for_each(|child| inner(child, symbols));
                },
                SymExpr::Exp(base, exp) => {
                    inner(base, symbols);
                    inner(exp, symbols);
                },
            }
        }

        let mut symbols = BTreeSet::new();
        inner(self, &mut symbols);
        symbols
    }

    /// Returns true if the expression contains the symbol with the given name.
    pub fn contains_symbol(&self, name: &str) -> bool {
        let mut found = false;
        self.visit(&mut |expr| found |= expr.as_symbol() == Some(name));
        found
    }

    /// Returns true if the expression contains a call to the function with the given name.
    pub fn contains_call(&self, name: &str) -> bool {
        let mut found = false;
        self.visit(&mut |expr| found |= expr.as_call(name).is_some());
        found
    }

    /// Calls the given function on every node of the expression, in pre-order.
    pub fn visit(&self, f: &mut impl FnMut(&SymExpr)) {
        f(self);
        match self {
            Self::Primary(Primary::Call(_, args)) => args.iter().for_each(|arg| arg.visit(f)),
            Self::Primary(_) => (),
            Self::Add(children) | Self::Mul(children) => {
                children.iter().for_each(|child| child.visit(f));
            },
            Self::Exp(base, exp) => {
                base.visit(f);
                exp.visit(f);
            },
        }
    }

    /// Determines the sign of the expression, if possible.
    ///
    /// Numbers have an exact sign. Expressions without free symbols (such as `sqrt(2) - 1`) are
    /// evaluated numerically; they have no sign if their value is not real. Expressions with free
    /// symbols have no sign.
    pub fn sign(&self) -> Option<Ordering> {
        if let Some(n) = self.as_number() {
            return Some(n.cmp0());
        }
        if !self.free_symbols().is_empty() {
            return None;
        }

        let value = eval(self)?;
        let (re, im) = (value.real().to_f64(), value.imag().to_f64());
        let scale = re.abs().max(1.0);
        if im.abs() > 1e-30 * scale {
            return None;
        }
        if re.abs() < 1e-40 {
            return Some(Ordering::Equal);
        }
        re.partial_cmp(&0.0)
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except for the case where both
/// operands are numbers, or where either operand is a [`SymExpr::Add`], in which case both are
/// combined in one list of terms (flattening).
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::from(lhs.add(&rhs))
            },
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) | (other, Self::Add(mut terms)) => {
                terms.push(other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Subtracts two [`SymExpr`]s, as `lhs + (-1)*rhs`. No simplification is done.
impl Sub for SymExpr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except for the case where both
/// operands are numbers, or where either operand is a [`SymExpr::Mul`], in which case both are
/// combined in one list of factors (flattening).
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::from(lhs.mul(&rhs))
            },
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) | (other, Self::Mul(mut factors)) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Number(n)) => Self::from(n.neg()),
            expr => Self::int(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn strict_equality_ignores_order() {
        let a = SymExpr::Add(vec![x(), SymExpr::int(2), SymExpr::symbol("y")]);
        let b = SymExpr::Add(vec![SymExpr::symbol("y"), x(), SymExpr::int(2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn strict_equality_counts_duplicates() {
        let a = SymExpr::Mul(vec![x(), x(), SymExpr::symbol("y")]);
        let b = SymExpr::Mul(vec![x(), SymExpr::symbol("y"), SymExpr::symbol("y")]);
        assert_ne!(a, b);
    }

    #[test]
    fn operators_flatten() {
        let expr = (x() + SymExpr::int(1)) + (SymExpr::symbol("y") + SymExpr::int(2));
        assert_eq!(expr, SymExpr::Add(vec![
            x(),
            SymExpr::int(1),
            SymExpr::symbol("y"),
            SymExpr::int(2),
        ]));

        assert_eq!(-SymExpr::int(3), SymExpr::int(-3));
        assert_eq!(-x(), SymExpr::Mul(vec![SymExpr::int(-1), x()]));
    }

    #[test]
    fn free_symbols_skip_constants() {
        let expr = SymExpr::Add(vec![
            SymExpr::symbol("y"),
            SymExpr::Mul(vec![SymExpr::symbol(PI), x()]),
            SymExpr::symbol(IMAGINARY_UNIT),
        ]);
        let symbols = expr.free_symbols().into_iter().collect::<Vec<_>>();
        assert_eq!(symbols, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn checked_div_by_zero() {
        let zero = SymExpr::Add(vec![x(), -x()]);
        let err = x().checked_div(&zero).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn sign_of_closed_expressions() {
        // sqrt(2) - 1 > 0
        let expr = SymExpr::int(2).sqrt() + SymExpr::int(-1);
        assert_eq!(expr.sign(), Some(Ordering::Greater));

        // 3 - pi < 0
        let expr = SymExpr::int(3) - SymExpr::symbol(PI);
        assert_eq!(expr.sign(), Some(Ordering::Less));

        assert_eq!(SymExpr::symbol(IMAGINARY_UNIT).sign(), None);
        assert_eq!(x().sign(), None);
    }
}
