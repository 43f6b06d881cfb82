//! Kinds of errors that can occur while building or manipulating expressions.

use ariadne::Fmt;
use mathsolver_attrs::ErrorKind;
use mathsolver_error::EXPR;

/// The right-hand side of a division is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression is equal to zero"],
)]
pub struct DivisionByZero;

/// A numeric literal could not be read.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The text of the literal.
    pub literal: String,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` takes {}, but {} {} given", name, expected, given, if *given == 1 { "was" } else { "were" }),
    labels = ["this function call", ""],
    help = format!("the function is called like this: {}", signature.fg(EXPR)),
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: String,

    /// A description of the accepted number of arguments, such as `1 argument`.
    pub expected: &'static str,

    /// The number of arguments that were given.
    pub given: usize,

    /// An example call of the function.
    pub signature: &'static str,
}

/// An expression contains the unknown in a way a polynomial cannot, such as `1/x` or `sin(x)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expression is not a polynomial in {}", var),
    help = "only polynomial equations can be solved",
)]
pub struct NotPolynomial {
    /// The unknown of the polynomial.
    pub var: String,
}

/// There is no solution method for the given polynomial equation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot solve equations of degree {} with symbolic coefficients", degree),
    help = "try substituting numbers for the other symbols",
)]
pub struct UnsupportedEquation {
    /// The degree of the polynomial.
    pub degree: usize,
}

/// A polynomial has a degree too large to be worked with.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("polynomial degree {} is too large", degree),
    help = format!("polynomials of degree up to {} are supported", max),
)]
pub struct DegreeTooLarge {
    /// The degree of the polynomial, formatted.
    pub degree: String,

    /// The largest supported degree.
    pub max: usize,
}

/// An expression has no numeric value, such as an expression with free symbols.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate `{}` numerically", expr),
    help = "only expressions without unknowns have a numeric value",
)]
pub struct EvaluationFailed {
    /// The expression, formatted.
    pub expr: String,
}
