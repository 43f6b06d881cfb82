//! Kinds of errors that can occur while parsing.

use ariadne::Fmt;
use mathsolver_attrs::ErrorKind;
use mathsolver_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the input was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected token `{}`", lexeme),
    labels = [format!("expected one of: {}", expected.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", "))],
    help = format!("found {}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,

    /// The raw text of the token that was found.
    pub lexeme: String,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = format!("add a closing parenthesis `{}` somewhere after this", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// A pair of parentheses contains nothing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parentheses",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// A function name was used without a list of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the function `{}` must be called with parentheses", name),
    labels = ["this function"],
    help = format!("try writing `{}`", format!("{}(x)", name).fg(EXPR)),
)]
pub struct MissingCallParenthesis {
    /// The name of the function.
    pub name: String,
}

/// More than one `=` was found in the input.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an equation can only contain one `=`",
    labels = ["this is the second `=`"],
    help = "write the equation in the form `lhs = rhs`",
)]
pub struct MultipleEquals;
