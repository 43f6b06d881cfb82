use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::{is_function, Call},
            literal::Literal,
            paren::Paren,
            unary::Unary,
        },
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(x + 1)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `x + 1`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn innermost(&self) -> &Expr {
        let mut inner = self;
        while let Expr::Paren(paren) = inner {
            inner = &paren.expr;
        }
        inner
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression: one that can be parsed without looking at any operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Literal(Literal),
    Paren(Paren),
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // the next token decides which kind of primary this is, so errors from the chosen branch
        // are reported as-is
        match input.peek_token().map(|token| (token.kind, token.lexeme)) {
            Some((TokenKind::Name, name)) if is_function(name) => input.try_parse().map(Self::Call),
            Some((TokenKind::OpenParen, _)) => input.try_parse().map(Self::Paren),
            _ => input.try_parse().map(Self::Literal),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_round_trip_shape() {
        let expr = Parser::new("2x^2 - 3(x+1)/sin(x)").try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.to_string(), "2x^2 - 3(x + 1) / sin(x)");
    }

    #[test]
    fn innermost() {
        let expr = Parser::new("((x))").try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.innermost().to_string(), "x");
    }
}
