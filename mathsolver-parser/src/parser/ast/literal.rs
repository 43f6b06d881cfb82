use crate::{
    parser::{token::unexpected, Parse, Parser},
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An integer literal, representing an integer of arbitrary size. The value is kept as written so
/// that no precision is lost before conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitInt {
    /// The value of the integer literal as a string.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A decimal literal, such as `3.14` or `.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitFloat {
    /// The value of the decimal literal as a string.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A symbol / identifier literal, such as `x` or `pi`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Represents a literal value in an expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    Integer(LitInt),
    Float(LitFloat),
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Integer(int) => int.span.clone(),
            Literal::Float(float) => float.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => Ok(Literal::Integer(LitInt {
                value: token.lexeme.to_string(),
                span: token.span,
            })),
            TokenKind::Float => Ok(Literal::Float(LitFloat {
                value: token.lexeme.to_string(),
                span: token.span,
            })),
            TokenKind::Name => Ok(Literal::Symbol(LitSym {
                name: token.lexeme.to_string(),
                span: token.span,
            })),
            _ => Err(unexpected(&token, &[
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::Name,
                TokenKind::OpenParen,
            ])),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Integer(int) => write!(f, "{}", int.value),
            Literal::Float(float) => write!(f, "{}", float.value),
            Literal::Symbol(sym) => write!(f, "{}", sym.name),
        }
    }
}
