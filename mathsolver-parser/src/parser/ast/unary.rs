use crate::{
    parser::{
        ast::{binary::Binary, expr::{Expr, Primary}},
        token::UnaryOp,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if input.peek_kind() == Some(TokenKind::Sub) {
            input.try_parse::<Self>().map(Expr::Unary)
        } else {
            input.try_parse::<Primary>().map(Into::into)
        }
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;

        // operators with higher precedence than negation (only `^`) bind to the operand first, so
        // that `-x^2` is `-(x^2)`
        let operand = {
            let lhs = Self::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence())?
        };
        let span = op.span.start..operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "-{}", self.operand)
    }
}
