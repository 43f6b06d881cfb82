//! The abstract syntax tree produced by the parser.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use call::Call;
pub use expr::{Expr, Primary};
pub use literal::{LitFloat, LitInt, LitSym, Literal};
pub use paren::Paren;
pub use unary::Unary;

use crate::{
    parser::{error::MultipleEquals, token::Assign, Parse, Parser},
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete line of user input: either a single expression to simplify, or an equation to
/// solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Input {
    /// A bare expression, such as `(x + 1)(x - 1)`.
    Expr(Expr),

    /// Two expressions separated by `=`, such as `2x + 3 = 7`.
    Equation {
        /// The left-hand side of the equation.
        lhs: Expr,

        /// The right-hand side of the equation.
        rhs: Expr,

        /// The region of the source code that the whole equation was parsed from.
        span: Range<usize>,
    },
}

impl Input {
    /// Returns the span of the input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Expr(expr) => expr.span(),
            Self::Equation { span, .. } => span.clone(),
        }
    }
}

impl Parse for Input {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse::<Expr>()?;
        if input.peek_kind() != Some(TokenKind::Assign) {
            return Ok(Self::Expr(lhs));
        }

        input.try_parse::<Assign>()?;
        let rhs = input.try_parse::<Expr>()?;

        if input.peek_kind() == Some(TokenKind::Assign) {
            let second = input.try_parse::<Assign>()?;
            return Err(Error::new(vec![second.span], MultipleEquals));
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Self::Equation { lhs, rhs, span })
    }
}
