use crate::{
    parser::{
        ast::expr::Expr,
        error::{EmptyParenthesis, UnclosedParenthesis},
        token::{unexpected, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression, consuming the [`Paren`].
    pub fn into_innermost(self) -> Expr {
        let mut inner = self.expr;
        while let Expr::Paren(paren) = *inner {
            inner = paren.expr;
        }
        *inner
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        if input.peek_kind() == Some(TokenKind::CloseParen) {
            let close_paren = input.next_token()?;
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                EmptyParenthesis,
            ));
        }

        let expr = input.try_parse::<Expr>()?;
        match input.next_token() {
            Ok(token) if token.kind == TokenKind::CloseParen => Ok(Self {
                expr: Box::new(expr),
                span: open_paren.span.start..token.span.end,
            }),
            Ok(token) => Err(unexpected(&token, &[TokenKind::CloseParen])),
            Err(_) => Err(Error::new(vec![open_paren.span], UnclosedParenthesis)),
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
