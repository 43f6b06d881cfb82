use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::{MissingCallParenthesis, UnclosedParenthesis},
        token::{unexpected, Comma},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names that are parsed as function calls when followed by parentheses. Any other name followed
/// by parentheses is a symbol multiplied by a parenthesized expression, such as `x(x + 1)`.
pub const FUNCTIONS: &[&str] = &[
    "sin", "cos", "tan", "cot", "sec", "csc",
    "asin", "acos", "atan",
    "sinh", "cosh", "tanh",
    "exp", "log", "ln", "sqrt", "abs",
];

/// Returns true if the given name is a known function.
pub fn is_function(name: &str) -> bool {
    FUNCTIONS.contains(&name)
}

/// A function call, such as `sin(x)` or `log(8, 2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind != TokenKind::Name || !is_function(token.lexeme) {
            return Err(unexpected(&token, &[TokenKind::Name]));
        }
        let name = LitSym {
            name: token.lexeme.to_string(),
            span: token.span,
        };

        if input.peek_kind() != Some(TokenKind::OpenParen) {
            return Err(Error::new(vec![name.span.clone()], MissingCallParenthesis {
                name: name.name,
            }));
        }
        let open_paren = input.next_token()?;

        let mut args = Vec::new();
        if input.peek_kind() != Some(TokenKind::CloseParen) {
            args.push(input.try_parse::<Expr>()?);
            while input.peek_kind() == Some(TokenKind::Comma) {
                input.try_parse::<Comma>()?;
                args.push(input.try_parse::<Expr>()?);
            }
        }

        match input.next_token() {
            Ok(close) if close.kind == TokenKind::CloseParen => Ok(Self {
                span: name.span.start..close.span.end,
                name,
                args,
                paren_span: open_paren.span.start..close.span.end,
            }),
            Ok(other) => Err(unexpected(&other, &[TokenKind::Comma, TokenKind::CloseParen])),
            Err(_) => Err(Error::new(vec![open_paren.span], UnclosedParenthesis)),
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name.name)?;
        let mut iter = self.args.iter();
        if let Some(arg) = iter.next() {
            write!(f, "{}", arg)?;
            for arg in iter {
                write!(f, ", {}", arg)?;
            }
        }
        write!(f, ")")
    }
}
