pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use error::{UnexpectedEof, ExpectedEof};
use mathsolver_error::{Error, ErrorKind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for algebraic input. This is the type to use to parse an arbitrary piece of
/// text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without consuming it. Returns [`None`] if there are
    /// no more tokens.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without consuming it.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            } else {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(UnexpectedEof))
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_token() {
            None => Ok(value),
            Some(token) => Err(Error::new(vec![token.span.start..self.eof_span().end], ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`), division (`/`), and implicit multiplication, which
    /// separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{LitInt, LitSym, Literal},
        unary::Unary,
        Input,
    };
    use token::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    /// Renders the expression with every operation parenthesized, to make the shape of the tree
    /// easy to compare.
    fn shape(expr: &Expr) -> String {
        match expr {
            Expr::Literal(Literal::Integer(int)) => int.value.clone(),
            Expr::Literal(Literal::Float(float)) => float.value.clone(),
            Expr::Literal(Literal::Symbol(sym)) => sym.name.clone(),
            Expr::Paren(paren) => shape(&paren.expr),
            Expr::Call(call) => format!(
                "{}({})",
                call.name.name,
                call.args.iter().map(shape).collect::<Vec<_>>().join(", "),
            ),
            Expr::Unary(unary) => format!("(-{})", shape(&unary.operand)),
            Expr::Binary(binary) => {
                let op = match binary.op.kind {
                    BinOpKind::Add => "+",
                    BinOpKind::Sub => "-",
                    BinOpKind::Mul if binary.op.implicit => "·",
                    BinOpKind::Mul => "*",
                    BinOpKind::Div => "/",
                    BinOpKind::Exp => "^",
                };
                format!("({} {} {})", shape(&binary.lhs), op, shape(&binary.rhs))
            },
        }
    }

    fn parse_shape(source: &str) -> String {
        let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
        shape(&expr)
    }

    fn parse_err(source: &str) -> (String, Vec<Range<usize>>) {
        let err = Parser::new(source).try_parse_full::<Input>().unwrap_err();
        (err.to_string(), err.spans)
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Literal(Literal::Integer(LitInt {
            value: "16".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn implicit_multiplication_spans() {
        let mut parser = Parser::new("2x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Integer(LitInt {
                value: "2".to_string(),
                span: 0..1,
            }))),
            op: BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: 1..1,
            },
            rhs: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 1..2,
            }))),
            span: 0..2,
        }));
    }

    #[test]
    fn unary_neg() {
        let mut parser = Parser::new("-x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 1..2,
            }))),
            op: UnaryOp {
                kind: UnaryOpKind::Neg,
                span: 0..1,
            },
            span: 0..2,
        }));
    }

    #[test]
    fn call() {
        let mut parser = Parser::new("sin(x)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym {
                name: "sin".to_string(),
                span: 0..3,
            },
            args: vec![Expr::Literal(Literal::Symbol(LitSym {
                name: "x".to_string(),
                span: 4..5,
            }))],
            span: 0..6,
            paren_span: 3..6,
        }));
    }

    #[test]
    fn precedence() {
        assert_eq!(parse_shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(parse_shape("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(parse_shape("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(parse_shape("2^3^2"), "(2 ^ (3 ^ 2))");
        assert_eq!(parse_shape("x**2 + 1"), "((x ^ 2) + 1)");
    }

    #[test]
    fn negation_binds_looser_than_power() {
        assert_eq!(parse_shape("-x^2"), "(-(x ^ 2))");
        assert_eq!(parse_shape("-2x"), "((-2) · x)");
        assert_eq!(parse_shape("2^-1"), "(2 ^ (-1))");
        assert_eq!(parse_shape("3 * -x"), "(3 * (-x))");
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse_shape("5x"), "(5 · x)");
        assert_eq!(parse_shape("2x^2"), "(2 · (x ^ 2))");
        assert_eq!(parse_shape("(x+1)(x-1)"), "((x + 1) · (x - 1))");
        assert_eq!(parse_shape("x^2 - 5x + 6"), "(((x ^ 2) - (5 · x)) + 6)");
        assert_eq!(parse_shape("2 sin(x) cos(x)"), "((2 · sin(x)) · cos(x))");
        assert_eq!(parse_shape("1/2x"), "((1 / 2) · x)");
    }

    #[test]
    fn unknown_name_before_paren_is_multiplication() {
        assert_eq!(parse_shape("x(x + 1)"), "(x · (x + 1))");
    }

    #[test]
    fn call_with_many_args() {
        assert_eq!(parse_shape("log(8, 2) + 1"), "(log(8, 2) + 1)");
    }

    #[test]
    fn equation() {
        let input = Parser::new("2x + 3 = 7").try_parse_full::<Input>().unwrap();
        match input {
            Input::Equation { lhs, rhs, span } => {
                assert_eq!(shape(&lhs), "((2 · x) + 3)");
                assert_eq!(shape(&rhs), "7");
                assert_eq!(span, 0..10);
            },
            Input::Expr(_) => panic!("expected an equation"),
        }
    }

    #[test]
    fn bare_expression() {
        let input = Parser::new("(x+1)(x-1)").try_parse_full::<Input>().unwrap();
        assert!(matches!(input, Input::Expr(_)));
    }

    #[test]
    fn dangling_operator() {
        let (message, spans) = parse_err("2x +");
        assert_eq!(message, "unexpected end of input");
        assert_eq!(spans, vec![4..4]);
    }

    #[test]
    fn empty_input() {
        let (message, _) = parse_err("   ");
        assert_eq!(message, "unexpected end of input");
    }

    #[test]
    fn unclosed_parenthesis() {
        let (message, spans) = parse_err("(x + 1");
        assert_eq!(message, "unclosed parenthesis");
        assert_eq!(spans, vec![0..1]);

        let (message, _) = parse_err("sin(x");
        assert_eq!(message, "unclosed parenthesis");
    }

    #[test]
    fn empty_parenthesis() {
        let (message, spans) = parse_err("2 * ()");
        assert_eq!(message, "missing expression inside parentheses");
        assert_eq!(spans, vec![4..6]);
    }

    #[test]
    fn unexpected_token() {
        let (message, spans) = parse_err("2 * $");
        assert_eq!(message, "unexpected token `$`");
        assert_eq!(spans, vec![4..5]);

        let (message, _) = parse_err("x + )");
        assert_eq!(message, "unexpected token `)`");
    }

    #[test]
    fn trailing_garbage() {
        let (message, spans) = parse_err("x + 1 )");
        assert_eq!(message, "expected end of input");
        assert_eq!(spans, vec![6..7]);
    }

    #[test]
    fn second_equals_sign() {
        let (message, spans) = parse_err("x = 1 = 2");
        assert_eq!(message, "an equation can only contain one `=`");
        assert_eq!(spans, vec![6..7]);
    }

    #[test]
    fn function_without_parentheses() {
        let (message, _) = parse_err("sin x");
        assert_eq!(message, "the function `sin` must be called with parentheses");
    }
}
