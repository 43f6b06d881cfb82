use crate::{
    parser::{
        ast::{expr::{Expr, Primary}, unary::Unary},
        token::{BinOp, BinOpKind},
        Associativity,
        Parser,
        Precedence,
    },
};
use mathsolver_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

/// What follows an operand: an explicit operator, or another operand that is implicitly
/// multiplied with it.
enum Next {
    Op(BinOp),
    ImplicitMultiplication,
}

impl Next {
    fn precedence(&self) -> Precedence {
        match self {
            Next::Op(op) => op.precedence(),
            Next::ImplicitMultiplication => BinOpKind::Mul.precedence(),
        }
    }

    fn associativity(&self) -> Associativity {
        match self {
            Next::Op(op) => op.associativity(),
            Next::ImplicitMultiplication => Associativity::Left,
        }
    }
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Looks at what follows the current operand without consuming anything.
    fn peek_next(input: &Parser) -> Option<Next> {
        let mut input_ahead = input.clone();
        if let Ok(op) = input_ahead.try_parse::<BinOp>() {
            Some(Next::Op(op))
        } else if input.peek_kind().is_some_and(|kind| kind.starts_operand()) {
            Some(Next::ImplicitMultiplication)
        } else {
            None
        }
    }

    /// Creates the node `lhs op rhs`.
    fn join(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        })
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// This is because we can't parse an expression like `3 + 4 * 5` as `(3 + 4) * 5`; if the
    /// following operator binds tighter (or is right-associative with the same precedence), it
    /// takes `rhs` as its own left-hand-side first.
    fn complete_rhs(input: &mut Parser, mut rhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        while let Some(next) = Self::peek_next(input) {
            let next_precedence = next.precedence();
            if next_precedence > precedence
                || (next_precedence == precedence && next.associativity() == Associativity::Right)
            {
                rhs = Self::parse_expr(input, rhs, next_precedence)?;
            } else {
                break;
            }
        }

        Ok(rhs)
    }

    /// Parses operators (explicit or implicit multiplication) and their right-hand-sides, starting
    /// with the given left-hand-side, as long as the operators have at least the given precedence.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        while let Some(next) = Self::peek_next(input) {
            let next_precedence = next.precedence();
            if next_precedence < precedence {
                break;
            }

            match next {
                Next::Op(_) => {
                    let op = input.try_parse::<BinOp>()?;
                    let rhs = Unary::parse_or_lower(input)?;
                    let rhs = Self::complete_rhs(input, rhs, next_precedence)?;
                    lhs = Self::join(lhs, op, rhs);
                },
                Next::ImplicitMultiplication => {
                    let rhs: Expr = input.try_parse::<Primary>()?.into();
                    let op = BinOp {
                        kind: BinOpKind::Mul,
                        implicit: true,
                        span: lhs.span().end..rhs.span().start,
                    };
                    let rhs = Self::complete_rhs(input, rhs, next_precedence)?;
                    lhs = Self::join(lhs, op, rhs);
                },
            }
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match self.op.kind {
            BinOpKind::Mul if self.op.implicit => return write!(f, "{}{}", self.lhs, self.rhs),
            BinOpKind::Exp => return write!(f, "{}^{}", self.lhs, self.rhs),
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
        };
        write!(f, "{} {} {}", self.lhs, op, self.rhs)
    }
}
