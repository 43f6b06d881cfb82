//! Conversion from the parser's AST into [`SymExpr`].

use super::{Primary, SymExpr, EULER, IMAGINARY_UNIT};
use crate::{
    error::{DivisionByZero, InvalidNumber, WrongArgumentCount},
    primitive::{float_from_str, int_from_str},
    symbolic::expr::Number,
};
use mathsolver_error::Error;
use mathsolver_parser::parser::{
    ast::{Call, Expr as AstExpr, Literal},
    token::{BinOpKind, UnaryOpKind},
};
use std::ops::{Range, RangeInclusive};

/// Describes how many arguments a function accepts.
struct Arity {
    accepted: RangeInclusive<usize>,
    description: &'static str,
    signature: &'static str,
}

/// Returns the accepted number of arguments of the given function.
fn arity(name: &str) -> Arity {
    match name {
        "log" => Arity {
            accepted: 1..=2,
            description: "1 or 2 arguments",
            signature: "log(x) or log(x, base)",
        },
        "sin" => one("sin(x)"),
        "cos" => one("cos(x)"),
        "tan" => one("tan(x)"),
        "cot" => one("cot(x)"),
        "sec" => one("sec(x)"),
        "csc" => one("csc(x)"),
        "asin" => one("asin(x)"),
        "acos" => one("acos(x)"),
        "atan" => one("atan(x)"),
        "sinh" => one("sinh(x)"),
        "cosh" => one("cosh(x)"),
        "tanh" => one("tanh(x)"),
        "exp" => one("exp(x)"),
        "ln" => one("ln(x)"),
        "sqrt" => one("sqrt(x)"),
        _ => one("abs(x)"),
    }
}

fn one(signature: &'static str) -> Arity {
    Arity { accepted: 1..=1, description: "1 argument", signature }
}

/// Converts a call, checking its number of arguments. Functions with another spelling in
/// [`SymExpr`] are rewritten: `sqrt(u)` is `u^(1/2)`, `exp(u)` is `E^u`, `ln(u)` is `log(u)`, and
/// `log(u, b)` is `log(u) / log(b)`.
fn convert_call(call: Call) -> Result<SymExpr, Error> {
    let arity = arity(&call.name.name);
    if !arity.accepted.contains(&call.args.len()) {
        return Err(Error::new(call.outer_span().to_vec(), WrongArgumentCount {
            name: call.name.name,
            expected: arity.description,
            given: call.args.len(),
            signature: arity.signature,
        }));
    }

    let name = call.name.name;
    let mut args = call.args.into_iter()
        .map(SymExpr::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match name.as_str() {
        "sqrt" => args.remove(0).sqrt(),
        "exp" => SymExpr::symbol(EULER).pow(args.remove(0)),
        "ln" => SymExpr::call("log", args),
        "log" if args.len() == 2 => {
            let base = args.remove(1);
            SymExpr::call("log", args) * SymExpr::call("log", vec![base]).recip()
        },
        _ => SymExpr::call(name, args),
    })
}

/// Converts a literal.
fn convert_literal(literal: Literal) -> Result<SymExpr, Error> {
    let invalid = |literal: String, span: Range<usize>| {
        Error::new(vec![span], InvalidNumber { literal })
    };

    match literal {
        Literal::Integer(int) => match int_from_str(&int.value) {
            Ok(n) => Ok(SymExpr::from(Number::from(n))),
            Err(_) => Err(invalid(int.value, int.span)),
        },
        Literal::Float(float) => match float_from_str(&float.value) {
            Ok(n) => Ok(SymExpr::from(Number::Float(n))),
            Err(_) => Err(invalid(float.value, float.span)),
        },
        Literal::Symbol(sym) if sym.name == "I" => Ok(SymExpr::symbol(IMAGINARY_UNIT)),
        Literal::Symbol(sym) => Ok(SymExpr::Primary(Primary::Symbol(sym.name))),
    }
}

/// Converts an AST expression into a [`SymExpr`], flattening sums and products.
///
/// The result is not in canonical form; use [`SymExpr::canonical`] on it. A division whose
/// right-hand side is identically zero is reported as an error pointing at the divisor.
impl TryFrom<AstExpr> for SymExpr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(literal) => convert_literal(literal),
            AstExpr::Paren(paren) => Self::try_from(paren.into_innermost()),
            AstExpr::Call(call) => convert_call(call),
            AstExpr::Unary(unary) => match unary.op.kind {
                // treat this as -1 * operand
                UnaryOpKind::Neg => Ok(-Self::try_from(*unary.operand)?),
            },
            AstExpr::Binary(bin) => {
                let rhs_span = bin.rhs.span();
                let lhs = Self::try_from(*bin.lhs)?;
                let rhs = Self::try_from(*bin.rhs)?;
                Ok(match bin.op.kind {
                    BinOpKind::Exp => lhs.pow(rhs),
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => {
                        // treat this as lhs * rhs^-1
                        if rhs.canonical().is_zero() {
                            return Err(Error::new(vec![rhs_span], DivisionByZero));
                        }
                        lhs * rhs.recip()
                    },
                    BinOpKind::Add => lhs + rhs,
                    // treat this as lhs + -1 * rhs
                    BinOpKind::Sub => lhs - rhs,
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_parser::parser::Parser;
    use pretty_assertions::assert_eq;

    /// Parse the given expression and return the raw [`SymExpr`] representation.
    fn convert(input: &str) -> Result<SymExpr, Error> {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        SymExpr::try_from(expr)
    }

    #[test]
    fn flattens_products() {
        let expr = convert("2x y").unwrap();
        assert_eq!(expr, SymExpr::Mul(vec![
            SymExpr::symbol("y"),
            SymExpr::int(2),
            SymExpr::symbol("x"),
        ]));
    }

    #[test]
    fn subtraction_and_negation() {
        let expr = convert("x - (y + 1)").unwrap();
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::symbol("x"),
            SymExpr::Mul(vec![
                SymExpr::int(-1),
                SymExpr::Add(vec![SymExpr::symbol("y"), SymExpr::int(1)]),
            ]),
        ]));
    }

    #[test]
    fn function_spellings() {
        let expr = convert("sqrt(x) + exp(2) + ln(y)").unwrap();
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::symbol("x").sqrt(),
            SymExpr::symbol(EULER).pow(SymExpr::int(2)),
            SymExpr::call("log", vec![SymExpr::symbol("y")]),
        ]));
    }

    #[test]
    fn upper_case_imaginary_unit() {
        assert_eq!(convert("I").unwrap(), SymExpr::symbol(IMAGINARY_UNIT));
    }

    #[test]
    fn wrong_argument_count() {
        let err = convert("sin(x, y)").unwrap_err();
        assert_eq!(err.to_string(), "`sin` takes 1 argument, but 2 were given");
        assert_eq!(err.spans, vec![0..4, 8..9]);
    }

    #[test]
    fn division_by_zero_points_at_divisor() {
        let err = convert("x / (y - y)").unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
        assert_eq!(err.spans, vec![4..11]);
    }
}
