use super::{
    fmt::{is_negative_term, negated, sorted_terms, Fraction},
    number::fmt_float,
    Number,
    Primary,
    SymExpr,
    EULER,
    IMAGINARY_UNIT,
    PI,
    ROOT_OF,
};
use mathsolver_parser::parser::fmt::{fmt_paren, Latex};
use std::fmt;

/// Returns the LaTeX command for a function name.
fn function_command(name: &str) -> Option<&'static str> {
    Some(match name {
        "sin" => "\\sin",
        "cos" => "\\cos",
        "tan" => "\\tan",
        "cot" => "\\cot",
        "sec" => "\\sec",
        "csc" => "\\csc",
        "asin" => "\\arcsin",
        "acos" => "\\arccos",
        "atan" => "\\arctan",
        "sinh" => "\\sinh",
        "cosh" => "\\cosh",
        "tanh" => "\\tanh",
        "log" => "\\log",
        _ => return None,
    })
}

impl Latex for Number {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rational(r) if *r.denom() == 1 => write!(f, "{}", r.numer()),
            Self::Rational(r) => {
                if r.cmp0().is_lt() {
                    write!(f, "-")?;
                }
                write!(f, "\\frac{{{}}}{{{}}}", r.numer().clone().abs(), r.denom())
            },
            Self::Float(n) => write!(f, "{}", fmt_float(n.to_f64())),
        }
    }
}

impl Latex for Primary {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt_latex(f),
            Self::Symbol(sym) if sym == PI => write!(f, "\\pi"),
            Self::Symbol(sym) if sym == EULER => write!(f, "e"),
            Self::Symbol(sym) if sym == IMAGINARY_UNIT => write!(f, "i"),
            Self::Symbol(sym) if sym.chars().count() == 1 => write!(f, "{}", sym),
            Self::Symbol(sym) => write!(f, "\\mathrm{{{}}}", sym),
            Self::Call(name, args) if name == "abs" && args.len() == 1 => {
                write!(f, "\\left|")?;
                args[0].fmt_latex(f)?;
                write!(f, "\\right|")
            },
            Self::Call(name, args) => {
                match function_command(name) {
                    Some(command) => write!(f, "{}", command)?,
                    None if name == ROOT_OF => write!(f, "\\operatorname{{RootOf}}")?,
                    None => write!(f, "\\mathrm{{{}}}", name)?,
                }
                write!(f, "\\left(")?;
                let mut iter = args.iter();
                if let Some(arg) = iter.next() {
                    arg.fmt_latex(f)?;
                    for arg in iter {
                        write!(f, ", ")?;
                        arg.fmt_latex(f)?;
                    }
                }
                write!(f, "\\right)")
            },
        }
    }
}

/// Writes the factors of a product by juxtaposition, using `\cdot` between two numbers.
fn fmt_factors(f: &mut fmt::Formatter, factors: &[SymExpr]) -> fmt::Result {
    let mut previous_is_number = false;
    for (idx, factor) in factors.iter().enumerate() {
        if idx > 0 {
            if previous_is_number && factor.is_number() {
                write!(f, " \\cdot ")?;
            } else {
                write!(f, " ")?;
            }
        }
        match factor {
            SymExpr::Add(_) => fmt_paren(f, factor)?,
            _ => factor.fmt_latex(f)?,
        }
        previous_is_number = factor.is_number();
    }
    Ok(())
}

/// Writes a product, using `\frac` if it has a denominator.
fn fmt_product(f: &mut fmt::Formatter, factors: &[SymExpr]) -> fmt::Result {
    let fraction = Fraction::split(factors);
    if fraction.negative {
        write!(f, "-")?;
    }

    if fraction.denominator.is_empty() {
        return fmt_factors(f, &fraction.numerator);
    }

    write!(f, "\\frac{{")?;
    if fraction.numerator.is_empty() {
        write!(f, "1")?;
    } else {
        fmt_factors(f, &fraction.numerator)?;
    }
    write!(f, "}}{{")?;
    fmt_factors(f, &fraction.denominator)?;
    write!(f, "}}")
}

impl Latex for SymExpr {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Primary(primary) => primary.fmt_latex(f),
            Self::Add(terms) => {
                for (idx, term) in sorted_terms(terms).into_iter().enumerate() {
                    match (idx, is_negative_term(term)) {
                        (0, false) => (),
                        (0, true) => write!(f, "-")?,
                        (_, false) => write!(f, " + ")?,
                        (_, true) => write!(f, " - ")?,
                    }
                    negated(term).fmt_latex(f)?;
                }
                Ok(())
            },
            Self::Mul(factors) => fmt_product(f, factors),
            Self::Exp(base, exp) => {
                if exp.as_number().is_some_and(Number::is_negative) {
                    return fmt_product(f, std::slice::from_ref(self));
                }

                if let Some(r) = exp.as_rational() {
                    if *r.numer() == 1 && *r.denom() != 1 {
                        write!(f, "\\sqrt")?;
                        if *r.denom() != 2 {
                            write!(f, "[{}]", r.denom())?;
                        }
                        write!(f, "{{")?;
                        base.fmt_latex(f)?;
                        return write!(f, "}}");
                    }
                }

                match &**base {
                    Self::Primary(Primary::Symbol(sym)) if sym == EULER => write!(f, "e")?,
                    Self::Primary(Primary::Number(n))
                        if n.is_negative() || n.as_integer().is_none() => fmt_paren(f, &**base)?,
                    Self::Primary(Primary::Call(..)) | Self::Add(_) | Self::Mul(_) | Self::Exp(..) => {
                        fmt_paren(f, &**base)?
                    },
                    _ => base.fmt_latex(f)?,
                }
                write!(f, "^{{")?;
                exp.fmt_latex(f)?;
                write!(f, "}}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn x() -> SymExpr {
        SymExpr::symbol("x")
    }

    #[test]
    fn fraction_and_root() {
        let expr = SymExpr::Add(vec![
            SymExpr::Mul(vec![SymExpr::rational(1, 2), SymExpr::int(3).sqrt(), SymExpr::symbol(IMAGINARY_UNIT)]),
            SymExpr::rational(-1, 2),
        ]);
        assert_eq!(expr.as_display().to_string(), "-\\frac{1}{2} + \\frac{\\sqrt{3} i}{2}");
    }

    #[test]
    fn polynomial() {
        let expr = SymExpr::Add(vec![
            x().pow(SymExpr::int(2)),
            SymExpr::Mul(vec![SymExpr::int(-5), x()]),
            SymExpr::int(6),
        ]);
        assert_eq!(expr.as_display().to_string(), "x^{2} - 5 x + 6");
    }

    #[test]
    fn trigonometry() {
        let expr = SymExpr::call("sin", vec![SymExpr::Mul(vec![SymExpr::int(2), x()])])
            .pow(SymExpr::int(2));
        assert_eq!(expr.as_display().to_string(), "\\left(\\sin\\left(2 x\\right)\\right)^{2}");
        assert_eq!(SymExpr::symbol(PI).as_display().to_string(), "\\pi");
    }
}
