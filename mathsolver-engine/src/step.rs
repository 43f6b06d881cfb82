use mathsolver_cas::symbolic::SymExpr;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single step taken while simplifying an expression or solving an equation.
///
/// Each step is rendered as one line of text with its [`Display`](fmt::Display) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Products and powers of sums were multiplied out.
    Expand {
        /// The expression before the step.
        before: SymExpr,

        /// The expression after the step.
        after: SymExpr,
    },

    /// Terms were grouped by the powers of a variable.
    Collect {
        /// The expression before the step.
        before: SymExpr,

        /// The expression after the step.
        after: SymExpr,
    },

    /// The expression was simplified, possibly with trigonometric identities.
    Simplify {
        /// The expression before the step.
        before: SymExpr,

        /// The expression after the step.
        after: SymExpr,
    },

    /// The equation was moved into the form `expr = 0`.
    Normalized {
        /// The left-hand side of the normalized equation.
        expr: SymExpr,
    },

    /// The equation is linear, `a*x + b = 0`.
    Linear {
        /// The unknown.
        var: String,

        /// The coefficient of the unknown.
        a: SymExpr,

        /// The constant term.
        b: SymExpr,
    },

    /// The root of a linear equation, `x = -b/a`.
    LinearSolution {
        /// The unknown.
        var: String,

        /// The coefficient of the unknown.
        a: SymExpr,

        /// The constant term.
        b: SymExpr,

        /// The value of the root.
        solution: SymExpr,
    },

    /// The equation is quadratic, `a*x^2 + b*x + c = 0`.
    Quadratic {
        /// The unknown.
        var: String,

        /// The coefficient of the square of the unknown.
        a: SymExpr,

        /// The coefficient of the unknown.
        b: SymExpr,

        /// The constant term.
        c: SymExpr,
    },

    /// The discriminant `D = b^2 - 4*a*c` of a quadratic equation.
    Discriminant {
        /// The coefficient of the square of the unknown.
        a: SymExpr,

        /// The coefficient of the unknown.
        b: SymExpr,

        /// The constant term.
        c: SymExpr,

        /// The value of the discriminant.
        value: SymExpr,
    },

    /// The discriminant is positive, and the equation has two real roots.
    TwoRoots {
        /// The unknown.
        var: String,

        /// The roots, the one with `+` first.
        roots: [SymExpr; 2],
    },

    /// The discriminant is zero, and the equation has one root.
    OneRoot {
        /// The unknown.
        var: String,

        /// The root.
        root: SymExpr,
    },

    /// The discriminant is negative, and the equation has two complex conjugate roots.
    ComplexRoots {
        /// The unknown.
        var: String,

        /// The roots, the one with `+` first.
        roots: [SymExpr; 2],
    },

    /// An equation of another degree was solved by the general solver.
    General {
        /// The degree of the equation.
        degree: usize,

        /// The solutions.
        solutions: Vec<SymExpr>,
    },
}

/// Formats an expression that is used as an operand, parenthesizing it if it is a sum or
/// negative.
struct Operand<'a>(&'a SymExpr);

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self.0.to_string();
        if matches!(self.0, SymExpr::Add(_)) || formatted.starts_with('-') {
            write!(f, "({})", formatted)
        } else {
            write!(f, "{}", formatted)
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expand { before, after } => write!(f, "Expand: {} → {}", before, after),
            Self::Collect { before, after } => write!(f, "Collect terms: {} → {}", before, after),
            Self::Simplify { before, after } => write!(f, "Simplify: {} → {}", before, after),
            Self::Normalized { expr } => write!(f, "Simplified equation: {} = 0", expr),
            Self::Linear { var, a, b } => {
                write!(f, "Linear equation: {}*{} + {} = 0", Operand(a), var, Operand(b))
            },
            Self::LinearSolution { var, a, b, solution } => {
                write!(f, "Solution: {} = -{}/{} = {}", var, Operand(b), Operand(a), solution)
            },
            Self::Quadratic { var, a, b, c } => write!(
                f,
                "Quadratic equation: {}*{var}² + {}*{var} + {} = 0",
                Operand(a),
                Operand(b),
                Operand(c),
            ),
            Self::Discriminant { a, b, c, value } => write!(
                f,
                "Discriminant D = {}² - 4*{}*{} = {}",
                Operand(b),
                Operand(a),
                Operand(c),
                value,
            ),
            Self::TwoRoots { var, roots: [first, second] } => {
                write!(f, "D > 0. Roots: {var}₁ = {}, {var}₂ = {}", first, second)
            },
            Self::OneRoot { var, root } => write!(f, "D = 0. One root: {} = {}", var, root),
            Self::ComplexRoots { var, roots: [first, second] } => {
                write!(f, "D < 0. Complex roots: {var}₁ = {}, {var}₂ = {}", first, second)
            },
            Self::General { degree, solutions } => {
                let solutions = solutions.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Equation of degree {}. Solutions: [{}]", degree, solutions)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negative_operands_are_parenthesized() {
        let step = Step::Linear {
            var: "x".to_string(),
            a: SymExpr::int(2),
            b: SymExpr::int(-4),
        };
        assert_eq!(step.to_string(), "Linear equation: 2*x + (-4) = 0");
    }

    #[test]
    fn linear_solution() {
        let step = Step::LinearSolution {
            var: "x".to_string(),
            a: SymExpr::int(2),
            b: SymExpr::int(-4),
            solution: SymExpr::int(2),
        };
        assert_eq!(step.to_string(), "Solution: x = -(-4)/2 = 2");
    }

    #[test]
    fn discriminant() {
        let step = Step::Discriminant {
            a: SymExpr::int(1),
            b: SymExpr::int(-5),
            c: SymExpr::int(6),
            value: SymExpr::int(1),
        };
        assert_eq!(step.to_string(), "Discriminant D = (-5)² - 4*1*6 = 1");
    }

    #[test]
    fn general_lists_solutions() {
        let step = Step::General {
            degree: 3,
            solutions: vec![SymExpr::int(1), SymExpr::int(2), SymExpr::int(3)],
        };
        assert_eq!(step.to_string(), "Equation of degree 3. Solutions: [1, 2, 3]");
    }
}
