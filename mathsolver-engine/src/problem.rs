use crate::{config::EngineConfig, simplifier::Simplifier, solver::EquationSolver, step::Step};
use mathsolver_cas::{solve::Equation, symbolic::SymExpr, Cas};
use mathsolver_error::Error;
use mathsolver_parser::{parse_input, Input};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A problem entered by the user: an expression to simplify, or an equation to solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// An expression to simplify.
    Expression(SymExpr),

    /// An equation to solve.
    Equation(Equation),
}

/// The result of running a [`Problem`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// An expression was simplified.
    Simplified {
        /// The steps taken.
        steps: Vec<Step>,

        /// The simplified expression.
        result: SymExpr,
    },

    /// An equation was solved.
    Solved {
        /// The steps taken.
        steps: Vec<Step>,

        /// The unknown that the equation was solved for.
        variable: String,

        /// The solutions, possibly none.
        solutions: Vec<SymExpr>,
    },
}

impl Outcome {
    /// Returns the steps taken.
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Simplified { steps, .. } | Self::Solved { steps, .. } => steps,
        }
    }
}

impl Problem {
    /// Parses a problem from the given input. Both sides of an equation are brought into
    /// canonical form.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Ok(match parse_input(input)? {
            Input::Expr(expr) => Self::Expression(SymExpr::try_from(expr)?.canonical()),
            Input::Equation { lhs, rhs, .. } => Self::Equation(Equation::new(
                SymExpr::try_from(lhs)?.canonical(),
                SymExpr::try_from(rhs)?.canonical(),
            )),
        })
    }

    /// Simplifies the expression or solves the equation.
    pub fn run(self, cas: &dyn Cas, config: &EngineConfig) -> Result<Outcome, Error> {
        match self {
            Self::Expression(expr) => {
                debug!(%expr, "simplifying expression");
                let (steps, result) = Simplifier::new(expr, cas, config).simplify()?;
                Ok(Outcome::Simplified { steps, result })
            },
            Self::Equation(equation) => {
                debug!(%equation, "solving equation");
                let solver = EquationSolver::new(equation, cas, config);
                let variable = solver.variable().to_string();
                let (steps, solutions) = solver.solve()?;
                Ok(Outcome::Solved { steps, variable, solutions })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathsolver_cas::Symbolic;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_expression() {
        let problem = Problem::parse("x + x").unwrap();
        assert_eq!(problem, Problem::Expression(SymExpr::int(2) * SymExpr::symbol("x")));
    }

    #[test]
    fn parse_equation() {
        let Problem::Equation(equation) = Problem::parse("2x + 3 = 7").unwrap() else {
            panic!("not an equation");
        };
        assert_eq!(equation.to_string(), "2*x + 3 = 7");
    }

    #[test]
    fn parse_error() {
        let err = Problem::parse("2x +").unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input");
    }

    #[test]
    fn run_reports_variable() {
        let outcome = Problem::parse("2y = 1").unwrap()
            .run(&Symbolic, &EngineConfig::default())
            .unwrap();
        let Outcome::Solved { variable, solutions, .. } = outcome else {
            panic!("not solved");
        };
        assert_eq!(variable, "y");
        assert_eq!(solutions, vec![SymExpr::rational(1, 2)]);
    }
}
