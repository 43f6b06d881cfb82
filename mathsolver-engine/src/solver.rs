use crate::{config::EngineConfig, error::IndeterminateDiscriminant, simplifier::Simplifier, step::Step};
use mathsolver_cas::{
    solve::{discriminant, linear, quadratic, Equation},
    symbolic::{expr::ROOT_OF, SymExpr},
    Cas,
};
use mathsolver_error::Error;
use std::cmp::Ordering;
use tracing::debug;

/// The unknown used when an equation has no free symbols.
const DEFAULT_VARIABLE: &str = "x";

/// Solves a single polynomial equation, recording a [`Step`] for every transformation and
/// decision.
///
/// Solving is a single forward pass: the equation is normalized to `expr = 0` with a
/// [`Simplifier`], classified by its degree in the unknown, then solved with the method for that
/// degree.
pub struct EquationSolver<'a> {
    /// The current equation.
    equation: Equation,

    /// The steps taken so far.
    steps: Vec<Step>,

    /// The unknown to solve for.
    var: String,

    /// The computer algebra system that carries out each transformation.
    cas: &'a dyn Cas,

    /// The options of the solver.
    config: &'a EngineConfig,
}

impl<'a> EquationSolver<'a> {
    /// Creates a new solver for the given equation.
    ///
    /// The unknown is [`EngineConfig::variable`] if set, otherwise the lexicographically smallest
    /// free symbol of either side, or `x` if the equation has none.
    pub fn new(equation: Equation, cas: &'a dyn Cas, config: &'a EngineConfig) -> Self {
        let var = config.variable.clone()
            .or_else(|| equation.free_symbols().into_iter().next())
            .unwrap_or_else(|| DEFAULT_VARIABLE.to_string());
        Self { equation, steps: Vec::new(), var, cas, config }
    }

    /// Returns the unknown that the equation is solved for.
    pub fn variable(&self) -> &str {
        &self.var
    }

    /// Returns the current equation.
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Returns the steps taken so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Simplifies `lhs - rhs` and replaces the equation with `simplified = 0`.
    pub fn normalize(&mut self) -> Result<(), Error> {
        let difference = self.equation.normalized();
        let (steps, simplified) = Simplifier::new(difference, self.cas, self.config).simplify()?;
        self.steps.extend(steps);
        self.steps.push(Step::Normalized { expr: simplified.clone() });
        self.equation = Equation::new(simplified, SymExpr::int(0));
        Ok(())
    }

    /// Solves `a*x + b = 0`.
    fn solve_linear(&mut self, a: SymExpr, b: SymExpr) -> Result<Vec<SymExpr>, Error> {
        self.steps.push(Step::Linear { var: self.var.clone(), a: a.clone(), b: b.clone() });
        let solution = linear(&a, &b)?;
        self.steps.push(Step::LinearSolution {
            var: self.var.clone(),
            a,
            b,
            solution: solution.clone(),
        });
        Ok(vec![solution])
    }

    /// Solves `a*x^2 + b*x + c = 0` with the discriminant.
    fn solve_quadratic(&mut self, a: SymExpr, b: SymExpr, c: SymExpr) -> Result<Vec<SymExpr>, Error> {
        let var = self.var.clone();
        self.steps.push(Step::Quadratic { var: var.clone(), a: a.clone(), b: b.clone(), c: c.clone() });

        let d = discriminant(&a, &b, &c);
        self.steps.push(Step::Discriminant { a: a.clone(), b: b.clone(), c: c.clone(), value: d.clone() });

        let sign = d.sign()
            .ok_or_else(|| Error::unspanned(IndeterminateDiscriminant { discriminant: d.to_string() }))?;
        debug!(discriminant = %d, ?sign, "classified quadratic equation");

        let roots = quadratic(&a, &b, &c)?;
        match (sign, roots.as_slice()) {
            (Ordering::Greater, [first, second]) => {
                self.steps.push(Step::TwoRoots { var, roots: [first.clone(), second.clone()] });
                Ok(roots)
            },
            (Ordering::Less, [first, second]) => {
                self.steps.push(Step::ComplexRoots { var, roots: [first.clone(), second.clone()] });
                Ok(roots)
            },
            _ => {
                let root = (-b).checked_div(&(SymExpr::int(2) * a))?;
                self.steps.push(Step::OneRoot { var, root: root.clone() });
                Ok(vec![root])
            },
        }
    }

    /// Solves an equation of any other degree with the general solver of the computer algebra
    /// system.
    fn solve_general(&mut self, degree: usize) -> Result<Vec<SymExpr>, Error> {
        let mut solutions = self.cas.solve(&self.equation, &self.var)?;
        if self.config.resolve_implicit_roots {
            // placeholders of one polynomial are evaluated together, so its roots are found once
            let implicit = solutions.iter()
                .filter(|solution| solution.contains_call(ROOT_OF))
                .cloned()
                .collect::<Vec<_>>();
            let mut resolved = self.cas.evaluate_all(&implicit)?.into_iter();
            solutions = solutions.into_iter()
                .map(|solution| if solution.contains_call(ROOT_OF) {
                    resolved.next().unwrap_or(solution)
                } else {
                    solution
                })
                .collect();
        }

        self.steps.push(Step::General { degree, solutions: solutions.clone() });
        Ok(solutions)
    }

    /// Normalizes the equation and solves it, returning the steps taken and the solutions.
    pub fn solve(mut self) -> Result<(Vec<Step>, Vec<SymExpr>), Error> {
        self.normalize()?;

        let coefficients = self.cas.coefficients(&self.equation.lhs, &self.var)?;
        let degree = coefficients.len() - 1;
        debug!(var = %self.var, degree, "classified equation");

        let solutions = match <[SymExpr; 2]>::try_from(coefficients) {
            Ok([a, b]) => self.solve_linear(a, b)?,
            Err(coefficients) => match <[SymExpr; 3]>::try_from(coefficients) {
                Ok([a, b, c]) => self.solve_quadratic(a, b, c)?,
                Err(_) => self.solve_general(degree)?,
            },
        };
        Ok((self.steps, solutions))
    }
}
