use crate::{config::EngineConfig, error::NotConverged, step::Step};
use mathsolver_cas::{symbolic::SymExpr, Cas};
use mathsolver_error::Error;
use tracing::{debug, warn};

/// Repeatedly expands, collects, and simplifies an expression until a full pass leaves it
/// unchanged, recording a [`Step`] for every transformation that changed it.
pub struct Simplifier<'a> {
    /// The current expression.
    expr: SymExpr,

    /// The steps taken so far.
    steps: Vec<Step>,

    /// The computer algebra system that carries out each transformation.
    cas: &'a dyn Cas,

    /// The options of the simplifier.
    config: &'a EngineConfig,
}

impl<'a> Simplifier<'a> {
    /// Creates a new simplifier for the given expression.
    pub fn new(expr: SymExpr, cas: &'a dyn Cas, config: &'a EngineConfig) -> Self {
        Self { expr, steps: Vec::new(), cas, config }
    }

    /// Returns the current expression.
    pub fn expr(&self) -> &SymExpr {
        &self.expr
    }

    /// Returns the steps taken so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replaces the current expression if `next` differs from it, recording the step built by
    /// `step`. Returns true if the expression changed.
    fn apply(&mut self, next: SymExpr, step: fn(SymExpr, SymExpr) -> Step) -> bool {
        if next == self.expr {
            return false;
        }

        let before = std::mem::replace(&mut self.expr, next);
        let step = step(before, self.expr.clone());
        debug!(%step, "applied transformation");
        self.steps.push(step);
        true
    }

    /// Multiplies out products and powers of sums. Returns true if the expression changed.
    pub fn expand_step(&mut self) -> Result<bool, Error> {
        let expanded = self.cas.expand(&self.expr)?;
        Ok(self.apply(expanded, |before, after| Step::Expand { before, after }))
    }

    /// Groups the terms of the expression by the powers of its lexicographically smallest free
    /// symbol. Expressions without free symbols are left alone. Returns true if the expression
    /// changed.
    pub fn collect_step(&mut self) -> Result<bool, Error> {
        let Some(var) = self.expr.free_symbols().into_iter().next() else {
            return Ok(false);
        };

        let collected = self.cas.collect(&self.expr, &var)?;
        Ok(self.apply(collected, |before, after| Step::Collect { before, after }))
    }

    /// Simplifies the expression with trigonometric identities, if enabled. Returns true if the
    /// expression changed.
    pub fn simplify_step(&mut self) -> Result<bool, Error> {
        if !self.config.general_simplification {
            return Ok(false);
        }

        let simplified = self.cas.simplify(&self.expr)?;
        Ok(self.apply(simplified, |before, after| Step::Simplify { before, after }))
    }

    /// Makes full passes over the expression until one of them leaves it unchanged, returning
    /// the steps taken and the final expression.
    ///
    /// With a maximum of zero passes, the expression is returned unchanged. Otherwise, returns an
    /// error if the maximum number of passes is reached, or if a pass ends with an expression that
    /// an earlier pass also ended with (the transformations undo each other).
    pub fn simplify(mut self) -> Result<(Vec<Step>, SymExpr), Error> {
        if self.config.max_passes == 0 {
            debug!("simplification disabled");
            return Ok((self.steps, self.expr));
        }

        let mut seen = vec![self.expr.clone()];
        for pass in 1..=self.config.max_passes {
            // every transformation runs, even if an earlier one in the pass changed the expression
            let expanded = self.expand_step()?;
            let collected = self.collect_step()?;
            let simplified = self.simplify_step()?;
            if !(expanded || collected || simplified) {
                debug!(passes = pass, steps = self.steps.len(), "simplification converged");
                return Ok((self.steps, self.expr));
            }

            if seen.contains(&self.expr) {
                warn!(passes = pass, expr = %self.expr, "simplification is cycling");
                return Err(Error::unspanned(NotConverged {
                    passes: pass,
                    expr: self.expr.to_string(),
                }));
            }
            seen.push(self.expr.clone());
        }

        warn!(passes = self.config.max_passes, expr = %self.expr, "simplification did not converge");
        Err(Error::unspanned(NotConverged {
            passes: self.config.max_passes,
            expr: self.expr.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfigBuilder;
    use mathsolver_cas::Symbolic;
    use mathsolver_parser::parser::{ast::Expr, Parser};
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        SymExpr::try_from(expr).unwrap().canonical()
    }

    fn simplify(input: &str, config: &EngineConfig) -> Result<(Vec<String>, String), Error> {
        let (steps, result) = Simplifier::new(parse(input), &Symbolic, config).simplify()?;
        Ok((steps.iter().map(ToString::to_string).collect(), result.to_string()))
    }

    #[test]
    fn expand_product() {
        let (steps, result) = simplify("(x + 1)(x - 1)", &EngineConfig::default()).unwrap();
        assert_eq!(steps, vec!["Expand: (x - 1)*(x + 1) → x^2 - 1"]);
        assert_eq!(result, "x^2 - 1");
    }

    #[test]
    fn already_simple() {
        let (steps, result) = simplify("x^2 - 5*x + 6", &EngineConfig::default()).unwrap();
        assert!(steps.is_empty());
        assert_eq!(result, "x^2 - 5*x + 6");
    }

    #[test]
    fn result_is_fixed_point() {
        let config = EngineConfig::default();
        let (_, once) = simplify("(x + 2)^2 - 4x", &config).unwrap();
        let (steps, twice) = simplify(&once, &config).unwrap();
        assert!(steps.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn trigonometric_identity() {
        let (steps, result) = simplify("sin(x)^2 + cos(x)^2", &EngineConfig::default()).unwrap();
        assert_eq!(steps, vec!["Simplify: cos(x)^2 + sin(x)^2 → 1"]);
        assert_eq!(result, "1");
    }

    #[test]
    fn trigonometric_pass_disabled() {
        let config = EngineConfigBuilder::new().general_simplification(false).build();
        let (steps, result) = simplify("sin(x)^2 + cos(x)^2", &config).unwrap();
        assert!(steps.is_empty());
        assert_eq!(result, "cos(x)^2 + sin(x)^2");
    }

    #[test]
    fn collect_and_expand_cycle() {
        let err = simplify("x*y + x*z", &EngineConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "simplification did not converge after 2 passes");
    }

    #[test]
    fn pass_limit() {
        let config = EngineConfigBuilder::new().max_passes(1).build();
        let err = simplify("x*y + x*z", &config).unwrap_err();
        assert_eq!(err.to_string(), "simplification did not converge after 1 passes");
    }

    #[test]
    fn zero_passes_returns_input() {
        let config = EngineConfigBuilder::new().max_passes(0).build();
        let (steps, result) = simplify("(x + 1)(x - 1)", &config).unwrap();
        assert!(steps.is_empty());
        assert_eq!(result, "(x - 1)*(x + 1)");
    }
}
