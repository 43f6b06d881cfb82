//! Options that control the simplifier and equation solver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options that control the simplifier and equation solver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// The maximum number of full passes (expand, collect, simplify) the simplifier may make
    /// before giving up.
    pub max_passes: usize,

    /// Whether the simplifier runs the general simplification pass, which applies trigonometric
    /// identities.
    pub general_simplification: bool,

    /// Whether `RootOf(p, k)` placeholders in the solutions of an equation are replaced with
    /// numeric approximations.
    pub resolve_implicit_roots: bool,

    /// The unknown to solve equations for. If [`None`], the lexicographically smallest free symbol
    /// of the equation is used, or `x` if there is none.
    pub variable: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_passes: 64,
            general_simplification: true,
            resolve_implicit_roots: true,
            variable: None,
        }
    }
}

impl EngineConfig {
    /// Returns a builder initialized with these options.
    pub fn into_builder(self) -> EngineConfigBuilder {
        EngineConfigBuilder(self)
    }
}

/// A builder for [`EngineConfig`].
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder(EngineConfig);

impl EngineConfigBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of simplification passes. See [`EngineConfig::max_passes`].
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.0.max_passes = max_passes;
        self
    }

    /// Sets whether the general simplification pass runs. See
    /// [`EngineConfig::general_simplification`].
    pub fn general_simplification(mut self, general_simplification: bool) -> Self {
        self.0.general_simplification = general_simplification;
        self
    }

    /// Sets whether implicit roots are approximated. See
    /// [`EngineConfig::resolve_implicit_roots`].
    pub fn resolve_implicit_roots(mut self, resolve_implicit_roots: bool) -> Self {
        self.0.resolve_implicit_roots = resolve_implicit_roots;
        self
    }

    /// Sets the unknown to solve equations for. See [`EngineConfig::variable`].
    pub fn variable(mut self, variable: Option<String>) -> Self {
        self.0.variable = variable;
        self
    }

    /// Builds the [`EngineConfig`].
    pub fn build(self) -> EngineConfig {
        self.0
    }
}
