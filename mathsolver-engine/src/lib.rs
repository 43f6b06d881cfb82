//! Step-by-step simplification of expressions and solving of polynomial equations.
//!
//! The engine decides which transformation to apply next and records every one that changes the
//! problem, so the result comes with a readable trail of how it was reached. The algebra itself
//! is delegated to a [`Cas`](mathsolver_cas::Cas).
//!
//! - [`Simplifier`] makes passes of expand, collect, and simplify over an expression until a pass
//!   changes nothing.
//! - [`EquationSolver`] normalizes an equation to `expr = 0`, classifies it by degree, and solves
//!   it with the linear formula, the discriminant, or the general solver of the CAS.
//!
//! ```
//! use mathsolver_cas::Symbolic;
//! use mathsolver_engine::{EngineConfig, Outcome, Problem};
//!
//! let outcome = Problem::parse("x^2 - 5x + 6 = 0").unwrap()
//!     .run(&Symbolic, &EngineConfig::default())
//!     .unwrap();
//! let Outcome::Solved { variable, solutions, .. } = outcome else {
//!     unreachable!();
//! };
//! assert_eq!(variable, "x");
//! assert_eq!(solutions.iter().map(ToString::to_string).collect::<Vec<_>>(), ["3", "2"]);
//! ```

pub mod config;
pub mod error;
pub mod problem;
pub mod simplifier;
pub mod solver;
pub mod step;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use problem::{Outcome, Problem};
pub use simplifier::Simplifier;
pub use solver::EquationSolver;
pub use step::Step;
