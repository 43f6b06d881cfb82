//! Symbolic expressions and the algorithms mathsolver builds on: canonical simplification,
//! expansion, collection of terms, polynomial coefficients, and solving polynomial equations.
//!
//! ```
//! use mathsolver_cas::solve::{solve, Equation};
//! use mathsolver_cas::symbolic::SymExpr;
//! use mathsolver_parser::{parse_input, Input};
//!
//! let Input::Equation { lhs, rhs, .. } = parse_input("x^2 - 5x + 6 = 0").unwrap() else {
//!     unreachable!();
//! };
//! let equation = Equation::new(SymExpr::try_from(lhs).unwrap(), SymExpr::try_from(rhs).unwrap());
//! let solutions = solve(&equation, "x").unwrap();
//! assert_eq!(solutions, vec![SymExpr::int(3), SymExpr::int(2)]);
//! ```

pub mod cas;
pub mod error;
pub mod numerical;
pub mod primitive;
pub mod solve;
pub mod symbolic;

pub use cas::{Cas, Symbolic};
pub use solve::Equation;
