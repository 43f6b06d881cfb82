//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`SymExpr`] nodes. It's
//! similar to the [`mathsolver_parser::parser::ast::Expr`] nodes produced by [`mathsolver_parser`],
//! with the main difference being that [`SymExpr`] nodes **flatten** out the tree structure.
//!
//! For example, the expression `x + (y + z)` is represented as a single [`SymExpr::Add`] node
//! with _three_ children, `x`, `y`, and `z`. This makes combining like terms (`x + x = 2*x`) and
//! like factors (`x * x^2 = x^3`) a matter of scanning one list.
//!
//! Conversion from [`mathsolver_parser::parser::ast::Expr`] is done with [`TryFrom`], and fails
//! only for malformed number literals and function calls with the wrong number of arguments.
//!
//! ```
//! use mathsolver_cas::symbolic::expr::{Primary, SymExpr};
//! use mathsolver_parser::parser::{ast::Expr, Parser};
//!
//! let ast_expr = Parser::new("x + (y + z)").try_parse_full::<Expr>().unwrap();
//! let expr = SymExpr::try_from(ast_expr).unwrap();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::Primary(Primary::Symbol("x".to_string())),
//!     SymExpr::Primary(Primary::Symbol("y".to_string())),
//!     SymExpr::Primary(Primary::Symbol("z".to_string())),
//! ]));
//! ```
//!
//! # Transformations
//!
//! Three transformations are offered on top of the canonical form:
//!
//! - [`expand`](expand::expand) multiplies out products and integer powers of sums;
//! - [`collect`](collect::collect) groups the terms of a sum by the power of one variable;
//! - [`simplify`] (and [`simplify::general`], which also applies trigonometric identities) bring an
//!   expression into canonical form by rewriting it with a set of rules until none applies.
//!
//! ```
//! use mathsolver_cas::symbolic::{simplify, SymExpr};
//! use mathsolver_parser::parser::{ast::Expr, Parser};
//!
//! let ast_expr = Parser::new("x + x + x").try_parse_full::<Expr>().unwrap();
//! let simplified = simplify(&SymExpr::try_from(ast_expr).unwrap());
//! assert_eq!(simplified.to_string(), "3*x");
//! ```
//!
//! [`poly`] extracts the coefficients of polynomials, which is what the
//! [`solve`](crate::solve) module works on.

pub mod collect;
pub mod expand;
pub mod expr;
pub mod poly;
pub mod simplify;
pub mod step_collector;

pub use expr::SymExpr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
