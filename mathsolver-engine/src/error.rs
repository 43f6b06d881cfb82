//! Kinds of errors that can occur while simplifying or solving.

use ariadne::Fmt;
use mathsolver_attrs::ErrorKind;
use mathsolver_error::EXPR;

/// The simplifier kept changing the expression without reaching a fixed point, either because it
/// ran out of passes or because it returned to an expression it had already produced.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("simplification did not converge after {} passes", passes),
    help = format!("the transformations keep rewriting `{}`", expr.fg(EXPR)),
)]
pub struct NotConverged {
    /// The number of passes made.
    pub passes: usize,

    /// The expression at the time the simplifier gave up, formatted.
    pub expr: String,
}

/// The sign of the discriminant of a quadratic equation cannot be decided, so the kind of its
/// roots is unknown.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot decide the sign of the discriminant `{}`", discriminant),
    help = "the discriminant must not contain symbols other than the unknown",
)]
pub struct IndeterminateDiscriminant {
    /// The discriminant, formatted.
    pub discriminant: String,
}
