//! Exact values of the sine function at special angles.

use crate::primitive::rational;
use crate::symbolic::expr::SymExpr;
use once_cell::sync::Lazy;
use rug::Rational;

/// The sine of the angles `0`, `pi/6`, `pi/4`, `pi/3` and `pi/2`.
///
/// The angles are given as multiples of `pi`. Values of the sine function at other angles with the
/// same reference angle are found by symmetry, and the values of the remaining trigonometric
/// functions are derived from the sine.
pub static SIN_TABLE: Lazy<Vec<(Rational, SymExpr)>> = Lazy::new(|| vec![
    (rational(0, 1), SymExpr::int(0)),
    (rational(1, 6), SymExpr::rational(1, 2)),
    (rational(1, 4), SymExpr::Mul(vec![SymExpr::rational(1, 2), SymExpr::int(2).sqrt()])),
    (rational(1, 3), SymExpr::Mul(vec![SymExpr::rational(1, 2), SymExpr::int(3).sqrt()])),
    (rational(1, 2), SymExpr::int(1)),
]);

/// Looks up the sine of `pi*angle`, where `0 <= angle <= 1/2`.
pub fn lookup(angle: &Rational) -> Option<SymExpr> {
    SIN_TABLE.iter()
        .find(|(input, _)| input == angle)
        .map(|(_, output)| output.clone())
}
