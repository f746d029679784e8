//! Numerical evaluation of expressions.

use super::expr::{Expr, Node};

/// Evaluates the expression with the variable set to `x`.
///
/// Evaluation is plain `f64` arithmetic. It never fails; overflow and `NaN` propagate according
/// to IEEE 754 rules.
pub fn evaluate(expr: &Expr, x: f64) -> f64 {
    match expr.node() {
        Node::Constant(value) => *value,
        Node::Variable => x,
        Node::Add(lhs, rhs) => evaluate(lhs, x) + evaluate(rhs, x),
        Node::Multiply(lhs, rhs) => evaluate(lhs, x) * evaluate(rhs, x),
    }
}
