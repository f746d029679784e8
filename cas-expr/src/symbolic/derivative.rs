//! Symbolic differentiation with respect to the variable.

use super::expr::{add, constant, multiply, Expr, Node};

/// `(f + g)' = f' + g'`
fn sum_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    add(derivative(lhs), derivative(rhs))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Expr, rhs: &Expr) -> Expr {
    add(
        multiply(derivative(lhs), rhs.clone()),
        multiply(lhs.clone(), derivative(rhs)),
    )
}

/// Produces the derivative of the given expression.
///
/// The rules are applied as written, with no simplification in between; the derivative of a
/// constant is the constant `0` even where it is later multiplied away. Call
/// [`simplify`](super::simplify()) on the result to clean it up. Operands of the input that are
/// copied into the result (such as `g` in `f' * g`) are shared, not cloned.
pub fn derivative(f: &Expr) -> Expr {
    match f.node() {
        Node::Constant(_) => constant(0.0),
        Node::Variable => constant(1.0),
        Node::Add(lhs, rhs) => sum_rule(lhs, rhs),
        Node::Multiply(lhs, rhs) => product_rule(lhs, rhs),
    }
}
