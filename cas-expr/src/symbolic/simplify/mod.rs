//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which reduces an expression using a small,
//! fixed set of rewriting rules. It makes exactly **one** bottom-up pass over the tree: the
//! operands of a node are simplified first, then the rules are tried once on the node itself,
//! and the first rule that applies decides the result.
//!
//! For a product `a * b`, with `a` and `b` already simplified, the rules are tried in this order:
//!
//! 1. both operands are constants: the product is folded into one constant.
//! 2. `a*0 = 0`, then `0*a = 0`.
//! 3. `a*1 = a`, then `1*a = a`.
//!
//! For a sum `a + b`:
//!
//! 1. both operands are constants: the sum is folded into one constant.
//! 2. `a+0 = a`, then `0+a = a`.
//! 3. linear terms are combined: `c1*x + c2*x`, `x + c*x`, and `c*x + x` become a single
//!    `c*x`.
//!
//! If no rule applies, a new node is built from the simplified operands. Constants and the
//! variable are copied into new nodes, while an operand kept by an identity rule is returned as
//! is, sharing its node with the input tree.
//!
//! Because the pass does not repeat, the result is not a normal form. For example,
//! `2x + -2x` becomes `0 * x`, which a second call to [`simplify`] turns into `0`.
//!
//! See the [`rules`] module for the individual rules.

pub mod rules;
pub mod step;

use crate::step_collector::StepCollector;
use step::Step;
use super::expr::{add, constant, multiply, variable, Expr, Node};

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr.node() {
        Node::Constant(value) => constant(*value),
        Node::Variable => variable(),
        Node::Add(lhs, rhs) => {
            let lhs = inner_simplify(lhs, step_collector);
            let rhs = inner_simplify(rhs, step_collector);
            rules::add::all(&lhs, &rhs, step_collector)
                .unwrap_or_else(|| add(lhs, rhs))
        },
        Node::Multiply(lhs, rhs) => {
            let lhs = inner_simplify(lhs, step_collector);
            let rhs = inner_simplify(rhs, step_collector);
            rules::multiply::all(&lhs, &rhs, step_collector)
                .unwrap_or_else(|| multiply(lhs, rhs))
        },
    }
}

/// Simplify the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression, reporting every rule that fires to the given step collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    inner_simplify(expr, step_collector)
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order the rules fired (innermost nodes first, left before right). This is
/// useful for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps: Vec<Step> = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// `x + 2x`
    fn x_plus_2x() -> Expr {
        add(variable(), multiply(constant(2.0), variable()))
    }

    #[test]
    fn leaves_are_copied() {
        let c = constant(4.0);
        let simplified = simplify(&c);
        assert_eq!(simplified, c);
        assert!(!Expr::ptr_eq(&simplified, &c));

        let x = variable();
        let simplified = simplify(&x);
        assert_eq!(simplified, x);
        assert!(!Expr::ptr_eq(&simplified, &x));
    }

    #[test]
    fn fold_sum() {
        let expr = add(constant(2.0), constant(3.0));
        assert_eq!(simplify(&expr).to_string(), "5");
    }

    #[test]
    fn fold_nested() {
        // (2 * 3) + (1 + 4)
        let expr = add(
            multiply(constant(2.0), constant(3.0)),
            add(constant(1.0), constant(4.0)),
        );
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, constant(11.0));
        assert_eq!(steps, vec![
            Step::MultiplyConstants,
            Step::AddConstants,
            Step::AddConstants,
        ]);
    }

    #[test]
    fn multiply_zero() {
        let expr = multiply(constant(0.0), variable());
        assert_eq!(simplify(&expr).to_string(), "0");

        let expr = multiply(add(variable(), constant(1.0)), constant(0.0));
        assert_eq!(simplify(&expr).to_string(), "0");
    }

    #[test]
    fn multiply_one() {
        let expr = multiply(constant(1.0), variable());
        assert_eq!(simplify(&expr).to_string(), variable().to_string());

        let expr = multiply(add(variable(), constant(1.0)), constant(1.0));
        assert_eq!(simplify(&expr).to_string(), "(x + 1)");
    }

    #[test]
    fn add_zero() {
        let expr = add(constant(0.0), multiply(variable(), variable()));
        assert_eq!(simplify(&expr).to_string(), "(x * x)");

        let expr = add(variable(), constant(0.0));
        assert_eq!(simplify(&expr).to_string(), "x");
    }

    #[test]
    fn identity_returns_operand() {
        // (x + 1) * 1: the sum is rebuilt by the pass, then returned as is by `a*1 = a`
        let expr = multiply(add(variable(), constant(1.0)), constant(1.0));
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified, add(variable(), constant(1.0)));
        assert_eq!(steps, vec![Step::MultiplyOne]);

        let expr = add(multiply(variable(), constant(3.0)), constant(0.0));
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified.to_string(), "(x * 3)");
        assert_eq!(steps, vec![Step::AddZero]);
    }

    #[test]
    fn linear_term_merge() {
        let expr = x_plus_2x();
        assert_eq!(simplify(&expr).to_string(), "(3 * x)");

        let expr = add(multiply(constant(2.0), variable()), multiply(constant(5.0), variable()));
        assert_eq!(simplify(&expr).to_string(), "(7 * x)");

        let expr = add(multiply(constant(2.0), variable()), variable());
        assert_eq!(simplify(&expr).to_string(), "(3 * x)");
    }

    #[test]
    fn linear_term_merge_after_folding() {
        // (1 + 1) * x + (0 + x)
        let expr = add(
            multiply(add(constant(1.0), constant(1.0)), variable()),
            add(constant(0.0), variable()),
        );
        let (simplified, steps) = simplify_with_steps(&expr);
        assert_eq!(simplified.to_string(), "(3 * x)");
        assert_eq!(steps, vec![
            Step::AddConstants,
            Step::AddZero,
            Step::CombineLikeTerms,
        ]);
    }

    #[test]
    fn commuted_linear_term_is_kept() {
        // x + x * 2: the product has the constant on the right, so it is not a linear term
        let expr = add(variable(), multiply(variable(), constant(2.0)));
        assert_eq!(simplify(&expr).to_string(), "(x + (x * 2))");
    }

    #[test]
    fn nested_sums_are_not_collected() {
        // 2x + (x + 1): the `x` inside the inner sum is not reached
        let expr = add(
            multiply(constant(2.0), variable()),
            add(variable(), constant(1.0)),
        );
        assert_eq!(simplify(&expr).to_string(), "((2 * x) + (x + 1))");

        // x + (x + 2x): the inner sum becomes a linear term first, which the outer sum can merge
        let expr = add(variable(), x_plus_2x());
        assert_eq!(simplify(&expr).to_string(), "(4 * x)");
    }

    #[test]
    fn single_pass() {
        // 2x + -2x
        let expr = add(
            multiply(constant(2.0), variable()),
            multiply(constant(-2.0), variable()),
        );
        let once = simplify(&expr);
        assert_eq!(once.to_string(), "(0 * x)");
        assert_eq!(simplify(&once).to_string(), "0");
    }

    #[test]
    fn simplified_is_stable() {
        let exprs = [
            x_plus_2x(),
            add(constant(2.0), constant(3.0)),
            multiply(constant(1.0), variable()),
            multiply(variable(), variable()).derivative(),
            x_plus_2x().derivative(),
            add(variable(), multiply(variable(), constant(2.0))),
        ];

        for expr in exprs {
            let once = simplify(&expr);
            let twice = simplify(&once);
            assert_eq!(once.to_string(), twice.to_string());
        }
    }

    #[test]
    fn derivative_then_simplify() {
        let f = x_plus_2x();
        let df = f.derivative();
        assert_eq!(df.to_string(), "(1 + ((0 * x) + (2 * 1)))");

        let (simplified, steps) = simplify_with_steps(&df);
        assert_eq!(simplified.to_string(), "3");
        assert_eq!(steps, vec![
            Step::MultiplyZero,
            Step::MultiplyConstants,
            Step::AddConstants,
            Step::AddConstants,
        ]);
    }

    #[test]
    fn simplify_then_derivative() {
        let f = x_plus_2x().simplify();
        assert_eq!(f.to_string(), "(3 * x)");

        let df = f.derivative();
        assert_eq!(df.to_string(), "((0 * x) + (3 * 1))");
        assert_eq!(simplify(&df).to_string(), "3");
    }

    #[test]
    fn both_orders_agree() {
        let f = x_plus_2x();
        let a = f.derivative().simplify();
        let b = f.simplify().derivative().simplify();
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn square() {
        let g = multiply(variable(), variable());
        let dg = g.derivative();
        assert_eq!(dg.to_string(), "((1 * x) + (x * 1))");

        let dg = simplify(&dg);
        assert_eq!(dg.to_string(), "(x + x)");
        assert_eq!(dg.evaluate(5.0), 10.0);
    }

    #[test]
    fn collector_sees_same_result() {
        let expr = multiply(variable(), variable()).derivative();
        let mut steps: Vec<Step> = Vec::new();
        let collected = simplify_with(&expr, &mut steps);
        assert_eq!(collected, simplify(&expr));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::MultiplyOne]);
    }
}
