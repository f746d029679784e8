//! Symbolic manipulation of single-variable expressions.
//!
//! # Expression representation
//!
//! An expression is a binary tree of [`Node`]s held through shared [`Expr`] handles. There are
//! exactly four kinds of node: a numeric constant, the variable `x`, a sum of two expressions,
//! and a product of two expressions. The set is closed, so every operation in this module is an
//! exhaustive `match` over [`Node`].
//!
//! Sub-trees are reference counted and never mutated after construction. The same sub-tree may
//! appear in several trees at once; for example, [`simplify()`] returns `a` itself for `a * 1`
//! rather than a copy of it.
//!
//! # Differentiation
//!
//! [`Expr::derivative`] applies the sum and product rules mechanically. The result is **not**
//! simplified, and may be much larger than the input:
//!
//! ```
//! use cas_expr::symbolic::expr::{multiply, variable};
//!
//! let g = multiply(variable(), variable());
//! assert_eq!(g.derivative().to_string(), "((1 * x) + (x * 1))");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] is a single bottom-up pass over the tree with a small, fixed set of rules:
//! constant folding, the additive and multiplicative identities, multiplication by zero, and
//! merging of linear terms such as `2x + 3x`. It does not repeat until a fixed point is reached,
//! and it is not a polynomial normalizer.
//!
//! ```
//! use cas_expr::symbolic::{expr::{multiply, variable}, simplify};
//!
//! let dg = multiply(variable(), variable()).derivative();
//! let simplified = simplify(&dg);
//! assert_eq!(simplified.to_string(), "(x + x)");
//! assert_eq!(simplified.evaluate(5.0), 10.0);
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod eval;
pub mod expr;
pub mod simplify;

pub use expr::{Expr, Node};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
