//! Algebraic expressions in a single variable `x`, built from constants, addition, and
//! multiplication.
//!
//! Expressions are immutable trees of reference-counted nodes. Every operation, whether
//! [evaluation](symbolic::expr::Expr::evaluate),
//! [differentiation](symbolic::expr::Expr::derivative), or
//! [simplification](symbolic::expr::Expr::simplify), returns a fresh value and never modifies
//! the tree it was called on.
//!
//! ```
//! use cas_expr::symbolic::expr::{add, constant, multiply, variable};
//!
//! // x + 2x
//! let f = add(variable(), multiply(constant(2.0), variable()));
//! assert_eq!(f.to_string(), "(x + (2 * x))");
//! assert_eq!(f.simplify().to_string(), "(3 * x)");
//! assert_eq!(f.derivative().simplify().to_string(), "3");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`serde`] traits for [`Expr`], [`Node`], and
//! [`Step`](symbolic::simplify::step::Step).
//!
//! [`serde`]: https://crates.io/crates/serde

pub mod step_collector;
pub mod symbolic;

pub use step_collector::StepCollector;
pub use symbolic::expr::{Expr, Node};
