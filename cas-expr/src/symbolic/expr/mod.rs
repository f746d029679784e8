//! The expression tree shared by every symbolic operation in this crate.
//!
//! An expression is made of [`Node`]s, each held through an [`Expr`] handle. [`Expr`] is a thin
//! wrapper around an [`Arc<Node>`](Arc): cloning a handle is cheap and shares the underlying node
//! instead of copying it. Nodes are never mutated once created, so a sub-tree can be shared
//! freely between any number of parent trees, and can be read from multiple threads at once.
//!
//! Trees are built bottom-up with the construction helpers [`constant`], [`variable`], [`add`],
//! and [`multiply`], or with the `+` and `*` operators on [`Expr`]. None of these perform any
//! simplification; `constant(2.0) + constant(3.0)` is a sum node with two children, not the
//! constant `5`.
//!
//! ```
//! use cas_expr::symbolic::expr::{add, constant, multiply, variable, Node};
//!
//! let f = add(variable(), multiply(constant(2.0), variable()));
//! assert!(matches!(f.node(), Node::Add(..)));
//! assert_eq!(f.to_string(), "(x + (2 * x))");
//! assert_eq!(f.node_count(), 5);
//! ```
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementations for [`Expr`] and [`Node`] compare trees **structurally**:
//! two expressions are equal if they are the same kind of node, with equal values and equal
//! children in the same order. `x + 2` and `2 + x` are not equal, and neither are `x + x` and
//! `2 * x`, even though they are semantically the same. To check whether two handles point at the
//! very same node, use [`Expr::ptr_eq`].

mod iter;

use iter::ExprIter;
use std::{fmt, ops::{Add, Mul}, sync::Arc};
use super::{derivative, eval, simplify};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The name of the only variable an expression can contain.
pub const VARIABLE_NAME: &str = "x";

/// A single node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A fixed number, such as `2` or `0.5`.
    Constant(f64),

    /// The variable `x`.
    Variable,

    /// The sum of two expressions.
    Add(Expr, Expr),

    /// The product of two expressions.
    Multiply(Expr, Expr),
}

/// A shared handle to an immutable expression tree.
///
/// See the [module-level documentation](self) for more information.
///
/// With the `serde` feature enabled, an [`Expr`] serializes as the [`Node`] it points to. Shared
/// sub-trees are written out once per occurrence, and deserialize into separate (but equal)
/// nodes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Expr(Arc<Node>);

impl Expr {
    /// Allocates a new node and returns a handle to it.
    pub fn new(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the node this handle points to.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Returns true if both handles point to the same node in memory.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// If the expression is a [`Node::Constant`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self.node() {
            Node::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Node::Constant`] with the given value.
    pub fn is_constant_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// Returns true if the expression is the [`Node::Variable`].
    pub fn is_variable(&self) -> bool {
        matches!(self.node(), Node::Variable)
    }

    /// If the expression is a linear term `c * x`, returns the coefficient `c`.
    ///
    /// Only a product whose **left** operand is a [`Node::Constant`] and whose **right** operand
    /// is the [`Node::Variable`] qualifies. `x * c` returns [`None`].
    pub fn as_linear_term(&self) -> Option<f64> {
        match self.node() {
            Node::Multiply(lhs, rhs) if rhs.is_variable() => lhs.as_constant(),
            _ => None,
        }
    }

    /// Evaluates the expression with the variable set to `x`.
    ///
    /// See [`eval::evaluate`].
    pub fn evaluate(&self, x: f64) -> f64 {
        eval::evaluate(self, x)
    }

    /// Returns the derivative of the expression with respect to the variable. The result is not
    /// simplified.
    ///
    /// See [`derivative::derivative`].
    pub fn derivative(&self) -> Self {
        derivative::derivative(self)
    }

    /// Simplifies the expression with a single bottom-up pass of the simplification rules.
    ///
    /// See [`simplify::simplify`].
    pub fn simplify(&self) -> Self {
        simplify::simplify(self)
    }

    /// Renders the expression as fully parenthesized text. This is the same as the [`Display`]
    /// implementation.
    ///
    /// [`Display`]: fmt::Display
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree. A shared sub-tree is counted once for every
    /// place it appears in.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

/// Creates a [`Node::Constant`] with the given value.
pub fn constant(value: f64) -> Expr {
    Expr::new(Node::Constant(value))
}

/// Creates the [`Node::Variable`].
pub fn variable() -> Expr {
    Expr::new(Node::Variable)
}

/// Creates a [`Node::Add`] with the given operands. No simplification is done.
pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    Expr::new(Node::Add(lhs, rhs))
}

/// Creates a [`Node::Multiply`] with the given operands. No simplification is done.
pub fn multiply(lhs: Expr, rhs: Expr) -> Expr {
    Expr::new(Node::Multiply(lhs, rhs))
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable => write!(f, "{}", VARIABLE_NAME),
            Self::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Self::Multiply(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node().fmt(f)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        constant(value)
    }
}

impl From<Node> for Expr {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

/// Adds two [`Expr`]s together. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        multiply(self, rhs)
    }
}
