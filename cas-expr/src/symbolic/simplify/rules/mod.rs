//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the two **already simplified** operands of a
//! sum or product, and returns `Some(expr)` with the replacement for the whole node if the rule
//! applies, or `None` if the rule does not apply. A rule that fires pushes its [`Step`] to the
//! step collector.
//!
//! [`Step`]: super::step::Step

pub mod add;
pub mod multiply;
