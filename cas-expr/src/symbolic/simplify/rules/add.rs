//! Simplification rules for expressions involving addition, including combining like terms.

use crate::{
    step_collector::StepCollector,
    symbolic::{expr::{constant, multiply, variable, Expr}, simplify::step::Step},
};

/// `2+3 = 5`
pub fn add_constants(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (lhs, rhs) = (lhs.as_constant()?, rhs.as_constant()?);
    step_collector.push(Step::AddConstants);
    Some(constant(lhs + rhs))
}

/// `a+0 = a`
/// `0+a = a`
///
/// The surviving operand is returned as is, sharing its node with the input.
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if rhs.is_constant_value(0.0) {
        lhs.clone()
    } else if lhs.is_constant_value(0.0) {
        rhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines linear terms in the variable.
///
/// `a*x + b*x = (a+b)*x`
/// `x + b*x = (1+b)*x`
/// `a*x + x = (a+1)*x`
///
/// A linear term is only recognized with the constant on the left, as in `2 * x`. The commuted
/// form `x * 2` is left alone, and so is `x + x`.
pub fn combine_like_terms(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let coefficient = match (lhs.as_linear_term(), rhs.as_linear_term()) {
        (Some(lhs), Some(rhs)) => lhs + rhs,
        (None, Some(rhs)) if lhs.is_variable() => 1.0 + rhs,
        (Some(lhs), None) if rhs.is_variable() => lhs + 1.0,
        _ => return None,
    };

    step_collector.push(Step::CombineLikeTerms);
    Some(multiply(constant(coefficient), variable()))
}

/// Applies all addition rules, returning the result of the first one that applies.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add_constants(lhs, rhs, step_collector)
        .or_else(|| add_zero(lhs, rhs, step_collector))
        .or_else(|| combine_like_terms(lhs, rhs, step_collector))
}
