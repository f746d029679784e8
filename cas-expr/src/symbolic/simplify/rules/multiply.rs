//! Simplification rules for expressions involving multiplication.

use crate::{
    step_collector::StepCollector,
    symbolic::{expr::{constant, Expr}, simplify::step::Step},
};

/// `2*3 = 6`
pub fn multiply_constants(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (lhs, rhs) = (lhs.as_constant()?, rhs.as_constant()?);
    step_collector.push(Step::MultiplyConstants);
    Some(constant(lhs * rhs))
}

/// `a*0 = 0`
/// `0*a = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if rhs.is_constant_value(0.0) || lhs.is_constant_value(0.0) {
        step_collector.push(Step::MultiplyZero);
        Some(constant(0.0))
    } else {
        None
    }
}

/// `a*1 = a`
/// `1*a = a`
///
/// The surviving operand is returned as is, sharing its node with the input.
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = if rhs.is_constant_value(1.0) {
        lhs.clone()
    } else if lhs.is_constant_value(1.0) {
        rhs.clone()
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules, returning the result of the first one that applies.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_constants(lhs, rhs, step_collector)
        .or_else(|| multiply_zero(lhs, rhs, step_collector))
        .or_else(|| multiply_one(lhs, rhs, step_collector))
}
