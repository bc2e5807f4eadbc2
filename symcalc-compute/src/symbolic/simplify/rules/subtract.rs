//! Simplification rules for expressions involving subtraction.

use crate::symbolic::{
    simplify::{rules::do_subtract, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        rhs.is_number_eq(0.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::SubtractZero);
    Some(opt)
}

/// `0-a = -a`
pub fn subtract_from_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        lhs.is_number_eq(0.0).then(|| Expr::neg(rhs.clone()))
    })?;

    step_collector.push(Step::SubtractFromZero);
    Some(opt)
}

/// `a-(-2) = a+2`
pub fn subtract_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, rhs| {
        let value = rhs.as_number().filter(|value| *value < 0.0)?;
        Some(Expr::add(lhs.clone(), Expr::number(-value)))
    })?;

    step_collector.push(Step::SubtractNegative);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    subtract_zero(expr, step_collector)
        .or_else(|| subtract_from_zero(expr, step_collector))
        .or_else(|| subtract_negative(expr, step_collector))
}
