//! Constant folding rules, which evaluate operations whose operands are all numbers.
//!
//! Folding follows IEEE-754 semantics: dividing by zero produces an infinity or `NaN`, and so
//! does taking the logarithm of a non-positive number. These are ordinary numbers as far as the
//! simplifier is concerned.

use crate::symbolic::{simplify::step::Step, step_collector::StepCollector};
use symcalc_parser::expr::Expr;

/// `2+3 = 5`
/// `2^10 = 1024`
/// `1/0 = inf`
/// etc.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (op, lhs, rhs) = expr.as_binary()?;
    let value = op.apply(lhs.as_number()?, rhs.as_number()?);

    step_collector.push(Step::FoldConstants);
    Some(Expr::number(value))
}

/// `sin(0) = 0`
/// `exp(0) = 1`
/// etc.
pub fn fold_function(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let (func, operand) = expr.as_func()?;
    let value = func.apply(operand.as_number()?);

    step_collector.push(Step::FoldFunction);
    Some(Expr::number(value))
}

/// Applies all constant folding rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| fold_function(expr, step_collector))
}
