//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the rewritten expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given and its direct children; the
//! simplifier is responsible for descending into the tree.
//!
//! The order of the rules matters. [`all`] tries them in a fixed order and returns the result of
//! the first rule that applies.

pub mod add;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod negate;
pub mod power;
pub mod regroup;
pub mod subtract;

use crate::symbolic::step_collector::StepCollector;
use symcalc_parser::expr::{BinaryOp, Expr};
use super::{options::SimplifyOptions, step::Step};

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right-hand-side.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    op: BinaryOp,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr.as_binary() {
        Some((expr_op, lhs, rhs)) if expr_op == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is an addition, calls the given transformation function with the terms.
pub(crate) fn do_add(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinaryOp::Add, f)
}

/// If the expression is a subtraction, calls the given transformation function with the minuend
/// and subtrahend.
pub(crate) fn do_subtract(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinaryOp::Sub, f)
}

/// If the expression is a multiplication, calls the given transformation function with the
/// factors.
pub(crate) fn do_multiply(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinaryOp::Mul, f)
}

/// If the expression is a division, calls the given transformation function with the numerator
/// and denominator.
pub(crate) fn do_divide(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinaryOp::Div, f)
}

/// If the expression is a power expression, calls the given transformation function with the
/// base and exponent.
pub(crate) fn do_power(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    do_binary(expr, BinaryOp::Pow, f)
}

/// If the expression is a negation, returns the negated expression.
pub(crate) fn as_neg(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Neg(operand) => Some(&**operand),
        _ => None,
    }
}

/// Applies all rules, in order.
///
/// The regrouping rules in [`regroup`] are only applied if [`SimplifyOptions::regroup`] is set.
pub fn all(
    expr: &Expr,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    fold::all(expr, step_collector)
        .or_else(|| negate::all(expr, step_collector))
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| subtract::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
        .or_else(|| power::all(expr, step_collector))
        .or_else(|| {
            if options.regroup {
                regroup::all(expr, step_collector)
            } else {
                None
            }
        })
}

#[cfg(test)]
pub(crate) mod test_util {
    use symcalc_parser::{expr::Expr, parse};

    /// Parses the given input, panicking on failure.
    pub(crate) fn expr(input: &str) -> Expr {
        parse(input).unwrap()
    }
}
