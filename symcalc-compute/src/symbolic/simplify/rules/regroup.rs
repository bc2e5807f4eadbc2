//! Associative regrouping rules.
//!
//! These rules move variables to the outside of chains of additions and multiplications, and
//! move literals together, so that constant folding can combine them. They are only applied if
//! [`SimplifyOptions::regroup`] is set.
//!
//! [`SimplifyOptions::regroup`]: crate::symbolic::simplify::SimplifyOptions::regroup

use crate::symbolic::{
    simplify::{rules::{do_add, do_binary, do_multiply, do_subtract}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::{BinaryOp, Expr};

/// If the expression is `(v op a) op b` for a variable `v` and a non-variable `b`, returns
/// `(b op a) op v`.
fn move_variable_out(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if rhs.is_variable() {
        return None;
    }

    do_binary(lhs, op, |var, inner| {
        var.is_variable().then(|| {
            Expr::binary(op, Expr::binary(op, rhs.clone(), inner.clone()), var.clone())
        })
    })
}

/// `(x+a)+b = (b+a)+x`
/// `(x*a)*b = (b*a)*x`
pub fn regroup_variable(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| move_variable_out(BinaryOp::Add, lhs, rhs))
        .or_else(|| do_multiply(expr, |lhs, rhs| move_variable_out(BinaryOp::Mul, lhs, rhs)))?;

    step_collector.push(Step::RegroupVariable);
    Some(opt)
}

/// `(a-b)+c = (a+c)-b`, unless `a` and `b` are both numbers
pub fn regroup_difference_plus(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, c| {
        do_subtract(lhs, |a, b| {
            if a.is_number() && b.is_number() {
                None
            } else {
                Some(Expr::sub(Expr::add(a.clone(), c.clone()), b.clone()))
            }
        })
    })?;

    step_collector.push(Step::RegroupDifferencePlus);
    Some(opt)
}

/// `(a-b)-c = a-(b+c)`
pub fn regroup_difference_minus(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, c| {
        do_subtract(lhs, |a, b| Some(Expr::sub(a.clone(), Expr::add(b.clone(), c.clone()))))
    })?;

    step_collector.push(Step::RegroupDifferenceMinus);
    Some(opt)
}

/// `(a+b)-c = a-(c-b)`, unless `a` and `b` are both numbers
pub fn regroup_sum_minus(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_subtract(expr, |lhs, c| {
        do_add(lhs, |a, b| {
            if a.is_number() && b.is_number() {
                None
            } else {
                Some(Expr::sub(a.clone(), Expr::sub(c.clone(), b.clone())))
            }
        })
    })?;

    step_collector.push(Step::RegroupSumMinus);
    Some(opt)
}

/// Applies all regrouping rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    regroup_variable(expr, step_collector)
        .or_else(|| regroup_difference_plus(expr, step_collector))
        .or_else(|| regroup_difference_minus(expr, step_collector))
        .or_else(|| regroup_sum_minus(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn variable_moves_out() {
        assert_eq!(all(&expr("(x+2)+3"), &mut ()), Some(expr("(3+2)+x")));
        assert_eq!(all(&expr("(x*2)*3"), &mut ()), Some(expr("(3*2)*x")));
    }

    #[test]
    fn variable_stays_when_other_term_is_variable() {
        assert_eq!(regroup_variable(&expr("(x+y)+z"), &mut ()), None);
    }

    #[test]
    fn differences() {
        assert_eq!(all(&expr("(x-2)+3"), &mut ()), Some(expr("(x+3)-2")));
        assert_eq!(all(&expr("(x-2)-3"), &mut ()), Some(expr("x-(2+3)")));
        assert_eq!(all(&expr("(x+2)-3"), &mut ()), Some(expr("x-(3-2)")));
    }

    #[test]
    fn literal_pairs_are_left_alone() {
        assert_eq!(regroup_difference_plus(&expr("(1-2)+x"), &mut ()), None);
        assert_eq!(regroup_sum_minus(&expr("(1+2)-x"), &mut ()), None);
    }
}
