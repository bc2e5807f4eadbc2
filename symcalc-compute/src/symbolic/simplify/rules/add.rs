//! Simplification rules for expressions involving addition.

use crate::symbolic::{
    simplify::{rules::{as_neg, do_add}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `2+a = a+2`
pub fn move_literal_right(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if lhs.is_number() && !rhs.is_number() {
            Some(Expr::add(rhs.clone(), lhs.clone()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MoveLiteralRight);
    Some(opt)
}

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if rhs.is_number_eq(0.0) {
            Some(lhs.clone())
        } else if lhs.is_number_eq(0.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a+(-2) = a-2`
/// `a+(-b) = a-b`
pub fn add_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        if let Some(value) = rhs.as_number().filter(|value| *value < 0.0) {
            return Some(Expr::sub(lhs.clone(), Expr::number(-value)));
        }

        as_neg(rhs).map(|negated| Expr::sub(lhs.clone(), negated.clone()))
    })?;

    step_collector.push(Step::AddNegative);
    Some(opt)
}

/// `(-a)+b = b-a`
pub fn add_negative_first(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |lhs, rhs| {
        as_neg(lhs).map(|negated| Expr::sub(rhs.clone(), negated.clone()))
    })?;

    step_collector.push(Step::AddNegativeFirst);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    move_literal_right(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| add_negative(expr, step_collector))
        .or_else(|| add_negative_first(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn literal_moves_right() {
        assert_eq!(all(&expr("2+x"), &mut ()), Some(expr("x+2")));
        assert_eq!(move_literal_right(&expr("x+2"), &mut ()), None);
        assert_eq!(move_literal_right(&expr("2+3"), &mut ()), None);
    }

    #[test]
    fn zero_term() {
        assert_eq!(all(&expr("x+0"), &mut ()), Some(expr("x")));
        assert_eq!(add_zero(&expr("0+sin(y)"), &mut ()), Some(expr("sin(y)")));
    }

    #[test]
    fn negative_terms_become_subtraction() {
        let with_literal = Expr::add(Expr::variable('x'), Expr::number(-3.0));
        assert_eq!(all(&with_literal, &mut ()), Some(expr("x-3")));
        assert_eq!(all(&expr("x+-y"), &mut ()), Some(expr("x-y")));
        assert_eq!(all(&expr("-x+y"), &mut ()), Some(expr("y-x")));
    }

    #[test]
    fn nan_is_not_negative() {
        let expr = Expr::add(Expr::variable('x'), Expr::number(f64::NAN));
        assert_eq!(all(&expr, &mut ()), None);
    }

    #[test]
    fn records_step() {
        let mut steps: Vec<Step> = Vec::new();
        all(&expr("x+-y"), &mut steps);
        assert_eq!(steps, vec![Step::AddNegative]);
    }
}
