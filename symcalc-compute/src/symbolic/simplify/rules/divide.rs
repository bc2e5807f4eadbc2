//! Simplification rules for expressions involving division.

use crate::symbolic::{
    simplify::{rules::{as_neg, do_divide}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `0/a = 0`
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |numerator, _| {
        numerator.is_number_eq(0.0).then(|| Expr::number(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |numerator, denominator| {
        denominator.is_number_eq(1.0).then(|| numerator.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `(-a)/b = -(a/b)`
/// `a/(-b) = -(a/b)`
pub fn divide_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_divide(expr, |numerator, denominator| {
        if let Some(negated) = as_neg(numerator) {
            Some(Expr::neg(Expr::div(negated.clone(), denominator.clone())))
        } else {
            as_neg(denominator).map(|negated| Expr::neg(Expr::div(numerator.clone(), negated.clone())))
        }
    })?;

    step_collector.push(Step::DivideNegative);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_zero(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| divide_negative(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn zero_numerator() {
        assert_eq!(all(&expr("0/x"), &mut ()), Some(Expr::number(0.0)));
    }

    #[test]
    fn unit_denominator() {
        assert_eq!(all(&expr("sin(x)/1"), &mut ()), Some(expr("sin(x)")));
    }

    #[test]
    fn negation_moves_out() {
        assert_eq!(all(&expr("-x/y"), &mut ()), Some(expr("-(x/y)")));
        assert_eq!(all(&expr("x/-y"), &mut ()), Some(expr("-(x/y)")));
        assert_eq!(all(&expr("x/y"), &mut ()), None);
    }
}
