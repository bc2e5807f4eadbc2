//! Simplification rules for powers.

use crate::symbolic::{
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `0^a = 0`
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        lhs.is_number_eq(0.0).then(|| Expr::number(0.0))
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        lhs.is_number_eq(1.0).then(|| Expr::number(1.0))
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        rhs.is_number_eq(0.0).then(|| Expr::number(1.0))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.is_number_eq(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero_left(expr, step_collector)
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_zero(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn literal_base() {
        assert_eq!(all(&expr("0^x"), &mut ()), Some(Expr::number(0.0)));
        assert_eq!(all(&expr("1^x"), &mut ()), Some(Expr::number(1.0)));
    }

    #[test]
    fn literal_exponent() {
        assert_eq!(all(&expr("x^0"), &mut ()), Some(Expr::number(1.0)));
        assert_eq!(all(&expr("x^1"), &mut ()), Some(expr("x")));
        assert_eq!(all(&expr("x^2"), &mut ()), None);
    }

    #[test]
    fn base_rules_come_first() {
        let mut steps: Vec<Step> = Vec::new();
        all(&expr("0^(x*0)"), &mut steps);
        assert_eq!(steps, vec![Step::PowerZeroLeft]);
    }
}
