//! Simplification rules for negation.

use crate::symbolic::{
    simplify::{rules::as_neg, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `-(0) = 0`
/// `-(2) = -2`
pub fn negate_number(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let value = as_neg(expr)?.as_number()?;

    step_collector.push(Step::NegateNumber);
    if value == 0.0 {
        Some(Expr::number(0.0))
    } else {
        Some(Expr::number(-value))
    }
}

/// `--a = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let inner = as_neg(as_neg(expr)?)?;

    step_collector.push(Step::DoubleNegation);
    Some(inner.clone())
}

/// Applies all negation rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    negate_number(expr, step_collector)
        .or_else(|| double_negation(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn negated_numbers() {
        assert_eq!(all(&expr("-2"), &mut ()), Some(Expr::number(-2.0)));
        assert_eq!(all(&expr("-0"), &mut ()), Some(Expr::number(0.0)));

        // the zero keeps a positive sign
        let zero = all(&expr("-0"), &mut ()).and_then(|expr| expr.as_number()).unwrap();
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn double_negation_cancels() {
        assert_eq!(all(&expr("--x"), &mut ()), Some(Expr::variable('x')));
        assert_eq!(all(&expr("---x"), &mut ()), Some(expr("-x")));
        assert_eq!(all(&expr("-x"), &mut ()), None);
    }

    #[test]
    fn negated_literal_is_not_double_negation() {
        let mut steps: Vec<Step> = Vec::new();
        assert_eq!(all(&Expr::neg(Expr::number(-3.0)), &mut steps), Some(Expr::number(3.0)));
        assert_eq!(steps, vec![Step::NegateNumber]);
    }
}
