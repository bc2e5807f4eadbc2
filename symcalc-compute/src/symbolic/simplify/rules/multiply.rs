//! Simplification rules for expressions involving multiplication.

use crate::symbolic::{
    simplify::{rules::{as_neg, do_multiply}, step::Step},
    step_collector::StepCollector,
};
use symcalc_parser::expr::Expr;

/// `2*a = a*2`
pub fn move_literal_right(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if lhs.is_number() && !rhs.is_number() {
            Some(Expr::mul(rhs.clone(), lhs.clone()))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MoveLiteralRight);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if rhs.is_number_eq(1.0) {
            Some(lhs.clone())
        } else if lhs.is_number_eq(1.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        (lhs.is_number_eq(0.0) || rhs.is_number_eq(0.0)).then(|| Expr::number(0.0))
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `(-a)*b = -(a*b)`
/// `a*(-b) = -(a*b)`
pub fn multiply_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Some(negated) = as_neg(lhs) {
            Some(Expr::neg(Expr::mul(negated.clone(), rhs.clone())))
        } else {
            as_neg(rhs).map(|negated| Expr::neg(Expr::mul(lhs.clone(), negated.clone())))
        }
    })?;

    step_collector.push(Step::MultiplyNegative);
    Some(opt)
}

/// If the expression is a division with a literal numerator, returns the numerator and the
/// denominator.
fn literal_over(expr: &Expr) -> Option<(f64, &Expr)> {
    match expr {
        Expr::Div(numerator, denominator) => Some((numerator.as_number()?, &**denominator)),
        _ => None,
    }
}

/// Moves a literal numerator out of a fraction that is being multiplied.
///
/// `(2/a)*b = 2*(b/a)`
/// `a*(2/b) = 2*(a/b)`
///
/// If the other factor is also a literal, the literals are merged into the numerator instead:
///
/// `(2/a)*3 = (2*3)/a`
pub fn extract_numerator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |lhs, rhs| {
        if let Some((numerator, denominator)) = literal_over(lhs) {
            return Some(if rhs.is_number() {
                Expr::div(Expr::mul(Expr::number(numerator), rhs.clone()), denominator.clone())
            } else {
                Expr::mul(Expr::number(numerator), Expr::div(rhs.clone(), denominator.clone()))
            });
        }

        let (numerator, denominator) = literal_over(rhs)?;
        if lhs.is_number() {
            Some(Expr::div(Expr::mul(lhs.clone(), Expr::number(numerator)), denominator.clone()))
        } else {
            Some(Expr::mul(Expr::number(numerator), Expr::div(lhs.clone(), denominator.clone())))
        }
    })?;

    step_collector.push(Step::ExtractNumerator);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    move_literal_right(expr, step_collector)
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_negative(expr, step_collector))
        .or_else(|| extract_numerator(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use super::super::test_util::expr;

    #[test]
    fn literal_moves_right() {
        assert_eq!(all(&expr("3*x"), &mut ()), Some(expr("x*3")));
    }

    #[test]
    fn identity_and_zero() {
        assert_eq!(all(&expr("x*1"), &mut ()), Some(expr("x")));
        assert_eq!(multiply_one(&expr("1*x"), &mut ()), Some(expr("x")));
        assert_eq!(all(&expr("x*0"), &mut ()), Some(Expr::number(0.0)));
        assert_eq!(multiply_zero(&expr("0*sin(x)"), &mut ()), Some(Expr::number(0.0)));
    }

    #[test]
    fn negation_moves_out() {
        assert_eq!(all(&expr("-x*y"), &mut ()), Some(expr("-(x*y)")));
        assert_eq!(all(&expr("x*-y"), &mut ()), Some(expr("-(x*y)")));
    }

    #[test]
    fn numerator_extraction() {
        assert_eq!(all(&expr("(2/x)*y"), &mut ()), Some(expr("2*(y/x)")));
        assert_eq!(all(&expr("y*(2/x)"), &mut ()), Some(expr("2*(y/x)")));
    }

    #[test]
    fn literal_factors_merge_into_numerator() {
        assert_eq!(all(&expr("(2/x)*3"), &mut ()), Some(expr("(2*3)/x")));
    }

    #[test]
    fn non_literal_numerator_is_kept() {
        assert_eq!(all(&expr("(y/x)*2"), &mut ()), None);
    }

    #[test]
    fn records_step() {
        let mut steps: Vec<Step> = Vec::new();
        all(&expr("2*y"), &mut steps);
        all(&expr("(1/x)*y"), &mut steps);
        assert_eq!(steps, vec![Step::MoveLiteralRight, Step::ExtractNumerator]);
    }
}
