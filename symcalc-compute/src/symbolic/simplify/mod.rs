//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent, smaller or more canonical form by repeatedly applying the rules in [`rules`] until
//! none of them apply anywhere in the tree.
//!
//! At each node, the rules are tried in order, and the first one that applies replaces the node;
//! the result is then simplified again from the first rule. Once no rule applies to the node
//! itself, its children are simplified, and if any of them changed, the node is rebuilt from the
//! simplified children and the process starts over. The result is a fixed point, so simplifying
//! an already simplified expression returns it unchanged.
//!
//! Simplification is bounded by [`SimplifyOptions::max_depth`] and
//! [`SimplifyOptions::max_steps`], so it always terminates, even if some combination of rules
//! would rewrite an expression forever.

pub mod error;
pub mod options;
pub mod rules;
pub mod step;

pub use error::SimplifyError;
pub use options::{SimplifyOptions, SimplifyOptionsBuilder};

use crate::symbolic::step_collector::{StepCollector, StepCounter};
use step::Step;
use symcalc_parser::expr::Expr;
use tracing::debug;

/// State shared by the recursive simplification of a single expression.
struct Simplifier<'a> {
    options: &'a SimplifyOptions,
    steps: StepCounter<'a, Step>,
}

impl Simplifier<'_> {
    /// Simplifies the given expression, which is at the given depth of the tree.
    ///
    /// Returns the simplified expression, and whether any rule was applied to it or to any of its
    /// children.
    fn simplify(&mut self, expr: &Expr, depth: usize) -> Result<(Expr, bool), SimplifyError> {
        if depth > self.options.max_depth {
            return Err(SimplifyError::RecursionLimitExceeded { limit: self.options.max_depth });
        }

        let mut expr = expr.clone();
        let mut changed_at_least_once = false;

        loop {
            // try to simplify this expression using all rules
            if let Some(new_expr) = rules::all(&expr, self.options, &mut self.steps) {
                if self.steps.count() > self.options.max_steps {
                    return Err(SimplifyError::StepLimitExceeded { limit: self.options.max_steps });
                }

                expr = new_expr;
                changed_at_least_once = true;
                continue;
            }

            // no rule applies here, so move on to the children
            let (new_expr, changed) = self.simplify_children(&expr, depth)?;
            if !changed {
                break;
            }

            expr = new_expr;
            changed_at_least_once = true;
        }

        Ok((expr, changed_at_least_once))
    }

    /// Simplifies the children of the given expression, and rebuilds the expression from them.
    fn simplify_children(&mut self, expr: &Expr, depth: usize) -> Result<(Expr, bool), SimplifyError> {
        if let Some((op, lhs, rhs)) = expr.as_binary() {
            let (lhs, lhs_changed) = self.simplify(lhs, depth + 1)?;
            let (rhs, rhs_changed) = self.simplify(rhs, depth + 1)?;
            return Ok((Expr::binary(op, lhs, rhs), lhs_changed || rhs_changed));
        }

        if let Some((func, operand)) = expr.as_func() {
            let (operand, changed) = self.simplify(operand, depth + 1)?;
            return Ok((Expr::func(func, operand), changed));
        }

        match expr {
            Expr::Neg(operand) => {
                let (operand, changed) = self.simplify(operand, depth + 1)?;
                Ok((Expr::neg(operand), changed))
            },
            _ => Ok((expr.clone(), false)),
        }
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    options: &SimplifyOptions,
    step_collector: &mut dyn StepCollector<Step>,
) -> Result<Expr, SimplifyError> {
    debug!(target: "symcalc_compute::simplify", nodes = expr.node_count(), "simplifying {}", expr);

    let mut simplifier = Simplifier {
        options,
        steps: StepCounter::new(step_collector),
    };
    let (simplified, _) = simplifier.simplify(expr, 1)?;

    debug!(
        target: "symcalc_compute::simplify",
        nodes = simplified.node_count(),
        steps = simplifier.steps.count(),
        "simplified to {}",
        simplified
    );
    Ok(simplified)
}

/// Simplify the given expression, using the default [`SimplifyOptions`].
pub fn simplify(expr: &Expr) -> Result<Expr, SimplifyError> {
    inner_simplify_with(expr, &SimplifyOptions::default(), &mut ())
}

/// Simplify the given expression, using the given options.
pub fn simplify_with(expr: &Expr, options: &SimplifyOptions) -> Result<Expr, SimplifyError> {
    inner_simplify_with(expr, options, &mut ())
}

/// Simplify the given expression, using the default [`SimplifyOptions`]. The steps taken by the
/// simplifier will also be collected and returned, in the order they were applied. This is useful
/// for debugging, and also for displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), SimplifyError> {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, &SimplifyOptions::default(), &mut steps)?;
    Ok((expr, steps))
}
