//! Algebraic manipulation of expressions.
//!
//! # Simplification
//!
//! The primary use case of this module is to reduce expressions to a smaller, canonical form. This
//! is done with the [`simplify()`] function, which accepts an [`Expr`] produced by
//! [`symcalc_parser`] and returns a simplified version of it.
//!
//! Simplification works by applying an ordered set of rewriting rules until none of them apply.
//! Each rule is simply a function that accepts an expression and returns [`Option<Expr>`]; if the
//! rule is applicable to the expression, the rule is applied and the result is returned. Rules
//! cover constant folding, identities such as `x+0 = x`, normalization of signs, and moving
//! literals to the right-hand side of sums and products.
//!
//! ```
//! use symcalc_compute::symbolic::simplify;
//! use symcalc_parser::{expr::Expr, parse};
//!
//! let expr = parse("(2 + 3) * x^1 + 0").unwrap();
//! let simplified = simplify(&expr).unwrap();
//!
//! // `(2+3)*x^1+0 = x*5`
//! assert_eq!(simplified, Expr::mul(Expr::variable('x'), Expr::number(5.0)));
//! ```
//!
//! [`Expr`]: symcalc_parser::expr::Expr
//!
//! For more information, see the [`mod@simplify`] module.

pub mod simplify;
pub mod step_collector;

pub use simplify::{simplify, simplify_with, simplify_with_steps, SimplifyError, SimplifyOptions};
pub use step_collector::StepCollector;
