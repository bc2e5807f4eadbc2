//! Operator-precedence parser for the expression language.
//!
//! Parsing happens in two phases. [`to_rpn`] reorders the tokens produced by the
//! [tokenizer](crate::tokenizer) into reverse Polish notation with the shunting-yard algorithm,
//! and [`from_rpn`] folds the RPN sequence into an [`Expr`] tree with an operand stack. [`parse`]
//! runs both phases on a string.

pub mod build;
pub mod error;
pub mod rpn;

pub use build::from_rpn;
pub use rpn::to_rpn;

use crate::{expr::Expr, tokenizer::{tokenize, Token}};
use error::{kind, Error};
use tracing::debug;

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// This means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)`.
    Right,

    /// The token is not an operation.
    None,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of tokens that are not operations, such as numbers and parentheses.
    None,

    /// Precedence of the named functions (`exp`, `log`, `sin`, and `cos`).
    ///
    /// Functions are applied before any operator that follows them; see [`to_rpn`].
    Function,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of exponentiation (`^`) and unary subtraction (`-`).
    Power,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

/// Options that control the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// The maximum depth of the parsed expression tree. A leaf has depth 1.
    ///
    /// The default value is `512`.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/// Formats the tokens as a space-separated list, for logging.
fn display_tokens(tokens: &[Token]) -> String {
    tokens.iter()
        .map(|token| token.lexeme)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses the given input into an expression tree, using the default [`ParseOptions`].
pub fn parse(input: &str) -> Result<Expr, Error> {
    parse_with(input, &ParseOptions::default())
}

/// Parses the given input into an expression tree.
///
/// Content that the tokenizer does not recognize is ignored.
pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Expr, Error> {
    let tokens = tokenize(input);
    debug!(target: "symcalc_parser::parser", tokens = %display_tokens(&tokens), "tokenized input");

    let rpn = to_rpn(tokens)?;
    debug!(target: "symcalc_parser::parser", rpn = %display_tokens(&rpn), "reordered into RPN");

    if rpn.is_empty() {
        return Err(Error::new(vec![0..input.len()], kind::EmptyExpression));
    }

    from_rpn(rpn, options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::expr::Func;
    use super::*;

    fn num(value: f64) -> Expr {
        Expr::number(value)
    }

    fn var(name: char) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn binary_subtraction() {
        assert_eq!(parse("3-2").unwrap(), Expr::sub(num(3.0), num(2.0)));
    }

    #[test]
    fn leading_negation() {
        assert_eq!(parse("-3").unwrap(), Expr::neg(num(3.0)));
    }

    #[test]
    fn negation_after_operator() {
        assert_eq!(parse("3*-2").unwrap(), Expr::mul(num(3.0), Expr::neg(num(2.0))));
        assert_eq!(parse("2^-x").unwrap(), Expr::pow(num(2.0), Expr::neg(var('x'))));
        assert_eq!(parse("--x").unwrap(), Expr::neg(Expr::neg(var('x'))));
    }

    #[test]
    fn negation_after_paren() {
        assert_eq!(
            parse("2 * (-x + 1)").unwrap(),
            Expr::mul(num(2.0), Expr::add(Expr::neg(var('x')), num(1.0))),
        );
    }

    #[test]
    fn negation_binds_like_power() {
        // -x^2 is -(x^2)
        assert_eq!(parse("-x^2").unwrap(), Expr::neg(Expr::pow(var('x'), num(2.0))));
        // -2*3 is (-2)*3
        assert_eq!(parse("-2*3").unwrap(), Expr::mul(Expr::neg(num(2.0)), num(3.0)));
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(
            parse("2+3*4").unwrap(),
            Expr::add(num(2.0), Expr::mul(num(3.0), num(4.0))),
        );
        assert_eq!(
            parse("8-4-2").unwrap(),
            Expr::sub(Expr::sub(num(8.0), num(4.0)), num(2.0)),
        );
        assert_eq!(
            parse("8/4/2").unwrap(),
            Expr::div(Expr::div(num(8.0), num(4.0)), num(2.0)),
        );
        assert_eq!(
            parse("2^3^2").unwrap(),
            Expr::pow(num(2.0), Expr::pow(num(3.0), num(2.0))),
        );
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            parse("(2+3)*4").unwrap(),
            Expr::mul(Expr::add(num(2.0), num(3.0)), num(4.0)),
        );
        assert_eq!(parse("((x))").unwrap(), var('x'));
    }

    #[test]
    fn functions() {
        assert_eq!(
            parse("sin(x) * 2").unwrap(),
            Expr::mul(Expr::func(Func::Sin, var('x')), num(2.0)),
        );
        assert_eq!(
            parse("EXP(log(y + 1))").unwrap(),
            Expr::func(Func::Exp, Expr::func(Func::Log, Expr::add(var('y'), num(1.0)))),
        );
        assert_eq!(
            parse("cos(x)^2").unwrap(),
            Expr::pow(Expr::func(Func::Cos, var('x')), num(2.0)),
        );
    }

    #[test]
    fn numbers_and_variables() {
        assert_eq!(parse("2.5").unwrap(), num(2.5));
        assert_eq!(parse("7.").unwrap(), num(7.0));
        assert_eq!(parse("X").unwrap(), var('x'));
    }

    #[test]
    fn ignores_unknown_content() {
        assert_eq!(parse("1 $+ 2").unwrap(), Expr::add(num(1.0), num(2.0)));
    }

    #[test]
    fn missing_operand() {
        let err = parse("2+").unwrap_err();
        assert!(err.is::<kind::OperandUnderflow>());
        assert_eq!(err.spans, vec![1..2]);

        assert!(parse("*").unwrap_err().is::<kind::OperandUnderflow>());
        assert!(parse("sin()").unwrap_err().is::<kind::OperandUnderflow>());
    }

    #[test]
    fn trailing_operands() {
        let err = parse("2 3").unwrap_err();
        assert!(err.is::<kind::TrailingTokens>());
        assert_eq!(err.spans, vec![2..3]);

        let err = parse("1 2+3").unwrap_err();
        assert!(err.is::<kind::TrailingTokens>());
        assert_eq!(err.spans, vec![2..5]);
    }

    #[test]
    fn unbalanced_parens() {
        let err = parse("(2 + 3").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::UnbalancedParens>(), Some(&kind::UnbalancedParens { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = parse("2 + 3)").unwrap_err();
        assert_eq!(err.downcast_ref::<kind::UnbalancedParens>(), Some(&kind::UnbalancedParens { opening: false }));
        assert_eq!(err.spans, vec![5..6]);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(parse("  $ ").unwrap_err().is::<kind::EmptyExpression>());
        assert!(parse("()").unwrap_err().is::<kind::EmptyExpression>());
    }

    #[test]
    fn depth_limit() {
        let options = ParseOptions { max_depth: 3 };
        assert_eq!(
            parse_with("-(x + 1)", &options).unwrap(),
            Expr::neg(Expr::add(var('x'), num(1.0))),
        );

        // the outer negation is the first to exceed the limit
        let err = parse_with("--(x + 1)", &options).unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::RecursionLimitExceeded>(),
            Some(&kind::RecursionLimitExceeded { limit: 3 }),
        );
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let input = format!("{}x{}", "(".repeat(2000), ")".repeat(2000));
        assert_eq!(parse(&input).unwrap(), var('x'));

        let input = "-".repeat(1000) + "x";
        assert!(parse(&input).unwrap_err().is::<kind::RecursionLimitExceeded>());
    }
}
