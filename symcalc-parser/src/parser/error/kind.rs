use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::EXPR;
use crate::tokenizer::TokenKind;

/// An operator was applied to fewer operands than it takes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("this operator needs another {}", "expression".fg(EXPR))],
)]
pub struct OperandUnderflow;

/// More than one expression remained after parsing, with no operator to join them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "you might need to add an operator between these expressions",
)]
pub struct TrailingTokens;

/// A token that cannot be part of an expression tree reached the tree builder.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = ["this token cannot appear here"],
    help = format!("found {:?}", found),
)]
pub struct UnknownToken {
    /// The kind of token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not matched.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not matched"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnbalancedParens {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// The input did not contain an expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "maximum nesting depth exceeded",
    labels = ["this expression is nested too deeply"],
    help = format!("the maximum nesting depth is {}", limit.to_string().fg(EXPR)),
)]
pub struct RecursionLimitExceeded {
    /// The maximum depth of the expression tree.
    pub limit: usize,
}
