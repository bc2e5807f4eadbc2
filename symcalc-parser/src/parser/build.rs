use crate::{expr::{BinaryOp, Expr, Func}, tokenizer::{Token, TokenKind}};
use std::ops::Range;
use super::{error::{kind, Error}, ParseOptions};

/// An expression on the operand stack, along with the region of the source code it was built
/// from and the depth of its tree.
struct Operand {
    expr: Expr,
    span: Range<usize>,
    depth: usize,
}

/// Returns the smallest span that covers both spans.
fn cover(a: &Range<usize>, b: &Range<usize>) -> Range<usize> {
    a.start.min(b.start)..a.end.max(b.end)
}

/// Returns the given depth, or an error pointing at the token if the depth exceeds the limit.
fn check_depth(token: &Token, depth: usize, options: &ParseOptions) -> Result<usize, Error> {
    if depth > options.max_depth {
        Err(Error::new(
            vec![token.span.clone()],
            kind::RecursionLimitExceeded { limit: options.max_depth },
        ))
    } else {
        Ok(depth)
    }
}

impl Operand {
    /// Creates a leaf operand from a token.
    fn leaf(expr: Expr, token: &Token, options: &ParseOptions) -> Result<Self, Error> {
        Ok(Self {
            expr,
            span: token.span.clone(),
            depth: check_depth(token, 1, options)?,
        })
    }

    /// Creates an operand for a node with one child.
    fn unary(
        token: &Token,
        operand: Operand,
        options: &ParseOptions,
        build: impl FnOnce(Expr) -> Expr,
    ) -> Result<Self, Error> {
        Ok(Self {
            depth: check_depth(token, operand.depth + 1, options)?,
            span: cover(&token.span, &operand.span),
            expr: build(operand.expr),
        })
    }

    /// Creates an operand for a node with two children.
    fn binary(
        token: &Token,
        op: BinaryOp,
        lhs: Operand,
        rhs: Operand,
        options: &ParseOptions,
    ) -> Result<Self, Error> {
        Ok(Self {
            depth: check_depth(token, lhs.depth.max(rhs.depth) + 1, options)?,
            span: cover(&cover(&token.span, &lhs.span), &rhs.span),
            expr: Expr::binary(op, lhs.expr, rhs.expr),
        })
    }
}

/// Pops an operand for the given operator token, or returns an error pointing at the operator if
/// the stack is empty.
fn pop_operand(stack: &mut Vec<Operand>, token: &Token) -> Result<Operand, Error> {
    stack.pop()
        .ok_or_else(|| Error::new(vec![token.span.clone()], kind::OperandUnderflow))
}

/// Returns the binary operator represented by the token kind.
fn to_binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Add => Some(BinaryOp::Add),
        TokenKind::Sub => Some(BinaryOp::Sub),
        TokenKind::Mul => Some(BinaryOp::Mul),
        TokenKind::Div => Some(BinaryOp::Div),
        TokenKind::Pow => Some(BinaryOp::Pow),
        _ => None,
    }
}

/// Returns the function represented by the token kind.
fn to_func(kind: TokenKind) -> Option<Func> {
    match kind {
        TokenKind::Exp => Some(Func::Exp),
        TokenKind::Log => Some(Func::Log),
        TokenKind::Sin => Some(Func::Sin),
        TokenKind::Cos => Some(Func::Cos),
        _ => None,
    }
}

/// Builds an expression tree from a sequence of tokens in reverse Polish notation.
///
/// For a binary operator, the operand popped second becomes the left child. Exactly one
/// expression must remain once every token has been consumed.
pub fn from_rpn(rpn: Vec<Token>, options: &ParseOptions) -> Result<Expr, Error> {
    let mut stack: Vec<Operand> = Vec::new();

    for token in &rpn {
        let operand = match token.kind {
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(value) => Operand::leaf(Expr::number(value), token, options)?,
                Err(_) => return Err(Error::new(
                    vec![token.span.clone()],
                    kind::UnknownToken { found: token.kind },
                )),
            },
            TokenKind::Variable => {
                let name = token.lexeme.chars().next().unwrap_or_default();
                Operand::leaf(Expr::variable(name), token, options)?
            },
            TokenKind::Neg => {
                let operand = pop_operand(&mut stack, token)?;
                Operand::unary(token, operand, options, Expr::neg)?
            },
            found => {
                if let Some(op) = to_binary_op(found) {
                    let rhs = pop_operand(&mut stack, token)?;
                    let lhs = pop_operand(&mut stack, token)?;
                    Operand::binary(token, op, lhs, rhs, options)?
                } else if let Some(func) = to_func(found) {
                    let operand = pop_operand(&mut stack, token)?;
                    Operand::unary(token, operand, options, |expr| Expr::func(func, expr))?
                } else {
                    return Err(Error::new(vec![token.span.clone()], kind::UnknownToken { found }));
                }
            },
        };
        stack.push(operand);
    }

    let mut operands = stack.into_iter();
    match (operands.next(), operands.next()) {
        (Some(operand), None) => Ok(operand.expr),
        (Some(_), Some(extra)) => {
            let span = operands.fold(extra.span, |span, operand| cover(&span, &operand.span));
            Err(Error::new(vec![span], kind::TrailingTokens))
        },
        (None, _) => Err(Error::new(Vec::new(), kind::EmptyExpression)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::tokenizer::tokenize;
    use super::*;

    #[test]
    fn second_popped_is_left() {
        // 3 2 -
        let rpn = tokenize("3 2 -");
        assert_eq!(
            from_rpn(rpn, &ParseOptions::default()).unwrap(),
            Expr::sub(Expr::number(3.0), Expr::number(2.0)),
        );
    }

    #[test]
    fn neg_token() {
        let rpn = tokenize("x -")
            .into_iter()
            .map(|token| match token.kind {
                TokenKind::Sub => token.reclassify(TokenKind::Neg),
                _ => token,
            })
            .collect();
        assert_eq!(
            from_rpn(rpn, &ParseOptions::default()).unwrap(),
            Expr::neg(Expr::variable('x')),
        );
    }

    #[test]
    fn paren_is_unknown() {
        let err = from_rpn(tokenize("1 ("), &ParseOptions::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::UnknownToken>(),
            Some(&kind::UnknownToken { found: TokenKind::LeftParen }),
        );
        assert_eq!(err.spans, vec![2..3]);
    }

    #[test]
    fn empty_rpn() {
        let err = from_rpn(Vec::new(), &ParseOptions::default()).unwrap_err();
        assert!(err.is::<kind::EmptyExpression>());
        assert!(err.spans.is_empty());
    }

    #[test]
    fn sub_without_reclassification_underflows() {
        let err = from_rpn(tokenize("x -"), &ParseOptions::default()).unwrap_err();
        assert!(err.is::<kind::OperandUnderflow>());
        assert_eq!(err.spans, vec![2..3]);
    }
}
