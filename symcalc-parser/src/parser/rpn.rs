use crate::tokenizer::{Token, TokenKind};
use super::{error::{kind, Error}, Associativity};

/// Returns true if the operator on top of the stack must be moved to the output before the
/// incoming operator is pushed.
fn should_pop(top: &Token, incoming: &Token) -> bool {
    top.kind.is_function()
        || top.precedence > incoming.precedence
        || top.precedence == incoming.precedence && top.associativity == Associativity::Left
}

/// Returns true if a `-` following the given token is unary negation.
fn is_unary_position(prev: Option<TokenKind>) -> bool {
    match prev {
        None => true,
        Some(kind) => kind == TokenKind::LeftParen || kind.is_operation(),
    }
}

/// Reorders the tokens of an expression from infix order into reverse Polish notation, using the
/// shunting-yard algorithm.
///
/// A [`TokenKind::Sub`] token in unary position (at the start of the expression, after an
/// opening parenthesis, or after another operator or function) is reclassified as
/// [`TokenKind::Neg`]. Parentheses do not appear in the output.
pub fn to_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut prev = None;

    for token in tokens {
        let token = if token.kind == TokenKind::Sub && is_unary_position(prev) {
            token.reclassify(TokenKind::Neg)
        } else {
            token
        };
        prev = Some(token.kind);

        match token.kind {
            TokenKind::Number | TokenKind::Variable => output.push(token),
            TokenKind::Exp
                | TokenKind::Log
                | TokenKind::Sin
                | TokenKind::Cos
                | TokenKind::LeftParen => stack.push(token),
            TokenKind::RightParen => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::LeftParen => break,
                    Some(top) => output.push(top),
                    None => return Err(Error::new(
                        vec![token.span],
                        kind::UnbalancedParens { opening: false },
                    )),
                }
            },
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Pow
                | TokenKind::Neg => {
                while let Some(top) = stack.pop() {
                    if should_pop(&top, &token) {
                        output.push(top);
                    } else {
                        stack.push(top);
                        break;
                    }
                }
                stack.push(token);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::LeftParen {
            return Err(Error::new(vec![top.span], kind::UnbalancedParens { opening: true }));
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::tokenizer::tokenize;
    use super::*;

    /// Returns the kinds of the RPN tokens for the given input.
    fn rpn_kinds(input: &str) -> Vec<TokenKind> {
        to_rpn(tokenize(input))
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn operator_precedence() {
        use TokenKind::*;
        assert_eq!(rpn_kinds("1 + 2 * 3"), vec![Number, Number, Number, Mul, Add]);
        assert_eq!(rpn_kinds("1 * 2 + 3"), vec![Number, Number, Mul, Number, Add]);
    }

    #[test]
    fn power_is_right_associative() {
        let rpn = to_rpn(tokenize("2^3^4")).unwrap();
        let lexemes = rpn.iter().map(|token| token.lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["2", "3", "4", "^", "^"]);
    }

    #[test]
    fn unary_minus_is_reclassified() {
        use TokenKind::*;
        assert_eq!(rpn_kinds("-x"), vec![Variable, Neg]);
        assert_eq!(rpn_kinds("x - -y"), vec![Variable, Variable, Neg, Sub]);
        assert_eq!(rpn_kinds("(-x)"), vec![Variable, Neg]);
        assert_eq!(rpn_kinds("cos -x"), vec![Cos, Variable, Neg]);
    }

    #[test]
    fn reclassified_tokens_are_restamped() {
        let rpn = to_rpn(tokenize("-x")).unwrap();
        assert_eq!(rpn[1].precedence, crate::parser::Precedence::Power);
        assert_eq!(rpn[1].associativity, Associativity::Right);
    }

    #[test]
    fn functions_apply_before_operators() {
        use TokenKind::*;
        assert_eq!(rpn_kinds("sin(x) + 1"), vec![Variable, Sin, Number, Add]);
        assert_eq!(rpn_kinds("exp(x)^2"), vec![Variable, Exp, Number, Pow]);
        assert_eq!(rpn_kinds("log x"), vec![Variable, Log]);
    }

    #[test]
    fn parentheses_are_removed() {
        use TokenKind::*;
        assert_eq!(rpn_kinds("(1 + 2) * 3"), vec![Number, Number, Add, Number, Mul]);
    }

    #[test]
    fn unmatched_parentheses() {
        let err = to_rpn(tokenize("((1)")).unwrap_err();
        assert_eq!(err.downcast_ref::<kind::UnbalancedParens>(), Some(&kind::UnbalancedParens { opening: true }));
        assert_eq!(err.spans, vec![0..1]);

        let err = to_rpn(tokenize("1)")).unwrap_err();
        assert_eq!(err.downcast_ref::<kind::UnbalancedParens>(), Some(&kind::UnbalancedParens { opening: false }));
        assert_eq!(err.spans, vec![1..2]);
    }
}
