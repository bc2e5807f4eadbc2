pub mod token;

use logos::{Lexer, Logos};
use std::ops::Range;
pub use token::{RawKind, Token, TokenKind};

/// Returns an iterator over the raw lexemes produced by the scanner.
pub fn scan(input: &str) -> Lexer<RawKind> {
    RawKind::lexer(input)
}

/// Returns true if the given character can be part of a word.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Classifies a raw lexeme into a [`TokenKind`], or returns [`None`] if the lexeme is not part of
/// the expression language.
///
/// An alphabetic run is a function token if it names one of the four functions, and a variable if
/// it is a single letter that does not touch another word character.
fn classify(input: &str, raw: RawKind, span: &Range<usize>) -> Option<TokenKind> {
    match raw {
        RawKind::Add => Some(TokenKind::Add),
        RawKind::Sub => Some(TokenKind::Sub),
        RawKind::Mul => Some(TokenKind::Mul),
        RawKind::Div => Some(TokenKind::Div),
        RawKind::Pow => Some(TokenKind::Pow),
        RawKind::LeftParen => Some(TokenKind::LeftParen),
        RawKind::RightParen => Some(TokenKind::RightParen),
        RawKind::Number => Some(TokenKind::Number),
        RawKind::Word => {
            let word = &input[span.clone()];
            if let Some(function) = TokenKind::function(word) {
                return Some(function);
            }

            let before = input[..span.start].chars().next_back();
            let after = input[span.end..].chars().next();
            let isolated = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);
            (word.len() == 1 && isolated).then_some(TokenKind::Variable)
        },
        RawKind::Whitespace | RawKind::Symbol => None,
    }
}

/// Returns the tokens of the given input, ordered by their position in the input.
///
/// Content that is not part of the expression language (whitespace, unsupported symbols, words
/// that are neither functions nor single-letter variables) is silently skipped; use
/// [`unrecognized`] to find it.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = scan(input);
    let mut tokens = Vec::new();

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let Some(kind) = raw.ok().and_then(|raw| classify(input, raw, &span)) else {
            continue;
        };
        tokens.push(Token::new(span, kind, lexer.slice()));
    }

    tokens
}

/// Returns the regions of the input that [`tokenize`] skips, not counting whitespace.
pub fn unrecognized(input: &str) -> Vec<Range<usize>> {
    let mut lexer = scan(input);
    let mut spans = Vec::new();

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            Ok(RawKind::Whitespace) => (),
            Ok(raw) if classify(input, raw, &span).is_some() => (),
            _ => spans.push(span),
        }
    }

    spans
}
