use crate::parser::{Associativity, Precedence};
use logos::Logos;
use std::ops::Range;

/// The raw lexemes recognized by the scanner, before classification into [`TokenKind`]s.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum RawKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Pow,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[regex(r"[a-zA-Z]+")]
    Word,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Variable,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Exp,
    Log,
    Sin,
    Cos,
    LeftParen,
    RightParen,

    /// Unary negation. The tokenizer never produces this kind; the parser reclassifies a
    /// [`TokenKind::Sub`] in unary position into it.
    Neg,
}

impl TokenKind {
    /// Returns the precedence of the token kind.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Exp | Self::Log | Self::Sin | Self::Cos => Precedence::Function,
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow | Self::Neg => Precedence::Power,
            Self::Number | Self::Variable | Self::LeftParen | Self::RightParen => Precedence::None,
        }
    }

    /// Returns the associativity of the token kind.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
            Self::Exp | Self::Log | Self::Sin | Self::Cos | Self::Pow | Self::Neg => Associativity::Right,
            Self::Number | Self::Variable | Self::LeftParen | Self::RightParen => Associativity::None,
        }
    }

    /// Returns true if the token is one of the named functions `exp`, `log`, `sin` or `cos`.
    pub fn is_function(self) -> bool {
        matches!(self, Self::Exp | Self::Log | Self::Sin | Self::Cos)
    }

    /// Returns true if the token is an arithmetic operator, including unary negation.
    pub fn is_operator(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow | Self::Neg)
    }

    /// Returns true if the token is an operator or a function.
    pub fn is_operation(self) -> bool {
        self.is_operator() || self.is_function()
    }

    /// Returns true if the token is a binary operator.
    pub fn is_binary(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow)
    }

    /// Returns the function token named by the given word, ignoring case.
    pub fn function(word: &str) -> Option<Self> {
        const FUNCTIONS: [(&str, TokenKind); 4] = [
            ("exp", TokenKind::Exp),
            ("log", TokenKind::Log),
            ("sin", TokenKind::Sin),
            ("cos", TokenKind::Cos),
        ];

        FUNCTIONS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(word))
            .map(|(_, kind)| *kind)
    }
}

/// A token produced by the tokenizer.
///
/// The precedence and associativity of the token are stamped from its kind when the token is
/// created, and re-stamped by [`Token::reclassify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,

    /// The precedence of the token.
    pub precedence: Precedence,

    /// The associativity of the token.
    pub associativity: Associativity,
}

impl<'source> Token<'source> {
    /// Creates a new token, stamping it with the precedence and associativity of its kind.
    pub fn new(span: Range<usize>, kind: TokenKind, lexeme: &'source str) -> Self {
        Self {
            span,
            kind,
            lexeme,
            precedence: kind.precedence(),
            associativity: kind.associativity(),
        }
    }

    /// Returns the same token with a different kind.
    pub fn reclassify(self, kind: TokenKind) -> Self {
        Self::new(self.span, kind, self.lexeme)
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.lexeme)
    }
}
