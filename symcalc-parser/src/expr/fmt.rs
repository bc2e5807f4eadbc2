//! Formatting of [`Expr`] trees.
//!
//! [`Expr`] implements [`Display`] by writing the expression in infix notation, with the minimum
//! number of parentheses needed to parse it back into the same tree. [`Expr::as_functional`]
//! writes the tree in constructor notation instead, such as `Add(x, Mul(2, y))`.

use crate::parser::{Associativity, Precedence};
use std::fmt::{Display, Formatter, Result};
use super::Expr;

impl Expr {
    /// Returns the precedence of the expression when written in infix notation, or [`None`] if
    /// the expression never needs parentheses.
    fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::Number(_) | Self::Variable(_) => None,
            Self::Exp(_) | Self::Log(_) | Self::Sin(_) | Self::Cos(_) => None,
            Self::Neg(_) | Self::Pow(..) => Some(Precedence::Power),
            Self::Mul(..) | Self::Div(..) => Some(Precedence::Factor),
            Self::Add(..) | Self::Sub(..) => Some(Precedence::Term),
        }
    }

    /// Returns true if this expression must be wrapped in parentheses when it appears as an
    /// operand of an operator with the given precedence and associativity.
    ///
    /// `is_rhs` indicates whether the expression is the right operand of the operator. A negative
    /// literal always needs parentheses, since `-2` would otherwise parse back as a negation.
    fn needs_parens(&self, precedence: Precedence, associativity: Associativity, is_rhs: bool) -> bool {
        if self.as_number().is_some_and(|value| value < 0.0) {
            return true;
        }

        let Some(own) = self.precedence() else {
            return false;
        };

        if own < precedence {
            return true;
        }

        own == precedence && match associativity {
            Associativity::Left => is_rhs,
            Associativity::Right => !is_rhs,
            Associativity::None => true,
        }
    }

    /// Wraps the expression in a [`FunctionalFormatter`], which implements [`Display`] by writing
    /// the tree in constructor notation.
    pub fn as_functional(&self) -> FunctionalFormatter<'_> {
        FunctionalFormatter(self)
    }
}

/// Writes `expr`, surrounded by parentheses if `parens` is true.
fn fmt_operand(f: &mut Formatter, expr: &Expr, parens: bool) -> Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Neg(operand) => {
                write!(f, "-")?;
                let parens = operand.needs_parens(Precedence::Power, Associativity::Right, true);
                fmt_operand(f, operand, parens)
            },
            Self::Exp(operand) | Self::Log(operand) | Self::Sin(operand) | Self::Cos(operand) => {
                // `as_func` always succeeds for these variants
                let name = self.as_func().map_or("", |(func, _)| func.call_name());
                write!(f, "{}({})", name, operand)
            },
            Self::Add(..) | Self::Sub(..) | Self::Mul(..) | Self::Div(..) | Self::Pow(..) => {
                let Some((op, lhs, rhs)) = self.as_binary() else {
                    return Ok(());
                };
                let precedence = self.precedence().unwrap_or(Precedence::None);
                let associativity = match op {
                    crate::expr::BinaryOp::Pow => Associativity::Right,
                    _ => Associativity::Left,
                };

                fmt_operand(f, lhs, lhs.needs_parens(precedence, associativity, false))?;
                if precedence == Precedence::Power {
                    write!(f, "{}", op.symbol())?;
                } else {
                    write!(f, " {} ", op.symbol())?;
                }
                fmt_operand(f, rhs, rhs.needs_parens(precedence, associativity, true))
            },
        }
    }
}

/// A wrapper type that implements [`Display`] for an [`Expr`] by writing it in constructor
/// notation, such as `Add(x, Mul(2, y))`. Numbers are rounded to two decimal places.
pub struct FunctionalFormatter<'a>(&'a Expr);

impl Display for FunctionalFormatter<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Number(value) => write!(f, "{}", (value * 100.0).round() / 100.0),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Neg(operand) => write!(f, "Neg({})", operand.as_functional()),
            expr => {
                if let Some((op, lhs, rhs)) = expr.as_binary() {
                    write!(f, "{}({}, {})", op.name(), lhs.as_functional(), rhs.as_functional())
                } else if let Some((func, operand)) = expr.as_func() {
                    write!(f, "{}({})", func.name(), operand.as_functional())
                } else {
                    Ok(())
                }
            },
        }
    }
}
