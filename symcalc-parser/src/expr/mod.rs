//! The expression tree shared by the parser, the simplifier, and any formatter.
//!
//! An [`Expr`] is an immutable value: every node exclusively owns its children, and every
//! transformation builds a new tree rather than mutating an existing one.
//!
//! # Strict equality
//!
//! The [`PartialEq`] and [`Eq`] implementations for [`Expr`] implement **strict equality**: two
//! expressions are equal if they are the same kind of node with strictly equal children. Numbers
//! compare with IEEE-754 `==`, except that `NaN` is considered equal to `NaN`. This makes strict
//! equality a true equivalence relation, so a tree containing `NaN` is still equal to itself.
//!
//! Strict equality is not semantic equality: `x + 1` and `1 + x` are **not** strictly equal.

pub mod fmt;
mod iter;

pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Applies the operator to two numbers, following IEEE-754 semantics (division by zero
    /// produces an infinity or `NaN` rather than an error).
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }

    /// Returns the name of the node kind built by this operator.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Pow => "Pow",
        }
    }

    /// Returns the symbol used to write this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// A named unary function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Exp,
    Log,
    Sin,
    Cos,
}

impl Func {
    /// Applies the function to a number. `log` is the natural logarithm; `log` of a non-positive
    /// number produces `NaN` or negative infinity.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Exp => value.exp(),
            Self::Log => value.ln(),
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
        }
    }

    /// Returns the name of the node kind built by this function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exp => "Exp",
            Self::Log => "Log",
            Self::Sin => "Sin",
            Self::Cos => "Cos",
        }
    }

    /// Returns the name used to call this function in source code.
    pub fn call_name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

/// A mathematical expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric literal, such as `2` or `0.5`.
    Number(f64),

    /// A single-letter variable, such as `x`. The letter is always lowercase.
    Variable(char),

    /// Unary negation, such as `-x`.
    Neg(Box<Expr>),

    /// `lhs + rhs`
    Add(Box<Expr>, Box<Expr>),

    /// `lhs - rhs`
    Sub(Box<Expr>, Box<Expr>),

    /// `lhs * rhs`
    Mul(Box<Expr>, Box<Expr>),

    /// `lhs / rhs`
    Div(Box<Expr>, Box<Expr>),

    /// `lhs ^ rhs`
    Pow(Box<Expr>, Box<Expr>),

    /// `exp(x)`
    Exp(Box<Expr>),

    /// `log(x)`, the natural logarithm.
    Log(Box<Expr>),

    /// `sin(x)`
    Sin(Box<Expr>),

    /// `cos(x)`
    Cos(Box<Expr>),
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || a.is_nan() && b.is_nan(),
            (Self::Variable(a), Self::Variable(b)) => a == b,
            (Self::Neg(a), Self::Neg(b)) => a == b,
            (Self::Add(a1, a2), Self::Add(b1, b2))
                | (Self::Sub(a1, a2), Self::Sub(b1, b2))
                | (Self::Mul(a1, a2), Self::Mul(b1, b2))
                | (Self::Div(a1, a2), Self::Div(b1, b2))
                | (Self::Pow(a1, a2), Self::Pow(b1, b2)) => a1 == b1 && a2 == b2,
            (Self::Exp(a), Self::Exp(b))
                | (Self::Log(a), Self::Log(b))
                | (Self::Sin(a), Self::Sin(b))
                | (Self::Cos(a), Self::Cos(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Expr {
    /// Creates a number.
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable, normalizing the letter to lowercase.
    pub fn variable(name: char) -> Self {
        Self::Variable(name.to_ascii_lowercase())
    }

    /// Creates `-operand`.
    pub fn neg(operand: Self) -> Self {
        Self::Neg(Box::new(operand))
    }

    /// Creates `lhs + rhs`.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        Self::Add(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: Self, rhs: Self) -> Self {
        Self::Sub(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `lhs * rhs`.
    pub fn mul(lhs: Self, rhs: Self) -> Self {
        Self::Mul(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `lhs / rhs`.
    pub fn div(lhs: Self, rhs: Self) -> Self {
        Self::Div(Box::new(lhs), Box::new(rhs))
    }

    /// Creates `lhs ^ rhs`.
    pub fn pow(lhs: Self, rhs: Self) -> Self {
        Self::Pow(Box::new(lhs), Box::new(rhs))
    }

    /// Creates the binary node for the given operator.
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        match op {
            BinaryOp::Add => Self::add(lhs, rhs),
            BinaryOp::Sub => Self::sub(lhs, rhs),
            BinaryOp::Mul => Self::mul(lhs, rhs),
            BinaryOp::Div => Self::div(lhs, rhs),
            BinaryOp::Pow => Self::pow(lhs, rhs),
        }
    }

    /// Creates the function node for the given function.
    pub fn func(func: Func, operand: Self) -> Self {
        let operand = Box::new(operand);
        match func {
            Func::Exp => Self::Exp(operand),
            Func::Log => Self::Log(operand),
            Func::Sin => Self::Sin(operand),
            Func::Cos => Self::Cos(operand),
        }
    }

    /// If the expression is a [`Expr::Number`], returns the contained number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if the expression is the given number.
    pub fn is_number_eq(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns true if the expression is a [`Expr::Variable`].
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// If the expression is a binary node, returns its operator and operands.
    pub fn as_binary(&self) -> Option<(BinaryOp, &Expr, &Expr)> {
        match self {
            Self::Add(lhs, rhs) => Some((BinaryOp::Add, &**lhs, &**rhs)),
            Self::Sub(lhs, rhs) => Some((BinaryOp::Sub, &**lhs, &**rhs)),
            Self::Mul(lhs, rhs) => Some((BinaryOp::Mul, &**lhs, &**rhs)),
            Self::Div(lhs, rhs) => Some((BinaryOp::Div, &**lhs, &**rhs)),
            Self::Pow(lhs, rhs) => Some((BinaryOp::Pow, &**lhs, &**rhs)),
            _ => None,
        }
    }

    /// If the expression is a function node, returns the function and its operand.
    pub fn as_func(&self) -> Option<(Func, &Expr)> {
        match self {
            Self::Exp(operand) => Some((Func::Exp, &**operand)),
            Self::Log(operand) => Some((Func::Log, &**operand)),
            Self::Sin(operand) => Some((Func::Sin, &**operand)),
            Self::Cos(operand) => Some((Func::Cos, &**operand)),
            _ => None,
        }
    }

    /// Returns the direct children of the expression, from left to right.
    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        let (first, second): (Option<&Expr>, Option<&Expr>) = match self {
            Self::Number(_) | Self::Variable(_) => (None, None),
            Self::Neg(operand)
                | Self::Exp(operand)
                | Self::Log(operand)
                | Self::Sin(operand)
                | Self::Cos(operand) => (Some(&**operand), None),
            Self::Add(lhs, rhs)
                | Self::Sub(lhs, rhs)
                | Self::Mul(lhs, rhs)
                | Self::Div(lhs, rhs)
                | Self::Pow(lhs, rhs) => (Some(&**lhs), Some(&**rhs)),
        };
        first.into_iter().chain(second)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns the depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(expr.children().map(|child| (child, depth + 1)));
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_strictly_equal_to_itself() {
        let expr = Expr::add(Expr::variable('x'), Expr::number(f64::NAN));
        assert_eq!(expr, expr.clone());
        assert_ne!(Expr::number(f64::NAN), Expr::number(1.0));
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(Expr::number(0.0), Expr::number(-0.0));
    }

    #[test]
    fn operand_order_matters() {
        let a = Expr::add(Expr::variable('x'), Expr::number(1.0));
        let b = Expr::add(Expr::number(1.0), Expr::variable('x'));
        assert_ne!(a, b);
        assert_ne!(Expr::sub(Expr::number(1.0), Expr::number(1.0)), Expr::add(Expr::number(1.0), Expr::number(1.0)));
    }

    #[test]
    fn variables_are_lowercase() {
        assert_eq!(Expr::variable('X'), Expr::Variable('x'));
    }

    #[test]
    fn binary_round_trip() {
        let expr = Expr::pow(Expr::variable('x'), Expr::number(2.0));
        let (op, lhs, rhs) = expr.as_binary().unwrap();
        assert_eq!(op, BinaryOp::Pow);
        assert_eq!(Expr::binary(op, lhs.clone(), rhs.clone()), expr);
        assert_eq!(expr.as_func(), None);
    }

    #[test]
    fn size_and_depth() {
        // sin(x + 2) * -y
        let expr = Expr::mul(
            Expr::func(Func::Sin, Expr::add(Expr::variable('x'), Expr::number(2.0))),
            Expr::neg(Expr::variable('y')),
        );
        assert_eq!(expr.node_count(), 7);
        assert_eq!(expr.depth(), 4);
        assert_eq!(Expr::number(1.0).depth(), 1);
    }

    #[test]
    fn apply_follows_ieee() {
        assert_eq!(BinaryOp::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(BinaryOp::Div.apply(0.0, 0.0).is_nan());
        assert!(Func::Log.apply(-1.0).is_nan());
        assert_eq!(Func::Log.apply(0.0), f64::NEG_INFINITY);
        assert_eq!(BinaryOp::Pow.apply(2.0, 10.0), 1024.0);
    }
}
