use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr: &'a Expr = *self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Variable(_) => return self.visit(),
                Expr::Neg(operand)
                    | Expr::Exp(operand)
                    | Expr::Log(operand)
                    | Expr::Sin(operand)
                    | Expr::Cos(operand) => {
                    if self.is_last_visited(operand) {
                        return self.visit();
                    }
                    self.stack.push(operand);
                },
                Expr::Add(lhs, rhs)
                    | Expr::Sub(lhs, rhs)
                    | Expr::Mul(lhs, rhs)
                    | Expr::Div(lhs, rhs)
                    | Expr::Pow(lhs, rhs) => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn post_order() {
        // (x + 2) * -y
        let expr = Expr::mul(
            Expr::add(Expr::variable('x'), Expr::number(2.0)),
            Expr::neg(Expr::variable('y')),
        );
        let visited = expr.post_order_iter().cloned().collect::<Vec<_>>();
        assert_eq!(visited, vec![
            Expr::variable('x'),
            Expr::number(2.0),
            Expr::add(Expr::variable('x'), Expr::number(2.0)),
            Expr::variable('y'),
            Expr::neg(Expr::variable('y')),
            expr.clone(),
        ]);
    }
}
