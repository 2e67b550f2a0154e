use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    /// The expressions left to visit. The flag is set once the children of the expression have
    /// been pushed onto the stack.
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![(expr, false)],
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (expr, expanded) = self.stack.pop()?;
            if expanded {
                return Some(expr);
            }

            match expr {
                Expr::Const(_) | Expr::Var => return Some(expr),
                Expr::Binary(_, lhs, rhs) | Expr::Power(lhs, rhs) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**rhs, false));
                    self.stack.push((&**lhs, false));
                },
                Expr::Call(_, arg) => {
                    self.stack.push((expr, true));
                    self.stack.push((&**arg, false));
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::symbolic::expr::Func;

    #[test]
    fn post_order() {
        // sin(x) - x^2
        let expr = Expr::sub(
            Expr::call(Func::Sin, Expr::var()),
            Expr::power(Expr::var(), Expr::constant(2)),
        );
        let rendered = expr.post_order_iter().map(|expr| expr.to_string()).collect::<Vec<_>>();
        assert_eq!(rendered, vec!["x", "sin(x)", "x", "2", "x^2", "sin(x) - x^2"]);
    }
}
