//! Parsing a source expression into callable functions.

use crate::{
    numerical::eval::Eval,
    symbolic::{derivative, Expr},
};
use log::{debug, trace};
use rug::Complex;
use std::{fmt, sync::Arc};
use zdiff_parser::parser::{ast::Expr as AstExpr, error::Error, Parser};

/// A function of `x` over the complex numbers, backed by an immutable expression tree.
///
/// Cloning a [`Function`] is cheap, since the tree is shared. Functions are [`Send`] and
/// [`Sync`], and can be evaluated from several threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    expr: Arc<Expr>,
}

impl Function {
    /// Creates a function from the given expression tree.
    pub fn new(expr: Arc<Expr>) -> Self {
        Self { expr }
    }

    /// Returns the expression tree of the function.
    pub fn expr(&self) -> &Arc<Expr> {
        &self.expr
    }

    /// Evaluates the function at the given point. The result has the precision of `z`.
    pub fn eval(&self, z: &Complex) -> Complex {
        self.expr.eval(z)
    }

    /// Returns the derivative of this function with respect to `x`.
    pub fn derivative(&self) -> Function {
        let expr = derivative(&self.expr);
        debug!("built derivative tree with {} nodes", expr.node_count());
        trace!("derivative: {}", expr);
        Function::new(expr)
    }

    /// Turns the function into a plain closure.
    pub fn into_fn(self) -> impl Fn(&Complex) -> Complex + Send + Sync {
        move |z| self.eval(z)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// Parses the source into a [`Function`].
pub fn parse(source: &str) -> Result<Function, Error> {
    let ast = Parser::new(source).try_parse_full::<AstExpr>()?;
    let expr = Expr::from_ast(&ast)?;

    debug!("parsed `{}` into a tree with {} nodes", source, expr.node_count());
    if !expr.contains_var() {
        debug!("`{}` does not depend on x; its derivatives are zero", source);
    }
    trace!("tree: {}", expr);

    Ok(Function::new(expr))
}

/// Parses the source, and returns the function it describes along with its first and second
/// derivatives.
///
/// The source is parsed once; all three functions share the parsed tree. The only possible
/// error is a syntax error in the source.
pub fn differentiate(source: &str) -> Result<(Function, Function, Function), Error> {
    let f = parse(source)?;
    let f1 = f.derivative();
    let f2 = f1.derivative();
    Ok((f, f1, f2))
}

#[cfg(test)]
mod tests {
    use crate::primitive::complex;
    use pretty_assertions::assert_eq;
    use super::*;
    use zdiff_parser::parser::error::kind;

    #[test]
    fn parse_displays_source() {
        let f = parse("2 * x^3 + sin(x)").unwrap();
        assert_eq!(f.to_string(), "2 * x^3 + sin(x)");
    }

    #[test]
    fn derivatives_share_tree() {
        let (f, f1, _) = differentiate("x * cos(x)").unwrap();
        let Expr::Binary(_, _, cos) = &**f.expr() else { unreachable!() };
        let Expr::Binary(_, first_term, _) = &**f1.expr() else { unreachable!() };
        let Expr::Binary(_, _, shared) = &**first_term else { unreachable!() };
        assert!(Arc::ptr_eq(cos, shared));
    }

    #[test]
    fn constant_function() {
        let (f, f1, f2) = differentiate("3 * sin(2)").unwrap();
        let z = complex((4, -1));
        assert_eq!(f1.eval(&z), complex(0));
        assert_eq!(f2.eval(&z), complex(0));
        assert_eq!(f.eval(&z), f.eval(&complex(0)));
    }

    #[test]
    fn closure() {
        let (_, f1, _) = differentiate("x^2").unwrap();
        let f1 = f1.into_fn();
        assert_eq!(f1(&complex((3, 0))), complex((6, 0)));
    }

    #[test]
    fn syntax_error() {
        let err = differentiate("sin x").unwrap_err();
        assert!(err.is::<kind::MissingCallParen>());
        assert_eq!(err.spans, vec![0..3]);
    }
}
