pub mod iter;

use crate::{numerical::fmt::float as fmt_float, primitive::{float, float_from_str}};
use iter::ExprIter;
use rug::{Assign, Float};
use std::{fmt, sync::Arc};
use zdiff_parser::parser::{
    ast::{Call, Expr as AstExpr, FuncName, Literal},
    error::{kind, Error},
    token::op::BinOpKind,
    Precedence,
};

/// An arithmetic operation with two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the precedence of the operation.
    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Term,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Factor,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
        }
    }
}

/// A function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Cot,
    Log,
}

impl Func {
    /// Returns the name of the function.
    pub fn name(self) -> &'static str {
        FuncName::from(self).name()
    }
}

impl From<FuncName> for Func {
    fn from(name: FuncName) -> Self {
        match name {
            FuncName::Sin => Func::Sin,
            FuncName::Cos => Func::Cos,
            FuncName::Tan => Func::Tan,
            FuncName::Cot => Func::Cot,
            FuncName::Log => Func::Log,
        }
    }
}

impl From<Func> for FuncName {
    fn from(func: Func) -> Self {
        match func {
            Func::Sin => FuncName::Sin,
            Func::Cos => FuncName::Cos,
            Func::Tan => FuncName::Tan,
            Func::Cot => FuncName::Cot,
            Func::Log => FuncName::Log,
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An expression in the variable `x`.
///
/// Expressions are immutable once built. Children are reference-counted, so a derivative can
/// share the unchanged subtrees of the expression it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A real constant.
    Const(Float),

    /// The variable `x`.
    Var,

    /// An arithmetic operation, such as `x + 1`.
    Binary(BinaryOp, Arc<Expr>, Arc<Expr>),

    /// The base raised to the exponent, such as `x^2`.
    Power(Arc<Expr>, Arc<Expr>),

    /// A function applied to an argument, such as `sin(x)`.
    Call(Func, Arc<Expr>),
}

impl Expr {
    /// Creates a constant with the given value.
    pub fn constant<T>(n: T) -> Arc<Expr>
    where
        Float: Assign<T>,
    {
        Arc::new(Expr::Const(float(n)))
    }

    /// Creates the variable `x`.
    pub fn var() -> Arc<Expr> {
        Arc::new(Expr::Var)
    }

    /// Creates the arithmetic operation `lhs op rhs`.
    pub fn binary(op: BinaryOp, lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Binary(op, lhs, rhs))
    }

    /// Creates `lhs + rhs`.
    pub fn add(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Expr> {
        Self::binary(BinaryOp::Add, lhs, rhs)
    }

    /// Creates `lhs - rhs`.
    pub fn sub(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Expr> {
        Self::binary(BinaryOp::Sub, lhs, rhs)
    }

    /// Creates `lhs * rhs`.
    pub fn mul(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Expr> {
        Self::binary(BinaryOp::Mul, lhs, rhs)
    }

    /// Creates `lhs / rhs`.
    pub fn div(lhs: Arc<Expr>, rhs: Arc<Expr>) -> Arc<Expr> {
        Self::binary(BinaryOp::Div, lhs, rhs)
    }

    /// Creates `base^exponent`.
    pub fn power(base: Arc<Expr>, exponent: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Power(base, exponent))
    }

    /// Creates `func(arg)`.
    pub fn call(func: Func, arg: Arc<Expr>) -> Arc<Expr> {
        Arc::new(Expr::Call(func, arg))
    }

    /// Builds an expression from a syntax tree produced by the parser.
    ///
    /// Parentheses are dropped, since the shape of the tree already encodes the grouping. Fails
    /// if a number literal cannot be read as a value.
    pub fn from_ast(expr: &AstExpr) -> Result<Arc<Expr>, Error> {
        Ok(match expr {
            AstExpr::Literal(Literal::Number(num)) => {
                let value = float_from_str(&num.value).ok_or_else(|| {
                    Error::new_fatal(vec![num.span.clone()], kind::InvalidNumber {
                        lexeme: num.value.clone(),
                    })
                })?;
                Arc::new(Expr::Const(value))
            },
            AstExpr::Literal(Literal::Var(_)) => Self::var(),
            AstExpr::Paren(paren) => Self::from_ast(&paren.expr)?,
            AstExpr::Call(Call { name, arg, .. }) => Self::call((*name).into(), Self::from_ast(arg)?),
            AstExpr::Binary(binary) => {
                let lhs = Self::from_ast(&binary.lhs)?;
                let rhs = Self::from_ast(&binary.rhs)?;
                match binary.op.kind {
                    BinOpKind::Add => Self::add(lhs, rhs),
                    BinOpKind::Sub => Self::sub(lhs, rhs),
                    BinOpKind::Mul => Self::mul(lhs, rhs),
                    BinOpKind::Div => Self::div(lhs, rhs),
                    BinOpKind::Exp => Self::power(lhs, rhs),
                }
            },
        })
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first). Shared subtrees are visited once for every place they appear in.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree, counting shared subtrees once per appearance.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns true if the variable `x` appears anywhere in the tree.
    pub fn contains_var(&self) -> bool {
        self.post_order_iter().any(|expr| matches!(expr, Expr::Var))
    }

    /// Returns the precedence of the expression's outermost operation.
    ///
    /// Negative constants are printed as a subtraction from zero, and bind like one.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Const(value) if value.is_sign_negative() && !value.is_zero() => Precedence::Term,
            Expr::Const(_) | Expr::Var | Expr::Call(..) => Precedence::Primary,
            Expr::Binary(op, ..) => op.precedence(),
            Expr::Power(..) => Precedence::Exp,
        }
    }
}

/// Which side of its parent an operand is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Formats an operand of a binary operation or power, adding parentheses if the operand would
/// otherwise be grouped differently when parsed.
///
/// `+ - * /` are left-associative, so an operand on the right with the same precedence needs
/// parentheses, as in `1 - (2 - x)`. `^` is right-associative, so the same is true on the left,
/// as in `(x^2)^3`.
fn fmt_operand(
    f: &mut fmt::Formatter,
    operand: &Expr,
    parent: Precedence,
    side: Side,
) -> fmt::Result {
    let same_side_groups = match side {
        Side::Left => parent == Precedence::Exp,
        Side::Right => parent != Precedence::Exp,
    };
    let operand_precedence = operand.precedence();
    if operand_precedence < parent || (operand_precedence == parent && same_side_groups) {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(value) if value.is_sign_negative() && !value.is_zero() => {
                write!(f, "0 - ")?;
                fmt_float::fmt_exact(f, &value.as_neg())
            },
            Expr::Const(value) => fmt_float::fmt_exact(f, value),
            Expr::Var => write!(f, "x"),
            Expr::Binary(op, lhs, rhs) => {
                fmt_operand(f, lhs, op.precedence(), Side::Left)?;
                write!(f, " {} ", op)?;
                fmt_operand(f, rhs, op.precedence(), Side::Right)
            },
            Expr::Power(base, exponent) => {
                fmt_operand(f, base, Precedence::Exp, Side::Left)?;
                write!(f, "^")?;
                fmt_operand(f, exponent, Precedence::Exp, Side::Right)
            },
            Expr::Call(func, arg) => write!(f, "{}({})", func, arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use zdiff_parser::parser::{ast::LitNum, Parser};
    use super::*;

    /// Parses the source into an expression tree.
    fn tree(source: &str) -> Arc<Expr> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::from_ast(&ast).unwrap()
    }

    #[test]
    fn from_syntax_tree() {
        assert_eq!(tree("2 * x^3"), Expr::mul(
            Expr::constant(2),
            Expr::power(Expr::var(), Expr::constant(3)),
        ));
    }

    #[test]
    fn parentheses_are_dropped() {
        assert_eq!(tree("((x)) + (sin(x))"), Expr::add(
            Expr::var(),
            Expr::call(Func::Sin, Expr::var()),
        ));
    }

    #[test]
    fn decimal_literal() {
        assert_eq!(tree("0.25"), Expr::constant(0.25));
    }

    #[test]
    fn unreadable_number_literal() {
        let ast = AstExpr::Literal(Literal::Number(LitNum {
            value: "1.2.3".to_owned(),
            span: 4..9,
        }));
        let err = Expr::from_ast(&ast).unwrap_err();
        assert_eq!(err.downcast_ref::<kind::InvalidNumber>(), Some(&kind::InvalidNumber {
            lexeme: "1.2.3".to_owned(),
        }));
        assert_eq!(err.spans, vec![4..9]);
    }

    #[test]
    fn display_minimal_parentheses() {
        for source in [
            "1 + 2 * x",
            "(1 + 2) * x",
            "1 - (2 - x)",
            "1 - 2 - x",
            "x / (2 * x)",
            "x^x^x",
            "(x^x)^x",
            "(2 * x)^3",
            "log(cot(x)^2)",
            "x^(1 / 2)",
        ] {
            assert_eq!(tree(source).to_string(), source);
        }
    }

    #[test]
    fn display_drops_redundant_parentheses() {
        assert_eq!(tree("(1 * x) + (x^2)").to_string(), "1 * x + x^2");
    }

    #[test]
    fn display_negative_constant() {
        let expr = Expr::mul(Expr::constant(-1), Expr::call(Func::Sin, Expr::var()));
        assert_eq!(expr.to_string(), "(0 - 1) * sin(x)");
        assert_eq!(Expr::constant(-2.5).to_string(), "0 - 2.5");
    }

    #[test]
    fn display_round_trips() {
        let expr = Expr::sub(
            Expr::var(),
            Expr::power(Expr::constant(2), Expr::div(Expr::var(), Expr::constant(0.5))),
        );
        assert_eq!(tree(&expr.to_string()), expr);
    }

    #[test]
    fn count_nodes() {
        assert_eq!(tree("x").node_count(), 1);
        assert_eq!(tree("2 * x^3").node_count(), 5);
        assert_eq!(tree("sin(x) + cos(x)").node_count(), 5);
    }

    #[test]
    fn shared_subtrees_are_counted_per_appearance() {
        let sin = Expr::call(Func::Sin, Expr::var());
        let expr = Expr::mul(Arc::clone(&sin), sin);
        assert_eq!(expr.node_count(), 5);
    }

    #[test]
    fn variable_detection() {
        assert!(tree("2 * sin(x)").contains_var());
        assert!(!tree("2 * sin(1)").contains_var());
    }
}
