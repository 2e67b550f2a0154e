use crate::parser::{
    error::{kind, Error},
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};
use super::expr::{Expr, Primary};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(
        input: &mut Parser,
        lhs: Expr,
        op: BinOp,
        mut rhs: Expr,
    ) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, check the precedence of the following
            // operator, if any, since `3 + 4 * 5` is not `(3 + 4) * 5`

            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            let Ok(next_op) = input_ahead.try_parse::<BinOp>() else {
                break;
            };

            if next_op.precedence() > precedence
                || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right) {
                // this operator binds tighter, or is right-associative at the same level, as in
                // `1 + 2 * 3` or `2 ^ 3 ^ 4`; its expression starts with `rhs`
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                // lower precedence, or equal precedence and left-associative, as in
                // `1 * 2 + 3` or `1 * 2 * 3`; `lhs op rhs` is complete
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// Parses binary operators and their operands following `lhs`, as long as the operators have
    /// at least the given precedence.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            let Ok(op) = input_ahead.try_parse_then::<BinOp, _>(|bin_op, input| {
                if bin_op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            }) else {
                break;
            };

            input.set_cursor(&input_ahead);

            // once an operator is consumed, it must have a right-hand side
            let rhs = input.try_parse::<Primary>().map_err(Error::into_fatal)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs.into())?;
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.kind {
            BinOpKind::Exp => write!(f, "{}^{}", self.lhs, self.rhs),
            op => write!(f, "{} {} {}", self.lhs, op, self.rhs),
        }
    }
}
