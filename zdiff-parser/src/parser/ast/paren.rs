use crate::parser::{
    error::{kind, Error},
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};
use super::expr::Expr;

/// Parses a non-empty parenthesized group `( expr )`, returning the inner expression and the span
/// of the group, including both parentheses.
///
/// A missing opening parenthesis is a non-fatal error. Once the opening parenthesis is consumed,
/// every error is fatal.
pub(crate) fn parse_group<'source>(input: &mut Parser<'source>) -> Result<(Expr, Range<usize>), Error> {
    let open_paren = input.try_parse::<OpenParen>()?;

    if let Ok(close_paren) = input.try_parse::<CloseParen>() {
        return Err(Error::new_fatal(
            vec![open_paren.span.start..close_paren.span.end],
            kind::EmptyParenthesis,
        ));
    }

    let expr = input.try_parse::<Expr>().map_err(Error::into_fatal)?;
    let close_paren = input.try_parse::<CloseParen>()
        .map_err(|_| Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis {
            opening: true,
        }))?;

    Ok((expr, open_paren.span.start..close_paren.span.end))
}

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this group was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl<'source> Parse<'source> for Paren {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let (expr, span) = parse_group(input)?;
        Ok(Self {
            expr: Box::new(expr),
            span,
        })
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.expr)
    }
}
