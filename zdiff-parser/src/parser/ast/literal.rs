use crate::{
    parser::{error::{kind, Error}, Parse, Parser},
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

/// A number literal, such as `2` or `3.14`.
///
/// The number is kept as written, so that it can be converted to a value of any precision.
#[derive(Debug, Clone, PartialEq)]
pub struct LitNum {
    /// The digits of the number, as written in the source.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LitVar {
    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitVar {
    /// The name of the only variable.
    pub const NAME: &'static str = "x";
}

impl fmt::Display for LitVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Self::NAME)
    }
}

/// Represents a literal value in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// The variable `x`.
    Var(LitVar),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Var(var) => var.span.clone(),
        }
    }
}

impl<'source> Parse<'source> for Literal {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int => Ok(Literal::Number(LitNum {
                value: token.lexeme.to_owned(),
                span: token.span,
            })),
            TokenKind::Float if token.lexeme.ends_with('.') => {
                Err(Error::new_fatal(vec![token.span], kind::IncompleteDecimal {
                    lexeme: token.lexeme.to_owned(),
                }))
            },
            TokenKind::Float => Ok(Literal::Number(LitNum {
                value: token.lexeme.to_owned(),
                span: token.span,
            })),
            TokenKind::Name if token.lexeme == LitVar::NAME => Ok(Literal::Var(LitVar {
                span: token.span,
            })),
            _ => Err(Error::new(vec![token.span], kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Float, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Var(var) => var.fmt(f),
        }
    }
}
