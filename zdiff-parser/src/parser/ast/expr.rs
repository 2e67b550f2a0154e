use crate::{
    parser::{
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
    try_parse_catch_fatal,
};
use std::{fmt, ops::Range};
use super::{binary::Binary, call::Call, literal::Literal, paren::Paren};

/// Represents any kind of expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// The tokens an expression can start with.
    pub const STARTING_TOKENS: &'static [TokenKind] = &[
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Name,
        TokenKind::OpenParen,
    ];

    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl<'source> Parse<'source> for Expr {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let lhs = input.try_parse::<Primary>()?;
        Binary::parse_expr(input, lhs.into(), Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression, which cannot be split by an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Literal(Literal),
    Paren(Paren),
    Call(Call),
}

impl<'source> Parse<'source> for Primary {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        try_parse_catch_fatal!(
            input.try_parse::<Paren>().map(Primary::Paren),
            input.try_parse::<Call>().map(Primary::Call),
            input.try_parse::<Literal>().map(Primary::Literal),
        );

        // nothing here can start an expression
        match input.peek_token() {
            None => Err(input.error_fatal(kind::UnexpectedEof)),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }))
            },
            Some(token) => Err(input.error_fatal(kind::UnexpectedToken {
                expected: Expr::STARTING_TOKENS,
                found: token.kind,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Expr::Literal(literal),
            Primary::Paren(paren) => Expr::Paren(paren),
            Primary::Call(call) => Expr::Call(call),
        }
    }
}
