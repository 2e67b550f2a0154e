use crate::{
    parser::{
        error::{kind, Error},
        token::Name,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use super::{expr::Expr, literal::LitVar, paren::parse_group};

/// The functions that can be called in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncName {
    Sin,
    Cos,
    Tan,
    Cot,
    Log,
}

impl FuncName {
    /// Every function, in the order they are listed to the user.
    pub const ALL: [FuncName; 5] = [
        FuncName::Sin,
        FuncName::Cos,
        FuncName::Tan,
        FuncName::Cot,
        FuncName::Log,
    ];

    /// Returns the name of the function as written in source code.
    pub fn name(self) -> &'static str {
        match self {
            FuncName::Sin => "sin",
            FuncName::Cos => "cos",
            FuncName::Tan => "tan",
            FuncName::Cot => "cot",
            FuncName::Log => "log",
        }
    }

    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }
}

impl fmt::Display for FuncName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A function call, such as `sin(x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The function being called.
    pub name: FuncName,

    /// The argument of the call.
    pub arg: Box<Expr>,

    /// The region of the source code that this call was parsed from.
    pub span: Range<usize>,

    /// The region of the source code that the function name was parsed from.
    pub name_span: Range<usize>,

    /// The span of the parentheses that surround the argument.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl<'source> Parse<'source> for Call {
    fn parse(input: &mut Parser<'source>) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;

        // the variable is handled by `Literal`
        if name.lexeme == LitVar::NAME {
            return Err(Error::new(vec![name.span], kind::NonFatal));
        }

        let followed_by_paren = input.peek_token()
            .map_or(false, |token| token.kind == TokenKind::OpenParen);
        let func = match FuncName::from_name(name.lexeme) {
            Some(func) => func,
            None if followed_by_paren => return Err(Error::new_fatal(vec![name.span], kind::UnknownFunction {
                name: name.lexeme.to_owned(),
                suggestions: kind::similar_names(name.lexeme),
            })),
            None => return Err(Error::new_fatal(vec![name.span], kind::UnknownIdentifier {
                name: name.lexeme.to_owned(),
                suggestions: kind::similar_names(name.lexeme),
            })),
        };

        if !followed_by_paren {
            return Err(Error::new_fatal(vec![name.span], kind::MissingCallParen {
                name: func.name(),
            }));
        }

        let (arg, paren_span) = parse_group(input)?;
        Ok(Self {
            name: func,
            arg: Box::new(arg),
            span: name.span.start..paren_span.end,
            name_span: name.span,
            paren_span,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arg)
    }
}
