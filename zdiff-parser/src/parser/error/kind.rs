//! The kinds of errors the parser can report.

use ariadne::Fmt;
use crate::{parser::ast::call::FuncName, tokenizer::TokenKind};
use levenshtein::levenshtein;
use zdiff_attrs::ErrorKind;
use zdiff_error::EXPR;

/// Returns the names the user could have meant instead of the given unknown name: the variable
/// `x` and the supported functions that are within an edit distance of one.
pub fn similar_names(name: &str) -> Vec<&'static str> {
    std::iter::once("x")
        .chain(FuncName::ALL.iter().map(|func| func.name()))
        .filter(|candidate| levenshtein(candidate, name) < 2)
        .collect()
}

/// Builds the help message for an unknown name, given its suggestions.
fn suggestion_help(suggestions: &[&str]) -> String {
    match suggestions {
        [] => format!(
            "the only variable is `x`, and the supported functions are {}",
            FuncName::ALL
                .iter()
                .map(|func| format!("`{}`", func.name()))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        [only] => format!("did you mean `{}`?", only.fg(EXPR)),
        _ => format!(
            "did you mean one of these? {}",
            suggestions
                .iter()
                .map(|name| format!("`{}`", name.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// An intentionally useless error. This should only be used for non-fatal errors, as it contains
/// no useful information.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an internal non-fatal error occurred while parsing",
    labels = ["here"],
    help = "you should never see this error; please report this as a bug"
)]
pub struct NonFatal;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of expression",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
    help = "multiplication must be written explicitly, as in `2*x`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!(
        "I expected {}, but found {} here",
        expected.iter().map(|kind| kind.to_string()).collect::<Vec<_>>().join(" or "),
        found,
    )],
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A name that is neither the variable `x` nor a function was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown identifier `{}`", name),
    labels = ["this identifier"],
    help = suggestion_help(suggestions),
)]
pub struct UnknownIdentifier {
    /// The name that was used.
    pub name: String,

    /// Known names similar to the one that was used.
    pub suggestions: Vec<&'static str>,
}

/// A name that is not a function was called.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = suggestion_help(suggestions),
)]
pub struct UnknownFunction {
    /// The name of the function that was called.
    pub name: String,

    /// Known names similar to the one that was called.
    pub suggestions: Vec<&'static str>,
}

/// A function name was used without an argument list.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument for function `{}`", name),
    labels = ["this function"],
    help = format!("functions must be called with parentheses, as in `{}(x)`", name.fg(EXPR)),
)]
pub struct MissingCallParen {
    /// The name of the function.
    pub name: &'static str,
}

/// A parenthesis was not closed, or a closing parenthesis has no matching opening one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *opening {
        format!("add a closing parenthesis `{}` at the end of the group", ")".fg(EXPR))
    } else {
        format!("remove this parenthesis, or add an opening parenthesis `{}` before it", "(".fg(EXPR))
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the unclosed parenthesis is the opening parenthesis.
    pub opening: bool,
}

/// A pair of parentheses with nothing inside.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = [format!("add an {} between these parentheses", "expression".fg(EXPR))],
)]
pub struct EmptyParenthesis;

/// A number ends with a decimal point and no digits after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "incomplete number",
    labels = ["this number has no digits after the decimal point"],
    help = format!("write the number as `{}` or `{}`", format!("{}0", lexeme).fg(EXPR), lexeme.trim_end_matches('.').fg(EXPR)),
)]
pub struct IncompleteDecimal {
    /// The number as written.
    pub lexeme: String,
}

/// A number literal could not be converted to a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The number as written.
    pub lexeme: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn suggestions_for_typos() {
        assert_eq!(similar_names("sine"), vec!["sin"]);
        assert_eq!(similar_names("y"), vec!["x"]);
        assert_eq!(similar_names("co"), vec!["cos", "cot"]);
        assert!(similar_names("foo").is_empty());
    }

    #[test]
    fn help_lists_functions_without_suggestions() {
        assert_eq!(
            suggestion_help(&[]),
            "the only variable is `x`, and the supported functions are `sin`, `cos`, `tan`, `cot`, `log`",
        );
    }
}
