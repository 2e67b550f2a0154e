//! Tokenizer and parser for expressions in the single variable `x`.
//!
//! The grammar understood by the parser is small: numeric literals, the variable `x`, the
//! operators `+`, `-`, `*`, `/` and `^`, parentheses, and calls to `sin`, `cos`, `tan`, `cot`
//! and `log`. Parse a source string with [`parser::Parser`]:
//!
//! ```
//! use zdiff_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("2 * x^3 + sin(x)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2 * x^3 + sin(x)");
//! ```

pub mod parser;
pub mod tokenizer;
