//! The syntax tree produced by the parser.

pub mod binary;
pub mod call;
pub mod expr;
pub mod literal;
pub mod paren;

pub use binary::Binary;
pub use call::{Call, FuncName};
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitVar};
pub use paren::Paren;
