//! The expression tree and its symbolic derivative.

pub mod derivative;
pub mod expr;

pub use derivative::derivative;
pub use expr::{BinaryOp, Expr, Func};
