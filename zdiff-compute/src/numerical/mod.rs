//! Numerical evaluation and formatting of expressions over the complex numbers.

pub mod eval;
pub mod fmt;
