//! Functions to construct [`Float`]s and [`Complex`] numbers from various types.

use rug::{Assign, Complex, Float};

/// The number of bits of precision used for constants in expressions.
pub const PRECISION: u32 = 1 << 9;

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Float`] from a string slice containing a decimal number, such as `3.14`.
///
/// Returns [`None`] if the string is not a valid number.
pub fn float_from_str(s: &str) -> Option<Float> {
    Float::parse(s).ok().map(|parsed| Float::with_val(PRECISION, parsed))
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}
