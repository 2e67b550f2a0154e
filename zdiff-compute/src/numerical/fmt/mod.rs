//! Formatting of evaluated values.

mod complex;
pub mod float;

use rug::Complex;
use std::fmt::{Display, Formatter};

/// Formatting options for values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// How to format a number.
    pub number: NumberFormat,

    /// The number of significant decimal digits to show. If [`None`], the number of digits is
    /// derived from the precision of the number being formatted, minus a few guard digits.
    ///
    /// This option **does not** control the precision of the number during calculation, only the
    /// number of digits to display during formatting.
    pub digits: Option<usize>,
}

/// The different ways to format a number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// Chooses between decimal and scientific notation based on the magnitude of the number.
    ///
    /// Numbers whose magnitude is at most `1e-6` or at least `1e+12` are represented in
    /// scientific notation, while all other numbers are formatted in decimal notation.
    ///
    /// This is the default option.
    #[default]
    Auto,

    /// Formats the number as a decimal, regardless of its magnitude.
    Decimal,

    /// Formats the number in scientific notation, using `E` to denote the exponent.
    Scientific,
}

/// A wrapper around a [`Complex`] that implements [`Display`] with the given options.
#[derive(Debug, Clone, Copy)]
pub struct ComplexFormatter<'a> {
    /// The value to format.
    pub value: &'a Complex,

    /// The options to format the value with.
    pub options: FormatOptions,
}

impl Display for ComplexFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        complex::fmt(f, self.value, self.options)
    }
}

/// Returns a value that displays the complex number with the given options.
pub fn fmt_complex(value: &Complex, options: FormatOptions) -> ComplexFormatter<'_> {
    ComplexFormatter { value, options }
}
