//! Utility functions to format complex numbers.

use rug::{Complex, Float};
use std::fmt::Formatter;
use super::{float, FormatOptions, NumberFormat};

/// Helper function to format the imaginary part of the complex number, with or without
/// parentheses.
fn fmt_helper(f: &mut Formatter<'_>, n: &Float, options: FormatOptions) -> std::fmt::Result {
    if n == &1 {
        return write!(f, "i");
    } else if n == &-1 {
        return write!(f, "-i");
    }

    // a part in scientific notation is wrapped in parentheses, so that the `i` is not read as
    // part of the exponent
    let scientific = n.is_normal() && match options.number {
        NumberFormat::Scientific => true,
        NumberFormat::Auto => float::should_use_scientific(n),
        NumberFormat::Decimal => false,
    };
    if scientific {
        write!(f, "(")?;
        float::fmt_scientific(f, n, float::significant_digits(n, options))?;
        write!(f, ")")?;
    } else {
        float::fmt(f, n, options)?;
    }

    write!(f, "i")
}

/// Returns true if the part should be shown as zero, either because it is zero, or because it is
/// too small to be visible next to the other part at the requested number of digits.
fn is_hidden(part: &Float, other: &Float, options: FormatOptions) -> bool {
    part.is_zero()
        || other.is_finite() && float::is_negligible(part, other, float::significant_digits(other, options))
}

/// Formats a complex number.
pub fn fmt(f: &mut Formatter<'_>, c: &Complex, options: FormatOptions) -> std::fmt::Result {
    let (re, im) = (c.real(), c.imag());

    // real part comes first, then imaginary; a part that is zero, or that would be lost in the
    // rounding of the other part, is omitted
    match (is_hidden(re, im, options), is_hidden(im, re, options)) {
        (false, false) => {
            float::fmt(f, re, options)?;

            if im.is_nan() || im.is_sign_positive() {
                write!(f, " + ")?;
                fmt_helper(f, im, options)
            } else {
                write!(f, " - ")?;
                fmt_helper(f, &im.as_neg(), options)
            }
        },
        (false, true) => float::fmt(f, re, options),
        (true, false) => fmt_helper(f, im, options),
        (true, true) => write!(f, "0"),
    }
}
