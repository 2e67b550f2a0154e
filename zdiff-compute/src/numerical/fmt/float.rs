//! Utility functions to format floating-point numbers.

use rug::{float::Round, Float};
use std::{cmp::Ordering, f64::consts::{LOG10_2, LOG2_10}, fmt::Write};
use super::{FormatOptions, NumberFormat};

/// The number of digits held back from the precision of a number when no number of digits is
/// requested, so that rounding errors do not show up in the output.
const GUARD_DIGITS: usize = 3;

/// Returns the number of significant decimal digits shown for a number with the given precision
/// in bits, if no number of digits is requested.
pub fn default_digits(prec: u32) -> usize {
    ((prec as f64 * LOG10_2).floor() as usize)
        .saturating_sub(GUARD_DIGITS)
        .max(1)
}

/// Returns the number of significant decimal digits to show for the given number.
pub fn significant_digits(n: &Float, options: FormatOptions) -> usize {
    options.digits
        .unwrap_or_else(|| default_digits(n.prec()))
        .max(1)
}

/// Returns true if the given float is small or large enough that it should be formatted in
/// scientific notation. Zero and non-finite values are never formatted in scientific notation.
pub fn should_use_scientific(n: &Float) -> bool {
    if !n.is_normal() {
        return false;
    }

    let abs = n.as_abs();
    *abs <= 1e-6 || *abs >= 1e+12
}

/// Returns true if `part` is too small to be visible next to `other` when `other` is shown with
/// the given number of significant digits.
pub fn is_negligible(part: &Float, other: &Float, digits: usize) -> bool {
    match (part.get_exp(), other.get_exp()) {
        (Some(part_exp), Some(other_exp)) => {
            f64::from(other_exp) - f64::from(part_exp) > digits as f64 * LOG2_10
        },
        _ => false,
    }
}

/// Trims trailing zeros from the fractional part of a string assumed to represent a single
/// number in decimal notation, and the decimal point if nothing remains after it.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Formats a float that is zero, infinite, or NaN. Returns [`None`] if the float is normal.
fn fmt_special<W: Write>(f: &mut W, n: &Float) -> Option<std::fmt::Result> {
    if n.is_nan() {
        Some(write!(f, "NaN"))
    } else if n.is_infinite() {
        Some(write!(f, "{}inf", if n.is_sign_negative() { "-" } else { "" }))
    } else if n.is_zero() {
        Some(write!(f, "0"))
    } else {
        None
    }
}

/// Formats a float as a standard number, rounded to the given number of significant digits.
pub fn fmt_decimal<W: Write>(f: &mut W, n: &Float, digits: usize) -> std::fmt::Result {
    if let Some(result) = fmt_special(f, n) {
        return result;
    }

    let (sign, mut s, exponent) = n.to_sign_string_exp_round(10, Some(digits), Round::Nearest);
    let exponent = exponent.unwrap_or(0); // exponent is Some() if the number is normal

    // add decimal point
    match exponent.cmp(&0) {
        Ordering::Less => s.insert_str(0, &format!("0.{}", "0".repeat(exponent.unsigned_abs() as usize))),
        Ordering::Equal => s.insert_str(0, "0."),
        Ordering::Greater => {
            let exponent = exponent as usize;
            match s.len().cmp(&exponent) {
                // if there are not enough digits before the decimal point, add zeros
                Ordering::Less => s.push_str(&"0".repeat(exponent - s.len())),

                // place the decimal point in the correct place
                Ordering::Greater => s.insert(exponent, '.'),

                // if len == exponent, the decimal point would be at the end of the string, so we
                // don't add anything
                Ordering::Equal => {},
            }
        },
    }

    write!(f, "{}{}", if sign { "-" } else { "" }, trim_trailing(&s))
}

/// Formats a float in scientific notation, rounded to the given number of significant digits.
pub fn fmt_scientific<W: Write>(f: &mut W, n: &Float, digits: usize) -> std::fmt::Result {
    if let Some(result) = fmt_special(f, n) {
        return result;
    }

    let (sign, mut s, exponent) = n.to_sign_string_exp_round(10, Some(digits), Round::Nearest);
    let mut exponent = exponent.unwrap_or(0);

    // add decimal point
    s.insert(1, '.');

    // subtract 1 from the exponent because we inserted a decimal point after the first digit
    exponent -= 1;

    write!(f, "{}{}E{}", if sign { "-" } else { "" }, trim_trailing(&s), exponent)
}

/// Formats a float with the given options.
pub fn fmt<W: Write>(f: &mut W, n: &Float, options: FormatOptions) -> std::fmt::Result {
    let digits = significant_digits(n, options);
    match options.number {
        NumberFormat::Auto if should_use_scientific(n) => fmt_scientific(f, n, digits),
        NumberFormat::Auto | NumberFormat::Decimal => fmt_decimal(f, n, digits),
        NumberFormat::Scientific => fmt_scientific(f, n, digits),
    }
}

/// Formats a float in decimal notation with as many digits as its precision supports. Used to
/// print constants in expressions, which must be re-parseable.
pub fn fmt_exact<W: Write>(f: &mut W, n: &Float) -> std::fmt::Result {
    fmt_decimal(f, n, default_digits(n.prec()))
}

#[cfg(test)]
mod tests {
    use crate::primitive::{float, PRECISION};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Formats the float in decimal notation with the given number of digits.
    fn decimal(n: f64, digits: usize) -> String {
        let mut s = String::new();
        fmt_decimal(&mut s, &float(n), digits).unwrap();
        s
    }

    #[test]
    fn digits_for_precision() {
        assert_eq!(default_digits(53), 12);
        assert_eq!(default_digits(128), 35);
        assert_eq!(default_digits(PRECISION), 151);
        assert_eq!(default_digits(2), 1);
    }

    #[test]
    fn decimal_point_placement() {
        assert_eq!(decimal(1234.5, 10), "1234.5");
        assert_eq!(decimal(0.015625, 10), "0.015625");
        assert_eq!(decimal(0.5, 10), "0.5");
        assert_eq!(decimal(-1.25e6, 3), "-1250000");
        assert_eq!(decimal(1e-3, 5), "0.001");
    }

    #[test]
    fn rounding() {
        assert_eq!(decimal(2.0 / 3.0, 3), "0.667");
        assert_eq!(decimal(9.9999, 3), "10");
    }

    #[test]
    fn exact_constants() {
        let mut s = String::new();
        fmt_exact(&mut s, &float(0.1)).unwrap();
        assert_eq!(s, "0.1000000000000000055511151231257827021181583404541015625");

        let mut s = String::new();
        fmt_exact(&mut s, &crate::primitive::float_from_str("0.1").unwrap()).unwrap();
        assert_eq!(s, "0.1");
    }

    #[test]
    fn negligible() {
        assert!(is_negligible(&float(1e-40), &float(1.0), 35));
        assert!(!is_negligible(&float(1e-30), &float(1.0), 35));
        assert!(!is_negligible(&float(0.0), &float(1.0), 35));
    }
}
