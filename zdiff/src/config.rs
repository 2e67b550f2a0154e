//! Command-line configuration.

use clap::{Parser, ValueEnum};
use rug::{float, Complex, Float};
use std::{fmt, num::NonZeroUsize};
use zdiff_compute::numerical::fmt::{FormatOptions, NumberFormat};

/// The precision, in bits, of the point the functions are evaluated at, if none is given.
pub const DEFAULT_POINT_PRECISION: u32 = 128;

/// How to print values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Notation {
    /// Scientific notation for very small or very large magnitudes, decimal otherwise.
    Auto,

    /// Always decimal.
    Decimal,

    /// Always scientific.
    Scientific,
}

impl From<Notation> for NumberFormat {
    fn from(notation: Notation) -> Self {
        match notation {
            Notation::Auto => NumberFormat::Auto,
            Notation::Decimal => NumberFormat::Decimal,
            Notation::Scientific => NumberFormat::Scientific,
        }
    }
}

/// Evaluates an expression in x and its first two derivatives at a complex point.
///
/// If no point is given, points are read interactively, one `<real> [<imag>]` per line.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "zdiff", allow_negative_numbers = true)]
pub struct Cli {
    /// The expression to differentiate, such as `2 * x^3 + sin(x)`
    pub expression: String,

    /// Real part of the point
    pub real: Option<String>,

    /// Imaginary part of the point
    pub imag: Option<String>,

    /// Precision of the point, in bits
    #[arg(
        long,
        default_value_t = DEFAULT_POINT_PRECISION,
        value_parser = clap::value_parser!(u32).range(i64::from(float::prec_min())..=i64::from(float::prec_max())),
    )]
    pub precision: u32,

    /// Number of significant digits to print
    #[arg(long)]
    pub digits: Option<NonZeroUsize>,

    /// Notation of printed values
    #[arg(long, value_enum, default_value_t = Notation::Auto)]
    pub notation: Notation,

    /// Print the expression trees of f, f' and f''
    #[arg(long)]
    pub show_trees: bool,
}

impl Cli {
    /// Returns the options to print values with.
    pub fn format(&self) -> FormatOptions {
        FormatOptions {
            number: self.notation.into(),
            digits: self.digits.map(NonZeroUsize::get),
        }
    }

    /// Returns the point given on the command line, or [`None`] if points should be read
    /// interactively.
    pub fn point(&self) -> Result<Option<Complex>, InvalidPoint> {
        self.real
            .as_deref()
            .map(|real| parse_point(real, self.imag.as_deref(), self.precision))
            .transpose()
    }
}

/// A point that is not written as one or two numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPoint(pub String);

impl fmt::Display for InvalidPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid number format for the point: `{}`", self.0)
    }
}

/// Parses a part of a point at the given precision.
fn parse_part(part: &str, precision: u32) -> Result<Float, InvalidPoint> {
    Float::parse(part)
        .map(|parsed| Float::with_val(precision, parsed))
        .map_err(|_| InvalidPoint(part.to_owned()))
}

/// Parses the point `real + imag i` at the given precision. The imaginary part defaults to zero.
pub fn parse_point(real: &str, imag: Option<&str>, precision: u32) -> Result<Complex, InvalidPoint> {
    let real = parse_part(real, precision)?;
    let imag = match imag {
        Some(imag) => parse_part(imag, precision)?,
        None => Float::new(precision),
    };
    Ok(Complex::with_val(precision, (real, imag)))
}

/// Parses a line of interactive input as `<real> [<imag>]`. Returns [`None`] for a blank line.
pub fn parse_point_line(line: &str, precision: u32) -> Option<Result<Complex, InvalidPoint>> {
    let parts = line.split_whitespace().collect::<Vec<_>>();
    match parts[..] {
        [] => None,
        [real] => Some(parse_point(real, None, precision)),
        [real, imag] => Some(parse_point(real, Some(imag), precision)),
        _ => Some(Err(InvalidPoint(line.trim().to_owned()))),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use super::*;

    fn cli(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("zdiff").chain(args.iter().copied()))
    }

    #[test]
    fn expression_and_point() {
        let cli = cli(&["2 * x^3", "2", "-2.5"]).unwrap();
        assert_eq!(cli.expression, "2 * x^3");
        assert_eq!(cli.point(), Ok(Some(Complex::with_val(128, (2, -2.5)))));
        assert_eq!(cli.precision, DEFAULT_POINT_PRECISION);
        assert_eq!(cli.format(), FormatOptions::default());
        assert!(!cli.show_trees);
    }

    #[test]
    fn imaginary_part_defaults_to_zero() {
        let cli = cli(&["x", "1e3"]).unwrap();
        assert_eq!(cli.point(), Ok(Some(Complex::with_val(128, (1000, 0)))));
    }

    #[test]
    fn no_point() {
        assert_eq!(cli(&["sin(x)"]).unwrap().point(), Ok(None));
    }

    #[test]
    fn flags() {
        let cli = cli(&[
            "--precision", "256",
            "x", "1",
            "--digits", "8",
            "--notation", "scientific",
            "--show-trees",
        ]).unwrap();
        assert_eq!(cli.precision, 256);
        assert_eq!(cli.point().unwrap().map(|point| point.prec()), Some((256, 256)));
        assert_eq!(cli.format(), FormatOptions {
            number: NumberFormat::Scientific,
            digits: Some(8),
        });
        assert!(cli.show_trees);
    }

    #[test]
    fn argument_errors() {
        let kind = |args: &[&str]| cli(args).unwrap_err().kind();
        assert_eq!(kind(&[]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["x", "1", "2", "3"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["x", "--digits"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["x", "--digits", "0"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["x", "--precision", "0"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["x", "--notation", "binary"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["x", "--verbose"]), ErrorKind::UnknownArgument);
    }

    #[test]
    fn invalid_point() {
        let cli = cli(&["x", "1", "two"]).unwrap();
        assert_eq!(cli.point(), Err(InvalidPoint("two".to_owned())));
        assert_eq!(
            InvalidPoint("1,5".to_owned()).to_string(),
            "invalid number format for the point: `1,5`",
        );
    }

    #[test]
    fn interactive_lines() {
        assert_eq!(parse_point_line("   ", 64), None);
        assert_eq!(parse_point_line("0.5", 64), Some(Ok(Complex::with_val(64, (0.5, 0)))));
        assert_eq!(parse_point_line(" -1  2 ", 64), Some(Ok(Complex::with_val(64, (-1, 2)))));
        assert_eq!(parse_point_line("1 2 3", 64), Some(Err(InvalidPoint("1 2 3".to_owned()))));
        assert_eq!(parse_point_line("1 i", 64), Some(Err(InvalidPoint("i".to_owned()))));
    }
}
