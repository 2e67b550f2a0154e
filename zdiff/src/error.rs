use crate::config::InvalidPoint;
use rustyline::error::ReadlineError;
use std::io;
use zdiff_parser::parser::error::Error as ParseError;

/// Utility enum to package any error that can stop the program.
#[derive(Debug)]
pub enum Error {
    /// A part of the point is not a number.
    Point(InvalidPoint),

    /// The expression has a syntax error.
    Parse(zdiff_error::Error),

    /// Reading interactive input failed.
    Readline(ReadlineError),

    /// Writing the results failed.
    Io(io::Error),
}

impl Error {
    /// Report the error to stderr. Syntax errors are rendered against the given input.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Point(err) => eprintln!("error: {}", err),
            Self::Parse(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("error: could not print report: {}", io_err);
                }
            },
            Self::Readline(err) => eprintln!("error: {}", err),
            Self::Io(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<InvalidPoint> for Error {
    fn from(err: InvalidPoint) -> Self {
        Self::Point(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err.into())
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zdiff_parser::parser::error::kind;

    #[test]
    fn parse_errors_keep_their_kind() {
        let err = Error::from(zdiff_compute::parse("2x").unwrap_err());
        let Error::Parse(err) = err else { unreachable!() };
        assert!(err.downcast_ref::<kind::ExpectedEof>().is_some());
        assert_eq!(err.spans, vec![1..2]);
    }
}
