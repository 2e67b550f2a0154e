//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the spanned [`Error`] type that carries one.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the error as [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns a reference to the error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Prints the report for this error to stderr, highlighting the given input.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement `Display`, so printing goes
    /// through its `eprint` method instead.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error into a string, highlighting the given input.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec<u8>` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    /// A hand-written error kind with one label per span.
    #[derive(Debug, PartialEq)]
    struct Unbalanced {
        depth: usize,
    }

    impl ErrorKind for Unbalanced {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(format!("unbalanced at depth {}", self.depth))
                .with_labels(spans.iter().map(|span| {
                    Label::new((src_id, span.clone()))
                        .with_color(EXPR)
                        .with_message("this parenthesis")
                }))
                .finish()
        }
    }

    #[test]
    fn downcast_to_concrete_kind() {
        let err = Error::new(vec![0..1], Unbalanced { depth: 2 });
        assert_eq!(err.downcast_ref::<Unbalanced>(), Some(&Unbalanced { depth: 2 }));
    }

    #[test]
    fn render_report() {
        let err = Error::new(vec![3..4], Unbalanced { depth: 1 });
        let rendered = strip_ansi_escapes::strip_str(err.report_to_string("input", "sin(x"));
        assert!(rendered.contains("unbalanced at depth 1"));
        assert!(rendered.contains("this parenthesis"));
        assert!(rendered.contains("sin(x"));
    }
}
