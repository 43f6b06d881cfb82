//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of the input it
//! points at.
//!
//! Every failure in the workspace is eventually shown to the user in one of two ways: as a single
//! line (through the [`Display`](std::fmt::Display) implementation of [`Error`]), or as a full
//! report with highlighted source spans (through [`Error::report_to_stderr`]).

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `mathsolver_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// Returns the one-line message describing this error.
    fn message(&self) -> String;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    ///
    /// Errors that do not originate from the input (such as arithmetic errors found while solving)
    /// have no spans.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any region of the input.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use ariadne::{Label, ReportKind};
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Oops;

    impl ErrorKind for Oops {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            let offset = spans.first().map_or(0, |span| span.start);
            Report::build(ReportKind::Error, src_id, offset)
                .with_message(self.message())
                .with_labels(spans.iter().map(|span| {
                    Label::new((src_id, span.clone())).with_message("here")
                }))
                .finish()
        }

        fn message(&self) -> String {
            "something went wrong".to_string()
        }
    }

    #[test]
    fn display_is_single_line() {
        let err = Error::new(vec![2..3], Oops);
        assert_eq!(err.to_string(), "something went wrong");
    }

    #[test]
    fn report_contains_label() {
        let input = "2x + ";
        let err = Error::new(vec![3..4], Oops);
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(input)), &mut buf)
            .unwrap();
        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();

        assert!(rendered.contains("something went wrong"));
        assert!(rendered.contains("here"));
    }

    #[test]
    fn unspanned_report_does_not_panic() {
        let err = Error::unspanned(Oops);
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from("x")), &mut buf)
            .unwrap();
        assert!(!buf.is_empty());
    }
}
