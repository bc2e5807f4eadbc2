//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

// the `ErrorKind` derive refers to this crate by name
#[cfg(test)]
extern crate self as symcalc_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that the concrete kind can be recovered.
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

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the given source code.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error into a string, highlighting the given source code.
    pub fn render(&self, src_id: &str, input: &str) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcalc_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(message = "something went wrong", labels = ["right here"], help = "try again")]
    struct Plain;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("found {} problems", count),
        labels = ["first", "second"],
    )]
    struct Counted {
        count: usize,
    }

    fn rendered(err: &Error, input: &str) -> String {
        let text = err.render("input", input).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(text)).unwrap()
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Counted { count: 2 });
        assert!(err.is::<Counted>());
        assert!(!err.is::<Plain>());
        assert_eq!(err.downcast_ref::<Counted>().map(|c| c.count), Some(2));
    }

    #[test]
    fn report_contents() {
        let err = Error::new(vec![2..3], Plain);
        let text = rendered(&err, "1 + $");
        assert!(text.contains("something went wrong"));
        assert!(text.contains("right here"));
        assert!(text.contains("try again"));
    }

    #[test]
    fn report_uses_named_fields() {
        let err = Error::new(vec![0..1, 4..5], Counted { count: 2 });
        let text = rendered(&err, "a + b");
        assert!(text.contains("found 2 problems"));
        assert!(text.contains("first"));
        assert!(text.contains("second"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Plain);
        let text = rendered(&err, "1 + 2");
        assert!(text.contains("something went wrong"));
    }
}
