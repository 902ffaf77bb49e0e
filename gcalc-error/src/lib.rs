//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Builds the standard report used by most [`ErrorKind`] implementations: a headline message,
/// one label per span (paired with `labels` in order), and optional help text.
///
/// Labels with an empty message only highlight their span. If there are more spans than labels,
/// the remaining spans are highlighted without a message.
pub fn report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            spans
                .iter()
                .enumerate()
                .map(|(i, span)| {
                    let mut label = Label::new((src_id, span.clone())).with_color(EXPR);
                    match labels.get(i) {
                        Some(label_str) if !label_str.is_empty() => {
                            label = label.with_message(label_str);
                        },
                        _ => (),
                    }
                    label
                })
                .collect::<Vec<_>>(),
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
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

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report for this error to the given writer, instead of stderr.
    pub fn write_report(
        &self,
        src_id: &str,
        input: &str,
        writer: impl io::Write,
    ) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Unbalanced;

    impl ErrorKind for Unbalanced {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            report(
                src_id,
                spans,
                "unclosed parenthesis",
                &["this parenthesis is not closed".to_string()],
                Some("add a closing parenthesis".to_string()),
            )
        }
    }

    fn render(err: &Error, input: &str) -> String {
        let mut out = Vec::new();
        err.write_report("input", input, &mut out).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let err = Error::new(vec![0..1], Unbalanced);
        let text = render(&err, "(x+1");

        assert!(text.contains("unclosed parenthesis"));
        assert!(text.contains("this parenthesis is not closed"));
        assert!(text.contains("add a closing parenthesis"));
    }

    #[test]
    fn extra_spans_are_highlighted_without_message() {
        let err = Error::new(vec![0..1, 3..4], Unbalanced);
        let text = render(&err, "(x)(");

        assert!(text.contains("this parenthesis is not closed"));
    }
}
