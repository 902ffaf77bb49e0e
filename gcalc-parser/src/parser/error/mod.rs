pub mod kind;

use ariadne::Report;
use crate::tokenizer::{tokenize_complete, TokenKind};
use gcalc_error::Error;
use std::{fmt, io, ops::Range};

/// The input could not be parsed as an expression.
///
/// Parsing is all-or-nothing: no part of the input is used when this error is returned. The
/// attached [`Error`] points at the most likely cause of the failure, for display to the user.
#[derive(Debug)]
pub struct ParseFailure {
    /// The text that failed to parse, exactly as it was given to the parser.
    pub input: String,

    /// A diagnostic describing why the input could not be parsed.
    pub error: Error,
}

impl ParseFailure {
    /// Creates a new parse failure for the given input, diagnosing the cause of the failure.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
            error: diagnose(input),
        }
    }

    /// Build a report from this error.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.error.build_report(src_id)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> io::Result<()> {
        self.error.report_to_stderr(src_id, &self.input)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, writer: impl io::Write) -> io::Result<()> {
        self.error.write_report(src_id, &self.input, writer)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot parse expression: {}", self.input)
    }
}

impl std::error::Error for ParseFailure {}

/// Scans input that failed to parse, and picks a diagnostic explaining the failure.
///
/// The checks are made in order, and the first one that applies is used: empty input, an
/// unknown character, an unbalanced parenthesis, an empty pair of parentheses, and a trailing
/// operator. If none of them apply, the entire input is reported as invalid.
fn diagnose(input: &str) -> Error {
    let tokens = tokenize_complete(input);
    let mut significant = tokens.iter().filter(|token| !token.is_whitespace()).peekable();

    let Some(first) = significant.peek() else {
        return Error::new(vec![0..input.len()], kind::EmptyExpression);
    };
    let whole = first.span.start..input.trim_end().len();

    if let Some(token) = tokens.iter().find(|token| token.kind == TokenKind::Symbol) {
        let found = token.lexeme.chars().next().unwrap_or_default();
        return Error::new(vec![token.span.clone()], kind::UnexpectedCharacter { found });
    }

    // spans of the currently unclosed `(`
    let mut open = Vec::new();
    let mut prev_kind = None;
    let mut last = None;
    for token in significant {
        match token.kind {
            TokenKind::OpenParen => open.push(token.span.clone()),
            TokenKind::CloseParen => {
                let Some(opening) = open.pop() else {
                    return Error::new(
                        vec![token.span.clone()],
                        kind::UnclosedParenthesis { opening: false },
                    );
                };
                if prev_kind == Some(TokenKind::OpenParen) {
                    return Error::new(vec![opening.start..token.span.end], kind::EmptyParenthesis);
                }
            },
            _ => (),
        }
        prev_kind = Some(token.kind);
        last = Some(token);
    }

    if let Some(opening) = open.into_iter().next() {
        return Error::new(vec![opening], kind::UnclosedParenthesis { opening: true });
    }

    match last {
        Some(token) if token.kind.is_binary_op() => {
            Error::new(vec![token.span.clone()], kind::UnexpectedEoExpr)
        },
        _ => Error::new(vec![whole], kind::InvalidExpression),
    }
}
