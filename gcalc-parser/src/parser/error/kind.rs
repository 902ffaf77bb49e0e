//! The diagnostics that can be attached to a [`ParseFailure`](super::ParseFailure).

use ariadne::{Fmt, Report};
use gcalc_error::{report, ErrorKind, EXPR};
use std::ops::Range;

/// The input was empty, or contained only spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "missing expression",
            &[format!("add an {} here", "expression".fg(EXPR))],
            None,
        )
    }
}

/// A character that is not part of the expression language was found.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub found: char,
}

impl ErrorKind for UnexpectedCharacter {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            format!("unexpected character `{}`", self.found),
            &["I don't know what this means".to_string()],
            Some(format!(
                "expressions may only use numbers, the variable {}, {}, parentheses, and the operators {}",
                "x".fg(EXPR),
                "log".fg(EXPR),
                "+ - * / ^".fg(EXPR),
            )),
        )
    }
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let help = if self.opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this"
        };
        report(
            src_id,
            spans,
            "unclosed parenthesis",
            &["this parenthesis is not closed".to_string()],
            Some(help.to_string()),
        )
    }
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyParenthesis;

impl ErrorKind for EmptyParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "missing expression inside parenthesis",
            &["add an expression here".to_string()],
            None,
        )
    }
}

/// The input ended with a binary operator that is missing its right operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEoExpr;

impl ErrorKind for UnexpectedEoExpr {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "unexpected end of expression",
            &[format!("I expected to see more {} after this operator", "expression".fg(EXPR))],
            None,
        )
    }
}

/// The input does not match the grammar, for no more specific reason that could be found.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidExpression;

impl ErrorKind for InvalidExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            spans,
            "cannot parse expression",
            &[format!("I could not understand this {}", "expression".fg(EXPR))],
            Some(format!(
                "the base of `^` and the argument of `log` must be a number, {}, or a parenthesized expression",
                "x".fg(EXPR),
            )),
        )
    }
}
