//! The primary production of the grammar: `P ::= '(' S ')' | L | V`.

use gcalc_expr::Expr;
use super::{literal::{parse_literal, parse_variable}, Parser, Rule};

impl Parser<'_> {
    /// Parses `'(' S ')'`, returning the inner expression.
    ///
    /// Ignoring surrounding whitespace, `s` must start with `(`, end with `)`, and contain at
    /// least one character between them. Exactly one pair of parentheses is stripped before the
    /// inside is parsed.
    pub(crate) fn parse_paren_inner(&self, s: &str) -> Option<Expr> {
        let inner = s.trim().strip_prefix('(')?.strip_suffix(')')?;
        if inner.is_empty() {
            return None;
        }
        self.parse_rule(Rule::Start, inner)
    }

    /// Parses `P ::= '(' S ')' | L | V`.
    pub(crate) fn parse_primary(&self, s: &str) -> Option<Expr> {
        if let Some(inner) = self.parse_paren_inner(s) {
            Some(Expr::paren(inner))
        } else if let Some(value) = parse_literal(s) {
            Some(Expr::literal(value))
        } else if parse_variable(s) {
            Some(Expr::Variable)
        } else {
            None
        }
    }
}
