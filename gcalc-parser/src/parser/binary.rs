//! The binary productions of the grammar: `A`, `M`, and `E`.

use gcalc_expr::{Expr, ProductOp, SumOp};
use log::trace;
use super::{Parser, Rule};

impl Parser<'_> {
    /// Finds the leftmost occurrence of `op` in `s` such that the text before it parses as `lhs`
    /// and the text after it parses as `rhs`, returning both operands.
    ///
    /// The right operand is only tried if the left operand parsed.
    pub fn split_at_op(&self, s: &str, op: char, lhs: Rule, rhs: Rule) -> Option<(Expr, Expr)> {
        s.char_indices()
            .filter(|&(_, c)| c == op)
            .find_map(|(i, _)| {
                let left = self.parse_rule(lhs, &s[..i])?;
                let right = self.parse_rule(rhs, &s[i + op.len_utf8()..])?;
                trace!("split `{}` at `{}` (byte {})", s, op, i);
                Some((left, right))
            })
    }

    /// Parses `A ::= A '+' M | A '-' M | M`.
    pub(crate) fn parse_additive(&self, s: &str) -> Option<Expr> {
        for op in [SumOp::Add, SumOp::Sub] {
            if let Some((lhs, rhs)) = self.split_at_op(s, op.symbol(), Rule::Additive, Rule::Multiplicative) {
                return Some(Expr::sum(lhs, op, rhs));
            }
        }
        self.parse_rule(Rule::Multiplicative, s)
    }

    /// Parses `M ::= M '*' E | M '/' E | E`.
    pub(crate) fn parse_multiplicative(&self, s: &str) -> Option<Expr> {
        for op in [ProductOp::Mul, ProductOp::Div] {
            if let Some((lhs, rhs)) = self.split_at_op(s, op.symbol(), Rule::Multiplicative, Rule::Exponential) {
                return Some(Expr::product(lhs, op, rhs));
            }
        }
        self.parse_rule(Rule::Exponential, s)
    }

    /// Parses `E ::= P '^' E | 'log' P | P`.
    pub(crate) fn parse_exponential(&self, s: &str) -> Option<Expr> {
        if let Some((base, exp)) = self.split_at_op(s, '^', Rule::Primary, Rule::Exponential) {
            return Some(Expr::power(base, exp));
        }

        if let Some(arg) = s.strip_prefix("log").and_then(|arg| self.parse_rule(Rule::Primary, arg)) {
            return Some(Expr::log(arg));
        }

        self.parse_rule(Rule::Primary, s)
    }
}
