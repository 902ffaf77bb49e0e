//! The backtracking recursive-descent parser.
//!
//! # Grammar
//!
//! ```text
//! S ::= A
//! A ::= A '+' M | A '-' M | M
//! M ::= M '*' E | M '/' E | E
//! E ::= P '^' E | 'log' P | P
//! P ::= '(' S ')' | L | V
//! L ::= <floating-point literal>
//! V ::= 'x'
//! ```
//!
//! Every space character is removed from the input before parsing begins.
//!
//! # Search strategy
//!
//! Each nonterminal is parsed from a complete substring: a production only succeeds if it
//! accounts for every character it is given. For the binary productions (`A`, `M`, and `E`), the
//! parser scans the substring left to right for the operator character, and commits to the first
//! position at which the text before the operator parses as the left operand **and** the text
//! after it parses as the right operand. If no position works for one operator, the next
//! operator is tried, and finally the next-tighter nonterminal on its own.
//!
//! Because the left operand of `A` and `M` is parsed with the same nonterminal, chains of `+`,
//! `-`, `*`, and `/` associate to the left (`8/2/2` is `(8/2)/2`), while `^` only recurses on its
//! right operand and associates to the right (`2^x^3` is `2^(x^3)`).
//!
//! Nothing is cached between trials, so the search is exponential in the worst case on deeply
//! nested input.

pub mod binary;
pub mod error;
pub mod literal;
pub mod paren;

use error::ParseFailure;
use gcalc_expr::Expr;
use log::debug;
use std::cell::Cell;

/// The nonterminals of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `S`, the start symbol.
    Start,

    /// `A`, addition and subtraction.
    Additive,

    /// `M`, multiplication and division.
    Multiplicative,

    /// `E`, exponentiation and logarithms.
    Exponential,

    /// `P`, parenthesized expressions, literals, and the variable.
    Primary,
}

/// A parser for a single expression.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The text given to the parser, before spaces are removed.
    source: &'source str,

    /// The number of substrings the parser has tried to match against a nonterminal so far.
    attempts: Cell<usize>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            attempts: Cell::new(0),
        }
    }

    /// Returns the number of substrings the parser has tried to match against a nonterminal.
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    /// Parses the entire source as an expression. All of the source must be matched by the
    /// grammar; if not, a [`ParseFailure`] is returned.
    pub fn try_parse_full(&self) -> Result<Expr, ParseFailure> {
        let condensed = self.source.replace(' ', "");
        let result = self.parse_rule(Rule::Start, &condensed);
        debug!(
            "parsing `{}` {} after {} attempts",
            self.source,
            if result.is_some() { "succeeded" } else { "failed" },
            self.attempts(),
        );
        result.ok_or_else(|| ParseFailure::new(self.source))
    }

    /// Parses the whole of `s` as the given nonterminal, returning [`None`] if it does not match.
    pub fn parse_rule(&self, rule: Rule, s: &str) -> Option<Expr> {
        self.attempts.set(self.attempts.get() + 1);
        match rule {
            Rule::Start | Rule::Additive => self.parse_additive(s),
            Rule::Multiplicative => self.parse_multiplicative(s),
            Rule::Exponential => self.parse_exponential(s),
            Rule::Primary => self.parse_primary(s),
        }
    }
}

/// Parses the given text into an expression tree.
///
/// ```
/// use gcalc_parser::parse;
///
/// let expr = parse("10*2+12-4.").unwrap();
/// assert_eq!(expr.evaluate(0.0), 28.0);
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseFailure> {
    Parser::new(source).try_parse_full()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use gcalc_expr::{ProductOp, SumOp};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn literal() {
        assert_eq!(parse("16").unwrap(), Expr::Literal(16.0));
        assert_eq!(parse("3.14").unwrap(), Expr::Literal(3.14));
    }

    #[test]
    fn variable() {
        assert_eq!(parse("x").unwrap(), Expr::Variable);
    }

    #[test]
    fn spaces_are_removed() {
        assert_eq!(parse(" 1 0 * x ").unwrap(), parse("10*x").unwrap());
    }

    #[test]
    fn arithmetic_chain() {
        let expr = parse("10*2+12-4.").unwrap();

        // ((10 * 2) + 12) - 4
        assert_eq!(expr, Expr::sum(
            Expr::sum(
                Expr::product(Expr::literal(10.0), ProductOp::Mul, Expr::literal(2.0)),
                SumOp::Add,
                Expr::literal(12.0),
            ),
            SumOp::Sub,
            Expr::literal(4.0),
        ));
        for x in [-1.0, 0.0, 3.0] {
            assert_eq!(expr.evaluate(x), 28.0);
        }
    }

    #[test]
    fn additive_left_associativity() {
        assert_eq!(parse("1+2-3").unwrap(), Expr::sum(
            Expr::sum(Expr::literal(1.0), SumOp::Add, Expr::literal(2.0)),
            SumOp::Sub,
            Expr::literal(3.0),
        ));
        assert_eq!(parse("5-2-1").unwrap().evaluate(0.0), 2.0);
    }

    #[test]
    fn multiplicative_left_associativity() {
        let expr = parse("8/2/2").unwrap();
        assert_eq!(expr, Expr::product(
            Expr::product(Expr::literal(8.0), ProductOp::Div, Expr::literal(2.0)),
            ProductOp::Div,
            Expr::literal(2.0),
        ));
        assert_eq!(expr.evaluate(0.0), 2.0);
    }

    #[test]
    fn power_right_associativity() {
        let expr = parse("2^x^3").unwrap();
        assert_eq!(expr, Expr::power(
            Expr::literal(2.0),
            Expr::power(Expr::Variable, Expr::literal(3.0)),
        ));
        assert_float_absolute_eq!(expr.evaluate(2.0), 256.0, 1e-9);
    }

    #[test]
    fn precedence() {
        // (1 + 2 * 3) - 4 / 2^2
        let expr = parse("1+2*3-4/2^2").unwrap();
        assert_eq!(expr, Expr::sum(
            Expr::sum(
                Expr::literal(1.0),
                SumOp::Add,
                Expr::product(Expr::literal(2.0), ProductOp::Mul, Expr::literal(3.0)),
            ),
            SumOp::Sub,
            Expr::product(
                Expr::literal(4.0),
                ProductOp::Div,
                Expr::power(Expr::literal(2.0), Expr::literal(2.0)),
            ),
        ));
        assert_eq!(expr.evaluate(0.0), 6.0);
    }

    #[test]
    fn signed_literal_operands() {
        // the sign is part of the literal
        assert_eq!(parse("2*-3").unwrap(), Expr::product(
            Expr::literal(2.0),
            ProductOp::Mul,
            Expr::literal(-3.0),
        ));
        assert_eq!(parse("x--1").unwrap().evaluate(1.0), 2.0);
    }

    #[test]
    fn parenthesized() {
        let expr = parse("(x+1)*2").unwrap();
        assert_eq!(expr, Expr::product(
            Expr::paren(Expr::sum(Expr::Variable, SumOp::Add, Expr::literal(1.0))),
            ProductOp::Mul,
            Expr::literal(2.0),
        ));
        assert_eq!(expr.evaluate(2.0), 6.0);
    }

    #[test]
    fn logarithm() {
        let expr = parse("log(x)").unwrap();
        assert_eq!(expr, Expr::log(Expr::paren(Expr::Variable)));
        assert_float_absolute_eq!(expr.evaluate(std::f64::consts::E), 1.0, 1e-12);

        // the argument may also be a bare literal or the variable
        assert_eq!(parse("logx").unwrap(), Expr::log(Expr::Variable));
        assert_eq!(parse("log 2").unwrap(), Expr::log(Expr::literal(2.0)));
    }

    #[test]
    fn logarithm_requires_primary_argument() {
        assert!(parse("logx+1").is_ok()); // (log x) + 1
        assert!(parse("log2*x").is_ok()); // (log 2) * x
        assert!(parse("log(x)^2").is_err()); // the base of `^` must be a primary
        assert!(parse("loglogx").is_err());
    }

    #[test]
    fn power_base_must_be_primary() {
        assert_eq!(parse("(x*2)^2").unwrap().evaluate(1.5), 9.0);
        assert!(parse("x^-2").is_ok());
    }

    #[test]
    fn unbalanced_parenthesis() {
        assert!(parse("(x+1").is_err());
        assert!(parse("x+1)").is_err());
        assert!(parse("()").is_err());
    }

    #[test]
    fn invalid_input() {
        for input in ["", "   ", "y", "x+", "*x", "2x", "x**2", "-x", "sin(x)"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn tabs_around_atoms_are_allowed() {
        assert_eq!(parse("\t2").unwrap(), Expr::literal(2.0));
        assert_eq!(parse("x\t+\t1").unwrap(), parse("x+1").unwrap());
    }

    #[test]
    fn counts_attempts() {
        let parser = Parser::new("x");
        parser.try_parse_full().unwrap();

        // S, M, E, P (paren fails, then literal and variable are checked without recursion)
        assert_eq!(parser.attempts(), 4);
    }

    #[test]
    fn deep_copy_evaluates_the_same() {
        let expr = parse("(x+1)/(x-2)*log(x)+x^0.5").unwrap();
        let copy = expr.deep_copy();
        for x in [0.5, 1.0, 3.0, 10.0] {
            assert_eq!(copy.evaluate(x).to_bits(), expr.evaluate(x).to_bits());
        }
    }

    #[test]
    fn derivatives_of_parsed_expressions() {
        let derivative = parse("x^2").unwrap().differentiate().unwrap();
        assert_float_absolute_eq!(derivative.evaluate(3.0), 6.0, 1e-9);

        let derivative = parse("x*x").unwrap().differentiate().unwrap();
        assert_float_absolute_eq!(derivative.evaluate(3.0), 6.0, 1e-9);

        let derivative = parse("log(x)").unwrap().differentiate().unwrap();
        assert_float_absolute_eq!(derivative.evaluate(4.0), 0.25, 1e-12);

        let derivative = parse("2^x").unwrap().differentiate().unwrap();
        assert_float_absolute_eq!(derivative.evaluate(3.0), 8.0 * 2f64.ln(), 1e-9);
    }

    #[test]
    fn general_power_has_no_derivative() {
        assert_eq!(parse("x^x").unwrap().differentiate(), Err(gcalc_expr::NoDerivative));
        assert_eq!(parse("2^3").unwrap().differentiate(), Err(gcalc_expr::NoDerivative));
    }

    #[test]
    fn render_parsed_sum() {
        assert_eq!(parse("x+1").unwrap().render(0), "+\n\tx\n\t1.0\n");
    }
}
