//! Text output for expression trees.
//!
//! [`Expr::render`] produces the indented preorder dump used for diagnostics; the [`Display`]
//! implementation writes the expression in ordinary infix notation.
//!
//! [`Display`]: std::fmt::Display

use crate::expr::Expr;
use std::fmt::{self, Display, Formatter};

/// The marker written once per indentation level by [`Expr::render`].
pub const INDENT: &str = "\t";

impl Expr {
    /// Returns the label printed for this node by [`Expr::render`].
    pub fn label(&self) -> String {
        match self {
            Self::Literal(value) => {
                // `Display` never switches to exponent notation, unlike `Debug`
                let mut label = value.to_string();
                if value.is_finite() && !label.contains('.') {
                    label.push_str(".0");
                }
                label
            },
            Self::Variable => "x".to_string(),
            Self::Sum { op, .. } => op.symbol().to_string(),
            Self::Product { op, .. } => op.symbol().to_string(),
            Self::Power { .. } => "^".to_string(),
            Self::Log(_) => "log".to_string(),
            Self::Paren(_) => "()".to_string(),
        }
    }

    /// Renders the tree as a multi-line preorder dump, one node per line.
    ///
    /// Each line holds `indent_level` copies of [`INDENT`], then the node's [label](Self::label),
    /// then a newline. Children follow their parent, one level deeper. For example, `x + 1`
    /// rendered at level 0 is:
    ///
    /// ```text
    /// +
    /// 	x
    /// 	1.0
    /// ```
    ///
    /// The output is meant for people reading it; it cannot be parsed back into a tree.
    pub fn render(&self, indent_level: usize) -> String {
        let mut out = String::new();
        self.render_into(indent_level, &mut out);
        out
    }

    fn render_into(&self, indent_level: usize, out: &mut String) {
        out.push_str(&INDENT.repeat(indent_level));
        out.push_str(&self.label());
        out.push('\n');
        for child in self.children() {
            child.render_into(indent_level + 1, out);
        }
    }

    /// Binding strength of the node when written in infix notation. Higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Sum { .. } => 1,
            Self::Product { .. } => 2,
            Self::Power { .. } => 3,
            Self::Literal(_) | Self::Variable | Self::Log(_) | Self::Paren(_) => 4,
        }
    }
}

/// Writes `expr`, wrapped in parentheses if `wrap` is true.
fn fmt_operand(f: &mut Formatter, expr: &Expr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let precedence = self.precedence();
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Variable => write!(f, "x"),
            Self::Sum { lhs, op, rhs } => {
                fmt_operand(f, lhs, lhs.precedence() < precedence)?;
                write!(f, " {} ", op.symbol())?;
                fmt_operand(f, rhs, rhs.precedence() <= precedence)
            },
            Self::Product { lhs, op, rhs } => {
                fmt_operand(f, lhs, lhs.precedence() < precedence)?;
                write!(f, " {} ", op.symbol())?;
                fmt_operand(f, rhs, rhs.precedence() <= precedence)
            },
            Self::Power { base, exp } => {
                // `-2^x` would read as `-(2^x)`
                let negative_base = matches!(**base, Self::Literal(value) if value.is_sign_negative());
                fmt_operand(f, base, negative_base || base.precedence() <= precedence)?;
                write!(f, "^")?;
                fmt_operand(f, exp, exp.precedence() < precedence)
            },
            Self::Log(arg) => match arg.as_ref() {
                Self::Paren(_) => write!(f, "log{}", arg),
                _ => write!(f, "log({})", arg),
            },
            Self::Paren(inner) => write!(f, "({})", inner),
        }
    }
}
