//! Symbolic differentiation.
//!
//! [`Expr::differentiate`] builds a brand new tree representing `d/dx` of an expression. The
//! result is not simplified in any way: `d/dx (2 * x)` is `2 * 1 + 0 * x`, not `2`.
//!
//! Which rule applies to a [`Expr::Power`] is decided structurally. A child counts as constant
//! only if it is a [`Expr::Literal`] node; `x - x` or `(2)` are not constant for this purpose.
//! Exactly one of the base and the exponent must be a literal. Otherwise (`f(x)^g(x)`, and also
//! `2^3`) there is no rule, and [`NoDerivative`] is returned for the entire expression.

use crate::expr::{Expr, ProductOp, SumOp};
use log::debug;
use std::fmt;

/// The derivative of an expression could not be computed, because it contains a power that is
/// not of the form `c ^ g` or `g ^ c`.
///
/// This is an expected outcome rather than a failure of the program: callers should treat the
/// derivative as undefined (e.g. decline to graph it), never as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoDerivative;

impl fmt::Display for NoDerivative {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot differentiate a power unless exactly one of its base and exponent is a literal")
    }
}

impl std::error::Error for NoDerivative {}

/// `lhs * rhs`
fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::product(lhs, ProductOp::Mul, rhs)
}

/// `lhs / rhs`
fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::product(lhs, ProductOp::Div, rhs)
}

impl Expr {
    /// Returns a new, fully independent tree representing the derivative of this expression with
    /// respect to `x`.
    ///
    /// | Expression          | Derivative                 |
    /// | ------------------- | -------------------------- |
    /// | `c`                 | `0`                        |
    /// | `x`                 | `1`                        |
    /// | `f ± g`             | `f' ± g'`                  |
    /// | `f * g`             | `f * g' + f' * g`          |
    /// | `f / g`             | `f' / g - (f * g') / g^2`  |
    /// | `(f)`               | `(f')`                     |
    /// | `log(g)`            | `g' / g`                   |
    /// | `c ^ g`             | `log(c) * c^g * g'`        |
    /// | `g ^ c`             | `c * (g^(c - 1) * g')`     |
    /// | `f ^ g`, `c ^ d`    | [`NoDerivative`]           |
    ///
    /// Here `c` and `d` stand for literal nodes, and `f` and `g` for any other expression.
    pub fn differentiate(&self) -> Result<Expr, NoDerivative> {
        Ok(match self {
            Self::Literal(_) => Self::literal(0.0),
            Self::Variable => Self::literal(1.0),
            Self::Sum { lhs, op, rhs } => Self::sum(lhs.differentiate()?, *op, rhs.differentiate()?),
            Self::Product { lhs: f, op: ProductOp::Mul, rhs: g } => {
                // f * g' + f' * g
                Self::sum(
                    mul(f.deep_copy(), g.differentiate()?),
                    SumOp::Add,
                    mul(f.differentiate()?, g.deep_copy()),
                )
            },
            Self::Product { lhs: f, op: ProductOp::Div, rhs: g } => {
                // f' / g - (f * g') / g^2
                Self::sum(
                    div(f.differentiate()?, g.deep_copy()),
                    SumOp::Sub,
                    div(
                        mul(f.deep_copy(), g.differentiate()?),
                        Self::power(g.deep_copy(), Self::literal(2.0)),
                    ),
                )
            },
            Self::Power { base, exp } => match (base.as_literal(), exp.as_literal()) {
                (Some(c), None) => {
                    // log(c) * c^g * g'
                    mul(
                        mul(
                            Self::log(Self::literal(c)),
                            Self::power(Self::literal(c), exp.deep_copy()),
                        ),
                        exp.differentiate()?,
                    )
                },
                (None, Some(c)) => {
                    // c * (g^(c - 1) * g')
                    mul(
                        Self::literal(c),
                        mul(
                            Self::power(
                                base.deep_copy(),
                                Self::sum(Self::literal(c), SumOp::Sub, Self::literal(1.0)),
                            ),
                            base.differentiate()?,
                        ),
                    )
                },
                (None, None) | (Some(_), Some(_)) => {
                    debug!("no derivative rule for power `{}`", self);
                    return Err(NoDerivative);
                },
            },
            Self::Log(arg) => div(arg.differentiate()?, arg.deep_copy()),
            Self::Paren(inner) => Self::paren(inner.differentiate()?),
        })
    }
}
