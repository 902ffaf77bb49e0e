//! Expression trees for a single-variable graphing calculator.
//!
//! An [`Expr`] represents an arithmetic formula over the free variable `x`, built from numeric
//! literals, `x`, the four arithmetic operators, exponentiation, the natural logarithm, and
//! parentheses. Every tree supports the same set of operations:
//!
//! - [`Expr::evaluate`] computes the value of the expression at a point,
//! - [`Expr::differentiate`] builds a new tree for its derivative with respect to `x`,
//! - [`Expr::deep_copy`] builds an identical, fully independent tree,
//! - [`Expr::render`] dumps the tree structure as indented text.
//!
//! The output of [`Expr::differentiate`] is itself an [`Expr`], so it can be evaluated, rendered,
//! or differentiated again.
//!
//! ```
//! use gcalc_expr::{Expr, ProductOp};
//!
//! // x * x
//! let expr = Expr::product(Expr::Variable, ProductOp::Mul, Expr::Variable);
//! assert_eq!(expr.evaluate(3.0), 9.0);
//!
//! let derivative = expr.differentiate().unwrap();
//! assert_eq!(derivative.evaluate(3.0), 6.0);
//! ```
//!
//! Trees are usually produced from text by the `gcalc-parser` crate.

pub mod derivative;
mod eval;
pub mod expr;
pub mod render;

pub use derivative::NoDerivative;
pub use expr::{Expr, ProductOp, SumOp};
