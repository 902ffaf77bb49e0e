//! Parser for graphing calculator expressions.
//!
//! The main entry point is [`parse`], which turns text such as `(x+1)/(x-2)*log(x)` into an
//! [`Expr`](gcalc_expr::Expr) tree, or returns a [`ParseFailure`] describing why the text is not
//! a valid expression. See the [`parser`] module for the grammar.

pub mod parser;
pub mod tokenizer;

pub use parser::{error::ParseFailure, parse, Parser};
