//! The expression tree.
//!
//! An [`Expr`] is a strictly tree-shaped value: every child is held in its own [`Box`], so no two
//! nodes can ever share a subtree, and a tree cannot refer back to one of its ancestors. Trees are
//! built bottom-up, either by the parser or by the operations in this crate that construct a new
//! tree from an existing one ([`Expr::deep_copy`] and [`Expr::differentiate`]). None of the
//! operations mutate the tree they are called on.

mod iter;

pub use iter::ExprIter;

/// The operation performed by an [`Expr::Sum`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SumOp {
    Add,
    Sub,
}

impl SumOp {
    /// Returns the character used to write this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Applies the operation to the given operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
        }
    }
}

/// The operation performed by an [`Expr::Product`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductOp {
    Mul,
    Div,
}

impl ProductOp {
    /// Returns the character used to write this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Applies the operation to the given operands. Division by zero follows IEEE-754 semantics.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

/// An arithmetic expression over the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, such as `2` or `4.5`.
    Literal(f64),

    /// The free variable `x`.
    Variable,

    /// An addition or subtraction, such as `x + 1`.
    Sum {
        lhs: Box<Expr>,
        op: SumOp,
        rhs: Box<Expr>,
    },

    /// A multiplication or division, such as `2 * x`.
    Product {
        lhs: Box<Expr>,
        op: ProductOp,
        rhs: Box<Expr>,
    },

    /// Exponentiation, such as `x ^ 2`.
    Power {
        base: Box<Expr>,
        exp: Box<Expr>,
    },

    /// The natural logarithm of its argument, such as `log(x)`.
    Log(Box<Expr>),

    /// A parenthesized expression, such as `(x + 1)`. Evaluates to its inner expression; it is
    /// kept in the tree so the expression can be displayed the way it was written.
    Paren(Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Literal`].
    pub fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    /// Creates a [`Expr::Sum`] from the given operands.
    pub fn sum(lhs: Expr, op: SumOp, rhs: Expr) -> Self {
        Self::Sum { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }

    /// Creates a [`Expr::Product`] from the given operands.
    pub fn product(lhs: Expr, op: ProductOp, rhs: Expr) -> Self {
        Self::Product { lhs: Box::new(lhs), op, rhs: Box::new(rhs) }
    }

    /// Creates a [`Expr::Power`] from the given base and exponent.
    pub fn power(base: Expr, exp: Expr) -> Self {
        Self::Power { base: Box::new(base), exp: Box::new(exp) }
    }

    /// Creates a [`Expr::Log`] of the given argument.
    pub fn log(arg: Expr) -> Self {
        Self::Log(Box::new(arg))
    }

    /// Wraps the given expression in a [`Expr::Paren`].
    pub fn paren(inner: Expr) -> Self {
        Self::Paren(Box::new(inner))
    }

    /// Returns true if the expression is a [`Expr::Literal`].
    ///
    /// This is a purely structural check: `x - x` and `(2)` are not literals.
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// If the expression is a [`Expr::Literal`], returns its value.
    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Self::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns a copy of this tree in which every node is freshly allocated.
    ///
    /// Every child is uniquely owned, so this is the same as [`Clone::clone`]; the copy never
    /// shares a node with `self`.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Returns the children of this node, from left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Literal(_) | Self::Variable => Vec::new(),
            Self::Sum { lhs, rhs, .. } | Self::Product { lhs, rhs, .. } => {
                vec![lhs.as_ref(), rhs.as_ref()]
            },
            Self::Power { base, exp } => vec![base.as_ref(), exp.as_ref()],
            Self::Log(inner) | Self::Paren(inner) => vec![inner.as_ref()],
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// `(x + 1) * log(x)`
    fn sample() -> Expr {
        Expr::product(
            Expr::paren(Expr::sum(Expr::Variable, SumOp::Add, Expr::literal(1.0))),
            ProductOp::Mul,
            Expr::log(Expr::Variable),
        )
    }

    #[test]
    fn deep_copy_is_equal() {
        let expr = sample();
        assert_eq!(expr.deep_copy(), expr);
    }

    #[test]
    fn deep_copy_shares_no_nodes() {
        let expr = sample();
        let copy = expr.deep_copy();

        for original in expr.post_order_iter() {
            for copied in copy.post_order_iter() {
                assert!(!std::ptr::eq(original, copied));
            }
        }
    }

    #[test]
    fn structural_constancy() {
        assert!(Expr::literal(2.0).is_literal());
        assert!(!Expr::Variable.is_literal());
        assert!(!Expr::paren(Expr::literal(2.0)).is_literal());
        assert!(!Expr::sum(Expr::Variable, SumOp::Sub, Expr::Variable).is_literal());
    }

    #[test]
    fn log_has_one_child() {
        let expr = Expr::log(Expr::Variable);
        assert_eq!(expr.children(), vec![&Expr::Variable]);
    }

    #[test]
    fn count_nodes() {
        // *, (), +, x, 1, log, x
        assert_eq!(sample().node_count(), 7);
    }

    #[test]
    fn operator_symbols() {
        assert_eq!(SumOp::Add.symbol(), '+');
        assert_eq!(SumOp::Sub.symbol(), '-');
        assert_eq!(ProductOp::Mul.symbol(), '*');
        assert_eq!(ProductOp::Div.symbol(), '/');
    }
}
