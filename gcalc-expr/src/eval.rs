use crate::expr::Expr;

impl Expr {
    /// Evaluates the expression with the variable `x` set to the given value.
    ///
    /// Evaluation never fails. Numeric edge cases follow IEEE-754 arithmetic: dividing by zero
    /// produces a signed infinity (or `NaN` for `0 / 0`), the logarithm of a non-positive number is
    /// `NaN` (or `-inf` for zero), and a negative base raised to a fractional power is `NaN`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Literal(value) => *value,
            Self::Variable => x,
            Self::Sum { lhs, op, rhs } => op.apply(lhs.evaluate(x), rhs.evaluate(x)),
            Self::Product { lhs, op, rhs } => op.apply(lhs.evaluate(x), rhs.evaluate(x)),
            Self::Power { base, exp } => base.evaluate(x).powf(exp.evaluate(x)),
            Self::Log(arg) => arg.evaluate(x).ln(),
            Self::Paren(inner) => inner.evaluate(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::expr::{ProductOp, SumOp};
    use super::*;

    #[test]
    fn arithmetic() {
        // (10 * 2 + 12) - 4
        let expr = Expr::sum(
            Expr::sum(
                Expr::product(Expr::literal(10.0), ProductOp::Mul, Expr::literal(2.0)),
                SumOp::Add,
                Expr::literal(12.0),
            ),
            SumOp::Sub,
            Expr::literal(4.0),
        );

        for x in [-3.0, 0.0, 7.5] {
            assert_eq!(expr.evaluate(x), 28.0);
        }
    }

    #[test]
    fn variable_and_paren() {
        let expr = Expr::paren(Expr::product(Expr::Variable, ProductOp::Div, Expr::literal(4.0)));
        assert_eq!(expr.evaluate(2.0), 0.5);
    }

    #[test]
    fn natural_log() {
        let expr = Expr::log(Expr::Variable);
        assert_float_absolute_eq!(expr.evaluate(std::f64::consts::E), 1.0, 1e-12);
    }

    #[test]
    fn power() {
        let expr = Expr::power(Expr::literal(2.0), Expr::Variable);
        assert_float_absolute_eq!(expr.evaluate(10.0), 1024.0, 1e-9);
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::product(Expr::literal(1.0), ProductOp::Div, Expr::Variable);
        assert_eq!(expr.evaluate(0.0), f64::INFINITY);
        assert_eq!(expr.evaluate(-0.0), f64::NEG_INFINITY);

        let zero_over_zero = Expr::product(Expr::Variable, ProductOp::Div, Expr::Variable);
        assert!(zero_over_zero.evaluate(0.0).is_nan());
    }

    #[test]
    fn invalid_domains_are_nan() {
        assert!(Expr::log(Expr::Variable).evaluate(-1.0).is_nan());
        assert_eq!(Expr::log(Expr::Variable).evaluate(0.0), f64::NEG_INFINITY);

        let root = Expr::power(Expr::Variable, Expr::literal(0.5));
        assert!(root.evaluate(-4.0).is_nan());
    }
}
