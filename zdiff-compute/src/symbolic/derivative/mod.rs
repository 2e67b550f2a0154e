//! Symbolic differentiation of expressions with respect to `x`.
//!
//! The derivative is built with the same constructors as any other [`Expr`], and is never
//! simplified. Subtrees of the original expression are shared with the derivative instead of
//! copied.

mod function;

use std::sync::Arc;
use super::expr::{BinaryOp, Expr, Func};

/// `(f + g)' = f' + g'` and `(f - g)' = f' - g'`
fn sum_rule(op: BinaryOp, lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Arc<Expr> {
    Expr::binary(op, derivative(lhs), derivative(rhs))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Arc<Expr> {
    Expr::add(
        Expr::mul(derivative(lhs), Arc::clone(rhs)),
        Expr::mul(Arc::clone(lhs), derivative(rhs)),
    )
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(lhs: &Arc<Expr>, rhs: &Arc<Expr>) -> Arc<Expr> {
    Expr::div(
        Expr::sub(
            Expr::mul(derivative(lhs), Arc::clone(rhs)),
            Expr::mul(Arc::clone(lhs), derivative(rhs)),
        ),
        Expr::power(Arc::clone(rhs), Expr::constant(2)),
    )
}

/// `(u^c)' = c * u^(c - 1) * u'`, for an exponent `c` that does not depend on `x`.
fn constant_power_rule(base: &Arc<Expr>, exponent: &Arc<Expr>) -> Arc<Expr> {
    let reduced = match &**exponent {
        Expr::Const(c) => Arc::new(Expr::Const(c.clone() - 1)),
        _ => Expr::sub(Arc::clone(exponent), Expr::constant(1)),
    };

    Expr::mul(
        Expr::mul(Arc::clone(exponent), Expr::power(Arc::clone(base), reduced)),
        derivative(base),
    )
}

/// `(u^v)' = u^v * (v' * log(u) + v * u' / u)`
///
/// `power` is the expression `u^v` itself, which is shared by the derivative.
fn general_power_rule(power: &Arc<Expr>, base: &Arc<Expr>, exponent: &Arc<Expr>) -> Arc<Expr> {
    Expr::mul(
        Arc::clone(power),
        Expr::add(
            Expr::mul(derivative(exponent), Expr::call(Func::Log, Arc::clone(base))),
            Expr::mul(Arc::clone(exponent), Expr::div(derivative(base), Arc::clone(base))),
        ),
    )
}

/// Computes the derivative of the given expression with respect to `x`.
pub fn derivative(f: &Arc<Expr>) -> Arc<Expr> {
    match &**f {
        Expr::Const(_) => Expr::constant(0),
        Expr::Var => Expr::constant(1),
        Expr::Binary(op @ (BinaryOp::Add | BinaryOp::Sub), lhs, rhs) => sum_rule(*op, lhs, rhs),
        Expr::Binary(BinaryOp::Mul, lhs, rhs) => product_rule(lhs, rhs),
        Expr::Binary(BinaryOp::Div, lhs, rhs) => quotient_rule(lhs, rhs),
        Expr::Power(base, exponent) if !exponent.contains_var() => constant_power_rule(base, exponent),
        Expr::Power(base, exponent) => general_power_rule(f, base, exponent),
        Expr::Call(func, arg) => function::chain_rule(*func, arg),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::{numerical::eval::Eval, primitive::{complex, float}};
    use pretty_assertions::assert_eq;
    use rug::Complex;
    use super::*;
    use zdiff_parser::parser::{ast::Expr as AstExpr, Parser};

    /// Parses the source into an expression tree.
    fn tree(source: &str) -> Arc<Expr> {
        let ast = Parser::new(source).try_parse_full::<AstExpr>().unwrap();
        Expr::from_ast(&ast).unwrap()
    }

    /// Approximates the derivative of the expression at the given point with a central
    /// difference, using a tiny step that the working precision can still resolve.
    fn central_difference(expr: &Expr, x: &Complex) -> Complex {
        let h = float(1e-30);
        let ahead = expr.eval(&(x.clone() + &h));
        let behind = expr.eval(&(x.clone() - &h));
        (ahead - behind) / (h * 2)
    }

    /// Checks the symbolic derivative of the expression against a numerical approximation at
    /// each of the given points.
    fn test_for_function(source: &'static str, points: impl IntoIterator<Item = (f64, f64)>) {
        const TOL: f64 = 1e-12;

        let expr = tree(source);
        let symbolic = derivative(&expr);

        for (re, im) in points {
            let x = complex((re, im));
            let symbolically_computed = symbolic.eval(&x);
            let numerically_computed = central_difference(&expr, &x);

            assert_float_absolute_eq!(
                symbolically_computed.real().to_f64(),
                numerically_computed.real().to_f64(),
                TOL
            );
            assert_float_absolute_eq!(
                symbolically_computed.imag().to_f64(),
                numerically_computed.imag().to_f64(),
                TOL
            );
        }
    }

    #[test]
    fn constant_and_variable() {
        assert_eq!(derivative(&Expr::constant(7)), Expr::constant(0));
        assert_eq!(derivative(&Expr::var()), Expr::constant(1));
    }

    #[test]
    fn sum_of_variables() {
        assert_eq!(derivative(&tree("x - x")), Expr::sub(Expr::constant(1), Expr::constant(1)));
    }

    #[test]
    fn product_shares_operands() {
        let expr = tree("x * sin(x)");
        let Expr::Binary(_, lhs, rhs) = &*expr else { unreachable!() };

        let result = derivative(&expr);
        assert_eq!(result.to_string(), "1 * sin(x) + x * (cos(x) * 1)");

        // `f' * g + f * g'` reuses `g` and `f` from the original tree
        let Expr::Binary(BinaryOp::Add, left_term, right_term) = &*result else { unreachable!() };
        let Expr::Binary(BinaryOp::Mul, _, g) = &**left_term else { unreachable!() };
        let Expr::Binary(BinaryOp::Mul, f, _) = &**right_term else { unreachable!() };
        assert!(Arc::ptr_eq(g, rhs));
        assert!(Arc::ptr_eq(f, lhs));
    }

    #[test]
    fn quotient() {
        assert_eq!(derivative(&tree("1 / x")).to_string(), "(0 * x - 1 * 1) / x^2");
    }

    #[test]
    fn constant_exponent() {
        assert_eq!(derivative(&tree("x^3")).to_string(), "3 * x^2 * 1");
        assert_eq!(derivative(&tree("x^(1 / 2)")).to_string(), "1 / 2 * x^(1 / 2 - 1) * 1");
    }

    #[test]
    fn variable_exponent() {
        let expr = tree("2^x");
        let result = derivative(&expr);
        assert_eq!(result.to_string(), "2^x * (1 * log(2) + x * (0 / 2))");

        let Expr::Binary(BinaryOp::Mul, power, _) = &*result else { unreachable!() };
        assert!(Arc::ptr_eq(power, &expr));
    }

    #[test]
    fn chain_rule() {
        assert_eq!(derivative(&tree("sin(x)")), Expr::mul(
            Expr::call(Func::Cos, Expr::var()),
            Expr::constant(1),
        ));
        assert_eq!(derivative(&tree("cos(2 * x)")).to_string(), "(0 - 1) * sin(2 * x) * (0 * x + 2 * 1)");
        assert_eq!(derivative(&tree("tan(x)")).to_string(), "1 / cos(x)^2 * 1");
        assert_eq!(derivative(&tree("cot(x)")).to_string(), "(0 - 1) / sin(x)^2 * 1");
        assert_eq!(derivative(&tree("log(x)")).to_string(), "1 / x * 1");
    }

    #[test]
    fn chain_rule_matches_cos() {
        let expr = tree("sin(x)");
        let x = complex((0.3, -1.2));
        assert_eq!(derivative(&expr).eval(&x), x.cos());
    }

    #[test]
    fn linearity() {
        let (a, b) = (tree("x^2 * sin(x)"), tree("log(x) / x"));
        let sum = Expr::add(Arc::clone(&a), Arc::clone(&b));
        let x = complex((1.5, 0.5));
        assert_eq!(
            derivative(&sum).eval(&x),
            derivative(&a).eval(&x) + derivative(&b).eval(&x),
        );
    }

    #[test]
    fn polynomial() {
        test_for_function("x^2 + x + 1", [(0.0, 0.0), (1.0, 0.0), (2.0, 5.0), (-8.0, 0.5)]);
        test_for_function("2 * x^3 - 4 / x", [(2.0, 2.0), (-1.0, 0.25)]);
    }

    #[test]
    fn trigonometry() {
        test_for_function("sin(x) * cos(x)", [(0.0, 0.0), (1.0, 1.0), (-0.5, 2.0)]);
        test_for_function("tan(x^2) - cot(x)", [(0.5, 0.5), (1.0, -0.3)]);
    }

    #[test]
    fn logarithm_and_powers() {
        test_for_function("log(x^2 + 1)", [(0.5, 0.0), (1.0, 2.0)]);
        test_for_function("x^x", [(1.0, 0.0), (2.0, 1.0), (0.5, -0.5)]);
        test_for_function("(x + 1)^sin(x)", [(1.0, 0.0), (0.5, 0.5)]);
    }

    #[test]
    fn second_derivative() {
        let expr = tree("sin(x)");
        let second = derivative(&derivative(&expr));
        let x = complex((0.7, 0.2));
        let expected = -x.clone().sin();
        assert_float_absolute_eq!(second.eval(&x).real().to_f64(), expected.real().to_f64(), 1e-15);
        assert_float_absolute_eq!(second.eval(&x).imag().to_f64(), expected.imag().to_f64(), 1e-15);
    }
}
