//! Evaluation of expressions at a point in the complex plane.

mod binary;
mod func;

use crate::symbolic::Expr;
use rug::{ops::Pow, Complex};

/// Any type that can be evaluated at a complex value of `x`.
///
/// Evaluation never fails. Undefined operations, such as division by zero or the logarithm of
/// zero, produce the infinities or NaNs of complex floating-point arithmetic.
pub trait Eval {
    /// Evaluates the expression at the given value of `x`.
    ///
    /// The result has the same precision as `x`; constants in the expression are rounded to it.
    fn eval(&self, x: &Complex) -> Complex;
}

impl Eval for Expr {
    fn eval(&self, x: &Complex) -> Complex {
        match self {
            Expr::Const(value) => Complex::with_val(x.prec(), (value, 0)),
            Expr::Var => x.clone(),
            Expr::Binary(op, lhs, rhs) => op.eval(lhs.eval(x), rhs.eval(x)),
            // principal branch: `exp(exponent * log(base))`
            Expr::Power(base, exponent) => base.eval(x).pow(exponent.eval(x)),
            Expr::Call(func, arg) => func.eval(arg.eval(x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::{primitive::complex, symbolic::Func};
    use std::sync::Arc;
    use super::*;

    /// Evaluates the expression at `re + im i` and returns the result as a pair of `f64`s.
    fn eval_at(expr: &Arc<Expr>, re: f64, im: f64) -> (f64, f64) {
        let value = expr.eval(&complex((re, im)));
        (value.real().to_f64(), value.imag().to_f64())
    }

    #[test]
    fn constant_ignores_x() {
        assert_eq!(eval_at(&Expr::constant(2.5), 7.0, -3.0), (2.5, 0.0));
    }

    #[test]
    fn variable_is_x() {
        assert_eq!(eval_at(&Expr::var(), 7.0, -3.0), (7.0, -3.0));
    }

    #[test]
    fn precision_follows_x() {
        let x = Complex::with_val(64, (1, 1));
        let value = Expr::add(Expr::constant(0.1), Expr::var()).eval(&x);
        assert_eq!(value.prec(), (64, 64));
    }

    #[test]
    fn arithmetic() {
        // (1 + 2i) * (1 + 2i) - 1 / (1 + 2i) = -3 + 4i - (0.2 - 0.4i)
        let expr = Expr::sub(
            Expr::mul(Expr::var(), Expr::var()),
            Expr::div(Expr::constant(1), Expr::var()),
        );
        let (re, im) = eval_at(&expr, 1.0, 2.0);
        assert_float_absolute_eq!(re, -3.2);
        assert_float_absolute_eq!(im, 4.4);
    }

    #[test]
    fn cubic() {
        // 2 * (2 + 2i)^3 = -32 + 32i
        let expr = Expr::mul(Expr::constant(2), Expr::power(Expr::var(), Expr::constant(3)));
        let (re, im) = eval_at(&expr, 2.0, 2.0);
        assert_float_absolute_eq!(re, -32.0);
        assert_float_absolute_eq!(im, 32.0);
    }

    #[test]
    fn principal_branch() {
        // log(-1) = pi i
        let (re, im) = eval_at(&Expr::call(Func::Log, Expr::var()), -1.0, 0.0);
        assert_float_absolute_eq!(re, 0.0);
        assert_float_absolute_eq!(im, std::f64::consts::PI);

        // (-1)^(1/2) = i
        let sqrt = Expr::power(Expr::var(), Expr::constant(0.5));
        let (re, im) = eval_at(&sqrt, -1.0, 0.0);
        assert_float_absolute_eq!(re, 0.0);
        assert_float_absolute_eq!(im, 1.0);
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        let (re, im) = eval_at(&Expr::div(Expr::constant(1), Expr::var()), 0.0, 0.0);
        assert!(re.is_infinite() || re.is_nan());
        assert!(im.is_infinite() || im.is_nan() || im == 0.0);
    }

    #[test]
    fn log_of_zero_is_not_an_error() {
        let (re, _) = eval_at(&Expr::call(Func::Log, Expr::var()), 0.0, 0.0);
        assert!(re.is_infinite() && re.is_sign_negative());
    }
}
