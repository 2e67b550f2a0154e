//! Symbolic derivatives of the supported functions.

use std::sync::Arc;
use super::{derivative, Expr, Func};

/// Returns the derivative of `func` with respect to its argument, evaluated at `arg`.
fn outer_derivative(func: Func, arg: &Arc<Expr>) -> Arc<Expr> {
    let arg = Arc::clone(arg);
    match func {
        // sin' = cos
        Func::Sin => Expr::call(Func::Cos, arg),

        // cos' = -sin
        Func::Cos => Expr::mul(Expr::constant(-1), Expr::call(Func::Sin, arg)),

        // tan' = 1 / cos^2
        Func::Tan => Expr::div(
            Expr::constant(1),
            Expr::power(Expr::call(Func::Cos, arg), Expr::constant(2)),
        ),

        // cot' = -1 / sin^2
        Func::Cot => Expr::div(
            Expr::constant(-1),
            Expr::power(Expr::call(Func::Sin, arg), Expr::constant(2)),
        ),

        // log' = 1 / x
        Func::Log => Expr::div(Expr::constant(1), arg),
    }
}

/// Computes the derivative of a function call and performs the chain rule:
/// `f(g)' = f'(g) * g'`
pub(super) fn chain_rule(func: Func, arg: &Arc<Expr>) -> Arc<Expr> {
    Expr::mul(outer_derivative(func, arg), derivative(arg))
}
