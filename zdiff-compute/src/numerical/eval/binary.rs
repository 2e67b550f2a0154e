use crate::symbolic::BinaryOp;
use rug::Complex;

impl BinaryOp {
    /// Applies the operation to two evaluated operands.
    pub fn eval(self, lhs: Complex, rhs: Complex) -> Complex {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
        }
    }
}
