use crate::symbolic::Func;
use rug::Complex;

impl Func {
    /// Applies the function to an evaluated argument, using the principal branch where the
    /// function is multi-valued.
    pub fn eval(self, arg: Complex) -> Complex {
        match self {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Tan => arg.tan(),
            Func::Cot => arg.tan().recip(),
            Func::Log => arg.ln(),
        }
    }
}
