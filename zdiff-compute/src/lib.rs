//! Evaluation and symbolic differentiation of expressions in `x` over the complex numbers.
//!
//! The main entry point is [`differentiate`], which parses an expression once and returns it
//! alongside its first and second derivatives, each as an independent [`Function`]:
//!
//! ```
//! use rug::Complex;
//! use zdiff_compute::differentiate;
//!
//! let (f, f1, f2) = differentiate("x^2 + 3*x").unwrap();
//! let z = Complex::with_val(128, (1, 0));
//! let values = [&f, &f1, &f2].map(|func| func.eval(&z).real().to_f64().round());
//! assert_eq!(values, [4.0, 5.0, 2.0]);
//! ```

pub mod numerical;
pub mod pipeline;
pub mod primitive;
pub mod symbolic;

pub use pipeline::{differentiate, parse, Function};
