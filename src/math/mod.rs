//! Arithmetic across mismatched numeric representations

mod arithmetic;

pub use arithmetic::{Operator, add, div, do_arithmetic, mul, sub};
