//! Pure computations with no I/O.

pub mod arithmetic;

pub use arithmetic::{add, divide, evaluate, multiply, subtract, ArithmeticError};
