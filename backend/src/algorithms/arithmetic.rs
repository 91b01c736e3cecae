//! Binary arithmetic over IEEE-754 doubles.
//!
//! `add`, `subtract` and `multiply` are total and follow native float
//! semantics (signed zeros, infinities and NaN propagate unchanged). `divide`
//! is the only fallible operation: a zero divisor is reported as
//! [`ArithmeticError::DivisionByZero`] instead of producing an infinity or NaN.

use crate::models::Operation;

/// Errors raised by arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is `0.0` or `-0.0`,
/// regardless of `a`.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Apply `operation` to the operand pair.
pub fn evaluate(operation: Operation, a: f64, b: f64) -> Result<f64, ArithmeticError> {
    match operation {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    }
}
