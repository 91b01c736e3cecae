//! Property tests for the arithmetic core.

use calculator_rust::algorithms::{add, divide, evaluate, multiply, subtract, ArithmeticError};
use calculator_rust::models::Operation;
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

fn same(lhs: f64, rhs: f64) -> bool {
    lhs.to_bits() == rhs.to_bits() || (lhs.is_nan() && rhs.is_nan())
}

proptest! {
    #[test]
    fn add_subtract_multiply_match_ieee(a in any::<f64>(), b in any::<f64>()) {
        prop_assert!(same(add(a, b), a + b));
        prop_assert!(same(subtract(a, b), a - b));
        prop_assert!(same(multiply(a, b), a * b));
    }

    #[test]
    fn divide_matches_ieee_for_nonzero_divisor(a in finite(), b in finite()) {
        prop_assume!(b != 0.0);
        let quotient = divide(a, b).unwrap();
        prop_assert!(same(quotient, a / b));
    }

    #[test]
    fn divide_by_zero_always_fails(a in any::<f64>(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        let err = divide(a, zero).unwrap_err();
        prop_assert_eq!(err, ArithmeticError::DivisionByZero);
        prop_assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn evaluate_dispatches_on_operation(a in finite(), b in finite()) {
        prop_assert!(same(evaluate(Operation::Add, a, b).unwrap(), a + b));
        prop_assert!(same(evaluate(Operation::Subtract, a, b).unwrap(), a - b));
        prop_assert!(same(evaluate(Operation::Multiply, a, b).unwrap(), a * b));
        if b == 0.0 {
            prop_assert!(evaluate(Operation::Divide, a, b).is_err());
        } else {
            prop_assert!(same(evaluate(Operation::Divide, a, b).unwrap(), a / b));
        }
    }

    #[test]
    fn add_and_multiply_commute(a in finite(), b in finite()) {
        prop_assert!(same(add(a, b), add(b, a)));
        prop_assert!(same(multiply(a, b), multiply(b, a)));
    }
}
