//! Operator tag -> binary function.

use tally_types::{EngineError, Operator};

type BinaryFn = fn(f64, f64) -> f64;

fn binary_fn(operator: Operator) -> BinaryFn {
    match operator {
        Operator::Add => |lhs, rhs| lhs + rhs,
        Operator::Sub => |lhs, rhs| lhs - rhs,
        Operator::Mul => |lhs, rhs| lhs * rhs,
        Operator::Div => |lhs, rhs| lhs / rhs,
    }
}

/// Apply `operator` as `lhs op rhs` with IEEE double semantics.
///
/// Division by zero (either sign) is rejected instead of yielding infinity.
pub fn apply(operator: Operator, lhs: f64, rhs: f64) -> Result<f64, EngineError> {
    if operator == Operator::Div && rhs == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    Ok(binary_fn(operator)(lhs, rhs))
}
