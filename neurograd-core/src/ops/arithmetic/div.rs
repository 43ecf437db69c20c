// neurograd-core/src/ops/arithmetic/div.rs

use crate::error::NeuroGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Division, defined as `a * b^-1`.
///
/// # Errors
/// `NeuroGradError::DomainError` if `b` is zero. No node is created in that case.
pub fn div_op(a: &Value, b: &Value) -> Result<Value, NeuroGradError> {
    let divisor = b.value();
    if divisor == 0.0 {
        return Err(NeuroGradError::DomainError {
            operation: "div".to_string(),
            value: divisor,
        });
    }
    Ok(mul_op(a, &pow_op(b, -1.0)))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
