// neurograd-core/src/ops/math_elem/ln.rs

use crate::autograd::Op;
use crate::error::NeuroGradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes the natural logarithm (base \( e \)) of a node.
///
/// Local derivative: \( \frac{dz}{da} = \frac{1}{a} \).
///
/// # Errors
/// `NeuroGradError::DomainError` if the operand is not strictly positive
/// (zero, negative, or `NaN`). No node is created in that case.
pub fn ln_op(a: &Value) -> Result<Value, NeuroGradError> {
    let x = a.value();
    if !(x > 0.0) {
        return Err(NeuroGradError::DomainError {
            operation: "ln".to_string(),
            value: x,
        });
    }
    Ok(apply_unary_op(a, Op::Ln, f64::ln, |x, _| 1.0 / x))
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
