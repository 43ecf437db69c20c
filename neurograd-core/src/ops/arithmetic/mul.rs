// neurograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::Op;
use crate::value::Value;

/// Multiplies two nodes: \( z = a \cdot b \).
///
/// Local derivatives: \( \frac{\partial z}{\partial a} = b \),
/// \( \frac{\partial z}{\partial b} = a \), both evaluated at the operand
/// values of this call.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    let a_val = a.value();
    let b_val = b.value();
    Value::from_op(
        a_val * b_val,
        Op::Mul,
        vec![(a.clone(), b_val), (b.clone(), a_val)],
    )
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
