use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Rectified linear unit: \( z = \max(0, a) \).
///
/// Local derivative is 1 for \( a > 0 \) and 0 otherwise, including at
/// \( a = 0 \).
pub fn relu_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        Op::Relu,
        |x| if x > 0.0 { x } else { 0.0 },
        |x, _| if x > 0.0 { 1.0 } else { 0.0 },
    )
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
