use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Logistic sigmoid: \( z = \frac{1}{1 + e^{-a}} \).
///
/// Local derivative: \( z (1 - z) \), computed from the output value.
pub fn sigmoid_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        Op::Sigmoid,
        |x| 1.0 / (1.0 + (-x).exp()),
        |_, out| out * (1.0 - out),
    )
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
