// neurograd-core/src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::value::Value;

/// Adds two nodes: \( z = a + b \).
///
/// Local derivatives: \( \frac{\partial z}{\partial a} = 1 \),
/// \( \frac{\partial z}{\partial b} = 1 \).
///
/// Passing the same node twice records it twice, so its gradient receives
/// both contributions.
pub fn add_op(a: &Value, b: &Value) -> Value {
    Value::from_op(
        a.value() + b.value(),
        Op::Add,
        vec![(a.clone(), 1.0), (b.clone(), 1.0)],
    )
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
