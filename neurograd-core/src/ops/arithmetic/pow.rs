// neurograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Raises a node to a constant power: \( z = a^p \).
///
/// Local derivative: \( \frac{\partial z}{\partial a} = p \cdot a^{p-1} \).
///
/// The exponent is a plain `f64`, not a node: it is never differentiated.
/// No domain check is made; e.g. a negative base with a fractional exponent
/// yields `NaN` exactly as `f64::powf` does. With an exponent of 0 the node is
/// constant in `a` and its local derivative is exactly 0, even at `a = 0`.
pub fn pow_op(a: &Value, exponent: f64) -> Value {
    apply_unary_op(
        a,
        Op::Pow { exponent },
        |x| x.powf(exponent),
        |x, _| {
            if exponent == 0.0 {
                0.0
            } else {
                exponent * x.powf(exponent - 1.0)
            }
        },
    )
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
