use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Absolute value: \( z = |a| \).
///
/// Local derivative is 1 for \( a \ge 0 \) (zero included) and -1 otherwise.
pub fn abs_op(a: &Value) -> Value {
    apply_unary_op(
        a,
        Op::Abs,
        f64::abs,
        |x, _| if x >= 0.0 { 1.0 } else { -1.0 },
    )
}

#[cfg(test)]
#[path = "abs_test.rs"]
mod tests;
