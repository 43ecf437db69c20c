use crate::autograd::Op;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Computes \( e^a \). The local derivative is the output value itself.
pub fn exp_op(a: &Value) -> Value {
    apply_unary_op(a, Op::Exp, f64::exp, |_, out| out)
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
