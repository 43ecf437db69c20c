//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file, grouped by family:
//!
//! - [`arithmetic`]: add, mul, neg, sub, div, pow.
//! - [`activation`]: relu, sigmoid.
//! - [`math_elem`]: ln, exp, abs.
//!
//! Each family exposes `xxx_op` functions. An `_op` function computes the
//! forward value, evaluates the local derivative with respect to each operand
//! at that value, and records both on a fresh node. Composite operations
//! (neg, sub, div) are built from the primitives and record no derivative of
//! their own.
//!
//! The `Value` methods and `std::ops` overloads are thin wrappers over these.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

use crate::autograd::Op;
use crate::value::Value;

/// Builds the output node of a single-operand primitive.
///
/// `forward` maps the input to the output value; `local_grad` receives
/// `(input, output)` and returns d(output)/d(input).
pub(crate) fn apply_unary_op<F, G>(a: &Value, op: Op, forward: F, local_grad: G) -> Value
where
    F: Fn(f64) -> f64,
    G: Fn(f64, f64) -> f64,
{
    let x = a.value();
    let out = forward(x);
    Value::from_op(out, op, vec![(a.clone(), local_grad(x, out))])
}
