use super::*;
use crate::ops::activation::sigmoid_op;
use crate::ops::arithmetic::{add_op, mul_op};
use approx::assert_relative_eq;

#[test]
fn test_backward_simple_add() -> Result<(), NeuroGradError> {
    let a = Value::parameter(2.0);
    let b = Value::parameter(3.0);
    backward(&add_op(&a, &b))?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_backward_diamond() -> Result<(), NeuroGradError> {
    // x feeds two branches that are joined again:
    // u = 2x, v = x^2 (as x*x), y = u * v = 2x^3, dy/dx = 6x^2
    let x = Value::parameter(1.5);
    let u = mul_op(&x, &Value::constant(2.0));
    let v = mul_op(&x, &x);
    let y = mul_op(&u, &v);
    backward(&y)?;
    assert_relative_eq!(x.grad(), 6.0 * 1.5 * 1.5, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_fan_out_through_intermediate() -> Result<(), NeuroGradError> {
    // h = w * x is consumed twice: y = h + h*h, dy/dw = x(1 + 2h)
    let w = Value::parameter(0.5);
    let x = Value::constant(3.0);
    let h = mul_op(&w, &x);
    let y = add_op(&h, &mul_op(&h, &h));
    backward(&y)?;
    let h_val = 1.5;
    assert_relative_eq!(w.grad(), 3.0 * (1.0 + 2.0 * h_val), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_twice_accumulates() -> Result<(), NeuroGradError> {
    let w = Value::parameter(0.3);
    let b = Value::parameter(-0.1);
    let f = sigmoid_op(&add_op(&mul_op(&w, &Value::constant(2.0)), &b));
    backward(&f)?;
    let (gw, gb) = (w.grad(), b.grad());
    backward(&f)?;
    assert_relative_eq!(w.grad(), 2.0 * gw, epsilon = 1e-12);
    assert_relative_eq!(b.grad(), 2.0 * gb, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_backward_does_not_touch_values() -> Result<(), NeuroGradError> {
    let a = Value::parameter(2.0);
    let z = mul_op(&a, &a);
    backward(&z)?;
    assert_eq!(a.value(), 2.0);
    assert_eq!(z.value(), 4.0);
    Ok(())
}

#[test]
fn test_backward_deep_chain() -> Result<(), NeuroGradError> {
    // iterative traversal: a long chain must not overflow the stack
    let x = Value::parameter(1.0);
    let mut acc = x.clone();
    for _ in 0..100_000 {
        acc = add_op(&acc, &Value::constant(0.0));
    }
    backward(&acc)?;
    assert_eq!(x.grad(), 1.0);
    Ok(())
}

#[test]
fn test_backward_unrelated_parameters_untouched() -> Result<(), NeuroGradError> {
    let a = Value::parameter(1.0);
    let unrelated = Value::parameter(7.0);
    let _other = mul_op(&unrelated, &Value::constant(2.0));
    backward(&mul_op(&a, &Value::constant(4.0)))?;
    assert_eq!(a.grad(), 4.0);
    assert_eq!(unrelated.grad(), 0.0);
    Ok(())
}

#[test]
fn test_propagate_rejects_producer_before_consumer() {
    let x = Value::parameter(2.0);
    let y = mul_op(&x, &Value::constant(3.0));
    let mut order = build_topo(&y);
    // move the leaf ahead of its consumer
    order.nodes.reverse();
    match propagate(&y, order) {
        Err(NeuroGradError::DependencyInvariantViolation { pending, .. }) => assert_eq!(pending, 1),
        other => panic!("Expected DependencyInvariantViolation, got {:?}", other),
    }
    assert_eq!(x.grad(), 0.0);
}
