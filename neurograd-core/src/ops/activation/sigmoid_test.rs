use super::*;
use crate::error::NeuroGradError;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_forward() {
    assert_relative_eq!(sigmoid_op(&Value::constant(0.0)).value(), 0.5);
    let big = sigmoid_op(&Value::constant(40.0)).value();
    assert!(big > 0.999_999 && big <= 1.0);
    let small = sigmoid_op(&Value::constant(-40.0)).value();
    assert!(small >= 0.0 && small < 1e-6);
}

#[test]
fn test_sigmoid_backward_at_zero() {
    let a = Value::parameter(0.0);
    sigmoid_op(&a).backward().unwrap();
    assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
}

#[test]
fn test_sigmoid_backward_matches_closed_form() {
    let a = Value::parameter(1.3);
    let z = sigmoid_op(&a);
    let s = z.value();
    z.backward().unwrap();
    assert_relative_eq!(a.grad(), s * (1.0 - s), epsilon = 1e-12);
}

#[test]
fn test_sigmoid_grad_check() {
    let func = |v: &[Value]| -> Result<Value, NeuroGradError> { Ok(sigmoid_op(&v[0])) };
    check_grad(func, &[-0.7], 1e-6, 1e-6).unwrap();
}
