use super::*;
use crate::ops::arithmetic::{add_op, mul_op};

#[test]
fn test_backward_on_leaf_seeds_one() -> Result<(), NeuroGradError> {
    let a = Value::parameter(5.0);
    a.backward()?;
    assert_eq!(a.grad(), 1.0);
    Ok(())
}

#[test]
fn test_zero_grad_resets() -> Result<(), NeuroGradError> {
    let a = Value::parameter(2.0);
    mul_op(&a, &Value::constant(3.0)).backward()?;
    assert_eq!(a.grad(), 3.0);
    a.zero_grad();
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_intermediate_grad_is_released() -> Result<(), NeuroGradError> {
    let a = Value::parameter(2.0);
    let c = Value::constant(3.0);
    let hidden = mul_op(&a, &c);
    let out = add_op(&hidden, &a);
    out.backward()?;
    assert_eq!(a.grad(), 4.0);
    assert_eq!(hidden.grad(), 0.0);
    assert_eq!(c.grad(), 0.0);
    assert_eq!(out.grad(), 0.0);
    Ok(())
}

#[test]
fn test_retain_grad_keeps_intermediate() -> Result<(), NeuroGradError> {
    let a = Value::parameter(2.0);
    let hidden = mul_op(&a, &Value::constant(3.0));
    hidden.retain_grad();
    let out = mul_op(&hidden, &Value::constant(0.5));
    out.retain_grad();
    out.backward()?;
    assert!(hidden.retains_grad());
    assert_eq!(hidden.grad(), 0.5);
    assert_eq!(out.grad(), 1.0);
    assert_eq!(a.grad(), 1.5);
    Ok(())
}

#[test]
fn test_backward_twice_with_retained_root_doubles() -> Result<(), NeuroGradError> {
    let w = Value::parameter(3.0);
    let y = mul_op(&w, &Value::constant(2.0));
    y.retain_grad();
    y.backward()?;
    assert_eq!(w.grad(), 2.0);
    y.backward()?;
    assert_eq!(w.grad(), 4.0);
    assert_eq!(y.grad(), 2.0);
    Ok(())
}

#[test]
fn test_backward_twice_with_retained_intermediate_doubles() -> Result<(), NeuroGradError> {
    let w = Value::parameter(3.0);
    let hidden = mul_op(&w, &Value::constant(2.0));
    hidden.retain_grad();
    let y = mul_op(&hidden, &Value::constant(5.0));
    y.backward()?;
    assert_eq!(w.grad(), 10.0);
    y.backward()?;
    assert_eq!(w.grad(), 20.0);
    assert_eq!(hidden.grad(), 10.0);
    Ok(())
}

#[test]
fn test_retained_grad_does_not_leak_into_other_root() -> Result<(), NeuroGradError> {
    let w = Value::parameter(3.0);
    let hidden = mul_op(&w, &Value::constant(2.0));
    hidden.retain_grad();
    mul_op(&hidden, &Value::constant(5.0)).backward()?;
    w.zero_grad();
    mul_op(&hidden, &Value::constant(7.0)).backward()?;
    // d(7 * 2w)/dw
    assert_eq!(w.grad(), 14.0);
    // retained gradients accumulate across passes until zero_grad
    assert_eq!(hidden.grad(), 12.0);
    Ok(())
}
