use super::*;

#[test]
fn test_abs_forward() {
    assert_eq!(abs_op(&Value::constant(-3.5)).value(), 3.5);
    assert_eq!(abs_op(&Value::constant(2.0)).value(), 2.0);
}

#[test]
fn test_abs_backward_sign() {
    let neg = Value::parameter(-1.5);
    abs_op(&neg).backward().unwrap();
    assert_eq!(neg.grad(), -1.0);

    let pos = Value::parameter(1.5);
    abs_op(&pos).backward().unwrap();
    assert_eq!(pos.grad(), 1.0);
}

#[test]
fn test_abs_backward_at_zero_is_one() {
    let zero = Value::parameter(0.0);
    abs_op(&zero).backward().unwrap();
    assert_eq!(zero.grad(), 1.0);
}
