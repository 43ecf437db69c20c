use super::*;
use crate::ops::arithmetic::{add_op, mul_op};

#[test]
fn test_check_grad_passes_for_correct_graph() {
    // f(x, y) = x^2 + 2xy + y^2
    let func = |v: &[Value]| -> Result<Value, NeuroGradError> {
        let xy = mul_op(&v[0], &v[1]);
        Ok(add_op(
            &add_op(&mul_op(&v[0], &v[0]), &add_op(&xy, &xy)),
            &mul_op(&v[1], &v[1]),
        ))
    };
    assert_eq!(check_grad(func, &[1.0, 2.0], 1e-6, 1e-6), Ok(()));
}

#[test]
fn test_check_grad_detects_wrong_local_derivative() {
    // A node whose recorded derivative (1) is wrong for its value (2x).
    let func = |v: &[Value]| -> Result<Value, NeuroGradError> {
        let x = v[0].value();
        Ok(Value::from_op(2.0 * x, crate::autograd::Op::Exp, vec![(v[0].clone(), 1.0)]))
    };
    match check_grad(func, &[3.0], 1e-6, 1e-6) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical,
            numerical,
            ..
        }) => {
            assert_eq!(input_index, 0);
            assert_eq!(analytical, 1.0);
            assert!((numerical - 2.0).abs() < 1e-5);
        }
        other => panic!("Expected GradientMismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_propagates_engine_errors() {
    let func = |v: &[Value]| v[0].ln();
    match check_grad(func, &[-1.0], 1e-6, 1e-6) {
        Err(GradCheckError::Engine(NeuroGradError::DomainError { .. })) => {}
        other => panic!("Expected engine DomainError, got {:?}", other),
    }
}

#[test]
fn test_finite_diff_quadratic() {
    let f = |v: &[f64]| v[0] * v[0] + 2.0 * v[0] * v[1] + v[1] * v[1];
    let grads = finite_diff_grad(f, &[1.0, 2.0], 1e-7);
    assert!((grads[0] - 6.0).abs() < 1e-5);
    assert!((grads[1] - 6.0).abs() < 1e-5);
}
