use crate::value::Value;

/// Checks that a node's value is within `tolerance` of `expected`.
/// Panics otherwise.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let value = actual.value();
    let diff = (value - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            value, expected, diff, tolerance
        );
    }
}

/// Checks the gradients of a list of nodes against expected values
/// (same length, each within tolerance).
/// Panics with the index of the first mismatch.
pub fn check_grads_near<'a, I>(actual: I, expected: &[f64], tolerance: f64)
where
    I: IntoIterator<Item = &'a Value>,
{
    let grads: Vec<f64> = actual.into_iter().map(|v| v.grad()).collect();
    assert_eq!(grads.len(), expected.len(), "Gradient count mismatch");

    for (i, (a, e)) in grads.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
