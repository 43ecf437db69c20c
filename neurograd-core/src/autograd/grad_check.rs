use crate::error::NeuroGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical} != numerical grad {numerical}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph evaluation failed during gradient check: {0}")]
    Engine(NeuroGradError),
}

impl From<NeuroGradError> for GradCheckError {
    fn from(err: NeuroGradError) -> Self {
        GradCheckError::Engine(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a graph over one parameter leaf per entry of `point` and
/// returns the scalar output. It is evaluated once for the backward pass and
/// twice more per input, at `x_i + epsilon` and `x_i - epsilon`, on fresh
/// leaves each time.
///
/// Gradients are compared with `approx::relative_eq!` using `tolerance` as
/// both the absolute and the relative bound.
pub fn check_grad<F>(
    func: F,
    point: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, NeuroGradError>,
{
    let leaves: Vec<Value> = point.iter().map(|&x| Value::parameter(x)).collect();
    let output = func(&leaves)?;
    output.backward()?;

    let eval = |values: &[f64]| -> Result<f64, NeuroGradError> {
        let fresh: Vec<Value> = values.iter().map(|&x| Value::constant(x)).collect();
        Ok(func(&fresh)?.value())
    };

    let mut perturbed = point.to_vec();
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        perturbed[i] = point[i] + epsilon;
        let loss_plus = eval(&perturbed)?;
        perturbed[i] = point[i] - epsilon;
        let loss_minus = eval(&perturbed)?;
        perturbed[i] = point[i];

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !approx::relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical,
                numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}

/// Central finite-difference gradient of a plain `f64` function.
pub fn finite_diff_grad<F>(f: F, point: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut perturbed = point.to_vec();
    (0..point.len())
        .map(|i| {
            perturbed[i] = point[i] + eps;
            let f_plus = f(&perturbed);
            perturbed[i] = point[i] - eps;
            let f_minus = f(&perturbed);
            perturbed[i] = point[i];
            (f_plus - f_minus) / (2.0 * eps)
        })
        .collect()
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
