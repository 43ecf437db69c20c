use crate::error::NeuroGradError;
use crate::nn::Parameter;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Triangular;

/// Initialization policy for freshly allocated parameters.
///
/// Every random policy is symmetric around zero and bounded by `bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[-bound, bound]`.
    Uniform { bound: f64 },
    /// Triangular over `[-bound, bound]` with its mode at zero.
    Triangular { bound: f64 },
    /// Every parameter set to the same value.
    Constant(f64),
}

impl Default for Init {
    /// `U(-1, 1)`.
    fn default() -> Self {
        Init::Uniform { bound: 1.0 }
    }
}

impl Init {
    /// Checks the policy's bounds.
    ///
    /// # Errors
    /// `NeuroGradError::InvalidInit` for a non-finite or negative bound, a zero
    /// triangular bound, or a non-finite constant.
    pub fn validate(&self) -> Result<(), NeuroGradError> {
        match *self {
            Init::Uniform { bound } if !bound.is_finite() || bound < 0.0 => {
                Err(NeuroGradError::InvalidInit(format!(
                    "uniform bound must be finite and >= 0, got {}",
                    bound
                )))
            }
            Init::Triangular { bound } if !bound.is_finite() || bound <= 0.0 => {
                Err(NeuroGradError::InvalidInit(format!(
                    "triangular bound must be finite and > 0, got {}",
                    bound
                )))
            }
            Init::Constant(value) if !value.is_finite() => Err(NeuroGradError::InvalidInit(
                format!("constant must be finite, got {}", value),
            )),
            _ => Ok(()),
        }
    }

    /// Draws `count` values from this policy.
    pub fn sample_values<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, NeuroGradError> {
        self.validate()?;
        let values: Vec<f64> = match *self {
            Init::Uniform { bound } => {
                let dist = Uniform::new_inclusive(-bound, bound);
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            Init::Triangular { bound } => {
                let dist = Triangular::new(-bound, bound, 0.0)
                    .map_err(|e| NeuroGradError::InvalidInit(format!("{:?}", e)))?;
                (0..count).map(|_| dist.sample(rng)).collect()
            }
            Init::Constant(value) => vec![value; count],
        };
        Ok(values)
    }

    /// Allocates `count` new parameters drawn from this policy.
    pub fn parameters<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Parameter>, NeuroGradError> {
        Ok(self
            .sample_values(count, rng)?
            .into_iter()
            .map(Parameter::new)
            .collect())
    }
}

/// Fills every parameter with the scalar value 0.
///
/// Operates in-place; graphs built before the call keep the old values.
pub fn zeros_(params: &[Parameter]) -> Result<(), NeuroGradError> {
    fill_(params, 0.0)
}

/// Fills every parameter with the scalar value 1.
pub fn ones_(params: &[Parameter]) -> Result<(), NeuroGradError> {
    fill_(params, 1.0)
}

/// Fills every parameter with `value`.
pub fn fill_(params: &[Parameter], value: f64) -> Result<(), NeuroGradError> {
    for param in params {
        param.set_value(value)?;
    }
    Ok(())
}

/// Re-draws every parameter from `init`.
pub fn init_<R: Rng + ?Sized>(
    params: &[Parameter],
    init: Init,
    rng: &mut R,
) -> Result<(), NeuroGradError> {
    let values = init.sample_values(params.len(), rng)?;
    for (param, value) in params.iter().zip(values) {
        param.set_value(value)?;
    }
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
