use crate::error::NeuroGradError;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::arithmetic::{add_op, mul_op};
use crate::value::Value;
use log::{debug, trace};
use rand::Rng;

/// Applies an affine transformation to its inputs: `y = W·x + b`.
///
/// `W` is stored row-major as `out_dim * in_dim` scalar parameters, so the
/// weight linking input `j` to output `i` is `weights[i * in_dim + j]`.
/// The layer holds no state besides its parameters; each `forward` call
/// builds a new, disjoint graph of intermediate nodes.
#[derive(Debug, Clone)]
pub struct Dense {
    in_dim: usize,
    out_dim: usize,
    weights: Vec<Parameter>,
    biases: Vec<Parameter>,
}

impl Dense {
    /// Creates a new Dense layer with parameters drawn from `U(-1, 1)`.
    ///
    /// # Arguments
    ///
    /// * `in_dim` - Number of inputs.
    /// * `out_dim` - Number of outputs.
    pub fn new(in_dim: usize, out_dim: usize) -> Result<Self, NeuroGradError> {
        Self::with_init(in_dim, out_dim, Init::default(), &mut rand::thread_rng())
    }

    /// Creates a new Dense layer with an explicit initialization policy and
    /// random source. Weights and biases are drawn from the same policy.
    pub fn with_init<R: Rng + ?Sized>(
        in_dim: usize,
        out_dim: usize,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NeuroGradError> {
        let weights = init.parameters(in_dim * out_dim, rng)?;
        let biases = init.parameters(out_dim, rng)?;
        debug!(
            "Dense: initialized {}x{} layer ({} parameters) with {:?}",
            in_dim,
            out_dim,
            weights.len() + biases.len(),
            init
        );
        Ok(Dense {
            in_dim,
            out_dim,
            weights,
            biases,
        })
    }

    /// Builds a layer from existing parameters.
    ///
    /// # Errors
    /// `NeuroGradError::ParameterCountMismatch` if `weights` does not hold
    /// `in_dim * out_dim` entries or `biases` does not hold `out_dim`.
    pub fn from_parameters(
        in_dim: usize,
        out_dim: usize,
        weights: Vec<Parameter>,
        biases: Vec<Parameter>,
    ) -> Result<Self, NeuroGradError> {
        if weights.len() != in_dim * out_dim {
            return Err(NeuroGradError::ParameterCountMismatch {
                what: "weights".to_string(),
                expected: in_dim * out_dim,
                actual: weights.len(),
            });
        }
        if biases.len() != out_dim {
            return Err(NeuroGradError::ParameterCountMismatch {
                what: "biases".to_string(),
                expected: out_dim,
                actual: biases.len(),
            });
        }
        Ok(Dense {
            in_dim,
            out_dim,
            weights,
            biases,
        })
    }

    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    pub fn out_dim(&self) -> usize {
        self.out_dim
    }

    /// All weights, row-major.
    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn biases(&self) -> &[Parameter] {
        &self.biases
    }

    /// The weight linking input `j` to output `i`, if both are in range.
    pub fn weight(&self, i: usize, j: usize) -> Option<&Parameter> {
        if i < self.out_dim && j < self.in_dim {
            self.weights.get(i * self.in_dim + j)
        } else {
            None
        }
    }

    /// Computes `bias[i] + Σ_j weight[i * in_dim + j] * input[j]` for every
    /// output `i`.
    ///
    /// Accepts nodes or raw numbers; raw numbers become constant nodes, one
    /// per input, shared by every output row.
    ///
    /// # Errors
    /// `NeuroGradError::InputLengthError` if `inputs.len() != in_dim`.
    pub fn forward<V>(&self, inputs: &[V]) -> Result<Vec<Value>, NeuroGradError>
    where
        V: Clone + Into<Value>,
    {
        if inputs.len() != self.in_dim {
            return Err(NeuroGradError::InputLengthError {
                expected: self.in_dim,
                actual: inputs.len(),
            });
        }
        let inputs: Vec<Value> = inputs.iter().cloned().map(Into::into).collect();

        let outputs: Vec<Value> = self
            .biases
            .iter()
            .enumerate()
            .map(|(i, bias)| {
                let row = &self.weights[i * self.in_dim..(i + 1) * self.in_dim];
                let weighted_sum = row
                    .iter()
                    .zip(inputs.iter())
                    .fold(Value::constant(0.0), |acc, (w, x)| {
                        add_op(&acc, &mul_op(w, x))
                    });
                add_op(bias, &weighted_sum)
            })
            .collect();

        trace!(
            "Dense: forward built {} output(s) from {} input(s)",
            outputs.len(),
            inputs.len()
        );
        Ok(outputs)
    }
}

impl Module for Dense {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError> {
        Dense::forward(self, inputs)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(self.biases.iter()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let in_dim = self.in_dim;
        let weights = self
            .weights
            .iter()
            .enumerate()
            .map(move |(k, p)| (format!("weight.{}.{}", k / in_dim, k % in_dim), p));
        let biases = self
            .biases
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("bias.{}", i), p));
        weights.chain(biases).collect()
    }
}

#[cfg(test)]
#[path = "dense_test.rs"]
mod tests;
