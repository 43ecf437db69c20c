use crate::error::NeuroGradError;
use crate::nn::Parameter;
use crate::value::Value;

/// The base trait for neural network modules.
///
/// A module owns its [`Parameter`]s and builds a fresh graph of intermediate
/// nodes on every `forward` call; the parameters are the only state shared
/// between calls.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: The ordered input nodes.
    ///
    /// # Returns
    /// The ordered output nodes, each carrying its full dependency chain back to
    /// the module's parameters and the supplied inputs.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, NeuroGradError>;

    /// Returns all learnable parameters of the module, in a stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with their names.
    /// Names are unique within the module (e.g. "weight.0.1", "bias.0").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets the gradient of every parameter to zero.
    ///
    /// Must be called between successive backward passes unless gradient
    /// accumulation is intended.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
