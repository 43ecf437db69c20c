use crate::error::NeuroGradError;
use crate::value::Value;

impl Value {
    /// Returns the gradient accumulated on this node so far.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Resets this node's gradient to zero.
    ///
    /// Gradients accumulate across backward passes, so callers must clear every
    /// retained parameter between successive passes unless accumulation is intended.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Keeps this node's gradient after the backward pass instead of releasing it.
    pub fn retain_grad(&self) {
        self.write_data().retains_grad = true;
    }

    pub fn retains_grad(&self) -> bool {
        self.read_data().retains_grad
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node with a gradient of 1 for the pass and propagates to
    /// every ancestor in topological order. See [`crate::autograd::backward`] for the full contract.
    ///
    /// # Errors
    /// `NeuroGradError::DependencyInvariantViolation` if the traversal order is
    /// inconsistent with the graph, which indicates an engine defect.
    pub fn backward(&self) -> Result<(), NeuroGradError> {
        crate::autograd::backward(self)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
