use thiserror::Error;

/// Custom error type for the NeuroGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuroGradError {
    /// An operation received an operand outside its mathematical domain
    /// (`ln` of a non-positive number, division by zero).
    #[error("Domain error in {operation}: operand {value} is outside the operation's domain")]
    DomainError { operation: String, value: f64 },

    #[error("Input length mismatch: expected {expected} inputs, got {actual}")]
    InputLengthError { expected: usize, actual: usize },

    /// Internal: the backward pass reached a node before all of its consumers
    /// delivered their contribution. Indicates a graph-builder defect.
    #[error("Dependency invariant violated: node {node} visited with {pending} consumer(s) still pending")]
    DependencyInvariantViolation { node: String, pending: usize },

    #[error("Invalid initialization policy: {0}")]
    InvalidInit(String),

    #[error("Parameter count mismatch for {what}: expected {expected}, got {actual}")]
    ParameterCountMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Cannot set the value of a non-leaf node produced by {op}")]
    NonLeafMutation { op: String },
}
