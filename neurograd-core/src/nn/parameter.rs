use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A learnable scalar owned by a [`Module`](crate::nn::Module).
///
/// Wraps a leaf [`Value`] created with [`Value::parameter`], so its gradient
/// survives backward passes until `zero_grad` is called. Cloning shares the
/// underlying node.
#[derive(Clone)]
pub struct Parameter(Value);

impl Parameter {
    /// Creates a new Parameter holding `value`.
    pub fn new(value: f64) -> Self {
        Parameter(Value::parameter(value))
    }

    /// The underlying node, for use in expressions.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the Parameter and returns the underlying node.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

// Allow accessing the underlying Value via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::new(value)
    }
}

impl From<&Parameter> for Value {
    fn from(param: &Parameter) -> Self {
        param.0.clone()
    }
}

impl From<Parameter> for Value {
    fn from(param: Parameter) -> Self {
        param.0
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({})", self.0.value())
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
