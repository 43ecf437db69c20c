use crate::error::NeuroGradError;
use crate::ops::activation::{relu_op, sigmoid_op};
use crate::ops::arithmetic::{div_op, pow_op};
use crate::ops::math_elem::{abs_op, exp_op, ln_op};
use crate::value::Value;

// Method forms of the unary and fallible operations. Infallible binary
// arithmetic is available through `std::ops` (see `traits.rs`).
impl Value {
    /// `self ^ exponent`. The exponent is a constant; no gradient flows to it.
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }

    pub fn relu(&self) -> Value {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }

    /// Natural logarithm. Fails with `DomainError` for non-positive values.
    pub fn ln(&self) -> Result<Value, NeuroGradError> {
        ln_op(self)
    }

    pub fn exp(&self) -> Value {
        exp_op(self)
    }

    pub fn abs(&self) -> Value {
        abs_op(self)
    }

    /// `self / divisor`. Fails with `DomainError` if the divisor is zero.
    pub fn div(&self, divisor: impl Into<Value>) -> Result<Value, NeuroGradError> {
        div_op(self, &divisor.into())
    }

    /// `numerator / self`, the reflected form of [`Value::div`].
    pub fn rdiv(&self, numerator: f64) -> Result<Value, NeuroGradError> {
        div_op(&Value::from(numerator), self)
    }
}
