//! `std::ops` overloads for [`Value`].
//!
//! Every combination of `Value`, `&Value` and `f64` is supported for the
//! infallible operators. A literal operand is promoted with `Value::from`, and
//! the node is always the first operand of the recorded operation, so
//! `2.0 * x` builds the same graph as `x * 2.0`. Division is fallible and
//! lives on [`Value::div`] instead.

use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::ops::{Add, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, other: &'b Value) -> Value {
                $op_fn(self, other)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, other: Value) -> Value {
                $op_fn(&self, &other)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, other: &'b Value) -> Value {
                $op_fn(&self, other)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, other: Value) -> Value {
                $op_fn(self, &other)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, other: f64) -> Value {
                $op_fn(self, &Value::from(other))
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, other: f64) -> Value {
                $op_fn(&self, &Value::from(other))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Sub, sub, sub_op);

// Reflected forms: `constant op node`.

impl<'b> Add<&'b Value> for f64 {
    type Output = Value;
    fn add(self, other: &'b Value) -> Value {
        add_op(other, &Value::from(self))
    }
}

impl Add<Value> for f64 {
    type Output = Value;
    fn add(self, other: Value) -> Value {
        add_op(&other, &Value::from(self))
    }
}

impl<'b> Mul<&'b Value> for f64 {
    type Output = Value;
    fn mul(self, other: &'b Value) -> Value {
        mul_op(other, &Value::from(self))
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    fn mul(self, other: Value) -> Value {
        mul_op(&other, &Value::from(self))
    }
}

// Subtraction does not commute: `c - x` is `c + (-x)`.
impl<'b> Sub<&'b Value> for f64 {
    type Output = Value;
    fn sub(self, other: &'b Value) -> Value {
        add_op(&neg_op(other), &Value::from(self))
    }
}

impl Sub<Value> for f64 {
    type Output = Value;
    fn sub(self, other: Value) -> Value {
        add_op(&neg_op(&other), &Value::from(self))
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
