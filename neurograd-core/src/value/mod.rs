//! The scalar node handle, [`Value`].

use crate::autograd::graph::NodeId;
use crate::autograd::Op;
use crate::error::NeuroGradError;
use crate::value_data::ValueData;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub mod autograd_methods;
pub mod math_methods;
pub mod traits;

/// A differentiable scalar: one node of the computation graph.
///
/// `Value` is a cheap-to-clone handle. Clones share the same node, so a value
/// reused in several expressions is a single node with fan-out, not a copy.
/// Edges point from a consumer to its producers only, which keeps the graph
/// acyclic by construction.
///
/// Not thread-safe: the handle is `!Send` and `!Sync`.
#[derive(Clone)]
pub struct Value {
    pub(crate) data: Rc<RefCell<ValueData>>,
}

impl Value {
    /// Creates a constant leaf. Its gradient is released after every backward pass.
    pub fn constant(value: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(value, false))),
        }
    }

    /// Creates a learnable leaf whose gradient persists across backward passes
    /// until `zero_grad` is called.
    pub fn parameter(value: f64) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::leaf(value, true))),
        }
    }

    /// Creates the output node of an operation.
    pub(crate) fn from_op(value: f64, op: Op, backwards: Vec<(Value, f64)>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData::from_op(value, op, backwards))),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, ValueData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, ValueData> {
        self.data.borrow_mut()
    }

    /// Returns the scalar held by this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the scalar of a leaf node.
    ///
    /// Graphs built from the old value keep the local derivatives recorded at
    /// their construction; rebuild them after changing a leaf.
    ///
    /// # Errors
    /// `NeuroGradError::NonLeafMutation` if this node was produced by an operation.
    pub fn set_value(&self, value: f64) -> Result<(), NeuroGradError> {
        let mut guard = self.write_data();
        if let Some(op) = guard.grad_fn {
            return Err(NeuroGradError::NonLeafMutation {
                op: op.name().to_string(),
            });
        }
        guard.value = value;
        Ok(())
    }

    /// The operation that produced this node, or `None` for a leaf.
    pub fn op(&self) -> Option<Op> {
        self.read_data().grad_fn
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().grad_fn.is_none()
    }

    /// Returns the recorded `(predecessor, local_derivative)` pairs.
    pub fn predecessors(&self) -> Vec<(Value, f64)> {
        self.read_data().backwards.clone()
    }

    /// Stable identity of the underlying node, shared by all clones of this handle.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

/// Explicit, total promotion of a literal into a constant node.
impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::constant(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        let op = guard.grad_fn.map(|op| op.name()).unwrap_or("leaf");
        write!(
            f,
            "Value(value={}, grad={}, op={})",
            guard.value, guard.grad, op
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
