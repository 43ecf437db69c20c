// src/value_data.rs
use crate::autograd::Op;
use crate::value::Value;
use std::rc::Rc;

/// Internal storage and metadata for a scalar [`Value`].
///
/// Wrapped in `Rc<RefCell<ValueData>>` by the `Value` handle to allow shared
/// ownership between every consumer of the node and interior mutability of
/// the gradient during the backward pass.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar held by this node. Never modified by the backward pass.
    pub(crate) value: f64,
    /// Gradient of the last backward root with respect to this node.
    /// Only ever accumulated into, or reset to zero.
    pub(crate) grad: f64,
    /// Whether the gradient survives the release step at the end of a backward pass.
    /// Parameters set this on creation; other nodes opt in with `retain_grad`.
    pub(crate) retains_grad: bool,
    /// The operation that produced this node. `None` for leaves.
    pub(crate) grad_fn: Option<Op>,
    /// `(predecessor, local_derivative)` pairs, in operand order.
    /// Populated once by the producing operation and never mutated afterward.
    pub(crate) backwards: Vec<(Value, f64)>,
}

impl ValueData {
    /// Creates leaf data with no predecessors.
    pub(crate) fn leaf(value: f64, retains_grad: bool) -> Self {
        ValueData {
            value,
            grad: 0.0,
            retains_grad,
            grad_fn: None,
            backwards: Vec::new(),
        }
    }

    /// Creates the data of an operation output.
    pub(crate) fn from_op(value: f64, op: Op, backwards: Vec<(Value, f64)>) -> Self {
        debug_assert_eq!(backwards.len(), op.arity(), "{} recorded a wrong operand count", op.name());
        ValueData {
            value,
            grad: 0.0,
            retains_grad: false,
            grad_fn: Some(op),
            backwards,
        }
    }
}

// Dropping the last handle of a long chain would otherwise recurse once per
// node. Predecessors that are uniquely owned are unlinked onto a local stack.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.backwards);
        while let Some((pred, _)) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(pred.data) {
                let mut data = cell.into_inner();
                stack.append(&mut data.backwards);
            }
        }
    }
}
