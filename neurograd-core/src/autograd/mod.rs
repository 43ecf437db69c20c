//! # Autograd (`autograd`)
//!
//! Reverse-mode differentiation over the scalar graph.
//!
//! - [`backward_op`]: the closed set of operation kinds a node can record.
//! - [`graph`]: node identity and the topological ordering of a graph.
//! - [`backward`]: the propagation pass itself.
//! - [`grad_check`]: finite-difference verification of analytical gradients.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use graph::{topological_sort, NodeId};

use crate::error::NeuroGradError;
use crate::value::Value;
use graph::{build_topo, TopoOrder};
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Propagates gradients from `root` to every node it depends on.
///
/// 1. Seeds the root with a gradient of 1 for this pass.
/// 2. Orders every reachable node so that it comes after all of its consumers.
/// 3. For each node in that order and each recorded `(predecessor, d)`, adds
///    `upstream * d` into the predecessor's gradient for this pass, where
///    `upstream` is what the node itself received during this pass.
/// 4. Adds each pass gradient into the stored gradient of every visited node
///    that retains it (parameters, and nodes marked with `retain_grad`). The
///    stored gradient of every other visited node is reset to zero.
///
/// Stored gradients never feed back into propagation, so a gradient left on a
/// retained intermediate by an earlier pass does not leak into this one.
///
/// A node is only visited once every consumer inside the reachable graph has
/// delivered its contribution; the pass checks this with a pending-consumer
/// count and fails with `DependencyInvariantViolation` otherwise. On failure no
/// stored gradient is modified.
pub fn backward(root: &Value) -> Result<(), NeuroGradError> {
    let order = build_topo(root);
    debug!("backward: {} node(s) reachable from root", order.nodes.len());
    propagate(root, order)
}

/// Runs the accumulation and release steps over a precomputed order.
pub(crate) fn propagate(root: &Value, order: TopoOrder) -> Result<(), NeuroGradError> {
    let TopoOrder { nodes, mut pending } = order;
    let mut pass_grads: HashMap<NodeId, f64> = HashMap::with_capacity(nodes.len());
    pass_grads.insert(root.node_id(), 1.0);

    for node in &nodes {
        let node_id = node.node_id();
        if let Some(&remaining) = pending.get(&node_id) {
            if remaining != 0 {
                return Err(NeuroGradError::DependencyInvariantViolation {
                    node: format!("{:?}", node),
                    pending: remaining,
                });
            }
        }

        let upstream = pass_grads.get(&node_id).copied().unwrap_or(0.0);
        let guard = node.read_data();
        trace!(
            "backward: visiting {:?} node with grad {}",
            guard.grad_fn.map(|op| op.name()).unwrap_or("leaf"),
            upstream
        );
        for (pred, local) in guard.backwards.iter() {
            let pred_id = pred.node_id();
            *pass_grads.entry(pred_id).or_insert(0.0) += upstream * local;
            if let Some(count) = pending.get_mut(&pred_id) {
                *count -= 1;
            }
        }
    }

    let mut non_finite = 0usize;
    for node in &nodes {
        let delta = pass_grads.get(&node.node_id()).copied().unwrap_or(0.0);
        if !delta.is_finite() {
            non_finite += 1;
        }
        let mut guard = node.write_data();
        if guard.retains_grad {
            guard.grad += delta;
        } else {
            guard.grad = 0.0;
        }
    }
    if non_finite > 0 {
        warn!(
            "backward: {} node(s) received a non-finite gradient",
            non_finite
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
