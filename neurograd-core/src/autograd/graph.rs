use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Only used as a map key; it is never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// A topological ordering of the graph reachable from a root.
pub(crate) struct TopoOrder {
    /// Root first; every node appears after all of its consumers.
    pub(crate) nodes: Vec<Value>,
    /// For each non-root node, how many recorded edges point at it from inside
    /// the reachable graph. A node reused twice by one operation counts twice.
    pub(crate) pending: HashMap<NodeId, usize>,
}

/// Builds the reverse depth-first post-order of the graph under `root`.
///
/// Iterative, so deep chains do not exhaust the call stack. A node is marked
/// visited when it is expanded, and emitted only after all of its
/// predecessors have been emitted.
pub(crate) fn build_topo(root: &Value) -> TopoOrder {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut pending: HashMap<NodeId, usize> = HashMap::new();
    let mut post_order: Vec<Value> = Vec::new();
    // (node, predecessors already pushed)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            post_order.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        stack.push((node.clone(), true));
        let guard = node.read_data();
        for (pred, _) in guard.backwards.iter().rev() {
            *pending.entry(pred.node_id()).or_insert(0) += 1;
            if !visited.contains(&pred.node_id()) {
                stack.push((pred.clone(), false));
            }
        }
    }

    post_order.reverse();
    TopoOrder {
        nodes: post_order,
        pending,
    }
}

/// Returns every node reachable from `root`, root first, each node after all
/// of its consumers.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    build_topo(root).nodes
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
