//! Mutation result types.

use vine_core::{EdgeId, NodeId};

/// Outcome of adding a node, including any edges requested alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAdded {
    /// The freshly created node.
    pub node: NodeId,
    /// Edges created from the `from`/`to` arguments, from-edges first.
    pub edges: Vec<EdgeId>,
}

/// Outcome of removing a node and its incident edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRemoved {
    /// The removed node.
    pub node: NodeId,
    /// How many edges were removed in the same step.
    pub edges_removed: usize,
}
