//! Indexes for efficient graph lookups.

use std::collections::{BTreeSet, HashMap, HashSet};
use vine_core::{EdgeId, NodeId};

/// Label index: label text -> Set<NodeId>
///
/// Labels are not unique; a label borne by more than one node is still
/// indexed, and resolution reports the ambiguity. Node ids are kept in a
/// BTreeSet so iteration over holders is in ascending id order.
#[derive(Debug, Default)]
pub struct LabelIndex {
    index: HashMap<String, BTreeSet<NodeId>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, node_id: NodeId) {
        self.index
            .entry(label.to_string())
            .or_default()
            .insert(node_id);
    }

    pub fn remove(&mut self, label: &str, node_id: NodeId) {
        if let Some(set) = self.index.get_mut(label) {
            set.remove(&node_id);
            if set.is_empty() {
                self.index.remove(label);
            }
        }
    }

    /// Nodes currently bearing a label, in ascending id order.
    pub fn get(&self, label: &str) -> impl Iterator<Item = NodeId> + '_ {
        self.index
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// How many nodes currently bear a label.
    pub fn count(&self, label: &str) -> usize {
        self.index.get(label).map(BTreeSet::len).unwrap_or(0)
    }
}

/// Adjacency index: NodeId -> edges leaving, entering, or touching it.
///
/// Kept in step with every edge insert/remove; powers cascading node
/// deletion and endpoint-pair lookup without scanning the edge table.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// Edges where the node is the source.
    outbound: HashMap<NodeId, HashSet<EdgeId>>,
    /// Edges where the node is the target.
    inbound: HashMap<NodeId, HashSet<EdgeId>>,
    /// All edges touching a node as either endpoint.
    involving: HashMap<NodeId, HashSet<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: EdgeId, source: NodeId, target: NodeId) {
        self.outbound.entry(source).or_default().insert(edge_id);
        self.inbound.entry(target).or_default().insert(edge_id);
        self.involving.entry(source).or_default().insert(edge_id);
        self.involving.entry(target).or_default().insert(edge_id);
    }

    pub fn remove(&mut self, edge_id: EdgeId, source: NodeId, target: NodeId) {
        Self::remove_from(&mut self.outbound, source, edge_id);
        Self::remove_from(&mut self.inbound, target, edge_id);
        Self::remove_from(&mut self.involving, source, edge_id);
        // Self-loops share one involving entry; the second removal is a no-op.
        Self::remove_from(&mut self.involving, target, edge_id);
    }

    fn remove_from(map: &mut HashMap<NodeId, HashSet<EdgeId>>, key: NodeId, edge_id: EdgeId) {
        if let Some(set) = map.get_mut(&key) {
            set.remove(&edge_id);
            if set.is_empty() {
                map.remove(&key);
            }
        }
    }

    /// Edges leaving a node.
    pub fn edges_from(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Edges entering a node.
    pub fn edges_to(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.inbound
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// All edges touching a node as either endpoint.
    pub fn edges_involving(&self, node_id: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.involving
            .get(&node_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
