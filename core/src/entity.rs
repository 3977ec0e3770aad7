//! Entity structures for Vine.
//!
//! Nodes and edges are the two entity kinds in the store. Both carry an
//! attribute map; two attribute names are conventional rather than
//! structural: `label` on nodes (alternate address, defaulted by the store)
//! and `rel` on edges (relationship name).

use crate::{Attributes, EdgeId, NodeId, Value};

/// Attribute name under which a node's label is stored.
pub const LABEL_ATTR: &str = "label";

/// A node in the graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Node {
    /// Create a new node with the given attributes.
    pub fn new(id: NodeId, attributes: Attributes) -> Self {
        Self { id, attributes }
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: String, value: Value) {
        self.attributes.insert(name, value);
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// The node's label text.
    ///
    /// The store guarantees every node carries a `label` attribute (it
    /// defaults to the id's string form at creation), so callers holding a
    /// store-issued node can treat the fallback as unreachable.
    pub fn label(&self) -> String {
        self.attributes
            .get(LABEL_ATTR)
            .map(Value::as_text)
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// A directed edge between two nodes.
///
/// Multiple edges between the same ordered pair of nodes are permitted;
/// each carries its own identifier and attribute map.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// The node this edge leaves.
    pub source: NodeId,
    /// The node this edge enters.
    pub target: NodeId,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Edge {
    /// Create a new edge with the given endpoints and attributes.
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, attributes: Attributes) -> Self {
        Self {
            id,
            source,
            target,
            attributes,
        }
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Set an attribute value.
    pub fn set_attr(&mut self, name: String, value: Value) {
        self.attributes.insert(name, value);
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, name: &str) -> Option<Value> {
        self.attributes.remove(name)
    }

    /// Check if this edge touches a node as either endpoint.
    pub fn involves(&self, node_id: NodeId) -> bool {
        self.source == node_id || self.target == node_id
    }

    /// Check if this edge connects the exact ordered pair.
    pub fn connects(&self, source: NodeId, target: NodeId) -> bool {
        self.source == source && self.target == target
    }

    /// The `"src->dst"` display key for this edge.
    pub fn endpoint_key(&self) -> String {
        format!("{}->{}", self.source, self.target)
    }
}
