//! Core graph storage implementation.

use crate::index::{AdjacencyIndex, LabelIndex};
use std::collections::BTreeMap;
use vine_core::{Attributes, Edge, EdgeId, GraphError, GraphResult, Node, NodeId, Value, LABEL_ATTR};

/// ID allocator for nodes and edges.
///
/// Counters start at 1 and only ever advance; an identifier is never
/// reissued within the graph's lifetime, even after its entity is deleted.
#[derive(Debug)]
struct IdAllocator {
    next_node_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }

    /// Advance the node counter past an externally injected id.
    fn advance_past_node(&mut self, id: NodeId) {
        self.next_node_id = self.next_node_id.max(id.raw() + 1);
    }

    /// Advance the edge counter past an externally injected id.
    fn advance_past_edge(&mut self, id: EdgeId) {
        self.next_edge_id = self.next_edge_id.max(id.raw() + 1);
    }
}

/// The in-memory graph storage.
///
/// Tables are BTreeMaps keyed by id; ids are monotone, so id-order
/// iteration is insertion order. The label and adjacency indexes are
/// maintained by every mutating method here, which is why attribute writes
/// go through [`Graph::set_node_attr`] rather than a mutable entity handle.
#[derive(Debug)]
pub struct Graph {
    /// Node table
    nodes: BTreeMap<NodeId, Node>,
    /// Edge table
    edges: BTreeMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Label index
    labels: LabelIndex,
    /// Adjacency index
    adjacency: AdjacencyIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            labels: LabelIndex::new(),
            adjacency: AdjacencyIndex::new(),
        }
    }

    // ==================== Node Operations ====================

    /// Create a new node with the given attributes.
    ///
    /// If no `label` attribute is supplied, the label defaults to the
    /// string form of the freshly allocated id, so every node always bears
    /// some label.
    pub fn create_node(&mut self, mut attributes: Attributes) -> NodeId {
        let id = self.id_alloc.alloc_node_id();
        attributes
            .entry(LABEL_ATTR.to_string())
            .or_insert_with(|| Value::String(id.to_string()));

        let node = Node::new(id, attributes);
        self.labels.insert(&node.label(), id);
        self.nodes.insert(id, node);
        id
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Whether a node id is currently present.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Delete a node and every edge touching it, as one step.
    ///
    /// Returns the removed node and the number of edges removed with it.
    pub fn delete_node(&mut self, id: NodeId) -> GraphResult<(Node, usize)> {
        if !self.nodes.contains_key(&id) {
            return Err(GraphError::UnknownId(id.raw()));
        }

        let mut incident: Vec<EdgeId> = self.adjacency.edges_involving(id).collect();
        incident.sort();
        for edge_id in &incident {
            self.delete_edge(*edge_id);
        }

        // Edge removal only touches the edge tables and the adjacency index.
        let node = self.nodes.remove(&id).ok_or(GraphError::UnknownId(id.raw()))?;
        self.labels.remove(&node.label(), id);

        Ok((node, incident.len()))
    }

    /// Set an attribute on a node, keeping the label index in step.
    pub fn set_node_attr(&mut self, id: NodeId, name: &str, value: Value) -> GraphResult<()> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(GraphError::UnknownId(id.raw()))?;

        if name == LABEL_ATTR {
            self.labels.remove(&node.label(), id);
            self.labels.insert(&value.as_text(), id);
        }

        node.set_attr(name.to_string(), value);
        Ok(())
    }

    // ==================== Edge Operations ====================

    /// Create a new directed edge between two existing nodes.
    ///
    /// Both endpoints must already be present; edge creation never creates
    /// nodes. Parallel edges over the same ordered pair are permitted.
    pub fn create_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        attributes: Attributes,
    ) -> GraphResult<EdgeId> {
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::UnknownId(source.raw()));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::UnknownId(target.raw()));
        }

        let id = self.id_alloc.alloc_edge_id();
        self.adjacency.insert(id, source, target);
        self.edges.insert(id, Edge::new(id, source, target, attributes));
        Ok(id)
    }

    /// Get an edge by ID.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Whether an edge id is currently present.
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Delete an edge by ID. Returns whether it existed.
    pub fn delete_edge(&mut self, id: EdgeId) -> bool {
        match self.edges.remove(&id) {
            Some(edge) => {
                self.adjacency.remove(id, edge.source, edge.target);
                true
            }
            None => false,
        }
    }

    /// Set an attribute on an edge.
    pub fn set_edge_attr(&mut self, id: EdgeId, name: &str, value: Value) -> GraphResult<()> {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(GraphError::UnknownEdgeId(id.raw()))?;
        edge.set_attr(name.to_string(), value);
        Ok(())
    }

    // ==================== Lookups ====================

    /// Nodes currently bearing a label, in ascending id order.
    pub fn labeled(&self, label: &str) -> impl Iterator<Item = NodeId> + '_ {
        self.labels.get(label)
    }

    /// How many nodes currently bear a label.
    pub fn label_count(&self, label: &str) -> usize {
        self.labels.count(label)
    }

    /// Edges over the exact ordered pair, in ascending id order.
    pub fn edges_between(&self, source: NodeId, target: NodeId) -> Vec<EdgeId> {
        let mut matching: Vec<EdgeId> = self
            .adjacency
            .edges_from(source)
            .filter(|edge_id| {
                self.edges
                    .get(edge_id)
                    .is_some_and(|edge| edge.target == target)
            })
            .collect();
        matching.sort();
        matching
    }

    /// All edges touching a node, in ascending id order.
    pub fn edges_involving(&self, node_id: NodeId) -> Vec<EdgeId> {
        let mut incident: Vec<EdgeId> = self.adjacency.edges_involving(node_id).collect();
        incident.sort();
        incident
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// All node IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// All edge IDs in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== Bulk Import ====================

    /// Insert a node with a caller-chosen id, advancing the allocator past
    /// it so the never-reuse invariant holds for later `create_node` calls.
    pub fn import_node(&mut self, id: NodeId, mut attributes: Attributes) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::IdInUse(id.raw()));
        }

        attributes
            .entry(LABEL_ATTR.to_string())
            .or_insert_with(|| Value::String(id.to_string()));
        let node = Node::new(id, attributes);
        self.labels.insert(&node.label(), id);
        self.nodes.insert(id, node);
        self.id_alloc.advance_past_node(id);
        Ok(())
    }

    /// Insert an edge with a caller-chosen id; endpoints must already be
    /// present (import nodes before their edges).
    pub fn import_edge(
        &mut self,
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        attributes: Attributes,
    ) -> GraphResult<()> {
        if self.edges.contains_key(&id) {
            return Err(GraphError::IdInUse(id.raw()));
        }
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::UnknownId(source.raw()));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::UnknownId(target.raw()));
        }

        self.adjacency.insert(id, source, target);
        self.edges.insert(id, Edge::new(id, source, target, attributes));
        self.id_alloc.advance_past_edge(id);
        Ok(())
    }
}
