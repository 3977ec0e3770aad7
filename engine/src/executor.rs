//! The mutation engine facade.
//!
//! `GraphEngine` owns the graph (including its allocator state, so
//! independent engines are fully isolated) and exposes the public
//! operation surface. Every mutating method takes `&mut self`, which makes
//! each operation exclusive for its duration: callers never observe a
//! multi-step mutation half-applied. Embedders sharing an engine across
//! threads wrap the whole engine in one mutex; the tables are mutually
//! dependent, so there is no finer-grained locking.

use vine_core::{Attributes, EdgeId, GraphResult, NodeId, Value};
use vine_graph::{snapshot, Graph, GraphSnapshot};

use crate::ops;
use crate::resolver::Address;
use crate::result::{NodeAdded, NodeRemoved};
use crate::view;
use crate::{Addressing, EdgeListing, EdgeShape, EntityKind, Select, Values};

/// The externally visible graph store.
#[derive(Debug, Default)]
pub struct GraphEngine {
    graph: Graph,
}

impl GraphEngine {
    /// Create an engine over an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Create an engine over a pre-populated graph (bulk import path; the
    /// graph's own import methods keep the allocator consistent).
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    /// Read-only access for collaborators that walk the tables directly.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Give the graph back, consuming the engine.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Add a node with the given attributes. Label defaults to the new
    /// id's string form when absent.
    pub fn add_node(&mut self, attributes: Attributes) -> NodeId {
        self.graph.create_node(attributes)
    }

    /// Add a node plus one edge per `from`/`to` address: `from` edges run
    /// into the new node, `to` edges out of it. Atomic; on any resolution
    /// failure nothing is created and no identifier is consumed.
    pub fn add_node_linked(
        &mut self,
        attributes: Attributes,
        from: &[Address],
        to: &[Address],
    ) -> GraphResult<NodeAdded> {
        ops::execute_add_node(&mut self.graph, attributes, from, to)
    }

    /// Add one directed edge between two addressed nodes.
    pub fn add_edge(
        &mut self,
        from: impl Into<Address>,
        to: impl Into<Address>,
        attributes: Attributes,
    ) -> GraphResult<EdgeId> {
        ops::execute_add_edge(&mut self.graph, &from.into(), &to.into(), attributes)
    }

    /// Delete an addressed node and every edge touching it.
    pub fn delete_node(&mut self, address: impl Into<Address>) -> GraphResult<NodeRemoved> {
        ops::execute_remove_node(&mut self.graph, &address.into())
    }

    /// Delete every edge over the addressed ordered pair.
    pub fn delete_edge(
        &mut self,
        from: impl Into<Address>,
        to: impl Into<Address>,
    ) -> GraphResult<Vec<EdgeId>> {
        ops::execute_remove_edge(&mut self.graph, &from.into(), &to.into())
    }

    /// Set one attribute across a selection of nodes or edges.
    pub fn set_attribute(
        &mut self,
        kind: EntityKind,
        name: &str,
        values: Values,
        select: Select,
    ) -> GraphResult<usize> {
        ops::execute_set_attr(&mut self.graph, kind, name, values, select)
    }

    /// One attribute across a whole table, display key to value, in
    /// insertion order; entities missing the attribute are omitted.
    pub fn get_attribute(&self, kind: EntityKind, name: &str) -> Vec<(String, Value)> {
        view::attribute_listing(&self.graph, kind, name)
    }

    /// The edge table's endpoint pairs in the requested shape. Empty graph
    /// projects to an empty listing, never an error.
    pub fn get_edges(&self, shape: EdgeShape, addressing: Addressing) -> EdgeListing {
        view::edge_listing(&self.graph, shape, addressing)
    }

    /// How many nodes are in the graph.
    pub fn count_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// How many edges are in the graph.
    pub fn count_edges(&self) -> usize {
        self.graph.edge_count()
    }

    /// Serializable full view for rendering collaborators.
    pub fn snapshot(&self) -> GraphSnapshot {
        snapshot(&self.graph)
    }
}
