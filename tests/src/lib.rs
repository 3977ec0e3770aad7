//! Shared support for the Vine integration suites.

use vine_core::attrs;
use vine_engine::GraphEngine;
use vine_graph::Graph;

/// Everything an integration test usually needs.
pub mod prelude {
    pub use vine_core::{attrs, Attributes, EdgeId, GraphError, NodeId, Value};
    pub use vine_engine::{
        Address, Addressing, EdgeListing, EdgeRow, EdgeShape, EntityKind, GraphEngine, NodeAdded,
        NodeRemoved, Select, Values,
    };
    pub use vine_graph::{snapshot, Graph, GraphSnapshot};

    pub use crate::{assert_integrity, engine_with_labels};
}

/// An engine holding one node per label, in order, with ids 1..=n.
pub fn engine_with_labels(labels: &[&str]) -> GraphEngine {
    let mut engine = GraphEngine::new();
    for label in labels {
        engine.add_node(attrs! { "label" => *label });
    }
    engine
}

/// Panic unless every edge's endpoints are present in the node table.
///
/// The suites call this after each mutation step; referential integrity
/// must hold at every intermediate state, not just at the end.
pub fn assert_integrity(graph: &Graph) {
    for edge in graph.edges() {
        assert!(
            graph.contains_node(edge.source),
            "edge {} has dangling source {}",
            edge.id,
            edge.source
        );
        assert!(
            graph.contains_node(edge.target),
            "edge {} has dangling target {}",
            edge.id,
            edge.target
        );
    }
}
