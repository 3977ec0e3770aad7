//! Edge deletion by endpoint pair.

use tracing::debug;
use vine_core::{EdgeId, GraphError, GraphResult};
use vine_graph::Graph;

use crate::resolver::{self, Address};

/// Remove every edge over the resolved ordered pair.
///
/// Parallel edges all go at once; the removed ids come back in ascending
/// order. Nodes are never removed. Fails with `NoSuchEdge` when the pair
/// has no edge.
pub fn execute_remove_edge(
    graph: &mut Graph,
    from: &Address,
    to: &Address,
) -> GraphResult<Vec<EdgeId>> {
    let source = resolver::resolve(graph, from)?;
    let target = resolver::resolve(graph, to)?;

    let matching = graph.edges_between(source, target);
    if matching.is_empty() {
        return Err(GraphError::NoSuchEdge {
            source: source.raw(),
            target: target.raw(),
        });
    }

    for edge_id in &matching {
        graph.delete_edge(*edge_id);
    }

    debug!(%source, %target, removed = matching.len(), "edges removed");
    Ok(matching)
}
