//! Node deletion with edge cascade.

use tracing::debug;
use vine_core::GraphResult;
use vine_graph::Graph;

use crate::resolver::{self, Address};
use crate::result::NodeRemoved;

/// Remove an addressed node and every edge touching it, as one step.
pub fn execute_remove_node(graph: &mut Graph, address: &Address) -> GraphResult<NodeRemoved> {
    let node = resolver::resolve(graph, address)?;
    let (_, edges_removed) = graph.delete_node(node)?;

    debug!(%node, edges_removed, "node removed");
    Ok(NodeRemoved { node, edges_removed })
}
