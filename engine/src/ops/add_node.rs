//! Node insertion, optionally wired to existing nodes.

use tracing::debug;
use vine_core::{Attributes, GraphResult};
use vine_graph::Graph;

use crate::resolver::{self, Address};
use crate::result::NodeAdded;

/// Create a node and one edge per resolved `from`/`to` address.
///
/// `from` addresses become edges into the new node, `to` addresses edges
/// out of it. Every address is resolved before the allocator is touched:
/// a failed call creates nothing and consumes no identifier.
pub fn execute_add_node(
    graph: &mut Graph,
    attributes: Attributes,
    from: &[Address],
    to: &[Address],
) -> GraphResult<NodeAdded> {
    let sources = resolver::resolve_all(graph, from)?;
    let targets = resolver::resolve_all(graph, to)?;

    let node = graph.create_node(attributes);
    let mut edges = Vec::with_capacity(sources.len() + targets.len());
    for source in sources {
        // Every endpoint here is a resolved id or the fresh node.
        edges.push(graph.create_edge(source, node, Attributes::new())?);
    }
    for target in targets {
        edges.push(graph.create_edge(node, target, Attributes::new())?);
    }

    debug!(%node, edges = edges.len(), "node added");
    Ok(NodeAdded { node, edges })
}
