//! Edge insertion between two addressed nodes.

use tracing::debug;
use vine_core::{Attributes, EdgeId, GraphResult};
use vine_graph::Graph;

use crate::resolver::{self, Address};

/// Create one directed edge between two resolved addresses.
///
/// Resolution failures propagate as the resolver's error kinds; no implicit
/// node creation ever occurs.
pub fn execute_add_edge(
    graph: &mut Graph,
    from: &Address,
    to: &Address,
    attributes: Attributes,
) -> GraphResult<EdgeId> {
    let source = resolver::resolve(graph, from)?;
    let target = resolver::resolve(graph, to)?;

    let edge = graph.create_edge(source, target, attributes)?;
    debug!(%edge, %source, %target, "edge added");
    Ok(edge)
}
