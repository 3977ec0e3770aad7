//! Bulk attribute assignment.

use tracing::debug;
use vine_core::{EdgeId, GraphError, GraphResult, NodeId, Value};
use vine_graph::Graph;

/// Which table a bulk operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Node,
    Edge,
}

/// Which entities of that kind are selected.
#[derive(Debug, Clone)]
pub enum Select {
    /// Every entity of the kind, in insertion order.
    All,
    /// An explicit key-set, in the given order.
    Keys(Vec<u64>),
}

/// The values to assign across the selection.
#[derive(Debug, Clone)]
pub enum Values {
    /// One value broadcast to every selected entity.
    Uniform(Value),
    /// One value per selected entity, matched positionally.
    PerTarget(Vec<Value>),
}

/// Set one attribute across a selection of nodes or edges.
///
/// Selected keys are checked for existence and positional value sequences
/// for length before any write happens; a failed call changes nothing.
/// Writes to a node's `label` re-synchronize the label index through the
/// store. Returns the count of entities updated.
pub fn execute_set_attr(
    graph: &mut Graph,
    kind: EntityKind,
    name: &str,
    values: Values,
    select: Select,
) -> GraphResult<usize> {
    let updated = match kind {
        EntityKind::Node => {
            let keys: Vec<NodeId> = match &select {
                Select::All => graph.node_ids().collect(),
                Select::Keys(raw) => {
                    let keys: Vec<NodeId> = raw.iter().copied().map(NodeId::new).collect();
                    for key in &keys {
                        if !graph.contains_node(*key) {
                            return Err(GraphError::UnknownId(key.raw()));
                        }
                    }
                    keys
                }
            };
            let spread = spread(values, keys.len())?;
            for (key, value) in keys.iter().zip(spread) {
                graph.set_node_attr(*key, name, value)?;
            }
            keys.len()
        }
        EntityKind::Edge => {
            let keys: Vec<EdgeId> = match &select {
                Select::All => graph.edge_ids().collect(),
                Select::Keys(raw) => {
                    let keys: Vec<EdgeId> = raw.iter().copied().map(EdgeId::new).collect();
                    for key in &keys {
                        if !graph.contains_edge(*key) {
                            return Err(GraphError::UnknownEdgeId(key.raw()));
                        }
                    }
                    keys
                }
            };
            let spread = spread(values, keys.len())?;
            for (key, value) in keys.iter().zip(spread) {
                graph.set_edge_attr(*key, name, value)?;
            }
            keys.len()
        }
    };

    debug!(?kind, attr = name, updated, "attribute set");
    Ok(updated)
}

/// Expand the assignment to one value per selected key.
fn spread(values: Values, cardinality: usize) -> GraphResult<Vec<Value>> {
    match values {
        Values::Uniform(value) => Ok(vec![value; cardinality]),
        Values::PerTarget(sequence) => {
            if sequence.len() != cardinality {
                return Err(GraphError::LengthMismatch {
                    expected: cardinality,
                    actual: sequence.len(),
                });
            }
            Ok(sequence)
        }
    }
}
