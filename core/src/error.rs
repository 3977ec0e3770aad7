//! Common error types for Vine.

use thiserror::Error;

/// Errors that can occur during graph operations.
///
/// Every kind is a recoverable-by-caller condition. Operations validate all
/// addresses and arguments before mutating any table, so a returned error
/// always means the graph is untouched.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A numeric address named a node id that is not in the node table.
    #[error("No node with id {0}")]
    UnknownId(u64),

    /// An edge key-set named an edge id that is not in the edge table.
    #[error("No edge with id {0}")]
    UnknownEdgeId(u64),

    /// A label address is borne by no node.
    #[error("No node bears the label \"{0}\"")]
    UnknownLabel(String),

    /// A label address is borne by more than one node.
    #[error("Label \"{label}\" is ambiguous: {count} nodes bear it")]
    AmbiguousLabel { label: String, count: usize },

    /// A token in a bulk from/to argument failed to resolve.
    #[error("Address \"{token}\" could not be resolved: {reason}")]
    UnresolvedAddress {
        token: String,
        #[source]
        reason: Box<GraphError>,
    },

    /// No edge matches the resolved ordered endpoint pair.
    #[error("No edge from node {source} to node {target}")]
    NoSuchEdge {
        // Raw identifier spelling (same field name) stops thiserror 1.x from
        // inferring this field as the error source, which u64 cannot be.
        r#source: u64,
        target: u64,
    },

    /// A positional value sequence disagrees with the selector's cardinality.
    #[error("Length mismatch: {expected} targets but {actual} values")]
    LengthMismatch { expected: usize, actual: usize },

    /// A bulk-imported entity collides with an identifier already in use.
    #[error("Identifier {0} is already in use")]
    IdInUse(u64),
}

impl GraphError {
    /// Wrap a resolution failure for one token of a bulk argument.
    pub fn unresolved(token: impl Into<String>, reason: GraphError) -> Self {
        Self::UnresolvedAddress {
            token: token.into(),
            reason: Box::new(reason),
        }
    }

    pub fn ambiguous_label(label: impl Into<String>, count: usize) -> Self {
        Self::AmbiguousLabel {
            label: label.into(),
            count,
        }
    }
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
