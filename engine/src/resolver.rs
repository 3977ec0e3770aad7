//! Address resolution.
//!
//! An address is either a literal node id or a label. A token that is
//! syntactically numeric is always an id literal; everything else is a
//! label looked up through the label index. A label borne by more than one
//! node is an error, never an arbitrary pick.

use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;
use vine_core::{GraphError, GraphResult, NodeId};
use vine_graph::Graph;

static NUMERIC_TOKEN: OnceLock<Regex> = OnceLock::new();

fn is_numeric_token(token: &str) -> bool {
    NUMERIC_TOKEN
        .get_or_init(|| Regex::new(r"^[0-9]+$").expect("literal pattern"))
        .is_match(token)
}

/// A node address: literal id or label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A literal node identifier.
    Id(u64),
    /// A label to look up.
    Label(String),
}

impl Address {
    /// Classify a raw token. Numeric tokens are id literals, everything
    /// else is a label. A digit run too long for u64 is treated as a label,
    /// which then fails resolution as an unknown label rather than panicking.
    pub fn parse(token: &str) -> Self {
        if is_numeric_token(token) {
            if let Ok(raw) = token.parse::<u64>() {
                return Address::Id(raw);
            }
        }
        Address::Label(token.to_string())
    }
}

impl From<u64> for Address {
    fn from(raw: u64) -> Self {
        Address::Id(raw)
    }
}

impl From<NodeId> for Address {
    fn from(id: NodeId) -> Self {
        Address::Id(id.raw())
    }
}

impl From<&str> for Address {
    fn from(token: &str) -> Self {
        Address::parse(token)
    }
}

impl From<String> for Address {
    fn from(token: String) -> Self {
        Address::parse(&token)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Id(raw) => write!(f, "{}", raw),
            Address::Label(label) => write!(f, "{}", label),
        }
    }
}

/// Resolve one address to the node currently bearing it.
pub fn resolve(graph: &Graph, address: &Address) -> GraphResult<NodeId> {
    match address {
        Address::Id(raw) => {
            let id = NodeId::new(*raw);
            if graph.contains_node(id) {
                Ok(id)
            } else {
                Err(GraphError::UnknownId(*raw))
            }
        }
        Address::Label(label) => {
            let mut holders = graph.labeled(label);
            match (holders.next(), holders.next()) {
                (Some(id), None) => Ok(id),
                (Some(_), Some(_)) => {
                    Err(GraphError::ambiguous_label(label, graph.label_count(label)))
                }
                (None, _) => Err(GraphError::UnknownLabel(label.clone())),
            }
        }
    }
}

/// Resolve a bulk from/to argument, each token independently.
///
/// The first failure wraps into [`GraphError::UnresolvedAddress`] and fails
/// the whole call; callers mutate nothing until every token has resolved.
pub fn resolve_all(graph: &Graph, addresses: &[Address]) -> GraphResult<Vec<NodeId>> {
    addresses
        .iter()
        .map(|address| {
            resolve(graph, address)
                .map_err(|reason| GraphError::unresolved(address.to_string(), reason))
        })
        .collect()
}
