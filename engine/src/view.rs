//! Read-only projections of the tables.
//!
//! These never fail: an empty graph projects to an empty listing.

use vine_core::{NodeId, Value};
use vine_graph::Graph;

use crate::ops::EntityKind;

/// How `get_edges` shapes its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    /// One `"from->to"` string per edge.
    Pairs,
    /// One from/to row per edge.
    Table,
    /// Two parallel lists, from-column and to-column.
    Endpoints,
}

/// Whether endpoints render as raw ids or label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    ById,
    ByLabel,
}

/// One row of the tabular shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub from: String,
    pub to: String,
}

/// The edge table's (source, target) pairs in the requested shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListing {
    Pairs(Vec<String>),
    Table(Vec<EdgeRow>),
    Endpoints { from: Vec<String>, to: Vec<String> },
}

impl EdgeListing {
    /// Whether the listing came from an empty edge table.
    pub fn is_empty(&self) -> bool {
        match self {
            EdgeListing::Pairs(pairs) => pairs.is_empty(),
            EdgeListing::Table(rows) => rows.is_empty(),
            EdgeListing::Endpoints { from, .. } => from.is_empty(),
        }
    }
}

fn endpoint_text(graph: &Graph, id: NodeId, addressing: Addressing) -> String {
    match addressing {
        Addressing::ById => id.to_string(),
        // Endpoints of live edges always exist; the fallback keeps this
        // projection total rather than panicking on a broken invariant.
        Addressing::ByLabel => graph
            .get_node(id)
            .map(|node| node.label())
            .unwrap_or_else(|| id.to_string()),
    }
}

/// Project the edge table's endpoint pairs, in insertion order.
pub fn edge_listing(graph: &Graph, shape: EdgeShape, addressing: Addressing) -> EdgeListing {
    let pairs: Vec<(String, String)> = graph
        .edges()
        .map(|edge| {
            (
                endpoint_text(graph, edge.source, addressing),
                endpoint_text(graph, edge.target, addressing),
            )
        })
        .collect();

    match shape {
        EdgeShape::Pairs => EdgeListing::Pairs(
            pairs
                .into_iter()
                .map(|(from, to)| format!("{}->{}", from, to))
                .collect(),
        ),
        EdgeShape::Table => EdgeListing::Table(
            pairs
                .into_iter()
                .map(|(from, to)| EdgeRow { from, to })
                .collect(),
        ),
        EdgeShape::Endpoints => {
            let (from, to) = pairs.into_iter().unzip();
            EdgeListing::Endpoints { from, to }
        }
    }
}

/// One attribute across a whole table: display key to value, in insertion
/// order. Entities without the attribute are omitted, not defaulted.
pub fn attribute_listing(graph: &Graph, kind: EntityKind, name: &str) -> Vec<(String, Value)> {
    match kind {
        EntityKind::Node => graph
            .nodes()
            .filter_map(|node| {
                node.get_attr(name)
                    .map(|value| (node.id.to_string(), value.clone()))
            })
            .collect(),
        EntityKind::Edge => graph
            .edges()
            .filter_map(|edge| {
                edge.get_attr(name)
                    .map(|value| (edge.endpoint_key(), value.clone()))
            })
            .collect(),
    }
}
