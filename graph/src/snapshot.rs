//! Read-only snapshot of the graph for rendering collaborators.
//!
//! A snapshot is a plain serializable mirror of the node and edge tables in
//! insertion order. Nothing in the store depends on what a renderer does
//! with it.

use crate::Graph;
use serde::Serialize;
use std::collections::BTreeMap;
use vine_core::Value;

/// Full read-only view of a graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

/// One node entry: id, label text, and all attributes.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: u64,
    pub label: String,
    pub attrs: BTreeMap<String, JsonValue>,
}

/// One edge entry: id, ordered endpoints, and all attributes.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeSnapshot {
    pub id: u64,
    pub source: u64,
    pub target: u64,
    pub attrs: BTreeMap<String, JsonValue>,
}

/// JSON-shaped value mirror of [`Value`].
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<&Value> for JsonValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::Int(*i),
            Value::Float(f) => JsonValue::Float(*f),
            Value::String(s) => JsonValue::String(s.clone()),
        }
    }
}

/// Capture the whole graph. Attribute keys are sorted so output is
/// deterministic regardless of attribute insertion history.
pub fn snapshot(graph: &Graph) -> GraphSnapshot {
    let nodes = graph
        .nodes()
        .map(|node| NodeSnapshot {
            id: node.id.raw(),
            label: node.label(),
            attrs: node
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                .collect(),
        })
        .collect();

    let edges = graph
        .edges()
        .map(|edge| EdgeSnapshot {
            id: edge.id.raw(),
            source: edge.source.raw(),
            target: edge.target.raw(),
            attrs: edge
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                .collect(),
        })
        .collect();

    GraphSnapshot { nodes, edges }
}
