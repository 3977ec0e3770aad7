//! Vine Graph Storage
//!
//! The in-memory tables behind the store: node table, edge table, label
//! index, adjacency index, and the identity allocator. Tables are keyed by
//! monotonically issued ids, so id-order iteration is insertion order.
//!
//! Also home to the two collaborator surfaces: a serializable read-only
//! snapshot (rendering) and direct table population (bulk import).

mod index;
mod snapshot;
mod store;

pub use index::{AdjacencyIndex, LabelIndex};
pub use snapshot::{snapshot, EdgeSnapshot, GraphSnapshot, JsonValue, NodeSnapshot};
pub use store::Graph;
