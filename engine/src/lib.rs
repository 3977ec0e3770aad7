//! Vine Mutation Engine
//!
//! The externally visible core: every public operation resolves its
//! addresses, validates its arguments, and only then mutates the tables,
//! so a failed call leaves the graph exactly as it found it.
//!
//! # Module Structure
//!
//! - `executor` - The GraphEngine facade that owns the graph
//! - `ops/` - Individual operation implementations (add_node, add_edge, remove_node, remove_edge, set_attr)
//! - `resolver` - Dual addressing: numeric id literals and label lookup
//! - `result` - Outcome types for mutations
//! - `view` - Read-only projections (edge listings, attribute listings)

mod executor;
mod ops;
mod resolver;
mod result;
mod view;

pub use executor::GraphEngine;
pub use ops::{EntityKind, Select, Values};
pub use resolver::{resolve, resolve_all, Address};
pub use result::{NodeAdded, NodeRemoved};
pub use view::{Addressing, EdgeListing, EdgeRow, EdgeShape};
