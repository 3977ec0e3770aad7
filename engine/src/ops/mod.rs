//! Mutation operation implementations.
//!
//! Each operation is implemented in its own module. Every module follows
//! the same discipline: resolve and validate everything first, mutate only
//! once nothing can fail.

mod add_edge;
mod add_node;
mod remove_edge;
mod remove_node;
mod set_attr;

pub use add_edge::execute_add_edge;
pub use add_node::execute_add_node;
pub use remove_edge::execute_remove_edge;
pub use remove_node::execute_remove_node;
pub use set_attr::{execute_set_attr, EntityKind, Select, Values};
