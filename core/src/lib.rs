//! Vine Core Types
//!
//! This crate provides the foundational types used throughout the Vine store:
//! - Identity types (NodeId, EdgeId)
//! - Value types (the scalar Value enum and the Attributes map)
//! - Entity structures (Node, Edge)
//! - Common error types

mod entity;
mod error;
mod id;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use value::*;
