//! Pipeline Module - the submitted input record
//!
//! Contains the caller-facing types:
//! - `types`: Node, Edge, Pipeline

mod types;

// Re-export public types
pub use types::{Edge, Node, Pipeline};
