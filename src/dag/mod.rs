//! DAG Module - adjacency structure and cycle detection
//!
//! Contains the graph representation and the analysis operation:
//! - `graph`: PipelineGraph built from a submitted pipeline
//! - `analyze`: node/edge counts plus the DAG check
//! - `validate`: opt-in strict input validation
//!
//! PipelineGraph is immutable after construction; traversal bookkeeping
//! (color marks, frame stack) lives in per-call state.

mod analyze;
mod graph;
mod validate;

// Re-export public types
pub use analyze::{analyze, Analysis};
pub use graph::PipelineGraph;
pub use validate::validate_strict;
