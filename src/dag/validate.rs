//! Strict pipeline validation - opt-in rejection of loose inputs
//!
//! The default analysis path tolerates duplicate node ids and dangling
//! edge endpoints. This is the caller-side validator for rejecting them
//! up front (`skein check --strict`); the detector itself never invokes
//! it.
//!
//! Error codes:
//! - SKEIN-020: Duplicate node id
//! - SKEIN-021: Edge source references undeclared node
//! - SKEIN-022: Edge target references undeclared node

use rustc_hash::FxHashSet;

use crate::error::SkeinError;
use crate::pipeline::Pipeline;

/// Validate a pipeline strictly: unique node ids, both edge endpoints
/// declared. Reports the first violation in input order.
pub fn validate_strict(pipeline: &Pipeline) -> Result<(), SkeinError> {
    let mut declared: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(pipeline.nodes.len(), Default::default());

    for node in &pipeline.nodes {
        if !declared.insert(node.id.as_str()) {
            return Err(SkeinError::DuplicateNode {
                id: node.id.clone(),
            });
        }
    }

    for edge in &pipeline.edges {
        if !declared.contains(edge.source.as_str()) {
            return Err(SkeinError::DanglingEdgeSource {
                src: edge.source.clone(),
                target: edge.target.clone(),
            });
        }
        if !declared.contains(edge.target.as_str()) {
            return Err(SkeinError::DanglingEdgeTarget {
                src: edge.source.clone(),
                target: edge.target.clone(),
            });
        }
    }

    Ok(())
}
