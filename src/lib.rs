//! Skein - pipeline graph analyzer
//!
//! Given a submitted pipeline (a list of node ids and a list of directed
//! edges), report its size and whether the graph is acyclic.
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`pipeline`] | Input record: `Node`, `Edge`, `Pipeline` (JSON/YAML via serde) |
//! | [`dag`] | `PipelineGraph` adjacency, cycle detection, the `analyze` operation |
//! | [`error`] | Error types with stable codes and fix suggestions |
//!
//! The analysis itself is a pure, synchronous, total function: it builds
//! per-call state only, never fails on well-formed input, and tolerates
//! duplicate node ids and dangling edge endpoints by design. Strict
//! rejection of those is the opt-in [`validate_strict`].

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL - submitted pipeline types
// ═══════════════════════════════════════════════════════════════
pub mod pipeline;

// ═══════════════════════════════════════════════════════════════
// APPLICATION LAYER - graph analysis
// ═══════════════════════════════════════════════════════════════
pub mod dag;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - error handling
// ═══════════════════════════════════════════════════════════════
pub mod error;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

// Error types
pub use error::{FixSuggestion, Result, SkeinError};

// Pipeline types (Domain Model)
pub use pipeline::{Edge, Node, Pipeline};

// DAG types (Application Layer)
pub use dag::{analyze, validate_strict, Analysis, PipelineGraph};
