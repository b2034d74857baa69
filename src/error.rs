//! Skein Error Types with Error Codes
//!
//! Error code ranges:
//! - SKEIN-000-009: Pipeline/input errors
//! - SKEIN-010-019: Graph errors
//! - SKEIN-020-029: Strict validation errors
//! - SKEIN-090-099: IO/format errors
//!
//! Uses miette for fancy terminal error display.

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkeinError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for fancy terminal error display.
///
/// The core analysis path never constructs these: `analyze` is a total
/// function. Errors arise at the surface (file loading, `check` mode).
#[derive(Error, Debug, Diagnostic)]
pub enum SkeinError {
    // ═══════════════════════════════════════════
    // PIPELINE/INPUT ERRORS (000-009)
    // ═══════════════════════════════════════════
    #[error("[SKEIN-001] Pipeline file not found: {path}")]
    #[diagnostic(code(skein::pipeline_not_found), help("Check the file path exists"))]
    PipelineNotFound { path: String },

    #[error("[SKEIN-002] Pipeline validation failed: {reason}")]
    #[diagnostic(
        code(skein::validation_error),
        help("Check the document has 'nodes' and 'edges' lists")
    )]
    ValidationError { reason: String },

    // ═══════════════════════════════════════════
    // GRAPH ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[SKEIN-010] Cycle detected in pipeline: {cycle}")]
    #[diagnostic(
        code(skein::cycle_detected),
        help("Remove the edge that closes the cycle")
    )]
    CycleDetected { cycle: String },

    // ═══════════════════════════════════════════
    // STRICT VALIDATION (020-029)
    // ═══════════════════════════════════════════
    #[error("[SKEIN-020] Duplicate node id '{id}'")]
    #[diagnostic(code(skein::duplicate_node), help("Node ids must be unique"))]
    DuplicateNode { id: String },

    #[error("[SKEIN-021] Edge ({src} → {target}) references undeclared source '{src}'")]
    #[diagnostic(
        code(skein::dangling_edge_source),
        help("Declare the source node or remove the edge")
    )]
    DanglingEdgeSource { src: String, target: String },

    #[error("[SKEIN-022] Edge ({src} → {target}) references undeclared target '{target}'")]
    #[diagnostic(
        code(skein::dangling_edge_target),
        help("Declare the target node or remove the edge")
    )]
    DanglingEdgeTarget { src: String, target: String },

    // ═══════════════════════════════════════════
    // IO / FORMAT ERRORS (090-099)
    // ═══════════════════════════════════════════
    #[error("[SKEIN-090] IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("[SKEIN-091] JSON error: {0}")]
    #[diagnostic(code(skein::json_parse), help("Check JSON syntax"))]
    JsonError(#[from] serde_json::Error),

    #[error("[SKEIN-092] YAML parse error: {0}")]
    #[diagnostic(
        code(skein::yaml_parse),
        help("Check YAML syntax: indentation must be consistent")
    )]
    YamlParse(#[from] serde_yaml::Error),
}

impl SkeinError {
    /// Get the error code (e.g., "SKEIN-001")
    pub fn code(&self) -> &'static str {
        match self {
            Self::PipelineNotFound { .. } => "SKEIN-001",
            Self::ValidationError { .. } => "SKEIN-002",
            Self::CycleDetected { .. } => "SKEIN-010",
            Self::DuplicateNode { .. } => "SKEIN-020",
            Self::DanglingEdgeSource { .. } => "SKEIN-021",
            Self::DanglingEdgeTarget { .. } => "SKEIN-022",
            Self::IoError(_) => "SKEIN-090",
            Self::JsonError(_) => "SKEIN-091",
            Self::YamlParse(_) => "SKEIN-092",
        }
    }
}

impl FixSuggestion for SkeinError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            SkeinError::PipelineNotFound { .. } => Some("Check the file path exists"),
            SkeinError::ValidationError { .. } => {
                Some("Check the document has 'nodes' and 'edges' lists")
            }
            SkeinError::CycleDetected { .. } => {
                Some("Remove the edge that closes the cycle")
            }
            SkeinError::DuplicateNode { .. } => Some("Node ids must be unique"),
            SkeinError::DanglingEdgeSource { .. } => {
                Some("Declare the source node or remove the edge")
            }
            SkeinError::DanglingEdgeTarget { .. } => {
                Some("Declare the target node or remove the edge")
            }
            SkeinError::IoError(_) => Some("Check file path and permissions"),
            SkeinError::JsonError(_) => Some("Check JSON syntax"),
            SkeinError::YamlParse(_) => Some("Check YAML syntax: indentation and quoting"),
        }
    }
}
