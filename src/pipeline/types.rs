//! Pipeline Types - the input record
//!
//! A pipeline is the caller-submitted description of a directed graph:
//! a list of node ids plus a list of (source, target) edges. It is
//! ephemeral: parsed at invocation entry, discarded after the analysis.
//!
//! Permissiveness is deliberate: duplicate node ids and dangling edge
//! endpoints are accepted here and tolerated by the detector. Callers
//! wanting rejection opt into [`crate::dag::validate_strict`].

use serde::{Deserialize, Serialize};

/// A single pipeline node. The id is its only attribute.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub id: String,
}

/// Directed edge between two node ids.
///
/// Either endpoint may reference an undeclared node; see the adjacency
/// policy in [`crate::dag::PipelineGraph`].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Pipeline parsed from a submitted document (JSON or YAML)
///
/// Both lists default to empty when absent, so `{}` is a valid
/// (vacuously acyclic) pipeline.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Pipeline {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Pipeline {
    /// Build a pipeline from id and (source, target) string pairs.
    ///
    /// Convenience for tests and benches; the CLI path deserializes.
    pub fn from_parts<'a, N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            nodes: nodes
                .into_iter()
                .map(|id| Node { id: id.to_string() })
                .collect(),
            edges: edges
                .into_iter()
                .map(|(source, target)| Edge {
                    source: source.to_string(),
                    target: target.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ═══════════════════════════════════════════════════════════════
    // PIPELINE PARSING TESTS
    // ═══════════════════════════════════════════════════════════════

    #[test]
    fn test_pipeline_parse_minimal_json() {
        let json = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"source": "a", "target": "b"}]
        }"#;
        let pipeline: Pipeline = serde_json::from_str(json).expect("Failed to parse pipeline");

        assert_eq!(pipeline.nodes.len(), 2);
        assert_eq!(pipeline.nodes[0].id, "a");
        assert_eq!(pipeline.edges.len(), 1);
        assert_eq!(pipeline.edges[0].source, "a");
        assert_eq!(pipeline.edges[0].target, "b");
    }

    #[test]
    fn test_pipeline_parse_empty_document() {
        let pipeline: Pipeline = serde_json::from_str("{}").expect("Failed to parse pipeline");

        assert!(pipeline.nodes.is_empty());
        assert!(pipeline.edges.is_empty());
    }

    #[test]
    fn test_pipeline_parse_missing_edges() {
        let json = r#"{"nodes": [{"id": "solo"}]}"#;
        let pipeline: Pipeline = serde_json::from_str(json).expect("Failed to parse pipeline");

        assert_eq!(pipeline.nodes.len(), 1);
        assert!(pipeline.edges.is_empty());
    }

    #[test]
    fn test_pipeline_parse_yaml() {
        let yaml = r#"
nodes:
  - id: fetch
  - id: transform
edges:
  - source: fetch
    target: transform
"#;
        let pipeline: Pipeline = serde_yaml::from_str(yaml).expect("Failed to parse pipeline");

        assert_eq!(pipeline.nodes.len(), 2);
        assert_eq!(pipeline.edges.len(), 1);
        assert_eq!(pipeline.edges[0].target, "transform");
    }

    #[test]
    fn test_pipeline_parse_rejects_missing_edge_endpoint() {
        // An edge without a target is malformed, not a dangling reference
        let json = r#"{"nodes": [], "edges": [{"source": "a"}]}"#;
        let result: serde_json::Result<Pipeline> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_roundtrips_through_json() {
        let pipeline = Pipeline::from_parts(["a", "b"], [("a", "b")]);
        let json = serde_json::to_string(&pipeline).unwrap();
        let back: Pipeline = serde_json::from_str(&json).unwrap();

        assert_eq!(back.nodes.len(), 2);
        assert_eq!(back.edges.len(), 1);
    }

    #[test]
    fn test_from_parts_preserves_order_and_duplicates() {
        let pipeline = Pipeline::from_parts(["b", "a", "b"], [("a", "b"), ("a", "b")]);

        assert_eq!(pipeline.nodes.len(), 3);
        assert_eq!(pipeline.nodes[0].id, "b");
        assert_eq!(pipeline.nodes[2].id, "b");
        assert_eq!(pipeline.edges.len(), 2);
    }
}
