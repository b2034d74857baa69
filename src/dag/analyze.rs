//! Pipeline analysis - the output record

use serde::{Deserialize, Serialize};

use crate::pipeline::Pipeline;

use super::graph::PipelineGraph;

/// Result record for one pipeline analysis
///
/// `num_nodes` and `num_edges` are the raw input-list lengths: no
/// deduplication, no dangling-edge filtering. Only the adjacency mapping
/// used for the DAG check filters anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

/// Analyze a pipeline: node/edge counts plus the DAG check.
///
/// Total over any well-formed pipeline; there is no failure path. Each
/// call builds its own adjacency mapping and traversal state, so
/// concurrent calls are independent and repeated calls on the same input
/// yield identical records.
pub fn analyze(pipeline: &Pipeline) -> Analysis {
    let graph = PipelineGraph::from_pipeline(pipeline);
    let analysis = Analysis {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        is_dag: graph.is_dag(),
    };

    tracing::debug!(
        num_nodes = analysis.num_nodes,
        num_edges = analysis.num_edges,
        is_dag = analysis.is_dag,
        "pipeline analyzed"
    );

    analysis
}
