//! PipelineGraph - adjacency structure built from a submitted pipeline
//!
//! Performance notes:
//! - Arc<str> for zero-cost sharing of node ids (one allocation per unique id)
//! - FxHashMap/FxHashSet for faster non-crypto hashing
//! - SmallVec for stack-allocated small neighbor lists (0-4 items)
//!
//! Cycle detection uses the DFS three-color algorithm with an explicit
//! frame stack, so traversal depth is bounded by heap memory rather than
//! the call stack even on adversarially deep chains.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::error::SkeinError;
use crate::pipeline::Pipeline;

/// Stack-allocated neighbor list: most nodes have 0-4 outgoing edges
pub type EdgeVec = SmallVec<[Arc<str>; 4]>;

/// DFS node state. Gray nodes are on the current exploration path;
/// a Gray neighbor is a back-edge, and a back-edge is a cycle.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Directed graph of pipeline nodes and their outgoing edges
///
/// The adjacency mapping holds exactly one entry per declared node id,
/// regardless of edge count. Edges from undeclared sources are dropped at
/// build time; edges to undeclared targets are kept, and the target acts
/// as a sink (it has no adjacency entry, so it never expands further).
/// That asymmetry matches the submitted-pipeline contract and is
/// deliberate.
pub struct PipelineGraph {
    /// node id -> outgoing edge targets, in edge order
    adjacency: FxHashMap<Arc<str>, EdgeVec>,
    /// declared node ids, in input order (duplicates preserved)
    node_ids: Vec<Arc<str>>,
    /// declared-node membership, for the edge-source filter
    node_set: FxHashSet<Arc<str>>,
}

impl PipelineGraph {
    pub fn from_pipeline(pipeline: &Pipeline) -> Self {
        let capacity = pipeline.nodes.len();
        let mut adjacency: FxHashMap<Arc<str>, EdgeVec> =
            FxHashMap::with_capacity_and_hasher(capacity, Default::default());
        let mut node_ids: Vec<Arc<str>> = Vec::with_capacity(capacity);
        let mut node_set: FxHashSet<Arc<str>> =
            FxHashSet::with_capacity_and_hasher(capacity, Default::default());

        for node in &pipeline.nodes {
            // One Arc per unique id; duplicate declarations share it
            let id: Arc<str> = match node_set.get(node.id.as_str()) {
                Some(existing) => Arc::clone(existing),
                None => {
                    let fresh: Arc<str> = Arc::from(node.id.as_str());
                    node_set.insert(Arc::clone(&fresh));
                    fresh
                }
            };
            node_ids.push(Arc::clone(&id));
            adjacency.entry(id).or_default();
        }

        for edge in &pipeline.edges {
            // Undeclared sources contribute nothing
            let Some(source) = node_set.get(edge.source.as_str()) else {
                continue;
            };
            let target: Arc<str> = node_set
                .get(edge.target.as_str())
                .cloned()
                .unwrap_or_else(|| Arc::from(edge.target.as_str()));

            adjacency.entry(Arc::clone(source)).or_default().push(target);
        }

        Self {
            adjacency,
            node_ids,
            node_set,
        }
    }

    /// Check if a node id was declared in the pipeline
    #[inline]
    pub fn contains(&self, node_id: &str) -> bool {
        self.node_set.contains(node_id)
    }

    /// Get a node's outgoing edge targets, in edge order
    #[inline]
    pub fn successors(&self, node_id: &str) -> &[Arc<str>] {
        static EMPTY: &[Arc<str>] = &[];
        self.adjacency.get(node_id).map_or(EMPTY, SmallVec::as_slice)
    }

    /// The analysis boolean: true iff no cycle is reachable from any
    /// declared node.
    pub fn is_dag(&self) -> bool {
        self.detect_cycles().is_ok()
    }

    /// Detect cycles using DFS three-color marking.
    ///
    /// Returns `Ok(())` if acyclic, `Err(SkeinError::CycleDetected)` with
    /// the first cycle path found otherwise. Starting-node order and edge
    /// order affect only which cycle is named, never the verdict.
    ///
    /// Iterative: frames of (node, next-neighbor-index) replace the
    /// recursive probe, so a deep chain cannot overflow the call stack.
    pub fn detect_cycles(&self) -> Result<(), SkeinError> {
        static EMPTY: &[Arc<str>] = &[];

        // Declared nodes start White. Undeclared edge targets are absent
        // from the map: they are treated as White on first encounter and
        // have no successors, so they behave as sinks.
        let mut colors: FxHashMap<Arc<str>, Color> = self
            .node_ids
            .iter()
            .map(|id| (Arc::clone(id), Color::White))
            .collect();
        let mut frames: Vec<(Arc<str>, usize)> = Vec::new();

        for start in &self.node_ids {
            if colors.get(start) != Some(&Color::White) {
                continue;
            }
            colors.insert(Arc::clone(start), Color::Gray);
            frames.push((Arc::clone(start), 0));

            while let Some(frame) = frames.last_mut() {
                let node = Arc::clone(&frame.0);
                let neighbors = self.adjacency.get(&node).map_or(EMPTY, SmallVec::as_slice);

                if frame.1 < neighbors.len() {
                    let next = Arc::clone(&neighbors[frame.1]);
                    frame.1 += 1;

                    match colors.get(&next) {
                        Some(Color::Gray) => {
                            // Back-edge: the frames from `next` onward are the cycle
                            let cycle_start = frames
                                .iter()
                                .position(|(id, _)| id.as_ref() == next.as_ref())
                                .unwrap_or(0);
                            let cycle: Vec<&str> = frames[cycle_start..]
                                .iter()
                                .map(|(id, _)| id.as_ref())
                                .collect();
                            return Err(SkeinError::CycleDetected {
                                cycle: format!("{} → {}", cycle.join(" → "), next),
                            });
                        }
                        Some(Color::Black) => {} // Already fully explored
                        _ => {
                            colors.insert(Arc::clone(&next), Color::Gray);
                            frames.push((next, 0));
                        }
                    }
                } else {
                    // All neighbors examined: leave the path, stay done
                    colors.insert(node, Color::Black);
                    frames.pop();
                }
            }
        }

        Ok(())
    }
}
