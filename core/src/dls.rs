use std::collections::HashSet;

use tracing::trace;

use crate::error::GraphError;
use crate::graph::{Graph, NodeId};

/// Outcome of a depth-limited search.
#[derive(Debug, Clone, PartialEq)]
pub struct DlsResult {
    /// Start-to-goal route, or None if the limit was exhausted first.
    pub path: Option<Vec<NodeId>>,
    /// Every node entered, in visitation order, including dead-end branches.
    pub explored: Vec<NodeId>,
    /// Distinct nodes marked visited.
    pub visited: usize,
}

impl DlsResult {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Result of exploring one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Success,
    Backtrack,
}

/// Accumulators for one search invocation.
struct SearchState<'g> {
    graph: &'g Graph,
    goal: NodeId,
    visited: HashSet<NodeId>,
    path: Vec<NodeId>,
    explored: Vec<NodeId>,
}

impl<'g> SearchState<'g> {
    fn new(graph: &'g Graph, goal: NodeId) -> Self {
        Self {
            graph,
            goal,
            visited: HashSet::new(),
            path: Vec::new(),
            explored: Vec::new(),
        }
    }

    fn explore(&mut self, node: NodeId, remaining: i64) -> Branch {
        self.visited.insert(node);
        self.path.push(node);
        self.explored.push(node);

        if node == self.goal {
            return Branch::Success;
        }

        if remaining <= 0 {
            self.path.pop();
            trace!(node, "depth limit reached, backtracking");
            return Branch::Backtrack;
        }

        let graph = self.graph;
        for edge in graph.neighbors_out(node) {
            if self.visited.contains(&edge.target) {
                continue;
            }
            if self.explore(edge.target, remaining - 1) == Branch::Success {
                return Branch::Success;
            }
        }

        self.path.pop();
        trace!(node, "neighbors exhausted, backtracking");
        Branch::Backtrack
    }
}

/// Depth-first search from `start` that stops descending after `limit` edges.
///
/// Neighbors are tried in declared order and the first route reaching `goal`
/// wins, so the result is not necessarily the cheapest one. The visited set
/// is shared by the whole search and never cleared on backtrack: a node that
/// failed on one branch is skipped on every later branch, even one that would
/// reach it at a shallower depth.
///
/// A `limit` of zero or below fails every node except the goal itself.
pub fn depth_limited_search(graph: &Graph, start: NodeId, goal: NodeId, limit: i64) -> DlsResult {
    let mut state = SearchState::new(graph, goal);
    let outcome = state.explore(start, limit);

    DlsResult {
        path: match outcome {
            Branch::Success => Some(state.path),
            Branch::Backtrack => None,
        },
        explored: state.explored,
        visited: state.visited.len(),
    }
}

/// Sum of edge weights along consecutive pairs of `path`.
///
/// A single-node or empty path costs 0. Fails if any hop is not an edge.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Result<f64, GraphError> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .weight(pair[0], pair[1])
            .map(|w| total + w)
            .ok_or_else(|| GraphError::MissingEdge {
                from: graph.name(pair[0]).unwrap_or("?").to_string(),
                to: graph.name(pair[1]).unwrap_or("?").to_string(),
            })
    })
}
