use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId};

/// A route with its total edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    pub nodes: Vec<NodeId>,
    pub cost: f64,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    dist: f64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Minimum total weight from `start` to `goal`, or `f64::INFINITY` if unreachable.
///
/// Dijkstra with early exit when the goal is popped. Correct only for
/// non-negative weights, which [`Graph::add_edge`] enforces.
pub fn shortest_path_cost(graph: &Graph, start: NodeId, goal: NodeId) -> f64 {
    dijkstra(graph, start, goal)
        .map(|(cost, _)| cost)
        .unwrap_or(f64::INFINITY)
}

/// Minimum-weight route from `start` to `goal`, including both endpoints.
///
/// Returns None if the goal is unreachable or either node is not in the graph.
pub fn shortest_path(graph: &Graph, start: NodeId, goal: NodeId) -> Option<WeightedPath> {
    let (cost, parents) = dijkstra(graph, start, goal)?;

    let mut nodes = vec![goal];
    let mut current = goal;
    while current != start {
        current = parents[current as usize]?;
        nodes.push(current);
    }
    nodes.reverse();

    Some(WeightedPath { nodes, cost })
}

/// Core loop shared by both entry points. Returns the goal distance and the
/// parent pointer table at the moment the goal was settled.
fn dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> Option<(f64, Vec<Option<NodeId>>)> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut parents: Vec<Option<NodeId>> = vec![None; n];
    let mut queue = BinaryHeap::new();

    dist[start as usize] = 0.0;
    queue.push(QueueEntry { dist: 0.0, node: start });

    while let Some(QueueEntry { dist: d, node }) = queue.pop() {
        if node == goal {
            return Some((d, parents));
        }
        // Stale entry superseded by a shorter push
        if d > dist[node as usize] {
            continue;
        }

        for edge in graph.neighbors_out(node) {
            let candidate = d + edge.weight;
            let slot = edge.target as usize;
            if candidate < dist[slot] {
                dist[slot] = candidate;
                parents[slot] = Some(node);
                queue.push(QueueEntry {
                    dist: candidate,
                    node: edge.target,
                });
            }
        }
    }

    None
}
