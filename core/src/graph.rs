use std::collections::HashMap;

use crate::error::GraphError;

/// Interned node identifier. Assigned in insertion order starting at 0.
pub type NodeId = u32;

/// A directed weighted edge in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// One edge for bulk loading, endpoints by name.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// In-memory weighted digraph: interned node names + per-node adjacency lists.
///
/// Outgoing edges keep insertion order. Traversals iterate neighbors in that
/// order, so results are deterministic for a given load sequence.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            names: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
        }
    }

    /// The fixed demonstration graph:
    /// A→B:4, A→C:2, B→C:5, B→D:10, C→D:3, D has no outgoing edges.
    pub fn sample() -> Self {
        let mut graph = Self::with_capacity(4);
        let [a, b, c, d] = ["A", "B", "C", "D"].map(|name| graph.add_node(name));
        graph.insert_edge(a, b, 4.0);
        graph.insert_edge(a, c, 2.0);
        graph.insert_edge(b, c, 5.0);
        graph.insert_edge(b, d, 10.0);
        graph.insert_edge(c, d, 3.0);
        graph
    }

    /// Intern a node name, returning its id. Re-adding a known name is a no-op.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len() as NodeId;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Add a directed edge, creating either endpoint if needed.
    ///
    /// Weights must be finite and non-negative. Adding an edge that already
    /// exists overwrites its weight and keeps its position in the neighbor order.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        let from_id = self.add_node(from);
        let to_id = self.add_node(to);
        self.insert_edge(from_id, to_id, weight);
        Ok(())
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        let edges = &mut self.outgoing[from as usize];
        match edges.iter_mut().find(|e| e.target == to) {
            Some(existing) => existing.weight = weight,
            None => edges.push(Edge { target: to, weight }),
        }
    }

    /// Bulk load edges in iteration order. Stops at the first invalid record.
    pub fn load_edges<I>(&mut self, edges: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for record in edges {
            self.add_edge(&record.from, &record.to, record.weight)?;
        }
        Ok(())
    }

    /// Look up a node id by name.
    pub fn resolve(&self, name: &str) -> Result<NodeId, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Resolve a NodeId back to its name.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    /// Map a sequence of ids to owned names, skipping ids not in this graph.
    pub fn names_of(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.name(id))
            .map(str::to_string)
            .collect()
    }

    /// Outgoing edges in declared order. Dead ends and unknown ids yield an empty slice.
    pub fn neighbors_out(&self, id: NodeId) -> &[Edge] {
        self.outgoing
            .get(id as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Weight of the edge `from → to`, if present.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors_out(from)
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        (id as usize) < self.names.len()
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }

    /// All node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(|i| i as NodeId)
    }

    /// All edges as `(from, edge)` pairs, grouped by source in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from as NodeId, e)))
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let name_bytes: usize = self.names.iter().map(|n| n.len()).sum();
        let names_mem = self.names.len() * size_of::<String>() + name_bytes;
        let index_mem = self.index.len() * (size_of::<String>() + size_of::<NodeId>() + 16) + name_bytes;
        let edges_mem = self.edge_count() * size_of::<Edge>() + self.outgoing.len() * size_of::<Vec<Edge>>();

        names_mem + index_mem + edges_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
