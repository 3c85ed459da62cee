//! graph-dls-core: depth-limited search with an optimality oracle.
//!
//! A pure Rust library holding a small weighted digraph, a depth-limited
//! depth-first search that returns the first route it finds, and a Dijkstra
//! baseline used to judge whether that route was the cheapest one.
//! No terminal or file I/O: presentation lives in the `graph-dls` binary.

mod dls;
mod error;
mod graph;
mod oracle;
mod search;

pub use dls::{depth_limited_search, path_cost, DlsResult};
pub use error::GraphError;
pub use graph::{Edge, EdgeRecord, Graph, NodeId};
pub use oracle::{shortest_path, shortest_path_cost, WeightedPath};
pub use search::{run, run_with_probe, SearchOutcome, SearchProbe, SearchRequest};
