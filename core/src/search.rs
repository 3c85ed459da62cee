use serde::Serialize;
use tracing::debug;

use crate::dls::{depth_limited_search, path_cost};
use crate::error::GraphError;
use crate::graph::Graph;
use crate::oracle::shortest_path;

/// Hooks around the depth-limited search phase of [`run_with_probe`].
///
/// The oracle runs outside the probed window, so timing and memory
/// measurements cover the search alone.
pub trait SearchProbe {
    fn search_started(&mut self) {}
    fn search_finished(&mut self) {}
}

impl SearchProbe for () {}

/// One search invocation, with node names as the graph stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub start: String,
    pub goal: String,
    pub limit: i64,
}

impl SearchRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, limit: i64) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            limit,
        }
    }
}

/// Search result joined with the oracle's verdict.
///
/// Costs are `f64::INFINITY` when no route exists; JSON renders them as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub request: SearchRequest,
    pub path: Option<Vec<String>>,
    pub explored: Vec<String>,
    pub visited_count: usize,
    pub explored_count: usize,
    pub dls_cost: f64,
    pub optimal_cost: f64,
    pub optimal_path: Option<Vec<String>>,
    /// DLS cost equals the oracle cost exactly.
    pub optimal: bool,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

/// Run the depth-limited search and check its cost against the oracle.
pub fn run(graph: &Graph, request: &SearchRequest) -> Result<SearchOutcome, GraphError> {
    run_with_probe(graph, request, &mut ())
}

/// Like [`run`], with `probe` notified immediately before and after the search.
pub fn run_with_probe<P: SearchProbe + ?Sized>(
    graph: &Graph,
    request: &SearchRequest,
    probe: &mut P,
) -> Result<SearchOutcome, GraphError> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;
    debug!(start = %request.start, goal = %request.goal, limit = request.limit, "starting depth-limited search");

    probe.search_started();
    let result = depth_limited_search(graph, start, goal, request.limit);
    probe.search_finished();

    let dls_cost = match &result.path {
        Some(path) => path_cost(graph, path)?,
        None => f64::INFINITY,
    };

    let optimal = shortest_path(graph, start, goal);
    let optimal_cost = optimal.as_ref().map(|p| p.cost).unwrap_or(f64::INFINITY);

    debug!(
        found = result.found(),
        explored = result.explored.len(),
        dls_cost,
        optimal_cost,
        "search finished"
    );

    Ok(SearchOutcome {
        request: request.clone(),
        path: result.path.as_deref().map(|p| graph.names_of(p)),
        explored: graph.names_of(&result.explored),
        visited_count: result.visited,
        explored_count: result.explored.len(),
        dls_cost,
        optimal_cost,
        optimal_path: optimal.map(|p| graph.names_of(&p.nodes)),
        optimal: dls_cost == optimal_cost,
    })
}
