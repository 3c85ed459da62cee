use std::collections::HashSet;

use graph_dls_core::{
    depth_limited_search, path_cost, run, shortest_path_cost, EdgeRecord, Graph, NodeId,
    SearchRequest,
};
use proptest::prelude::*;

const MAX_NODES: usize = 7;

/// Small random digraph plus a start, goal and depth limit inside it.
///
/// Every node is registered up front, then edges with integral non-negative
/// weights (exact float sums keep cost equality meaningful).
fn scenario() -> impl Strategy<Value = (Graph, NodeId, NodeId, i64)> {
    (2..=MAX_NODES).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, 0u32..20), 0..n * 3);
        (edges, 0..n as NodeId, 0..n as NodeId, -1i64..8).prop_map(move |(edges, s, t, limit)| {
            let mut g = Graph::with_capacity(n);
            for i in 0..n {
                g.add_node(&format!("N{i}"));
            }
            g.load_edges(edges.into_iter().map(|(from, to, w)| {
                EdgeRecord::new(format!("N{from}"), format!("N{to}"), f64::from(w))
            }))
            .expect("generated weights are non-negative");
            (g, s, t, limit)
        })
    })
}

proptest! {
    #[test]
    fn oracle_is_lower_bound((g, s, t, limit) in scenario()) {
        let result = depth_limited_search(&g, s, t, limit);
        if let Some(path) = &result.path {
            let cost = path_cost(&g, path).unwrap();
            prop_assert!(shortest_path_cost(&g, s, t) <= cost);
        }
    }

    #[test]
    fn search_is_deterministic((g, s, t, limit) in scenario()) {
        let first = depth_limited_search(&g, s, t, limit);
        let second = depth_limited_search(&g, s, t, limit);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn path_is_well_formed((g, s, t, limit) in scenario()) {
        let result = depth_limited_search(&g, s, t, limit);
        prop_assert_eq!(result.explored.first().copied(), Some(s));

        if let Some(path) = &result.path {
            prop_assert_eq!(path.first().copied(), Some(s));
            prop_assert_eq!(path.last().copied(), Some(t));
            prop_assert!(path.len() as i64 <= limit.max(0) + 1);

            let explored: HashSet<NodeId> = result.explored.iter().copied().collect();
            prop_assert!(path.iter().all(|n| explored.contains(n)));
            // Every hop is a real edge
            prop_assert!(path_cost(&g, path).is_ok());
        }
    }

    #[test]
    fn explored_has_no_repeats((g, s, t, limit) in scenario()) {
        let result = depth_limited_search(&g, s, t, limit);
        let distinct: HashSet<NodeId> = result.explored.iter().copied().collect();
        prop_assert_eq!(distinct.len(), result.explored.len());
        prop_assert_eq!(result.visited, result.explored.len());
    }

    #[test]
    fn unreachable_goal_never_found((g, s, t, limit) in scenario()) {
        if shortest_path_cost(&g, s, t).is_infinite() {
            prop_assert!(depth_limited_search(&g, s, t, limit).path.is_none());
        }
    }

    #[test]
    fn optimal_flag_matches_costs((g, s, t, limit) in scenario()) {
        let start = g.name(s).unwrap().to_string();
        let goal = g.name(t).unwrap().to_string();
        let out = run(&g, &SearchRequest::new(start, goal, limit)).unwrap();
        prop_assert_eq!(out.optimal, out.dls_cost == out.optimal_cost);
        prop_assert!(out.optimal_cost <= out.dls_cost);
    }
}

#[test]
fn disconnected_pair_reports_not_found() {
    let mut g = Graph::new();
    g.load_edges(vec![
        EdgeRecord::new("A", "B", 1.0),
        EdgeRecord::new("C", "D", 1.0),
    ])
    .unwrap();

    let out = run(&g, &SearchRequest::new("A", "D", 10)).unwrap();
    assert!(!out.found());
    assert!(out.optimal_cost.is_infinite());
    assert!(out.dls_cost.is_infinite());
}

#[test]
fn sample_scenarios() {
    let g = Graph::sample();

    let out = run(&g, &SearchRequest::new("A", "D", 3)).unwrap();
    assert_eq!(out.path.as_ref().map(|p| p.join(" → ")).as_deref(), Some("A → B → C → D"));
    assert_eq!(out.dls_cost, 12.0);
    assert_eq!(out.optimal_cost, 5.0);
    assert!(!out.optimal);

    let out = run(&g, &SearchRequest::new("A", "D", 0)).unwrap();
    assert!(!out.found());

    let out = run(&g, &SearchRequest::new("A", "A", 0)).unwrap();
    assert_eq!(out.path, Some(vec!["A".to_string()]));
    assert!(out.optimal);
}
