//! Traversal image: the whole graph in neutral colors, explored nodes in
//! blue, and the returned path (nodes and edges) in red.

use std::collections::HashSet;
use std::f64::consts::PI;
use std::path::Path;

use anyhow::{Context, Result};
use graph_dls_core::{Graph, NodeId, SearchOutcome};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const LAYOUT_RADIUS: f64 = 200.0;
const NODE_RADIUS: f64 = 28.0;

const NEUTRAL_NODE: &str = "lightgray";
const NEUTRAL_EDGE: &str = "gray";
const EXPLORED_NODE: &str = "blue";
const PATH_COLOR: &str = "red";

/// Node centers on a circle, first node at the top, clockwise in insertion order.
fn layout(graph: &Graph) -> Vec<(f64, f64)> {
    let n = graph.node_count().max(1) as f64;
    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0 + 20.0);
    graph
        .nodes()
        .map(|id| {
            let angle = -PI / 2.0 + 2.0 * PI * f64::from(id) / n;
            (cx + LAYOUT_RADIUS * angle.cos(), cy + LAYOUT_RADIUS * angle.sin())
        })
        .collect()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the graph and the outcome's explored set and path as an SVG document.
pub fn render_svg(graph: &Graph, outcome: &SearchOutcome) -> String {
    let positions = layout(graph);
    let resolve = |name: &String| graph.resolve(name).ok();

    let explored: HashSet<NodeId> = outcome.explored.iter().filter_map(resolve).collect();
    let path: Vec<NodeId> = outcome
        .path
        .iter()
        .flatten()
        .filter_map(resolve)
        .collect();
    let path_nodes: HashSet<NodeId> = path.iter().copied().collect();
    let path_edges: HashSet<(NodeId, NodeId)> = path.windows(2).map(|w| (w[0], w[1])).collect();

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    ));
    lines.push("  <defs>".to_string());
    for (id, color) in [("arrow-neutral", NEUTRAL_EDGE), ("arrow-path", PATH_COLOR)] {
        lines.push(format!(
            r#"    <marker id="{id}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="8" markerHeight="8" orient="auto"><path d="M0,0 L10,5 L0,10 z" fill="{color}"/></marker>"#
        ));
    }
    lines.push("  </defs>".to_string());
    lines.push(r#"  <rect width="100%" height="100%" fill="white"/>"#.to_string());
    lines.push(format!(
        r#"  <text x="{}" y="36" text-anchor="middle" font-size="20">Depth-Limited Search Traversal</text>"#,
        WIDTH / 2.0
    ));

    // Edges first so nodes paint over the line ends
    for (from, edge) in graph.edges() {
        let (x1, y1) = positions[from as usize];
        let (x2, y2) = positions[edge.target as usize];
        let on_path = path_edges.contains(&(from, edge.target));
        let (color, width, marker) = if on_path {
            (PATH_COLOR, 2.5, "arrow-path")
        } else {
            (NEUTRAL_EDGE, 1.0, "arrow-neutral")
        };

        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= 2.0 * NODE_RADIUS {
            continue;
        }
        let (ux, uy) = (dx / len, dy / len);
        let (sx, sy) = (x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
        let (ex, ey) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
        lines.push(format!(
            r#"  <line x1="{sx:.1}" y1="{sy:.1}" x2="{ex:.1}" y2="{ey:.1}" stroke="{color}" stroke-width="{width}" marker-end="url(#{marker})"/>"#
        ));

        // Offset the weight label to the left of travel so opposing edges don't collide
        let (lx, ly) = ((x1 + x2) / 2.0 + uy * 12.0, (y1 + y2) / 2.0 - ux * 12.0);
        lines.push(format!(
            r#"  <text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" font-size="13" fill="black">{}</text>"#,
            crate::report::format_cost(edge.weight)
        ));
    }

    for id in graph.nodes() {
        let (x, y) = positions[id as usize];
        let fill = if path_nodes.contains(&id) {
            PATH_COLOR
        } else if explored.contains(&id) {
            EXPLORED_NODE
        } else {
            NEUTRAL_NODE
        };
        let text_color = if fill == NEUTRAL_NODE { "black" } else { "white" };
        let name = escape(graph.name(id).unwrap_or("?"));
        lines.push(format!(
            r#"  <circle cx="{x:.1}" cy="{y:.1}" r="{NODE_RADIUS}" fill="{fill}" stroke="black"/>"#
        ));
        lines.push(format!(
            r#"  <text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="16" fill="{text_color}">{name}</text>"#,
            y + 5.0
        ));
    }

    lines.push("</svg>".to_string());

    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}

pub fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg)
        .with_context(|| format!("failed to write traversal image to '{}'", path.display()))
}
