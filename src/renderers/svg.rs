//! SVG renderer — draws a `DiagramState` with routed arrows.
//!
//! Arrows are drawn first so node boxes sit on top of line ends.

use crate::config::{LayoutConfig, RenderConfig};
use crate::layout::routing::{ArrowRoute, route_all};
use crate::layout::types::{DiagramState, NodeData};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "ui-monospace, monospace";
const NODE_FONT_SIZE: i32 = 13;
const LABEL_FONT_SIZE: i32 = 10;
const NODE_RADIUS: i32 = 8;
const LABEL_HEIGHT: f64 = 16.0;
const LABEL_MIN_WIDTH: f64 = 45.0;
const LABEL_CHAR_WIDTH: f64 = 6.5;

/// Pull-back of the line end so the arrowhead touches the box face.
const HEAD_CLEARANCE_H: f64 = 8.0;
const HEAD_CLEARANCE_V: f64 = 4.0;

const LINE_STROKE: &str = "#9ca3af";
const HEAD_FILL: &str = "#6b7280";
const LABEL_FILL: &str = "#059669";
const LABEL_BORDER: &str = "#d1fae5";

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Trim trailing zeros so whole coordinates print as integers.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Canvas size: the configured minimum, grown to fit every node.
pub fn canvas_size(
    state: &DiagramState,
    layout: &LayoutConfig,
    render: &RenderConfig,
) -> (f64, f64) {
    state
        .nodes
        .iter()
        .fold((render.min_width, render.min_height), |(w, h), n| {
            (
                w.max(n.x + layout.node_width(&n.label) + render.margin_right),
                h.max(n.y + layout.node_height + render.margin_bottom),
            )
        })
}

// ── Element rendering ────────────────────────────────────────────────────────

fn render_node(node: &NodeData, layout: &LayoutConfig) -> String {
    let width = layout.node_width(&node.label);
    let height = layout.node_height;
    let (fill, stroke, text) = if node.is_world() {
        ("#f8fafc", "#94a3b8", "#475569")
    } else {
        ("#eff6ff", "#3b82f6", "#1e40af")
    };
    format!(
        concat!(
            r#"<g transform="translate({x}, {y})">"#,
            "\n",
            r#"  <rect width="{w}" height="{h}" rx="{r}" fill="{fill}" stroke="{stroke}" stroke-width="2"/>"#,
            "\n",
            r#"  <text x="{tx}" y="{ty}" text-anchor="middle" font-size="{fs}" font-family="{ff}" fill="{text}">{label}</text>"#,
            "\n",
            "</g>"
        ),
        x = num(node.x),
        y = num(node.y),
        w = num(width),
        h = num(height),
        r = NODE_RADIUS,
        fill = fill,
        stroke = stroke,
        tx = num(width / 2.0),
        ty = num(height / 2.0 + 5.0),
        fs = NODE_FONT_SIZE,
        ff = FONT_FAMILY,
        text = text,
        label = escape(&node.label),
    )
}

fn render_arrow(route: &ArrowRoute, label: &str) -> String {
    let (dx, dy) = if route.is_horizontal() {
        (HEAD_CLEARANCE_H, 0.0)
    } else {
        (0.0, HEAD_CLEARANCE_V)
    };
    let mut parts = vec![format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{LINE_STROKE}" stroke-width="1.5" marker-end="url(#arrowhead)"/>"#,
        num(route.start.x),
        num(route.start.y),
        num(route.end.x - dx),
        num(route.end.y - dy),
    )];

    if !label.is_empty() {
        let width = LABEL_MIN_WIDTH.max(label.chars().count() as f64 * LABEL_CHAR_WIDTH + 10.0);
        let at = route.label_at;
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="3" fill="white" stroke="{LABEL_BORDER}" stroke-width="1"/>"#,
            num(at.x - width / 2.0),
            num(at.y - LABEL_HEIGHT / 2.0),
            num(width),
            num(LABEL_HEIGHT),
        ));
        parts.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-size="{LABEL_FONT_SIZE}" font-weight="600" fill="{LABEL_FILL}">{}</text>"#,
            num(at.x),
            num(at.y),
            escape(label),
        ));
    }

    format!("<g>\n{}\n</g>", parts.join("\n"))
}

// ── Public API ───────────────────────────────────────────────────────────────

/// Render `state` to an SVG document. An empty state renders as an empty
/// string.
pub fn render(state: &DiagramState, layout: &LayoutConfig, config: &RenderConfig) -> String {
    if state.nodes.is_empty() {
        return String::new();
    }

    let (w, h) = canvas_size(state, layout, config);
    let (w, h) = (num(w), num(h));
    let mut parts = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        "<defs>".to_string(),
        r#"  <marker id="arrowhead" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">"#.to_string(),
        format!(r#"    <polygon points="0 0, 10 3.5, 0 7" fill="{HEAD_FILL}"/>"#),
        "  </marker>".to_string(),
        "</defs>".to_string(),
        format!(r#"<rect width="{w}" height="{h}" fill="white"/>"#),
    ];

    for route in route_all(state, layout) {
        let label = state
            .arrow(&route.arrow_id)
            .map(|a| a.label.as_str())
            .unwrap_or_default();
        parts.push(render_arrow(&route, label));
    }

    for node in &state.nodes {
        parts.push(render_node(node, layout));
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
