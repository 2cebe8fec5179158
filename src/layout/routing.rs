//! Edge routing: straight lines between box faces, with bidirectional
//! pairs split into two parallel lanes.
//!
//! Works on a `DiagramState` rather than on postings, so routes stay valid
//! after the editing shell moves or relabels nodes.

use super::types::{ArrowData, DiagramState, NodeData, Point};
use crate::config::LayoutConfig;

/// Lines whose ends differ in y by less than this are treated as
/// horizontal when placing labels.
const HORIZONTAL_SLOPE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// One-way arrow: bottom-centre of the source to top-centre of the target.
    Straight,
    /// Half of a bidirectional pair between side-by-side nodes. The
    /// left-to-right arrow takes the top lane.
    HorizontalPair { top: bool },
    /// Half of a bidirectional pair between nodes on different levels.
    VerticalPair,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowRoute {
    pub arrow_id: String,
    pub kind: RouteKind,
    pub start: Point,
    pub end: Point,
    /// Centre of the label, kept clear of the line.
    pub label_at: Point,
}

impl ArrowRoute {
    pub fn is_horizontal(&self) -> bool {
        (self.start.y - self.end.y).abs() < HORIZONTAL_SLOPE
    }
}

/// Route one arrow. `None` if either endpoint no longer resolves.
pub fn route_arrow(
    state: &DiagramState,
    arrow: &ArrowData,
    config: &LayoutConfig,
) -> Option<ArrowRoute> {
    let from = state.node(&arrow.from)?;
    let to = state.node(&arrow.to)?;
    let reverse = state.has_reverse(arrow);
    let same_level = (from.y - to.y).abs() < config.same_level_tolerance;

    let (kind, start, end) = if reverse && same_level {
        horizontal_pair(from, to, config)
    } else if reverse {
        vertical_pair(arrow, from, to, config)
    } else {
        let start = Point::new(
            from.x + config.node_width(&from.label) / 2.0,
            from.y + config.node_height,
        );
        let end = Point::new(to.x + config.node_width(&to.label) / 2.0, to.y);
        (RouteKind::Straight, start, end)
    };

    let mut route = ArrowRoute {
        arrow_id: arrow.id.clone(),
        kind,
        start,
        end,
        label_at: start.midpoint(end),
    };
    route.label_at = label_position(&route, config);
    Some(route)
}

/// Route every arrow whose endpoints resolve, in arrow order.
pub fn route_all(state: &DiagramState, config: &LayoutConfig) -> Vec<ArrowRoute> {
    state
        .arrows
        .iter()
        .filter_map(|a| route_arrow(state, a, config))
        .collect()
}

fn horizontal_pair(
    from: &NodeData,
    to: &NodeData,
    config: &LayoutConfig,
) -> (RouteKind, Point, Point) {
    let from_is_left = from.x < to.x;
    let (from_x, to_x) = if from_is_left {
        (from.x + config.node_width(&from.label), to.x)
    } else {
        (from.x, to.x + config.node_width(&to.label))
    };
    let offset = if from_is_left {
        -config.horizontal_pair_offset
    } else {
        config.horizontal_pair_offset
    };
    let start = Point::new(from_x, from.y + config.node_height / 2.0 + offset);
    let end = Point::new(to_x, to.y + config.node_height / 2.0 + offset);
    (RouteKind::HorizontalPair { top: from_is_left }, start, end)
}

/// The two arrows of a pair compare their endpoint ids in opposite order,
/// so each lands on its own side of the centre line.
fn vertical_pair(
    arrow: &ArrowData,
    from: &NodeData,
    to: &NodeData,
    config: &LayoutConfig,
) -> (RouteKind, Point, Point) {
    let offset = if arrow.from < arrow.to {
        -config.vertical_pair_offset
    } else {
        config.vertical_pair_offset
    };
    let start = Point::new(
        from.x + config.node_width(&from.label) / 2.0 + offset,
        from.y + config.node_height,
    );
    let end = Point::new(to.x + config.node_width(&to.label) / 2.0 + offset, to.y);
    (RouteKind::VerticalPair, start, end)
}

fn label_position(route: &ArrowRoute, config: &LayoutConfig) -> Point {
    let mid = route.start.midpoint(route.end);
    match route.kind {
        RouteKind::HorizontalPair { top: true } => {
            Point::new(mid.x, route.start.y - config.horizontal_label_offset)
        }
        RouteKind::HorizontalPair { top: false } => {
            Point::new(mid.x, route.start.y + config.horizontal_label_offset)
        }
        _ if route.is_horizontal() => Point::new(mid.x, mid.y - config.horizontal_label_offset),
        _ => Point::new(mid.x, mid.y - config.vertical_label_offset),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_routing.rs"]
mod tests;
