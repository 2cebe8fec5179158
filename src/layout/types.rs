//! Layout output: positioned nodes, arrows, and the diagram holding them.
//!
//! The serialized shape (`nodes`/`arrows`, `id,label,x,y`, `id,from,to,label`)
//! is what the editing shell persists, so field names are part of the
//! contract.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

// ─── NodeData ────────────────────────────────────────────────────────────────

/// A box on the canvas. `(x, y)` is its top-left corner; width follows from
/// the label, height is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl NodeData {
    pub fn new(id: impl Into<String>, label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            x,
            y,
        }
    }

    pub fn is_world(&self) -> bool {
        self.label == "@world"
    }
}

// ─── ArrowData ───────────────────────────────────────────────────────────────

/// A labelled connection between two nodes, referenced by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowData {
    pub id: String,
    pub from: String,
    pub to: String,
    pub label: String,
}

impl ArrowData {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }
}

// ─── DiagramState ────────────────────────────────────────────────────────────

/// The full layout output. Order of `nodes` and `arrows` carries no meaning
/// but is kept stable for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramState {
    pub nodes: Vec<NodeData>,
    pub arrows: Vec<ArrowData>,
}

impl DiagramState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.arrows.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeData> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn node_by_label(&self, label: &str) -> Option<&NodeData> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn arrow(&self, id: &str) -> Option<&ArrowData> {
        self.arrows.iter().find(|a| a.id == id)
    }

    pub fn arrow_mut(&mut self, id: &str) -> Option<&mut ArrowData> {
        self.arrows.iter_mut().find(|a| a.id == id)
    }

    /// True if some arrow runs `to -> from`, i.e. `arrow` is half of a
    /// bidirectional pair.
    pub fn has_reverse(&self, arrow: &ArrowData) -> bool {
        self.arrows
            .iter()
            .any(|a| a.from == arrow.to && a.to == arrow.from)
    }

    /// Arrows whose endpoints both resolve to nodes.
    pub fn is_consistent(&self) -> bool {
        self.arrows
            .iter()
            .all(|a| self.node(&a.from).is_some() && self.node(&a.to).is_some())
    }

    /// Every node and arrow id currently in use.
    pub fn ids(&self) -> HashSet<String> {
        self.nodes
            .iter()
            .map(|n| n.id.clone())
            .chain(self.arrows.iter().map(|a| a.id.clone()))
            .collect()
    }
}

// ─── IdGenerator ─────────────────────────────────────────────────────────────

/// Deterministic id source: `node-1`, `node-2`, ..., `arrow-1`, ...
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    nodes: usize,
    arrows: usize,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_node(&mut self) -> String {
        self.nodes += 1;
        format!("node-{}", self.nodes)
    }

    pub fn next_arrow(&mut self) -> String {
        self.arrows += 1;
        format!("arrow-{}", self.arrows)
    }

    /// Next node id not already present in `taken`.
    pub fn next_free_node(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let id = self.next_node();
            if !taken.contains(&id) {
                return id;
            }
        }
    }

    /// Next arrow id not already present in `taken`.
    pub fn next_free_arrow(&mut self, taken: &HashSet<String>) -> String {
        loop {
            let id = self.next_arrow();
            if !taken.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
