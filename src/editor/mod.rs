//! Editing shell model: owns a laid-out `DiagramState` and applies pointer
//! and keyboard events to it.
//!
//! Interaction state is a single `EditorMode`; what is highlighted is a
//! separate `Selection`. The layout engine is not consulted again once the
//! editor exists.

pub mod store;

use log::{debug, warn};

use crate::error::{FlowError, Result};
use crate::layout::types::{ArrowData, DiagramState, IdGenerator, NodeData, Point};

use self::store::DiagramStore;

/// Label given to boxes added by hand.
pub const NEW_NODE_LABEL: &str = "@new:account";
/// Label given to arrows drawn by hand.
pub const NEW_ARROW_LABEL: &str = "$0";

/// What the pointer or keyboard is currently doing.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Idle,
    /// A node follows the pointer, keeping `offset` between pointer and the
    /// node's top-left corner.
    Dragging { node: String, offset: Point },
    EditingNode(String),
    EditingArrow(String),
    /// Waiting for the target of a new arrow from `from`.
    CreatingArrow { from: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Node(String),
    Arrow(String),
}

pub struct DiagramEditor {
    initial: DiagramState,
    state: DiagramState,
    mode: EditorMode,
    selection: Selection,
    has_changes: bool,
    ids: IdGenerator,
    added: usize,
}

impl DiagramEditor {
    /// Start editing `initial`.
    pub fn new(initial: DiagramState) -> Self {
        Self {
            state: initial.clone(),
            initial,
            mode: EditorMode::Idle,
            selection: Selection::None,
            has_changes: false,
            ids: IdGenerator::new(),
            added: 0,
        }
    }

    /// Start editing whatever `store` holds under `key`, or `initial` if
    /// nothing is stored or the stored value does not decode.
    pub fn open(store: &dyn DiagramStore, key: &str, initial: DiagramState) -> Result<Self> {
        let mut editor = Self::new(initial);
        if let Some(saved) = store.load(key)? {
            match serde_json::from_str::<DiagramState>(&saved) {
                Ok(state) => editor.state = state,
                Err(e) => warn!("stored diagram '{}' is unreadable ({}); using layout", key, e),
            }
        }
        Ok(editor)
    }

    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn has_changes(&self) -> bool {
        self.has_changes
    }

    // ── Pointer ──────────────────────────────────────────────────────────────

    /// Pointer pressed on a node: completes a pending arrow, otherwise
    /// selects the node and starts dragging it. Ignored while a node label
    /// is being edited.
    pub fn pointer_down_on_node(&mut self, node_id: &str, pointer: Point) -> Result<()> {
        if matches!(self.mode, EditorMode::EditingNode(_)) {
            return Ok(());
        }
        if let EditorMode::CreatingArrow { from } = &self.mode {
            let from = from.clone();
            self.mode = EditorMode::Idle;
            if from != node_id {
                self.node_or_err(node_id)?;
                let id = self.ids.next_free_arrow(&self.state.ids());
                debug!("new arrow {} from {} to {}", id, from, node_id);
                self.state
                    .arrows
                    .push(ArrowData::new(id, from, node_id, NEW_ARROW_LABEL));
                self.has_changes = true;
            }
            return Ok(());
        }

        let node = self.node_or_err(node_id)?;
        let offset = Point::new(pointer.x - node.x, pointer.y - node.y);
        self.mode = EditorMode::Dragging {
            node: node_id.to_string(),
            offset,
        };
        self.selection = Selection::Node(node_id.to_string());
        Ok(())
    }

    /// Move the dragged node, if any. Positions never go negative.
    pub fn pointer_move(&mut self, pointer: Point) {
        let EditorMode::Dragging { node, offset } = &self.mode else {
            return;
        };
        let (x, y) = ((pointer.x - offset.x).max(0.0), (pointer.y - offset.y).max(0.0));
        if let Some(n) = self.state.node_mut(node) {
            n.x = x;
            n.y = y;
            self.has_changes = true;
        }
    }

    pub fn pointer_up(&mut self) {
        if matches!(self.mode, EditorMode::Dragging { .. }) {
            self.mode = EditorMode::Idle;
        }
    }

    /// Click on empty canvas: clears the selection and abandons a pending
    /// arrow.
    pub fn click_canvas(&mut self) {
        self.selection = Selection::None;
        if matches!(self.mode, EditorMode::CreatingArrow { .. }) {
            self.mode = EditorMode::Idle;
        }
    }

    pub fn click_arrow(&mut self, arrow_id: &str) -> Result<()> {
        self.arrow_or_err(arrow_id)?;
        self.selection = Selection::Arrow(arrow_id.to_string());
        Ok(())
    }

    // ── Text editing ─────────────────────────────────────────────────────────

    pub fn double_click_node(&mut self, node_id: &str) -> Result<()> {
        self.node_or_err(node_id)?;
        self.mode = EditorMode::EditingNode(node_id.to_string());
        Ok(())
    }

    pub fn double_click_arrow(&mut self, arrow_id: &str) -> Result<()> {
        self.arrow_or_err(arrow_id)?;
        self.mode = EditorMode::EditingArrow(arrow_id.to_string());
        Ok(())
    }

    /// Replace the label under edit. No-op outside an editing mode.
    pub fn set_label(&mut self, text: &str) {
        match &self.mode {
            EditorMode::EditingNode(id) => {
                if let Some(n) = self.state.node_mut(id) {
                    n.label = text.to_string();
                    self.has_changes = true;
                }
            }
            EditorMode::EditingArrow(id) => {
                if let Some(a) = self.state.arrow_mut(id) {
                    a.label = text.to_string();
                    self.has_changes = true;
                }
            }
            _ => {}
        }
    }

    /// Enter, Escape, or focus loss.
    pub fn finish_editing(&mut self) {
        if matches!(
            self.mode,
            EditorMode::EditingNode(_) | EditorMode::EditingArrow(_)
        ) {
            self.mode = EditorMode::Idle;
        }
    }

    // ── Structure ────────────────────────────────────────────────────────────

    /// Add a fresh box and select it. Returns its id.
    pub fn add_node(&mut self) -> String {
        let id = self.ids.next_free_node(&self.state.ids());
        let step = (self.added % 10) as f64 * 20.0;
        self.added += 1;
        self.state
            .nodes
            .push(NodeData::new(id.clone(), NEW_NODE_LABEL, 100.0 + step, 100.0 + step));
        self.selection = Selection::Node(id.clone());
        self.has_changes = true;
        id
    }

    /// Begin drawing an arrow from the selected node. No-op without one.
    pub fn start_arrow(&mut self) {
        if let Selection::Node(id) = &self.selection {
            self.mode = EditorMode::CreatingArrow { from: id.clone() };
        }
    }

    pub fn cancel_arrow(&mut self) {
        if matches!(self.mode, EditorMode::CreatingArrow { .. }) {
            self.mode = EditorMode::Idle;
        }
    }

    /// Delete the selection. Deleting a node also deletes every arrow
    /// attached to it.
    pub fn delete_selected(&mut self) {
        match std::mem::take(&mut self.selection) {
            Selection::Node(id) => {
                self.state.nodes.retain(|n| n.id != id);
                self.state.arrows.retain(|a| a.from != id && a.to != id);
                self.leave_mode_for(&id);
                self.has_changes = true;
            }
            Selection::Arrow(id) => {
                self.state.arrows.retain(|a| a.id != id);
                self.leave_mode_for(&id);
                self.has_changes = true;
            }
            Selection::None => {}
        }
    }

    // ── Persistence ──────────────────────────────────────────────────────────

    pub fn save(&mut self, store: &mut dyn DiagramStore, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        store.save(key, &json)?;
        self.has_changes = false;
        Ok(())
    }

    /// Forget the stored copy and go back to the computed layout.
    pub fn reset(&mut self, store: &mut dyn DiagramStore, key: &str) -> Result<()> {
        store.remove(key)?;
        self.state = self.initial.clone();
        self.mode = EditorMode::Idle;
        self.selection = Selection::None;
        self.has_changes = false;
        Ok(())
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn node_or_err(&self, id: &str) -> Result<&NodeData> {
        self.state.node(id).ok_or_else(|| FlowError::UnknownElement {
            kind: "node",
            id: id.to_string(),
        })
    }

    fn arrow_or_err(&self, id: &str) -> Result<&ArrowData> {
        self.state.arrow(id).ok_or_else(|| FlowError::UnknownElement {
            kind: "arrow",
            id: id.to_string(),
        })
    }

    /// Drop back to idle if the current mode refers to a deleted element.
    fn leave_mode_for(&mut self, id: &str) {
        let refers = match &self.mode {
            EditorMode::Idle => false,
            EditorMode::Dragging { node, .. } => node == id,
            EditorMode::EditingNode(n) => n == id,
            EditorMode::EditingArrow(a) => a == id,
            EditorMode::CreatingArrow { from } => from == id,
        };
        if refers {
            self.mode = EditorMode::Idle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_editor.rs"]
mod tests;
