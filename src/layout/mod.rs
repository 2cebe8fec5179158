//! Posting-flow layout.
//!
//! Phases:
//!   1. Graph build (accounts + one edge per posting)
//!   2. World classification (absent / sidecar / root / in-tree)
//!   3. Root discovery
//!   4. Breadth-first leveling
//!   5. Row placement per level
//!   6. Sidecar `@world` placement
//!   7. Arrow emission
//!
//! Routing (`routing`) runs later, on whatever state the editing shell holds.

pub mod graph;
pub mod leveling;
pub mod placement;
pub mod routing;
pub mod types;

use log::{debug, warn};

use crate::config::LayoutConfig;
use crate::postings::{Posting, format_amount};

use self::graph::FlowGraph;
use self::leveling::Leveling;
use self::placement::place;
use self::types::{ArrowData, DiagramState, IdGenerator};

/// Lay out `postings` with the default geometry.
pub fn layout(postings: &[Posting]) -> DiagramState {
    layout_with_config(postings, &LayoutConfig::default())
}

/// Lay out `postings`. Pure and deterministic: the same postings always
/// give the same state, ids included.
pub fn layout_with_config(postings: &[Posting], config: &LayoutConfig) -> DiagramState {
    if postings.is_empty() {
        return DiagramState::new();
    }

    let graph = FlowGraph::from_postings(postings);
    let leveling = Leveling::assign(&graph);
    let mut ids = IdGenerator::new();
    let placement = place(&leveling, config, &mut ids);
    debug!(
        "laid out {} accounts over {} levels from {} postings",
        placement.nodes.len(),
        leveling.level_groups().len(),
        postings.len()
    );

    let mut arrows = Vec::with_capacity(postings.len());
    for p in postings {
        let (Some(from), Some(to)) = (
            placement.node_for(&p.source),
            placement.node_for(&p.destination),
        ) else {
            warn!("dropping posting {} -> {}: account not placed", p.source, p.destination);
            continue;
        };
        arrows.push(ArrowData::new(
            ids.next_arrow(),
            from.id.clone(),
            to.id.clone(),
            format_amount(&p.amount),
        ));
    }

    DiagramState {
        nodes: placement.nodes,
        arrows,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
