//! Node placement: levels stack downward, each centred on one vertical
//! line; a sidecar `@world` sits to the right of its first exchange partner.

use std::collections::HashMap;

use log::debug;

use super::leveling::Leveling;
use super::types::{IdGenerator, NodeData};
use crate::config::LayoutConfig;
use crate::postings::{WORLD, account_label};

/// Nodes in emission order plus an account → node index map.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    pub nodes: Vec<NodeData>,
    pub by_account: HashMap<String, usize>,
}

impl Placement {
    pub fn node_for(&self, account: &str) -> Option<&NodeData> {
        self.by_account.get(account).map(|&i| &self.nodes[i])
    }

    fn push(&mut self, account: &str, node: NodeData) {
        self.by_account.insert(account.to_string(), self.nodes.len());
        self.nodes.push(node);
    }
}

/// Place every leveled account, then the sidecar `world` if there is one.
pub fn place(leveling: &Leveling, config: &LayoutConfig, ids: &mut IdGenerator) -> Placement {
    let mut placement = Placement::default();

    for (level, accounts) in leveling.level_groups() {
        let labels: Vec<String> = accounts.iter().map(|a| account_label(a)).collect();
        let y = config.level_y(level);
        for (account, (label, x)) in accounts.iter().zip(row_positions(&labels, config)) {
            let node = NodeData::new(ids.next_node(), label, x, y);
            placement.push(account, node);
        }
    }

    if leveling.world.is_sidecar() {
        let (x, y) = sidecar_position(&placement, leveling.world.partners(), config);
        debug!("placing sidecar world at ({x}, {y})");
        let node = NodeData::new(ids.next_node(), account_label(WORLD), x, y);
        placement.push(WORLD, node);
    }

    placement
}

/// Left-to-right x of each label's box: the row is centred on
/// `config.center_x` and never starts left of `config.min_x`.
pub fn row_positions(labels: &[String], config: &LayoutConfig) -> Vec<(String, f64)> {
    if labels.is_empty() {
        return Vec::new();
    }
    let widths: Vec<f64> = labels.iter().map(|l| config.node_width(l)).collect();
    let total = widths.iter().sum::<f64>() + (labels.len() - 1) as f64 * config.horizontal_gap;
    let mut x = config.min_x.max(config.center_x - total / 2.0);

    let mut out = Vec::with_capacity(labels.len());
    for (label, width) in labels.iter().zip(widths) {
        out.push((label.clone(), x));
        x += width + config.horizontal_gap;
    }
    out
}

/// Right of the first partner that has a node, on the same row; the
/// configured fallback otherwise.
fn sidecar_position(
    placement: &Placement,
    partners: &[String],
    config: &LayoutConfig,
) -> (f64, f64) {
    partners
        .iter()
        .find_map(|p| placement.node_for(p))
        .map(|anchor| {
            (
                anchor.x + config.node_width(&anchor.label) + config.sidecar_gap,
                anchor.y,
            )
        })
        .unwrap_or(config.sidecar_fallback)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_placement.rs"]
mod tests;
