//! World classification, root discovery, and breadth-first leveling.
//!
//! Levels are assigned first-discovery-wins from a FIFO queue seeded with
//! every root at level 0. Accounts nothing reaches (cycles with no
//! zero-inflow entry) are seeded as extra roots afterwards, in account
//! order, so every account ends up on exactly one level.

use std::collections::{BTreeMap, HashMap, VecDeque};

use log::debug;

use super::graph::FlowGraph;
use crate::postings::WORLD;

// ─── World role ──────────────────────────────────────────────────────────────

/// How `@world` takes part in the diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldRole {
    /// No posting touches `world`.
    Absent,
    /// `world` exchanges in both directions with these accounts (first
    /// encountered first) and is drawn beside the hierarchy.
    Sidecar { partners: Vec<String> },
    /// `world` only sends: it tops the hierarchy.
    Root,
    /// `world` receives (and maybe sends): an ordinary tree node.
    InTree,
}

impl WorldRole {
    pub fn is_sidecar(&self) -> bool {
        matches!(self, WorldRole::Sidecar { .. })
    }

    pub fn partners(&self) -> &[String] {
        match self {
            WorldRole::Sidecar { partners } => partners,
            _ => &[],
        }
    }
}

/// Classify `world`.
///
/// Any account with postings both to and from `world` makes `world` a
/// sidecar for the whole diagram, even if it also has one-way flows with
/// other accounts.
pub fn classify_world(g: &FlowGraph) -> WorldRole {
    if !g.has_world() {
        return WorldRole::Absent;
    }

    let mut partners: Vec<String> = Vec::new();
    for eidx in g.digraph.edge_indices() {
        let Some((a, b)) = g.digraph.edge_endpoints(eidx) else {
            continue;
        };
        let (source, destination) = (g.digraph[a].as_str(), g.digraph[b].as_str());
        let other = if source == WORLD {
            destination
        } else if destination == WORLD {
            source
        } else {
            continue;
        };
        if other == WORLD || partners.iter().any(|p| p == other) {
            continue;
        }
        if g.has_flow(WORLD, other) && g.has_flow(other, WORLD) {
            partners.push(other.to_string());
        }
    }

    if !partners.is_empty() {
        return WorldRole::Sidecar { partners };
    }
    if !g.outflows(WORLD).is_empty() && g.inflows(WORLD).is_empty() {
        WorldRole::Root
    } else {
        WorldRole::InTree
    }
}

/// Accounts placed at level 0 before traversal, in account order with a
/// root `world` first.
///
/// An account is a root when it has no inflows. Inflows from a sidecar
/// `world` do not count, since `world` sits outside the hierarchy. An
/// account fed only by a root `world` is not a root: it becomes
/// `world`'s level-1 child.
pub fn find_roots(g: &FlowGraph, world: &WorldRole) -> Vec<String> {
    let mut roots: Vec<String> = Vec::new();
    if *world == WorldRole::Root {
        roots.push(WORLD.to_string());
    }
    for account in g.accounts() {
        if account == WORLD {
            continue;
        }
        let has_inflow = g
            .inflows(account)
            .into_iter()
            .any(|src| !(world.is_sidecar() && src == WORLD));
        if !has_inflow {
            roots.push(account.to_string());
        }
    }
    roots
}

// ─── Leveling ────────────────────────────────────────────────────────────────

/// Result of leveling: the world role, the root set, and each account's
/// level in discovery order.
#[derive(Debug, Clone)]
pub struct Leveling {
    pub world: WorldRole,
    pub roots: Vec<String>,
    /// `(account, level)` in the order accounts were discovered.
    pub order: Vec<(String, usize)>,
    levels: HashMap<String, usize>,
}

impl Leveling {
    /// Classify, find roots, and run the traversal.
    pub fn assign(g: &FlowGraph) -> Self {
        let world = classify_world(g);
        let roots = find_roots(g, &world);
        debug!("world role {:?}, roots {:?}", world, roots);

        let mut leveling = Self {
            world,
            roots: roots.clone(),
            order: Vec::new(),
            levels: HashMap::new(),
        };
        leveling.traverse(g, roots);

        let candidates: Vec<String> = g
            .accounts()
            .into_iter()
            .filter(|a| !(leveling.world.is_sidecar() && *a == WORLD))
            .map(str::to_string)
            .collect();
        for account in candidates {
            if !leveling.levels.contains_key(&account) {
                debug!("'{}' is unreachable from any root; seeding it at level 0", account);
                leveling.traverse(g, vec![account]);
            }
        }
        leveling
    }

    pub fn level_of(&self, account: &str) -> Option<usize> {
        self.levels.get(account).copied()
    }

    /// Accounts grouped by level, each group in discovery order.
    pub fn level_groups(&self) -> BTreeMap<usize, Vec<String>> {
        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for (account, level) in &self.order {
            groups.entry(*level).or_default().push(account.clone());
        }
        groups
    }

    fn visit(&mut self, account: &str, level: usize) {
        self.levels.insert(account.to_string(), level);
        self.order.push((account.to_string(), level));
    }

    /// FIFO breadth-first traversal from `seeds` at level 0. Accounts that
    /// already have a level are never revisited.
    fn traverse(&mut self, g: &FlowGraph, seeds: Vec<String>) {
        let mut queue: VecDeque<String> = VecDeque::new();
        for seed in seeds {
            if !self.levels.contains_key(&seed) {
                self.visit(&seed, 0);
                queue.push_back(seed);
            }
        }

        while let Some(current) = queue.pop_front() {
            let level = self.levels.get(&current).copied().unwrap_or(0);
            for to in g.outflows(&current) {
                if to == WORLD && self.world.is_sidecar() {
                    continue;
                }
                if !self.levels.contains_key(to) {
                    self.visit(to, level + 1);
                    queue.push_back(to.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_leveling.rs"]
mod tests;
