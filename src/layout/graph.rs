//! FlowGraph — postings as a petgraph DiGraph of accounts.
//!
//! Node weights are account addresses, edge weights are posting indices.
//! Parallel edges are kept, one per posting. Neighbour queries return
//! accounts in posting order so breadth-first traversal is reproducible.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::postings::{Posting, WORLD};

pub struct FlowGraph {
    pub digraph: DiGraph<String, usize>,
    /// Maps account address → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
}

impl FlowGraph {
    /// Build the graph. Accounts are indexed sources first (in order of
    /// first appearance), then destinations not already seen.
    pub fn from_postings(postings: &[Posting]) -> Self {
        let mut digraph: DiGraph<String, usize> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for p in postings {
            ensure_node(&mut digraph, &mut node_index, &p.source);
        }
        for p in postings {
            ensure_node(&mut digraph, &mut node_index, &p.destination);
        }
        for (i, p) in postings.iter().enumerate() {
            let from = node_index[&p.source];
            let to = node_index[&p.destination];
            digraph.add_edge(from, to, i);
        }

        Self {
            digraph,
            node_index,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn contains(&self, account: &str) -> bool {
        self.node_index.contains_key(account)
    }

    pub fn has_world(&self) -> bool {
        self.contains(WORLD)
    }

    /// All accounts in index order.
    pub fn accounts(&self) -> Vec<&str> {
        self.digraph
            .node_indices()
            .map(|idx| self.digraph[idx].as_str())
            .collect()
    }

    /// Destinations of `account`'s outgoing postings, in posting order,
    /// one entry per posting.
    pub fn outflows(&self, account: &str) -> Vec<&str> {
        self.neighbours(account, Direction::Outgoing)
    }

    /// Sources of `account`'s incoming postings, in posting order, one entry
    /// per posting.
    pub fn inflows(&self, account: &str) -> Vec<&str> {
        self.neighbours(account, Direction::Incoming)
    }

    /// True if at least one posting runs `from -> to`.
    pub fn has_flow(&self, from: &str, to: &str) -> bool {
        match (self.node_index.get(from), self.node_index.get(to)) {
            (Some(&a), Some(&b)) => self.digraph.contains_edge(a, b),
            _ => false,
        }
    }

    fn neighbours(&self, account: &str, dir: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(account) else {
            return Vec::new();
        };
        let mut edges: Vec<(usize, NodeIndex)> = self
            .digraph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (*e.weight(), other)
            })
            .collect();
        // petgraph yields most recently added edges first.
        edges.sort_by_key(|(posting, _)| *posting);
        edges
            .into_iter()
            .map(|(_, other)| self.digraph[other].as_str())
            .collect()
    }
}

fn ensure_node(
    digraph: &mut DiGraph<String, usize>,
    node_index: &mut HashMap<String, NodeIndex>,
    account: &str,
) {
    if !node_index.contains_key(account) {
        let idx = digraph.add_node(account.to_string());
        node_index.insert(account.to_string(), idx);
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
