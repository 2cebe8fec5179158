use super::*;
use crate::postings::Posting;

fn graph(edges: &[(&str, &str)]) -> FlowGraph {
    let postings: Vec<Posting> = edges
        .iter()
        .map(|(s, d)| Posting::new(*s, *d, "USD/2 100"))
        .collect();
    FlowGraph::from_postings(&postings)
}

fn levels(l: &Leveling) -> Vec<(&str, usize)> {
    l.order.iter().map(|(a, n)| (a.as_str(), *n)).collect()
}

// ── World classification ─────────────────────────────────────────────────

#[test]
fn test_world_absent() {
    assert_eq!(classify_world(&graph(&[("a", "b")])), WorldRole::Absent);
}

#[test]
fn test_world_only_sending_is_root() {
    assert_eq!(classify_world(&graph(&[("world", "alice")])), WorldRole::Root);
}

#[test]
fn test_world_receiving_is_in_tree() {
    assert_eq!(classify_world(&graph(&[("alice", "world")])), WorldRole::InTree);
    assert_eq!(
        classify_world(&graph(&[("world", "a"), ("b", "world")])),
        WorldRole::InTree
    );
}

#[test]
fn test_world_exchange_is_sidecar() {
    let role = classify_world(&graph(&[("a", "world"), ("world", "a"), ("b", "world")]));
    assert_eq!(
        role,
        WorldRole::Sidecar {
            partners: vec!["a".to_string()]
        }
    );
    assert!(role.is_sidecar());
}

#[test]
fn test_sidecar_partners_in_first_encounter_order() {
    let role = classify_world(&graph(&[
        ("world", "y"),
        ("x", "world"),
        ("world", "x"),
        ("y", "world"),
    ]));
    assert_eq!(role.partners(), ["y".to_string(), "x".to_string()]);
}

#[test]
fn test_world_self_loop_is_not_a_partner() {
    assert_eq!(classify_world(&graph(&[("world", "world")])), WorldRole::InTree);
}

// ── Roots ────────────────────────────────────────────────────────────────

#[test]
fn test_root_world_comes_first_and_children_are_not_roots() {
    let g = graph(&[("a", "b"), ("world", "c")]);
    let role = classify_world(&g);
    assert_eq!(find_roots(&g, &role), vec!["world", "a"]);
}

#[test]
fn test_sidecar_world_inflows_do_not_block_roots() {
    let g = graph(&[("a", "world"), ("world", "a"), ("b", "world")]);
    let role = classify_world(&g);
    assert_eq!(find_roots(&g, &role), vec!["a", "b"]);
}

// ── Leveling ─────────────────────────────────────────────────────────────

#[test]
fn test_chain_levels() {
    let l = Leveling::assign(&graph(&[("world", "alice"), ("alice", "bob")]));
    assert_eq!(levels(&l), vec![("world", 0), ("alice", 1), ("bob", 2)]);
}

#[test]
fn test_first_discovery_wins() {
    let l = Leveling::assign(&graph(&[
        ("r1", "m"),
        ("r2", "n"),
        ("m", "x"),
        ("n", "x"),
        ("x", "z"),
    ]));
    assert_eq!(
        levels(&l),
        vec![("r1", 0), ("r2", 0), ("m", 1), ("n", 1), ("x", 2), ("z", 3)]
    );
}

#[test]
fn test_shortcut_keeps_shallower_level() {
    let l = Leveling::assign(&graph(&[("a", "b"), ("b", "c"), ("a", "c")]));
    assert_eq!(l.level_of("b"), Some(1));
    assert_eq!(l.level_of("c"), Some(1));
}

#[test]
fn test_sidecar_world_has_no_level() {
    let l = Leveling::assign(&graph(&[("a", "world"), ("world", "a"), ("b", "world")]));
    assert_eq!(l.level_of("a"), Some(0));
    assert_eq!(l.level_of("b"), Some(0));
    assert_eq!(l.level_of("world"), None);
}

#[test]
fn test_mixed_sidecar_and_one_way_world_flows() {
    let l = Leveling::assign(&graph(&[("world", "exch"), ("exch", "world"), ("world", "alice")]));
    assert!(l.world.is_sidecar());
    assert_eq!(levels(&l), vec![("exch", 0), ("alice", 0)]);
}

#[test]
fn test_rootless_cycle_is_seeded() {
    let l = Leveling::assign(&graph(&[("a", "b"), ("b", "a")]));
    assert!(l.roots.is_empty());
    assert_eq!(levels(&l), vec![("a", 0), ("b", 1)]);
}

#[test]
fn test_cycle_through_world_is_seeded_at_world() {
    let l = Leveling::assign(&graph(&[("world", "a"), ("a", "b"), ("b", "world")]));
    assert_eq!(l.world, WorldRole::InTree);
    assert_eq!(levels(&l), vec![("world", 0), ("a", 1), ("b", 2)]);
}

#[test]
fn test_cycle_below_a_root_terminates() {
    let l = Leveling::assign(&graph(&[("r", "a"), ("a", "b"), ("b", "a")]));
    assert_eq!(levels(&l), vec![("r", 0), ("a", 1), ("b", 2)]);
}

#[test]
fn test_level_groups() {
    let l = Leveling::assign(&graph(&[("r1", "m"), ("r2", "n"), ("m", "x")]));
    let groups = l.level_groups();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&0], vec!["r1", "r2"]);
    assert_eq!(groups[&1], vec!["m", "n"]);
    assert_eq!(groups[&2], vec!["x"]);
}
