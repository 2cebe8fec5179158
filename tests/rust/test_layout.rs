use super::*;
use crate::layout::routing::{RouteKind, route_all};

fn p(source: &str, destination: &str, amount: &str) -> Posting {
    Posting::new(source, destination, amount)
}

#[test]
fn test_empty_input() {
    assert!(layout(&[]).is_empty());
}

#[test]
fn test_world_deposit() {
    let s = layout(&[p("world", "alice", "USD/2 10000")]);
    assert_eq!(s.nodes.len(), 2);
    let world = s.node_by_label("@world").unwrap();
    let alice = s.node_by_label("@alice").unwrap();
    assert_eq!((world.x, world.y), (280.0, 40.0));
    assert_eq!((alice.x, alice.y), (280.0, 164.0));
    assert_eq!(s.arrows.len(), 1);
    assert_eq!(s.arrows[0].from, world.id);
    assert_eq!(s.arrows[0].to, alice.id);
    assert_eq!(s.arrows[0].label, "$100");
}

#[test]
fn test_sidecar_exchange() {
    let s = layout(&[p("world", "exch", "USD/2 100"), p("exch", "world", "USD/2 98")]);
    let exch = s.node_by_label("@exch").unwrap();
    let world = s.node_by_label("@world").unwrap();
    assert_eq!(world.y, exch.y);
    assert!(world.x > exch.x + 140.0);
    assert_eq!(s.arrows[0].label, "$1");
    assert_eq!(s.arrows[1].label, "$0.98");

    let routes = route_all(&s, &LayoutConfig::default());
    assert!(
        routes
            .iter()
            .all(|r| matches!(r.kind, RouteKind::HorizontalPair { .. }))
    );
    assert_ne!(routes[0].start.y, routes[1].start.y);
}

#[test]
fn test_malformed_amount_passes_through() {
    let s = layout(&[p("a", "b", "garbage")]);
    assert_eq!(s.arrows[0].label, "garbage");
}

#[test]
fn test_duplicate_postings_give_duplicate_arrows() {
    let s = layout(&[p("a", "b", "USD/2 1"), p("a", "b", "USD/2 2")]);
    assert_eq!(s.nodes.len(), 2);
    assert_eq!(s.arrows.len(), 2);
    assert_eq!(s.arrows[0].from, s.arrows[1].from);
    assert_ne!(s.arrows[0].id, s.arrows[1].id);
}

#[test]
fn test_custom_config_geometry() {
    let config = LayoutConfig {
        start_y: 0.0,
        vertical_gap: 6.0,
        ..LayoutConfig::default()
    };
    let s = layout_with_config(&[p("a", "b", "USD/2 1")], &config);
    assert_eq!(s.node_by_label("@a").unwrap().y, 0.0);
    assert_eq!(s.node_by_label("@b").unwrap().y, 50.0);
}

#[test]
fn test_layout_is_deterministic() {
    let postings = vec![
        p("world", "bank", "USD/2 100"),
        p("bank", "users:1", "USD/2 60"),
        p("bank", "users:2", "USD/2 40"),
        p("users:1", "exch", "USD/2 10"),
        p("exch", "world", "USD/2 10"),
        p("world", "exch", "BTC/8 1000"),
    ];
    assert_eq!(layout(&postings), layout(&postings));
}
