use super::*;

fn two_node_state() -> DiagramState {
    DiagramState {
        nodes: vec![
            NodeData::new("n1", "@world", 280.0, 40.0),
            NodeData::new("n2", "@alice", 280.0, 164.0),
        ],
        arrows: vec![crate::layout::types::ArrowData::new("a1", "n1", "n2", "$100")],
    }
}

#[test]
fn test_empty_state_renders_nothing() {
    let out = render(
        &DiagramState::default(),
        &LayoutConfig::default(),
        &RenderConfig::default(),
    );
    assert!(out.is_empty());
}

#[test]
fn test_svg_structure() {
    let out = render(&two_node_state(), &LayoutConfig::default(), &RenderConfig::default());
    assert!(out.starts_with("<svg"));
    assert!(out.ends_with("</svg>"));
    assert!(out.contains(r#"width="800" height="400""#));
    assert!(out.contains(">@world</text>"));
    assert!(out.contains(">@alice</text>"));
    assert!(out.contains(">$100</text>"));
    assert_eq!(out.matches("<line ").count(), 1);
}

#[test]
fn test_arrows_drawn_before_nodes() {
    let out = render(&two_node_state(), &LayoutConfig::default(), &RenderConfig::default());
    let line = out.find("<line ").unwrap();
    let first_node = out.find("<g transform=").unwrap();
    assert!(line < first_node);
}

#[test]
fn test_world_styled_differently() {
    let out = render(&two_node_state(), &LayoutConfig::default(), &RenderConfig::default());
    assert!(out.contains(r##"stroke="#94a3b8""##));
    assert!(out.contains(r##"stroke="#3b82f6""##));
}

#[test]
fn test_dangling_arrow_skipped() {
    let mut s = two_node_state();
    s.arrows
        .push(crate::layout::types::ArrowData::new("a2", "n1", "gone", "$5"));
    let out = render(&s, &LayoutConfig::default(), &RenderConfig::default());
    assert_eq!(out.matches("<line ").count(), 1);
    assert!(!out.contains("$5"));
}

#[test]
fn test_labels_escaped() {
    let mut s = two_node_state();
    s.nodes[1].label = "@a<b>&c".to_string();
    let out = render(&s, &LayoutConfig::default(), &RenderConfig::default());
    assert!(out.contains("@a&lt;b&gt;&amp;c"));
}

#[test]
fn test_canvas_grows_to_fit() {
    let s = DiagramState {
        nodes: vec![NodeData::new("n1", "@far", 1000.0, 500.0)],
        arrows: vec![],
    };
    let (w, h) = canvas_size(&s, &LayoutConfig::default(), &RenderConfig::default());
    assert_eq!(w, 1000.0 + 140.0 + 40.0);
    assert_eq!(h, 500.0 + 44.0 + 60.0);
}

#[test]
fn test_num_formatting() {
    assert_eq!(num(40.0), "40");
    assert_eq!(num(12.5), "12.5");
    assert_eq!(num(-0.0), "0");
    assert_eq!(num(1.0 / 3.0), "0.33");
}
