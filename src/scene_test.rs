#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Edge;
use crate::lane::Lane;

fn node(id: &str, kind: NodeKind, x: f64, y: f64) -> Node {
    Node { id: id.into(), kind, x, y, label: kind.default_label().into(), lane_id: None }
}

fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge { id: id.into(), source_id: source.into(), target_id: target.into() }
}

fn diagram() -> Diagram {
    Diagram {
        nodes: vec![node("s", NodeKind::Start, 100.0, 90.0), node("t", NodeKind::Task, 300.0, 270.0)],
        edges: vec![edge("e1", "s", "t"), edge("e2", "t", "ghost"), edge("e3", "ghost", "s")],
    }
}

fn lanes() -> Vec<Lane> {
    vec![Lane::new("a", "Admisión"), Lane { color: Some("#fefce8".into()), ..Lane::new("b", "Enfermería") }]
}

fn build_default(diagram: &Diagram, lanes: &[Lane], mode: &Mode, read_only: bool) -> Scene {
    let config = EditorConfig::default();
    build(diagram, &LaneLayout::compute(lanes, &config), mode, &config, read_only)
}

// =============================================================
// Lanes
// =============================================================

#[test]
fn lanes_carry_geometry_and_fill() {
    let scene = build_default(&diagram(), &lanes(), &Mode::idle(), false);
    assert_eq!(scene.lanes.len(), 2);
    assert_eq!(scene.lanes[0].fill, "#ffffff");
    assert_eq!(scene.lanes[1].fill, "#fefce8");
    assert_eq!(scene.lanes[1].y, 180.0);
    assert_eq!(scene.lanes[1].width, 2000.0);
    assert_eq!(scene.lanes[0].header_width, 50.0);
    assert_eq!(scene.height, 600.0);
    assert_eq!(scene.width, 2000.0);
}

#[test]
fn reorder_controls_respect_ends() {
    let scene = build_default(&diagram(), &lanes(), &Mode::idle(), false);
    assert!(!scene.lanes[0].can_move_up);
    assert!(scene.lanes[0].can_move_down);
    assert!(scene.lanes[1].can_move_up);
    assert!(!scene.lanes[1].can_move_down);
    assert!(scene.lanes.iter().all(|l| l.can_recolor));
}

#[test]
fn read_only_hides_lane_controls() {
    let scene = build_default(&diagram(), &lanes(), &Mode::idle(), true);
    assert!(scene.lanes.iter().all(|l| !l.can_move_up && !l.can_move_down && !l.can_recolor));
}

#[test]
fn no_lanes_draws_fallback_band() {
    let scene = build_default(&diagram(), &[], &Mode::idle(), false);
    assert_eq!(scene.lanes.len(), 1);
    assert_eq!(scene.lanes[0].role, "Sin Asignar");
    assert!(!scene.lanes[0].can_move_up && !scene.lanes[0].can_move_down);
}

// =============================================================
// Edges
// =============================================================

#[test]
fn dangling_edges_are_skipped_but_kept() {
    let d = diagram();
    let scene = build_default(&d, &lanes(), &Mode::idle(), false);
    assert_eq!(scene.edges.len(), 1);
    assert_eq!(scene.edges[0].id, "e1");
    assert_eq!(scene.edges[0].from, Point::new(100.0, 90.0));
    assert_eq!(scene.edges[0].to, Point::new(300.0, 270.0));
    assert_eq!(d.edges.len(), 3);
}

// =============================================================
// Nodes
// =============================================================

#[test]
fn nodes_keep_draw_order_and_label_offsets() {
    let scene = build_default(&diagram(), &lanes(), &Mode::idle(), false);
    let ids: Vec<&str> = scene.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["s", "t"]);
    assert_eq!(scene.nodes[0].label_offset, 35.0);
    assert_eq!(scene.nodes[1].label_offset, 5.0);
    assert_eq!(scene.nodes[0].label, "Inicio");
}

#[test]
fn selected_node_is_highlighted() {
    let mode = Mode::Select { selected: Some("t".into()), drag: None };
    let scene = build_default(&diagram(), &lanes(), &mode, false);
    assert!(!scene.nodes[0].highlighted);
    assert!(scene.nodes[1].highlighted);
}

#[test]
fn pending_source_is_highlighted() {
    let mode = Mode::Connect { pending: Some("s".into()) };
    let scene = build_default(&diagram(), &lanes(), &mode, false);
    assert!(scene.nodes[0].highlighted);
    assert!(!scene.nodes[1].highlighted);
}

#[test]
fn scene_serializes_camel_case() {
    let scene = build_default(&diagram(), &lanes(), &Mode::idle(), false);
    let json = serde_json::to_string(&scene).unwrap();
    assert!(json.contains("\"canMoveUp\""));
    assert!(json.contains("\"labelOffset\""));
    assert!(json.contains("\"kind\":\"start\""));
}
