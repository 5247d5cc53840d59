//! End-to-end editing session through the public API, with the test acting
//! as the host that owns the diagram and lanes.

#![allow(clippy::float_cmp)]

use swimlane::{Action, Camera, Diagram, Editor, EditorConfig, Lane, NodeKind, Point, Tool, View};

struct Host {
    diagram: Diagram,
    lanes: Vec<Lane>,
}

impl Host {
    fn view(&self) -> View<'_> {
        View::new(&self.diagram, &self.lanes)
    }

    fn commit(&mut self, actions: Vec<Action>) {
        for action in actions {
            action.apply(&mut self.diagram, &mut self.lanes);
        }
    }
}

fn two_lane_host() -> Host {
    Host { diagram: Diagram::new(), lanes: vec![Lane::new("A", "Admisión"), Lane::new("B", "Enfermería")] }
}

#[test]
fn add_connect_delete_session() {
    let mut host = two_lane_host();
    let mut editor = Editor::new(EditorConfig::default());

    editor.set_tool(Tool::Add(NodeKind::Start));
    host.commit(editor.on_pointer_down(host.view(), Point::new(200.0, 90.0)));
    let start = host.diagram.nodes[0].clone();
    assert_eq!(start.lane_id.as_deref(), Some("A"));
    assert_eq!(start.label, "Inicio");

    editor.set_tool(Tool::Add(NodeKind::End));
    host.commit(editor.on_pointer_down(host.view(), Point::new(600.0, 270.0)));
    let end = host.diagram.nodes[1].clone();
    assert_eq!(end.lane_id.as_deref(), Some("B"));
    assert_eq!(end.label, "Fin");

    editor.set_tool(Tool::Connect);
    host.commit(editor.on_node_pointer_down(host.view(), &start.id, start.position()));
    host.commit(editor.on_node_pointer_down(host.view(), &end.id, end.position()));
    assert_eq!(host.diagram.edges.len(), 1);
    assert_eq!(host.diagram.edges[0].source_id, start.id);
    assert_eq!(host.diagram.edges[0].target_id, end.id);

    editor.set_tool(Tool::Select);
    host.commit(editor.on_pointer_down(host.view(), start.position()));
    host.commit(editor.delete_selected(host.view()));
    assert_eq!(host.diagram.nodes.len(), 1);
    assert_eq!(host.diagram.nodes[0].id, end.id);
    assert!(host.diagram.edges.is_empty());
}

#[test]
fn persisted_diagram_survives_a_session_round_trip() {
    let mut host = two_lane_host();
    let mut editor = Editor::new(EditorConfig::default());
    editor.set_camera(Camera { pan_x: 10.0, pan_y: 0.0, zoom: 1.0 });

    for (kind, x, y) in [(NodeKind::Start, 110.0, 50.0), (NodeKind::Task, 310.0, 60.0), (NodeKind::Gateway, 510.0, 250.0)] {
        editor.set_tool(Tool::Add(kind));
        host.commit(editor.on_pointer_down(host.view(), Point::new(x, y)));
    }
    editor.set_tool(Tool::Connect);
    host.commit(editor.on_pointer_down(host.view(), Point::new(110.0, 50.0)));
    host.commit(editor.on_pointer_down(host.view(), Point::new(310.0, 60.0)));

    let json = host.diagram.to_json().unwrap();
    let back = Diagram::from_json(&json).unwrap();
    assert_eq!(back, host.diagram);
    assert_eq!(back.nodes[0].x, 100.0);
    assert_eq!(back.edges.len(), 1);
}

#[test]
fn lane_reorder_changes_where_new_nodes_land() {
    let mut host = two_lane_host();
    let mut editor = Editor::new(EditorConfig::default());

    host.commit(editor.move_lane_down(host.view(), 0));
    assert_eq!(host.lanes[0].id, "B");

    editor.set_tool(Tool::Add(NodeKind::Task));
    host.commit(editor.on_pointer_down(host.view(), Point::new(300.0, 90.0)));
    assert_eq!(host.diagram.nodes[0].lane_id.as_deref(), Some("B"));

    let scene = editor.scene(host.view());
    assert_eq!(scene.lanes[0].role, "Enfermería");
    assert_eq!(scene.nodes.len(), 1);
}
