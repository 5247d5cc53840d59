//! Scene description: what the presentation layer should draw, in draw order.
//!
//! This module computes geometry and state only. It never touches a drawing
//! backend and never mutates the model. Layers, bottom first:
//!
//! 1. lane bands, with their header and reorder/recolor affordances;
//! 2. edges between resolved node centres (dangling edges are skipped);
//! 3. nodes, highlighted when selected or waiting as a connection source.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::camera::Point;
use crate::config::EditorConfig;
use crate::consts::{EVENT_LABEL_OFFSET, LANE_HEADER_WIDTH, TASK_LABEL_OFFSET};
use crate::doc::{Diagram, EdgeId, Node, NodeId, NodeKind};
use crate::input::Mode;
use crate::lane::LaneId;
use crate::layout::LaneLayout;

/// One lane band to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneShape {
    pub id: LaneId,
    pub role: String,
    pub fill: String,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub header_width: f64,
    /// Show the "move up" control.
    pub can_move_up: bool,
    /// Show the "move down" control.
    pub can_move_down: bool,
    /// Show the color control.
    pub can_recolor: bool,
}

/// One arrow to draw, from source centre to target centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeShape {
    pub id: EdgeId,
    pub from: Point,
    pub to: Point,
}

/// One node to draw, centred on `center`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeShape {
    pub id: NodeId,
    pub kind: NodeKind,
    pub center: Point,
    pub label: String,
    /// Label baseline below the centre.
    pub label_offset: f64,
    pub highlighted: bool,
}

/// Everything to draw, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub lanes: Vec<LaneShape>,
    pub edges: Vec<EdgeShape>,
    pub nodes: Vec<NodeShape>,
}

/// Build the scene for `diagram` over `layout`.
///
/// Lane controls are suppressed when `read_only` is set.
#[must_use]
pub fn build(diagram: &Diagram, layout: &LaneLayout, mode: &Mode, config: &EditorConfig, read_only: bool) -> Scene {
    let count = layout.bands.len();
    let lanes = layout
        .bands
        .iter()
        .enumerate()
        .map(|(i, band)| LaneShape {
            id: band.lane.id.clone(),
            role: band.lane.role.clone(),
            fill: band.lane.fill().to_owned(),
            y: band.y,
            width: config.canvas_width,
            height: band.height,
            header_width: LANE_HEADER_WIDTH,
            can_move_up: !read_only && i > 0,
            can_move_down: !read_only && i + 1 < count,
            can_recolor: !read_only,
        })
        .collect();

    let edges = diagram
        .resolved_edges()
        .map(|r| EdgeShape { id: r.edge.id.clone(), from: r.source.position(), to: r.target.position() })
        .collect();

    let nodes = diagram.nodes.iter().map(|node| node_shape(node, mode)).collect();

    Scene { width: config.canvas_width, height: layout.total_height, lanes, edges, nodes }
}

fn node_shape(node: &Node, mode: &Mode) -> NodeShape {
    NodeShape {
        id: node.id.clone(),
        kind: node.kind,
        center: node.position(),
        label: node.label.clone(),
        label_offset: label_offset(node.kind),
        highlighted: mode.is_highlighted(&node.id),
    }
}

fn label_offset(kind: NodeKind) -> f64 {
    match kind {
        NodeKind::Task => TASK_LABEL_OFFSET,
        NodeKind::Start | NodeKind::Gateway | NodeKind::End => EVENT_LABEL_OFFSET,
    }
}
