//! Hit-testing pointer positions against node shapes.
//!
//! Shapes are centred on the node position: start and end events are
//! circles, gateways are diamonds, tasks are rectangles. Nodes later in the
//! diagram are drawn on top, so they win overlapping hits.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::consts::{EVENT_SIZE, GATEWAY_HALF_DIAGONAL, NODE_HEIGHT, NODE_WIDTH};
use crate::doc::{Diagram, Node, NodeId, NodeKind};

/// Whether canvas point `pt` lies inside `node`'s shape (edges inclusive).
#[must_use]
pub fn node_contains(node: &Node, pt: Point) -> bool {
    let dx = pt.x - node.x;
    let dy = pt.y - node.y;
    match node.kind {
        NodeKind::Start | NodeKind::End => {
            let r = EVENT_SIZE / 2.0;
            dx * dx + dy * dy <= r * r
        }
        NodeKind::Gateway => dx.abs() + dy.abs() <= GATEWAY_HALF_DIAGONAL,
        NodeKind::Task => dx.abs() <= NODE_WIDTH / 2.0 && dy.abs() <= NODE_HEIGHT / 2.0,
    }
}

/// Topmost node under canvas point `pt`, if any.
#[must_use]
pub fn hit_test(pt: Point, diagram: &Diagram) -> Option<&NodeId> {
    if !pt.is_finite() {
        return None;
    }
    diagram.nodes.iter().rev().find(|node| node_contains(node, pt)).map(|node| &node.id)
}
