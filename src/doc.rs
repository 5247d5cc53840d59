//! Document model: diagram nodes and edges, the persisted diagram value, and
//! the pure mutations the controller applies to it.
//!
//! Every mutation takes `&self` and returns a new [`Diagram`]. The host owns
//! the authoritative copy and decides whether to commit the result.
//!
//! Edges and node lane assignments are weak references by id. A lookup miss
//! means "absent" and is never an error: traversals skip dangling edges, and
//! the edges themselves stay until explicitly removed.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::lane::{Lane, LaneId};
use crate::layout::LaneLayout;

/// Identifier of a node. Free-form text as stored in the host record.
pub type NodeId = String;

/// Identifier of an edge.
pub type EdgeId = String;

/// The kind of a diagram node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Start event, drawn as a circle.
    Start,
    /// Activity, drawn as a rounded rectangle.
    Task,
    /// Decision point, drawn as a diamond.
    Gateway,
    /// End event, drawn as a thick circle.
    End,
}

impl NodeKind {
    /// Label given to freshly added nodes of this kind.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Start => "Inicio",
            Self::End => "Fin",
            Self::Task | Self::Gateway => "Tarea",
        }
    }
}

/// A node as stored in the diagram and in the host record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Centre x in canvas coordinates.
    pub x: f64,
    /// Centre y in canvas coordinates.
    pub y: f64,
    pub label: String,
    /// Owning lane. Weak reference; may name a lane that no longer exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane_id: Option<LaneId>,
}

impl Node {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: EdgeId,
    pub source_id: NodeId,
    pub target_id: NodeId,
}

impl Edge {
    /// Whether either end of this edge is `node_id`.
    #[must_use]
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}

/// An edge whose endpoints both resolved to nodes.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedEdge<'a> {
    pub edge: &'a Edge,
    pub source: &'a Node,
    pub target: &'a Node,
}

/// Errors produced while decoding or encoding persisted diagrams.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// The JSON text did not match the expected shape.
    #[error("diagram decode failed: {0}")]
    Decode(#[source] serde_json::Error),

    /// Serialization failed.
    #[error("diagram encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Fresh node id. UUID-backed so ids minted in the same instant never collide.
#[must_use]
pub fn new_node_id() -> NodeId {
    format!("n-{}", Uuid::new_v4())
}

/// Fresh edge id.
#[must_use]
pub fn new_edge_id() -> EdgeId {
    format!("e-{}", Uuid::new_v4())
}

/// The persisted diagram: nodes and edges in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Diagram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a diagram from its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the text is not a valid diagram.
    pub fn from_json(text: &str) -> Result<Self, DiagramError> {
        serde_json::from_str(text).map_err(DiagramError::Decode)
    }

    /// Encode this diagram to its persisted JSON form.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, DiagramError> {
        serde_json::to_string(self).map_err(DiagramError::Encode)
    }

    // --- Queries ---

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges whose endpoints both exist, with the endpoints resolved.
    pub fn resolved_edges(&self) -> impl Iterator<Item = ResolvedEdge<'_>> + '_ {
        self.edges.iter().filter_map(|edge| {
            Some(ResolvedEdge { edge, source: self.node(&edge.source_id)?, target: self.node(&edge.target_id)? })
        })
    }

    /// Edges with at least one endpoint missing from the node set.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges
            .iter()
            .filter(|edge| self.node(&edge.source_id).is_none() || self.node(&edge.target_id).is_none())
    }

    /// Nodes whose `lane_id` is missing or names none of `lanes`.
    pub fn orphaned_nodes<'a>(&'a self, lanes: &'a [Lane]) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |node| match &node.lane_id {
            Some(id) => !lanes.iter().any(|lane| &lane.id == id),
            None => true,
        })
    }

    // --- Mutations ---

    /// Append a node of `kind` at `at` in lane `lane_id`, with a fresh id and
    /// the kind's default label. Returns the new diagram and the node's id.
    #[must_use]
    pub fn add_node(&self, kind: NodeKind, at: Point, lane_id: Option<LaneId>) -> (Self, NodeId) {
        let node = Node {
            id: new_node_id(),
            kind,
            x: at.x,
            y: at.y,
            label: kind.default_label().to_owned(),
            lane_id,
        };
        let id = node.id.clone();
        let mut next = self.clone();
        next.nodes.push(node);
        (next, id)
    }

    /// Move node `id` to `to`, reassigning its lane from the band containing
    /// the new y. Outside every band the lane is left as it was.
    #[must_use]
    pub fn move_node(&self, id: &str, to: Point, layout: &LaneLayout) -> Self {
        self.map_node(id, |node| {
            node.x = to.x;
            node.y = to.y;
            if let Some(lane) = layout.lane_at(to.y) {
                node.lane_id = Some(lane.clone());
            }
        })
    }

    /// Replace the label of node `id`.
    #[must_use]
    pub fn relabel_node(&self, id: &str, label: &str) -> Self {
        self.map_node(id, |node| label.clone_into(&mut node.label))
    }

    /// Point node `id` at lane `lane_id` without moving it.
    #[must_use]
    pub fn assign_lane(&self, id: &str, lane_id: Option<LaneId>) -> Self {
        self.map_node(id, |node| node.lane_id.clone_from(&lane_id))
    }

    /// Remove node `id` and every edge touching it.
    #[must_use]
    pub fn delete_node(&self, id: &str) -> Self {
        Self {
            nodes: self.nodes.iter().filter(|n| n.id != id).cloned().collect(),
            edges: self.edges.iter().filter(|e| !e.touches(id)).cloned().collect(),
        }
    }

    /// Append an edge `source → target` with a fresh id. Any pair is accepted,
    /// including repeats and self-loops. Returns the new diagram and the edge's id.
    #[must_use]
    pub fn add_edge(&self, source: &str, target: &str) -> (Self, EdgeId) {
        let edge = Edge { id: new_edge_id(), source_id: source.to_owned(), target_id: target.to_owned() };
        let id = edge.id.clone();
        let mut next = self.clone();
        next.edges.push(edge);
        (next, id)
    }

    /// Remove edge `id`.
    #[must_use]
    pub fn delete_edge(&self, id: &str) -> Self {
        Self { nodes: self.nodes.clone(), edges: self.edges.iter().filter(|e| e.id != id).cloned().collect() }
    }

    fn map_node<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(&mut Node),
    {
        let mut next = self.clone();
        if let Some(node) = next.nodes.iter_mut().find(|n| n.id == id) {
            f(node);
        }
        next
    }
}

/// The slice of a host process record the editor reads: its actors and its
/// diagram. Every other record field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessView {
    #[serde(default)]
    pub actors: Vec<Lane>,
    #[serde(default)]
    pub diagram: Diagram,
}

impl ProcessView {
    /// Decode a process record, or a bare diagram when the text has no
    /// `diagram` key.
    ///
    /// # Errors
    ///
    /// Returns `Decode` if the text is neither shape.
    pub fn from_json(text: &str) -> Result<Self, DiagramError> {
        let value: serde_json::Value = serde_json::from_str(text).map_err(DiagramError::Decode)?;
        if value.get("diagram").is_some() || value.get("actors").is_some() {
            serde_json::from_value(value).map_err(DiagramError::Decode)
        } else {
            let diagram = serde_json::from_value(value).map_err(DiagramError::Decode)?;
            Ok(Self { actors: Vec::new(), diagram })
        }
    }
}
