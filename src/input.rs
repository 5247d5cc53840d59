//! Input model: editor modes and the per-mode gesture state.
//!
//! `Mode` is the controller's whole interaction state. Each variant carries
//! only the sub-state meaningful in that mode, so a drag can only exist in
//! `Select` and a pending connection only in `Connect`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::doc::{NodeId, NodeKind};

/// Toolbar choice, as sent by the host's mode buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place one node of the given kind.
    Add(NodeKind),
    /// Connect two nodes with an edge.
    Connect,
}

/// An in-progress node drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Drag {
    /// Node being dragged.
    pub id: NodeId,
    /// Pointer position minus node position at pointer-down, in canvas units.
    pub offset: Point,
}

impl Drag {
    /// Where the node goes when the pointer is at `pointer`.
    #[must_use]
    pub fn node_position(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Interaction state of the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Selecting and dragging nodes.
    Select {
        /// Node whose label and delete controls are shown.
        selected: Option<NodeId>,
        /// Active drag, between pointer-down on a node and pointer-up.
        drag: Option<Drag>,
    },
    /// Next pointer-down on empty canvas creates one node of this kind.
    Add(NodeKind),
    /// Clicking two distinct nodes creates an edge between them.
    Connect {
        /// First node clicked, waiting for a target.
        pending: Option<NodeId>,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Self::idle()
    }
}

impl Mode {
    /// `Select` with nothing selected and no drag.
    #[must_use]
    pub fn idle() -> Self {
        Self::Select { selected: None, drag: None }
    }

    /// Fresh state for `tool`, with no carried-over sub-state.
    #[must_use]
    pub fn for_tool(tool: Tool) -> Self {
        match tool {
            Tool::Select => Self::idle(),
            Tool::Add(kind) => Self::Add(kind),
            Tool::Connect => Self::Connect { pending: None },
        }
    }

    /// The toolbar choice this mode corresponds to.
    #[must_use]
    pub fn tool(&self) -> Tool {
        match self {
            Self::Select { .. } => Tool::Select,
            Self::Add(kind) => Tool::Add(*kind),
            Self::Connect { .. } => Tool::Connect,
        }
    }

    /// Selected node, only ever present in `Select`.
    #[must_use]
    pub fn selected(&self) -> Option<&NodeId> {
        match self {
            Self::Select { selected, .. } => selected.as_ref(),
            _ => None,
        }
    }

    /// Pending connection source, only ever present in `Connect`.
    #[must_use]
    pub fn pending(&self) -> Option<&NodeId> {
        match self {
            Self::Connect { pending } => pending.as_ref(),
            _ => None,
        }
    }

    /// Active drag, only ever present in `Select`.
    #[must_use]
    pub fn drag(&self) -> Option<&Drag> {
        match self {
            Self::Select { drag, .. } => drag.as_ref(),
            _ => None,
        }
    }

    /// Whether `id` should be drawn highlighted (selected or pending source).
    #[must_use]
    pub fn is_highlighted(&self, id: &str) -> bool {
        self.selected().is_some_and(|s| s == id) || self.pending().is_some_and(|p| p == id)
    }
}
