//! The interaction controller.
//!
//! [`Editor`] owns only interaction state: the current [`Mode`], the host's
//! camera, and the read-only flag. The diagram and lanes stay with the host,
//! which passes them in through a [`View`] on every call and commits
//! whatever [`Action`]s come back. Nothing is cached between calls, so the
//! editor can never act on a stale diagram.
//!
//! Every handler is total. Read-only editors, unknown ids, and unusable
//! camera transforms all produce an empty action list.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, trace, warn};

use crate::camera::{Camera, Point};
use crate::config::EditorConfig;
use crate::doc::{Diagram, NodeId};
use crate::hit;
use crate::input::{Drag, Mode, Tool};
use crate::lane::{self, Lane, LaneId, PartialLane};
use crate::layout::LaneLayout;
use crate::scene::{self, Scene};

/// Requests returned from handlers for the host to commit.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the diagram with this value.
    DiagramChanged(Diagram),
    /// Merge `changes` into lane `id`.
    LaneChanged { id: LaneId, changes: PartialLane },
    /// Replace the lane sequence with this one.
    LanesReordered(Vec<Lane>),
    /// Interaction state changed; redraw without any model change.
    RenderNeeded,
}

impl Action {
    /// Commit this action to host-held state.
    pub fn apply(self, diagram: &mut Diagram, lanes: &mut Vec<Lane>) {
        match self {
            Self::DiagramChanged(next) => *diagram = next,
            Self::LaneChanged { id, changes } => *lanes = lane::apply_lane_changes(lanes.as_slice(), &id, &changes),
            Self::LanesReordered(next) => *lanes = next,
            Self::RenderNeeded => {}
        }
    }
}

/// The host's current model, lent to the editor for one call.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub diagram: &'a Diagram,
    /// Lanes as the host stores them; may be empty.
    pub lanes: &'a [Lane],
}

impl<'a> View<'a> {
    #[must_use]
    pub fn new(diagram: &'a Diagram, lanes: &'a [Lane]) -> Self {
        Self { diagram, lanes }
    }
}

/// Interaction controller for one embedded diagram.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub mode: Mode,
    pub camera: Camera,
    pub config: EditorConfig,
    /// Suppresses every interaction (report/print embedding).
    pub read_only: bool,
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// An editor that only renders.
    #[must_use]
    pub fn read_only(config: EditorConfig) -> Self {
        Self { read_only: true, ..Self::new(config) }
    }

    // --- Queries ---

    /// Lane bands for the host's current lanes.
    #[must_use]
    pub fn layout(&self, view: View<'_>) -> LaneLayout {
        LaneLayout::compute(view.lanes, &self.config)
    }

    /// Renderer-agnostic description of what to draw.
    #[must_use]
    pub fn scene(&self, view: View<'_>) -> Scene {
        scene::build(view.diagram, &self.layout(view), &self.mode, &self.config, self.read_only)
    }

    /// The currently selected node, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&NodeId> {
        self.mode.selected()
    }

    /// Label of the selected node, for the host's label input.
    #[must_use]
    pub fn selected_label<'a>(&self, view: View<'a>) -> Option<&'a str> {
        let id = self.selection()?;
        view.diagram.node(id).map(|node| node.label.as_str())
    }

    // --- Tool / camera ---

    /// Switch mode, dropping any selection, drag, or pending connection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        debug!(?tool, "tool changed");
        self.mode = Mode::for_tool(tool);
        vec![Action::RenderNeeded]
    }

    /// Replace the view transform after the host scrolls or zooms.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    // --- Pointer events ---

    /// Pointer pressed at `screen`. Dispatches to the node under the pointer,
    /// or to the empty canvas when there is none.
    pub fn on_pointer_down(&mut self, view: View<'_>, screen: Point) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(canvas) = self.to_canvas(screen) else {
            return Vec::new();
        };
        match hit::hit_test(canvas, view.diagram) {
            Some(id) => self.node_down(view, id.clone(), Some(canvas)),
            None => self.canvas_down(view, canvas),
        }
    }

    /// Pointer pressed on node `id`, for hosts that dispatch per element.
    pub fn on_node_pointer_down(&mut self, view: View<'_>, id: &str, screen: Point) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let canvas = self.to_canvas(screen);
        self.node_down(view, id.to_owned(), canvas)
    }

    /// Pointer pressed on empty canvas, for hosts that dispatch per element.
    pub fn on_canvas_pointer_down(&mut self, view: View<'_>, screen: Point) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(canvas) = self.to_canvas(screen) else {
            return Vec::new();
        };
        self.canvas_down(view, canvas)
    }

    /// Pointer moved. While dragging, every move is a committed position.
    pub fn on_pointer_move(&mut self, view: View<'_>, screen: Point) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(drag) = self.mode.drag() else {
            return Vec::new();
        };
        if view.diagram.node(&drag.id).is_none() {
            return Vec::new();
        }
        let Some(canvas) = self.to_canvas(screen) else {
            return Vec::new();
        };
        let to = drag.node_position(canvas);
        trace!(node_id = %drag.id, x = to.x, y = to.y, "node dragged");
        let moved = view.diagram.move_node(&drag.id, to, &self.layout(view));
        vec![Action::DiagramChanged(moved)]
    }

    /// Pointer released. Ends any drag; the selection stays.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let Mode::Select { drag, .. } = &mut self.mode {
            *drag = None;
        }
        Vec::new()
    }

    // --- Selected-node controls ---

    /// Replace the selected node's label.
    pub fn relabel_selected(&mut self, view: View<'_>, label: &str) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(id) = self.selected_in(view) else {
            return Vec::new();
        };
        debug!(node_id = %id, "node relabelled");
        vec![Action::DiagramChanged(view.diagram.relabel_node(&id, label))]
    }

    /// Delete the selected node and its edges, then clear the selection.
    pub fn delete_selected(&mut self, view: View<'_>) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(id) = self.selected_in(view) else {
            return Vec::new();
        };
        debug!(node_id = %id, "node deleted");
        self.mode = Mode::idle();
        vec![Action::DiagramChanged(view.diagram.delete_node(&id))]
    }

    // --- Lane controls (any mode) ---

    /// Swap the lane at `index` with the one above it.
    pub fn move_lane_up(&mut self, view: View<'_>, index: usize) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        lane::move_lane_up(view.lanes, index).map_or_else(Vec::new, |lanes| vec![Action::LanesReordered(lanes)])
    }

    /// Swap the lane at `index` with the one below it.
    pub fn move_lane_down(&mut self, view: View<'_>, index: usize) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        lane::move_lane_down(view.lanes, index).map_or_else(Vec::new, |lanes| vec![Action::LanesReordered(lanes)])
    }

    /// Replace the lane order wholesale. The caller supplies a permutation.
    pub fn reorder_lanes(&mut self, lanes: Vec<Lane>) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        vec![Action::LanesReordered(lanes)]
    }

    /// Set lane `id`'s color.
    pub fn recolor_lane(&mut self, view: View<'_>, id: &str, color: &str) -> Vec<Action> {
        if self.read_only || !view.lanes.iter().any(|l| l.id == id) {
            return Vec::new();
        }
        vec![Action::LaneChanged { id: id.to_owned(), changes: PartialLane::color(color) }]
    }

    /// Advance lane `id` to the next palette color.
    pub fn cycle_lane_color(&mut self, view: View<'_>, id: &str) -> Vec<Action> {
        if self.read_only {
            return Vec::new();
        }
        let Some(current) = view.lanes.iter().find(|l| l.id == id) else {
            return Vec::new();
        };
        let color = lane::next_lane_color(current);
        vec![Action::LaneChanged { id: id.to_owned(), changes: PartialLane::color(color) }]
    }

    // --- Internals ---

    fn to_canvas(&self, screen: Point) -> Option<Point> {
        let canvas = self.camera.screen_to_canvas(screen);
        if canvas.is_none() {
            warn!(?screen, camera = ?self.camera, "screen-to-canvas transform unavailable; event ignored");
        }
        canvas
    }

    /// Selected node id, provided the node still exists.
    fn selected_in(&self, view: View<'_>) -> Option<NodeId> {
        self.selection().filter(|id| view.diagram.node(id).is_some()).cloned()
    }

    fn node_down(&mut self, view: View<'_>, id: NodeId, canvas: Option<Point>) -> Vec<Action> {
        match &mut self.mode {
            Mode::Connect { pending } => match pending.take() {
                None => {
                    debug!(node_id = %id, "connection started");
                    *pending = Some(id);
                    vec![Action::RenderNeeded]
                }
                Some(source) if source == id => {
                    *pending = Some(source);
                    Vec::new()
                }
                Some(source) => {
                    let (next, edge_id) = view.diagram.add_edge(&source, &id);
                    debug!(%edge_id, source_id = %source, target_id = %id, "edge added");
                    vec![Action::DiagramChanged(next)]
                }
            },
            Mode::Select { selected, drag } => {
                *drag = view
                    .diagram
                    .node(&id)
                    .zip(canvas)
                    .map(|(node, pt)| Drag { id: id.clone(), offset: Point::new(pt.x - node.x, pt.y - node.y) });
                *selected = Some(id);
                vec![Action::RenderNeeded]
            }
            Mode::Add(_) => Vec::new(),
        }
    }

    fn canvas_down(&mut self, view: View<'_>, canvas: Point) -> Vec<Action> {
        match self.mode {
            Mode::Add(kind) => {
                let layout = self.layout(view);
                let lane_id = layout.lane_at_or_first(canvas.y).cloned();
                let (next, node_id) = view.diagram.add_node(kind, canvas, lane_id);
                debug!(%node_id, ?kind, "node added");
                self.mode = Mode::idle();
                vec![Action::DiagramChanged(next)]
            }
            Mode::Select { .. } => {
                self.mode = Mode::idle();
                vec![Action::RenderNeeded]
            }
            Mode::Connect { .. } => {
                self.mode = Mode::Connect { pending: None };
                vec![Action::RenderNeeded]
            }
        }
    }
}
