//! Shared numeric and palette constants for the editor.

// ── Layout ──────────────────────────────────────────────────────

/// Height of every lane band in canvas units.
pub const DEFAULT_LANE_HEIGHT: f64 = 180.0;

/// The canvas is never shorter than this, however few lanes exist.
pub const MIN_CANVAS_HEIGHT: f64 = 600.0;

/// Logical canvas width; lane bands span all of it.
pub const CANVAS_WIDTH: f64 = 2000.0;

/// Width of the lane header strip carrying the role label.
pub const LANE_HEADER_WIDTH: f64 = 50.0;

// ── Default lane ────────────────────────────────────────────────

/// Id of the synthetic lane used when the host supplies none.
pub const DEFAULT_LANE_ID: &str = "default";

/// Role label of the synthetic lane.
pub const DEFAULT_LANE_ROLE: &str = "Sin Asignar";

/// Fill of a lane with no color of its own.
pub const DEFAULT_LANE_COLOR: &str = "#ffffff";

/// Palette cycled through by the lane color control.
pub const LANE_COLORS: [&str; 6] = ["#ffffff", "#f0fdfa", "#f0f9ff", "#fefce8", "#fff1f2", "#f5f3ff"];

// ── Node shapes ─────────────────────────────────────────────────

/// Task rectangle width.
pub const NODE_WIDTH: f64 = 120.0;

/// Task rectangle height.
pub const NODE_HEIGHT: f64 = 80.0;

/// Diameter of start/end event circles.
pub const EVENT_SIZE: f64 = 40.0;

/// Distance from a gateway's centre to each of its diamond vertices.
pub const GATEWAY_HALF_DIAGONAL: f64 = 30.0;

/// Vertical label offset below the centre of a task.
pub const TASK_LABEL_OFFSET: f64 = 5.0;

/// Vertical label offset below the centre of events and gateways.
pub const EVENT_LABEL_OFFSET: f64 = 35.0;
