//! Swimlane diagram editor core for clinical process models.
//!
//! The host application owns a process record with an ordered list of
//! actors and a diagram of nodes and edges. This crate turns the actors into
//! horizontal lane bands, interprets pointer input against those bands, and
//! hands back new diagram and lane values for the host to commit. It never
//! stores the diagram itself and never draws anything; [`scene`] describes
//! what to draw and leaves the drawing to the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Editor`] controller and the [`engine::Action`]s it emits |
//! | [`input`] | Editor modes and per-mode gesture state |
//! | [`doc`] | Nodes, edges, the persisted diagram, and its pure mutations |
//! | [`lane`] | Lanes, sparse lane updates, reorder and recolor helpers |
//! | [`layout`] | Lane bands and y-coordinate hit-testing |
//! | [`hit`] | Node shape hit-testing |
//! | [`camera`] | Screen ↔ canvas coordinate conversion |
//! | [`scene`] | Renderer-agnostic draw list |
//! | [`config`] | Editor geometry with environment overrides |
//! | [`consts`] | Shared numeric and palette constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod lane;
pub mod layout;
pub mod scene;

pub use camera::{Camera, Point};
pub use config::{ConfigError, EditorConfig};
pub use doc::{Diagram, DiagramError, Edge, Node, NodeKind, ProcessView};
pub use engine::{Action, Editor, View};
pub use input::{Mode, Tool};
pub use lane::{Lane, PartialLane, resolve_lanes};
pub use layout::{LaneBand, LaneLayout};
pub use scene::Scene;
