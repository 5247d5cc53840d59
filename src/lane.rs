//! Lanes (actors/roles): the record type, sparse updates, and the pure
//! sequence operations behind the reorder and recolor controls.
//!
//! Lane order is owned by the host. Nothing here reorders in place; every
//! operation returns a fresh sequence for the host to commit.

#[cfg(test)]
#[path = "lane_test.rs"]
mod lane_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LANE_COLOR, DEFAULT_LANE_ID, DEFAULT_LANE_ROLE, LANE_COLORS};

/// Identifier of a lane. Free-form text as stored in the host record.
pub type LaneId = String;

/// One horizontal swimlane, i.e. an actor or role in the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lane {
    pub id: LaneId,
    /// Display label.
    pub role: String,
    /// Free-text responsibilities carried by the host record.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub responsibilities: String,
    /// CSS fill color of the band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Declared by the host; layout ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
}

impl Lane {
    #[must_use]
    pub fn new(id: impl Into<LaneId>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: role.into(),
            responsibilities: String::new(),
            color: None,
            is_collapsed: None,
        }
    }

    /// The synthetic lane standing in for an empty lane list.
    #[must_use]
    pub fn fallback() -> Self {
        Self { color: Some(DEFAULT_LANE_COLOR.to_owned()), ..Self::new(DEFAULT_LANE_ID, DEFAULT_LANE_ROLE) }
    }

    /// Fill color, falling back to white.
    #[must_use]
    pub fn fill(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_LANE_COLOR)
    }
}

/// Sparse update for a lane. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialLane {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_collapsed: Option<bool>,
}

impl PartialLane {
    /// A change touching only the color.
    #[must_use]
    pub fn color(color: impl Into<String>) -> Self {
        Self { color: Some(color.into()), ..Self::default() }
    }
}

/// Return `lanes`, or the single fallback lane when `lanes` is empty.
///
/// Call this once before layout or hit-testing; the result is never empty.
#[must_use]
pub fn resolve_lanes(lanes: &[Lane]) -> Vec<Lane> {
    if lanes.is_empty() {
        vec![Lane::fallback()]
    } else {
        lanes.to_vec()
    }
}

/// Copy of `lanes` with positions `a` and `b` exchanged.
///
/// An out-of-range index yields an unchanged copy.
#[must_use]
pub fn swap_lanes(lanes: &[Lane], a: usize, b: usize) -> Vec<Lane> {
    let mut out = lanes.to_vec();
    if a < out.len() && b < out.len() {
        out.swap(a, b);
    }
    out
}

/// Move the lane at `index` one position up. `None` when it is already first.
#[must_use]
pub fn move_lane_up(lanes: &[Lane], index: usize) -> Option<Vec<Lane>> {
    (index > 0 && index < lanes.len()).then(|| swap_lanes(lanes, index, index - 1))
}

/// Move the lane at `index` one position down. `None` when it is already last.
#[must_use]
pub fn move_lane_down(lanes: &[Lane], index: usize) -> Option<Vec<Lane>> {
    (index + 1 < lanes.len()).then(|| swap_lanes(lanes, index, index + 1))
}

/// Copy of `lanes` with the color of lane `id` replaced.
#[must_use]
pub fn recolor_lane(lanes: &[Lane], id: &str, color: &str) -> Vec<Lane> {
    apply_lane_changes(lanes, id, &PartialLane::color(color))
}

/// Copy of `lanes` with `changes` merged into lane `id`. Unknown ids are ignored.
#[must_use]
pub fn apply_lane_changes(lanes: &[Lane], id: &str, changes: &PartialLane) -> Vec<Lane> {
    lanes
        .iter()
        .map(|lane| {
            if lane.id != id {
                return lane.clone();
            }
            let mut lane = lane.clone();
            if let Some(role) = &changes.role {
                lane.role.clone_from(role);
            }
            if let Some(responsibilities) = &changes.responsibilities {
                lane.responsibilities.clone_from(responsibilities);
            }
            if let Some(color) = &changes.color {
                lane.color = Some(color.clone());
            }
            if let Some(collapsed) = changes.is_collapsed {
                lane.is_collapsed = Some(collapsed);
            }
            lane
        })
        .collect()
}

/// The palette entry after `lane`'s current color.
///
/// A lane without a color counts as white; a color outside the palette
/// wraps to the first entry.
#[must_use]
pub fn next_lane_color(lane: &Lane) -> &'static str {
    let current = lane.fill();
    let next = LANE_COLORS
        .iter()
        .position(|c| *c == current)
        .map_or(0, |i| (i + 1) % LANE_COLORS.len());
    LANE_COLORS[next]
}
