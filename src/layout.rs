//! Lane layout: stacks lanes into horizontal bands and answers which band a
//! canvas y-coordinate falls in.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::lane::{Lane, LaneId, resolve_lanes};

/// A lane placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneBand {
    pub lane: Lane,
    /// Top edge of the band in canvas units.
    pub y: f64,
    pub height: f64,
}

impl LaneBand {
    /// Half-open containment: the top edge belongs to this band, the bottom
    /// edge to the next one.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y && y < self.y + self.height
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Bands for every lane plus the overall canvas extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneLayout {
    /// Never empty.
    pub bands: Vec<LaneBand>,
    pub total_height: f64,
}

impl LaneLayout {
    /// Lay out `lanes` top to bottom, substituting the fallback lane for an
    /// empty list first.
    #[must_use]
    pub fn compute(lanes: &[Lane], config: &EditorConfig) -> Self {
        layout_bands(&resolve_lanes(lanes), config)
    }

    /// First band (top to bottom) containing `y`.
    #[must_use]
    pub fn band_at(&self, y: f64) -> Option<&LaneBand> {
        self.bands.iter().find(|band| band.contains_y(y))
    }

    /// Lane id for `y`, or `None` when `y` is outside every band.
    #[must_use]
    pub fn lane_at(&self, y: f64) -> Option<&LaneId> {
        self.band_at(y).map(|band| &band.lane.id)
    }

    /// Lane id for `y`, falling back to the first lane.
    #[must_use]
    pub fn lane_at_or_first(&self, y: f64) -> Option<&LaneId> {
        self.lane_at(y).or_else(|| self.bands.first().map(|band| &band.lane.id))
    }

    /// Band of lane `id`, if it is laid out.
    #[must_use]
    pub fn band_of(&self, id: &str) -> Option<&LaneBand> {
        self.bands.iter().find(|band| band.lane.id == id)
    }
}

/// Lay out an already-resolved lane list. Heights are uniform.
fn layout_bands(lanes: &[Lane], config: &EditorConfig) -> LaneLayout {
    let mut current_y = 0.0;
    let bands: Vec<LaneBand> = lanes
        .iter()
        .map(|lane| {
            let band = LaneBand { lane: lane.clone(), y: current_y, height: config.lane_height };
            current_y += config.lane_height;
            band
        })
        .collect();

    let content_height = bands.last().map_or(0.0, LaneBand::bottom);
    LaneLayout { bands, total_height: content_height.max(config.min_canvas_height) }
}
