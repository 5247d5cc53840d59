//! Screen ↔ canvas coordinate conversion.
//!
//! Node positions live in one fixed logical canvas space (origin top-left).
//! The host owns scrolling and zooming and describes them with a [`Camera`];
//! the controller inverts it for every pointer event.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Host-supplied view transform.
///
/// `pan_x` / `pan_y` are the screen position of the canvas origin.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Whether this transform can be inverted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.zoom.is_finite() && self.zoom > 0.0 && self.pan_x.is_finite() && self.pan_y.is_finite()
    }

    /// Convert a screen-space point to canvas coordinates.
    ///
    /// Returns `None` when the transform is degenerate or the result is not a
    /// finite point.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Option<Point> {
        if !self.is_invertible() {
            return None;
        }
        let canvas = Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        };
        canvas.is_finite().then_some(canvas)
    }

    /// Convert a canvas-space point to screen coordinates.
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point {
            x: canvas.x * self.zoom + self.pan_x,
            y: canvas.y * self.zoom + self.pan_y,
        }
    }
}
