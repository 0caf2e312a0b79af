//! Chart geometry scales and SVG path serialization.
//!
//! The engine emits paths in logical `(hour, lane)` space; this module owns
//! the linear mapping onto a drawing surface and the SVG `d`-attribute
//! serialization the log-grid renderer consumes. Both are pure: scaling all
//! interval times by a factor and the chart width by the same factor yields
//! geometrically similar output.

use serde::{Deserialize, Serialize};

use crate::{LANE_COUNT, TimelinePath};

/// Pixel dimensions of the 24-hour grid body.
///
/// `width` spans the full 24 hours; each duty status row is `lane_height`
/// tall and the trace runs along each row's vertical center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub width: f64,
    pub lane_height: f64,
}

impl ChartGeometry {
    pub fn new(width: f64, lane_height: f64) -> Self {
        Self { width, lane_height }
    }

    /// Horizontal position for an hour offset.
    pub fn x(&self, hour: f64) -> f64 {
        hour * (self.width / 24.0)
    }

    /// Vertical position for a lane: the row's center line.
    pub fn y(&self, lane: u8) -> f64 {
        lane as f64 * self.lane_height + self.lane_height / 2.0
    }

    /// Total height of the grid body.
    pub fn height(&self) -> f64 {
        self.lane_height * LANE_COUNT as f64
    }
}

impl Default for ChartGeometry {
    /// The paper-grid dimensions: 800 wide, 40 per row.
    fn default() -> Self {
        Self::new(800.0, 40.0)
    }
}

/// Serialize a timeline path as SVG path data: `M x y` for the first vertex,
/// `L x y` for every following one. An empty path serializes to an empty
/// string (render nothing).
pub fn svg_path_data(path: &TimelinePath, geometry: &ChartGeometry) -> String {
    let mut data = String::new();
    for (i, point) in path.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{cmd} {} {}", geometry.x(point.hour), geometry.y(point.lane)));
    }
    data
}
