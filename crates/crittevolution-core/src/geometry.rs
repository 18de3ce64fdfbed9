//! Axis-aligned regions and toroidal wrapping

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{WORLD_HEIGHT, WORLD_WIDTH};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner (exclusive)
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Check whether a point lies inside (left/top edges inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }

    /// Check whether two rectangles overlap with a non-empty area
    pub fn intersects(&self, other: &Rect) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max().min(other.max());
        lo.x < hi.x && lo.y < hi.y
    }
}

/// Wrap a position that left the world so it re-enters at the opposite edge.
///
/// Each axis is handled independently. Positions exactly on an edge are kept.
pub fn wrap_position(position: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, WORLD_WIDTH),
        wrap_axis(position.y, WORLD_HEIGHT),
    )
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
