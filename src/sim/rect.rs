//! Axis-aligned rectangle geometry for tiles and avatars
//!
//! Rectangles are stored as a center point plus half-extents. Coordinates
//! follow the screen convention: x grows right, y grows down, so
//! top = center.y - half.y and bottom = center.y + half.y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Center point
    pub center: Vec2,
    /// Half-extents, strictly positive
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        debug_assert!(center.is_finite(), "rect center must be finite");
        debug_assert!(
            half.is_finite() && half.x > 0.0 && half.y > 0.0,
            "rect half-extents must be positive"
        );
        Self { center, half }
    }

    /// Square rectangle from a center and a side length
    pub fn square(center: Vec2, side: f32) -> Self {
        Self::new(center, Vec2::splat(side / 2.0))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict overlap test: rectangles sharing an edge or a corner do not
    /// overlap. All collision checks in the sim go through this one test.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Inclusive point containment: points exactly on an edge count
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Playfield extent in world units
///
/// The loader pads both axes by one boundary-line width, so the usable
/// floor sits one unit above `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}
