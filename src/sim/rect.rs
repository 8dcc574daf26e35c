//! Axis-aligned rectangle geometry for the ball and pipes
//!
//! Screen space: origin at the play area's top-left corner, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Standard AABB overlap with strict inequality on all four comparisons.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlap_from_every_side() {
        let pipe = Rect::new(100.0, 100.0, 50.0, 100.0);
        // Left, right, above, below, inside
        assert!(Rect::new(85.0, 150.0, 20.0, 20.0).overlaps(&pipe));
        assert!(Rect::new(145.0, 150.0, 20.0, 20.0).overlaps(&pipe));
        assert!(Rect::new(120.0, 85.0, 20.0, 20.0).overlaps(&pipe));
        assert!(Rect::new(120.0, 195.0, 20.0, 20.0).overlaps(&pipe));
        assert!(Rect::new(110.0, 110.0, 5.0, 5.0).overlaps(&pipe));
        // Symmetric
        assert!(pipe.overlaps(&Rect::new(85.0, 150.0, 20.0, 20.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let pipe = Rect::new(100.0, 100.0, 50.0, 100.0);
        assert!(!Rect::new(80.0, 150.0, 20.0, 20.0).overlaps(&pipe));
        assert!(!Rect::new(150.0, 150.0, 20.0, 20.0).overlaps(&pipe));
        assert!(!Rect::new(120.0, 80.0, 20.0, 20.0).overlaps(&pipe));
        assert!(!Rect::new(120.0, 200.0, 20.0, 20.0).overlaps(&pipe));
    }
}
