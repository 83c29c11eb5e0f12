//! Axis-aligned bounding box collision
//!
//! Every entity collides as a rectangle, whatever shape it is drawn with.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Rectangle whose top-left corner is at `top_left`
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            size,
        }
    }

    /// Rectangle centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

/// Check whether two rectangles overlap
///
/// Strict comparisons: rectangles that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_top_left(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_contained() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_edge_touching_is_not_a_hit() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // a.right == b.left
        assert!(!overlaps(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        // a.bottom == b.top
        assert!(!overlaps(&a, &rect(0.0, 10.0, 10.0, 10.0)));
        // corner contact
        assert!(!overlaps(&a, &rect(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_separated() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &rect(30.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &rect(0.0, -30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(r.left(), 8.0);
        assert_eq!(r.right(), 12.0);
        assert_eq!(r.top(), 17.0);
        assert_eq!(r.bottom(), 23.0);
        assert_eq!(r.center(), Vec2::new(10.0, 20.0));
    }
}
