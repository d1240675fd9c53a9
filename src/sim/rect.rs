//! Integer axis-aligned rectangles

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space rectangle; `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centred on `center` (truncated to whole pixels)
    pub fn centered(center: Vec2, width: i32, height: i32) -> Self {
        Self::new(
            center.x as i32 - width / 2,
            center.y as i32 - height / 2,
            width,
            height,
        )
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(100, 100, 50, 50);
        let b = Rect::new(110, 110, 50, 50);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        let c = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_containment_counts() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(200.5, 200.9), 46, 17);
        assert_eq!(r, Rect::new(177, 192, 46, 17));
        assert_eq!(r.right(), 223);
        assert_eq!(r.bottom(), 209);
    }
}
