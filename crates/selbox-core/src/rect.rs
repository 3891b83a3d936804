// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

/// A position in the host surface's local coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Size of the host surface. Queried on every clamped operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; `x,y` is always the top-left corner and the
/// extents are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Canonical rectangle spanning two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: (a.x - b.x).abs(),
            h: (a.y - b.y).abs(),
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    /// Same area with any negative extent flipped, so `x,y` is the top-left.
    pub fn normalized(self) -> Self {
        Self::from_corners(self.top_left(), self.bottom_right())
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Repositions the rectangle inside `extent` without touching its size.
    ///
    /// The far-edge rule runs after the near-edge rule, so a rectangle wider
    /// (or taller) than the host ends up with a negative origin on that axis.
    pub fn clamped_to(self, extent: Extent) -> Self {
        let mut r = self;
        if r.x < 0 {
            r.x = 0;
        }
        if r.x + r.w > extent.width {
            r.x = extent.width - r.w;
        }
        if r.y < 0 {
            r.y = 0;
        }
        if r.y + r.h > extent.height {
            r.y = extent.height - r.h;
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_corners_is_canonical_in_every_direction() {
        let a = Point::new(50, 80);
        for b in [
            Point::new(10, 20),
            Point::new(90, 20),
            Point::new(10, 120),
            Point::new(90, 120),
        ] {
            let r = Rect::from_corners(a, b);
            assert_eq!(r.x, a.x.min(b.x));
            assert_eq!(r.y, a.y.min(b.y));
            assert!(r.w >= 0 && r.h >= 0);
            assert_eq!(r, Rect::from_corners(b, a));
        }
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0, 0, 100, 100);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(99, 0)));
        assert!(r.contains(Point::new(0, 99)));
        assert!(!r.contains(Point::new(100, 0)));
        assert!(!r.contains(Point::new(0, 100)));
        assert!(r.contains(Point::new(50, 50)));
    }

    #[test]
    fn normalized_flips_negative_extents() {
        assert_eq!(Rect::new(10, 10, -50, 20).normalized(), Rect::new(-40, 10, 50, 20));
        assert_eq!(Rect::new(10, 10, 5, -5).normalized(), Rect::new(10, 5, 5, 5));
        assert_eq!(Rect::new(1, 2, 3, 4).normalized(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(10, 10, 0, 0);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(10, 10)));
    }

    #[test]
    fn clamp_moves_far_edge_back_inside() {
        let host = Extent::new(800, 600);
        let r = Rect::new(400, 100, 500, 100).clamped_to(host);
        assert_eq!(r, Rect::new(300, 100, 500, 100));

        let r = Rect::new(100, 400, 100, 400).clamped_to(host);
        assert_eq!(r, Rect::new(100, 200, 100, 400));
    }

    #[test]
    fn clamp_pulls_negative_origin_to_zero() {
        let host = Extent::new(800, 600);
        assert_eq!(Rect::new(-100, 100, 100, 100).clamped_to(host).x, 0);
        assert_eq!(Rect::new(100, -100, 100, 100).clamped_to(host).y, 0);
    }

    #[test]
    fn clamp_of_oversized_rect_goes_negative() {
        let host = Extent::new(800, 600);
        let r = Rect::new(-5, 10, 1000, 50).clamped_to(host);
        assert_eq!(r, Rect::new(-200, 10, 1000, 50));

        let r = Rect::new(10, 10, 50, 700).clamped_to(host);
        assert_eq!(r, Rect::new(10, -100, 50, 700));
    }
}
