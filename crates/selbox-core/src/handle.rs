// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::{Point, Rect};

pub const DEFAULT_HANDLE_SIZE: i32 = 3;

/// Resize grips around the selection. `None` means "no handle".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Handle {
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl Handle {
    /// Live handles in hit-test order: corners first, then edges.
    pub const ALL: [Handle; 8] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
    ];

    /// Anchor that stays put while this handle is dragged.
    ///
    /// Edge handles anchor on a corner, not on the opposite edge, so dragging
    /// an edge resizes both axes around that corner.
    pub fn opposite_point(self, bounds: Rect) -> Option<Point> {
        let p = match self {
            Handle::None => return None,
            Handle::TopLeft | Handle::Top | Handle::Left => bounds.bottom_right(),
            Handle::BottomRight | Handle::Bottom | Handle::Right => bounds.top_left(),
            Handle::TopRight => bounds.bottom_left(),
            Handle::BottomLeft => bounds.top_right(),
        };
        Some(p)
    }

    fn slot(self) -> Option<usize> {
        Handle::ALL.iter().position(|h| *h == self)
    }
}

/// Hit rectangles for the eight handles of one selection.
///
/// Corner handles are `size`-square and sit just inside their corner; edge
/// handles are `size`-thick bands along the full edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleLayout {
    size: i32,
    rects: [Rect; 8],
}

impl HandleLayout {
    pub fn new(size: i32) -> Self {
        Self {
            size: size.max(1),
            rects: [Rect::default(); 8],
        }
    }

    pub fn for_bounds(bounds: Rect, size: i32) -> Self {
        let mut layout = Self::new(size);
        layout.recompute(bounds);
        layout
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn recompute(&mut self, bounds: Rect) {
        let s = self.size;
        let (left, top, w, h) = (bounds.x, bounds.y, bounds.w, bounds.h);
        let right = bounds.right();
        let bottom = bounds.bottom();

        self.rects = [
            Rect::new(left, top, s, s),
            Rect::new(right - s, top, s, s),
            Rect::new(left, bottom - s, s, s),
            Rect::new(right - s, bottom - s, s, s),
            Rect::new(left, top, w, s),
            Rect::new(left, bottom - s, w, s),
            Rect::new(left, top, s, h),
            Rect::new(right - s, top, s, h),
        ];
    }

    pub fn get(&self, handle: Handle) -> Option<Rect> {
        handle.slot().map(|i| self.rects[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Handle, Rect)> + '_ {
        Handle::ALL.iter().copied().zip(self.rects.iter().copied())
    }

    /// First handle (in [`Handle::ALL`] order) containing `p`.
    pub fn hit_test(&self, p: Point) -> Handle {
        self.iter()
            .find(|(_, r)| r.contains(p))
            .map(|(h, _)| h)
            .unwrap_or(Handle::None)
    }
}

impl Default for HandleLayout {
    fn default() -> Self {
        Self::new(DEFAULT_HANDLE_SIZE)
    }
}
