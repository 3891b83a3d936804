// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::ratio::AspectRatio;
use crate::rect::{Extent, Point, Rect};

/// Constraint policies. Changing them never touches the current bounds;
/// they apply from the next mutation on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOptions {
    pub ratio: AspectRatio,
    pub ratio_enforced: bool,
    pub confine_to_host: bool,
}

/// Owner of the selection bounds and its visibility.
#[derive(Debug, Clone, Default)]
pub struct SelectionRect {
    bounds: Rect,
    visible: bool,
    options: SelectionOptions,
}

impl SelectionRect {
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn options(&self) -> SelectionOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SelectionOptions) {
        self.options = options;
    }

    pub fn ratio(&self) -> AspectRatio {
        self.options.ratio
    }

    pub fn set_ratio(&mut self, w: u32, h: u32) -> Result<(), SelectionError> {
        self.options.ratio = AspectRatio::new(w, h)?;
        Ok(())
    }

    pub fn is_ratio_enforced(&self) -> bool {
        self.options.ratio_enforced
    }

    pub fn set_ratio_enforced(&mut self, enforced: bool) {
        self.options.ratio_enforced = enforced;
    }

    pub fn is_confined(&self) -> bool {
        self.options.confine_to_host
    }

    pub fn set_confined(&mut self, confined: bool) {
        self.options.confine_to_host = confined;
    }

    /// Bounds for a drag from `fixed` to `moving`.
    ///
    /// The rectangle grows away from `fixed` towards `moving`; the ratio only
    /// changes its extent, never which corner is anchored.
    pub fn set_bounds_from_corners(&mut self, fixed: Point, moving: Point, host: Extent) {
        let mut w = (fixed.x - moving.x).abs();
        let mut h = (fixed.y - moving.y).abs();

        if self.options.ratio_enforced {
            (w, h) = self.options.ratio.fit(w, h);
        }

        let x = if fixed.x < moving.x { fixed.x } else { fixed.x - w };
        let y = if fixed.y < moving.y { fixed.y } else { fixed.y - h };

        self.bounds = self.confine(Rect::new(x, y, w, h), host);
    }

    /// Exact placement. No ratio adjustment, confinement still applies.
    /// A negative extent is flipped around `x,y` rather than rejected.
    pub fn set_bounds_absolute(&mut self, rect: Rect, host: Extent) {
        self.bounds = self.confine(rect.normalized(), host);
    }

    /// Shifts the bounds by `to - from`; the size is kept.
    pub fn translate(&mut self, from: Point, to: Point, host: Extent) {
        let moved = self.bounds.translated(to.x - from.x, to.y - from.y);
        self.bounds = self.confine(moved, host);
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn confine(&self, rect: Rect, host: Extent) -> Rect {
        if self.options.confine_to_host {
            rect.clamped_to(host)
        } else {
            rect
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: Extent = Extent::new(800, 600);

    fn confined() -> SelectionRect {
        SelectionRect::new(SelectionOptions {
            confine_to_host: true,
            ..SelectionOptions::default()
        })
    }

    fn with_ratio(w: u32, h: u32) -> SelectionRect {
        let mut sel = SelectionRect::default();
        sel.set_ratio(w, h).unwrap();
        sel.set_ratio_enforced(true);
        sel
    }

    #[test]
    fn corners_in_any_order_give_min_origin() {
        let mut sel = SelectionRect::default();
        let a = Point::new(300, 200);
        for b in [
            Point::new(100, 50),
            Point::new(500, 50),
            Point::new(100, 450),
            Point::new(500, 450),
            Point::new(300, 200),
        ] {
            sel.set_bounds_from_corners(a, b, HOST);
            let r = sel.bounds();
            assert_eq!((r.x, r.y), (a.x.min(b.x), a.y.min(b.y)));
            assert_eq!((r.w, r.h), ((a.x - b.x).abs(), (a.y - b.y).abs()));
        }
    }

    #[test]
    fn ratio_keeps_the_fixed_corner() {
        let mut sel = with_ratio(1, 1);

        // drag up-left from (200, 200): height wins, width shrinks
        sel.set_bounds_from_corners(Point::new(200, 200), Point::new(100, 150), HOST);
        assert_eq!(sel.bounds(), Rect::new(150, 150, 50, 50));

        // drag down-right: origin stays on the fixed point
        sel.set_bounds_from_corners(Point::new(200, 200), Point::new(300, 250), HOST);
        assert_eq!(sel.bounds(), Rect::new(200, 200, 50, 50));
    }

    #[test]
    fn tall_ratio_from_square_drag() {
        let mut sel = with_ratio(1, 2);
        sel.set_bounds_from_corners(Point::new(100, 100), Point::new(200, 200), HOST);
        assert_eq!(sel.bounds(), Rect::new(100, 100, 50, 100));
    }

    #[test]
    fn absolute_bounds_skip_ratio() {
        let mut sel = with_ratio(1, 2);
        sel.set_bounds_absolute(Rect::new(100, 100, 100, 100), HOST);
        assert_eq!(sel.bounds(), Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn absolute_bounds_are_confined() {
        let mut sel = confined();
        sel.set_bounds_absolute(Rect::new(400, 100, 500, 100), HOST);
        assert_eq!(sel.bounds(), Rect::new(300, 100, 500, 100));

        sel.set_confined(false);
        sel.set_bounds_absolute(Rect::new(400, 100, 500, 100), HOST);
        assert_eq!(sel.bounds(), Rect::new(400, 100, 500, 100));
    }

    #[test]
    fn corner_drag_past_host_edge_is_repositioned() {
        let mut sel = confined();
        sel.set_bounds_from_corners(Point::new(700, 500), Point::new(900, 650), HOST);
        assert_eq!(sel.bounds(), Rect::new(600, 450, 200, 150));
    }

    #[test]
    fn translate_keeps_size_and_clamps() {
        let mut sel = confined();
        sel.set_bounds_absolute(Rect::new(100, 100, 50, 50), HOST);
        sel.translate(Point::new(0, 0), Point::new(30, -20), HOST);
        assert_eq!(sel.bounds(), Rect::new(130, 80, 50, 50));

        sel.translate(Point::new(0, 0), Point::new(-500, 1000), HOST);
        assert_eq!(sel.bounds(), Rect::new(0, 550, 50, 50));
    }

    #[test]
    fn setters_do_not_resize_retroactively() {
        let mut sel = SelectionRect::default();
        sel.set_bounds_absolute(Rect::new(700, 500, 200, 200), HOST);

        sel.set_ratio(2, 1).unwrap();
        sel.set_ratio_enforced(true);
        sel.set_confined(true);
        assert_eq!(sel.bounds(), Rect::new(700, 500, 200, 200));
    }

    #[test]
    fn zero_ratio_is_rejected_and_previous_kept() {
        let mut sel = with_ratio(4, 3);
        assert_eq!(
            sel.set_ratio(0, 3),
            Err(SelectionError::InvalidRatio { width: 0, height: 3 })
        );
        assert_eq!(sel.ratio(), AspectRatio::new(4, 3).unwrap());
    }

    #[test]
    fn contains_is_half_open() {
        let mut sel = SelectionRect::default();
        sel.set_bounds_absolute(Rect::new(0, 0, 100, 100), HOST);
        assert!(sel.contains(Point::new(0, 0)));
        assert!(!sel.contains(Point::new(100, 0)));
    }
}
