// Author: Dustin Pilgrim
// License: MIT

use crate::cursor::CursorHint;
use crate::error::SelectionError;
use crate::event::{PointerEvent, PointerKind};
use crate::handle::{Handle, HandleLayout, DEFAULT_HANDLE_SIZE};
use crate::host::HostSurface;
use crate::rect::{Point, Rect};
use crate::selection::{SelectionOptions, SelectionRect};

/// What the current button-down sequence is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Drawing a fresh rectangle out of `anchor`.
    Creating { anchor: Point },
    /// Dragging `handle`; `anchor` is the opposite point captured at press.
    Resizing { anchor: Point, handle: Handle },
    /// Moving the whole selection; `last` is the previous pointer position.
    Moving { last: Point },
}

/// Turns pointer events on one host surface into selection changes.
pub struct SelectionController<H: HostSurface> {
    host: H,
    selection: SelectionRect,
    handles: HandleLayout,
    gesture: Gesture,
    moving_point: Option<Point>,
}

impl<H: HostSurface> SelectionController<H> {
    pub fn new(host: H) -> Self {
        Self::with_options(host, SelectionOptions::default(), DEFAULT_HANDLE_SIZE)
    }

    pub fn with_options(host: H, options: SelectionOptions, handle_size: i32) -> Self {
        let selection = SelectionRect::new(options);
        let handles = HandleLayout::for_bounds(selection.bounds(), handle_size);
        Self {
            host,
            selection,
            handles,
            gesture: Gesture::Idle,
            moving_point: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. Resizing it does not re-clamp the
    /// selection; the new extent is picked up by the next mutation.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn selection(&self) -> &SelectionRect {
        &self.selection
    }

    pub fn bounds(&self) -> Rect {
        self.selection.bounds()
    }

    pub fn is_visible(&self) -> bool {
        self.selection.is_visible()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.selection.contains(p)
    }

    pub fn handles(&self) -> &HandleLayout {
        &self.handles
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn active_handle(&self) -> Handle {
        match self.gesture {
            Gesture::Resizing { handle, .. } => handle,
            _ => Handle::None,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.gesture, Gesture::Moving { .. })
    }

    /// Last pointer position seen during the current gesture.
    pub fn moving_point(&self) -> Option<Point> {
        self.moving_point
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.selection.set_visible(visible);
        self.host.request_redraw();
    }

    /// Programmatic placement.
    pub fn set_bounds(&mut self, rect: Rect) {
        let extent = self.host.extent();
        self.selection.set_bounds_absolute(rect, extent);
        self.handles.recompute(self.selection.bounds());
        self.host.request_redraw();
    }

    pub fn options(&self) -> SelectionOptions {
        self.selection.options()
    }

    pub fn apply_options(&mut self, options: SelectionOptions) {
        self.selection.set_options(options);
    }

    pub fn set_ratio(&mut self, w: u32, h: u32) -> Result<(), SelectionError> {
        self.selection.set_ratio(w, h)
    }

    pub fn set_ratio_enforced(&mut self, enforced: bool) {
        self.selection.set_ratio_enforced(enforced);
    }

    pub fn set_confined(&mut self, confined: bool) {
        self.selection.set_confined(confined);
    }

    /// Feeds one event. Only hover events produce a cursor hint.
    pub fn handle_event(&mut self, ev: PointerEvent) -> Option<CursorHint> {
        match ev.kind {
            PointerKind::Press => self.press(ev.point),
            PointerKind::Drag => self.drag(ev.point),
            PointerKind::Release => self.release(ev.point),
            PointerKind::Hover => return Some(self.hover(ev.point)),
        }
        None
    }

    pub fn press(&mut self, p: Point) {
        self.gesture = if self.selection.is_visible() {
            let bounds = self.selection.bounds();
            let handle = self.handles.hit_test(p);

            if let Some(anchor) = handle.opposite_point(bounds) {
                Gesture::Resizing { anchor, handle }
            } else if self.selection.contains(p) {
                Gesture::Moving { last: p }
            } else {
                Gesture::Creating { anchor: p }
            }
        } else {
            Gesture::Creating { anchor: p }
        };

        self.moving_point = Some(p);
        self.selection.set_visible(true);
        self.host.request_redraw();
    }

    pub fn drag(&mut self, p: Point) {
        if self.gesture == Gesture::Idle {
            return;
        }
        self.apply_gesture(p);
        self.host.request_redraw();
    }

    /// Ends the gesture, applying `p` once more so a release without any
    /// preceding drag still lands.
    pub fn release(&mut self, p: Point) {
        self.apply_gesture(p);
        self.gesture = Gesture::Idle;
        self.moving_point = None;
        self.handles.recompute(self.selection.bounds());
        self.host.request_redraw();
    }

    /// Cursor to show while no button is held. Never mutates anything.
    pub fn hover(&self, p: Point) -> CursorHint {
        if !self.selection.is_visible() {
            return CursorHint::Default;
        }
        match self.handles.hit_test(p) {
            Handle::None if self.selection.contains(p) => CursorHint::Move,
            Handle::None => CursorHint::Default,
            handle => CursorHint::Resize(handle),
        }
    }

    fn apply_gesture(&mut self, p: Point) {
        let extent = self.host.extent();
        match self.gesture {
            Gesture::Idle => return,
            Gesture::Creating { anchor } | Gesture::Resizing { anchor, .. } => {
                self.selection.set_bounds_from_corners(anchor, p, extent);
            }
            Gesture::Moving { last } => {
                self.selection.translate(last, p, extent);
                self.gesture = Gesture::Moving { last: p };
            }
        }
        self.moving_point = Some(p);
    }
}
