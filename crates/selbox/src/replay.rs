// Author: Dustin Pilgrim
// License: MIT

use selbox_core::{
    CursorHint, Extent, Gesture, HostSurface, Rect, SelectionController,
    SelectionOptions,
};

use crate::script::{Line, Step};

/// Headless host: a resizable extent that counts repaint requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualSurface {
    pub extent: Extent,
    pub redraws: usize,
}

impl VirtualSurface {
    pub fn new(extent: Extent) -> Self {
        Self { extent, redraws: 0 }
    }
}

impl HostSurface for VirtualSurface {
    fn extent(&self) -> Extent {
        self.extent
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// State of the selection after one script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEntry {
    pub line: Line,
    pub bounds: Rect,
    pub visible: bool,
    pub gesture: Gesture,
    pub hint: Option<CursorHint>,
}

pub struct Replay {
    controller: SelectionController<VirtualSurface>,
}

impl Replay {
    pub fn new(host: Extent, options: SelectionOptions, handle_size: i32) -> Self {
        Self {
            controller: SelectionController::with_options(
                VirtualSurface::new(host),
                options,
                handle_size,
            ),
        }
    }

    pub fn controller(&self) -> &SelectionController<VirtualSurface> {
        &self.controller
    }

    pub fn apply(&mut self, line: Line) -> TraceEntry {
        let c = &mut self.controller;
        let mut hint = None;

        match line.step {
            Step::Pointer(ev) => hint = c.handle_event(ev),
            Step::Host(extent) => c.host_mut().extent = extent,
            Step::Bounds(rect) => c.set_bounds(rect),
            Step::Visible(visible) => c.set_visible(visible),
            Step::Ratio(ratio) => {
                let mut options = c.options();
                match ratio {
                    Some(r) => {
                        options.ratio = r;
                        options.ratio_enforced = true;
                    }
                    None => options.ratio_enforced = false,
                }
                c.apply_options(options);
            }
            Step::Confine(on) => c.set_confined(on),
        }

        TraceEntry {
            line,
            bounds: c.bounds(),
            visible: c.is_visible(),
            gesture: c.gesture(),
            hint,
        }
    }

    pub fn run(&mut self, lines: &[Line]) -> Vec<TraceEntry> {
        lines.iter().map(|l| self.apply(*l)).collect()
    }

    pub fn redraws(&self) -> usize {
        self.controller.host().redraws
    }
}
