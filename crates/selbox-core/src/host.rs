// Author: Dustin Pilgrim
// License: MIT

use crate::rect::Extent;

/// The surface a controller is attached to.
///
/// A controller owns exactly one host and is fed by its events only.
pub trait HostSurface {
    /// Current size, used for confinement. Read on every clamped operation.
    fn extent(&self) -> Extent;

    /// Called after any event that changed what should be on screen.
    fn request_redraw(&mut self) {}
}

/// A fixed-size surface that never repaints.
impl HostSurface for Extent {
    fn extent(&self) -> Extent {
        *self
    }
}
