// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::rect::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    /// Button went down.
    Press,
    /// Pointer moved with the button held.
    Drag,
    /// Button went up.
    Release,
    /// Pointer moved with no button held.
    Hover,
}

/// One pointer event, already in host-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub point: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            point: Point::new(x, y),
        }
    }

    pub fn press(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Press, x, y)
    }

    pub fn drag(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Drag, x, y)
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Release, x, y)
    }

    pub fn hover(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Hover, x, y)
    }
}
