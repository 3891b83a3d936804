// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::handle::Handle;

/// Advisory pointer shape for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    Resize(Handle),
}

impl CursorHint {
    /// Cursor-theme name to load for this hint.
    pub fn name(self) -> &'static str {
        match self {
            CursorHint::Default | CursorHint::Resize(Handle::None) => "left_ptr",
            CursorHint::Move => "fleur",
            CursorHint::Resize(Handle::TopLeft) => "top_left_corner",
            CursorHint::Resize(Handle::TopRight) => "top_right_corner",
            CursorHint::Resize(Handle::BottomLeft) => "bottom_left_corner",
            CursorHint::Resize(Handle::BottomRight) => "bottom_right_corner",
            CursorHint::Resize(Handle::Top) => "top_side",
            CursorHint::Resize(Handle::Bottom) => "bottom_side",
            CursorHint::Resize(Handle::Left) => "left_side",
            CursorHint::Resize(Handle::Right) => "right_side",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_live_handle_has_its_own_cursor() {
        let mut names: Vec<_> = Handle::ALL
            .iter()
            .map(|h| CursorHint::Resize(*h).name())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 8);
        assert!(!names.contains(&CursorHint::Default.name()));
        assert!(!names.contains(&CursorHint::Move.name()));
    }
}
