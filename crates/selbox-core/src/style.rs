// Author: Dustin Pilgrim
// License: MIT

use serde::{Deserialize, Serialize};

use crate::handle::DEFAULT_HANDLE_SIZE;

/// Drawing hints handed to whatever renders the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStyle {
    pub border_thickness: i32,
    pub accent_colour: u32, // ARGB
    pub handle_size: i32,
}

impl Default for SelectionStyle {
    fn default() -> Self {
        Self {
            border_thickness: 2,
            accent_colour: 0xFF0A_84FF,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}
