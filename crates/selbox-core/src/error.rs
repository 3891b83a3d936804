// Author: Dustin Pilgrim
// License: MIT

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid aspect ratio {width}:{height} (both sides must be positive)")]
    InvalidRatio { width: u32, height: u32 },
}
