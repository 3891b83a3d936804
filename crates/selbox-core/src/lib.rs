// Author: Dustin Pilgrim
// License: MIT

pub mod controller;
pub mod cursor;
pub mod error;
pub mod event;
pub mod handle;
pub mod host;
pub mod ratio;
pub mod rect;
pub mod selection;
pub mod style;

pub use controller::{Gesture, SelectionController};
pub use cursor::CursorHint;
pub use error::SelectionError;
pub use event::{PointerEvent, PointerKind};
pub use handle::{Handle, HandleLayout, DEFAULT_HANDLE_SIZE};
pub use host::HostSurface;
pub use ratio::AspectRatio;
pub use rect::{Extent, Point, Rect};
pub use selection::{SelectionOptions, SelectionRect};
pub use style::SelectionStyle;
