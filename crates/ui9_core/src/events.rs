//! Input events
//!
//! What a backend hands back from its bounded blocking wait.

use crate::geometry::Point;

/// Pointer snapshot: position plus button bitmask (bit 0 = left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mouse {
    pub xy: Point,
    pub buttons: u32,
}

impl Mouse {
    pub const LEFT: u32 = 1;
    pub const MIDDLE: u32 = 2;
    pub const RIGHT: u32 = 4;

    pub fn left(&self) -> bool {
        self.buttons & Self::LEFT != 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer moved or buttons changed.
    Mouse(Mouse),
    /// A typed rune.
    Key(char),
    /// The surface was resized; contents must be redrawn.
    Resize { width: i32, height: i32 },
}

impl InputEvent {
    /// Resizes always owe a redraw; pointer and key events only when the
    /// surface reacts to them.
    pub fn forces_redraw(&self) -> bool {
        matches!(self, InputEvent::Resize { .. })
    }
}
