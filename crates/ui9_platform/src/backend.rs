//! Backend capability set

use crate::error::Result;
use std::time::{Duration, Instant};
use ui9_core::{InputEvent, Rect};
use ui9_paint::Canvas;

pub trait Backend {
    /// Current surface rectangle.
    fn surface(&self) -> Rect;

    /// Target for this frame's drawing.
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Block until an input event arrives or `timeout` elapses.
    ///
    /// `Ok(None)` means the timeout elapsed. An error means the event source
    /// is gone for good.
    fn wait_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;

    /// Monotonic time as seen by this backend.
    fn now(&self) -> Instant {
        Instant::now()
    }

    /// Present the frame.
    fn flush(&mut self) -> Result<()>;
}
