//! Headless backend
//!
//! Time only moves when the loop waits: an idle wait advances the virtual
//! clock by its full timeout, a scripted event arrives after its own delay
//! (capped by the timeout).

use crate::backend::Backend;
use crate::error::{PlatformError, Result};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use ui9_core::{InputEvent, Rect};
use ui9_paint::{Canvas, RecordingCanvas};

/// One scripted step of input.
#[derive(Clone, Debug, PartialEq)]
pub enum Scripted {
    /// Deliver `event` once `after` has elapsed within a wait.
    Event { after: Duration, event: InputEvent },
    /// Let one wait time out.
    Idle,
    /// Fail every later wait.
    Close,
}

#[derive(Debug)]
pub struct HeadlessBackend {
    canvas: RecordingCanvas,
    script: VecDeque<Scripted>,
    now: Instant,
    /// Time already spent waiting for the event at the head of the script.
    pending: Duration,
    closed: bool,
    waits: Vec<Duration>,
    frames: usize,
}

impl HeadlessBackend {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlatformError::SurfaceUnavailable(format!(
                "invalid size {width}x{height}"
            )));
        }
        Ok(Self {
            canvas: RecordingCanvas::new(width, height),
            script: VecDeque::new(),
            now: Instant::now(),
            pending: Duration::ZERO,
            closed: false,
            waits: Vec::new(),
            frames: 0,
        })
    }

    pub fn push(&mut self, step: Scripted) -> &mut Self {
        self.script.push_back(step);
        self
    }

    /// Queue `event` for immediate delivery.
    pub fn push_event(&mut self, event: InputEvent) -> &mut Self {
        self.push(Scripted::Event {
            after: Duration::ZERO,
            event,
        })
    }

    pub fn recording(&self) -> &RecordingCanvas {
        &self.canvas
    }

    pub fn recording_mut(&mut self) -> &mut RecordingCanvas {
        &mut self.canvas
    }

    /// Every timeout the loop has waited with, in order.
    pub fn waits(&self) -> &[Duration] {
        &self.waits
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn script_is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Move the virtual clock without waiting.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Backend for HeadlessBackend {
    fn surface(&self) -> Rect {
        self.canvas.bounds()
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn wait_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        self.waits.push(timeout);
        if self.closed {
            return Err(PlatformError::EventStream("script closed".into()));
        }

        match self.script.front().cloned() {
            Some(Scripted::Event { after, event }) => {
                let remaining = after.saturating_sub(self.pending);
                if remaining <= timeout {
                    self.now += remaining;
                    self.pending = Duration::ZERO;
                    self.script.pop_front();
                    if let InputEvent::Resize { width, height } = event {
                        self.canvas.resize(width, height);
                    }
                    Ok(Some(event))
                } else {
                    self.now += timeout;
                    self.pending += timeout;
                    Ok(None)
                }
            }
            Some(Scripted::Idle) | None => {
                self.script.pop_front();
                self.now += timeout;
                Ok(None)
            }
            Some(Scripted::Close) => {
                self.closed = true;
                Err(PlatformError::EventStream("script closed".into()))
            }
        }
    }

    fn now(&self) -> Instant {
        self.now
    }

    fn flush(&mut self) -> Result<()> {
        self.frames += 1;
        self.canvas.flush();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui9_core::{Mouse, Point};

    #[test]
    fn test_rejects_empty_surface() {
        assert!(matches!(
            HeadlessBackend::new(0, 10),
            Err(PlatformError::SurfaceUnavailable(_))
        ));
    }

    #[test]
    fn test_idle_wait_advances_clock() {
        let mut b = HeadlessBackend::new(100, 30).unwrap();
        let t0 = b.now();
        assert_eq!(b.wait_event(Duration::from_millis(200)).unwrap(), None);
        assert_eq!(b.now() - t0, Duration::from_millis(200));
    }

    #[test]
    fn test_delayed_event_spans_waits() {
        let mut b = HeadlessBackend::new(100, 30).unwrap();
        let ev = InputEvent::Mouse(Mouse {
            xy: Point::new(3, 4),
            buttons: Mouse::LEFT,
        });
        b.push(Scripted::Event {
            after: Duration::from_millis(50),
            event: ev,
        });
        let t0 = b.now();

        assert_eq!(b.wait_event(Duration::from_millis(33)).unwrap(), None);
        assert_eq!(b.wait_event(Duration::from_millis(33)).unwrap(), Some(ev));
        assert_eq!(b.now() - t0, Duration::from_millis(50));
        assert!(b.script_is_empty());
    }

    #[test]
    fn test_resize_event_resizes_canvas() {
        let mut b = HeadlessBackend::new(100, 30).unwrap();
        b.push_event(InputEvent::Resize {
            width: 640,
            height: 34,
        });
        b.wait_event(Duration::ZERO).unwrap();
        assert_eq!(b.surface(), Rect::new(0, 0, 640, 34));
    }

    #[test]
    fn test_close_is_sticky() {
        let mut b = HeadlessBackend::new(10, 10).unwrap();
        b.push(Scripted::Close);
        assert!(b.wait_event(Duration::ZERO).is_err());
        assert!(b.wait_event(Duration::ZERO).is_err());
    }
}
