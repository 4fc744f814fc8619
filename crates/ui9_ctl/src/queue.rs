//! Bounded event queue with a single pending reader

use crate::error::{CtlError, Result};
use std::collections::VecDeque;
use tokio::sync::oneshot;

/// Queue capacity; the oldest line is dropped to admit a new one.
pub const QUEUE_LINES: usize = 128;

/// Longest event line in bytes, not counting the newline.
pub const LINE_MAX: usize = 159;

/// Newline-terminate `s`, truncated to [`LINE_MAX`] bytes on a character
/// boundary. Empty input is not an event.
pub fn normalize_event(s: &str) -> Option<String> {
    let s = s.trim_end_matches('\n');
    if s.is_empty() {
        return None;
    }
    let mut end = s.len().min(LINE_MAX);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    let mut line = String::with_capacity(end + 1);
    line.push_str(&s[..end]);
    line.push('\n');
    Some(line)
}

/// Result of asking for the next event.
#[derive(Debug)]
pub enum Next {
    Ready(String),
    /// Nothing queued; the receiver resolves with the next posted line.
    Pending(oneshot::Receiver<String>),
}

#[derive(Debug, Default)]
pub struct EventQueue {
    lines: VecDeque<String>,
    waiter: Option<oneshot::Sender<String>>,
    dropped: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            lines: VecDeque::with_capacity(QUEUE_LINES),
            ..Self::default()
        }
    }

    /// Post one event. A pending reader gets it directly; otherwise it is
    /// queued. Returns `false` for an empty post.
    pub fn post(&mut self, s: &str) -> bool {
        let Some(line) = normalize_event(s) else {
            return false;
        };
        tracing::debug!(event = line.trim_end(), "event posted");

        let line = match self.waiter.take() {
            Some(tx) => match tx.send(line) {
                Ok(()) => return true,
                // Reader went away while waiting.
                Err(line) => line,
            },
            None => line,
        };

        if self.lines.len() == QUEUE_LINES {
            self.lines.pop_front();
            self.dropped += 1;
            tracing::debug!(dropped = self.dropped, "event queue full, dropped oldest");
        }
        self.lines.push_back(line);
        true
    }

    pub fn pop(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    /// Next queued line, or a receiver for the next post.
    ///
    /// Fails with [`CtlError::Busy`] while another reader is still waiting.
    pub fn next(&mut self) -> Result<Next> {
        if self.waiter.as_ref().is_some_and(|tx| !tx.is_closed()) {
            return Err(CtlError::Busy);
        }
        self.waiter = None;

        if let Some(line) = self.lines.pop_front() {
            return Ok(Next::Ready(line));
        }
        let (tx, rx) = oneshot::channel();
        self.waiter = Some(tx);
        Ok(Next::Pending(rx))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines lost to overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn has_waiter(&self) -> bool {
        self.waiter.as_ref().is_some_and(|tx| !tx.is_closed())
    }
}
