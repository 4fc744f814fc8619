//! Shared control state

use crate::command::Command;
use crate::queue::EventQueue;
use crate::status::Status;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use ui9_config::Placement;
use ui9_theme::Style;

/// What the control commands change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub preset: Style,
    pub placement: Placement,
}

impl ControlState {
    /// Run one command line and return its reply.
    pub fn execute(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Ok(cmd) => {
                match cmd {
                    Command::SetPreset(style) => self.preset = style,
                    Command::Panel(placement) => self.placement = placement,
                    Command::Ping | Command::Reload | Command::Apply => {}
                }
                cmd.to_string()
            }
            Err(rejection) => rejection.to_string(),
        }
    }

    pub fn status(&self) -> Status {
        Status {
            preset: self.preset.id().to_string(),
            panel: self.placement.id().to_string(),
        }
    }
}

/// Control state plus the event queue, behind one lock.
#[derive(Debug)]
pub struct Hub {
    pub state: ControlState,
    pub events: EventQueue,
    reader: bool,
}

pub type SharedHub = Arc<Mutex<Hub>>;

impl Hub {
    pub fn new() -> Self {
        Self {
            state: ControlState::default(),
            events: EventQueue::new(),
            reader: false,
        }
    }

    pub fn shared(self) -> SharedHub {
        Arc::new(Mutex::new(self))
    }

    /// Execute a command and post its reply as an event.
    pub fn execute(&mut self, line: &str) -> String {
        let reply = self.state.execute(line);
        tracing::info!(command = line.trim(), %reply, "control command");
        self.events.post(&reply);
        reply
    }

    pub fn post(&mut self, event: &str) -> bool {
        self.events.post(event)
    }

    /// Claim the single events-reader slot.
    pub fn claim_reader(&mut self) -> bool {
        !std::mem::replace(&mut self.reader, true)
    }

    pub fn release_reader(&mut self) {
        self.reader = false;
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock the hub, recovering from a poisoned lock; the hub holds no
/// invariant a panicking holder could break halfway.
pub fn lock(hub: &SharedHub) -> MutexGuard<'_, Hub> {
    hub.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_updates_state_and_posts() {
        let mut hub = Hub::new();
        assert_eq!(hub.execute("setpreset glass"), "ok setpreset glass");
        assert_eq!(hub.execute("panel diagonal"), "err panel badvalue");
        assert_eq!(hub.execute("panel left"), "ok panel left");

        assert_eq!(hub.state.preset, Style::Glass);
        assert_eq!(hub.state.placement, Placement::Left);
        assert_eq!(hub.state.status().to_text(), "preset glass\npanel left\n");

        let posted: Vec<String> = std::iter::from_fn(|| hub.events.pop()).collect();
        assert_eq!(
            posted,
            ["ok setpreset glass\n", "err panel badvalue\n", "ok panel left\n"]
        );
    }

    #[test]
    fn test_failed_command_keeps_state() {
        let mut state = ControlState::default();
        state.execute("setpreset");
        state.execute("setpreset neon");
        assert_eq!(state.preset, Style::Terminal);
        assert_eq!(state.status().to_text(), "preset terminal\npanel top\n");
    }

    #[test]
    fn test_single_reader_claim() {
        let mut hub = Hub::new();
        assert!(hub.claim_reader());
        assert!(!hub.claim_reader());
        hub.release_reader();
        assert!(hub.claim_reader());
    }
}
