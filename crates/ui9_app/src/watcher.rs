//! Control-event watcher
//!
//! The event stream is a blocking read, so it runs on a helper thread that
//! forwards parsed lines over a channel. The loop drains the channel once
//! per iteration and never blocks on it.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use ui9_ctl::{Client, Status};

/// What a surface hears from the control service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Snapshot read once when the watcher connects.
    Status(Status),
    /// An `ok ...` line, without the newline.
    Ok(String),
    /// An `err ...` line, without the newline.
    Err(String),
    /// The service went away; no further events will arrive.
    Down,
}

impl ControlEvent {
    /// Lines that are neither `ok ` nor `err ` carry nothing a surface acts
    /// on and yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.starts_with("ok ") {
            Some(ControlEvent::Ok(line.to_string()))
        } else if line.starts_with("err ") {
            Some(ControlEvent::Err(line.to_string()))
        } else {
            None
        }
    }

    /// Preset named by `ok setpreset <name>` or by a status snapshot.
    pub fn preset(&self) -> Option<&str> {
        match self {
            ControlEvent::Ok(line) => line.strip_prefix("ok setpreset "),
            ControlEvent::Status(status) => Some(&status.preset),
            _ => None,
        }
    }

    pub fn requests_reload(&self) -> bool {
        matches!(self, ControlEvent::Ok(line) if line == "ok reload" || line == "ok apply")
    }
}

pub struct EventWatcher {
    rx: Receiver<ControlEvent>,
}

impl EventWatcher {
    /// Start following `client`'s event stream on a helper thread.
    pub fn spawn(client: Client) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("9de-events".into())
            .spawn(move || watch(&client, &tx))?;
        Ok(Self { rx })
    }

    /// Watcher fed by the caller, for tests and in-process hosts.
    pub fn from_receiver(rx: Receiver<ControlEvent>) -> Self {
        Self { rx }
    }

    /// Everything received since the last drain.
    pub fn drain(&mut self) -> impl Iterator<Item = ControlEvent> + '_ {
        self.rx.try_iter()
    }
}

fn watch(client: &Client, tx: &Sender<ControlEvent>) {
    match client.status() {
        Ok(status) => {
            if tx.send(ControlEvent::Status(status)).is_err() {
                return;
            }
        }
        Err(e) => {
            tracing::warn!(socket = %client.path().display(), "control service unavailable: {e}");
            let _ = tx.send(ControlEvent::Down);
            return;
        }
    }

    let events = match client.events() {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!("event stream unavailable: {e}");
            let _ = tx.send(ControlEvent::Down);
            return;
        }
    };

    for line in events {
        match line {
            Ok(line) => {
                if let Some(event) = ControlEvent::parse(&line) {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
            }
            Err(e) => {
                tracing::warn!("event stream failed: {e}");
                break;
            }
        }
    }
    tracing::debug!("event stream ended");
    let _ = tx.send(ControlEvent::Down);
}
