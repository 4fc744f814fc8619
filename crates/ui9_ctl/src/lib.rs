//! 9DE Control Service
//!
//! A tiny message hub shared by every 9DE process, reached over a
//! Unix-domain socket. Each connection sends one request line:
//!
//! | request      | response                                         |
//! |--------------|--------------------------------------------------|
//! | `ctl <cmd>`  | one `ok ...` / `err ...` line, also posted as an event |
//! | `status`     | `preset <name>\npanel <placement>\n`             |
//! | `events`     | queued event lines, then each new one as it is posted |
//!
//! Commands are `ping`, `reload`, `apply`, `setpreset <terminal|dark|glass>`
//! and `panel <top|bottom|left>`.
//!
//! The event queue holds at most [`QUEUE_LINES`] lines and drops the oldest
//! to admit a new one. Only one `events` reader is served at a time; a
//! second gets `err events busy`. Consumers treat events as hints to
//! re-check state, never as a transaction log.
//!
//! The server runs on tokio; [`Client`] is blocking so GUI processes can use
//! it from a helper thread without a runtime.

pub mod client;
pub mod command;
pub mod error;
pub mod hub;
pub mod queue;
pub mod server;
pub mod status;

pub use client::{socket_path, Client, Events};
pub use command::{Command, Rejection};
pub use error::{CtlError, Result};
pub use hub::{ControlState, Hub, SharedHub};
pub use queue::{EventQueue, Next, LINE_MAX, QUEUE_LINES};
pub use server::Server;
pub use status::Status;
