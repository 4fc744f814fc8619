//! 9DE Command-Line Shells
//!
//! Two binaries share this crate:
//!
//! - `9de-shell` hosts the control service on the session socket and starts
//!   the panel ([`shell`]).
//! - `9de` is the client: `ctl`, `status`, `events` and `config`
//!   ([`cli`], [`commands`]).

pub mod cli;
pub mod commands;
pub mod shell;
