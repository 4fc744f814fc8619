//! 9DE Platform Abstraction
//!
//! A [`Backend`] is everything a surface needs from the windowing system:
//! a drawable [`Canvas`](ui9_paint::Canvas) of known size, a bounded
//! blocking wait for input, a monotonic clock and a flush.
//!
//! Only [`HeadlessBackend`] ships here. It replays a scripted event list
//! against a recording canvas and advances a virtual clock, so a redraw loop
//! can be driven deterministically.

pub mod backend;
pub mod error;
pub mod headless;

pub use backend::Backend;
pub use error::{PlatformError, Result};
pub use headless::{HeadlessBackend, Scripted};
