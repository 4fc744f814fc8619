//! 9DE Application Framework
//!
//! Every 9DE surface is an [`App`] driven by a [`Runtime`]: a cooperative,
//! single-threaded loop that waits for input or the next timer, drains due
//! timers and control events, applies a pending config reload, and redraws
//! at most once per iteration.
//!
//! State lives in an explicit [`AppContext`] (theme, resolved config, loop
//! flags) passed to every callback. There is no process-wide instance.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use ui9_app::{App, AppContext, Runtime, Timers};
//! use ui9_config::MapEnv;
//! use ui9_paint::Canvas;
//! use ui9_platform::HeadlessBackend;
//! use ui9_theme::ColorRole;
//!
//! struct Blink {
//!     on: bool,
//! }
//!
//! impl App for Blink {
//!     fn init(&mut self, _cx: &mut AppContext, timers: &mut Timers<Self>, now: Instant) {
//!         timers.add_at(now, Duration::ZERO, Duration::from_millis(500), |state, _| {
//!             state.app.on = !state.app.on;
//!             state.cx.mark_dirty();
//!         });
//!     }
//!
//!     fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
//!         let role = if self.on { ColorRole::Accent } else { ColorRole::Background };
//!         let bounds = canvas.bounds();
//!         canvas.fill_rect(bounds, cx.theme.color(role));
//!     }
//! }
//!
//! let cx = AppContext::new("/nonexistent/config.rc", Box::new(MapEnv::new()));
//! let backend = HeadlessBackend::new(64, 32).unwrap();
//! let mut rt = Runtime::new(Blink { on: false }, cx, backend);
//!
//! rt.step().unwrap();
//! assert!(rt.app().on);
//! assert_eq!(rt.frames(), 1);
//! ```

pub mod context;
pub mod error;
pub mod runtime;
pub mod watcher;

pub use context::AppContext;
pub use error::{AppError, Result};
pub use runtime::{App, AppState, LoopPhase, Runtime, StepReport, Timers, IDLE_WAKE};
pub use watcher::{ControlEvent, EventWatcher};
