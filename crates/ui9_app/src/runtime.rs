//! Dirty-redraw loop
//!
//! One iteration:
//!
//! 1. **Waiting**: block on the backend for at most the scheduler's next
//!    wake, or [`IDLE_WAKE`] when no timer is armed.
//! 2. **Draining**: dispatch the input event (if any) and control events,
//!    fire due timers, then run a pending reload.
//! 3. **Redrawing**: if anything marked the context dirty, draw once and
//!    flush. However many timers fired, there is at most one frame.
//!
//! Timers and the draw pass never overlap: both run on the loop's thread,
//! strictly in that order.

use crate::context::AppContext;
use crate::error::Result;
use crate::watcher::{ControlEvent, EventWatcher};
use std::time::{Duration, Instant};
use ui9_core::InputEvent;
use ui9_paint::Canvas;
use ui9_platform::Backend;
use ui9_sched::Scheduler;

/// Wait bound while no timer is armed.
pub const IDLE_WAKE: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
    #[default]
    Idle,
    Waiting,
    Draining,
    Redrawing,
}

/// What timer callbacks get to touch.
pub struct AppState<A> {
    pub app: A,
    pub cx: AppContext,
}

pub type Timers<A> = Scheduler<AppState<A>>;

/// A surface driven by [`Runtime`].
pub trait App: Sized {
    /// Called once before the first iteration. Install timers here.
    fn init(&mut self, _cx: &mut AppContext, _timers: &mut Timers<Self>, _now: Instant) {}

    fn event(&mut self, _cx: &mut AppContext, _event: InputEvent) {}

    /// Called after the context has seen `event`.
    fn control(&mut self, _cx: &mut AppContext, _event: &ControlEvent) {}

    /// Called after a reload so the surface can re-measure.
    fn reloaded(&mut self, _cx: &mut AppContext) {}

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas);
}

/// Outcome of one [`Runtime::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub waited: Duration,
    pub input: bool,
    pub fired: usize,
    pub reloaded: bool,
    pub redrawn: bool,
}

pub struct Runtime<A: App, B: Backend> {
    backend: B,
    timers: Timers<A>,
    state: AppState<A>,
    watcher: Option<EventWatcher>,
    phase: LoopPhase,
    frames: u64,
}

impl<A: App, B: Backend> Runtime<A, B> {
    pub fn new(mut app: A, mut cx: AppContext, backend: B) -> Self {
        let mut timers = Scheduler::new();
        app.init(&mut cx, &mut timers, backend.now());
        cx.mark_dirty();
        Self {
            backend,
            timers,
            state: AppState { app, cx },
            watcher: None,
            phase: LoopPhase::Idle,
            frames: 0,
        }
    }

    pub fn with_watcher(mut self, watcher: EventWatcher) -> Self {
        self.watcher = Some(watcher);
        self
    }

    /// Run until the context asks to quit or the backend fails.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.cx.should_quit() {
            self.step()?;
        }
        tracing::info!(frames = self.frames, "loop finished");
        Ok(())
    }

    /// One full Idle → Waiting → Draining → (Redrawing) → Idle iteration.
    pub fn step(&mut self) -> Result<StepReport> {
        let mut report = StepReport::default();

        self.phase = LoopPhase::Waiting;
        let now = self.backend.now();
        let mut timeout = self.timers.next_wake(now).unwrap_or(IDLE_WAKE);
        if self.watcher.is_some() {
            // Control events only surface between waits.
            timeout = timeout.min(IDLE_WAKE);
        }
        report.waited = timeout;
        let event = self.backend.wait_event(timeout);

        self.phase = LoopPhase::Draining;
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                self.phase = LoopPhase::Idle;
                return Err(e.into());
            }
        };
        if let Some(event) = event {
            report.input = true;
            if event.forces_redraw() {
                self.state.cx.mark_dirty();
            }
            self.state.app.event(&mut self.state.cx, event);
        }
        self.drain_control();

        report.fired = self.timers.tick(self.backend.now(), &mut self.state);
        if report.fired > 0 {
            tracing::trace!(fired = report.fired, "timers fired");
        }

        let AppState { app, cx } = &mut self.state;
        if cx.apply_pending_reload() {
            report.reloaded = true;
            app.reloaded(cx);
        }

        if cx.take_dirty() {
            self.phase = LoopPhase::Redrawing;
            app.draw(cx, self.backend.canvas());
            let flushed = self.backend.flush();
            self.phase = LoopPhase::Idle;
            flushed?;
            self.frames += 1;
            report.redrawn = true;
        }

        self.phase = LoopPhase::Idle;
        Ok(report)
    }

    fn drain_control(&mut self) {
        let Some(watcher) = self.watcher.as_mut() else {
            return;
        };
        let AppState { app, cx } = &mut self.state;
        for event in watcher.drain() {
            tracing::debug!(?event, "control event");
            cx.observe(&event);
            app.control(cx, &event);
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn app(&self) -> &A {
        &self.state.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.state.app
    }

    pub fn context(&self) -> &AppContext {
        &self.state.cx
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.state.cx
    }

    /// The app and its context, borrowed together.
    pub fn parts_mut(&mut self) -> (&mut A, &mut AppContext) {
        let AppState { app, cx } = &mut self.state;
        (app, cx)
    }

    pub fn timers(&self) -> &Timers<A> {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut Timers<A> {
        &mut self.timers
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
