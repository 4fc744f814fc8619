//! Loop behaviour against the headless backend.

use std::sync::mpsc;
use std::time::Duration;
use ui9_app::{
    App, AppContext, AppError, ControlEvent, EventWatcher, LoopPhase, Runtime, IDLE_WAKE,
};
use ui9_config::MapEnv;
use ui9_core::{InputEvent, Mouse, Point, Rect};
use ui9_paint::Canvas;
use ui9_platform::{Backend, HeadlessBackend, PlatformError, Scripted};
use ui9_theme::{ColorRole, Style};

#[derive(Default)]
struct Recorder {
    draws: usize,
    reloads: usize,
    events: Vec<InputEvent>,
    controls: Vec<ControlEvent>,
}

impl App for Recorder {
    fn event(&mut self, _cx: &mut AppContext, event: InputEvent) {
        self.events.push(event);
    }

    fn control(&mut self, _cx: &mut AppContext, event: &ControlEvent) {
        self.controls.push(event.clone());
    }

    fn reloaded(&mut self, _cx: &mut AppContext) {
        self.reloads += 1;
    }

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
        self.draws += 1;
        let bounds = canvas.bounds();
        canvas.fill_rect(bounds, cx.theme.color(ColorRole::Background));
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn runtime(dir: &tempfile::TempDir) -> Runtime<Recorder, HeadlessBackend> {
    let cx = AppContext::new(dir.path().join("config.rc"), Box::new(MapEnv::new()));
    Runtime::new(Recorder::default(), cx, HeadlessBackend::new(320, 40).unwrap())
}

#[test]
fn first_step_draws_initial_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    assert_eq!(rt.phase(), LoopPhase::Idle);

    let report = rt.step().unwrap();
    assert!(report.redrawn);
    assert_eq!(report.waited, IDLE_WAKE);
    assert_eq!(rt.frames(), 1);
    assert_eq!(rt.backend().frames(), 1);
    assert_eq!(rt.phase(), LoopPhase::Idle);

    // Nothing dirty: no second frame.
    assert!(!rt.step().unwrap().redrawn);
    assert_eq!(rt.app().draws, 1);
}

#[test]
fn many_timers_one_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    rt.step().unwrap();

    let now = rt.backend().now();
    for _ in 0..3 {
        rt.timers_mut()
            .add_at(now, ms(10), Duration::ZERO, |s, _| s.cx.mark_dirty());
    }

    let report = rt.step().unwrap();
    assert_eq!(report.waited, ms(10));
    assert_eq!(report.fired, 3);
    assert!(report.redrawn);
    assert_eq!(rt.app().draws, 2);
    assert!(rt.timers().is_empty());
}

#[test]
fn wait_is_bounded_by_next_timer() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    let now = rt.backend().now();
    rt.timers_mut()
        .add_at(now, ms(33), ms(33), |s, _| s.cx.mark_dirty());

    rt.step().unwrap();
    rt.step().unwrap();
    rt.step().unwrap();
    assert_eq!(rt.backend().waits(), &[ms(33), ms(33), ms(33)]);
    assert_eq!(rt.frames(), 3);
}

#[test]
fn timer_that_leaves_state_clean_skips_redraw() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    rt.step().unwrap();

    let now = rt.backend().now();
    rt.timers_mut().add_at(now, ms(5), ms(5), |_, _| {});
    let report = rt.step().unwrap();
    assert_eq!(report.fired, 1);
    assert!(!report.redrawn);
}

#[test]
fn resize_forces_redraw_and_pointer_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    rt.step().unwrap();

    rt.backend_mut().push_event(InputEvent::Mouse(Mouse {
        xy: Point::new(5, 5),
        buttons: 0,
    }));
    let report = rt.step().unwrap();
    assert!(report.input);
    assert!(!report.redrawn);

    rt.backend_mut().push_event(InputEvent::Resize {
        width: 640,
        height: 48,
    });
    assert!(rt.step().unwrap().redrawn);
    assert_eq!(rt.backend().surface(), Rect::new(0, 0, 640, 48));
    assert_eq!(rt.app().events.len(), 2);
}

#[test]
fn reload_runs_before_redraw() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    rt.step().unwrap();

    std::fs::write(dir.path().join("config.rc"), "ui_style=dark\nui_alpha=200\n").unwrap();
    let now = rt.backend().now();
    rt.timers_mut()
        .add_at(now, Duration::ZERO, Duration::ZERO, |s, _| s.cx.request_reload());

    let generation = rt.context().theme.generation();
    let report = rt.step().unwrap();
    assert!(report.reloaded);
    assert!(report.redrawn);
    assert_eq!(rt.app().reloads, 1);

    let theme = rt.context().theme.theme();
    assert_eq!(theme.style(), Style::Dark);
    assert_eq!(theme.alpha(), 200);
    assert_eq!(rt.context().theme.generation(), generation + 1);
}

#[test]
fn control_events_reach_app_and_trigger_reload() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, rx) = mpsc::channel();
    let mut rt = runtime(&dir).with_watcher(EventWatcher::from_receiver(rx));
    rt.step().unwrap();

    std::fs::write(dir.path().join("config.rc"), "ui_style=glass\n").unwrap();
    tx.send(ControlEvent::parse("ok setpreset glass").unwrap()).unwrap();
    tx.send(ControlEvent::parse("ok reload").unwrap()).unwrap();

    let report = rt.step().unwrap();
    assert!(report.reloaded);
    assert_eq!(rt.app().controls.len(), 2);
    assert_eq!(rt.context().theme.theme().style(), Style::Glass);

    // No further events: no further reloads.
    assert!(!rt.step().unwrap().reloaded);
}

#[test]
fn watcher_caps_long_timer_waits() {
    let dir = tempfile::tempdir().unwrap();
    let (_tx, rx) = mpsc::channel();
    let mut rt = runtime(&dir).with_watcher(EventWatcher::from_receiver(rx));
    let now = rt.backend().now();
    rt.timers_mut().add_at(now, ms(1000), ms(1000), |_, _| {});

    assert_eq!(rt.step().unwrap().waited, IDLE_WAKE);
}

#[test]
fn closed_backend_ends_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    rt.backend_mut().push(Scripted::Close);

    let err = rt.run().unwrap_err();
    assert!(matches!(
        err,
        AppError::Platform(PlatformError::EventStream(_))
    ));
    assert_eq!(rt.phase(), LoopPhase::Idle);
}

#[test]
fn quit_from_a_timer_stops_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime(&dir);
    let now = rt.backend().now();
    rt.timers_mut()
        .add_at(now, ms(100), Duration::ZERO, |s, _| s.cx.quit());

    rt.run().unwrap();
    assert!(rt.context().should_quit());
    assert_eq!(rt.app().draws, 1);
}
