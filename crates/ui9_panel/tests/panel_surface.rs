//! Panel and dashboard against the headless backend.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use ui9_app::{AppContext, ControlEvent, EventWatcher, Runtime};
use ui9_config::MapEnv;
use ui9_core::{InputEvent, Mouse, Point, Rect, Rgb};
use ui9_panel::{Dashboard, Launch, Panel, PanelModule, StaticWindows, WindowEntry};
use ui9_platform::HeadlessBackend;

type PanelRuntime = Runtime<Panel<StaticWindows>, HeadlessBackend>;

struct Harness {
    rt: PanelRuntime,
    launches: Rc<RefCell<Vec<Launch>>>,
    _dir: tempfile::TempDir,
}

fn harness(config: &str, height: i32) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.rc");
    std::fs::write(&path, config).unwrap();
    let cx = AppContext::load(&path, Box::new(MapEnv::new())).unwrap();

    let launches = Rc::new(RefCell::new(Vec::new()));
    let sink = launches.clone();
    let windows = StaticWindows::new(vec![
        WindowEntry::new(1, "rc").current(),
        WindowEntry::new(2, "acme"),
    ]);
    let panel = Panel::new(windows)
        .with_net_root(dir.path())
        .with_launcher(move |what| sink.borrow_mut().push(what));
    let backend = HeadlessBackend::new(800, height).unwrap();
    Harness {
        rt: Runtime::new(panel, cx, backend),
        launches,
        _dir: dir,
    }
}

impl Harness {
    /// Step once and return the strings that frame drew.
    fn frame(&mut self) -> Vec<String> {
        self.rt.backend_mut().recording_mut().clear();
        self.rt.step().unwrap();
        self.rt
            .backend()
            .recording()
            .texts()
            .map(str::to_string)
            .collect()
    }

    fn pointer(&mut self, at: Point, buttons: u32) -> Vec<String> {
        self.rt
            .backend_mut()
            .push_event(InputEvent::Mouse(Mouse { xy: at, buttons }));
        self.frame()
    }

    fn rect(&self, module: PanelModule) -> Rect {
        self.rt.app().module_rect(module).unwrap()
    }
}

fn center(r: Rect) -> Point {
    Point::new(r.min.x + r.dx() / 2, r.min.y + r.dy() / 2)
}

fn has(texts: &[String], s: &str) -> bool {
    texts.iter().any(|t| t == s)
}

#[test]
fn first_frame_shows_default_modules() {
    let mut h = harness("", 34);
    let texts = h.frame();

    assert!(has(&texts, "≡ 9DE"));
    assert!(has(&texts, "▦ rc"));
    assert!(has(&texts, "style: terminal"));
    assert!(has(&texts, "de: down"));
    assert!(has(&texts, "net"));
    assert!(has(&texts, "•"));
    let clock = texts
        .iter()
        .find(|t| t.len() == 8 && t.as_bytes()[2] == b':' && t.as_bytes()[5] == b':');
    assert!(clock.is_some());

    // Stacks hug the edges, one gap in.
    assert_eq!(h.rect(PanelModule::Menu).min.x, 8);
    assert_eq!(h.rect(PanelModule::Notify).max.x, 792);
    assert_eq!(h.rect(PanelModule::Menu).min.y, 2);
    assert_eq!(h.rect(PanelModule::Menu).max.y, 32);
}

#[test]
fn ascii_mode_and_unknown_modules() {
    let mut h = harness("panel_ascii=1\npanel_left=\"menu bogus ws\"\npanel_right=clock\n", 34);
    let texts = h.frame();

    let modules: Vec<_> = h.rt.app().modules().collect();
    assert_eq!(
        modules,
        vec![PanelModule::Menu, PanelModule::Workspace, PanelModule::Clock]
    );
    assert!(has(&texts, "MENU 9DE"));
    assert!(has(&texts, "WS rc"));
    assert!(!has(&texts, "style: terminal"));
}

#[test]
fn control_events_update_indicators() {
    let (tx, rx) = mpsc::channel();
    let mut h = harness("", 34);
    h.rt = h.rt.with_watcher(EventWatcher::from_receiver(rx));
    h.frame();

    tx.send(ControlEvent::parse("ok setpreset glass").unwrap()).unwrap();
    let texts = h.frame();
    assert!(has(&texts, "style: glass"));
    assert!(has(&texts, "de: ok"));

    tx.send(ControlEvent::parse("err panel badvalue").unwrap()).unwrap();
    let texts = h.frame();
    assert!(has(&texts, "de: err"));
    assert!(has(&texts, "• 1"));

    tx.send(ControlEvent::Down).unwrap();
    let texts = h.frame();
    assert!(has(&texts, "de: down"));
    assert_eq!(h.rt.app().model().notify, 1);
}

#[test]
fn clicks_and_keys_launch() {
    let mut h = harness("", 34);
    h.frame();

    h.pointer(center(h.rect(PanelModule::Menu)), Mouse::LEFT);
    assert_eq!(*h.launches.borrow(), vec![Launch::Dashboard]);

    // Menu has focus now: space opens the dashboard again.
    h.rt.backend_mut().push_event(InputEvent::Key(' '));
    h.frame();
    h.rt.backend_mut().push_event(InputEvent::Key('l'));
    h.frame();
    assert_eq!(
        *h.launches.borrow(),
        vec![Launch::Dashboard, Launch::Dashboard, Launch::Logs]
    );

    // Notify only reacts with a pending count, and clears it.
    h.pointer(center(h.rect(PanelModule::Notify)), Mouse::LEFT);
    assert_eq!(h.launches.borrow().len(), 3);
    h.rt.app_mut().model_mut().notify = 2;
    h.frame();
    h.pointer(center(h.rect(PanelModule::Notify)), Mouse::LEFT);
    assert_eq!(h.launches.borrow().last(), Some(&Launch::Errors));
    assert_eq!(h.rt.app().model().notify, 0);
}

#[test]
fn workspace_hover_expands_into_mini_bar() {
    let mut h = harness("", 62);
    h.frame();
    assert!(!h.rt.app().is_expanded());
    assert_eq!(h.rt.app().height(), 34);

    let texts = h.pointer(center(h.rect(PanelModule::Workspace)), 0);
    assert!(h.rt.app().is_expanded());
    assert_eq!(h.rt.app().height(), 62);
    assert!(has(&texts, "1 rc"));
    assert!(has(&texts, "2 acme"));

    let (id, chip) = h.rt.app().mini_rects()[1];
    assert_eq!(id, 2);
    assert_eq!(chip.min.y, 36);

    // Pointer inside the mini bar keeps it open; a click focuses.
    h.pointer(center(chip), Mouse::LEFT);
    assert!(h.rt.app().is_expanded());
    assert_eq!(h.rt.app().windows().focus_requests(), &[2]);
    assert_eq!(h.rt.app().hovered_window(), Some(2));

    h.pointer(Point::new(400, 10), 0);
    assert!(!h.rt.app().is_expanded());
    assert!(h.rt.app().mini_rects().is_empty());
}

#[test]
fn gradients_regenerate_only_on_key_change() {
    let mut h = harness("ui_topgrad=1\nui_minigrad=1\n", 62);
    h.frame();
    h.frame();
    h.frame();

    let top = h.rt.app().top_gradient();
    assert_eq!(top.regenerations(), 1);
    let key = top.key().unwrap();
    assert_eq!(key.height, 34);
    assert_eq!(key.c0, Rgb::from_hex(0x0c0c0e));
    assert_eq!(key.c1, Rgb::from_hex(0x1a1a20));
    assert_eq!(h.rt.app().mini_gradient().regenerations(), 0);

    h.pointer(center(h.rect(PanelModule::Workspace)), 0);
    h.frame();
    let mini = h.rt.app().mini_gradient();
    assert_eq!(mini.regenerations(), 1);
    assert_eq!(mini.key().unwrap().height, 28);
    assert_eq!(mini.key().unwrap().c0, Rgb::from_hex(0x101014));
    assert_eq!(h.rt.app().top_gradient().regenerations(), 1);
}

#[test]
fn dashboard_draws_tiles_and_quits() {
    let dir = tempfile::tempdir().unwrap();
    let cx = AppContext::new(dir.path().join("config.rc"), Box::new(MapEnv::new()));
    let mut backend = HeadlessBackend::new(1280, 800).unwrap();
    backend.push_event(InputEvent::Key('q'));
    let mut rt = Runtime::new(Dashboard::new(), cx, backend);
    rt.run().unwrap();

    let texts: Vec<_> = rt.backend().recording().texts().collect();
    for s in ["Dashboard", "LAUNCH", "Control Center", "Logs", "SHELL CONTRACT"] {
        assert!(texts.contains(&s), "missing {s}");
    }
    assert!(texts.contains(&"> open control · logs · style terminal"));
    assert_eq!(rt.app().layout().unwrap().columns[2].max.x, 1266);
}
