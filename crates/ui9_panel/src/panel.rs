//! Top panel surface
//!
//! A bar of `panel_height` pixels with a left and a right module stack.
//! Hovering the workspace chip expands the panel by `panel_minih` and shows
//! the mini bar: one chip per window, click to focus.
//!
//! Three timers drive it: a 1 Hz clock and status tick, a 250 ms window
//! poll and a 33 ms redraw pulse that keeps hover feedback live.

use crate::layout::{mini_bar, mini_rect, stack_layout};
use crate::model::{net_label, PanelModel};
use crate::modules::{ellipsize, parse_modules, sym, PanelModule};
use crate::windows::{WindowEntry, WindowSource};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use ui9_app::{App, AppContext, ControlEvent, Timers};
use ui9_config::PanelConfig;
use ui9_core::{InputEvent, Mouse, Point, Rect};
use ui9_paint::{Canvas, GradientCache, Painter};
use ui9_theme::ColorRole;

pub const CLOCK_TICK: Duration = Duration::from_millis(1000);
pub const WINDOW_POLL: Duration = Duration::from_millis(250);
pub const REDRAW_PULSE: Duration = Duration::from_millis(33);

/// Mini bar entries stop once they reach this close to the right edge.
const MINI_RESERVE: i32 = 220;

/// Something the panel asks its host to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    Dashboard,
    /// Log directory listing.
    Logs,
    /// Error logs; clears the notification count.
    Errors,
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    module: PanelModule,
    width: i32,
    rect: Rect,
}

impl Slot {
    fn new(module: PanelModule) -> Self {
        Self {
            module,
            width: 0,
            rect: Rect::ZERO,
        }
    }
}

pub struct Panel<W: WindowSource> {
    windows: W,
    socket: Option<PathBuf>,
    net_root: PathBuf,
    launcher: Box<dyn FnMut(Launch)>,
    model: PanelModel,
    entries: Vec<WindowEntry>,
    left: Vec<Slot>,
    right: Vec<Slot>,
    top_gradient: GradientCache,
    mini_gradient: GradientCache,
    surface: Rect,
    mouse: Mouse,
    ws_rect: Rect,
    mini_rects: Vec<(i32, Rect)>,
    hover_id: Option<i32>,
    ws_hover: bool,
    expanded: bool,
    focus_menu: bool,
    base_height: i32,
    mini_height: i32,
}

impl<W: WindowSource> Panel<W> {
    pub fn new(windows: W) -> Self {
        let defaults = PanelConfig::default();
        Self {
            windows,
            socket: None,
            net_root: PathBuf::from("/net"),
            launcher: Box::new(|_| {}),
            model: PanelModel::default(),
            entries: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            top_gradient: GradientCache::new(),
            mini_gradient: GradientCache::new(),
            surface: Rect::ZERO,
            mouse: Mouse::default(),
            ws_rect: Rect::ZERO,
            mini_rects: Vec::new(),
            hover_id: None,
            ws_hover: false,
            expanded: false,
            focus_menu: false,
            base_height: defaults.height,
            mini_height: defaults.mini_height,
        }
    }

    /// Control socket whose presence drives the `de` indicator.
    pub fn with_socket(mut self, socket: impl Into<PathBuf>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    /// Root of the network tree read for the `net` label.
    pub fn with_net_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.net_root = root.into();
        self
    }

    pub fn with_launcher(mut self, launcher: impl FnMut(Launch) + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    /// Rebuild the module stacks and heights from `cfg`.
    pub fn configure(&mut self, cfg: &PanelConfig) {
        self.left = parse_modules(cfg.left_modules()).into_iter().map(Slot::new).collect();
        self.right = parse_modules(cfg.right_modules()).into_iter().map(Slot::new).collect();
        self.base_height = cfg.height;
        self.mini_height = cfg.mini_height;
        tracing::debug!(
            left = self.left.len(),
            right = self.right.len(),
            height = cfg.height,
            "panel configured"
        );
    }

    pub fn model(&self) -> &PanelModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PanelModel {
        &mut self.model
    }

    pub fn windows(&self) -> &W {
        &self.windows
    }

    /// Window list from the last poll.
    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Height the panel wants: the bar, plus the mini bar when expanded.
    pub fn height(&self) -> i32 {
        if self.expanded {
            self.base_height + self.mini_height
        } else {
            self.base_height
        }
    }

    pub fn modules(&self) -> impl Iterator<Item = PanelModule> + '_ {
        self.left.iter().chain(&self.right).map(|s| s.module)
    }

    /// Where `module` was drawn last.
    pub fn module_rect(&self, module: PanelModule) -> Option<Rect> {
        self.left
            .iter()
            .chain(&self.right)
            .find(|s| s.module == module)
            .map(|s| s.rect)
    }

    /// Mini bar chips from the last frame, by window id.
    pub fn mini_rects(&self) -> &[(i32, Rect)] {
        &self.mini_rects
    }

    /// Window under the pointer in the mini bar.
    pub fn hovered_window(&self) -> Option<i32> {
        self.hover_id
    }

    pub fn top_gradient(&self) -> &GradientCache {
        &self.top_gradient
    }

    pub fn mini_gradient(&self) -> &GradientCache {
        &self.mini_gradient
    }

    fn launch(&mut self, what: Launch) {
        tracing::info!(?what, "launch");
        (self.launcher)(what);
    }

    fn tick_clock(&mut self) {
        self.model.set_clock(SystemTime::now());
        self.model.net = net_label(&self.net_root);
        if let Some(socket) = &self.socket {
            self.model.watch_service(socket);
        }
    }

    fn refresh_windows(&mut self) {
        self.entries = self.windows.windows();
        self.model.set_windows(&self.entries);
    }

    /// Follow workspace hover.
    fn update_expansion(&mut self) {
        if self.ws_hover != self.expanded {
            self.expanded = self.ws_hover;
            tracing::debug!(height = self.height(), "panel height");
        }
    }

    fn on_mouse(&mut self, m: Mouse) {
        self.mouse = m;
        self.ws_hover = self.ws_rect.contains(m.xy);

        if self.expanded {
            let mr = mini_rect(self.surface, self.base_height, self.mini_height);
            if mr.contains(m.xy) {
                self.ws_hover = true;
            }
            if m.left() {
                let hit = self.mini_rects.iter().find(|(_, r)| r.contains(m.xy));
                if let Some(&(id, _)) = hit {
                    tracing::debug!(id, "focus window");
                    self.windows.focus(id);
                    return;
                }
            }
        }

        if m.left() {
            if let Some(first) = self.left.first() {
                if first.module == PanelModule::Menu {
                    self.focus_menu = first.rect.contains(m.xy);
                }
            }
            let hit = self
                .left
                .iter()
                .chain(&self.right)
                .find(|s| s.rect.contains(m.xy))
                .map(|s| s.module);
            match hit {
                Some(PanelModule::Menu) => {
                    self.launch(Launch::Dashboard);
                    return;
                }
                Some(PanelModule::Notify) if self.model.notify > 0 => {
                    self.model.notify = 0;
                    self.launch(Launch::Errors);
                    return;
                }
                _ => {}
            }
        }

        self.update_expansion();
    }

    fn on_key(&mut self, key: char) -> bool {
        match key {
            'd' => self.launch(Launch::Dashboard),
            'l' => self.launch(Launch::Logs),
            ' ' | '\n' if self.focus_menu => self.launch(Launch::Dashboard),
            _ => return false,
        }
        true
    }

    fn draw_topbar(&mut self, p: &mut Painter<'_>, cx: &AppContext, bar: Rect) {
        let g = &cx.config.gradient;
        if g.top {
            let theme = cx.theme.theme();
            let c0 = theme.colors.topbar_bg;
            let c1 = c0.lift(theme.style().topbar_lift());
            self.top_gradient
                .ensure(bar.dy(), g.top0.unwrap_or(c0), g.top1.unwrap_or(c1));
            self.top_gradient.draw(&mut *p.canvas, bar);
        } else {
            p.fill(bar, ColorRole::TopbarBg);
        }
        p.outline(bar);
    }

    fn draw_mini_bar(&mut self, p: &mut Painter<'_>, cx: &AppContext, r: Rect) {
        let cfg = &cx.config.panel;
        let g = &cx.config.gradient;
        if g.mini {
            let c0 = cx.theme.theme().colors.surface;
            let c1 = c0.lift(-8);
            self.mini_gradient
                .ensure(r.dy(), g.mini0.unwrap_or(c0), g.mini1.unwrap_or(c1));
            self.mini_gradient.draw(&mut *p.canvas, r);
        } else {
            p.fill(r, ColorRole::Surface);
        }
        p.outline(r);

        self.mini_rects.clear();
        let mut hover_id = None;
        let mut x = r.min.x + cfg.gap;
        for w in &self.entries {
            let fit = ellipsize(&*p.canvas, &w.label, cfg.win_max_width - 44, cfg.ascii);
            let text = format!("{} {fit}", w.id);
            let width = (p.string_width(&text) + cfg.pad * 2).min(cfg.win_max_width);
            let rr = Rect::new(x, r.min.y + 2, x + width, r.max.y - 2);

            let hover = rr.contains(self.mouse.xy);
            let pressed = hover && self.mouse.left();
            if w.current {
                let (rad, fill) = (p.radius().min(6), p.color(ColorRole::Surface2));
                p.round_rect(rr, rad, fill);
                p.outline(rr);
                let accent = p.color(ColorRole::Accent);
                p.canvas.border(rr, 1, accent);
            } else {
                chip(p, rr, cfg.chip, hover, pressed, false);
            }
            let at = p.left_middle(rr, rr.min.x + cfg.pad);
            shadowed(p, at, &text, ColorRole::Text);

            if hover {
                hover_id = Some(w.id);
            }
            self.mini_rects.push((w.id, rr));
            x += width + cfg.gap;
            if x > r.max.x - MINI_RESERVE {
                break;
            }
        }
        self.hover_id = hover_id;

        let hint = self.windows.location(hover_id);
        if !hint.is_empty() {
            let at = Point::new(
                r.max.x - p.string_width(&hint) - cfg.gap,
                r.min.y + (r.dy() - p.font_height()) / 2,
            );
            shadowed(p, at, &hint, ColorRole::Muted);
        }
    }
}

/// Chip behind an interactive module. With `panel_chip` on, idle chips are
/// invisible and only hover, press or focus show the surface.
fn chip(p: &mut Painter<'_>, r: Rect, calm: bool, hover: bool, pressed: bool, focus: bool) {
    if calm && !hover && !pressed && !focus {
        return;
    }
    let rad = p.radius().min(6);
    let fill = p.color(if pressed {
        ColorRole::Surface2
    } else {
        ColorRole::Surface
    });
    p.round_rect(r, rad, fill);
    p.outline(r);
    if hover || focus {
        let accent = p.color(ColorRole::Accent);
        p.canvas.border(r, 1, accent);
    }
}

/// `s` over its shadow, one pixel lower.
fn shadowed(p: &mut Painter<'_>, at: Point, s: &str, role: ColorRole) {
    let (shadow, color) = (p.color(ColorRole::Shadow), p.color(role));
    p.canvas.string(at + Point::new(0, 1), s, shadow);
    p.canvas.string(at, s, color);
}

fn measure(model: &PanelModel, module: PanelModule, canvas: &dyn Canvas, cfg: &PanelConfig) -> i32 {
    let pad2 = cfg.pad * 2;
    match module {
        PanelModule::Workspace => {
            let fit = ellipsize(canvas, &model.workspace, cfg.ws_max_width - 40, cfg.ascii);
            let text = format!("{} {fit}", sym(cfg.ascii, "▦", "WS"));
            (canvas.string_width(&text) + pad2).min(cfg.ws_max_width)
        }
        _ => canvas.string_width(&model.label(module, cfg.ascii)) + pad2,
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_module(
    p: &mut Painter<'_>,
    model: &PanelModel,
    module: PanelModule,
    r: Rect,
    cfg: &PanelConfig,
    hover: bool,
    pressed: bool,
    focus: bool,
) {
    let at = p.left_middle(r, r.min.x + cfg.pad);
    let text = match module {
        PanelModule::Menu => {
            chip(p, r, cfg.chip, hover, pressed, focus);
            model.label(module, cfg.ascii)
        }
        PanelModule::Workspace => {
            chip(p, r, cfg.chip, hover, pressed, false);
            let prefix = format!("{} ", sym(cfg.ascii, "▦", "WS"));
            let max = r.dx() - cfg.pad * 2 - p.string_width(&prefix);
            let fit = ellipsize(&*p.canvas, &model.workspace, max, cfg.ascii);
            prefix + &fit
        }
        PanelModule::Notify => {
            if model.notify > 0 {
                chip(p, r, cfg.chip, hover, pressed, false);
            }
            model.label(module, cfg.ascii)
        }
        _ => model.label(module, cfg.ascii),
    };
    shadowed(p, at, &text, ColorRole::TopbarText);
}

impl<W: WindowSource + 'static> App for Panel<W> {
    fn init(&mut self, cx: &mut AppContext, timers: &mut Timers<Self>, now: Instant) {
        self.configure(&cx.config.panel);
        if let Some(socket) = &self.socket {
            self.model.check_service(socket);
        }
        self.tick_clock();
        self.refresh_windows();

        timers.add_at(now, CLOCK_TICK, CLOCK_TICK, |s, _| {
            s.app.tick_clock();
            s.cx.mark_dirty();
        });
        timers.add_at(now, WINDOW_POLL, WINDOW_POLL, |s, _| {
            s.app.refresh_windows();
            s.app.update_expansion();
            s.cx.mark_dirty();
        });
        timers.add_at(now, REDRAW_PULSE, REDRAW_PULSE, |s, _| s.cx.mark_dirty());
    }

    fn event(&mut self, cx: &mut AppContext, event: InputEvent) {
        match event {
            InputEvent::Mouse(m) => {
                self.on_mouse(m);
                cx.mark_dirty();
            }
            InputEvent::Key(k) => {
                if self.on_key(k) {
                    cx.mark_dirty();
                }
            }
            InputEvent::Resize { width, height } => {
                self.surface = Rect::new(0, 0, width, height);
            }
        }
    }

    fn control(&mut self, _cx: &mut AppContext, event: &ControlEvent) {
        self.model.react(event);
    }

    fn reloaded(&mut self, cx: &mut AppContext) {
        self.configure(&cx.config.panel);
    }

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
        let cfg = &cx.config.panel;
        let bounds = canvas.bounds();
        self.surface = bounds;
        let bar = bounds.top_rows(self.base_height);

        for slot in self.left.iter_mut().chain(self.right.iter_mut()) {
            slot.width = measure(&self.model, slot.module, &*canvas, cfg);
        }
        let widths = |slots: &[Slot]| slots.iter().map(|s| s.width).collect::<Vec<_>>();
        let (lrects, rrects) = stack_layout(bar, &widths(&self.left), &widths(&self.right), cfg.gap);
        for (slot, r) in self.left.iter_mut().zip(lrects) {
            slot.rect = r;
        }
        for (slot, r) in self.right.iter_mut().zip(rrects) {
            slot.rect = r;
        }
        self.ws_rect = self.module_rect(PanelModule::Workspace).unwrap_or(Rect::ZERO);

        let mut p = Painter::new(canvas, &cx.theme);
        self.draw_topbar(&mut p, cx, bar);

        let mouse = self.mouse;
        for slot in self.left.iter().chain(&self.right) {
            let hover = slot.module.interactive() && slot.rect.contains(mouse.xy);
            let focus = slot.module == PanelModule::Menu && self.focus_menu;
            draw_module(
                &mut p,
                &self.model,
                slot.module,
                slot.rect,
                cfg,
                hover,
                hover && mouse.left(),
                focus,
            );
        }

        match mini_bar(bounds, self.base_height, self.mini_height) {
            Some(mr) if self.expanded => self.draw_mini_bar(&mut p, cx, mr),
            _ => {
                self.mini_rects.clear();
                self.hover_id = None;
            }
        }
    }
}
