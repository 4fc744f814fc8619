//! Dashboard surface
//!
//! Opened from the panel menu. Three columns under a header: launch tiles,
//! system status and the shell contract.

use ui9_app::{App, AppContext};
use ui9_core::{Flex, InputEvent, Point, Rect};
use ui9_paint::{Canvas, Painter};
use ui9_theme::ColorRole;

const PAD: i32 = 14;
const HEADER: i32 = 54;
const COL_GAP: i32 = 14;
const COL1: i32 = 360;
const COL2: i32 = 560;
const TILE: i32 = 60;

const LAUNCH: [(&str, &str); 4] = [
    ("Control Center", "session · placement · styles"),
    ("Launcher", "search apps · recent"),
    ("Terminal", "rc + plumber"),
    ("Files", "browse /home /usr"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashLayout {
    pub header: Rect,
    pub command: Rect,
    pub columns: [Rect; 3],
    pub launch: [Rect; 4],
    pub session: Rect,
    pub placement: Rect,
    pub preset: Rect,
    pub logs: Rect,
    pub contract: Rect,
}

impl DashLayout {
    pub fn new(r: Rect) -> Self {
        let mut outer = Flex::column(r);
        let header = outer.fixed(HEADER);
        let body = outer.grow(1, 0);
        outer.layout();
        let header = outer.rect(header);
        let body = outer.rect(body).inset(PAD);

        let command = Rect::new(
            header.max.x - 640,
            header.min.y + 14,
            header.max.x - 14,
            header.min.y + 40,
        );

        let mut cols = Flex::row(body).gap(COL_GAP);
        let ids = [cols.fixed(COL1), cols.fixed(COL2), cols.grow(1, 0)];
        cols.layout();
        let [c1, c2, c3] = ids.map(|i| cols.rect(i));

        // Column content starts below the column title.
        let content = |c: Rect| Rect::new(c.min.x, c.min.y + 12, c.max.x, c.max.y);

        let mut tiles = Flex::column(content(c1)).gap(10);
        let launch = [(); 4].map(|_| tiles.fixed(TILE));
        tiles.layout();

        let mut system = Flex::column(content(c2)).gap(10);
        let (session, pair, logs) = (system.fixed(150), system.fixed(70), system.fixed(70));
        system.layout();

        let mut halves = Flex::row(system.rect(pair)).gap(14);
        let (placement, preset) = (halves.grow(1, 0), halves.grow(1, 0));
        halves.layout();

        Self {
            header,
            command,
            columns: [c1, c2, c3],
            launch: launch.map(|i| tiles.rect(i)),
            session: system.rect(session),
            placement: halves.rect(placement),
            preset: halves.rect(preset),
            logs: system.rect(logs),
            contract: content(c3).top_rows(220),
        }
    }
}

#[derive(Debug, Default)]
pub struct Dashboard {
    layout: Option<DashLayout>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of the last frame.
    pub fn layout(&self) -> Option<&DashLayout> {
        self.layout.as_ref()
    }
}

fn tile(p: &mut Painter<'_>, r: Rect, title: &str, sub: &str, accent: bool) {
    p.fill(r, ColorRole::Surface2);
    p.outline(r);
    if accent {
        p.fill(Rect::new(r.min.x, r.min.y, r.min.x + 4, r.max.y), ColorRole::Accent);
    }
    p.shadow_string(Point::new(r.min.x + 10, r.min.y + 10), title);
    p.text(Point::new(r.min.x + 10, r.min.y + 28), sub, ColorRole::Muted);
}

fn section(p: &mut Painter<'_>, r: Rect, title: &str, sub: &str, body: &str) {
    p.fill(r, ColorRole::Surface2);
    p.outline(r);
    p.shadow_string(Point::new(r.min.x + 12, r.min.y + 12), title);
    p.text(Point::new(r.min.x + 12, r.min.y + 34), sub, ColorRole::Muted);
    let lh = p.font_height();
    for (i, line) in body.lines().enumerate() {
        let at = Point::new(r.min.x + 12, r.min.y + 66 + i as i32 * lh);
        p.text(at, line, ColorRole::Text);
    }
}

impl App for Dashboard {
    fn event(&mut self, cx: &mut AppContext, event: InputEvent) {
        match event {
            InputEvent::Key('q') => cx.quit(),
            InputEvent::Key(_) | InputEvent::Mouse(_) => cx.mark_dirty(),
            InputEvent::Resize { .. } => {}
        }
    }

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
        let bounds = canvas.bounds();
        let l = DashLayout::new(bounds);
        let style = cx.theme.theme().style();
        let mut p = Painter::new(canvas, &cx.theme);

        p.fill(bounds, ColorRole::Background);
        p.fill(l.header, ColorRole::Surface);
        p.outline(l.header);
        p.shadow_string(Point::new(l.header.min.x + 14, l.header.min.y + 18), "Dashboard");
        p.text(
            Point::new(l.header.min.x + 150, l.header.min.y + 20),
            "desktop shell · dash surface",
            ColorRole::Muted,
        );
        p.fill(l.command, ColorRole::Surface);
        p.outline(l.command);
        p.text(
            Point::new(l.command.min.x + 10, l.command.min.y + 7),
            &format!("> open control · logs · style {style}"),
            ColorRole::Text,
        );

        for (c, title) in l.columns.iter().zip(["LAUNCH", "SYSTEM", "SHELL CONTRACT"]) {
            p.text(Point::new(c.min.x, c.min.y - 2), title, ColorRole::Text);
        }

        for (i, (r, (title, sub))) in l.launch.iter().zip(LAUNCH).enumerate() {
            tile(&mut p, *r, title, sub, i == 0);
        }

        section(
            &mut p,
            l.session,
            "Session: 9DE (rio)",
            &format!("style preset: {style} · logs: split · autostart: shell"),
            "cpu 37%   mem 58%   net 21%",
        );
        tile(&mut p, l.placement, "Panel placement", "top/bottom/left", false);
        tile(&mut p, l.preset, "Style preset", "terminal/dark/glass", false);
        tile(&mut p, l.logs, "Logs", "open .err / .log streams", true);

        section(
            &mut p,
            l.contract,
            "Fixed placement, flexible apps",
            "Panel/Dash/Notify pinned; apps use stacks/grids.",
            "shell: placement + modules\napps: measure → place\nstyles: presets only",
        );

        self.layout = Some(l);
    }
}
