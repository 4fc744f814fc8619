//! Widget demo on the headless backend.
//!
//! Scripts a few clicks, runs the loop until `q`, then prints the strings
//! the last frame drew.
//!
//! ```text
//! cargo run -p ui9_app --example ui9_demo -- --style glass
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use ui9_app::{App, AppContext, Runtime, Timers};
use ui9_config::{config_path, ProcessEnv};
use ui9_core::{InputEvent, Mouse, Point, Rect};
use ui9_paint::widgets::{
    button, list_item, progress, segment, segment_hit, slider, slider_value, toggle, ButtonKind,
    ButtonState,
};
use ui9_paint::{Canvas, PaintCommand, Painter};
use ui9_platform::{HeadlessBackend, Scripted};
use ui9_theme::{ColorRole, Style};

#[derive(Parser, Debug)]
#[command(name = "ui9_demo", about = "9DE widget demo (headless)")]
struct Args {
    /// Style preset: terminal, dark or glass
    #[arg(long, default_value = "terminal")]
    style: String,

    #[arg(long, default_value_t = 960)]
    width: i32,

    #[arg(long, default_value_t = 540)]
    height: i32,
}

const NAV: [&str; 4] = ["Controls", "Window", "Components", "About"];
const MODES: [&str; 3] = ["laptop", "wide", "dev"];

struct Layout {
    nav: [Rect; 4],
    head: Rect,
    content: Rect,
    toggles: [Rect; 2],
    slider: Rect,
    spinner: Rect,
    segments: [Rect; 3],
    apply: Rect,
}

impl Layout {
    fn new(screen: Rect) -> Self {
        let nav_w = 220;
        let nav_item = |i: i32| {
            let y = screen.min.y + 14 + i * 40;
            Rect::new(screen.min.x + 12, y, screen.min.x + nav_w - 12, y + 34)
        };
        let main = Rect::new(screen.min.x + nav_w, screen.min.y, screen.max.x, screen.max.y);
        let head = main.top_rows(38);
        let mut content = Rect::new(main.min.x, head.max.y, main.max.x, main.max.y).inset(12);
        content.min.y += 6;

        let row = |i: i32| {
            let y = content.min.y + 12 + i * 46;
            Rect::new(content.min.x + 12, y, content.max.x - 12, y + 46)
        };
        let r3 = row(2);
        let r5 = row(4);
        let seg = |i: i32| {
            let x = r5.max.x - 12 - (72 * 3 + 8) + i * 76;
            let y = r5.min.y + 9;
            Rect::new(x, y, x + 72, y + 28)
        };

        Self {
            nav: [nav_item(0), nav_item(1), nav_item(2), nav_item(3)],
            head,
            content,
            toggles: [row(0), row(1)],
            slider: Rect::new(r3.max.x - 220, r3.min.y + 12, r3.max.x - 12, r3.min.y + 34),
            spinner: row(3).inset(12),
            segments: [seg(0), seg(1), seg(2)],
            apply: Rect::new(head.max.x - 90, head.min.y + 7, head.max.x - 14, head.max.y - 7),
        }
    }
}

struct Demo {
    layout: Layout,
    nav: usize,
    start_panel: bool,
    start_demo: bool,
    alpha: i32,
    mode: Option<usize>,
    spin: i32,
}

impl Demo {
    fn click(&mut self, cx: &mut AppContext, at: Point) {
        let l = &self.layout;
        if let Some(i) = l.nav.iter().position(|r| r.contains(at)) {
            self.nav = i;
        } else if l.toggles[0].contains(at) {
            self.start_panel = !self.start_panel;
        } else if l.toggles[1].contains(at) {
            self.start_demo = !self.start_demo;
        } else if l.slider.contains(at) {
            self.alpha = slider_value(l.slider, at);
            cx.theme.set_alpha(self.alpha);
        } else if let Some(i) = segment_hit(&l.segments, at) {
            self.mode = Some(i);
        } else if l.apply.contains(at) {
            cx.request_reload();
        } else {
            return;
        }
        cx.mark_dirty();
    }
}

impl App for Demo {
    fn init(&mut self, _cx: &mut AppContext, timers: &mut Timers<Self>, now: Instant) {
        // Spinner at ~25 fps.
        timers.add_at(now, Duration::ZERO, Duration::from_millis(40), |s, _| {
            s.app.spin = (s.app.spin + 2) % 101;
            s.cx.mark_dirty();
        });
    }

    fn event(&mut self, cx: &mut AppContext, event: InputEvent) {
        match event {
            InputEvent::Mouse(m) if m.left() => self.click(cx, m.xy),
            InputEvent::Key('q') => cx.quit(),
            InputEvent::Resize { width, height } => {
                self.layout = Layout::new(Rect::new(0, 0, width, height));
            }
            _ => {}
        }
    }

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
        let bounds = canvas.bounds();
        let l = &self.layout;
        let mut p = Painter::new(canvas, &cx.theme);

        p.fill(bounds, ColorRole::Background);
        let nav_card = Rect::new(bounds.min.x, bounds.min.y, l.nav[0].max.x + 12, bounds.max.y);
        p.card(nav_card.inset(2));
        for (i, (r, label)) in l.nav.iter().zip(NAV).enumerate() {
            list_item(&mut p, *r, label, i == self.nav);
        }

        p.fill(l.head, ColorRole::Surface2);
        let at = p.left_middle(l.head, l.head.min.x + 14);
        p.text(at, "ui9demo", ColorRole::Text);
        button(&mut p, l.apply, "Apply", ButtonKind::Primary, ButtonState::Normal);

        p.card(l.content);
        toggle(&mut p, l.toggles[0], Some("Start panel"), self.start_panel);
        toggle(&mut p, l.toggles[1], Some("Start demo"), self.start_demo);
        slider(&mut p, l.slider, self.alpha);
        progress(&mut p, l.spinner, self.spin);
        segment(&mut p, &l.segments, &MODES, self.mode);

        if let Some(status) = cx.status() {
            let at = Point::new(l.content.min.x + 12, l.content.max.y - 24);
            p.text(at, status, ColorRole::Muted);
        }
    }
}

fn click(at: Point) -> Scripted {
    Scripted::Event {
        after: Duration::from_millis(120),
        event: InputEvent::Mouse(Mouse {
            xy: at,
            buttons: Mouse::LEFT,
        }),
    }
}

fn center(r: Rect) -> Point {
    Point::new(r.min.x + r.dx() / 2, r.min.y + r.dy() / 2)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cx = AppContext::load(config_path(&ProcessEnv), Box::new(ProcessEnv))
        .context("Failed to load config")?;
    cx.theme.set_style(Style::from_name(&args.style));

    let mut backend = HeadlessBackend::new(args.width, args.height)
        .context("Failed to create headless surface")?;
    let layout = Layout::new(backend.recording().bounds());
    let slider_at = Point::new(
        layout.slider.min.x + layout.slider.dx() * 3 / 4,
        center(layout.slider).y,
    );
    backend
        .push(click(center(layout.nav[2])))
        .push(click(center(layout.toggles[0])))
        .push(click(slider_at))
        .push(click(center(layout.segments[1])))
        .push(Scripted::Event {
            after: Duration::from_millis(200),
            event: InputEvent::Key('q'),
        });

    let demo = Demo {
        layout,
        nav: 0,
        start_panel: true,
        start_demo: true,
        alpha: 180,
        mode: Some(0),
        spin: 0,
    };
    let mut rt = Runtime::new(demo, cx, backend);
    rt.run().context("Demo loop failed")?;

    let app = rt.app();
    println!(
        "frames={} nav={} panel={} demo={} alpha={} mode={:?}",
        rt.frames(),
        NAV[app.nav],
        app.start_panel,
        app.start_demo,
        app.alpha,
        app.mode.map(|i| MODES[i]),
    );

    // The recording holds every frame; print only the last one.
    let commands = rt.backend().recording().commands();
    let start = commands[..commands.len().saturating_sub(1)]
        .iter()
        .rposition(|c| matches!(c, PaintCommand::Flush))
        .map_or(0, |i| i + 1);
    for command in &commands[start..] {
        if let PaintCommand::Text { text, .. } = command {
            println!("  {text}");
        }
    }
    Ok(())
}
