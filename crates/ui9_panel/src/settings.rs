//! Settings surface
//!
//! A form over the session, panel and appearance keys of `config.rc`.
//! Apply rewrites the file through [`ConfigWriter`] and then asks the
//! running shell to reload; a failed write only changes the status line.

use ui9_app::{App, AppContext, Timers};
use ui9_config::{keys, ConfigSnapshot, ConfigWriter, Placement, SessionMode, TestLayout};
use ui9_core::{clamp_i32, Flex, InputEvent, Mouse, Point, Rect};
use ui9_paint::widgets::{
    button, dropdown_button, dropdown_item, dropdown_rows, edit_line, segment, segment_hit,
    slider, slider_value, textfield, toggle, ButtonKind, ButtonState,
};
use ui9_paint::{Canvas, Painter};
use ui9_theme::{ColorRole, Style, Theme};

/// Longest module list a field accepts.
pub const MAX_FIELD: usize = 256;
/// Longest color a gradient field accepts.
pub const MAX_COLOR: usize = 32;
/// Largest corner radius the form writes.
pub const MAX_RADIUS: i32 = 24;

const INSET: i32 = 16;
const HEADER: i32 = 44;
const SESSION: i32 = 160;
const PANEL: i32 = 170;
const FOOTER: i32 = 24;
const GAP: i32 = 14;
const ROW: i32 = 28;
const LABEL: i32 = 110;
const APPLY_W: i32 = 140;

const MODES: [SessionMode; 3] = [SessionMode::Normal, SessionMode::Test, SessionMode::Dev];
const LAYOUTS: [TestLayout; 2] = [TestLayout::Laptop, TestLayout::Ultrawide];

/// Editable text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    PanelLeft,
    PanelRight,
    Top0,
    Top1,
    Mini0,
    Mini1,
}

impl Field {
    pub fn max_len(self) -> usize {
        match self {
            Self::PanelLeft | Self::PanelRight => MAX_FIELD,
            _ => MAX_COLOR,
        }
    }
}

/// One-click panel layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPreset {
    Default,
    Minimal,
    Dev,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 3] = [Self::Default, Self::Minimal, Self::Dev];

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default layout",
            Self::Minimal => "Minimal",
            Self::Dev => "Dev layout",
        }
    }
}

/// The values being edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub start_shell: bool,
    pub start_demo: bool,
    pub mode: SessionMode,
    pub test_layout: TestLayout,
    pub placement: Placement,
    pub panel_left: String,
    pub panel_right: String,
    pub style: Style,
    pub alpha: i32,
    pub radius: i32,
    pub top_gradient: bool,
    pub top0: String,
    pub top1: String,
    pub mini_gradient: bool,
    pub mini0: String,
    pub mini1: String,
}

fn color_text(c: Option<ui9_core::Rgb>) -> String {
    c.map(|c| c.to_string()).unwrap_or_default()
}

impl SettingsForm {
    /// Seed from the resolved config. Appearance values the config leaves
    /// unset come from `theme`.
    pub fn from_config(cfg: &ConfigSnapshot, theme: &Theme) -> Self {
        let ap = &cfg.appearance;
        Self {
            start_shell: cfg.session.start_shell,
            start_demo: cfg.session.start_demo,
            mode: cfg.session.mode,
            test_layout: cfg.session.test_layout,
            placement: cfg.panel.placement,
            panel_left: cfg.panel.left.clone(),
            panel_right: cfg.panel.right.clone(),
            style: ap
                .style
                .as_deref()
                .map(Style::from_name)
                .unwrap_or_else(|| theme.style()),
            alpha: ap.alpha.unwrap_or_else(|| i32::from(theme.alpha())),
            radius: ap.radius.unwrap_or_else(|| theme.radius()),
            top_gradient: cfg.gradient.top,
            top0: color_text(cfg.gradient.top0),
            top1: color_text(cfg.gradient.top1),
            mini_gradient: cfg.gradient.mini,
            mini0: color_text(cfg.gradient.mini0),
            mini1: color_text(cfg.gradient.mini1),
        }
    }

    pub fn field(&self, f: Field) -> &str {
        match f {
            Field::PanelLeft => &self.panel_left,
            Field::PanelRight => &self.panel_right,
            Field::Top0 => &self.top0,
            Field::Top1 => &self.top1,
            Field::Mini0 => &self.mini0,
            Field::Mini1 => &self.mini1,
        }
    }

    pub fn field_mut(&mut self, f: Field) -> &mut String {
        match f {
            Field::PanelLeft => &mut self.panel_left,
            Field::PanelRight => &mut self.panel_right,
            Field::Top0 => &mut self.top0,
            Field::Top1 => &mut self.top1,
            Field::Mini0 => &mut self.mini0,
            Field::Mini1 => &mut self.mini1,
        }
    }

    pub fn apply_preset(&mut self, preset: LayoutPreset) {
        let (left, right) = match preset {
            LayoutPreset::Minimal => ("menu", "clock"),
            LayoutPreset::Default | LayoutPreset::Dev => ("menu ws", "preset de net clock notif"),
        };
        self.panel_left = left.to_string();
        self.panel_right = right.to_string();
        if preset == LayoutPreset::Dev {
            self.start_demo = true;
            self.mode = SessionMode::Test;
        }
    }

    /// Queue every form value on `w`. Gradient endpoints are only written
    /// while their gradient is on and the field is not blank.
    pub fn write_to(&self, w: &mut ConfigWriter) {
        w.set_flag(keys::START_SHELL, self.start_shell)
            .set_flag(keys::START_DEMO, self.start_demo)
            .set(keys::SESSION_MODE, self.mode.id())
            .set(keys::TEST_LAYOUT, self.test_layout.id())
            .set(keys::PANEL_LEFT, &self.panel_left)
            .set(keys::PANEL_RIGHT, &self.panel_right)
            .set(keys::PANEL_PLACEMENT, self.placement.id())
            .set(keys::UI_STYLE, self.style.id())
            .set_int(keys::UI_ALPHA, clamp_i32(self.alpha, 0, 255))
            .set_int(keys::UI_RADIUS, clamp_i32(self.radius, 0, MAX_RADIUS))
            .set_flag(keys::UI_TOPGRAD, self.top_gradient)
            .set_flag(keys::UI_MINIGRAD, self.mini_gradient);

        let ends = [
            (self.top_gradient, keys::UI_TOPGRAD0, &self.top0),
            (self.top_gradient, keys::UI_TOPGRAD1, &self.top1),
            (self.mini_gradient, keys::UI_MINIGRAD0, &self.mini0),
            (self.mini_gradient, keys::UI_MINIGRAD1, &self.mini1),
        ];
        for (on, key, value) in ends {
            let value = value.trim();
            if on && !value.is_empty() {
                w.set(key, value);
            }
        }
    }
}

/// Hit and draw rectangles for one surface size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsLayout {
    pub header: Rect,
    pub apply: Rect,
    pub sections: [Rect; 3],
    pub footer: Rect,
    pub start_shell: Rect,
    pub start_demo: Rect,
    pub mode: Vec<Rect>,
    pub test_layout: Vec<Rect>,
    pub placement: Rect,
    pub presets: Vec<Rect>,
    pub panel_left: Rect,
    pub panel_right: Rect,
    pub style: Vec<Rect>,
    pub alpha: Rect,
    pub radius: Rect,
    pub top_toggle: Rect,
    pub top0: Rect,
    pub top1: Rect,
    pub mini_toggle: Rect,
    pub mini0: Rect,
    pub mini1: Rect,
    /// Row labels and where they go.
    pub labels: Vec<(Rect, &'static str)>,
}

fn split(r: Rect, n: usize, gap: i32) -> Vec<Rect> {
    let mut fx = Flex::row(r).gap(gap);
    let ids: Vec<usize> = (0..n).map(|_| fx.grow(1, 0)).collect();
    fx.layout();
    ids.into_iter().map(|i| fx.rect(i)).collect()
}

fn rows<const N: usize>(section: Rect) -> [Rect; N] {
    let body = Rect::new(
        section.min.x + 12,
        section.min.y + 36,
        section.max.x - 12,
        section.max.y - 12,
    );
    let mut fx = Flex::column(body).gap(8);
    let ids = [(); N].map(|_| fx.fixed(ROW));
    fx.layout();
    ids.map(|i| fx.rect(i))
}

/// A fixed label column and the control after it.
fn labeled(r: Rect) -> (Rect, Rect) {
    let mut fx = Flex::row(r).gap(10);
    let (label, control) = (fx.fixed(LABEL), fx.grow(1, 0));
    fx.layout();
    (fx.rect(label), fx.rect(control))
}

/// A toggle followed by two equal fields.
fn gradient_row(r: Rect) -> (Rect, Rect, Rect) {
    let mut fx = Flex::row(r).gap(10);
    let (t, a, b) = (fx.fixed(180), fx.grow(1, 0), fx.grow(1, 0));
    fx.layout();
    (fx.rect(t), fx.rect(a), fx.rect(b))
}

impl SettingsLayout {
    pub fn new(bounds: Rect) -> Self {
        let mut outer = Flex::column(bounds).pad(INSET).gap(GAP);
        let ids = [
            outer.fixed(HEADER),
            outer.fixed(SESSION),
            outer.fixed(PANEL),
            outer.grow(1, 0),
            outer.fixed(FOOTER),
        ];
        outer.layout();
        let [header, session, panel, appearance, footer] = ids.map(|i| outer.rect(i));
        let apply = Rect::new(header.max.x - APPLY_W, header.min.y, header.max.x, header.max.y)
            .inset(8);

        let mut labels = Vec::new();
        let mut label = |r: Rect, text: &'static str| labels.push((r, text));

        let [toggles, mode_row, test_row] = rows::<3>(session);
        let halves = split(toggles, 2, 14);
        let (l, mode) = labeled(mode_row);
        label(l, "Session");
        let (l, test) = labeled(test_row);
        label(l, "Test layout");

        let [top_row, left_row, right_row] = rows::<3>(panel);
        let mut fx = Flex::row(top_row).gap(10);
        let placement = fx.fixed(160);
        let presets: Vec<usize> = LayoutPreset::ALL.iter().map(|_| fx.grow(1, 0)).collect();
        fx.layout();
        let (l, panel_left) = labeled(left_row);
        label(l, "panel_left");
        let (l, panel_right) = labeled(right_row);
        label(l, "panel_right");

        let [style_row, alpha_row, radius_row, top_row2, mini_row] = rows::<5>(appearance);
        let (l, style) = labeled(style_row);
        label(l, "Style");
        let (l, alpha) = labeled(alpha_row);
        label(l, "Alpha");
        let (l, radius) = labeled(radius_row);
        label(l, "Radius");
        let (top_toggle, top0, top1) = gradient_row(top_row2);
        let (mini_toggle, mini0, mini1) = gradient_row(mini_row);

        Self {
            header,
            apply,
            sections: [session, panel, appearance],
            footer,
            start_shell: halves[0],
            start_demo: halves[1],
            mode: split(mode, MODES.len(), 6),
            test_layout: split(test, LAYOUTS.len(), 6),
            placement: fx.rect(placement),
            presets: presets.into_iter().map(|i| fx.rect(i)).collect(),
            panel_left,
            panel_right,
            style: split(style, Style::all().len(), 6),
            alpha,
            radius,
            top_toggle,
            top0,
            top1,
            mini_toggle,
            mini0,
            mini1,
            labels,
        }
    }

    pub fn field(&self, f: Field) -> Rect {
        match f {
            Field::PanelLeft => self.panel_left,
            Field::PanelRight => self.panel_right,
            Field::Top0 => self.top0,
            Field::Top1 => self.top1,
            Field::Mini0 => self.mini0,
            Field::Mini1 => self.mini1,
        }
    }

    /// Rows of the open placement dropdown.
    pub fn placement_rows(&self) -> Vec<Rect> {
        dropdown_rows(self.placement, Placement::all().len())
    }
}

const FIELDS: [Field; 6] = [
    Field::PanelLeft,
    Field::PanelRight,
    Field::Top0,
    Field::Top1,
    Field::Mini0,
    Field::Mini1,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Drag {
    Alpha,
    Radius,
}

/// Reply of the shell to the reload request; `None` when it was not
/// reachable.
pub type Reloader = Box<dyn FnMut() -> Option<String>>;

pub struct Settings {
    form: SettingsForm,
    layout: Option<SettingsLayout>,
    focus: Option<Field>,
    placement_open: bool,
    held: bool,
    drag: Option<Drag>,
    status: String,
    reloader: Reloader,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        let theme = Theme::default();
        Self {
            form: SettingsForm::from_config(&ConfigSnapshot::default(), &theme),
            layout: None,
            focus: None,
            placement_open: false,
            held: false,
            drag: None,
            status: "Ready.".to_string(),
            reloader: Box::new(|| None),
        }
    }

    /// How Apply asks the shell to reload.
    pub fn with_reloader(mut self, reloader: impl FnMut() -> Option<String> + 'static) -> Self {
        self.reloader = Box::new(reloader);
        self
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SettingsForm {
        &mut self.form
    }

    pub fn focus(&self) -> Option<Field> {
        self.focus
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Layout of the last frame.
    pub fn layout(&self) -> Option<&SettingsLayout> {
        self.layout.as_ref()
    }

    /// Write the form to the config file and post a reload.
    pub fn apply(&mut self, cx: &mut AppContext) {
        let written = ConfigWriter::open(cx.config_path()).and_then(|mut w| {
            self.form.write_to(&mut w);
            w.commit()
        });
        match written {
            Ok(()) => {
                let sent = (self.reloader)();
                tracing::info!(path = %cx.config_path().display(), reload = sent.is_some(), "settings applied");
                self.status = match sent {
                    Some(_) => "Applied. (config.rc updated, reload sent)".to_string(),
                    None => "Applied. (config.rc updated, shell not reachable)".to_string(),
                };
                cx.request_reload();
            }
            Err(e) => {
                tracing::warn!("settings not written: {e}");
                self.status = format!("Write failed: {e}");
            }
        }
        cx.mark_dirty();
    }

    fn press(&mut self, cx: &mut AppContext, l: &SettingsLayout, at: Point) {
        if self.placement_open {
            self.placement_open = false;
            let rows = l.placement_rows();
            if let Some(i) = segment_hit(&rows, at) {
                self.form.placement = Placement::all()[i];
            }
            return;
        }

        self.focus = FIELDS.into_iter().find(|f| l.field(*f).contains(at));
        if self.focus.is_some() {
            return;
        }

        let form = &mut self.form;
        if l.apply.contains(at) {
            self.apply(cx);
        } else if l.start_shell.contains(at) {
            form.start_shell = !form.start_shell;
        } else if l.start_demo.contains(at) {
            form.start_demo = !form.start_demo;
        } else if l.top_toggle.contains(at) {
            form.top_gradient = !form.top_gradient;
        } else if l.mini_toggle.contains(at) {
            form.mini_gradient = !form.mini_gradient;
        } else if let Some(i) = segment_hit(&l.mode, at) {
            form.mode = MODES[i];
        } else if let Some(i) = segment_hit(&l.test_layout, at) {
            form.test_layout = LAYOUTS[i];
        } else if let Some(i) = segment_hit(&l.style, at) {
            form.style = Style::all()[i];
        } else if let Some(i) = segment_hit(&l.presets, at) {
            form.apply_preset(LayoutPreset::ALL[i]);
        } else if l.placement.contains(at) {
            self.placement_open = true;
        } else if l.alpha.contains(at) {
            self.drag = Some(Drag::Alpha);
            self.slide(l, at);
        } else if l.radius.contains(at) {
            self.drag = Some(Drag::Radius);
            self.slide(l, at);
        }
    }

    fn slide(&mut self, l: &SettingsLayout, at: Point) {
        match self.drag {
            Some(Drag::Alpha) => self.form.alpha = slider_value(l.alpha, at),
            Some(Drag::Radius) => {
                self.form.radius = slider_value(l.radius, at) * MAX_RADIUS / 255;
            }
            None => {}
        }
    }

    fn on_mouse(&mut self, cx: &mut AppContext, m: Mouse) {
        let pressed = m.left() && !self.held;
        self.held = m.left();
        if !m.left() {
            self.drag = None;
            return;
        }
        let Some(l) = self.layout.take() else {
            return;
        };
        if pressed {
            self.press(cx, &l, m.xy);
        } else {
            self.slide(&l, m.xy);
        }
        self.layout = Some(l);
        cx.mark_dirty();
    }

    fn on_key(&mut self, cx: &mut AppContext, key: char) {
        match (self.focus, key) {
            (Some(_), '\u{1b}') => self.focus = None,
            (Some(f), k) => {
                if !edit_line(self.form.field_mut(f), k, f.max_len()) {
                    return;
                }
            }
            (None, 'q') => cx.quit(),
            (None, _) => return,
        }
        cx.mark_dirty();
    }
}

fn section_title(p: &mut Painter<'_>, r: Rect, title: &str) {
    p.card2(r);
    p.outline(r);
    p.shadow_string(Point::new(r.min.x + 12, r.min.y + 12), title);
}

impl App for Settings {
    fn init(&mut self, cx: &mut AppContext, _timers: &mut Timers<Self>, _now: std::time::Instant) {
        self.form = SettingsForm::from_config(&cx.config, cx.theme.theme());
    }

    fn event(&mut self, cx: &mut AppContext, event: InputEvent) {
        match event {
            InputEvent::Mouse(m) => self.on_mouse(cx, m),
            InputEvent::Key(k) => self.on_key(cx, k),
            InputEvent::Resize { .. } => {}
        }
    }

    fn draw(&mut self, cx: &AppContext, canvas: &mut dyn Canvas) {
        let bounds = canvas.bounds();
        let l = SettingsLayout::new(bounds);
        let form = &self.form;
        let mut p = Painter::new(canvas, &cx.theme);

        p.fill(bounds, ColorRole::Background);
        p.card(l.header);
        p.outline(l.header);
        let at = p.left_middle(l.header, l.header.min.x + 14);
        p.shadow_string(at, "9DE Control");
        button(&mut p, l.apply, "Apply", ButtonKind::Primary, ButtonState::Normal);

        for (r, title) in l.sections.iter().zip(["Session", "Panel layout", "Appearance"]) {
            section_title(&mut p, *r, title);
        }
        for (r, text) in &l.labels {
            let at = p.left_middle(*r, r.min.x);
            p.text(at, text, ColorRole::Muted);
        }

        toggle(&mut p, l.start_shell, Some("Start shell"), form.start_shell);
        toggle(&mut p, l.start_demo, Some("Start demo"), form.start_demo);
        let modes = MODES.map(SessionMode::id);
        segment(&mut p, &l.mode, &modes, MODES.iter().position(|m| *m == form.mode));
        let layouts = LAYOUTS.map(TestLayout::id);
        let current = LAYOUTS.iter().position(|t| *t == form.test_layout);
        segment(&mut p, &l.test_layout, &layouts, current);

        for (r, preset) in l.presets.iter().zip(LayoutPreset::ALL) {
            button(&mut p, *r, preset.label(), ButtonKind::Secondary, ButtonState::Normal);
        }

        let styles: Vec<&str> = Style::all().iter().map(|s| s.id()).collect();
        let current = Style::all().iter().position(|s| *s == form.style);
        segment(&mut p, &l.style, &styles, current);
        slider(&mut p, l.alpha, form.alpha);
        slider(&mut p, l.radius, form.radius * 255 / MAX_RADIUS);
        toggle(&mut p, l.top_toggle, Some("Topbar gradient"), form.top_gradient);
        toggle(&mut p, l.mini_toggle, Some("Mini gradient"), form.mini_gradient);

        for f in FIELDS {
            let hint = match f {
                Field::PanelLeft | Field::PanelRight => "modules",
                _ => "#rrggbb",
            };
            textfield(&mut p, l.field(f), form.field(f), self.focus == Some(f), Some(hint));
        }

        p.fill(l.footer, ColorRole::Surface);
        let at = p.left_middle(l.footer, l.footer.min.x + 10);
        p.text(at, cx.status().unwrap_or(&self.status), ColorRole::Muted);

        dropdown_button(&mut p, l.placement, form.placement.id(), self.placement_open);
        if self.placement_open {
            for (r, pl) in l.placement_rows().iter().zip(Placement::all()) {
                dropdown_item(&mut p, *r, pl.id(), *pl == form.placement);
            }
        }

        self.layout = Some(l);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_sections() {
        let l = SettingsLayout::new(Rect::new(0, 0, 900, 720));
        assert_eq!(l.header, Rect::new(16, 16, 884, 60));
        assert_eq!(l.apply, Rect::new(752, 24, 876, 52));
        assert_eq!(l.sections[0], Rect::new(16, 74, 884, 234));
        assert_eq!(l.sections[1], Rect::new(16, 248, 884, 418));
        // The appearance section takes what the fixed sections leave.
        assert_eq!(l.sections[2], Rect::new(16, 432, 884, 666));
        assert_eq!(l.footer, Rect::new(16, 680, 884, 704));
        assert_eq!(l.placement, Rect::new(28, 284, 188, 312));
        assert_eq!(l.panel_left, Rect::new(148, 320, 872, 348));
        assert_eq!(l.mode.len(), 3);
        assert_eq!(l.presets.len(), 3);
        assert_eq!(l.top0.dx(), l.top1.dx());
    }

    #[test]
    fn test_presets() {
        let mut form = SettingsForm::from_config(&ConfigSnapshot::default(), &Theme::default());
        form.apply_preset(LayoutPreset::Minimal);
        assert_eq!((form.panel_left.as_str(), form.panel_right.as_str()), ("menu", "clock"));
        assert!(!form.start_demo);

        form.apply_preset(LayoutPreset::Dev);
        assert_eq!(form.panel_left, "menu ws");
        assert_eq!(form.panel_right, "preset de net clock notif");
        assert!(form.start_demo);
        assert_eq!(form.mode, SessionMode::Test);
    }

    #[test]
    fn test_write_skips_gradient_ends_when_off() {
        let mut form = SettingsForm::from_config(&ConfigSnapshot::default(), &Theme::default());
        form.top_gradient = true;
        form.top1 = "  ".to_string();
        form.radius = 99;
        let mut w = ConfigWriter::from_text("/nonexistent", ui9_config::HEADER);
        form.write_to(&mut w);

        let text = w.text();
        assert!(text.contains("ui_topgrad=1\n"));
        assert!(text.contains("ui_topgrad0=#0c0c0e\n"));
        assert!(!text.contains("ui_topgrad1="));
        assert!(!text.contains("ui_minigrad0="));
        assert!(text.contains("ui_radius=24\n"));
        assert!(text.contains("panel_left=\"menu ws\"\n"));
    }
}
