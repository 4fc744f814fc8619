//! Drawing primitives shared by every widget

use crate::canvas::Canvas;
use ui9_core::{Point, Rect, Rgba};
use ui9_theme::{ColorRole, ThemeEngine};

/// A canvas paired with the theme it is painted with.
pub struct Painter<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub theme: &'a ThemeEngine,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, theme: &'a ThemeEngine) -> Self {
        Self { canvas, theme }
    }

    pub fn color(&self, role: ColorRole) -> Rgba {
        self.theme.color(role)
    }

    /// Theme corner radius.
    pub fn radius(&self) -> i32 {
        self.theme.theme().radius()
    }

    pub fn fill(&mut self, rect: Rect, role: ColorRole) {
        let color = self.color(role);
        self.canvas.fill_rect(rect, color);
    }

    /// One-pixel border in the theme border color.
    pub fn outline(&mut self, rect: Rect) {
        let color = self.color(ColorRole::Border);
        self.canvas.border(rect, 1, color);
    }

    /// Rectangle with quarter-ellipse corners of radius `rad`. A radius of
    /// zero or less draws a plain rectangle.
    pub fn round_rect(&mut self, r: Rect, rad: i32, fill: Rgba) {
        if rad <= 0 {
            self.canvas.fill_rect(r, fill);
            return;
        }

        self.canvas.push_clip(r);
        self.canvas
            .fill_rect(Rect::new(r.min.x + rad, r.min.y, r.max.x - rad, r.max.y), fill);
        self.canvas
            .fill_rect(Rect::new(r.min.x, r.min.y + rad, r.min.x + rad, r.max.y - rad), fill);
        self.canvas
            .fill_rect(Rect::new(r.max.x - rad, r.min.y + rad, r.max.x, r.max.y - rad), fill);

        let corners = [
            Point::new(r.min.x + rad, r.min.y + rad),
            Point::new(r.max.x - rad - 1, r.min.y + rad),
            Point::new(r.min.x + rad, r.max.y - rad - 1),
            Point::new(r.max.x - rad - 1, r.max.y - rad - 1),
        ];
        for c in corners {
            self.canvas.fill_ellipse(c, rad, rad, fill);
        }
        self.canvas.pop_clip();
    }

    /// Primary surface fill plus border.
    pub fn card(&mut self, r: Rect) {
        let (rad, fill) = (self.radius(), self.color(ColorRole::Surface));
        self.round_rect(r, rad, fill);
        self.outline(r);
    }

    /// Secondary surface fill plus border.
    pub fn card2(&mut self, r: Rect) {
        let (rad, fill) = (self.radius(), self.color(ColorRole::Surface2));
        self.round_rect(r, rad, fill);
        self.outline(r);
    }

    pub fn text(&mut self, at: Point, s: &str, role: ColorRole) {
        let color = self.color(role);
        self.canvas.string(at, s, color);
    }

    /// Text with the shadow color one pixel below it.
    pub fn shadow_string(&mut self, at: Point, s: &str) {
        let shadow = self.color(ColorRole::Shadow);
        let text = self.color(ColorRole::Text);
        self.canvas.string(at + Point::new(0, 1), s, shadow);
        self.canvas.string(at, s, text);
    }

    pub fn shadow_string_center(&mut self, r: Rect, s: &str) {
        let at = self.centered(r, s);
        self.shadow_string(at, s);
    }

    /// Origin that centers `s` in `r`.
    pub fn centered(&self, r: Rect, s: &str) -> Point {
        let w = self.canvas.string_width(s);
        let h = self.canvas.font_height();
        Point::new(r.min.x + (r.dx() - w) / 2, r.min.y + (r.dy() - h) / 2)
    }

    /// Text origin at column `x`, vertically centered in `r`.
    pub fn left_middle(&self, r: Rect, x: i32) -> Point {
        Point::new(x, r.min.y + (r.dy() - self.canvas.font_height()) / 2)
    }

    pub fn string_width(&self, s: &str) -> i32 {
        self.canvas.string_width(s)
    }

    pub fn font_height(&self) -> i32 {
        self.canvas.font_height()
    }
}
