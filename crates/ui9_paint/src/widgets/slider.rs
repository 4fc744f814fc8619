use crate::prim::Painter;
use ui9_core::{clamp_i32, Point, Rect};
use ui9_theme::ColorRole;

/// Horizontal 0..=255 slider: track, filled part, five ticks and a knob.
pub fn slider(p: &mut Painter<'_>, r: Rect, value: i32) {
    let v = clamp_i32(value, 0, 255);
    let y = r.min.y + r.dy() / 2;
    let (x1, x2) = (r.min.x, r.max.x);
    let w = x2 - x1;
    let fx = x1 + w * v / 255;

    let border = p.color(ColorRole::Border);
    let accent = p.color(ColorRole::Accent);
    p.canvas.line(Point::new(x1, y), Point::new(x2, y), 3, border);
    p.canvas.line(Point::new(x1, y), Point::new(fx, y), 3, accent);

    for t in 0..=4 {
        let tx = x1 + w * t / 4;
        p.canvas.line(Point::new(tx, y - 7), Point::new(tx, y - 4), 1, border);
    }

    let (kw, kh) = (10, 18);
    let knob = Rect::new(fx - kw / 2, y - kh / 2, fx + kw / 2, y + kh / 2);
    let (rad, surface) = (p.radius(), p.color(ColorRole::Surface));
    p.round_rect(knob, rad, surface);
    p.outline(knob);
}

/// Value under pointer `at` for a slider occupying `r`.
pub fn slider_value(r: Rect, at: Point) -> i32 {
    let w = r.dx();
    if w <= 0 {
        return 0;
    }
    clamp_i32((at.x - r.min.x) * 255 / w, 0, 255)
}
