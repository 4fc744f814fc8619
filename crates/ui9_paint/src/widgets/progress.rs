use crate::prim::Painter;
use ui9_core::{clamp_i32, Rect};
use ui9_theme::ColorRole;

/// Progress bar for a percentage, clamped to 0..=100.
pub fn progress(p: &mut Painter<'_>, r: Rect, pct: i32) {
    let pct = clamp_i32(pct, 0, 100);
    let rad = p.radius();

    let track = p.color(ColorRole::Surface2);
    p.round_rect(r, rad, track);
    p.outline(r);

    let mut fill = r.inset(2);
    fill.max.x = fill.min.x + fill.dx() * pct / 100;
    if fill.dx() > 0 {
        let accent = p.color(ColorRole::Accent);
        p.round_rect(fill, rad, accent);
    }
}
