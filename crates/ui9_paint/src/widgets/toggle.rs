use crate::prim::Painter;
use ui9_core::Rect;
use ui9_theme::ColorRole;

const TRACK_W: i32 = 46;
const TRACK_H: i32 = 22;

/// Switch at the right edge of `r`, optional label on the left. No card
/// background is drawn.
pub fn toggle(p: &mut Painter<'_>, r: Rect, label: Option<&str>, on: bool) {
    if let Some(label) = label {
        let at = p.left_middle(r, r.min.x);
        p.text(at, label, ColorRole::Text);
    }

    let track = Rect::new(
        r.max.x - TRACK_W,
        r.min.y + (r.dy() - TRACK_H) / 2,
        r.max.x,
        r.min.y + (r.dy() + TRACK_H) / 2,
    );
    let rad = p.radius();
    let fill = p.color(if on { ColorRole::Accent } else { ColorRole::Surface2 });
    p.round_rect(track, rad, fill);
    p.outline(track);

    let mut knob = track.inset(3);
    if on {
        knob.min.x = knob.max.x - (TRACK_H - 6);
    } else {
        knob.max.x = knob.min.x + (TRACK_H - 6);
    }
    let surface = p.color(ColorRole::Surface);
    p.round_rect(knob, rad, surface);
    p.outline(knob);
}
