use crate::prim::Painter;
use ui9_core::{Point, Rect};
use ui9_theme::ColorRole;

/// Segmented control; `selected` is an index into `rects`.
///
/// Extra labels or rects beyond the shorter of the two are ignored.
pub fn segment(p: &mut Painter<'_>, rects: &[Rect], labels: &[&str], selected: Option<usize>) {
    let rad = p.radius();
    for (i, (r, label)) in rects.iter().zip(labels).enumerate() {
        let on = selected == Some(i);
        let fill = p.color(if on { ColorRole::Accent2 } else { ColorRole::Surface2 });
        p.round_rect(*r, rad, fill);
        p.outline(*r);

        let at = p.centered(*r, label);
        p.text(at, label, if on { ColorRole::Text } else { ColorRole::Muted });
    }
}

pub fn segment_hit(rects: &[Rect], at: Point) -> Option<usize> {
    rects.iter().position(|r| r.contains(at))
}
