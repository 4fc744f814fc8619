use crate::prim::Painter;
use ui9_core::Rect;
use ui9_theme::ColorRole;

pub fn list_item(p: &mut Painter<'_>, r: Rect, label: &str, selected: bool) {
    let (rad, fill) = (
        p.radius(),
        p.color(if selected { ColorRole::Accent2 } else { ColorRole::Surface }),
    );
    p.round_rect(r, rad, fill);
    p.outline(r);

    let at = p.left_middle(r, r.min.x + 10);
    p.text(at, label, ColorRole::Text);
}
