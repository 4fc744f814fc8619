use crate::prim::Painter;
use ui9_core::{Point, Rect};
use ui9_theme::ColorRole;

/// Closed dropdown: the current label and a caret at the right edge.
pub fn dropdown_button(p: &mut Painter<'_>, r: Rect, label: &str, open: bool) {
    let (rad, fill) = (p.radius(), p.color(ColorRole::Surface));
    p.round_rect(r, rad, fill);
    if open {
        let accent = p.color(ColorRole::Accent);
        p.canvas.border(r, 1, accent);
    } else {
        p.outline(r);
    }

    let at = p.left_middle(r, r.min.x + 10);
    p.text(at, label, ColorRole::Text);

    let c = Point::new(r.max.x - 14, r.min.y + r.dy() / 2);
    let muted = p.color(ColorRole::Muted);
    p.canvas
        .line(Point::new(c.x - 5, c.y - 2), Point::new(c.x, c.y + 3), 1, muted);
    p.canvas
        .line(Point::new(c.x, c.y + 3), Point::new(c.x + 5, c.y - 2), 1, muted);
}

/// One option row of an open dropdown.
pub fn dropdown_item(p: &mut Painter<'_>, r: Rect, label: &str, selected: bool) {
    p.fill(r, if selected { ColorRole::Accent2 } else { ColorRole::Surface });
    let at = p.left_middle(r, r.min.x + 10);
    p.text(at, label, ColorRole::Text);
}

/// Option rows stacked under `button`, each as tall as the button.
pub fn dropdown_rows(button: Rect, count: usize) -> Vec<Rect> {
    let h = button.dy();
    (0..count as i32)
        .map(|i| {
            let y = button.max.y + i * h;
            Rect::new(button.min.x, y, button.max.x, y + h)
        })
        .collect()
}
