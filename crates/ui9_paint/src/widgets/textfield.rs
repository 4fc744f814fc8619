use crate::prim::Painter;
use ui9_core::{Point, Rect};
use ui9_theme::ColorRole;

/// Single-line text box; the placeholder shows while `text` is empty.
///
/// A focused field gets a 2px accent border and a caret after the text.
pub fn textfield(p: &mut Painter<'_>, r: Rect, text: &str, focused: bool, placeholder: Option<&str>) {
    let (rad, fill) = (p.radius(), p.color(ColorRole::Surface));
    p.round_rect(r, rad, fill);
    let (width, edge) = if focused {
        (2, ColorRole::Accent)
    } else {
        (1, ColorRole::Border)
    };
    let edge = p.color(edge);
    p.canvas.border(r, width, edge);

    let inner = r.inset(8);
    let fh = p.font_height();
    let at = Point::new(inner.min.x, inner.min.y + (inner.dy() - fh) / 2);
    match placeholder {
        Some(hint) if text.is_empty() => p.text(at, hint, ColorRole::Muted),
        _ => p.text(at, text, ColorRole::Text),
    }

    if focused {
        let x = at.x + p.string_width(text) + 2;
        let color = p.color(ColorRole::Text);
        p.canvas
            .line(Point::new(x, at.y + 2), Point::new(x, at.y + fh - 2), 1, color);
    }
}

/// Apply one typed key to a line buffer holding at most `max` chars.
///
/// Backspace and DEL drop the last char, newlines are ignored, and other
/// control chars are dropped. Returns whether `buf` changed.
pub fn edit_line(buf: &mut String, key: char, max: usize) -> bool {
    match key {
        '\u{8}' | '\u{7f}' => buf.pop().is_some(),
        c if c.is_control() => false,
        c if buf.chars().count() < max => {
            buf.push(c);
            true
        }
        _ => false,
    }
}
