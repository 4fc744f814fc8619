//! Widget leaves
//!
//! Stateless draw routines: the caller owns the value (checked, level,
//! selection, text) and passes it in on every redraw.

mod button;
mod dropdown;
mod list;
mod progress;
mod segment;
mod slider;
mod textfield;
mod toggle;

pub use button::{button, ButtonKind, ButtonState};
pub use dropdown::{dropdown_button, dropdown_item, dropdown_rows};
pub use list::list_item;
pub use progress::progress;
pub use segment::{segment, segment_hit};
pub use slider::{slider, slider_value};
pub use textfield::{edit_line, textfield};
pub use toggle::toggle;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prim::Painter;
    use crate::record::{PaintCommand, RecordingCanvas};
    use ui9_core::{Point, Rect};
    use ui9_theme::{ColorRole, Style, ThemeEngine};

    fn fills(canvas: &RecordingCanvas) -> Vec<ui9_core::Rgba> {
        canvas.filled_rects().map(|(_, c)| c).collect()
    }

    #[test]
    fn test_primary_button_uses_accent() {
        let theme = ThemeEngine::new(Style::Dark);
        let mut canvas = RecordingCanvas::new(200, 100);
        let r = Rect::new(0, 0, 80, 24);

        button(&mut Painter::new(&mut canvas, &theme), r, "Apply", ButtonKind::Primary, ButtonState::Normal);
        assert!(fills(&canvas).iter().all(|c| *c == theme.color(ColorRole::Accent)));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["Apply"]);

        canvas.clear();
        button(&mut Painter::new(&mut canvas, &theme), r, "Apply", ButtonKind::Primary, ButtonState::Pressed);
        assert!(fills(&canvas).iter().all(|c| *c == theme.color(ColorRole::Surface2)));
    }

    #[test]
    fn test_toggle_knob_side() {
        let theme = ThemeEngine::new(Style::Terminal);
        let r = Rect::new(0, 0, 200, 30);

        let knob = |on: bool| {
            let mut canvas = RecordingCanvas::new(300, 100);
            toggle(&mut Painter::new(&mut canvas, &theme), r, None, on);
            canvas
                .commands()
                .iter()
                .filter_map(|c| match c {
                    PaintCommand::Border { rect, .. } => Some(*rect),
                    _ => None,
                })
                .last()
                .unwrap()
        };

        let off = knob(false);
        let on = knob(true);
        assert!(on.min.x > off.min.x);
        assert_eq!(on.max.x, r.max.x - 3);
        assert_eq!(off.min.x, r.max.x - 46 + 3);
    }

    #[test]
    fn test_slider_value_mapping() {
        let r = Rect::new(100, 0, 355, 20);
        assert_eq!(slider_value(r, Point::new(100, 5)), 0);
        assert_eq!(slider_value(r, Point::new(355, 5)), 255);
        assert_eq!(slider_value(r, Point::new(50, 5)), 0);
        assert_eq!(slider_value(r, Point::new(900, 5)), 255);
        assert_eq!(slider_value(Rect::new(5, 0, 5, 10), Point::new(5, 5)), 0);
    }

    #[test]
    fn test_slider_fill_reaches_value() {
        let theme = ThemeEngine::default();
        let mut canvas = RecordingCanvas::new(400, 100);
        let r = Rect::new(0, 0, 255, 20);
        slider(&mut Painter::new(&mut canvas, &theme), r, 100);

        let accent = theme.color(ColorRole::Accent);
        let filled = canvas.commands().iter().find_map(|c| match c {
            PaintCommand::Line { to, color, .. } if *color == accent => Some(*to),
            _ => None,
        });
        assert_eq!(filled, Some(Point::new(100, 10)));
    }

    #[test]
    fn test_progress_clamps_and_skips_empty_fill() {
        let theme = ThemeEngine::default();
        let accent = theme.color(ColorRole::Accent);
        let r = Rect::new(0, 0, 104, 10);

        let mut canvas = RecordingCanvas::new(200, 50);
        progress(&mut Painter::new(&mut canvas, &theme), r, -20);
        assert!(!fills(&canvas).contains(&accent));

        canvas.clear();
        progress(&mut Painter::new(&mut canvas, &theme), r, 250);
        let widest = canvas
            .filled_rects()
            .filter(|(_, c)| *c == accent)
            .map(|(rect, _)| rect.max.x)
            .max();
        assert_eq!(widest, Some(102));
    }

    #[test]
    fn test_segment_hit_and_selection() {
        let theme = ThemeEngine::default();
        let rects = [
            Rect::new(0, 0, 50, 20),
            Rect::new(50, 0, 100, 20),
            Rect::new(100, 0, 150, 20),
        ];
        assert_eq!(segment_hit(&rects, Point::new(60, 10)), Some(1));
        assert_eq!(segment_hit(&rects, Point::new(150, 10)), None);

        let mut canvas = RecordingCanvas::new(200, 50);
        segment(&mut Painter::new(&mut canvas, &theme), &rects, &["a", "b", "c"], Some(2));
        assert!(fills(&canvas).contains(&theme.color(ColorRole::Accent2)));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_list_item_label_is_indented() {
        let theme = ThemeEngine::default();
        let mut canvas = RecordingCanvas::new(200, 50);
        list_item(&mut Painter::new(&mut canvas, &theme), Rect::new(20, 0, 180, 25), "7 rio", true);

        let at = canvas.commands().iter().find_map(|c| match c {
            PaintCommand::Text { at, .. } => Some(*at),
            _ => None,
        });
        assert_eq!(at.map(|p| p.x), Some(30));
    }

    #[test]
    fn test_textfield_placeholder_and_caret() {
        let theme = ThemeEngine::default();
        let r = Rect::new(0, 0, 200, 30);

        let mut canvas = RecordingCanvas::new(300, 100);
        textfield(&mut Painter::new(&mut canvas, &theme), r, "", false, Some("#rrggbb"));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["#rrggbb"]);
        assert!(!canvas.commands().iter().any(|c| matches!(c, PaintCommand::Line { .. })));

        canvas.clear();
        textfield(&mut Painter::new(&mut canvas, &theme), r, "menu", true, Some("#rrggbb"));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["menu"]);
        let accent = theme.color(ColorRole::Accent);
        assert!(canvas.commands().iter().any(|c| matches!(
            c,
            PaintCommand::Border { width: 2, color, .. } if *color == accent
        )));
        // Caret sits 2px after four 7px glyphs, starting at the 8px inset.
        let caret = canvas.commands().iter().find_map(|c| match c {
            PaintCommand::Line { from, .. } => Some(from.x),
            _ => None,
        });
        assert_eq!(caret, Some(8 + 28 + 2));
    }

    #[test]
    fn test_edit_line() {
        let mut buf = String::from("ws");
        assert!(edit_line(&mut buf, ' ', 4));
        assert!(edit_line(&mut buf, 'x', 4));
        assert!(!edit_line(&mut buf, 'y', 4));
        assert_eq!(buf, "ws x");
        assert!(!edit_line(&mut buf, '\n', 4));
        assert!(edit_line(&mut buf, '\u{8}', 4));
        assert!(edit_line(&mut buf, '\u{7f}', 4));
        assert_eq!(buf, "ws");

        let mut empty = String::new();
        assert!(!edit_line(&mut empty, '\u{8}', 4));
    }

    #[test]
    fn test_dropdown_rows_and_selection() {
        let theme = ThemeEngine::default();
        let button = Rect::new(10, 10, 110, 30);
        let rows = dropdown_rows(button, 3);
        assert_eq!(rows, [
            Rect::new(10, 30, 110, 50),
            Rect::new(10, 50, 110, 70),
            Rect::new(10, 70, 110, 90),
        ]);

        let mut canvas = RecordingCanvas::new(200, 100);
        let mut p = Painter::new(&mut canvas, &theme);
        dropdown_button(&mut p, button, "top", true);
        dropdown_item(&mut p, rows[1], "bottom", true);
        assert!(fills(&canvas).contains(&theme.color(ColorRole::Accent2)));
        assert_eq!(canvas.texts().collect::<Vec<_>>(), ["top", "bottom"]);
    }
}
