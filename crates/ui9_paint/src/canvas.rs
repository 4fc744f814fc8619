//! Canvas capability

use ui9_core::{Point, Rect, Rgba};

/// Primitive drawing operations on one target surface.
///
/// Colors carry their own alpha; implementations composite with "over".
pub trait Canvas {
    /// Full surface rectangle.
    fn bounds(&self) -> Rect;

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn fill_ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Rgba);

    /// Outline drawn inside `rect`, `width` pixels thick.
    fn border(&mut self, rect: Rect, width: i32, color: Rgba);

    /// Square-capped segment.
    fn line(&mut self, from: Point, to: Point, width: i32, color: Rgba);

    /// Glyph string with its top-left corner at `at`.
    fn string(&mut self, at: Point, text: &str, color: Rgba);

    fn string_width(&self, text: &str) -> i32;

    fn font_height(&self) -> i32;

    /// Restrict drawing to `rect` until the matching [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    /// Make everything drawn so far visible.
    fn flush(&mut self) {}
}
