//! Recording canvas
//!
//! Captures draw calls instead of rasterizing them. Text is measured with a
//! fixed-width font so layout stays deterministic.

use crate::canvas::Canvas;
use ui9_core::{Point, Rect, Rgba};

/// A recorded draw call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    FillEllipse {
        center: Point,
        rx: i32,
        ry: i32,
        color: Rgba,
    },
    Border {
        rect: Rect,
        width: i32,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: i32,
        color: Rgba,
    },
    Text {
        at: Point,
        text: String,
        color: Rgba,
    },
    PushClip(Rect),
    PopClip,
    Flush,
}

#[derive(Debug)]
pub struct RecordingCanvas {
    bounds: Rect,
    glyph_width: i32,
    glyph_height: i32,
    commands: Vec<PaintCommand>,
    clip_depth: usize,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Rect::new(0, 0, width, height),
            glyph_width: 7,
            glyph_height: 13,
            commands: Vec::new(),
            clip_depth: 0,
        }
    }

    pub fn with_font_metrics(mut self, glyph_width: i32, glyph_height: i32) -> Self {
        self.glyph_width = glyph_width;
        self.glyph_height = glyph_height;
        self
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.bounds = Rect::new(0, 0, width, height);
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Strings drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rectangles filled so far, in order.
    pub fn filled_rects(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }

    pub fn flush_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::Flush))
            .count()
    }

    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}

impl Canvas for RecordingCanvas {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn fill_ellipse(&mut self, center: Point, rx: i32, ry: i32, color: Rgba) {
        self.commands.push(PaintCommand::FillEllipse {
            center,
            rx,
            ry,
            color,
        });
    }

    fn border(&mut self, rect: Rect, width: i32, color: Rgba) {
        self.commands.push(PaintCommand::Border { rect, width, color });
    }

    fn line(&mut self, from: Point, to: Point, width: i32, color: Rgba) {
        self.commands.push(PaintCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn string(&mut self, at: Point, text: &str, color: Rgba) {
        self.commands.push(PaintCommand::Text {
            at,
            text: text.to_string(),
            color,
        });
    }

    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.glyph_width
    }

    fn font_height(&self) -> i32 {
        self.glyph_height
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.commands.push(PaintCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.commands.push(PaintCommand::PopClip);
    }

    fn flush(&mut self) {
        self.commands.push(PaintCommand::Flush);
    }
}
