//! 9DE Paint
//!
//! Drawing is immediate-mode: every redraw repaints the whole surface
//! through a [`Canvas`], the primitive capability a backend provides.
//!
//! - [`Canvas`]: filled rectangles, ellipses, borders, lines, glyph strings
//! - [`RecordingCanvas`]: records [`PaintCommand`]s (headless runs, tests)
//! - [`GradientCache`]: per-scanline vertical ramp, rebuilt only when its
//!   key changes
//! - [`Painter`]: a canvas plus the theme, with the rounded-rect, card and
//!   shadowed-text primitives every widget is built from
//! - [`widgets`]: buttons, toggles, sliders, progress bars, segmented
//!   controls, list items, text fields and dropdowns
//!
//! # Example
//!
//! ```rust
//! use ui9_core::Rect;
//! use ui9_paint::{Painter, RecordingCanvas};
//! use ui9_theme::ThemeEngine;
//!
//! let theme = ThemeEngine::default();
//! let mut canvas = RecordingCanvas::new(320, 200);
//! let mut p = Painter::new(&mut canvas, &theme);
//! p.card(Rect::new(10, 10, 110, 60));
//! assert!(!canvas.commands().is_empty());
//! ```

pub mod canvas;
pub mod gradient;
pub mod prim;
pub mod record;
pub mod widgets;

pub use canvas::Canvas;
pub use gradient::{GradientCache, GradientKey, MAX_ROWS};
pub use prim::Painter;
pub use record::{PaintCommand, RecordingCanvas};
