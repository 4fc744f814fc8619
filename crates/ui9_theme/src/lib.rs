//! 9DE Theme System
//!
//! Appearance is preset-based rather than free-form: one of a small closed
//! set of styles supplies every base color and geometry constant, and a
//! handful of overrides (alpha, accent, topbar colors, border and shadow
//! alpha, radius) adjust it.
//!
//! # Architecture
//!
//! - [`Theme`]: plain value holding the style, geometry and base colors
//! - [`DerivedTokens`]: the ready-to-draw color for every [`ColorRole`],
//!   computed from a theme in one pass
//! - [`ThemeEngine`]: explicit context owning the current theme and its
//!   tokens; every color-affecting setter rebuilds all tokens at once
//!
//! # Quick Start
//!
//! ```rust
//! use ui9_theme::{ColorRole, Style, ThemeEngine};
//!
//! let mut engine = ThemeEngine::new(Style::Glass);
//! engine.set_alpha(220);
//!
//! let surface = engine.color(ColorRole::Surface);
//! assert_eq!(surface.a, 220);
//! ```

pub mod presets;
pub mod state;
pub mod theme;
pub mod tokens;

pub use presets::{build_style, Style};
pub use state::ThemeEngine;
pub use theme::{BaseColors, Theme};
pub use tokens::{ColorRole, DerivedTokens};
