//! 9DE Toolkit Core
//!
//! Foundational value types shared by every 9DE surface:
//!
//! - **Colors**: 24-bit RGB base colors, RGBA drawable colors, hex parsing
//! - **Geometry**: integer pixel points and half-open rectangles
//! - **Layout**: a one-axis flex allocator (fixed, intrinsic and grow items)
//! - **Events**: the input events a backend delivers to the redraw loop
//!
//! # Example
//!
//! ```rust
//! use ui9_core::{parse_hex_rgb, Rect, Rgb};
//!
//! let accent = parse_hex_rgb("#3c82ff").unwrap();
//! assert_eq!(accent, Rgb::new(60, 130, 255));
//!
//! let bar = Rect::new(0, 0, 1280, 34);
//! assert_eq!(bar.dy(), 34);
//! ```

pub mod color;
pub mod events;
pub mod flex;
pub mod geometry;

pub use color::{clamp_i32, parse_hex_rgb, Rgb, Rgba};
pub use events::{InputEvent, Mouse};
pub use flex::{Direction, Flex, Sizing};
pub use geometry::{Point, Rect};
