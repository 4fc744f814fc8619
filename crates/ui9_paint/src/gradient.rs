//! Vertical gradient cache
//!
//! Holds one interpolated color per scanline, keyed by
//! `(height, color0, color1)`.

use crate::canvas::Canvas;
use ui9_core::{Rect, Rgb};

/// Longest ramp ever generated. Taller regions draw only this many rows.
pub const MAX_ROWS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientKey {
    pub height: usize,
    pub c0: Rgb,
    pub c1: Rgb,
}

#[derive(Debug, Default)]
pub struct GradientCache {
    key: Option<GradientKey>,
    rows: Vec<Rgb>,
    regenerations: u64,
}

impl GradientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the cached ramp match `(height, c0, c1)`.
    ///
    /// Heights above [`MAX_ROWS`] are capped before the key comparison, so
    /// any height past the cap hits the same entry. A non-positive height
    /// leaves the cache as it is. On a hit the stored rows are returned
    /// untouched; on a miss every row is recomputed and the key replaced.
    pub fn ensure(&mut self, height: i32, c0: Rgb, c1: Rgb) -> &[Rgb] {
        if height <= 0 {
            return &self.rows;
        }
        let key = GradientKey {
            height: (height as usize).min(MAX_ROWS),
            c0,
            c1,
        };
        if self.key == Some(key) {
            return &self.rows;
        }

        let n = key.height;
        self.rows.clear();
        self.rows.reserve_exact(n);
        for i in 0..n {
            let t = if n <= 1 { 0 } else { (i * 255 / (n - 1)) as i32 };
            self.rows.push(Rgb::lerp(c0, c1, t, 255));
        }
        self.key = Some(key);
        self.regenerations += 1;
        tracing::trace!(height = n, %c0, %c1, "gradient regenerated");
        &self.rows
    }

    pub fn rows(&self) -> &[Rgb] {
        &self.rows
    }

    pub fn key(&self) -> Option<GradientKey> {
        self.key
    }

    /// How many times the ramp has been rebuilt.
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.rows.clear();
    }

    /// One flat strip per cached row from the top of `rect`, stopping at
    /// whichever runs out first: rows or rectangle height.
    pub fn draw(&self, canvas: &mut dyn Canvas, rect: Rect) {
        let h = rect.dy().max(0) as usize;
        for (y, color) in self.rows.iter().take(h).enumerate() {
            canvas.fill_rect(rect.row(y as i32), color.opaque());
        }
    }
}
