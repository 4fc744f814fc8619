//! One-axis flex allocator
//!
//! Items are laid out along a row or a column. Fixed and intrinsic items
//! take their pixel size; grow items take their minimum plus a share of the
//! leftover space in proportion to their weight. The cross axis is the
//! bounds minus `pad` on both sides.
//!
//! ```rust
//! use ui9_core::{Flex, Rect};
//!
//! let mut fx = Flex::row(Rect::new(0, 0, 1000, 40)).gap(8).pad(12);
//! let left = fx.fixed(160);
//! let mid = fx.grow(1, 220);
//! let right = fx.fixed(120);
//! fx.layout();
//!
//! assert_eq!(fx.rect(left), Rect::new(12, 12, 172, 28));
//! assert_eq!(fx.rect(mid).dx(), 1000 - 24 - 16 - 160 - 120);
//! assert_eq!(fx.rect(right).max.x, 988);
//! ```

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
    Fixed(i32),
    /// Measured content size; allocated like `Fixed`.
    Intrinsic(i32),
    Grow { weight: i32, min: i32 },
}

#[derive(Clone, Copy, Debug)]
struct Item {
    sizing: Sizing,
    rect: Rect,
}

#[derive(Clone, Debug)]
pub struct Flex {
    bounds: Rect,
    direction: Direction,
    gap: i32,
    pad: i32,
    items: Vec<Item>,
}

impl Flex {
    pub fn new(bounds: Rect, direction: Direction) -> Self {
        Self {
            bounds,
            direction,
            gap: 0,
            pad: 0,
            items: Vec::new(),
        }
    }

    pub fn row(bounds: Rect) -> Self {
        Self::new(bounds, Direction::Row)
    }

    pub fn column(bounds: Rect) -> Self {
        Self::new(bounds, Direction::Column)
    }

    pub fn gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    pub fn pad(mut self, pad: i32) -> Self {
        self.pad = pad;
        self
    }

    fn push(&mut self, sizing: Sizing) -> usize {
        self.items.push(Item {
            sizing,
            rect: Rect::ZERO,
        });
        self.items.len() - 1
    }

    pub fn fixed(&mut self, px: i32) -> usize {
        self.push(Sizing::Fixed(px))
    }

    pub fn intrinsic(&mut self, px: i32) -> usize {
        self.push(Sizing::Intrinsic(px))
    }

    /// Weight is at least 1 and the minimum at least 0.
    pub fn grow(&mut self, weight: i32, min: i32) -> usize {
        self.push(Sizing::Grow {
            weight: weight.max(1),
            min: min.max(0),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn main_len(&self) -> i32 {
        match self.direction {
            Direction::Row => self.bounds.dx(),
            Direction::Column => self.bounds.dy(),
        }
    }

    /// Assign every item its rectangle.
    ///
    /// When the minimums do not fit, grow items get exactly their minimum
    /// and the run overflows the bounds. Integer shares round down, so a
    /// few pixels may be left at the end.
    pub fn layout(&mut self) {
        let n = self.items.len() as i32;
        if n == 0 {
            return;
        }

        let avail = (self.main_len() - 2 * self.pad - self.gap * (n - 1)).max(0);
        let (claimed, weights) = self.items.iter().fold((0, 0), |(c, w), it| match it.sizing {
            Sizing::Fixed(px) | Sizing::Intrinsic(px) => (c + px, w),
            Sizing::Grow { weight, min } => (c + min, w + weight),
        });
        let rest = (avail - claimed).max(0);

        let (b, pad, gap, direction) = (self.bounds, self.pad, self.gap, self.direction);
        let mut offset = 0;
        for it in &mut self.items {
            let len = match it.sizing {
                Sizing::Fixed(px) | Sizing::Intrinsic(px) => px,
                Sizing::Grow { weight, min } if weights > 0 => min + rest * weight / weights,
                Sizing::Grow { min, .. } => min,
            };
            it.rect = match direction {
                Direction::Row => {
                    let x = b.min.x + pad + offset;
                    Rect::new(x, b.min.y + pad, x + len, b.max.y - pad)
                }
                Direction::Column => {
                    let y = b.min.y + pad + offset;
                    Rect::new(b.min.x + pad, y, b.max.x - pad, y + len)
                }
            };
            offset += len + gap;
        }
    }

    /// Rectangle of item `index` from the last [`layout`](Self::layout);
    /// [`Rect::ZERO`] for an unknown index.
    pub fn rect(&self, index: usize) -> Rect {
        self.items.get(index).map_or(Rect::ZERO, |it| it.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_weights_split_leftover() {
        let mut fx = Flex::row(Rect::new(0, 0, 310, 20)).gap(10);
        let a = fx.grow(1, 0);
        let b = fx.grow(2, 0);
        let c = fx.fixed(10);
        fx.layout();

        // 310 - 2 gaps - 10 fixed = 280 left, split 1:2.
        assert_eq!(fx.rect(a), Rect::new(0, 0, 93, 20));
        assert_eq!(fx.rect(b), Rect::new(103, 0, 289, 20));
        assert_eq!(fx.rect(c), Rect::new(299, 0, 309, 20));
    }

    #[test]
    fn test_minimums_hold_when_space_runs_out() {
        let mut fx = Flex::column(Rect::new(0, 0, 50, 100)).pad(5);
        let head = fx.fixed(40);
        let body = fx.grow(3, 80);
        fx.layout();

        assert_eq!(fx.rect(head), Rect::new(5, 5, 45, 45));
        assert_eq!(fx.rect(body), Rect::new(5, 45, 45, 125));
    }

    #[test]
    fn test_minimum_is_added_to_share() {
        let mut fx = Flex::row(Rect::new(0, 0, 200, 10));
        let small = fx.grow(1, 50);
        let big = fx.grow(1, 10);
        fx.layout();
        // 140 left over, 70 each.
        assert_eq!(fx.rect(small).dx(), 120);
        assert_eq!(fx.rect(big).dx(), 80);
    }

    #[test]
    fn test_weights_and_minimums_are_clamped() {
        let mut fx = Flex::row(Rect::new(0, 0, 100, 10));
        let a = fx.grow(0, -20);
        let b = fx.grow(-3, 0);
        fx.layout();
        assert_eq!(fx.rect(a).dx(), 50);
        assert_eq!(fx.rect(b).dx(), 50);
    }

    #[test]
    fn test_intrinsic_and_unknown_index() {
        let mut fx = Flex::row(Rect::new(10, 0, 110, 10));
        let label = fx.intrinsic(35);
        let fill = fx.grow(1, 0);
        assert_eq!(fx.rect(label), Rect::ZERO);
        fx.layout();
        assert_eq!(fx.rect(label), Rect::new(10, 0, 45, 10));
        assert_eq!(fx.rect(fill), Rect::new(45, 0, 110, 10));
        assert_eq!(fx.rect(7), Rect::ZERO);
        assert_eq!(fx.len(), 2);
    }
}
