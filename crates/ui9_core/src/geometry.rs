//! Integer pixel geometry
//!
//! Rectangles are half-open: `min` is inside, `max` is outside.

use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    pub fn from_origin_size(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Width in pixels.
    pub fn dx(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height in pixels.
    pub fn dy(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(&self) -> bool {
        self.dx() <= 0 || self.dy() <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Shrink by `n` pixels on every side (grow for negative `n`).
    pub fn inset(&self, n: i32) -> Rect {
        Rect::new(
            self.min.x + n,
            self.min.y + n,
            self.max.x - n,
            self.max.y - n,
        )
    }

    /// The top `h` rows of this rectangle.
    pub fn top_rows(&self, h: i32) -> Rect {
        Rect::new(self.min.x, self.min.y, self.max.x, self.min.y + h)
    }

    /// One-pixel-tall strip at row offset `y`.
    pub fn row(&self, y: i32) -> Rect {
        Rect::new(
            self.min.x,
            self.min.y + y,
            self.max.x,
            self.min.y + y + 1,
        )
    }

    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_contains() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(19, 19)));
        assert!(!r.contains(Point::new(20, 15)));
        assert!(!r.contains(Point::new(15, 20)));
    }

    #[test]
    fn test_inset_and_rows() {
        let r = Rect::new(0, 0, 100, 34);
        assert_eq!(r.inset(2), Rect::new(2, 2, 98, 32));
        assert_eq!(r.row(3), Rect::new(0, 3, 100, 4));
        assert_eq!(r.top_rows(10).dy(), 10);
        assert!(Rect::new(5, 5, 5, 9).is_empty());
    }
}
