//! Integer rectangles and points in display units

use std::fmt;

/// A point in display space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle: origin plus extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Widened so rectangles reaching past `i32::MAX` still have an edge
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub const fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Closed-interval containment on both axes, so shared edges belong to
    /// both neighbours
    pub const fn contains(&self, point: Point) -> bool {
        let (x, y) = (point.x as i64, point.y as i64);
        self.x as i64 <= x && x <= self.right() && self.y as i64 <= y && y <= self.bottom()
    }

    /// True if the interiors overlap; empty rectangles have no interior
    pub const fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.x as i64) < other.right()
            && (other.x as i64) < self.right()
            && (self.y as i64) < other.bottom()
            && (other.y as i64) < self.bottom()
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, width, height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}
