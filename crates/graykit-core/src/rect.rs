//! Rect - Rectangle regions
//!
//! An axis-aligned rectangle stored as two corner points. The bottom-right
//! corner is exclusive, so a rectangle at `(x, y)` of size `w x h` has
//! `bottom_right = (x + w, y + h)`.
//!
//! # Extents
//!
//! Corners are not reordered. If `bottom_right` lies above or to the left
//! of `top_left`, [`Rect::width`] / [`Rect::height`] are negative; such a
//! rectangle reports `is_valid() == false` and is rejected by image region
//! extraction.

use crate::error::{Error, Result};
use crate::point::Point;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Sub};
use std::str::FromStr;

/// A rectangle region
///
/// Small and frequently copied, so this is a plain `Copy` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    top_left: Point,
    bottom_right: Point,
}

impl Rect {
    /// Create a rectangle from its two corners.
    ///
    /// No ordering is enforced between the corners.
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_xywh(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            top_left: Point::new(x, y),
            bottom_right: Point::new(x.saturating_add_unsigned(w), y.saturating_add_unsigned(h)),
        }
    }

    /// Create a normalized rectangle spanning two arbitrary corners.
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        Self {
            top_left: Point::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            bottom_right: Point::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        }
    }

    /// Left x coordinate
    #[inline]
    pub fn x(&self) -> i32 {
        self.top_left.x
    }

    /// Top y coordinate
    #[inline]
    pub fn y(&self) -> i32 {
        self.top_left.y
    }

    /// Signed width (`bottom_right.x - top_left.x`), saturated to `i32`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bottom_right.x.saturating_sub(self.top_left.x)
    }

    /// Signed height (`bottom_right.y - top_left.y`), saturated to `i32`.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom_right.y.saturating_sub(self.top_left.y)
    }

    /// Exact signed `(width, height)`.
    ///
    /// Corners at opposite ends of the `i32` range give extents that only
    /// fit in `i64`.
    #[inline]
    pub fn extent(&self) -> (i64, i64) {
        (
            i64::from(self.bottom_right.x) - i64::from(self.top_left.x),
            i64::from(self.bottom_right.y) - i64::from(self.top_left.y),
        )
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Move the rectangle horizontally, keeping its width.
    ///
    /// The right edge saturates at the `i32` range.
    pub fn set_x(&mut self, x: i32) {
        let (w, _) = self.extent();
        self.top_left.x = x;
        self.bottom_right.x = saturate(i64::from(x) + w);
    }

    /// Move the rectangle vertically, keeping its height.
    ///
    /// The bottom edge saturates at the `i32` range.
    pub fn set_y(&mut self, y: i32) {
        let (_, h) = self.extent();
        self.top_left.y = y;
        self.bottom_right.y = saturate(i64::from(y) + h);
    }

    /// Resize by moving the right edge.
    pub fn set_width(&mut self, width: u32) {
        self.bottom_right.x = self.top_left.x.saturating_add_unsigned(width);
    }

    /// Resize by moving the bottom edge.
    pub fn set_height(&mut self, height: u32) {
        self.bottom_right.y = self.top_left.y.saturating_add_unsigned(height);
    }

    /// Get the area (negative if exactly one extent is negative)
    #[inline]
    pub fn area(&self) -> i64 {
        let (w, h) = self.extent();
        w.saturating_mul(h)
    }

    /// Check if the rectangle is valid (non-negative extents)
    #[inline]
    pub fn is_valid(&self) -> bool {
        let (w, h) = self.extent();
        w >= 0 && h >= 0
    }

    /// Check if the rectangle is empty (no area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        let (w, h) = self.extent();
        w <= 0 || h <= 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x < self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y < self.bottom_right.y
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Disjoint (or merely touching) rectangles give the canonical empty
    /// rectangle with both corners at the origin.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x().max(other.x());
        let y1 = self.y().max(other.y());
        let x2 = self.bottom_right.x.min(other.bottom_right.x);
        let y2 = self.bottom_right.y.min(other.bottom_right.y);

        if x2 <= x1 || y2 <= y1 {
            return Rect::default();
        }
        Rect::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Compute the union (bounding rectangle) of two rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x().min(other.x());
        let y1 = self.y().min(other.y());
        let x2 = self.bottom_right.x.max(other.bottom_right.x);
        let y2 = self.bottom_right.y.max(other.bottom_right.y);
        Rect::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Translate the rectangle by `offset`
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(self.top_left + offset, self.bottom_right + offset)
    }
}

impl Add<Point> for Rect {
    type Output = Rect;

    fn add(self, rhs: Point) -> Rect {
        self.translate(rhs)
    }
}

impl Sub<Point> for Rect {
    type Output = Rect;

    fn sub(self, rhs: Point) -> Rect {
        Rect::new(self.top_left - rhs, self.bottom_right - rhs)
    }
}

impl BitAnd for Rect {
    type Output = Rect;

    fn bitand(self, rhs: Rect) -> Rect {
        self.intersect(&rhs)
    }
}

impl BitOr for Rect {
    type Output = Rect;

    fn bitor(self, rhs: Rect) -> Rect {
        self.union(&rhs)
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle({}, {}, {}, {})",
            self.x(),
            self.y(),
            self.width(),
            self.height()
        )
    }
}

/// Parses `x y width height`, e.g. `"5 5 10 20"`.
impl FromStr for Rect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[x, y, w, h] = tokens.as_slice() else {
            return Err(Error::InvalidParameter(format!(
                "expected `x y width height`, got {s:?}"
            )));
        };
        let bad = |tok: &str, e: std::num::ParseIntError| {
            Error::InvalidParameter(format!("bad rectangle field {tok:?}: {e}"))
        };
        let x: i32 = x.parse().map_err(|e| bad(x, e))?;
        let y: i32 = y.parse().map_err(|e| bad(y, e))?;
        let w: u32 = w.parse().map_err(|e| bad(w, e))?;
        let h: u32 = h.parse().map_err(|e| bad(h, e))?;
        Ok(Rect::from_xywh(x, y, w, h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_creation() {
        let r = Rect::from_xywh(10, 20, 100, 50);
        assert_eq!(r.x(), 10);
        assert_eq!(r.y(), 20);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
        assert_eq!(r.bottom_right(), Point::new(110, 70));
        assert_eq!(r.area(), 5000);
        assert!(r.is_valid());
    }

    #[test]
    fn test_rect_negative_extent() {
        let r = Rect::new(Point::new(10, 10), Point::new(5, 20));
        assert_eq!(r.width(), -5);
        assert_eq!(r.height(), 10);
        assert!(!r.is_valid());
        assert!(r.is_empty());

        let n = Rect::from_corners(Point::new(10, 10), Point::new(5, 20));
        assert_eq!((n.x(), n.y(), n.width(), n.height()), (5, 10, 5, 10));
    }

    #[test]
    fn test_rect_extreme_extent() {
        let r = Rect::new(Point::new(i32::MIN, 0), Point::new(i32::MAX, 1));
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.extent(), (i64::from(u32::MAX), 1));
        assert_eq!(r.area(), i64::from(u32::MAX));
        assert!(r.is_valid());

        let flipped = Rect::new(Point::new(i32::MAX, 0), Point::new(i32::MIN, 1));
        assert_eq!(flipped.width(), i32::MIN);
        assert!(flipped.is_empty());

        let mut moved = r;
        moved.set_x(0);
        assert_eq!(moved.bottom_right().x, i32::MAX);
    }

    #[test]
    fn test_rect_setters_keep_size() {
        let mut r = Rect::from_xywh(0, 0, 30, 40);
        r.set_x(5);
        r.set_y(-5);
        assert_eq!((r.x(), r.y(), r.width(), r.height()), (5, -5, 30, 40));
        r.set_width(3);
        r.set_height(4);
        assert_eq!(r.bottom_right(), Point::new(8, -1));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::from_xywh(10, 10, 100, 100);
        assert!(r.contains_point(Point::new(50, 50)));
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(!r.contains_point(Point::new(110, 110))); // Exclusive boundary
        assert!(!r.contains_point(Point::new(0, 0)));
    }

    #[test]
    fn test_rect_intersect() {
        let r1 = Rect::from_xywh(0, 0, 100, 100);
        let r2 = Rect::from_xywh(50, 50, 100, 100);

        let inter = r1 & r2;
        assert_eq!(inter, Rect::from_xywh(50, 50, 50, 50));

        // Disjoint and edge-touching rectangles collapse to the origin
        let r3 = Rect::from_xywh(200, 200, 10, 10);
        assert_eq!(r1 & r3, Rect::default());
        let r4 = Rect::from_xywh(100, 0, 10, 10);
        assert_eq!(r1 & r4, Rect::default());
    }

    #[test]
    fn test_rect_union() {
        let r1 = Rect::from_xywh(0, 0, 50, 50);
        let r2 = Rect::from_xywh(25, 25, 50, 50);
        assert_eq!(r1 | r2, Rect::from_xywh(0, 0, 75, 75));

        let far = Rect::from_xywh(-10, 100, 5, 5);
        let u = r1 | far;
        assert_eq!((u.x(), u.y(), u.width(), u.height()), (-10, 0, 60, 105));
    }

    #[test]
    fn test_rect_translate() {
        let r = Rect::from_xywh(1, 2, 3, 4);
        let moved = r + Point::new(10, 20);
        assert_eq!(moved, Rect::from_xywh(11, 22, 3, 4));
        assert_eq!(moved - Point::new(10, 20), r);
    }

    #[test]
    fn test_rect_display_and_parse() {
        let r = Rect::from_xywh(-1, 2, 30, 40);
        assert_eq!(r.to_string(), "Rectangle(-1, 2, 30, 40)");
        assert_eq!("-1 2 30 40".parse::<Rect>().unwrap(), r);
        assert!("1 2 3".parse::<Rect>().is_err());
        assert!("1 2 -3 4".parse::<Rect>().is_err());
    }
}
