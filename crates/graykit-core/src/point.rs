//! Point - Integer 2D coordinate
//!
//! Small `Copy` value type used for pixel addressing and shape
//! rasterization. All arithmetic returns a new point and saturates at the
//! `i32` range.

use crate::error::{Error, Result};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// An integer point `(x, y)`.
///
/// `x` grows to the right and `y` grows downward, matching image row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate (column)
    pub x: i32,
    /// Vertical coordinate (row)
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the x coordinate.
    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Get the y coordinate.
    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Set the x coordinate.
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Set the y coordinate.
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Translate the point by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses two whitespace-separated integers, e.g. `"5 6"`.
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::InvalidParameter(format!(
                "expected two coordinates, got {s:?}"
            )));
        };
        let parse = |tok: &str| {
            tok.parse::<i32>()
                .map_err(|e| Error::InvalidParameter(format!("bad coordinate {tok:?}: {e}")))
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}
