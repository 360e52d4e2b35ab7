//! Graphics rendering functions
//!
//! Shape generators are lazy iterators over the points of a shape, and
//! [`Image::render_points`] plots whatever they yield. Points outside the
//! image are skipped silently, so shapes may extend past any edge.
//!
//! The `draw_*` functions never walk the off-image part of a shape: lines
//! are cut to the span of steps that can land inside the image and circles
//! jump over arcs that cannot reach it. Their cost follows the image size,
//! not the coordinates.
//!
//! - Lines (integer Bresenham)
//! - Circle outlines (midpoint algorithm, eight-way symmetric)
//! - Rectangle outlines

use super::Image;
use crate::point::Point;
use crate::rect::Rect;
use log::debug;

/// Points of a line segment, in order from the first endpoint.
///
/// Created by [`line_points`].
#[derive(Debug, Clone)]
pub struct LinePoints {
    start: (i64, i64),
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    x: i64,
    y: i64,
    err: i64,
    /// Step index of the next point
    step: i64,
    /// Step index of the last point, inclusive
    last: i64,
}

/// Generate the points of a line from `p1` to `p2`, both ends included.
///
/// Uses Bresenham's algorithm with a single error term `err = dx - dy`, so
/// it works in every octant. `p1 == p2` yields exactly one point.
pub fn line_points(p1: Point, p2: Point) -> LinePoints {
    // i64 so that the deltas of extreme endpoints cannot overflow
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    LinePoints {
        start: (x1, y1),
        dx,
        dy,
        sx: if x1 < x2 { 1 } else { -1 },
        sy: if y1 < y2 { 1 } else { -1 },
        x: x1,
        y: y1,
        err: dx - dy,
        step: 0,
        last: dx.max(dy),
    }
}

impl LinePoints {
    /// Keep only the steps whose major-axis coordinate lies inside a
    /// `width x height` image.
    ///
    /// Every point inside the image is still yielded; at most `width` (or
    /// `height` for steep lines) points remain.
    pub fn clipped(mut self, width: u32, height: u32) -> Self {
        let (origin, sign, limit) = if self.dx >= self.dy {
            (self.start.0, self.sx, i64::from(width))
        } else {
            (self.start.1, self.sy, i64::from(height))
        };

        // origin + sign * k in [0, limit)
        let (lo, hi) = if sign > 0 {
            (-origin, limit - 1 - origin)
        } else {
            (origin - (limit - 1), origin)
        };

        let first = self.step.max(lo);
        self.last = self.last.min(hi);
        if first > self.last {
            self.step = self.last + 1;
        } else if first != self.step {
            self.seek(first);
        }
        self
    }

    /// Move to step `k` without walking the steps in between.
    ///
    /// Along the major axis every step advances by one, and the minor axis
    /// has advanced `max(0, ceil((2 * minor * k - major) / (2 * major)))`
    /// times; the error term follows from both counts.
    fn seek(&mut self, k: i64) {
        let (dx, dy) = (i128::from(self.dx), i128::from(self.dy));
        let (major, minor) = (dx.max(dy), dx.min(dy));
        let k = i128::from(k);
        let m = if major == 0 {
            0
        } else {
            (-((major - 2 * minor * k).div_euclid(2 * major))).max(0)
        };
        let (nx, ny) = if dx >= dy { (k, m) } else { (m, k) };

        // Every quantity below is bounded by a few times the endpoint deltas
        self.x = self.start.0 + self.sx * nx as i64;
        self.y = self.start.1 + self.sy * ny as i64;
        self.err = (dx - dy + dx * ny - dy * nx) as i64;
        self.step = k as i64;
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.step > self.last {
            return None;
        }
        // x and y never leave the endpoint ranges, so they fit in i32
        let point = Point::new(self.x as i32, self.y as i32);
        self.step += 1;

        if self.step <= self.last {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from((self.last + 1 - self.step).max(0)).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for LinePoints {}

/// State of the midpoint circle walk over the first octant.
///
/// `d = 2(x + 1)^2 + y^2 + (y - 1)^2 - 2r^2`, which is `3 - 2r` at the
/// start `(0, r)`.
#[derive(Debug, Clone)]
struct Midpoint {
    radius: i64,
    x: i64,
    y: i64,
    d: i64,
}

impl Midpoint {
    fn new(radius: i32) -> Self {
        let r = i64::from(radius);
        Self {
            radius: r,
            x: 0,
            y: r,
            d: 3 - 2 * r,
        }
    }

    fn done(&self) -> bool {
        self.x > self.y
    }

    fn step(&mut self) {
        if self.d < 0 {
            self.d += 4 * self.x + 6;
        } else {
            self.d += 4 * (self.x - self.y) + 10;
            self.y -= 1;
        }
        self.x += 1;
    }

    /// Jump forward to column `x`, returning `false` (and leaving the state
    /// alone) when the jump cannot be taken.
    ///
    /// While `y >= x + 2`, the `y` reached at column `x` is the largest `y`
    /// with `y^2 + (y - 1)^2 < 2r^2 - 2x^2`. A target where that bound
    /// breaks falls back to stepping.
    fn jump_to(&mut self, x: i64) -> bool {
        if x <= self.x || self.radius < 2 {
            return false;
        }
        let r = i128::from(self.radius);
        let t = 2 * r * r - 2 * i128::from(x) * i128::from(x);
        if t <= 1 {
            return false;
        }
        let q = |y: i128| y * y + (y - 1) * (y - 1);

        // Solve 2y^2 - 2y + 1 < t, then settle rounding
        let mut y = (1 + (2 * t - 1).isqrt()) / 2;
        while q(y + 1) < t {
            y += 1;
        }
        while y > 0 && q(y) >= t {
            y -= 1;
        }

        let x = i128::from(x);
        if y < x + 1 {
            return false;
        }
        self.d = (2 * (x + 1) * (x + 1) + q(y) - 2 * r * r) as i64;
        self.x = x as i64;
        self.y = y as i64;
        true
    }

    /// The current offset mirrored into all eight octants around `center`.
    fn octants(&self, (cx, cy): (i64, i64)) -> [(i64, i64); 8] {
        let (x, y) = (self.x, self.y);
        [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ]
    }
}

/// Generate the outline of a circle centered at `center`.
///
/// Midpoint algorithm starting at the top of the circle with decision
/// variable `d = 3 - 2r`; each step is mirrored into all eight octants.
/// Radius 0 yields only the center and a negative radius yields nothing.
/// Points whose coordinates do not fit in `i32` are dropped.
pub fn circle_points(center: Point, radius: i32) -> impl Iterator<Item = Point> {
    let center = (i64::from(center.x), i64::from(center.y));
    let mut walk = Midpoint::new(radius);

    std::iter::from_fn(move || {
        if walk.done() {
            return None;
        }
        let octants = walk.octants(center);
        walk.step();
        Some(octants)
    })
    .flatten()
    .filter_map(|(x, y)| Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?)))
}

/// The corners `c1 -> (c2.x, c1.y) -> c2 -> (c1.x, c2.y)` joined by sides.
fn rectangle_sides(c1: Point, c2: Point) -> [(Point, Point); 4] {
    let tr = Point::new(c2.x, c1.y);
    let bl = Point::new(c1.x, c2.y);
    [(c1, tr), (tr, c2), (c2, bl), (bl, c1)]
}

/// Generate the outline of the rectangle with opposite corners `c1`, `c2`.
///
/// The four sides are traced `c1 -> (c2.x, c1.y) -> c2 -> (c1.x, c2.y) -> c1`.
/// Both corners lie on the outline. Corner points appear twice.
pub fn rectangle_points(c1: Point, c2: Point) -> impl Iterator<Item = Point> {
    rectangle_sides(c1, c2)
        .into_iter()
        .flat_map(|(a, b)| line_points(a, b))
}

impl Image {
    /// Plot every point of `points` with `value`.
    ///
    /// Points outside `[0, width) x [0, height)` are skipped. Returns the
    /// number of points that were inside the image.
    pub fn render_points<I>(&mut self, points: I, value: u8) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .filter(|p| self.plot(i64::from(p.x), i64::from(p.y), value))
            .count()
    }

    /// Set one pixel if `(x, y)` lies inside the image.
    fn plot(&mut self, x: i64, y: i64, value: u8) -> bool {
        // Clip to image bounds
        if x < 0 || x >= i64::from(self.width) || y < 0 || y >= i64::from(self.height) {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
        true
    }

    /// Chebyshev distance from `(x, y)` to the nearest pixel of the image.
    fn distance_to(&self, x: i64, y: i64) -> i64 {
        let outside = |v: i64, len: u32| (-v).max(v - (i64::from(len) - 1)).max(0);
        outside(x, self.width).max(outside(y, self.height))
    }
}

/// Draw a line from `p1` to `p2`.
pub fn draw_line(image: &mut Image, p1: Point, p2: Point, value: u8) {
    let points = line_points(p1, p2).clipped(image.width, image.height);
    let plotted = image.render_points(points, value);
    debug!("line {p1} -> {p2}: {plotted} pixels set to {value}");
}

/// Draw a circle outline.
///
/// Plots the same pixels as rendering [`circle_points`].
pub fn draw_circle(image: &mut Image, center: Point, radius: i32, value: u8) {
    if radius < 0 || image.is_empty() {
        return;
    }
    let c = (i64::from(center.x), i64::from(center.y));
    let mut walk = Midpoint::new(radius);
    let mut plotted = 0;

    while !walk.done() {
        let octants = walk.octants(c);
        for &(x, y) in &octants {
            if image.plot(x, y, value) {
                plotted += 1;
            }
        }

        // Each mirrored coordinate moves by at most one per step, so no
        // point can enter the image for `gap - 1` steps
        let gap = octants
            .iter()
            .map(|&(x, y)| image.distance_to(x, y))
            .min()
            .unwrap_or(0);

        // At most `y - x` steps remain
        if gap > walk.y - walk.x {
            break;
        }
        let mut jump = gap;
        while jump >= 2 && !walk.jump_to(walk.x + jump) {
            jump /= 2;
        }
        if jump < 2 {
            walk.step();
        }
    }

    debug!("circle at {center} r={radius}: {plotted} pixels set to {value}");
}

/// Draw a rectangle outline with opposite corners `c1` and `c2`.
///
/// The interior is left untouched.
pub fn draw_rectangle(image: &mut Image, c1: Point, c2: Point, value: u8) {
    let (w, h) = (image.width, image.height);
    let plotted: usize = rectangle_sides(c1, c2)
        .into_iter()
        .map(|(a, b)| image.render_points(line_points(a, b).clipped(w, h), value))
        .sum();
    debug!("rectangle {c1} -> {c2}: {plotted} pixels set to {value}");
}

/// Draw the outline of `rect` through its two stored corners.
///
/// Same as [`draw_rectangle`] with `rect.top_left()` and
/// `rect.bottom_right()`.
pub fn draw_rect(image: &mut Image, rect: &Rect, value: u8) {
    draw_rectangle(image, rect.top_left(), rect.bottom_right(), value);
}
