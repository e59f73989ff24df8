//! Plain rectangle and point math shared by the handle kit, the item model and
//! the crop controller.
//!
//! A [`Rect`] stores its origin plus a signed extent. Drags that cross an edge
//! are allowed to produce a negative width or height; [`Rect::normalized`]
//! brings such a rectangle back to a non-negative extent before it is reported.

use serde::{Deserialize, Serialize};

/// A point in document (image) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Component-wise difference `self - other`.
    pub fn offset_from(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Distance from this point to the segment `a`-`b`.
    pub fn distance_to_segment(&self, a: &Point, b: &Point) -> f64 {
        let vx = b.x - a.x;
        let vy = b.y - a.y;
        let len_sq = vx * vx + vy * vy;
        if len_sq <= f64::EPSILON {
            return self.distance_to(a);
        }
        let t = (((self.x - a.x) * vx + (self.y - a.y) * vy) / len_sq).clamp(0.0, 1.0);
        self.distance_to(&Point::new(a.x + t * vx, a.y + t * vy))
    }
}

/// Axis-aligned rectangle with a signed extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the normalized rectangle spanned by two arbitrary corners.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self::from_edges(a.x, a.y, b.x, b.y).normalized()
    }

    /// Builds a rectangle from its four edges without normalizing.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Rectangle of the given size centred on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when either extent is zero. Such rectangles are legal everywhere.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns the same area with a non-negative width and height.
    pub fn normalized(&self) -> Rect {
        let (left, right) = if self.width < 0.0 {
            (self.right(), self.left())
        } else {
            (self.left(), self.right())
        };
        let (top, bottom) = if self.height < 0.0 {
            (self.bottom(), self.top())
        } else {
            (self.top(), self.bottom())
        };
        Rect::from_edges(left, top, right, bottom)
    }

    /// Point-in-rectangle test, inclusive of the border and widened by
    /// `tolerance` on every side.
    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        let r = self.normalized();
        point.x >= r.left() - tolerance
            && point.x <= r.right() + tolerance
            && point.y >= r.top() - tolerance
            && point.y <= r.bottom() + tolerance
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        Rect::from_edges(
            a.left().min(b.left()),
            a.top().min(b.top()),
            a.right().max(b.right()),
            a.bottom().max(b.bottom()),
        )
    }

    /// Clamps every edge into `bounds`. A rectangle lying fully outside ends up
    /// as a zero-extent rectangle on the nearest boundary, never negative.
    pub fn clamped_to(&self, bounds: &Rect) -> Rect {
        let r = self.normalized();
        let b = bounds.normalized();
        let left = r.left().clamp(b.left(), b.right());
        let right = r.right().clamp(b.left(), b.right());
        let top = r.top().clamp(b.top(), b.bottom());
        let bottom = r.bottom().clamp(b.top(), b.bottom());
        Rect::from_edges(left, top, right, bottom)
    }

    /// Moves the rectangle, keeping its size, so that it lies inside `bounds`
    /// wherever it fits.
    pub fn shifted_inside(&self, bounds: &Rect) -> Rect {
        let r = self.normalized();
        let b = bounds.normalized();
        let x = if r.width >= b.width {
            b.left()
        } else {
            r.left().clamp(b.left(), b.right() - r.width)
        };
        let y = if r.height >= b.height {
            b.top()
        } else {
            r.top().clamp(b.top(), b.bottom() - r.height)
        };
        Rect::new(x, y, r.width.min(b.width), r.height.min(b.height))
    }

    /// Maps `point` from this rectangle's frame into `target`'s frame.
    ///
    /// On an axis where this rectangle has no extent the point lands on the
    /// edge of `target` that moved, keeping its offset from this rectangle.
    pub fn map_point(&self, point: &Point, target: &Rect) -> Point {
        let x = if self.width == 0.0 {
            let edge = if target.left() != self.x {
                target.left()
            } else {
                target.right()
            };
            edge + (point.x - self.x)
        } else {
            target.x + (point.x - self.x) / self.width * target.width
        };
        let y = if self.height == 0.0 {
            let edge = if target.top() != self.y {
                target.top()
            } else {
                target.bottom()
            };
            edge + (point.y - self.y)
        } else {
            target.y + (point.y - self.y) / self.height * target.height
        };
        Point::new(x, y)
    }
}
