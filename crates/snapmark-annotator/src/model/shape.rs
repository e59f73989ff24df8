//! Item geometry.

use serde::{Deserialize, Serialize};
use snapmark_core::{Point, Rect};

/// Control points of an item.
///
/// `Segment` and `Frame` keep the corner the creation drag started from, so
/// growing the item only ever replaces `end`. Bounds are always normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Two endpoints (lines and arrows).
    Segment { start: Point, end: Point },
    /// A box spanned by two opposite corners.
    Frame { start: Point, end: Point },
    /// A freehand polyline.
    Stroke { points: Vec<Point> },
}

impl Shape {
    pub fn segment_at(point: Point) -> Self {
        Shape::Segment {
            start: point,
            end: point,
        }
    }

    pub fn frame_at(point: Point) -> Self {
        Shape::Frame {
            start: point,
            end: point,
        }
    }

    pub fn frame(rect: &Rect) -> Self {
        Shape::Frame {
            start: rect.top_left(),
            end: rect.bottom_right(),
        }
    }

    pub fn stroke_at(point: Point) -> Self {
        Shape::Stroke {
            points: vec![point],
        }
    }

    /// Normalized bounding rectangle.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Segment { start, end } | Shape::Frame { start, end } => {
                Rect::from_points(*start, *end)
            }
            Shape::Stroke { points } => {
                let Some(first) = points.first() else {
                    return Rect::default();
                };
                points
                    .iter()
                    .fold(Rect::new(first.x, first.y, 0.0, 0.0), |acc, p| {
                        acc.union(&Rect::new(p.x, p.y, 0.0, 0.0))
                    })
            }
        }
    }

    /// Zero-extent geometry: a segment with coincident ends, a frame with no
    /// width or no height, or a stroke that never left its first point.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Segment { start, end } => start == end,
            Shape::Frame { .. } => self.bounds().is_degenerate(),
            Shape::Stroke { points } => points.windows(2).all(|w| w[0] == w[1]),
        }
    }

    /// Replaces the end point. Strokes have no single end point and are left
    /// alone.
    pub fn set_end(&mut self, point: Point) {
        match self {
            Shape::Segment { end, .. } | Shape::Frame { end, .. } => *end = point,
            Shape::Stroke { .. } => {}
        }
    }

    /// Appends a point to a stroke, skipping exact repeats of the last one.
    pub fn append_point(&mut self, point: Point) {
        if let Shape::Stroke { points } = self {
            if points.last() != Some(&point) {
                points.push(point);
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Segment { start, end } | Shape::Frame { start, end } => {
                *start = start.translated(dx, dy);
                *end = end.translated(dx, dy);
            }
            Shape::Stroke { points } => {
                for p in points.iter_mut() {
                    *p = p.translated(dx, dy);
                }
            }
        }
    }

    /// Re-centres the geometry on `center`, keeping its size.
    pub fn recenter(&mut self, center: Point) {
        let current = self.bounds().center();
        self.translate(center.x - current.x, center.y - current.y);
    }

    /// Maps every control point from `from` into `to`. `to` may have a
    /// negative extent, which mirrors the geometry.
    pub fn mapped(&self, from: &Rect, to: &Rect) -> Shape {
        match self {
            Shape::Segment { start, end } => Shape::Segment {
                start: from.map_point(start, to),
                end: from.map_point(end, to),
            },
            Shape::Frame { start, end } => Shape::Frame {
                start: from.map_point(start, to),
                end: from.map_point(end, to),
            },
            Shape::Stroke { points } => Shape::Stroke {
                points: points.iter().map(|p| from.map_point(p, to)).collect(),
            },
        }
    }

    /// Hit test. Frames use their filled box; segments and strokes use the
    /// distance to the path.
    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        match self {
            Shape::Frame { .. } => self.bounds().contains(point, tolerance),
            Shape::Segment { start, end } => point.distance_to_segment(start, end) <= tolerance,
            Shape::Stroke { points } => match points.as_slice() {
                [] => false,
                [only] => point.distance_to(only) <= tolerance,
                _ => points
                    .windows(2)
                    .any(|w| point.distance_to_segment(&w[0], &w[1]) <= tolerance),
            },
        }
    }
}
