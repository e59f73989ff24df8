//! Resize handle layout and grab bookkeeping.
//!
//! Eight handles surround a rectangle: the four corners first, clockwise from
//! the top-left, then the four edge midpoints, clockwise from the top. Handle
//! rectangles are always recomputed from the owning rectangle before a hit
//! test; a grab survives recomputation until [`HandleSet::release`] is called.
//!
//! A press outside the rectangle reaches a handle within half its size plus
//! the tolerance. A press strictly inside reaches only half the size, so the
//! body of a small rectangle stays grabbable. Midpoints on a zero-extent axis
//! are inactive.

use serde::{Deserialize, Serialize};

use crate::constants::{HANDLE_SIZE, HANDLE_TOLERANCE};
use crate::geometry::{Point, Rect};

/// Number of handles around a rectangle.
pub const HANDLE_COUNT: usize = 8;

/// One of the eight resize handles, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    Top,
    Right,
    Bottom,
    Left,
}

impl Handle {
    /// All handles in hit-test order.
    pub const ALL: [Handle; HANDLE_COUNT] = [
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomRight,
        Handle::BottomLeft,
        Handle::Top,
        Handle::Right,
        Handle::Bottom,
        Handle::Left,
    ];

    pub fn index(self) -> usize {
        match self {
            Handle::TopLeft => 0,
            Handle::TopRight => 1,
            Handle::BottomRight => 2,
            Handle::BottomLeft => 3,
            Handle::Top => 4,
            Handle::Right => 5,
            Handle::Bottom => 6,
            Handle::Left => 7,
        }
    }

    pub fn from_index(index: usize) -> Option<Handle> {
        Self::ALL.get(index).copied()
    }

    pub fn is_corner(self) -> bool {
        self.index() < 4
    }

    /// Edge midpoints across a zero-extent axis coincide with the opposite
    /// edge and are never hit.
    pub fn is_active(self, rect: &Rect) -> bool {
        match self {
            Handle::Left | Handle::Right => rect.width != 0.0,
            Handle::Top | Handle::Bottom => rect.height != 0.0,
            _ => true,
        }
    }

    /// The nominal centre of this handle on `rect`.
    pub fn anchor(self, rect: &Rect) -> Point {
        let c = rect.center();
        match self {
            Handle::TopLeft => rect.top_left(),
            Handle::TopRight => rect.top_right(),
            Handle::BottomRight => rect.bottom_right(),
            Handle::BottomLeft => rect.bottom_left(),
            Handle::Top => Point::new(c.x, rect.top()),
            Handle::Right => Point::new(rect.right(), c.y),
            Handle::Bottom => Point::new(c.x, rect.bottom()),
            Handle::Left => Point::new(rect.left(), c.y),
        }
    }

    /// Moves only the edges this handle owns so that its anchor lands on
    /// `target`. Corners own two edges, midpoints one. The result is not
    /// normalized; a drag past the opposite edge yields a negative extent.
    pub fn drag(self, rect: &Rect, target: Point) -> Rect {
        let (mut left, mut top, mut right, mut bottom) =
            (rect.left(), rect.top(), rect.right(), rect.bottom());
        match self {
            Handle::TopLeft => {
                left = target.x;
                top = target.y;
            }
            Handle::TopRight => {
                right = target.x;
                top = target.y;
            }
            Handle::BottomRight => {
                right = target.x;
                bottom = target.y;
            }
            Handle::BottomLeft => {
                left = target.x;
                bottom = target.y;
            }
            Handle::Top => top = target.y,
            Handle::Right => right = target.x,
            Handle::Bottom => bottom = target.y,
            Handle::Left => left = target.x,
        }
        Rect::from_edges(left, top, right, bottom)
    }
}

/// What a press grabbed: a specific handle or the whole rectangle body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grab {
    Handle(Handle),
    Move,
}

/// Computes the eight handle squares of side `size` for `rect`.
pub fn handle_rects(rect: &Rect, size: f64) -> [Rect; HANDLE_COUNT] {
    Handle::ALL.map(|h| Rect::centered(h.anchor(rect), size, size))
}

/// Handle rectangles plus the current grab, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleSet {
    handles: [Rect; HANDLE_COUNT],
    bounds: Rect,
    size: f64,
    tolerance: f64,
    grabbed: Option<Grab>,
    grab_offset: Point,
}

impl HandleSet {
    pub fn new(size: f64, tolerance: f64) -> Self {
        Self {
            handles: [Rect::default(); HANDLE_COUNT],
            bounds: Rect::default(),
            size,
            tolerance,
            grabbed: None,
            grab_offset: Point::ZERO,
        }
    }

    /// Recomputes handle positions for `rect`. The grab is left untouched.
    pub fn update(&mut self, rect: &Rect) {
        self.handles = handle_rects(rect, self.size);
        self.bounds = *rect;
    }

    pub fn handles(&self) -> &[Rect; HANDLE_COUNT] {
        &self.handles
    }

    /// First active handle, in layout order, within reach of `point`.
    pub fn hit(&self, point: &Point) -> Option<Handle> {
        let b = &self.bounds.normalized();
        let inside = point.x > b.left()
            && point.x < b.right()
            && point.y > b.top()
            && point.y < b.bottom();
        let reach = if inside {
            self.size / 2.0
        } else {
            self.size / 2.0 + self.tolerance
        };
        Handle::ALL.into_iter().find(|h| {
            let anchor = h.anchor(&self.bounds);
            h.is_active(b)
                && (point.x - anchor.x).abs() <= reach
                && (point.y - anchor.y).abs() <= reach
        })
    }

    /// Recomputes handles for `rect` and tries to grab one at `point`. When no
    /// handle matches, a point inside `rect` grabs the body instead.
    pub fn grab(&mut self, point: Point, rect: &Rect) -> Option<Grab> {
        self.update(rect);
        if let Some(handle) = self.hit(&point) {
            self.grab_handle(handle, point, rect);
        } else if rect.contains(&point, 0.0) {
            self.grab_body(point, rect);
        } else {
            self.grabbed = None;
        }
        self.grabbed
    }

    /// Grabs `handle` explicitly, recording the offset from its anchor.
    pub fn grab_handle(&mut self, handle: Handle, point: Point, rect: &Rect) {
        self.grabbed = Some(Grab::Handle(handle));
        self.grab_offset = point.offset_from(&handle.anchor(rect));
    }

    /// Grabs the body, recording the offset from the top-left corner.
    pub fn grab_body(&mut self, point: Point, rect: &Rect) {
        self.grabbed = Some(Grab::Move);
        self.grab_offset = point.offset_from(&rect.top_left());
    }

    /// Clears the grab. Calling it with nothing grabbed is fine.
    pub fn release(&mut self) {
        self.grabbed = None;
        self.grab_offset = Point::ZERO;
    }

    pub fn grabbed(&self) -> Option<Grab> {
        self.grabbed
    }

    /// Index of the grabbed handle; `None` for no grab or a body grab.
    pub fn grabbed_index(&self) -> Option<usize> {
        match self.grabbed {
            Some(Grab::Handle(h)) => Some(h.index()),
            _ => None,
        }
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed.is_some()
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    /// Where `origin` ends up when the pointer is at `pointer`, given the
    /// current grab. The grabbed point tracks the pointer exactly. The result
    /// may have a negative extent.
    pub fn dragged(&self, origin: &Rect, pointer: Point) -> Option<Rect> {
        let target = pointer.offset_from(&self.grab_offset);
        match self.grabbed? {
            Grab::Handle(handle) => Some(handle.drag(origin, target)),
            Grab::Move => Some(Rect::new(target.x, target.y, origin.width, origin.height)),
        }
    }
}

impl Default for HandleSet {
    fn default() -> Self {
        Self::new(HANDLE_SIZE, HANDLE_TOLERANCE)
    }
}
