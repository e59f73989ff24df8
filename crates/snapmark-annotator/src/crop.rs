//! Crop rectangle with eight resize handles.
//!
//! The controller works on one rectangle over the background image, not on
//! annotation items. Drags are computed from the rectangle as it was when
//! the handle was grabbed, so the grabbed point follows the pointer exactly
//! and the reported rectangle is always normalized and inside the image.

use snapmark_core::{Grab, HandleSet, Point, Rect, HANDLE_COUNT};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CropController {
    bounds: Rect,
    rect: Rect,
    origin: Rect,
    handles: HandleSet,
}

impl CropController {
    /// Starts with the crop rectangle covering the whole image.
    pub fn new(image_bounds: Rect) -> Self {
        let bounds = image_bounds.normalized();
        let mut handles = HandleSet::default();
        handles.update(&bounds);
        Self {
            bounds,
            rect: bounds,
            origin: bounds,
            handles,
        }
    }

    pub fn image_bounds(&self) -> Rect {
        self.bounds
    }

    /// Changes the image the crop applies to. The rectangle is re-clamped and
    /// any grab is dropped.
    pub fn set_image_bounds(&mut self, image_bounds: Rect) {
        self.bounds = image_bounds.normalized();
        self.handles.release();
        self.set_rect(self.rect);
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the rectangle, normalized and clamped to the image.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect.normalized().clamped_to(&self.bounds);
        self.handles.update(&self.rect);
    }

    pub fn handles(&self) -> &[Rect; HANDLE_COUNT] {
        self.handles.handles()
    }

    /// Recomputes handles for `rect` and grabs the first handle under
    /// `pointer`, falling back to moving the whole rectangle when the pointer
    /// is inside it.
    pub fn grab_handle(&mut self, pointer: Point, rect: &Rect) -> Option<Grab> {
        self.set_rect(*rect);
        self.origin = self.rect;
        let grab = self.handles.grab(pointer, &self.rect);
        debug!("crop grab at ({}, {}): {:?}", pointer.x, pointer.y, grab);
        grab
    }

    /// [`grab_handle`](Self::grab_handle) on the current rectangle.
    pub fn grab(&mut self, pointer: Point) -> Option<Grab> {
        let rect = self.rect;
        self.grab_handle(pointer, &rect)
    }

    /// Moves the grabbed handle (or the whole rectangle) to follow `pointer`.
    /// Returns the new rectangle, or `None` when nothing is grabbed.
    pub fn drag_to(&mut self, pointer: Point) -> Option<Rect> {
        let dragged = self.handles.dragged(&self.origin, pointer)?;
        let rect = match self.handles.grabbed()? {
            Grab::Handle(_) => dragged.normalized().clamped_to(&self.bounds),
            Grab::Move => dragged.shifted_inside(&self.bounds),
        };
        self.rect = rect;
        self.handles.update(&rect);
        Some(rect)
    }

    /// Clears the grab. Safe to call when nothing is grabbed.
    pub fn release_handle(&mut self) {
        self.handles.release();
        self.origin = self.rect;
    }

    pub fn is_handle_grabbed(&self) -> bool {
        self.handles.is_grabbed()
    }

    pub fn grabbed(&self) -> Option<Grab> {
        self.handles.grabbed()
    }

    /// Index of the grabbed handle in layout order.
    pub fn grabbed_index(&self) -> Option<usize> {
        self.handles.grabbed_index()
    }

    pub fn grab_offset(&self) -> Point {
        self.handles.grab_offset()
    }
}
