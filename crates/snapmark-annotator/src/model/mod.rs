//! Annotation item model.
//!
//! An [`AnnotationItem`] is a tagged variant: the [`ItemDetail`] tag carries
//! the kind-specific data, while geometry ([`Shape`]) and the style record
//! are common to every kind. Per-kind behaviour is looked up through
//! [`ItemKind`] rather than through trait objects.

mod shape;

pub use shape::Shape;

use serde::{Deserialize, Serialize};
use snapmark_core::constants::{HIT_TOLERANCE, STICKER_SIZE};
use snapmark_core::{ItemId, Point, Rect, StyleProperties, Tool};

/// How an item's geometry grows during its creation drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMode {
    /// Start point fixed; each move replaces the end point.
    Drag,
    /// Each move appends a point.
    Freehand,
    /// Fixed-size box centred on the pointer; moves re-centre it.
    Stamp,
    /// Not created by a tool.
    Placed,
}

/// Kind tag of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Arrow,
    Line,
    Rectangle,
    Ellipse,
    Highlighter,
    Text,
    NumberBadge,
    Blur,
    Sticker,
    Pixmap,
    Pointer,
}

impl ItemKind {
    /// The kind a creation tool produces; `None` for the select tool.
    pub fn for_tool(tool: Tool) -> Option<ItemKind> {
        match tool {
            Tool::Select => None,
            Tool::Arrow => Some(ItemKind::Arrow),
            Tool::Line => Some(ItemKind::Line),
            Tool::Rectangle => Some(ItemKind::Rectangle),
            Tool::Ellipse => Some(ItemKind::Ellipse),
            Tool::Highlighter => Some(ItemKind::Highlighter),
            Tool::Text => Some(ItemKind::Text),
            Tool::NumberBadge => Some(ItemKind::NumberBadge),
            Tool::Blur => Some(ItemKind::Blur),
            Tool::Sticker => Some(ItemKind::Sticker),
            Tool::Pointer => Some(ItemKind::Pointer),
        }
    }

    /// The tool that creates this kind. Pixmaps are placed, not drawn.
    pub fn tool(self) -> Option<Tool> {
        match self {
            ItemKind::Arrow => Some(Tool::Arrow),
            ItemKind::Line => Some(Tool::Line),
            ItemKind::Rectangle => Some(Tool::Rectangle),
            ItemKind::Ellipse => Some(Tool::Ellipse),
            ItemKind::Highlighter => Some(Tool::Highlighter),
            ItemKind::Text => Some(Tool::Text),
            ItemKind::NumberBadge => Some(Tool::NumberBadge),
            ItemKind::Blur => Some(Tool::Blur),
            ItemKind::Sticker => Some(Tool::Sticker),
            ItemKind::Pointer => Some(Tool::Pointer),
            ItemKind::Pixmap => None,
        }
    }

    pub fn creation(self) -> CreationMode {
        match self {
            ItemKind::Arrow
            | ItemKind::Line
            | ItemKind::Rectangle
            | ItemKind::Ellipse
            | ItemKind::Text
            | ItemKind::Blur => CreationMode::Drag,
            ItemKind::Highlighter => CreationMode::Freehand,
            ItemKind::NumberBadge | ItemKind::Sticker | ItemKind::Pointer => CreationMode::Stamp,
            ItemKind::Pixmap => CreationMode::Placed,
        }
    }

    /// Whether the selection shows resize handles for this kind. Badges and
    /// pointers keep the size their style gives them.
    pub fn is_resizable(self) -> bool {
        !matches!(self, ItemKind::NumberBadge | ItemKind::Pointer)
    }

    /// Initial geometry for a creation press at `start`.
    pub fn initial_shape(self, start: Point, style: &StyleProperties) -> Shape {
        match self {
            ItemKind::Arrow | ItemKind::Line => Shape::segment_at(start),
            ItemKind::Highlighter => Shape::stroke_at(start),
            ItemKind::NumberBadge | ItemKind::Sticker | ItemKind::Pointer => {
                let (w, h) = self.stamp_size(style);
                Shape::frame(&Rect::centered(start, w, h))
            }
            ItemKind::Rectangle
            | ItemKind::Ellipse
            | ItemKind::Text
            | ItemKind::Blur
            | ItemKind::Pixmap => Shape::frame_at(start),
        }
    }

    /// Size of a stamp placed with `style`.
    pub fn stamp_size(self, style: &StyleProperties) -> (f64, f64) {
        match self {
            ItemKind::NumberBadge => {
                let d = f64::from(style.font_size) * 2.0;
                (d, d)
            }
            ItemKind::Pointer => {
                let d = f64::from(style.width) * 4.0 + 8.0;
                (d, d)
            }
            ItemKind::Sticker => (STICKER_SIZE, STICKER_SIZE),
            _ => (0.0, 0.0),
        }
    }
}

/// Kind tag plus kind-specific data. Font size, blur radius and sticker
/// identifier live in the item's style record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemDetail {
    Arrow,
    Line,
    Rectangle,
    Ellipse,
    Highlighter,
    Text { text: String },
    NumberBadge { number: u32 },
    Blur,
    Sticker,
    Pixmap { source: String },
    Pointer,
}

impl ItemDetail {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetail::Arrow => ItemKind::Arrow,
            ItemDetail::Line => ItemKind::Line,
            ItemDetail::Rectangle => ItemKind::Rectangle,
            ItemDetail::Ellipse => ItemKind::Ellipse,
            ItemDetail::Highlighter => ItemKind::Highlighter,
            ItemDetail::Text { .. } => ItemKind::Text,
            ItemDetail::NumberBadge { .. } => ItemKind::NumberBadge,
            ItemDetail::Blur => ItemKind::Blur,
            ItemDetail::Sticker => ItemKind::Sticker,
            ItemDetail::Pixmap { .. } => ItemKind::Pixmap,
            ItemDetail::Pointer => ItemKind::Pointer,
        }
    }
}

/// One placed annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationItem {
    pub id: ItemId,
    pub shape: Shape,
    pub style: StyleProperties,
    pub detail: ItemDetail,
}

impl AnnotationItem {
    pub fn new(id: ItemId, shape: Shape, style: StyleProperties, detail: ItemDetail) -> Self {
        Self {
            id,
            shape,
            style,
            detail,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.detail.kind()
    }

    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    pub fn is_degenerate(&self) -> bool {
        self.shape.is_degenerate()
    }

    /// Hit test widened by half the stroke width.
    pub fn contains(&self, point: &Point) -> bool {
        let tolerance = HIT_TOLERANCE + f64::from(self.style.width) / 2.0;
        self.shape.contains(point, tolerance)
    }

    /// Adds a freehand point. No-op for other creation modes.
    pub fn append_point(&mut self, point: Point) {
        if self.kind().creation() == CreationMode::Freehand {
            self.shape.append_point(point);
        }
    }

    /// Replaces the creation end point. No-op unless the kind is dragged out.
    pub fn set_endpoint(&mut self, point: Point) {
        if self.kind().creation() == CreationMode::Drag {
            self.shape.set_end(point);
        }
    }

    /// Grows an in-progress item towards `point` the way its kind is created.
    pub fn grow_to(&mut self, point: Point) {
        match self.kind().creation() {
            CreationMode::Drag => self.set_endpoint(point),
            CreationMode::Freehand => self.append_point(point),
            CreationMode::Stamp => self.shape.recenter(point),
            CreationMode::Placed => {}
        }
    }

    /// Copy of this item moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> AnnotationItem {
        let mut item = self.clone();
        item.shape.translate(dx, dy);
        item
    }

    pub fn text(&self) -> Option<&str> {
        match &self.detail {
            ItemDetail::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn badge_number(&self) -> Option<u32> {
        match self.detail {
            ItemDetail::NumberBadge { number } => Some(number),
            _ => None,
        }
    }
}
