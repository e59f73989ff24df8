//! Item construction for the active tool.

use snapmark_core::{ItemId, Point, StyleProperties, Tool};

use crate::document::Document;
use crate::model::{AnnotationItem, ItemDetail, ItemKind};

/// Builds new items for a creation press.
#[derive(Debug, Clone)]
pub struct ItemFactory {
    first_badge_number: u32,
}

impl ItemFactory {
    pub fn new(first_badge_number: u32) -> Self {
        Self { first_badge_number }
    }

    pub fn first_badge_number(&self) -> u32 {
        self.first_badge_number
    }

    pub fn set_first_badge_number(&mut self, number: u32) {
        self.first_badge_number = number;
    }

    /// Creates the item `tool` draws, starting at `start`. The style is copied
    /// so later panel edits do not reach placed items. Returns `None` for the
    /// select tool.
    pub fn create_item(
        &self,
        id: ItemId,
        tool: Tool,
        start: Point,
        style: &StyleProperties,
        document: &Document,
    ) -> Option<AnnotationItem> {
        let kind = ItemKind::for_tool(tool)?;
        let detail = match kind {
            ItemKind::Arrow => ItemDetail::Arrow,
            ItemKind::Line => ItemDetail::Line,
            ItemKind::Rectangle => ItemDetail::Rectangle,
            ItemKind::Ellipse => ItemDetail::Ellipse,
            ItemKind::Highlighter => ItemDetail::Highlighter,
            ItemKind::Text => ItemDetail::Text {
                text: String::new(),
            },
            ItemKind::NumberBadge => ItemDetail::NumberBadge {
                number: self.next_badge_number(document),
            },
            ItemKind::Blur => ItemDetail::Blur,
            ItemKind::Sticker => ItemDetail::Sticker,
            ItemKind::Pointer => ItemDetail::Pointer,
            ItemKind::Pixmap => return None,
        };
        let shape = kind.initial_shape(start, style);
        Some(AnnotationItem::new(id, shape, style.clone(), detail))
    }

    /// One past the highest badge number in `document`, or the configured
    /// first number when there are no badges.
    pub fn next_badge_number(&self, document: &Document) -> u32 {
        document
            .items()
            .iter()
            .filter_map(AnnotationItem::badge_number)
            .max()
            .map_or(self.first_badge_number, |n| n.saturating_add(1))
    }
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new(1)
    }
}
