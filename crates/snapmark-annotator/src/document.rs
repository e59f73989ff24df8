//! The annotated document: background plus items in paint order.

use serde::{Deserialize, Serialize};
use snapmark_core::{Error, ItemId, Point, Rect, Result};

use crate::model::AnnotationItem;

/// Background image reference. Pixel data lives with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    pub width: f64,
    pub height: f64,
    /// Host-side identifier of the image, if any.
    pub source: Option<String>,
    /// Top-left of the visible region in the original image. Cropping moves it.
    pub offset: Point,
}

impl Background {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            source: None,
            offset: Point::ZERO,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Full copy of the document content, used by crop commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub background: Background,
    pub items: Vec<AnnotationItem>,
}

/// Owns every item. Position in `items` is the z-order, last on top.
#[derive(Debug, Clone, Default)]
pub struct Document {
    items: Vec<AnnotationItem>,
    background: Background,
    next_id: u64,
}

impl Document {
    pub fn new(background: Background) -> Self {
        Self {
            items: Vec::new(),
            background,
            next_id: 1,
        }
    }

    /// Hands out a fresh identity. Identities are never reused.
    pub fn allocate_id(&mut self) -> ItemId {
        self.next_id = self.next_id.max(1);
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    pub fn items(&self) -> &[AnnotationItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    pub fn get(&self, id: ItemId) -> Option<&AnnotationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut AnnotationItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    /// Inserts `item` at z-position `index`.
    pub fn insert(&mut self, item: AnnotationItem, index: usize) -> Result<()> {
        if self.contains(item.id) {
            return Err(Error::DuplicateItem(item.id));
        }
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.bump_next_id(item.id);
        self.items.insert(index, item);
        Ok(())
    }

    /// Appends `item` on top of the others.
    pub fn push(&mut self, item: AnnotationItem) -> Result<()> {
        let len = self.items.len();
        self.insert(item, len)
    }

    /// Removes the item and reports where it was.
    pub fn remove(&mut self, id: ItemId) -> Result<(usize, AnnotationItem)> {
        let index = self.index_of(id).ok_or(Error::ItemNotFound(id))?;
        Ok((index, self.items.remove(index)))
    }

    /// Swaps in a new version of an existing item, returning the old one.
    pub fn replace(&mut self, item: AnnotationItem) -> Result<AnnotationItem> {
        let slot = self.get_mut(item.id).ok_or(Error::ItemNotFound(item.id))?;
        Ok(std::mem::replace(slot, item))
    }

    /// Moves an item to z-position `to`, returning its previous position.
    pub fn move_item(&mut self, id: ItemId, to: usize) -> Result<usize> {
        let from = self.index_of(id).ok_or(Error::ItemNotFound(id))?;
        if to >= self.items.len() {
            return Err(Error::IndexOutOfRange {
                index: to,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(from)
    }

    /// Topmost item under `point`.
    pub fn topmost_at(&self, point: &Point) -> Option<&AnnotationItem> {
        self.items.iter().rev().find(|item| item.contains(point))
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            background: self.background.clone(),
            items: self.items.clone(),
        }
    }

    /// Replaces the whole content. Identity allocation stays ahead of every
    /// restored item.
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.background = snapshot.background;
        self.items = snapshot.items;
        let max = self.items.iter().map(|item| item.id).max();
        if let Some(id) = max {
            self.bump_next_id(id);
        }
    }

    /// Drops every item. Identities keep counting up.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn bump_next_id(&mut self, id: ItemId) {
        if id.0 >= self.next_id {
            self.next_id = id.0.saturating_add(1);
        }
    }
}
