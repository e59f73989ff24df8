//! Reversible document mutations.
//!
//! Every command carries complete snapshots of what it changes, so applying
//! or reverting it twice in a row leaves the document as applying it once.

use snapmark_core::{ItemId, Result};
use tracing::debug;

use crate::document::{Document, DocumentSnapshot};
use crate::model::AnnotationItem;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Insert `item` at z-position `index`.
    AddItem { item: AnnotationItem, index: usize },
    /// Take `item` out of z-position `index`.
    RemoveItem { item: AnnotationItem, index: usize },
    /// Swap one version of an item for another.
    ModifyItem {
        before: AnnotationItem,
        after: AnnotationItem,
    },
    /// Move an item from one z-position to another.
    Reorder { id: ItemId, from: usize, to: usize },
    /// Replace background and items wholesale.
    Crop {
        before: Box<DocumentSnapshot>,
        after: Box<DocumentSnapshot>,
    },
}

impl Command {
    /// Forward action. A stale target makes this a logged no-op.
    pub fn apply(&self, document: &mut Document) {
        if let Err(e) = self.try_apply(document) {
            debug!("{} skipped: {}", self.name(), e);
        }
    }

    /// Reverse action. A stale target makes this a logged no-op.
    pub fn revert(&self, document: &mut Document) {
        if let Err(e) = self.try_revert(document) {
            debug!("undo {} skipped: {}", self.name(), e);
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddItem { .. } => "Add Item",
            Command::RemoveItem { .. } => "Remove Item",
            Command::ModifyItem { .. } => "Modify Item",
            Command::Reorder { .. } => "Reorder",
            Command::Crop { .. } => "Crop",
        }
    }

    /// The item this command targets, if it targets exactly one.
    pub fn target(&self) -> Option<ItemId> {
        match self {
            Command::AddItem { item, .. } | Command::RemoveItem { item, .. } => Some(item.id),
            Command::ModifyItem { after, .. } => Some(after.id),
            Command::Reorder { id, .. } => Some(*id),
            Command::Crop { .. } => None,
        }
    }

    fn try_apply(&self, document: &mut Document) -> Result<()> {
        match self {
            Command::AddItem { item, index } => {
                let index = (*index).min(document.len());
                document.insert(item.clone(), index)
            }
            Command::RemoveItem { item, .. } => document.remove(item.id).map(|_| ()),
            Command::ModifyItem { after, .. } => document.replace(after.clone()).map(|_| ()),
            Command::Reorder { id, to, .. } => document.move_item(*id, *to).map(|_| ()),
            Command::Crop { after, .. } => {
                document.restore(after.as_ref().clone());
                Ok(())
            }
        }
    }

    fn try_revert(&self, document: &mut Document) -> Result<()> {
        match self {
            Command::AddItem { item, .. } => document.remove(item.id).map(|_| ()),
            Command::RemoveItem { item, index } => {
                let index = (*index).min(document.len());
                document.insert(item.clone(), index)
            }
            Command::ModifyItem { before, .. } => document.replace(before.clone()).map(|_| ()),
            Command::Reorder { id, from, .. } => document.move_item(*id, *from).map(|_| ()),
            Command::Crop { before, .. } => {
                document.restore(before.as_ref().clone());
                Ok(())
            }
        }
    }
}
