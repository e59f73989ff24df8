//! Z-order changes.

use serde::{Deserialize, Serialize};
use snapmark_core::ItemId;

use crate::commands::Command;
use crate::document::Document;

/// Where an item moves in the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZOrder {
    /// On top of everything.
    Front,
    /// Below everything.
    Back,
    /// One step up.
    Forward,
    /// One step down.
    Backward,
}

impl ZOrder {
    /// Target position for an item currently at `from` among `len` items.
    pub fn target(self, from: usize, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            ZOrder::Front => last,
            ZOrder::Back => 0,
            ZOrder::Forward => (from + 1).min(last),
            ZOrder::Backward => from.saturating_sub(1),
        }
    }
}

/// A Reorder command for `id`, or `None` if the item is missing or already
/// where `order` would put it.
pub fn reorder_command(document: &Document, id: ItemId, order: ZOrder) -> Option<Command> {
    let from = document.index_of(id)?;
    let to = order.target(from, document.len());
    (from != to).then_some(Command::Reorder { id, from, to })
}
