//! Paintable view of the editor state.

use serde::Serialize;
use snapmark_core::{ItemId, Rect, Tool, HANDLE_COUNT};

use crate::document::Background;
use crate::editor::EditorMode;
use crate::model::AnnotationItem;

/// Borrowed snapshot of what a host draws: the background, the items in
/// paint order, the item being drawn and the selection handles.
#[derive(Debug, Clone, Serialize)]
pub struct Scene<'a> {
    pub background: &'a Background,
    pub items: &'a [AnnotationItem],
    pub in_progress: Option<&'a AnnotationItem>,
    pub selection: Option<ItemId>,
    pub handles: Option<[Rect; HANDLE_COUNT]>,
    pub tool: Tool,
    pub mode: EditorMode,
}

impl Scene<'_> {
    /// Items in paint order, the one being drawn last.
    pub fn paint_order(&self) -> impl Iterator<Item = &AnnotationItem> {
        self.items.iter().chain(self.in_progress)
    }
}
