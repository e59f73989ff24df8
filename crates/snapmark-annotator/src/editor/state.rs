//! Tool controller state.

use serde::Serialize;
use snapmark_core::{StyleProperties, Tool};

use crate::model::AnnotationItem;

/// Interaction mode of the tool controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EditorMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A new item is being drawn.
    Creating,
    /// A selected item is being moved or resized.
    Editing,
}

/// Active tool, current style record and the item being drawn.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    pub tool: Tool,
    /// Style new items copy, or the selected item's style while
    /// `editing_existing_item` is set.
    pub style: StyleProperties,
    /// Style edits go to the selected item instead of the tool defaults.
    pub editing_existing_item: bool,
    /// Owned here only between a creation press and its release.
    pub current_item: Option<AnnotationItem>,
}

impl ToolState {
    pub fn new(tool: Tool, style: StyleProperties) -> Self {
        Self {
            tool,
            style,
            editing_existing_item: false,
            current_item: None,
        }
    }
}
