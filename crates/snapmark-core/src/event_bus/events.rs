//! Editor notification types.

use serde::{Deserialize, Serialize};

use crate::style::StyleProperties;
use crate::types::{ItemId, Tool};

/// Notification emitted by the editor after its public state changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// The active tool changed.
    ToolChanged(Tool),
    /// The current style record changed (tool defaults or the edited item).
    StyleChanged(StyleProperties),
    /// The selection changed; `None` means nothing is selected.
    SelectionChanged(Option<ItemId>),
    /// Items or background changed.
    DocumentChanged,
    /// The undo/redo availability may have changed.
    HistoryChanged { can_undo: bool, can_redo: bool },
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::ToolChanged(_) => EventCategory::Tool,
            EditorEvent::StyleChanged(_) => EventCategory::Style,
            EditorEvent::SelectionChanged(_) => EventCategory::Selection,
            EditorEvent::DocumentChanged => EventCategory::Document,
            EditorEvent::HistoryChanged { .. } => EventCategory::History,
        }
    }

    /// Short description for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::ToolChanged(tool) => format!("tool changed to {tool}"),
            EditorEvent::StyleChanged(_) => "style changed".to_string(),
            EditorEvent::SelectionChanged(Some(id)) => format!("selected {id}"),
            EditorEvent::SelectionChanged(None) => "selection cleared".to_string(),
            EditorEvent::DocumentChanged => "document changed".to_string(),
            EditorEvent::HistoryChanged { can_undo, can_redo } => {
                format!("history changed (undo: {can_undo}, redo: {can_redo})")
            }
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Tool,
    Style,
    Selection,
    Document,
    History,
}
