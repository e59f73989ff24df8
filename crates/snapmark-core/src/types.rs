//! Identity and tool enums shared across the workspace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an annotation item within a document.
///
/// Identities are never reused or renumbered; removing an item only takes it
/// out of the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The active creation/editing tool.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    #[default]
    Select,
    Arrow,
    Line,
    Rectangle,
    Ellipse,
    Highlighter,
    Text,
    NumberBadge,
    Blur,
    Sticker,
    Pointer,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 11] = [
        Tool::Select,
        Tool::Arrow,
        Tool::Line,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Highlighter,
        Tool::Text,
        Tool::NumberBadge,
        Tool::Blur,
        Tool::Sticker,
        Tool::Pointer,
    ];

    /// Whether pressing with this tool creates a new item.
    pub fn creates_items(self) -> bool {
        self != Tool::Select
    }

    /// Single-letter keyboard shortcut.
    pub fn shortcut(self) -> char {
        match self {
            Tool::Select => 's',
            Tool::Arrow => 'a',
            Tool::Line => 'l',
            Tool::Rectangle => 'r',
            Tool::Ellipse => 'e',
            Tool::Highlighter => 'h',
            Tool::Text => 't',
            Tool::NumberBadge => 'n',
            Tool::Blur => 'b',
            Tool::Sticker => 'k',
            Tool::Pointer => 'p',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Tool> {
        let c = c.to_ascii_lowercase();
        Self::ALL.into_iter().find(|t| t.shortcut() == c)
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn key(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Arrow => "arrow",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Ellipse => "ellipse",
            Tool::Highlighter => "highlighter",
            Tool::Text => "text",
            Tool::NumberBadge => "number_badge",
            Tool::Blur => "blur",
            Tool::Sticker => "sticker",
            Tool::Pointer => "pointer",
        }
    }

    pub fn from_key(key: &str) -> Option<Tool> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Select => "Select",
            Tool::Arrow => "Arrow",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Highlighter => "Highlighter",
            Tool::Text => "Text",
            Tool::NumberBadge => "Number",
            Tool::Blur => "Blur",
            Tool::Sticker => "Sticker",
            Tool::Pointer => "Pointer",
        };
        f.write_str(name)
    }
}
