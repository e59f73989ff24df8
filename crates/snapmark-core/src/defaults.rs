//! Per-tool default styles.
//!
//! The editor reads a tool's defaults through [`StyleSource`] whenever that
//! tool is activated and writes style edits back through it. Persisting the
//! values is left to the implementor.

use std::collections::HashMap;

use crate::style::{Color, FillMode, StyleProperties};
use crate::types::Tool;

/// Source of default style values, keyed by tool.
pub trait StyleSource {
    /// Default style for `tool`.
    fn style_for(&self, tool: Tool) -> StyleProperties;

    /// Stores `style` as the new default for `tool`.
    fn store_style(&mut self, tool: Tool, style: StyleProperties);

    /// Stores the blur radius shared by every blur item, whatever tool is
    /// active.
    fn store_blur_radius(&mut self, radius: u32) {
        let mut style = self.style_for(Tool::Blur);
        style.blur_radius = radius;
        self.store_style(Tool::Blur, style);
    }

    /// The tool that was active last.
    fn selected_tool(&self) -> Tool {
        Tool::Select
    }

    fn set_selected_tool(&mut self, _tool: Tool) {}

    /// Number the first badge of an empty document receives.
    fn first_badge_number(&self) -> u32 {
        1
    }
}

/// Built-in default style for `tool`.
pub fn builtin_style(tool: Tool) -> StyleProperties {
    let base = StyleProperties::default();
    match tool {
        Tool::Highlighter => StyleProperties {
            color: Color::YELLOW,
            width: 10,
            ..base
        },
        Tool::Text => StyleProperties {
            color: Color::RED,
            text_color: Color::RED,
            width: 2,
            fill: FillMode::NoBorder,
            ..base
        },
        Tool::NumberBadge => StyleProperties {
            text_color: Color::WHITE,
            fill: FillMode::Filled,
            ..base
        },
        Tool::Blur => StyleProperties {
            fill: FillMode::Filled,
            ..base
        },
        Tool::Pointer => StyleProperties {
            fill: FillMode::Filled,
            ..base
        },
        Tool::Select
        | Tool::Arrow
        | Tool::Line
        | Tool::Rectangle
        | Tool::Ellipse
        | Tool::Sticker => base,
    }
}

/// Unpersisted [`StyleSource`] seeded from [`builtin_style`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStyles {
    overrides: HashMap<Tool, StyleProperties>,
    selected: Tool,
    first_badge_number: Option<u32>,
}

impl InMemoryStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_badge_number(mut self, number: u32) -> Self {
        self.first_badge_number = Some(number);
        self
    }
}

impl StyleSource for InMemoryStyles {
    fn style_for(&self, tool: Tool) -> StyleProperties {
        self.overrides
            .get(&tool)
            .cloned()
            .unwrap_or_else(|| builtin_style(tool))
    }

    fn store_style(&mut self, tool: Tool, style: StyleProperties) {
        self.overrides.insert(tool, style);
    }

    fn selected_tool(&self) -> Tool {
        self.selected
    }

    fn set_selected_tool(&mut self, tool: Tool) {
        self.selected = tool;
    }

    fn first_badge_number(&self) -> u32 {
        self.first_badge_number.unwrap_or(1)
    }
}
