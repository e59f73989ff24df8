//! Property setters for the current style and the selected item.
//!
//! While an existing item is being edited every setter records one
//! ModifyItem on it. Otherwise the setter changes the current style, which
//! is written back as the active tool's default.

use snapmark_core::{Color, EditorEvent, FillMode, ItemId, StyleProperties, Tool};
use tracing::debug;

use super::{AnnotationEditor, EditorMode};
use crate::model::ItemDetail;
use crate::selection::modify_item;

impl AnnotationEditor {
    pub fn set_color(&mut self, color: Color) {
        self.update_style(|style| style.color = color);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.update_style(|style| style.text_color = color);
    }

    pub fn set_width(&mut self, width: u32) {
        self.update_style(|style| style.width = width);
    }

    pub fn set_fill(&mut self, fill: FillMode) {
        self.update_style(|style| style.fill = fill);
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.update_style(|style| style.font_size = font_size);
    }

    /// The blur radius is shared: outside item editing it also becomes the
    /// blur default, whichever tool is active.
    pub fn set_blur_radius(&mut self, radius: u32) {
        self.update_style(|style| style.blur_radius = radius);
        if !self.state.editing_existing_item {
            self.defaults.store_blur_radius(radius);
        }
    }

    pub fn set_sticker(&mut self, sticker: impl Into<String>) {
        let sticker = sticker.into();
        self.update_style(move |style| style.sticker = sticker);
    }

    /// Number given to the first badge of a document without badges.
    pub fn set_first_badge_number(&mut self, number: u32) {
        self.factory.set_first_badge_number(number);
    }

    pub fn first_badge_number(&self) -> u32 {
        self.factory.first_badge_number()
    }

    /// Whether style setters currently target the selected item.
    pub fn is_editing_existing_item(&self) -> bool {
        self.state.editing_existing_item
    }

    /// Switches to the select tool with `id` selected, so the property
    /// setters edit that item. Returns false if `id` is not in the document.
    pub fn edit_item(&mut self, id: ItemId) -> bool {
        if !self.document.contains(id) {
            debug!("edit_item: {} not in document", id);
            return false;
        }
        if self.state.tool != Tool::Select {
            self.set_tool(Tool::Select);
        } else {
            self.cancel_gesture();
        }
        self.select(id)
    }

    /// Replaces the content of a text item.
    pub fn set_item_text(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        if self.mode != EditorMode::Idle {
            return false;
        }
        let text = text.into();
        let command = modify_item(&self.document, id, |item| {
            if let ItemDetail::Text { text: content } = &mut item.detail {
                *content = text;
            }
        });
        match command {
            Some(command) => {
                self.push_command(command);
                true
            }
            None => false,
        }
    }

    fn update_style(&mut self, edit: impl FnOnce(&mut StyleProperties)) {
        if self.state.editing_existing_item {
            if self.mode == EditorMode::Editing {
                debug!("style change ignored mid-drag");
                return;
            }
            if let Some(id) = self.modifier.selected() {
                if let Some(command) = modify_item(&self.document, id, |item| edit(&mut item.style))
                {
                    self.push_command(command);
                }
                return;
            }
        }

        let mut style = self.state.style.clone();
        edit(&mut style);
        if style == self.state.style {
            return;
        }
        self.state.style = style.clone();
        self.defaults.store_style(self.state.tool, style.clone());
        self.emit(EditorEvent::StyleChanged(style));
    }
}
