//! Document-level operations: deletion, nudging, z-order, pixmaps, crop and
//! loading a new image.

use snapmark_core::{EditorEvent, ItemId, Rect};
use tracing::{debug, info};

use super::{AnnotationEditor, EditorMode};
use crate::arrange::{reorder_command, ZOrder};
use crate::commands::Command;
use crate::document::{Background, Document, DocumentSnapshot};
use crate::model::{AnnotationItem, ItemDetail, Shape};

impl AnnotationEditor {
    /// Removes the selected item. Returns false with nothing selected.
    pub fn delete_selected(&mut self) -> bool {
        if self.mode != EditorMode::Idle {
            return false;
        }
        match self.modifier.remove_selected(&self.document) {
            Some(command) => {
                self.push_command(command);
                true
            }
            None => false,
        }
    }

    /// Moves the selected item by `(dx, dy)` as one undo step.
    pub fn nudge_selected(&mut self, dx: f64, dy: f64) -> bool {
        if self.mode != EditorMode::Idle {
            return false;
        }
        match self.modifier.nudge(&self.document, dx, dy) {
            Some(command) => {
                self.push_command(command);
                true
            }
            None => false,
        }
    }

    /// Moves the selected item in the paint order.
    pub fn arrange(&mut self, order: ZOrder) -> bool {
        if self.mode != EditorMode::Idle {
            return false;
        }
        let Some(id) = self.modifier.selected() else {
            return false;
        };
        match reorder_command(&self.document, id, order) {
            Some(command) => {
                self.push_command(command);
                true
            }
            None => {
                debug!("{} already at {:?}", id, order);
                false
            }
        }
    }

    pub fn bring_to_front(&mut self) -> bool {
        self.arrange(ZOrder::Front)
    }

    pub fn send_to_back(&mut self) -> bool {
        self.arrange(ZOrder::Back)
    }

    pub fn bring_forward(&mut self) -> bool {
        self.arrange(ZOrder::Forward)
    }

    pub fn send_backward(&mut self) -> bool {
        self.arrange(ZOrder::Backward)
    }

    /// Places an image item covering `rect`. Returns its identity, or `None`
    /// mid-gesture or for an empty rectangle.
    pub fn insert_pixmap(&mut self, rect: Rect, source: impl Into<String>) -> Option<ItemId> {
        if self.mode != EditorMode::Idle {
            return None;
        }
        let rect = rect.normalized();
        if rect.is_degenerate() {
            debug!("pixmap with empty rect ignored");
            return None;
        }
        let id = self.document.allocate_id();
        let item = AnnotationItem::new(
            id,
            Shape::frame(&rect),
            self.state.style.clone(),
            ItemDetail::Pixmap {
                source: source.into(),
            },
        );
        let index = self.document.len();
        self.push_command(Command::AddItem { item, index });
        Some(id)
    }

    /// Crops the background to `rect`, shifting every item with it. The
    /// rectangle is clamped to the background first; an empty result or the
    /// full image changes nothing.
    pub fn apply_crop(&mut self, rect: Rect) -> bool {
        if self.mode != EditorMode::Idle {
            return false;
        }
        let background = self.document.background();
        let bounds = background.bounds();
        let rect = rect.normalized().clamped_to(&bounds);
        if rect.is_degenerate() || rect == bounds {
            debug!("crop to {:?} changes nothing", rect);
            return false;
        }

        let before = self.document.snapshot();
        let after = DocumentSnapshot {
            background: Background {
                width: rect.width,
                height: rect.height,
                source: background.source.clone(),
                offset: background.offset.translated(rect.x, rect.y),
            },
            items: before
                .items
                .iter()
                .map(|item| item.translated(-rect.x, -rect.y))
                .collect(),
        };
        info!(
            "Cropping to {}x{} at ({}, {})",
            rect.width, rect.height, rect.x, rect.y
        );
        self.push_command(Command::Crop {
            before: Box::new(before),
            after: Box::new(after),
        });
        true
    }

    /// Starts over on a new background. Items and history are dropped.
    pub fn load_image(&mut self, background: Background) {
        self.cancel_gesture();
        self.clear_selection();
        info!(
            "Loading {}x{} background",
            background.width, background.height
        );
        self.document = Document::new(background);
        self.history.clear();
        self.emit(EditorEvent::DocumentChanged);
        self.emit(EditorEvent::HistoryChanged {
            can_undo: false,
            can_redo: false,
        });
    }
}
