//! Pointer handling for the tool controller.

use snapmark_core::{EditorEvent, PointerEvent, Tool};
use tracing::debug;

use super::{AnnotationEditor, EditorMode};
use crate::commands::Command;

impl AnnotationEditor {
    /// Starts a gesture. With the select tool the press hit-tests the
    /// selection and the items; with any other tool it starts a new item.
    /// A press arriving mid-gesture is ignored.
    pub fn pointer_press(&mut self, event: PointerEvent) {
        if self.mode != EditorMode::Idle {
            debug!("press ignored while {:?}", self.mode);
            return;
        }
        let point = event.position;

        if self.state.tool == Tool::Select {
            let previous = self.modifier.selected();
            let grab = self.modifier.press(&self.document, point);
            self.selection_changed(previous);
            if grab.is_some() {
                self.mode = EditorMode::Editing;
                debug!("editing started at ({}, {})", point.x, point.y);
            }
            return;
        }

        self.clear_selection();
        let id = self.document.allocate_id();
        let item = self.factory.create_item(
            id,
            self.state.tool,
            point,
            &self.state.style,
            &self.document,
        );
        if let Some(item) = item {
            debug!("creating {:?} {}", item.kind(), item.id);
            self.state.current_item = Some(item);
            self.mode = EditorMode::Creating;
        }
    }

    /// Grows the item being drawn or drags the selection.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        match self.mode {
            EditorMode::Idle => {}
            EditorMode::Creating => {
                if let Some(item) = self.state.current_item.as_mut() {
                    item.grow_to(event.position);
                }
            }
            EditorMode::Editing => {
                if self.modifier.drag_to(&mut self.document, event.position) {
                    self.emit(EditorEvent::DocumentChanged);
                }
            }
        }
    }

    /// Finishes the gesture. A new item with no extent is dropped; anything
    /// else becomes exactly one command.
    pub fn pointer_release(&mut self, event: PointerEvent) {
        match self.mode {
            EditorMode::Idle => {}
            EditorMode::Creating => {
                self.mode = EditorMode::Idle;
                let Some(mut item) = self.state.current_item.take() else {
                    return;
                };
                item.grow_to(event.position);
                if item.is_degenerate() {
                    debug!("discarding degenerate {:?} {}", item.kind(), item.id);
                    return;
                }
                let index = self.document.len();
                self.push_command(Command::AddItem { item, index });
            }
            EditorMode::Editing => {
                self.mode = EditorMode::Idle;
                match self.modifier.release(&self.document) {
                    Some(command) => self.push_command(command),
                    None => debug!("edit released without change"),
                }
            }
        }
    }
}
