//! Keyboard handling for the tool controller.

use snapmark_core::constants::{NUDGE_STEP, NUDGE_STEP_LARGE};
use snapmark_core::{Key, KeyEvent, Tool};

use super::{AnnotationEditor, EditorMode};

impl AnnotationEditor {
    /// Handles a key press. Returns true when the key did something.
    pub fn key_press(&mut self, event: KeyEvent) -> bool {
        if event.is_undo() {
            return self.undo();
        }
        if event.is_redo() {
            return self.redo();
        }

        if event.key == Key::Escape {
            if self.cancel_gesture() {
                return true;
            }
            if self.modifier.selected().is_some() {
                self.clear_selection();
                return true;
            }
            return false;
        }

        if self.mode != EditorMode::Idle {
            return false;
        }

        let step = if event.modifiers.shift {
            NUDGE_STEP_LARGE
        } else {
            NUDGE_STEP
        };
        match event.key {
            Key::Delete | Key::Backspace => self.delete_selected(),
            Key::Left => self.nudge_selected(-step, 0.0),
            Key::Right => self.nudge_selected(step, 0.0),
            Key::Up => self.nudge_selected(0.0, -step),
            Key::Down => self.nudge_selected(0.0, step),
            Key::Char(c) if !event.modifiers.ctrl && !event.modifiers.alt => {
                match Tool::from_shortcut(c) {
                    Some(tool) => {
                        self.set_tool(tool);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Key releases carry no meaning for the editor.
    pub fn key_release(&mut self, _event: KeyEvent) -> bool {
        false
    }
}
