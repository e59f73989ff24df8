//! Tool controller: routes pointer and keyboard input to item creation,
//! selection editing and the history.
//!
//! This module is split into submodules:
//! - `state`: interaction mode and tool state
//! - `pointer`: press/move/release handling
//! - `keyboard`: shortcuts, nudge, delete, escape
//! - `properties`: style setters and the edit-existing-item gate
//! - `items`: document-level operations (delete, z-order, pixmaps, crop)

mod items;
mod keyboard;
mod pointer;
mod properties;
mod state;

pub use state::{EditorMode, ToolState};

use std::fmt;

use snapmark_core::{
    EditorEvent, EventBus, EventBusConfig, EventFilter, InMemoryStyles, ItemId, StyleSource, SubscriptionId, Tool,
};
use tracing::debug;

use crate::commands::Command;
use crate::document::{Background, Document};
use crate::factory::ItemFactory;
use crate::history::UndoStack;
use crate::model::AnnotationItem;
use crate::scene::Scene;
use crate::selection::ItemModifier;

/// The editing engine. Owns the document and its history; everything else
/// refers to items by identity.
pub struct AnnotationEditor {
    document: Document,
    history: UndoStack,
    state: ToolState,
    mode: EditorMode,
    factory: ItemFactory,
    modifier: ItemModifier,
    defaults: Box<dyn StyleSource>,
    events: EventBus,
}

impl AnnotationEditor {
    /// Editor over `background` using the built-in tool defaults.
    pub fn new(background: Background) -> Self {
        Self::with_style_source(background, InMemoryStyles::new())
    }

    /// Editor whose tool defaults come from, and are written back to,
    /// `defaults`.
    pub fn with_style_source(background: Background, defaults: impl StyleSource + 'static) -> Self {
        let tool = defaults.selected_tool();
        let style = defaults.style_for(tool);
        let factory = ItemFactory::new(defaults.first_badge_number());
        Self {
            document: Document::new(background),
            history: UndoStack::new(),
            state: ToolState::new(tool, style),
            mode: EditorMode::Idle,
            factory,
            modifier: ItemModifier::new(),
            defaults: Box::new(defaults),
            events: EventBus::new(),
        }
    }

    /// Replaces the history with an empty one bounded to `limit` commands.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = UndoStack::with_limit(limit);
        self
    }

    /// Replaces the event bus with one built from `config`. Existing
    /// subscriptions are dropped.
    pub fn with_event_config(mut self, config: EventBusConfig) -> Self {
        self.events = EventBus::with_config(config);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn items(&self) -> &[AnnotationItem] {
        self.document.items()
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.state.tool
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.modifier.selected()
    }

    pub fn selected_item(&self) -> Option<&AnnotationItem> {
        self.document.get(self.modifier.selected()?)
    }

    /// The item being drawn, between a creation press and its release.
    pub fn in_progress_item(&self) -> Option<&AnnotationItem> {
        self.state.current_item.as_ref()
    }

    pub fn style_source(&self) -> &dyn StyleSource {
        self.defaults.as_ref()
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn clear_event_history(&mut self) {
        self.events.clear_history();
    }

    pub fn subscribe<F>(&mut self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Everything a host needs to paint the current state.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            background: self.document.background(),
            items: self.document.items(),
            in_progress: self.state.current_item.as_ref(),
            selection: self.modifier.selected(),
            handles: self.modifier.handles(&self.document),
            tool: self.state.tool,
            mode: self.mode,
        }
    }

    /// Changes the active tool. A gesture in progress is aborted, the
    /// selection is dropped and the tool's defaults become the current style.
    pub fn set_tool(&mut self, tool: Tool) {
        self.cancel_gesture();
        self.state.editing_existing_item = false;
        self.clear_selection();

        self.state.tool = tool;
        self.state.style = self.defaults.style_for(tool);
        self.defaults.set_selected_tool(tool);
        tracing::info!("Tool changed to {}", tool);

        self.emit(EditorEvent::ToolChanged(tool));
        self.emit(EditorEvent::StyleChanged(self.state.style.clone()));
    }

    /// Reverts the last command. Ignored mid-gesture.
    pub fn undo(&mut self) -> bool {
        if self.mode != EditorMode::Idle {
            debug!("undo ignored while {:?}", self.mode);
            return false;
        }
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.document_changed();
        }
        undone
    }

    /// Re-applies the next command. Ignored mid-gesture.
    pub fn redo(&mut self) -> bool {
        if self.mode != EditorMode::Idle {
            debug!("redo ignored while {:?}", self.mode);
            return false;
        }
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.document_changed();
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Selects `id` if it is in the document.
    pub fn select(&mut self, id: ItemId) -> bool {
        if !self.document.contains(id) || self.mode != EditorMode::Idle {
            return false;
        }
        let previous = self.modifier.selected();
        self.modifier.select(id);
        self.selection_changed(previous);
        true
    }

    /// Drops the selection and leaves edit-existing-item mode.
    pub fn clear_selection(&mut self) {
        let previous = self.modifier.selected();
        self.modifier.clear_selection();
        self.selection_changed(previous);
    }

    /// Aborts the gesture in progress without recording anything. Returns
    /// false when there was none.
    pub fn cancel_gesture(&mut self) -> bool {
        match self.mode {
            EditorMode::Idle => return false,
            EditorMode::Creating => {
                debug!("creation aborted");
                self.state.current_item = None;
            }
            EditorMode::Editing => {
                debug!("edit aborted");
                self.modifier.cancel(&mut self.document);
                self.emit(EditorEvent::DocumentChanged);
            }
        }
        self.mode = EditorMode::Idle;
        true
    }

    fn push_command(&mut self, command: Command) {
        self.history.push(command, &mut self.document);
        self.document_changed();
    }

    fn document_changed(&mut self) {
        let previous = self.modifier.selected();
        if self.modifier.sync(&self.document) {
            self.selection_changed(previous);
        } else if self.state.editing_existing_item {
            let style = self.selected_item().map(|item| item.style.clone());
            if let Some(style) = style.filter(|s| *s != self.state.style) {
                self.state.style = style.clone();
                self.emit(EditorEvent::StyleChanged(style));
            }
        }
        self.emit(EditorEvent::DocumentChanged);
        self.emit(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }

    /// Reacts to the selection moving from `previous` to the modifier's
    /// current one. A selected item's style becomes the current style and
    /// style edits target it; with nothing selected the tool defaults return.
    fn selection_changed(&mut self, previous: Option<ItemId>) {
        let current = self.modifier.selected();
        if current == previous {
            return;
        }
        let style = current
            .and_then(|id| self.document.get(id))
            .map(|item| item.style.clone());
        match style {
            Some(style) => {
                self.state.style = style;
                self.state.editing_existing_item = true;
                self.emit(EditorEvent::SelectionChanged(current));
                self.emit(EditorEvent::StyleChanged(self.state.style.clone()));
            }
            None => {
                self.emit(EditorEvent::SelectionChanged(None));
                if self.state.editing_existing_item {
                    self.state.editing_existing_item = false;
                    self.state.style = self.defaults.style_for(self.state.tool);
                    self.emit(EditorEvent::StyleChanged(self.state.style.clone()));
                }
            }
        }
    }

    fn emit(&mut self, event: EditorEvent) {
        self.events.publish(event);
    }
}

impl fmt::Debug for AnnotationEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationEditor")
            .field("tool", &self.state.tool)
            .field("mode", &self.mode)
            .field("items", &self.document.len())
            .field("selection", &self.modifier.selected())
            .field("history", &self.history.cursor())
            .finish_non_exhaustive()
    }
}
