//! Selection, move and resize of placed items.
//!
//! A drag edits the document live so the host can repaint, but only the
//! state captured at press time and the state at release become a command.
//! Intermediate moves never reach the history.

use snapmark_core::constants::HANDLE_SIZE;
use snapmark_core::{handle_rects, Grab, HandleSet, ItemId, Point, Rect, HANDLE_COUNT};
use tracing::debug;

use crate::commands::Command;
use crate::document::Document;
use crate::model::AnnotationItem;

#[derive(Debug, Clone)]
struct EditGesture {
    before: AnnotationItem,
    origin: Rect,
    grab: Grab,
}

/// Tracks the selected item and turns pointer drags on it into edits.
#[derive(Debug, Clone, Default)]
pub struct ItemModifier {
    selected: Option<ItemId>,
    handles: HandleSet,
    gesture: Option<EditGesture>,
}

impl ItemModifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Selects `id`, ending any drag in progress without reverting it.
    pub fn select(&mut self, id: ItemId) {
        self.gesture = None;
        self.handles.release();
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.gesture = None;
        self.handles.release();
        self.selected = None;
    }

    /// Drops a selection whose item left the document. Returns true if the
    /// selection was cleared.
    pub fn sync(&mut self, document: &Document) -> bool {
        match self.selected {
            Some(id) if !document.contains(id) => {
                debug!("selected item {} no longer in document", id);
                self.clear_selection();
                true
            }
            _ => false,
        }
    }

    /// Handle squares around the selected item, when it can be resized.
    pub fn handles(&self, document: &Document) -> Option<[Rect; HANDLE_COUNT]> {
        let item = document.get(self.selected?)?;
        item.kind()
            .is_resizable()
            .then(|| handle_rects(&item.bounds(), HANDLE_SIZE))
    }

    /// Hit-tests a press. A handle of the selected item wins, then the
    /// topmost item under the pointer, which becomes selected and grabbed
    /// for moving. A miss clears the selection.
    pub fn press(&mut self, document: &Document, point: Point) -> Option<Grab> {
        self.gesture = None;
        self.handles.release();

        if let Some(item) = self.selected.and_then(|id| document.get(id)) {
            if item.kind().is_resizable() {
                let bounds = item.bounds();
                self.handles.update(&bounds);
                if let Some(handle) = self.handles.hit(&point) {
                    self.handles.grab_handle(handle, point, &bounds);
                    return self.begin(item.clone(), bounds);
                }
            }
        }

        match document.topmost_at(&point) {
            Some(item) => {
                let bounds = item.bounds();
                self.selected = Some(item.id);
                self.handles.update(&bounds);
                self.handles.grab_body(point, &bounds);
                self.begin(item.clone(), bounds)
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Applies the drag to the document so it can be drawn. Returns false
    /// when no drag is in progress or the item disappeared.
    pub fn drag_to(&mut self, document: &mut Document, point: Point) -> bool {
        let Some(gesture) = &self.gesture else {
            return false;
        };
        let Some(target) = self.handles.dragged(&gesture.origin, point) else {
            return false;
        };
        let mut item = gesture.before.clone();
        match gesture.grab {
            Grab::Handle(_) => item.shape = gesture.before.shape.mapped(&gesture.origin, &target),
            Grab::Move => {
                let delta = target.top_left().offset_from(&gesture.origin.top_left());
                item.shape.translate(delta.x, delta.y);
            }
        }
        match document.replace(item) {
            Ok(_) => true,
            Err(e) => {
                debug!("drag skipped: {}", e);
                false
            }
        }
    }

    /// Ends the drag. Yields one ModifyItem if the item actually changed.
    pub fn release(&mut self, document: &Document) -> Option<Command> {
        self.handles.release();
        let gesture = self.gesture.take()?;
        let after = document.get(gesture.before.id)?;
        (after != &gesture.before).then(|| Command::ModifyItem {
            before: gesture.before,
            after: after.clone(),
        })
    }

    /// Puts the item back the way it was at press time.
    pub fn cancel(&mut self, document: &mut Document) {
        self.handles.release();
        if let Some(gesture) = self.gesture.take() {
            if let Err(e) = document.replace(gesture.before) {
                debug!("cancel skipped: {}", e);
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// What the current drag holds, if any.
    pub fn grabbed(&self) -> Option<Grab> {
        self.gesture.as_ref().map(|g| g.grab)
    }

    /// A command translating the selected item by `(dx, dy)`.
    pub fn nudge(&self, document: &Document, dx: f64, dy: f64) -> Option<Command> {
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        self.modify_selected(document, |item| item.shape.translate(dx, dy))
    }

    /// A command removing the selected item.
    pub fn remove_selected(&self, document: &Document) -> Option<Command> {
        let id = self.selected?;
        let index = document.index_of(id)?;
        let item = document.get(id)?.clone();
        Some(Command::RemoveItem { item, index })
    }

    /// A command applying `edit` to the selected item, or `None` if the edit
    /// changed nothing.
    pub fn modify_selected(
        &self,
        document: &Document,
        edit: impl FnOnce(&mut AnnotationItem),
    ) -> Option<Command> {
        modify_item(document, self.selected?, edit)
    }

    fn begin(&mut self, before: AnnotationItem, origin: Rect) -> Option<Grab> {
        let grab = self.handles.grabbed()?;
        debug!("grab {:?} on {}", grab, before.id);
        self.gesture = Some(EditGesture {
            before,
            origin,
            grab,
        });
        Some(grab)
    }
}

/// A ModifyItem applying `edit` to item `id`, or `None` when the item is
/// missing or the edit is a no-op.
pub fn modify_item(
    document: &Document,
    id: ItemId,
    edit: impl FnOnce(&mut AnnotationItem),
) -> Option<Command> {
    let before = document.get(id)?;
    let mut after = before.clone();
    edit(&mut after);
    (after != *before).then(|| Command::ModifyItem {
        before: before.clone(),
        after,
    })
}
