//! # Snapmark Annotator
//!
//! The annotation editing engine: item model and factory, the document and
//! its undo/redo history, the crop rectangle controller, selection editing
//! and the tool controller that ties them to pointer and keyboard input.
//!
//! ```rust
//! use snapmark_annotator::{AnnotationEditor, Background};
//! use snapmark_core::{PointerEvent, Tool};
//!
//! let mut editor = AnnotationEditor::new(Background::new(640.0, 480.0));
//! editor.set_tool(Tool::Rectangle);
//! editor.pointer_press(PointerEvent::at(10.0, 10.0));
//! editor.pointer_move(PointerEvent::at(30.0, 20.0));
//! editor.pointer_release(PointerEvent::at(50.0, 40.0));
//! assert_eq!(editor.items().len(), 1);
//!
//! editor.undo();
//! assert!(editor.items().is_empty());
//! ```

pub mod arrange;
pub mod commands;
pub mod crop;
pub mod document;
pub mod editor;
pub mod factory;
pub mod history;
pub mod model;
pub mod scene;
pub mod selection;

pub use arrange::{reorder_command, ZOrder};
pub use commands::Command;
pub use crop::CropController;
pub use document::{Background, Document, DocumentSnapshot};
pub use editor::{AnnotationEditor, EditorMode, ToolState};
pub use factory::ItemFactory;
pub use history::UndoStack;
pub use model::{AnnotationItem, CreationMode, ItemDetail, ItemKind, Shape};
pub use scene::Scene;
pub use selection::{modify_item, ItemModifier};
