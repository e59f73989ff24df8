//! # Snapmark Core
//!
//! Core types shared by the Snapmark crates: rectangle and point math, the
//! eight-handle resize layout, tool and style records, input events, the
//! per-tool defaults trait and the editor's observer bus.

pub mod constants;
pub mod defaults;
pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod handles;
pub mod input;
pub mod style;
pub mod types;

pub use defaults::{builtin_style, InMemoryStyles, StyleSource};
pub use error::{Error, Result};
pub use event_bus::{EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter, SubscriptionId};
pub use geometry::{Point, Rect};
pub use handles::{handle_rects, Grab, Handle, HandleSet, HANDLE_COUNT};
pub use input::{Key, KeyEvent, Modifiers, PointerEvent};
pub use style::{Color, FillMode, StyleProperties};
pub use types::{ItemId, Tool};
