//! # Event Bus Module
//!
//! Synchronous publish/subscribe used by the editor to tell its host about
//! tool, style, selection, document and history changes. Handlers run on the
//! publishing call, in subscription order.
//!
//! ## Usage
//!
//! ```rust
//! use snapmark_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//! use snapmark_core::Tool;
//!
//! let mut bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Tool]),
//!     |event| {
//!         if let EditorEvent::ToolChanged(tool) = event {
//!             println!("tool is now {tool}");
//!         }
//!     },
//! );
//!
//! bus.publish(EditorEvent::ToolChanged(Tool::Arrow));
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
