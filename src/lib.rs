//! # Snapmark
//!
//! An interactive vector annotation engine for screenshots and images.
//!
//! ## Architecture
//!
//! Snapmark is organized as a workspace with three crates:
//!
//! 1. **snapmark-core** - Geometry, resize handles, styles, input events, event bus
//! 2. **snapmark-annotator** - Items, document, commands, undo history, tool controller, crop
//! 3. **snapmark-settings** - Persistent per-tool defaults in TOML or JSON
//!
//! The host feeds pointer and key events to an [`AnnotationEditor`] and
//! paints the [`Scene`] it returns. Rendering, widgets and image encoding
//! stay on the host side.

pub use snapmark_annotator as annotator;
pub use snapmark_core as core;
pub use snapmark_settings as settings;

pub use snapmark_annotator::{
    AnnotationEditor, AnnotationItem, Background, Command, CropController, Document, EditorMode,
    ItemDetail, ItemKind, Scene, Shape, UndoStack, ZOrder,
};
pub use snapmark_core::{
    Color, EditorEvent, EventFilter, FillMode, ItemId, Key, KeyEvent, Modifiers, Point,
    PointerEvent, Rect, StyleProperties, StyleSource, Tool,
};
pub use snapmark_settings::{AnnotatorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr, filtered by `RUST_LOG` with `info` as the
/// baseline level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
