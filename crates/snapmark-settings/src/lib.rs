//! # Snapmark Settings
//!
//! Persistent tool defaults for the annotation editor.
//!
//! [`AnnotatorSettings`] implements [`snapmark_core::StyleSource`], so it can
//! be handed straight to the editor. Values are stored as TOML or JSON and
//! validated against the ranges the property pickers allow.

pub mod config;
pub mod error;

pub use config::{
    AnnotatorSettings, BLUR_RADIUS_RANGE, FIRST_BADGE_RANGE, FONT_SIZE_RANGE, WIDTH_RANGE,
};
pub use error::{SettingsError, SettingsResult};
