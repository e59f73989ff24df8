//! Annotator settings
//!
//! Persistent per-tool defaults read by the editor through
//! [`StyleSource`]. Settings round-trip through TOML or JSON strings; reading
//! and writing the text is up to the host. Parsed values are checked against
//! the ranges the property pickers offer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use snapmark_core::constants::DEFAULT_HISTORY_LIMIT;
use snapmark_core::{builtin_style, StyleProperties, StyleSource, Tool};
use tracing::warn;

use crate::error::{SettingsError, SettingsResult};

/// Allowed stroke widths.
pub const WIDTH_RANGE: (u32, u32) = (1, 20);
/// Allowed font sizes.
pub const FONT_SIZE_RANGE: (u32, u32) = (10, 40);
/// Allowed blur radii.
pub const BLUR_RADIUS_RANGE: (u32, u32) = (1, 20);
/// Allowed first badge numbers.
pub const FIRST_BADGE_RANGE: (u32, u32) = (1, 100);

/// Settings for the annotation editor.
///
/// Tools without an entry in `tools` fall back to their built-in style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorSettings {
    /// Tool that was active when the settings were last saved
    pub selected_tool: Tool,
    /// Blur radius shared by every blur item
    pub blur_radius: u32,
    /// Number of the first badge in a document without badges
    pub first_badge_number: u32,
    /// Maximum undo depth, 0 for unbounded
    pub history_limit: usize,
    /// Stored style per tool, keyed by [`Tool::key`]
    pub tools: BTreeMap<String, StyleProperties>,
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            selected_tool: Tool::Select,
            blur_radius: builtin_style(Tool::Blur).blur_radius,
            first_badge_number: 1,
            history_limit: DEFAULT_HISTORY_LIMIT,
            tools: BTreeMap::new(),
        }
    }
}

impl AnnotatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML settings.
    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse and validate JSON settings.
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value against its allowed range.
    pub fn validate(&self) -> SettingsResult<()> {
        check_range("blur_radius", self.blur_radius, BLUR_RADIUS_RANGE)?;
        check_range(
            "first_badge_number",
            self.first_badge_number,
            FIRST_BADGE_RANGE,
        )?;

        for (key, style) in &self.tools {
            if Tool::from_key(key).is_none() {
                warn!("Rejecting settings for unknown tool '{}'", key);
                return Err(SettingsError::invalid(
                    format!("tools.{}", key),
                    "unknown tool",
                ));
            }
            check_range(&format!("tools.{}.width", key), style.width, WIDTH_RANGE)?;
            check_range(
                &format!("tools.{}.font_size", key),
                style.font_size,
                FONT_SIZE_RANGE,
            )?;
        }
        Ok(())
    }

    /// Stored style for `tool`, if one was saved.
    pub fn tool_style(&self, tool: Tool) -> Option<&StyleProperties> {
        self.tools.get(tool.key())
    }

    pub fn set_tool_style(&mut self, tool: Tool, style: StyleProperties) {
        self.tools.insert(tool.key().to_string(), style);
    }
}

impl StyleSource for AnnotatorSettings {
    fn style_for(&self, tool: Tool) -> StyleProperties {
        let mut style = self
            .tool_style(tool)
            .cloned()
            .unwrap_or_else(|| builtin_style(tool));
        if tool == Tool::Blur {
            style.blur_radius = self.blur_radius;
        }
        style
    }

    fn store_style(&mut self, tool: Tool, style: StyleProperties) {
        if tool == Tool::Blur {
            self.blur_radius = style.blur_radius;
        }
        self.set_tool_style(tool, style);
    }

    fn store_blur_radius(&mut self, radius: u32) {
        self.blur_radius = radius;
    }

    fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    fn set_selected_tool(&mut self, tool: Tool) {
        self.selected_tool = tool;
    }

    fn first_badge_number(&self) -> u32 {
        self.first_badge_number
    }
}

fn check_range(key: &str, value: u32, (min, max): (u32, u32)) -> SettingsResult<()> {
    if (min..=max).contains(&value) {
        return Ok(());
    }
    warn!("Rejecting {} = {}", key, value);
    Err(SettingsError::invalid(
        key,
        format!("{} is outside {}..={}", value, min, max),
    ))
}
