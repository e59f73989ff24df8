//! Shared tuning constants.

/// Side length of a resize handle square.
pub const HANDLE_SIZE: f64 = 10.0;

/// Extra margin around a handle within which a press still grabs it.
pub const HANDLE_TOLERANCE: f64 = 2.0;

/// Margin added around thin geometry (lines, strokes) when hit-testing items.
pub const HIT_TOLERANCE: f64 = 3.0;

/// Keyboard nudge distance.
pub const NUDGE_STEP: f64 = 1.0;

/// Keyboard nudge distance with Shift held.
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Default number of undoable commands kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Default edge length of a freshly placed sticker.
pub const STICKER_SIZE: f64 = 64.0;
