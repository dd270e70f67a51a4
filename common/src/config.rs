//! Application configuration constants.
//!
//! Layout values that are fixed for the 320x240 display are pre-computed as
//! `const` so the rendering code never recalculates them per frame. Values
//! that must scale with an arbitrary bounding box (the seven-segment digit
//! layout) are expressed as ratios inside the widgets instead; only their
//! reference defaults live here.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (320x240 simulator panel).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time for the simulator loop (~30 FPS). The clock itself only
/// changes once per second; the loop runs faster to keep popups and input
/// responsive.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Simulated latency between issuing a weather fetch and its completion.
pub const WEATHER_FETCH_LATENCY: Duration = Duration::from_millis(1500);

// =============================================================================
// Seven-Segment Reference Proportions
// =============================================================================

/// Default segment stroke width in pixels, at the reference digit size.
/// Scaled proportionally by the clock face for other digit sizes.
pub const SEGMENT_STROKE: u32 = 12;

/// Default gap between segments in pixels, at the reference digit size.
pub const SEGMENT_GAP: u32 = 4;

/// Reference digit cell height the stroke/gap defaults were tuned against.
/// A digit drawn at height `h` uses stroke `SEGMENT_STROKE * h / REFERENCE_DIGIT_HEIGHT`.
pub const REFERENCE_DIGIT_HEIGHT: u32 = 160;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Status header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 24;

/// Clock face bounding box: horizontal margin on each side.
pub const FACE_MARGIN_X: u32 = 10;

/// Clock face bounding box: vertical margin above and below.
pub const FACE_MARGIN_Y: u32 = 20;

/// Screen center X coordinate. Used for centering popups and text.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate. Used for centering popups and text.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Number of day cells in the forecast strip.
pub const FORECAST_DAYS: usize = 7;

/// Width of one forecast day cell (7 columns across the full screen width).
pub const FORECAST_COL_WIDTH: u32 = SCREEN_WIDTH / FORECAST_DAYS as u32;
