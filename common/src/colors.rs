//! Color constants for the nightstand clock.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to small LCD panels and to the simulator display,
//! and requires no conversion when writing to the display buffer.
//!
//! The four segment colors (blue, white, yellow, red) are the user-selectable
//! display colors; see [`crate::settings::DisplayColor`] for the mapping from
//! the persisted setting to these constants.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Background everywhere; this is a nightstand clock.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Selectable segment color and default text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Selectable segment color; also error text.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). The default segment color.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Selectable segment color.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure green (0, 63, 0). Diagnostics page header and log prompt.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Orange accent. Used for diagnostics log text and forecast placeholders.
/// RGB565: (31, 32, 0) - slightly darker than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for divider lines and dimmed labels. Subtle enough to not light
/// up a dark room.
/// RGB565: (8, 16, 8) - roughly 25% brightness.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);
