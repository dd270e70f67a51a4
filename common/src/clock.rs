//! Wall-clock formatting and unit conversion.
//!
//! Everything here is a pure function of its inputs; the only stateful
//! element driving these is the once-per-second tick in the simulator loop.
//! The derived [`ClockFaceSpec`] is recomputed on every tick and handed to
//! the clock face widget - it is never persisted.

use core::fmt::Write;

use chrono::Timelike;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::String;

use crate::settings::AppSettings;

/// Convert a 0-23 hour to its displayed value under a 12/24-hour policy.
///
/// In 12-hour mode this maps 0 and 12 to 12 and wraps all other hours into
/// 1-11 (`((h + 11) % 12) + 1`). In 24-hour mode the hour passes through.
pub const fn display_hour(hour: u32, use_12_hour: bool) -> u32 {
    if use_12_hour { ((hour + 11) % 12) + 1 } else { hour }
}

/// Format a wall-clock time as "HH:MM" under the given hour policy.
///
/// Both fields are always zero-padded to two digits, even in 12-hour mode
/// ("03:05", not "3:05"): the fixed four-digit face layout depends on the
/// string always being five characters, and the face suppresses the leading
/// zero glyph itself when appropriate.
pub fn format_clock<T: Timelike>(time: &T, use_12_hour: bool) -> String<8> {
    let hour = display_hour(time.hour(), use_12_hour);
    let mut out: String<8> = String::new();
    let _ = write!(out, "{:02}:{:02}", hour, time.minute());
    out
}

/// True iff the local hour is 12 or later.
pub fn is_afternoon<T: Timelike>(time: &T) -> bool {
    time.hour() >= 12
}

/// Convert a Celsius reading to the display unit, truncated toward zero.
///
/// Forecast temperatures arrive in Celsius from the weather provider; the
/// display shows whole degrees in the user's configured unit.
pub fn convert_temperature(celsius: f32, to_fahrenheit: bool) -> i32 {
    if to_fahrenheit {
        (celsius * 9.0 / 5.0 + 32.0) as i32
    } else {
        celsius as i32
    }
}

/// Everything the clock face widget needs for one frame.
///
/// Recomputed from the current time and settings on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFaceSpec {
    /// Display time, always "HH:MM" with both fields zero-padded.
    pub time_text: String<8>,
    /// Segment color from the user's color setting.
    pub color: Rgb565,
    /// Whether the face runs in 12-hour mode (leading-zero suppression
    /// plus AM/PM glyph).
    pub show_12_hour_indicator: bool,
    /// Selects "PM" over "AM" when the indicator is shown.
    pub is_afternoon: bool,
}

impl ClockFaceSpec {
    /// Derive the face spec for the current tick.
    pub fn derive<T: Timelike>(now: &T, settings: &AppSettings) -> Self {
        let use_12_hour = settings.is_12_hour();
        Self {
            time_text: format_clock(now, use_12_hour),
            color: settings.display_color.as_rgb(),
            show_12_hour_indicator: use_12_hour,
            is_afternoon: is_afternoon(now),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
