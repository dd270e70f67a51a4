//! Non-modal popup overlays for settings feedback.
//!
//! Popups appear centered on screen with a white border over a red
//! background, one at a time (most recent wins). They are non-modal: input
//! keeps working while a popup is visible. All geometry is pre-computed
//! `const`; only the message varies.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::colors::{RED, WHITE};
use crate::config::{CENTER_X, CENTER_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::settings::{DisplayColor, TemperatureUnit, TimeFormat};
use crate::styles::{CENTERED, TITLE_STYLE_WHITE};

// =============================================================================
// Popup Layout Constants
// =============================================================================

/// Popup dimensions (single message line).
const POPUP_WIDTH: u32 = 200;
const POPUP_HEIGHT: u32 = 50;

/// X/Y position (centered on screen).
const POPUP_X: i32 = (SCREEN_WIDTH - POPUP_WIDTH) as i32 / 2;
const POPUP_Y: i32 = (SCREEN_HEIGHT - POPUP_HEIGHT) as i32 / 2;

/// Message baseline (single line, vertically centered).
const TEXT_POS: Point = Point::new(CENTER_X, CENTER_Y + 5);

/// Border rectangle (outer white rectangle, 3px margin).
const BORDER_POS: Point = Point::new(POPUP_X - 3, POPUP_Y - 3);
const BORDER_SIZE: Size = Size::new(POPUP_WIDTH + 6, POPUP_HEIGHT + 6);

/// Background rectangle (inner red rectangle).
const BG_POS: Point = Point::new(POPUP_X, POPUP_Y);
const BG_SIZE: Size = Size::new(POPUP_WIDTH, POPUP_HEIGHT);

/// White fill style for the popup border.
const WHITE_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Red fill style for the popup background.
const RED_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);

// =============================================================================
// Message Helpers
// =============================================================================

/// Uppercase color name for the color popup.
pub const fn color_label(color: DisplayColor) -> &'static str {
    match color {
        DisplayColor::Blue => "BLUE",
        DisplayColor::White => "WHITE",
        DisplayColor::Yellow => "YELLOW",
        DisplayColor::Red => "RED",
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the popup chrome and a single centered message line.
fn draw_popup<D>(display: &mut D, message: &str)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(BORDER_POS, BORDER_SIZE).into_styled(WHITE_FILL).draw(display).ok();
    Rectangle::new(BG_POS, BG_SIZE).into_styled(RED_FILL).draw(display).ok();
    Text::with_text_style(message, TEXT_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}

/// "COLOR: BLUE" after cycling the segment color.
pub fn draw_color_popup<D>(display: &mut D, color: DisplayColor)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut message: String<16> = String::new();
    let _ = write!(message, "COLOR: {}", color_label(color));
    draw_popup(display, &message);
}

/// "UNIT: F" / "UNIT: C" after toggling the temperature unit.
pub fn draw_unit_popup<D>(display: &mut D, unit: TemperatureUnit)
where
    D: DrawTarget<Color = Rgb565>,
{
    let message = match unit {
        TemperatureUnit::Fahrenheit => "UNIT: F",
        TemperatureUnit::Celsius => "UNIT: C",
    };
    draw_popup(display, message);
}

/// "12 HOUR" / "24 HOUR" after toggling the time format.
pub fn draw_format_popup<D>(display: &mut D, format: TimeFormat)
where
    D: DrawTarget<Color = Rgb565>,
{
    let message = match format {
        TimeFormat::TwelveHour => "12 HOUR",
        TimeFormat::TwentyFourHour => "24 HOUR",
    };
    draw_popup(display, message);
}

/// "ALARM n SAVED" after committing the alarm editor.
pub fn draw_alarm_saved_popup<D>(display: &mut D, alarm_id: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut message: String<16> = String::new();
    let _ = write!(message, "ALARM {alarm_id} SAVED");
    draw_popup(display, &message);
}

/// "REFRESHING..." when a weather fetch is started by hand.
pub fn draw_weather_refresh_popup<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_popup(display, "REFRESHING...");
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_labels() {
        assert_eq!(color_label(DisplayColor::Blue), "BLUE");
        assert_eq!(color_label(DisplayColor::White), "WHITE");
        assert_eq!(color_label(DisplayColor::Yellow), "YELLOW");
        assert_eq!(color_label(DisplayColor::Red), "RED");
    }

    #[test]
    fn test_popup_fits_on_screen() {
        assert!(POPUP_X >= 3 && POPUP_Y >= 3, "Border must not clip the screen edge");
        assert!(POPUP_X as u32 + POPUP_WIDTH + 3 <= SCREEN_WIDTH);
        assert!(POPUP_Y as u32 + POPUP_HEIGHT + 3 <= SCREEN_HEIGHT);
    }
}
