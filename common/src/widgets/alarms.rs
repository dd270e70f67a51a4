//! Alarm editor page: both alarm configurations side by side.
//!
//! The page is read-only rendering; edits come from the key handler in the
//! main loop, which mutates the selected [`Alarm`] in place and saves
//! explicitly. The selected column is drawn bright, the other dimmed.
//!
//! # Layout (two columns)
//!
//! ```text
//! ┌───────────────────┬───────────────────┐
//! │      ALARM 1      │      ALARM 2      │
//! │       07:00       │       99:99       │
//! │     ENABLED       │       OFF         │
//! │     Weekdays      │     MUSIC MODE    │
//! │  > Morning Mix    │  > None selected  │
//! │  VOL ███████──    │  VOL ████──────   │
//! │  FADE ON  SNZ 15  │  FADE OFF SNZ 10  │
//! └───────────────────┴───────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::alarm::{Alarm, AlarmSettings};
use crate::colors::{GRAY, GREEN, WHITE};
use crate::config::{HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{CENTERED, LABEL_FONT, LABEL_STYLE_GRAY, TITLE_STYLE_WHITE};

// =============================================================================
// Layout Constants
// =============================================================================

/// Width of one alarm column (screen split in half).
const COL_WIDTH: u32 = SCREEN_WIDTH / 2;

/// Baselines of the rows inside a column.
const TITLE_Y: i32 = 48;
const TIME_Y: i32 = 84;
const ENABLED_Y: i32 = 108;
const DAYS_Y: i32 = 130;
const PLAYLIST_Y: i32 = 150;
const VOLUME_Y: i32 = 172;
const FLAGS_Y: i32 = 196;

/// Volume bar geometry, centered in the column.
const VOLUME_BAR_WIDTH: u32 = 100;
const VOLUME_BAR_HEIGHT: u32 = 6;

// =============================================================================
// Content Helpers
// =============================================================================

/// Filled width of the volume bar for a 0.0..=1.0 volume.
///
/// Out-of-range values clamp instead of overflowing the bar.
pub fn volume_fill_width(volume: f64, bar_width: u32) -> u32 {
    (volume.clamp(0.0, 1.0) * f64::from(bar_width)) as u32
}

/// "FADE ON  SNZ 15" flag summary line.
fn flags_text(alarm: &Alarm) -> String<24> {
    let mut out: String<24> = String::new();
    let fade = if alarm.fade_in_enabled { "ON" } else { "OFF" };
    let _ = write!(out, "FADE {fade}  SNZ {}", alarm.snooze_duration);
    out
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the alarm editor page. `selected_id` is the alarm the key handler
/// currently edits (1 or 2).
pub fn draw_alarms_page<D>(display: &mut D, alarms: &AlarmSettings, selected_id: u8)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_alarm_column(display, &alarms.alarm1, 0, selected_id == 1);
    draw_alarm_column(display, &alarms.alarm2, COL_WIDTH as i32, selected_id == 2);

    // Column divider
    Line::new(
        Point::new(COL_WIDTH as i32, HEADER_HEIGHT as i32),
        Point::new(COL_WIDTH as i32, (SCREEN_HEIGHT - 1) as i32),
    )
    .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
    .draw(display)
    .ok();
}

fn draw_alarm_column<D>(display: &mut D, alarm: &Alarm, x: i32, selected: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let center_x = x + COL_WIDTH as i32 / 2;
    let bright = if selected { WHITE } else { GRAY };
    let label_style = MonoTextStyle::new(LABEL_FONT, bright);

    let mut title: String<12> = String::new();
    let _ = write!(title, "ALARM {}", alarm.id);
    Text::with_text_style(&title, Point::new(center_x, TITLE_Y), label_style, CENTERED)
        .draw(display)
        .ok();

    // Time in the large font; only the selected column gets full brightness
    let time = alarm.time_string();
    let time_style = if selected {
        TITLE_STYLE_WHITE
    } else {
        MonoTextStyle::new(&embedded_graphics::mono_font::ascii::FONT_10X20, GRAY)
    };
    Text::with_text_style(&time, Point::new(center_x, TIME_Y), time_style, CENTERED)
        .draw(display)
        .ok();

    let enabled_style = MonoTextStyle::new(LABEL_FONT, if alarm.is_enabled { GREEN } else { GRAY });
    let enabled = if alarm.is_enabled { "ENABLED" } else { "OFF" };
    Text::with_text_style(enabled, Point::new(center_x, ENABLED_Y), enabled_style, CENTERED)
        .draw(display)
        .ok();

    let days = if alarm.is_music_player_mode() {
        "MUSIC MODE".to_owned()
    } else {
        alarm.enabled_days_string()
    };
    Text::with_text_style(&days, Point::new(center_x, DAYS_Y), label_style, CENTERED)
        .draw(display)
        .ok();

    let mut playlist: String<32> = String::new();
    let _ = write!(playlist, "> ");
    for c in alarm.playlist_display_name().chars().take(24) {
        let _ = playlist.push(c);
    }
    Text::with_text_style(&playlist, Point::new(center_x, PLAYLIST_Y), LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();

    draw_volume_bar(display, center_x, alarm.volume, bright);

    Text::with_text_style(&flags_text(alarm), Point::new(center_x, FLAGS_Y), label_style, CENTERED)
        .draw(display)
        .ok();
}

fn draw_volume_bar<D>(display: &mut D, center_x: i32, volume: f64, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let bar_x = center_x - (VOLUME_BAR_WIDTH as i32) / 2;
    let bar_y = VOLUME_Y - VOLUME_BAR_HEIGHT as i32;

    // Track outline, then the filled portion
    Rectangle::new(Point::new(bar_x, bar_y), Size::new(VOLUME_BAR_WIDTH, VOLUME_BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_stroke(GRAY, 1))
        .draw(display)
        .ok();

    let fill = volume_fill_width(volume, VOLUME_BAR_WIDTH);
    if fill > 0 {
        Rectangle::new(Point::new(bar_x, bar_y), Size::new(fill, VOLUME_BAR_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_fill_width_scales() {
        assert_eq!(volume_fill_width(0.0, 100), 0);
        assert_eq!(volume_fill_width(0.5, 100), 50);
        assert_eq!(volume_fill_width(1.0, 100), 100);
        assert_eq!(volume_fill_width(0.7, 100), 70);
    }

    #[test]
    fn test_volume_fill_width_clamps_out_of_range() {
        assert_eq!(volume_fill_width(-0.5, 100), 0, "Negative volume clamps to empty");
        assert_eq!(volume_fill_width(1.5, 100), 100, "Overdriven volume clamps to full");
    }

    #[test]
    fn test_flags_text() {
        let mut alarm = Alarm::new(1);
        assert_eq!(flags_text(&alarm).as_str(), "FADE ON  SNZ 15");
        alarm.fade_in_enabled = false;
        alarm.snooze_duration = 5;
        assert_eq!(flags_text(&alarm).as_str(), "FADE OFF  SNZ 5");
    }

    #[test]
    fn test_columns_split_screen_evenly() {
        assert_eq!(COL_WIDTH * 2, SCREEN_WIDTH);
        assert!(VOLUME_BAR_WIDTH < COL_WIDTH, "Volume bar must fit inside a column");
    }
}
