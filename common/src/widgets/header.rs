//! Status header bar: date on the left, alarm badges on the right.
//!
//! The header is the only chrome on the clock page. It stays dim (small
//! font, thin divider) so it does not compete with the face in a dark
//! room. Badges appear for each enabled alarm, plus "MUSIC MODE" when
//! either alarm is set to the 99:99 sentinel.

use core::fmt::Write;

use chrono::{Datelike, NaiveDate};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::colors::GRAY;
use crate::config::{HEADER_HEIGHT, SCREEN_WIDTH};
use crate::styles::{LABEL_FONT, LEFT_ALIGNED, RIGHT_ALIGNED};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Baseline position of the date text (left edge with margin).
const DATE_POS: Point = Point::new(6, 15);

/// Baseline position of the badge text (right-aligned, 6px from edge).
const BADGE_POS: Point = Point::new((SCREEN_WIDTH - 6) as i32, 15);

/// Divider line under the header.
const DIVIDER_START: Point = Point::new(0, HEADER_HEIGHT as i32 - 1);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, HEADER_HEIGHT as i32 - 1);

/// Gray stroke style for the divider (1px).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Content Helpers
// =============================================================================

/// Uppercase date label like "WED AUG 7".
pub fn header_date_text(date: NaiveDate) -> String<16> {
    const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    let mut out: String<16> = String::new();
    let _ = write!(
        out,
        "{} {} {}",
        WEEKDAYS[date.weekday().num_days_from_monday() as usize],
        MONTHS[date.month0() as usize],
        date.day()
    );
    out
}

/// Join the badge labels with double spaces: "ALARM 1  MUSIC MODE".
pub fn badge_text(indicators: &[&str], music_mode: bool) -> String<48> {
    let mut out: String<48> = String::new();
    for (i, badge) in indicators.iter().enumerate() {
        if i > 0 {
            let _ = out.push_str("  ");
        }
        let _ = out.push_str(badge);
    }
    if music_mode {
        if !out.is_empty() {
            let _ = out.push_str("  ");
        }
        let _ = out.push_str("MUSIC MODE");
    }
    out
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the header bar in the user's display color.
pub fn draw_header<D>(display: &mut D, date: NaiveDate, indicators: &[&str], music_mode: bool, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(LABEL_FONT, color);

    Text::with_text_style(&header_date_text(date), DATE_POS, style, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let badges = badge_text(indicators, music_mode);
    if !badges.is_empty() {
        Text::with_text_style(&badges, BADGE_POS, style, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }

    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_text_format() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        assert_eq!(header_date_text(date).as_str(), "THU AUG 7");
    }

    #[test]
    fn test_date_text_single_digit_day_not_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(header_date_text(date).as_str(), "WED JAN 1");
    }

    #[test]
    fn test_badge_text_empty() {
        assert_eq!(badge_text(&[], false).as_str(), "");
    }

    #[test]
    fn test_badge_text_joins_with_double_space() {
        assert_eq!(badge_text(&["ALARM 1", "ALARM 2"], false).as_str(), "ALARM 1  ALARM 2");
    }

    #[test]
    fn test_badge_text_music_mode_appended() {
        assert_eq!(badge_text(&["ALARM 1"], true).as_str(), "ALARM 1  MUSIC MODE");
        assert_eq!(badge_text(&[], true).as_str(), "MUSIC MODE");
    }
}
