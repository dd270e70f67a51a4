//! Weather forecast page: current conditions plus a 7-day strip.
//!
//! The page renders whatever the [`WeatherState`] knows right now; it never
//! waits on a fetch. With no report yet it shows a placeholder ("Loading
//! forecast..." while pending, the failure message after an error, or the
//! "Weather Forecast" banner before the first fetch). Once a report exists
//! it stays on screen through later failures and refreshes.
//!
//! # Layout
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │            72F                             │  current temp (24pt)
//! │           Clear                            │  condition text
//! ├────┬────┬────┬────┬────┬────┬────┬─────────┤
//! │MON │TUE │WED │THU │FRI │SAT │SUN │         │
//! │SUN │RAIN│CLDY│SUN │SUN │STRM│FOG │         │  7 day cells
//! │H 75│H 68│H 70│H 74│H 77│H 71│H 66│         │
//! │L 58│L 55│L 57│L 59│L 61│L 60│L 54│         │
//! └────┴────┴────┴────┴────┴────┴────┴─────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use heapless::String;

use crate::clock::convert_temperature;
use crate::colors::GRAY;
use crate::config::{CENTER_X, CENTER_Y, FORECAST_COL_WIDTH, FORECAST_DAYS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::styles::{
    CENTERED, LABEL_STYLE_GRAY, LABEL_STYLE_ORANGE, LABEL_STYLE_RED, LABEL_STYLE_WHITE, VALUE_STYLE_WHITE,
};
use crate::weather::{FetchState, WeatherState};

// =============================================================================
// Layout Constants
// =============================================================================

/// Baseline of the large current-temperature readout.
const CURRENT_TEMP_POS: Point = Point::new(CENTER_X, 64);

/// Baseline of the condition text under the temperature.
const CONDITION_POS: Point = Point::new(CENTER_X, 84);

/// Divider between current conditions and the day strip.
const STRIP_DIVIDER_Y: i32 = 100;

/// Baselines of the four lines inside a day cell.
const DAY_NAME_Y: i32 = 120;
const DAY_SYMBOL_Y: i32 = 150;
const DAY_HIGH_Y: i32 = 190;
const DAY_LOW_Y: i32 = 205;

/// Gray stroke style for dividers (1px).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

// =============================================================================
// Content Helpers
// =============================================================================

/// Map a provider symbol id to a short cell label.
///
/// The provider uses dotted symbol names ("sun.max", "cloud.rain"); cells
/// have room for four characters. Unknown symbols render as dashes rather
/// than failing.
pub fn symbol_glyph(symbol: &str) -> &'static str {
    match symbol.split('.').next().unwrap_or("") {
        "sun" => "SUN",
        "moon" => "MOON",
        "cloud" if symbol.contains("rain") => "RAIN",
        "cloud" if symbol.contains("snow") => "SNOW",
        "cloud" if symbol.contains("bolt") => "STRM",
        "cloud" => "CLDY",
        "wind" => "WIND",
        "snowflake" => "SNOW",
        "fog" => "FOG",
        _ => "----",
    }
}

/// The placeholder line to show when no report is available, or `None`
/// when a report exists and the strip should render.
pub fn placeholder_text(state: &WeatherState) -> Option<&str> {
    if state.report().is_some() {
        return None;
    }
    Some(match state.fetch_state() {
        FetchState::Pending => "Loading forecast...",
        FetchState::Failed(message) => message,
        FetchState::Idle | FetchState::Ready(_) => "Weather Forecast",
    })
}

/// "72F" / "22C" current temperature text.
fn current_temp_text(temp_c: f32, fahrenheit: bool) -> String<8> {
    let mut out: String<8> = String::new();
    let unit = if fahrenheit { 'F' } else { 'C' };
    let _ = write!(out, "{}{unit}", convert_temperature(temp_c, fahrenheit));
    out
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the forecast page from the current weather state.
pub fn draw_forecast_page<D>(display: &mut D, state: &WeatherState, fahrenheit: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(placeholder) = placeholder_text(state) {
        let style = match state.fetch_state() {
            FetchState::Failed(_) => LABEL_STYLE_RED,
            _ => LABEL_STYLE_ORANGE,
        };
        Text::with_text_style(placeholder, Point::new(CENTER_X, CENTER_Y), style, CENTERED)
            .draw(display)
            .ok();
        return;
    }

    // Placeholder check above guarantees a report
    let Some(report) = state.report() else { return };

    // Current conditions
    Text::with_text_style(
        &current_temp_text(report.current_temp_c, fahrenheit),
        CURRENT_TEMP_POS,
        VALUE_STYLE_WHITE,
        CENTERED,
    )
    .draw(display)
    .ok();
    Text::with_text_style(&report.condition, CONDITION_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    // A refresh in flight is indicated without disturbing the cached data
    if state.is_pending() {
        Text::with_text_style("refreshing...", Point::new(CENTER_X, 34), LABEL_STYLE_GRAY, CENTERED)
            .draw(display)
            .ok();
    }

    Line::new(
        Point::new(0, STRIP_DIVIDER_Y),
        Point::new((SCREEN_WIDTH - 1) as i32, STRIP_DIVIDER_Y),
    )
    .into_styled(DIVIDER_STYLE)
    .draw(display)
    .ok();

    // Day strip
    for (index, day) in report.daily.iter().take(FORECAST_DAYS).enumerate() {
        let center_x = (index as u32 * FORECAST_COL_WIDTH + FORECAST_COL_WIDTH / 2) as i32;

        Text::with_text_style(&day.weekday, Point::new(center_x, DAY_NAME_Y), LABEL_STYLE_GRAY, CENTERED)
            .draw(display)
            .ok();
        Text::with_text_style(
            symbol_glyph(&day.symbol),
            Point::new(center_x, DAY_SYMBOL_Y),
            LABEL_STYLE_WHITE,
            CENTERED,
        )
        .draw(display)
        .ok();

        let mut high: String<8> = String::new();
        let _ = write!(high, "H {}", convert_temperature(day.high_c, fahrenheit));
        Text::with_text_style(&high, Point::new(center_x, DAY_HIGH_Y), LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();

        let mut low: String<8> = String::new();
        let _ = write!(low, "L {}", convert_temperature(day.low_c, fahrenheit));
        Text::with_text_style(&low, Point::new(center_x, DAY_LOW_Y), LABEL_STYLE_GRAY, CENTERED)
            .draw(display)
            .ok();

        // Column divider to the right of every cell but the last
        if index + 1 < FORECAST_DAYS {
            let x = ((index as u32 + 1) * FORECAST_COL_WIDTH) as i32;
            Line::new(Point::new(x, STRIP_DIVIDER_Y), Point::new(x, (SCREEN_HEIGHT - 1) as i32))
                .into_styled(DIVIDER_STYLE)
                .draw(display)
                .ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{DailyForecast, WeatherReport};

    fn report() -> WeatherReport {
        WeatherReport {
            current_temp_c: 20.0,
            condition: "Clear".into(),
            symbol: "sun.max".into(),
            daily: vec![],
        }
    }

    // -------------------------------------------------------------------------
    // Symbol Mapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(symbol_glyph("sun.max"), "SUN");
        assert_eq!(symbol_glyph("moon.stars"), "MOON");
        assert_eq!(symbol_glyph("cloud.rain"), "RAIN");
        assert_eq!(symbol_glyph("cloud.heavyrain"), "RAIN");
        assert_eq!(symbol_glyph("cloud.snow"), "SNOW");
        assert_eq!(symbol_glyph("cloud.bolt"), "STRM");
        assert_eq!(symbol_glyph("cloud"), "CLDY");
        assert_eq!(symbol_glyph("fog"), "FOG");
    }

    #[test]
    fn test_unknown_symbol_renders_dashes() {
        assert_eq!(symbol_glyph("tornado"), "----");
        assert_eq!(symbol_glyph(""), "----");
    }

    // -------------------------------------------------------------------------
    // Placeholder Selection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_placeholder_before_first_fetch() {
        let state = WeatherState::new();
        assert_eq!(placeholder_text(&state), Some("Weather Forecast"));
    }

    #[test]
    fn test_placeholder_while_loading() {
        let mut state = WeatherState::new();
        state.begin_fetch();
        assert_eq!(placeholder_text(&state), Some("Loading forecast..."));
    }

    #[test]
    fn test_placeholder_shows_failure_message() {
        let mut state = WeatherState::new();
        state.begin_fetch();
        state.complete(Err("Location unavailable".into()));
        assert_eq!(placeholder_text(&state), Some("Location unavailable"));
    }

    #[test]
    fn test_no_placeholder_once_report_exists() {
        let mut state = WeatherState::new();
        state.begin_fetch();
        state.complete(Ok(report()));
        assert_eq!(placeholder_text(&state), None);

        // A pending refresh or later failure keeps the report on screen
        state.begin_fetch();
        assert_eq!(placeholder_text(&state), None);
        state.complete(Err("timeout".into()));
        assert_eq!(placeholder_text(&state), None);
    }

    // -------------------------------------------------------------------------
    // Temperature Text Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_current_temp_text_units() {
        assert_eq!(current_temp_text(20.0, true).as_str(), "68F");
        assert_eq!(current_temp_text(20.0, false).as_str(), "20C");
        assert_eq!(current_temp_text(-5.5, false).as_str(), "-5C");
    }
}
