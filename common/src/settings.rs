//! User preferences with key-by-key persistence.
//!
//! Each preference is stored under its own key in the [`KvStore`], as a
//! plain string. Unknown or missing values fall back to the documented
//! defaults (blue, fahrenheit, 24-hour, empty city) - a bad value in
//! storage can dim the experience but never break startup.
//!
//! | key             | values                          | default      |
//! |-----------------|---------------------------------|--------------|
//! | `segmentColor`    | blue, white, yellow, red        | blue         |
//! | `temperatureUnit` | fahrenheit, celsius             | fahrenheit   |
//! | `timeFormat`      | 12hour, 24hour                  | 24hour       |
//! | `manualCity`      | free text                       | "" (use GPS) |

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, RED, WHITE, YELLOW};
use crate::storage::KvStore;

const KEY_SEGMENT_COLOR: &str = "segmentColor";
const KEY_TEMPERATURE_UNIT: &str = "temperatureUnit";
const KEY_TIME_FORMAT: &str = "timeFormat";
const KEY_MANUAL_CITY: &str = "manualCity";

// =============================================================================
// Preference Enums
// =============================================================================

/// Segment color for the seven-segment display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayColor {
    #[default]
    Blue,
    White,
    Yellow,
    Red,
}

impl DisplayColor {
    /// Map to the Rgb565 the widgets draw with.
    pub const fn as_rgb(self) -> Rgb565 {
        match self {
            Self::Blue => BLUE,
            Self::White => WHITE,
            Self::Yellow => YELLOW,
            Self::Red => RED,
        }
    }

    /// The persisted string form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::White => "white",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Parse the persisted form; anything unknown is the default blue.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "white" => Self::White,
            "yellow" => Self::Yellow,
            "red" => Self::Red,
            _ => Self::Blue,
        }
    }

    /// The next color in the settings cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Blue => Self::White,
            Self::White => Self::Yellow,
            Self::Yellow => Self::Red,
            Self::Red => Self::Blue,
        }
    }
}

/// Unit used for all displayed temperatures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit",
            Self::Celsius => "celsius",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "celsius" => Self::Celsius,
            _ => Self::Fahrenheit,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }
}

/// 12- or 24-hour clock face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeFormat {
    TwelveHour,
    #[default]
    TwentyFourHour,
}

impl TimeFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TwelveHour => "12hour",
            Self::TwentyFourHour => "24hour",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "12hour" => Self::TwelveHour,
            _ => Self::TwentyFourHour,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }
}

// =============================================================================
// Settings Container
// =============================================================================

/// The user's preferences. One instance owned by the app, mutated only from
/// input handlers, read by the render path on every tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub display_color: DisplayColor,
    pub temperature_unit: TemperatureUnit,
    pub time_format: TimeFormat,
    /// Manual weather location override. Empty means "use device location".
    pub manual_city: String,
}

impl AppSettings {
    /// Load from the store, field by field, with per-field defaults.
    pub fn load(store: &KvStore) -> Self {
        Self {
            display_color: store
                .get_str(KEY_SEGMENT_COLOR)
                .map(DisplayColor::from_str_or_default)
                .unwrap_or_default(),
            temperature_unit: store
                .get_str(KEY_TEMPERATURE_UNIT)
                .map(TemperatureUnit::from_str_or_default)
                .unwrap_or_default(),
            time_format: store
                .get_str(KEY_TIME_FORMAT)
                .map(TimeFormat::from_str_or_default)
                .unwrap_or_default(),
            manual_city: store.get_str(KEY_MANUAL_CITY).unwrap_or_default().to_owned(),
        }
    }

    /// Write every field to the store under its own key.
    pub fn persist(&self, store: &mut KvStore) {
        store.set_str(KEY_SEGMENT_COLOR, self.display_color.as_str());
        store.set_str(KEY_TEMPERATURE_UNIT, self.temperature_unit.as_str());
        store.set_str(KEY_TIME_FORMAT, self.time_format.as_str());
        store.set_str(KEY_MANUAL_CITY, &self.manual_city);
    }

    /// True when the face runs in 12-hour mode.
    pub fn is_12_hour(&self) -> bool {
        self.time_format == TimeFormat::TwelveHour
    }

    /// True when temperatures display in Fahrenheit.
    pub fn is_fahrenheit(&self) -> bool {
        self.temperature_unit == TemperatureUnit::Fahrenheit
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Enum Encoding Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_display_color_round_trip() {
        for color in [DisplayColor::Blue, DisplayColor::White, DisplayColor::Yellow, DisplayColor::Red] {
            assert_eq!(DisplayColor::from_str_or_default(color.as_str()), color);
        }
    }

    #[test]
    fn test_unknown_color_falls_back_to_blue() {
        assert_eq!(DisplayColor::from_str_or_default("chartreuse"), DisplayColor::Blue);
        assert_eq!(DisplayColor::from_str_or_default(""), DisplayColor::Blue);
    }

    #[test]
    fn test_color_cycle_visits_all_four() {
        let mut color = DisplayColor::Blue;
        let mut seen = vec![color];
        for _ in 0..3 {
            color = color.next();
            seen.push(color);
        }
        assert_eq!(color.next(), DisplayColor::Blue, "Cycle returns to start");
        seen.dedup();
        assert_eq!(seen.len(), 4, "Cycle must visit every color once");
    }

    #[test]
    fn test_unit_and_format_round_trip() {
        for unit in [TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius] {
            assert_eq!(TemperatureUnit::from_str_or_default(unit.as_str()), unit);
        }
        for format in [TimeFormat::TwelveHour, TimeFormat::TwentyFourHour] {
            assert_eq!(TimeFormat::from_str_or_default(format.as_str()), format);
        }
    }

    #[test]
    fn test_toggles_are_involutions() {
        assert_eq!(TemperatureUnit::Fahrenheit.toggled().toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(TimeFormat::TwelveHour.toggled().toggled(), TimeFormat::TwelveHour);
    }

    // -------------------------------------------------------------------------
    // Defaults Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_documented_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.display_color, DisplayColor::Blue);
        assert_eq!(settings.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
        assert!(settings.manual_city.is_empty());
    }

    #[test]
    fn test_load_from_empty_store_is_default() {
        let store = KvStore::ephemeral();
        assert_eq!(AppSettings::load(&store), AppSettings::default());
    }

    // -------------------------------------------------------------------------
    // Persistence Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_persist_then_load_round_trips() {
        let mut store = KvStore::ephemeral();
        let settings = AppSettings {
            display_color: DisplayColor::Red,
            temperature_unit: TemperatureUnit::Celsius,
            time_format: TimeFormat::TwelveHour,
            manual_city: "Reykjavik".into(),
        };
        settings.persist(&mut store);
        assert_eq!(AppSettings::load(&store), settings);
    }

    #[test]
    fn test_fields_persist_under_their_own_keys() {
        let mut store = KvStore::ephemeral();
        AppSettings::default().persist(&mut store);
        assert_eq!(store.get_str("segmentColor"), Some("blue"));
        assert_eq!(store.get_str("temperatureUnit"), Some("fahrenheit"));
        assert_eq!(store.get_str("timeFormat"), Some("24hour"));
        assert_eq!(store.get_str("manualCity"), Some(""));
    }

    #[test]
    fn test_garbage_store_values_load_as_defaults() {
        let mut store = KvStore::ephemeral();
        store.set_str("segmentColor", "mauve");
        store.set_str("temperatureUnit", "kelvin");
        store.set_str("timeFormat", "13hour");
        assert_eq!(AppSettings::load(&store), AppSettings::default());
    }

    #[test]
    fn test_convenience_predicates() {
        let mut settings = AppSettings::default();
        assert!(!settings.is_12_hour());
        assert!(settings.is_fahrenheit());
        settings.time_format = TimeFormat::TwelveHour;
        settings.temperature_unit = TemperatureUnit::Celsius;
        assert!(settings.is_12_hour());
        assert!(!settings.is_fahrenheit());
    }
}
