//! Simulated platform services.
//!
//! The desktop simulator has no real weather service, GPS, or music
//! library, so each collaborator trait gets a deterministic stand-in:
//!
//! - [`SimulatedWeather`] synthesizes a stable pseudo-forecast from the
//!   query (the same city always gets the same weather) and can be switched
//!   "offline" to exercise the failure path.
//! - [`SimulatedLocation`] authorizes on request and reports a fixed fix.
//! - [`SimulatedMusic`] authorizes on request and resolves one storefront.

use chrono::{Datelike, NaiveDate};
use nightstand_common::location::{Coordinates, LocationAuthorization, LocationProvider};
use nightstand_common::music::{MusicAuthorization, MusicProvider};
use nightstand_common::weather::{DailyForecast, WeatherProvider, WeatherQuery, WeatherReport};

/// Conditions the simulator cycles through, paired with provider symbols.
const CONDITIONS: [(&str, &str); 7] = [
    ("Clear", "sun.max"),
    ("Partly Cloudy", "cloud.sun"),
    ("Cloudy", "cloud"),
    ("Light Rain", "cloud.rain"),
    ("Thunderstorms", "cloud.bolt"),
    ("Fog", "fog"),
    ("Snow", "cloud.snow"),
];

const WEEKDAYS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

// =============================================================================
// Weather
// =============================================================================

/// Deterministic weather generator.
pub struct SimulatedWeather {
    /// First forecast day; normally today.
    start_date: NaiveDate,
    /// When set, every fetch fails with a network error (X key toggles).
    pub offline: bool,
}

impl SimulatedWeather {
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date, offline: false }
    }

    /// Stable seed per query so a city keeps its weather across refreshes.
    fn seed_for(query: &WeatherQuery) -> u32 {
        match query {
            WeatherQuery::City(name) => name
                .bytes()
                .fold(0x9e37u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b))),
            WeatherQuery::Coordinates(c) => {
                (c.latitude * 100.0) as u32 ^ ((c.longitude * 100.0) as u32).rotate_left(16)
            }
        }
    }

    /// Small xorshift step for spreading the seed across forecast days.
    fn next(state: &mut u32) -> u32 {
        let mut x = *state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        *state = x;
        x
    }
}

impl WeatherProvider for SimulatedWeather {
    fn fetch(&mut self, query: &WeatherQuery) -> Result<WeatherReport, String> {
        if self.offline {
            return Err("Network unavailable".to_owned());
        }

        let mut state = Self::seed_for(query).max(1);
        let base_temp_c = 5.0 + (Self::next(&mut state) % 25) as f32;
        let (condition, symbol) = CONDITIONS[Self::next(&mut state) as usize % CONDITIONS.len()];

        let mut daily = Vec::with_capacity(7);
        for offset in 0u64..7 {
            let date = self
                .start_date
                .checked_add_days(chrono::Days::new(offset))
                .unwrap_or(self.start_date);
            let swing = (Self::next(&mut state) % 8) as f32;
            let (_, day_symbol) = CONDITIONS[Self::next(&mut state) as usize % CONDITIONS.len()];
            daily.push(DailyForecast {
                weekday: WEEKDAYS[date.weekday().num_days_from_monday() as usize].to_owned(),
                high_c: base_temp_c + swing,
                low_c: base_temp_c + swing - 8.0,
                symbol: day_symbol.to_owned(),
            });
        }

        Ok(WeatherReport {
            current_temp_c: base_temp_c,
            condition: condition.to_owned(),
            symbol: symbol.to_owned(),
            daily,
        })
    }
}

// =============================================================================
// Location
// =============================================================================

/// Fixed-position location service that authorizes on first request.
#[derive(Default)]
pub struct SimulatedLocation {
    authorization: LocationAuthorization,
}

impl SimulatedLocation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocationProvider for SimulatedLocation {
    fn request_permission(&mut self) -> LocationAuthorization {
        if self.authorization == LocationAuthorization::NotDetermined {
            self.authorization = LocationAuthorization::Authorized;
        }
        self.authorization
    }

    fn authorization(&self) -> LocationAuthorization {
        self.authorization
    }

    fn current_location(&self) -> Option<Coordinates> {
        (self.authorization == LocationAuthorization::Authorized)
            .then_some(Coordinates { latitude: 37.7749, longitude: -122.4194 })
    }
}

// =============================================================================
// Music
// =============================================================================

/// Music library stand-in for the diagnostics page.
#[derive(Default)]
pub struct SimulatedMusic {
    status: MusicAuthorization,
}

impl SimulatedMusic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MusicProvider for SimulatedMusic {
    fn status(&self) -> MusicAuthorization {
        self.status
    }

    fn request_authorization(&mut self) -> MusicAuthorization {
        if self.status == MusicAuthorization::NotDetermined {
            self.status = MusicAuthorization::Authorized;
        }
        self.status
    }

    fn storefront(&self) -> Result<String, String> {
        match self.status {
            MusicAuthorization::Authorized => Ok("us".to_owned()),
            _ => Err("Not authorized".to_owned()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
