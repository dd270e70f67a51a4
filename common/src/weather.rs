//! Weather provider interface and fetch state.
//!
//! The weather service is an external collaborator behind a narrow trait:
//! one call per refresh trigger (startup, location change, manual city
//! change, user-requested refresh), returning either a full report or a
//! short human-readable error message. The rendering path never awaits a
//! fetch - it reads the latest cached state on every tick.
//!
//! Requests are single-flight: [`WeatherState::begin_fetch`] refuses to
//! start a request while one is pending, and the value delivered by
//! [`WeatherState::complete`] supersedes whatever was cached before.

use crate::location::Coordinates;

/// One day of the forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyForecast {
    /// Short weekday label ("MON", "TUE", ...).
    pub weekday: String,
    pub high_c: f32,
    pub low_c: f32,
    /// Provider symbol id ("sun.max", "cloud.rain", ...).
    pub symbol: String,
}

/// A complete fetch result: current conditions plus the daily forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    pub current_temp_c: f32,
    /// Condition text ("Clear", "Light Rain", ...).
    pub condition: String,
    /// Provider symbol id for the current conditions.
    pub symbol: String,
    /// Ordered daily forecast, today first.
    pub daily: Vec<DailyForecast>,
}

/// Where to fetch weather for.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherQuery {
    /// Device location from the location provider.
    Coordinates(Coordinates),
    /// Manual city override from settings.
    City(String),
}

/// External weather service. One outstanding call at a time; errors are
/// short display strings, never panics.
pub trait WeatherProvider {
    fn fetch(&mut self, query: &WeatherQuery) -> Result<WeatherReport, String>;
}

// =============================================================================
// Fetch State
// =============================================================================

/// Observable state of the single outstanding weather request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A request is in flight; the previous report (if any) stays readable.
    Pending,
    Ready(WeatherReport),
    Failed(String),
}

/// Latest weather knowledge plus the in-flight request bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct WeatherState {
    state: FetchState,
    /// Report kept visible while a refresh is pending or after a failure.
    last_report: Option<WeatherReport>,
}

impl WeatherState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a fetch. Returns `false` (and does nothing) when a
    /// request is already pending - requests are serialized, never stacked.
    pub fn begin_fetch(&mut self) -> bool {
        if matches!(self.state, FetchState::Pending) {
            log::debug!("Weather fetch already pending; skipping");
            return false;
        }
        self.state = FetchState::Pending;
        true
    }

    /// Deliver the result of the pending fetch. Completions without a
    /// pending request are dropped.
    pub fn complete(&mut self, result: Result<WeatherReport, String>) {
        if !matches!(self.state, FetchState::Pending) {
            log::debug!("Dropping weather completion with no pending fetch");
            return;
        }
        match result {
            Ok(report) => {
                self.last_report = Some(report.clone());
                self.state = FetchState::Ready(report);
            }
            Err(message) => {
                log::warn!("Weather fetch failed: {message}");
                self.state = FetchState::Failed(message);
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, FetchState::Pending)
    }

    /// The most recent successful report, surviving pending refreshes and
    /// failures.
    pub fn report(&self) -> Option<&WeatherReport> {
        self.last_report.as_ref()
    }

    /// The failure message, when the last completed fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.state
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
