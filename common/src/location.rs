//! Location provider interface.
//!
//! Mirrors the narrow surface the clock actually uses: request permission
//! once, then read the best-known location when assembling a weather query.
//! Denial is terminal for the session - the UI shows the reason and never
//! re-prompts.

/// Authorization state reported by the platform location service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocationAuthorization {
    #[default]
    NotDetermined,
    Denied,
    Restricted,
    Authorized,
}

impl LocationAuthorization {
    /// Short status label for the diagnostics page.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotDetermined => "not determined",
            Self::Denied => "denied",
            Self::Restricted => "restricted",
            Self::Authorized => "authorized",
        }
    }
}

/// A device location fix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// External location service.
pub trait LocationProvider {
    /// Ask the platform for permission; returns the resulting state.
    fn request_permission(&mut self) -> LocationAuthorization;

    /// Current authorization without prompting.
    fn authorization(&self) -> LocationAuthorization;

    /// Best-known location, or `None` when unavailable.
    fn current_location(&self) -> Option<Coordinates>;
}
