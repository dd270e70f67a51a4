//! Music library authorization interface.
//!
//! Only the diagnostics page consumes this: it shows the current
//! authorization status and, when authorized, the storefront the library
//! resolves to. Nothing in the rendering core depends on it.

/// Authorization state reported by the platform music library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MusicAuthorization {
    #[default]
    NotDetermined,
    Denied,
    Restricted,
    Authorized,
}

impl MusicAuthorization {
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

/// External music library service.
pub trait MusicProvider {
    /// Current authorization without prompting.
    fn status(&self) -> MusicAuthorization;

    /// Prompt for authorization; returns the resulting state.
    fn request_authorization(&mut self) -> MusicAuthorization;

    /// Storefront identifier for diagnostic display (e.g. "us").
    /// Errors are short display strings.
    fn storefront(&self) -> Result<String, String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(MusicAuthorization::NotDetermined.as_str(), "not determined");
        assert_eq!(MusicAuthorization::Denied.as_str(), "denied");
    }
}
