//! Render state tracking for optimized display updates.
//!
//! Tracks display state for:
//! - Header conditional redraw (date rollover, alarm badges, color change)
//! - Popup cleanup (clear display when a popup disappears or switches kind)
//! - Page switch cleanup (clear display when changing pages)
//!
//! The clock face itself always redraws over a freshly filled background:
//! the face content changes every minute and repainting identical pixels is
//! cheaper than tracking which segment flipped.
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Header  | Date/badge/color change, popup close | Conditional redraw |
//! | Face    | Every frame | Always redraw over cleared area |
//! | Popups  | On show/hide | Full clear on close |

use std::time::Instant;

use crate::config::POPUP_DURATION;

/// Active popup with its start time.
///
/// One popup at a time, most recent wins. Each variant holds the `Instant`
/// it was triggered, making expiration checks straightforward.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "COLOR: <name>" after cycling the segment color.
    Color(Instant),
    /// "UNIT: F/C" after toggling the temperature unit.
    Unit(Instant),
    /// "12 HOUR / 24 HOUR" after toggling the time format.
    Format(Instant),
    /// "ALARM <n> SAVED" after committing the alarm editor.
    AlarmSaved(Instant),
    /// "REFRESHING WEATHER" when a fetch is started by hand.
    WeatherRefresh(Instant),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Color(t) | Self::Unit(t) | Self::Format(t) | Self::AlarmSaved(t) | Self::WeatherRefresh(t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool {
        self.start_time().elapsed() >= POPUP_DURATION
    }

    /// Get the popup kind (discriminant only, for switch detection).
    const fn kind(&self) -> u8 {
        match self {
            Self::Color(_) => 0,
            Self::Unit(_) => 1,
            Self::Format(_) => 2,
            Self::AlarmSaved(_) => 3,
            Self::WeatherRefresh(_) => 4,
        }
    }
}

/// Compact summary of everything the header renders. The header only
/// redraws when this changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderContent {
    /// Day of year; the date text changes exactly when this does.
    pub day_ordinal: u32,
    /// Bit 0 = alarm 1 enabled, bit 1 = alarm 2 enabled, bit 2 = music mode.
    pub badge_mask: u8,
    /// Discriminant of the display color setting.
    pub color_key: u8,
}

/// Tracks render state for optimized display updates.
pub struct RenderState {
    prev_header: Option<HeaderContent>,

    /// Previous popup kind (discriminant only, for detecting switches).
    prev_popup_kind: Option<u8>,

    /// Whether popup just closed or switched this frame (need to clear remnants).
    popup_just_closed: bool,

    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the display was cleared externally (e.g. page switch).
    display_cleared: bool,
}

impl RenderState {
    /// Create a new render state for the first frame.
    pub const fn new() -> Self {
        Self {
            prev_header: None,
            prev_popup_kind: None,
            popup_just_closed: false,
            first_frame: true,
            display_cleared: false,
        }
    }

    /// Check if the header needs redrawing for this frame's content.
    pub fn check_header_dirty(&mut self, content: HeaderContent) -> bool {
        let dirty = self.first_frame
            || self.popup_just_closed
            || self.display_cleared
            || self.prev_header != Some(content);
        self.prev_header = Some(content);
        dirty
    }

    /// Update popup state with the current active popup.
    ///
    /// Detects both popup close (becomes None) and popup switch (kind
    /// changes). Both require a display clear: popup sizes differ, and a
    /// smaller successor would leave the larger border on screen.
    pub fn update_popup(&mut self, popup: Option<&Popup>) {
        let current_kind = popup.map(Popup::kind);
        let changed = current_kind != self.prev_popup_kind;
        let was_visible = self.prev_popup_kind.is_some();
        self.prev_popup_kind = current_kind;

        if changed && was_visible {
            self.popup_just_closed = true;
        }
    }

    /// Check if a popup just closed this frame (need to clear remnants).
    #[inline]
    pub const fn popup_just_closed(&self) -> bool {
        self.popup_just_closed
    }

    /// Check if this is the first frame.
    #[inline]
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Mark that the display was cleared externally (page switch).
    pub const fn mark_display_cleared(&mut self) {
        self.display_cleared = true;
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
        self.popup_just_closed = false;
        self.display_cleared = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn content(day: u32, badges: u8, color: u8) -> HeaderContent {
        HeaderContent { day_ordinal: day, badge_mask: badges, color_key: color }
    }

    // -------------------------------------------------------------------------
    // Header Dirty Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_header_dirty_on_first_frame() {
        let mut state = RenderState::new();
        assert!(state.check_header_dirty(content(1, 0, 0)), "First frame always redraws");
    }

    #[test]
    fn test_header_clean_when_content_unchanged() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 1, 0));
        state.end_frame();
        assert!(
            !state.check_header_dirty(content(100, 1, 0)),
            "Unchanged content must not redraw"
        );
    }

    #[test]
    fn test_header_dirty_on_date_rollover() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 0, 0));
        state.end_frame();
        assert!(state.check_header_dirty(content(101, 0, 0)), "New day redraws the date");
    }

    #[test]
    fn test_header_dirty_on_badge_change() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 0b01, 0));
        state.end_frame();
        assert!(state.check_header_dirty(content(100, 0b11, 0)), "New badge redraws");
    }

    #[test]
    fn test_header_dirty_on_color_change() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 0, 0));
        state.end_frame();
        assert!(state.check_header_dirty(content(100, 0, 2)), "Color change redraws");
    }

    #[test]
    fn test_header_dirty_after_popup_close() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 0, 0));
        state.end_frame();

        let popup = Popup::Color(Instant::now());
        state.update_popup(Some(&popup));
        state.update_popup(None);

        assert!(
            state.check_header_dirty(content(100, 0, 0)),
            "Popup close must force a header redraw"
        );
    }

    #[test]
    fn test_header_dirty_after_display_cleared() {
        let mut state = RenderState::new();
        state.check_header_dirty(content(100, 0, 0));
        state.end_frame();
        state.mark_display_cleared();
        assert!(state.check_header_dirty(content(100, 0, 0)));
    }

    // -------------------------------------------------------------------------
    // Popup Lifecycle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_popup_show_does_not_trigger_cleanup() {
        let mut state = RenderState::new();
        let popup = Popup::Unit(Instant::now());
        state.update_popup(Some(&popup));
        assert!(!state.popup_just_closed());
    }

    #[test]
    fn test_popup_hide_triggers_cleanup() {
        let mut state = RenderState::new();
        let popup = Popup::Unit(Instant::now());
        state.update_popup(Some(&popup));
        state.update_popup(None);
        assert!(state.popup_just_closed());
    }

    #[test]
    fn test_popup_switch_triggers_cleanup() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Color(Instant::now())));
        state.end_frame();
        state.update_popup(Some(&Popup::AlarmSaved(Instant::now())));
        assert!(state.popup_just_closed(), "Switching popup kinds needs a clear");
    }

    #[test]
    fn test_popup_same_kind_no_cleanup() {
        let mut state = RenderState::new();
        state.update_popup(Some(&Popup::Format(Instant::now())));
        state.end_frame();
        state.update_popup(Some(&Popup::Format(Instant::now())));
        assert!(!state.popup_just_closed(), "Same popup kind must not clear");
    }

    #[test]
    fn test_popup_not_expired_immediately() {
        let popup = Popup::WeatherRefresh(Instant::now());
        assert!(!popup.is_expired(), "A fresh popup must not be expired");
    }

    // -------------------------------------------------------------------------
    // Frame State Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_end_frame_clears_flags() {
        let mut state = RenderState::new();
        let popup = Popup::Color(Instant::now());
        state.update_popup(Some(&popup));
        state.update_popup(None);
        state.mark_display_cleared();
        assert!(state.is_first_frame());
        assert!(state.popup_just_closed());

        state.end_frame();

        assert!(!state.is_first_frame());
        assert!(!state.popup_just_closed());
    }
}
