//! Dual alarm configuration records.
//!
//! Two alarms (ids 1 and 2) persist independently, each as one JSON blob
//! under `alarm1_settings` / `alarm2_settings`. An absent or corrupt blob
//! yields a freshly constructed default for that id. Saving is explicit:
//! the editor mutates in place and only writes on confirmation.
//!
//! `hour` and `minute` are deliberately unconstrained integers: the pair
//! 99:99 is a reserved sentinel that flags "music player mode". The flag is
//! exposed but carries no further behavior.

use serde::{Deserialize, Serialize};

use crate::storage::KvStore;

const ALARM1_KEY: &str = "alarm1_settings";
const ALARM2_KEY: &str = "alarm2_settings";

/// Hour/minute pair reserved for the music-player-mode sentinel.
pub const MUSIC_MODE_SENTINEL: i32 = 99;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One alarm configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    /// 1 or 2.
    pub id: u8,
    pub is_enabled: bool,
    /// Normally 0-23; unconstrained to admit the 99:99 sentinel.
    pub hour: i32,
    /// Normally 0-59; unconstrained to admit the 99:99 sentinel.
    pub minute: i32,
    /// Repeat days, ordered Sun..Sat.
    pub days_enabled: [bool; 7],
    #[serde(rename = "musicPlaylistID")]
    pub music_playlist_id: Option<String>,
    pub music_playlist_name: Option<String>,
    /// Playback volume in 0.0..=1.0.
    pub volume: f64,
    pub fade_in_enabled: bool,
    /// Snooze duration in minutes.
    pub snooze_duration: u32,
}

impl Alarm {
    /// Fresh defaults for the given id: disabled, 07:00, weekdays only,
    /// volume 0.7, fade-in on, 15 minute snooze, no playlist.
    pub fn new(id: u8) -> Self {
        Self {
            id,
            is_enabled: false,
            hour: 7,
            minute: 0,
            days_enabled: [false, true, true, true, true, true, false],
            music_playlist_id: None,
            music_playlist_name: Some("None selected".to_owned()),
            volume: 0.7,
            fade_in_enabled: true,
            snooze_duration: 15,
        }
    }

    /// "HH:MM" with both fields zero-padded (the sentinel shows as "99:99").
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// True when this alarm is set to the reserved 99:99 sentinel.
    pub fn is_music_player_mode(&self) -> bool {
        self.hour == MUSIC_MODE_SENTINEL && self.minute == MUSIC_MODE_SENTINEL
    }

    /// Playlist name for display, defaulting to "None selected".
    pub fn playlist_display_name(&self) -> &str {
        self.music_playlist_name.as_deref().unwrap_or("None selected")
    }

    /// Human summary of the repeat days: "Never", "Every day", "Weekdays",
    /// "Weekends", or a comma list like "Mon, Wed, Fri".
    pub fn enabled_days_string(&self) -> String {
        let enabled: Vec<&str> = self
            .days_enabled
            .iter()
            .zip(DAY_NAMES)
            .filter_map(|(on, name)| on.then_some(name))
            .collect();

        match enabled.as_slice() {
            [] => "Never".to_owned(),
            _ if enabled.len() == 7 => "Every day".to_owned(),
            ["Mon", "Tue", "Wed", "Thu", "Fri"] => "Weekdays".to_owned(),
            ["Sun", "Sat"] => "Weekends".to_owned(),
            days => days.join(", "),
        }
    }
}

// =============================================================================
// Alarm Container
// =============================================================================

/// Owns both alarm records for the lifetime of the app.
#[derive(Clone, Debug, PartialEq)]
pub struct AlarmSettings {
    pub alarm1: Alarm,
    pub alarm2: Alarm,
}

impl AlarmSettings {
    /// Load both alarms; each blob independently falls back to defaults.
    pub fn load(store: &KvStore) -> Self {
        Self {
            alarm1: store.get_blob(ALARM1_KEY).unwrap_or_else(|| Alarm::new(1)),
            alarm2: store.get_blob(ALARM2_KEY).unwrap_or_else(|| Alarm::new(2)),
        }
    }

    /// Write alarm 1's blob into the store.
    pub fn save_alarm1(&self, store: &mut KvStore) {
        if let Err(err) = store.set_blob(ALARM1_KEY, &self.alarm1) {
            log::warn!("Failed to encode alarm 1: {err}");
        }
    }

    /// Write alarm 2's blob into the store.
    pub fn save_alarm2(&self, store: &mut KvStore) {
        if let Err(err) = store.set_blob(ALARM2_KEY, &self.alarm2) {
            log::warn!("Failed to encode alarm 2: {err}");
        }
    }

    /// Write both blobs.
    pub fn save_all(&self, store: &mut KvStore) {
        self.save_alarm1(store);
        self.save_alarm2(store);
    }

    /// Mutable access by alarm id (1 or 2).
    pub fn by_id_mut(&mut self, id: u8) -> Option<&mut Alarm> {
        match id {
            1 => Some(&mut self.alarm1),
            2 => Some(&mut self.alarm2),
            _ => None,
        }
    }

    /// True when either alarm is set to the 99:99 sentinel.
    pub fn is_music_player_mode(&self) -> bool {
        self.alarm1.is_music_player_mode() || self.alarm2.is_music_player_mode()
    }

    /// Header badges for the enabled alarms.
    pub fn enabled_alarm_indicators(&self) -> Vec<&'static str> {
        let mut indicators = Vec::new();
        if self.alarm1.is_enabled {
            indicators.push("ALARM 1");
        }
        if self.alarm2.is_enabled {
            indicators.push("ALARM 2");
        }
        indicators
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
