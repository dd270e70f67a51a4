//! Alarm editor key actions.
//!
//! Pure mutation helpers invoked by the key handler on the Alarms page.
//! Keeping them out of the main loop makes the wrap-around and sentinel
//! rules testable without a window.

use nightstand_common::alarm::{Alarm, MUSIC_MODE_SENTINEL};

/// Snooze durations the S key cycles through, in minutes.
const SNOOZE_STEPS: [u32; 5] = [5, 10, 15, 20, 30];

/// Step the alarm hour by `delta`, wrapping within 0-23.
///
/// If the alarm sits on the 99:99 sentinel, any time adjustment first
/// restores the default 07:00 - the sentinel is only ever set or cleared
/// as a pair, never partially edited.
pub fn adjust_hour(alarm: &mut Alarm, delta: i32) {
    if alarm.is_music_player_mode() {
        alarm.hour = 7;
        alarm.minute = 0;
        return;
    }
    alarm.hour = (alarm.hour + delta).rem_euclid(24);
}

/// Step the alarm minute by `delta`, wrapping within 0-59.
pub fn adjust_minute(alarm: &mut Alarm, delta: i32) {
    if alarm.is_music_player_mode() {
        alarm.hour = 7;
        alarm.minute = 0;
        return;
    }
    alarm.minute = (alarm.minute + delta).rem_euclid(60);
}

/// Step the volume up by 0.1, wrapping from 1.0 back to 0.0.
pub fn step_volume(alarm: &mut Alarm) {
    let steps = (alarm.volume.clamp(0.0, 1.0) * 10.0).round() as u32;
    alarm.volume = f64::from((steps + 1) % 11) / 10.0;
}

/// Advance to the next snooze duration in the cycle. Values outside the
/// cycle (from hand-edited storage) snap to the default 15.
pub fn cycle_snooze(alarm: &mut Alarm) {
    alarm.snooze_duration = match SNOOZE_STEPS.iter().position(|d| *d == alarm.snooze_duration) {
        Some(index) => SNOOZE_STEPS[(index + 1) % SNOOZE_STEPS.len()],
        None => 15,
    };
}

/// Toggle the 99:99 music-player-mode sentinel. Turning it off restores
/// the default 07:00.
pub fn toggle_music_mode(alarm: &mut Alarm) {
    if alarm.is_music_player_mode() {
        alarm.hour = 7;
        alarm.minute = 0;
    } else {
        alarm.hour = MUSIC_MODE_SENTINEL;
        alarm.minute = MUSIC_MODE_SENTINEL;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_wraps_both_directions() {
        let mut alarm = Alarm::new(1);
        alarm.hour = 23;
        adjust_hour(&mut alarm, 1);
        assert_eq!(alarm.hour, 0, "23 + 1 wraps to 0");
        adjust_hour(&mut alarm, -1);
        assert_eq!(alarm.hour, 23, "0 - 1 wraps to 23");
    }

    #[test]
    fn test_minute_wraps_both_directions() {
        let mut alarm = Alarm::new(1);
        alarm.minute = 59;
        adjust_minute(&mut alarm, 1);
        assert_eq!(alarm.minute, 0);
        adjust_minute(&mut alarm, -1);
        assert_eq!(alarm.minute, 59);
    }

    #[test]
    fn test_adjusting_sentinel_restores_default_time() {
        let mut alarm = Alarm::new(1);
        toggle_music_mode(&mut alarm);
        assert!(alarm.is_music_player_mode());

        adjust_hour(&mut alarm, 1);
        assert_eq!((alarm.hour, alarm.minute), (7, 0), "Editing the sentinel resets to 07:00");
        assert!(!alarm.is_music_player_mode());
    }

    #[test]
    fn test_volume_steps_and_wraps() {
        let mut alarm = Alarm::new(1);
        alarm.volume = 0.9;
        step_volume(&mut alarm);
        assert_eq!(alarm.volume, 1.0);
        step_volume(&mut alarm);
        assert_eq!(alarm.volume, 0.0, "Full volume wraps to silent");
        step_volume(&mut alarm);
        assert_eq!(alarm.volume, 0.1);
    }

    #[test]
    fn test_snooze_cycle() {
        let mut alarm = Alarm::new(1);
        assert_eq!(alarm.snooze_duration, 15);
        cycle_snooze(&mut alarm);
        assert_eq!(alarm.snooze_duration, 20);
        cycle_snooze(&mut alarm);
        assert_eq!(alarm.snooze_duration, 30);
        cycle_snooze(&mut alarm);
        assert_eq!(alarm.snooze_duration, 5);
    }

    #[test]
    fn test_snooze_out_of_cycle_snaps_to_default() {
        let mut alarm = Alarm::new(1);
        alarm.snooze_duration = 42;
        cycle_snooze(&mut alarm);
        assert_eq!(alarm.snooze_duration, 15);
    }

    #[test]
    fn test_music_mode_round_trip() {
        let mut alarm = Alarm::new(2);
        alarm.hour = 22;
        alarm.minute = 30;
        toggle_music_mode(&mut alarm);
        assert_eq!(alarm.time_string(), "99:99");
        toggle_music_mode(&mut alarm);
        assert_eq!(
            alarm.time_string(),
            "07:00",
            "Leaving music mode restores the default, not the prior time"
        );
    }
}
