//! Profiling metrics and debug logging for the diagnostics page.
//!
//! Frame timing statistics, render counters, and a ring buffer of recent
//! events. Updated every frame in the main loop; displayed only on the
//! diagnostics page.

use std::time::{Duration, Instant};

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

/// Ring buffer of recent event messages, oldest first.
pub struct DebugLog {
    lines: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self { lines: Deque::new() }
    }

    /// Append a message, evicting the oldest line when full. Messages
    /// longer than a line are truncated.
    pub fn push(&mut self, message: &str) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in message.chars().take(LOG_LINE_LENGTH) {
            if line.push(c).is_err() {
                break;
            }
        }
        // Eviction above guarantees room
        self.lines.push_back(line).ok();
    }

    /// Iterate lines oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for DebugLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frame timing and render statistics.
pub struct ProfilingMetrics {
    /// Total frame time (render + sleep + overhead).
    pub frame_time_us: u32,
    /// Time spent drawing to the display buffer.
    pub render_time_us: u32,
    /// Time spent sleeping for rate limiting.
    pub sleep_time_us: u32,

    /// Minimum frame time observed.
    pub frame_time_min_us: u32,
    /// Maximum frame time observed.
    pub frame_time_max_us: u32,
    /// Rolling average frame time (exponential moving average).
    frame_time_avg_us: f32,

    /// Total frames rendered since startup.
    pub total_frames: u64,
    /// Header redraw count (should stay low if dirty tracking works).
    pub header_redraws: u32,
    /// Clock face compositions.
    pub face_redraws: u32,
    /// Weather fetches started.
    pub weather_fetches: u32,
    /// Popups shown.
    pub popups_shown: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            header_redraws: 0,
            face_redraws: 0,
            weather_fetches: 0,
            popups_shown: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for this frame: current values, min/max, and average.
    pub fn record_frame(&mut self, total_time: Duration, render_time: Duration, sleep_time: Duration) {
        let total_us = total_time.as_micros() as u32;
        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Uptime since startup.
    #[inline]
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    #[inline]
    pub const fn inc_header_redraws(&mut self) {
        self.header_redraws += 1;
    }

    #[inline]
    pub const fn inc_face_redraws(&mut self) {
        self.face_redraws += 1;
    }

    #[inline]
    pub const fn inc_weather_fetches(&mut self) {
        self.weather_fetches += 1;
    }

    #[inline]
    pub const fn inc_popups_shown(&mut self) {
        self.popups_shown += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
