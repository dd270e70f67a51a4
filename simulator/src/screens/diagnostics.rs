//! Diagnostics page rendering.
//!
//! Shows the state of every external collaborator, frame timing metrics,
//! and the debug log terminal. Press `P` until the DIAGNOSTICS page is up.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ DIAGNOSTICS                            UP 00:12:34        30 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ SERVICES            │ TIMING            │ RENDER                 │
//! │ Loc: authorized     │ Frame:  33.1ms    │ Frames: 12847          │
//! │ Music: authorized   │ Render: 0.6ms     │ Headers: 12            │
//! │ Store: us           │ Min:    32.8ms    │ Faces: 12847           │
//! │ Weather: ready      │ Max:    39.2ms    │ Fetches: 3             │
//! │                     │ Avg:    33.4ms    │ Popups: 5              │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ > System started                                                 │
//! │ > Weather: ready                                                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;

use nightstand_common::colors::GRAY;
use nightstand_common::config::SCREEN_WIDTH;
use nightstand_common::location::LocationAuthorization;
use nightstand_common::music::MusicAuthorization;
use nightstand_common::profiling::{DebugLog, ProfilingMetrics};
use nightstand_common::styles::{
    LABEL_STYLE_GRAY, LABEL_STYLE_GREEN, LABEL_STYLE_ORANGE, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED,
};
use nightstand_common::weather::{FetchState, WeatherState};

// =============================================================================
// Layout Constants
// =============================================================================

/// Header baseline and divider.
const HEADER_Y: i32 = 12;
const HEADER_DIVIDER_Y: i32 = 18;

/// Section headers and stats baselines.
const SECTION_HEADER_Y: i32 = 32;
const STATS_Y: i32 = 46;
const STAT_LINE_HEIGHT: i32 = 13;

/// Log terminal area.
const LOG_DIVIDER_Y: i32 = 150;
const LOG_Y: i32 = 162;
const LOG_LINE_HEIGHT: i32 = 12;

/// Column X positions.
const COL1_X: i32 = 4;
const COL2_X: i32 = 115;
const COL3_X: i32 = 220;

/// Gray stroke style for dividers (1px).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Short status word for the weather fetch state.
fn weather_status(state: &WeatherState) -> &'static str {
    match state.fetch_state() {
        FetchState::Idle => "idle",
        FetchState::Pending => "pending",
        FetchState::Ready(_) => "ready",
        FetchState::Failed(_) => "failed",
    }
}

/// Draw the full diagnostics page.
#[allow(clippy::too_many_arguments)]
pub fn draw_diagnostics_page(
    display: &mut SimulatorDisplay<Rgb565>,
    metrics: &ProfilingMetrics,
    log: &DebugLog,
    location_auth: LocationAuthorization,
    music_auth: MusicAuthorization,
    storefront: &str,
    weather: &WeatherState,
    fps: f32,
) {
    // Header: title, uptime, FPS
    Text::with_text_style("DIAGNOSTICS", Point::new(COL1_X, HEADER_Y), LABEL_STYLE_GREEN, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let uptime = metrics.uptime().as_secs();
    let mut up_text: String<24> = String::new();
    let _ = write!(
        up_text,
        "UP {:02}:{:02}:{:02}  {fps:.0} FPS",
        uptime / 3600,
        (uptime / 60) % 60,
        uptime % 60
    );
    Text::with_text_style(
        &up_text,
        Point::new((SCREEN_WIDTH - 4) as i32, HEADER_Y),
        LABEL_STYLE_WHITE,
        RIGHT_ALIGNED,
    )
    .draw(display)
    .ok();

    Line::new(
        Point::new(0, HEADER_DIVIDER_Y),
        Point::new((SCREEN_WIDTH - 1) as i32, HEADER_DIVIDER_Y),
    )
    .into_styled(DIVIDER_STYLE)
    .draw(display)
    .ok();

    // Column 1: collaborator states
    Text::with_text_style("SERVICES", Point::new(COL1_X, SECTION_HEADER_Y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut services: [String<28>; 4] = [String::new(), String::new(), String::new(), String::new()];
    let _ = write!(services[0], "Loc: {}", location_auth.as_str());
    let _ = write!(services[1], "Music: {}", music_auth.as_str());
    let _ = write!(services[2], "Store: {storefront}");
    let _ = write!(services[3], "Weather: {}", weather_status(weather));
    for (i, line) in services.iter().enumerate() {
        Text::with_text_style(
            line,
            Point::new(COL1_X, STATS_Y + i as i32 * STAT_LINE_HEIGHT),
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    // Column 2: frame timing
    Text::with_text_style("TIMING", Point::new(COL2_X, SECTION_HEADER_Y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut timing: [String<24>; 5] = Default::default();
    let _ = write!(timing[0], "Frame:  {:.1}ms", metrics.frame_time_us as f32 / 1000.0);
    let _ = write!(timing[1], "Render: {:.1}ms", metrics.render_time_us as f32 / 1000.0);
    let min = if metrics.frame_time_min_us == u32::MAX { 0 } else { metrics.frame_time_min_us };
    let _ = write!(timing[2], "Min:    {:.1}ms", min as f32 / 1000.0);
    let _ = write!(timing[3], "Max:    {:.1}ms", metrics.frame_time_max_us as f32 / 1000.0);
    let _ = write!(timing[4], "Avg:    {:.1}ms", metrics.frame_time_avg_us() as f32 / 1000.0);
    for (i, line) in timing.iter().enumerate() {
        Text::with_text_style(
            line,
            Point::new(COL2_X, STATS_Y + i as i32 * STAT_LINE_HEIGHT),
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    // Column 3: render counters
    Text::with_text_style("RENDER", Point::new(COL3_X, SECTION_HEADER_Y), LABEL_STYLE_GRAY, LEFT_ALIGNED)
        .draw(display)
        .ok();
    let mut counters: [String<24>; 5] = Default::default();
    let _ = write!(counters[0], "Frames: {}", metrics.total_frames);
    let _ = write!(counters[1], "Headers: {}", metrics.header_redraws);
    let _ = write!(counters[2], "Faces: {}", metrics.face_redraws);
    let _ = write!(counters[3], "Fetches: {}", metrics.weather_fetches);
    let _ = write!(counters[4], "Popups: {}", metrics.popups_shown);
    for (i, line) in counters.iter().enumerate() {
        Text::with_text_style(
            line,
            Point::new(COL3_X, STATS_Y + i as i32 * STAT_LINE_HEIGHT),
            LABEL_STYLE_WHITE,
            LEFT_ALIGNED,
        )
        .draw(display)
        .ok();
    }

    // Log terminal
    Line::new(Point::new(0, LOG_DIVIDER_Y), Point::new((SCREEN_WIDTH - 1) as i32, LOG_DIVIDER_Y))
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();
    for (i, line) in log.iter().enumerate() {
        let y = LOG_Y + i as i32 * LOG_LINE_HEIGHT;
        Text::with_text_style("> ", Point::new(COL1_X, y), LABEL_STYLE_GREEN, LEFT_ALIGNED)
            .draw(display)
            .ok();
        Text::with_text_style(line, Point::new(COL1_X + 12, y), LABEL_STYLE_ORANGE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}
