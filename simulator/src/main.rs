// Crate-level lints: allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Nightstand seven-segment clock simulator.
//!
//! Runs the clock in a desktop window: a large seven-segment time display
//! with a status header, a 7-day weather forecast, a dual alarm editor, and
//! a diagnostics page. State persists to a JSON key-value store between
//! runs (`NIGHTSTAND_STORE` overrides the file location).
//!
//! # Controls
//!
//! | Key | Page | Action |
//! |-----|------|--------|
//! | `P` | any | Cycle pages (Clock, Forecast, Alarms, Diagnostics) |
//! | `C` | any | Cycle segment color (blue, white, yellow, red) |
//! | `U` | any | Toggle temperature unit (F / C) |
//! | `T` | any | Toggle time format (12 / 24 hour) |
//! | `W` | any | Refresh weather now |
//! | `L` | any | Cycle manual city presets (blank = device location) |
//! | `X` | any | Toggle simulated network failure |
//! | `A` | Alarms | Switch between alarm 1 and alarm 2 |
//! | `E` | Alarms | Toggle the selected alarm on/off |
//! | `Up`/`Down` | Alarms | Adjust hour |
//! | `Left`/`Right` | Alarms | Adjust minute |
//! | `0`-`6` | Alarms | Toggle repeat day (Sun..Sat) |
//! | `V` | Alarms | Step volume |
//! | `F` | Alarms | Toggle fade-in |
//! | `S` | Alarms | Cycle snooze duration |
//! | `M` | Alarms | Toggle 99:99 music-player-mode sentinel |
//! | `Enter` | Alarms | Save the selected alarm |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.
//!
//! # Architecture
//!
//! One cooperative loop drives everything. The clock face is re-derived
//! from the wall clock every frame (pure functions, nothing cached); the
//! weather request is single-flight with a simulated completion latency;
//! settings and alarms are only mutated here in the key handler and only
//! read by the render path, so no locking is needed.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ WED AUG 7                  ALARM 1  MUSIC MODE│  header (24px)
//! │                                               │
//! │    ▄▄▄   ▄▄▄       ▄▄▄   ▄▄▄                  │
//! │   █   █ █   █  ●  █   █ █   █                 │
//! │    ▄▄▄   ▄▄▄       ▄▄▄   ▄▄▄      PM          │  seven-segment face
//! │   █   █ █   █  ●  █   █ █   █                 │
//! │    ▀▀▀   ▀▀▀       ▀▀▀   ▀▀▀                  │
//! └───────────────────────────────────────────────┘
//! ```

mod input;
mod providers;
mod screens;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use chrono::{Datelike, Local};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use nightstand_common::alarm::AlarmSettings;
use nightstand_common::animations::FaceColorTransition;
use nightstand_common::clock::ClockFaceSpec;
use nightstand_common::colors::BLACK;
use nightstand_common::config::{
    FACE_MARGIN_X, FACE_MARGIN_Y, FRAME_TIME, HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, WEATHER_FETCH_LATENCY,
};
use nightstand_common::location::LocationProvider;
use nightstand_common::music::MusicProvider;
use nightstand_common::pages::Page;
use nightstand_common::profiling::{DebugLog, ProfilingMetrics};
use nightstand_common::render::{HeaderContent, Popup, RenderState};
use nightstand_common::settings::AppSettings;
use nightstand_common::storage::KvStore;
use nightstand_common::weather::{WeatherProvider, WeatherQuery, WeatherState};
use nightstand_common::widgets::alarms::draw_alarms_page;
use nightstand_common::widgets::clock_face::draw_clock_face;
use nightstand_common::widgets::forecast::draw_forecast_page;
use nightstand_common::widgets::header::draw_header;
use nightstand_common::widgets::popups::{
    draw_alarm_saved_popup, draw_color_popup, draw_format_popup, draw_unit_popup, draw_weather_refresh_popup,
};

use crate::providers::{SimulatedLocation, SimulatedMusic, SimulatedWeather};
use crate::screens::{draw_diagnostics_page, run_boot_screen};

/// Manual city presets the L key cycles through. Blank uses the device
/// location from the location provider.
const CITY_PRESETS: [&str; 4] = ["", "San Francisco", "Reykjavik", "Singapore"];

/// Where to fetch weather for right now, or `None` when no location source
/// is available (no manual city and no authorized fix).
fn weather_query(settings: &AppSettings, location: &impl LocationProvider) -> Option<WeatherQuery> {
    if !settings.manual_city.is_empty() {
        return Some(WeatherQuery::City(settings.manual_city.clone()));
    }
    location.current_location().map(WeatherQuery::Coordinates)
}

fn main() {
    env_logger::init();

    // ==========================================================================
    // Persistent State
    // ==========================================================================

    let store_path = std::env::var("NIGHTSTAND_STORE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("nightstand-store.json"));
    log::info!("Using store at {}", store_path.display());

    let mut store = KvStore::open(store_path);
    let mut settings = AppSettings::load(&store);
    let mut alarms = AlarmSettings::load(&store);

    // ==========================================================================
    // Platform Collaborators
    // ==========================================================================

    let mut location = SimulatedLocation::new();
    location.request_permission();
    let mut music = SimulatedMusic::new();
    music.request_authorization();
    let mut weather_provider = SimulatedWeather::new(Local::now().date_naive());
    let mut weather = WeatherState::new();

    // The single in-flight request: query plus the instant it was issued.
    // Completion is delivered after WEATHER_FETCH_LATENCY to model the
    // asynchronous service without blocking the loop.
    let mut pending_fetch: Option<(WeatherQuery, Instant)> = None;

    // ==========================================================================
    // Display and Boot
    // ==========================================================================

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Nightstand Clock", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    if !run_boot_screen(&mut display, &mut window) {
        return;
    }

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let mut current_page = Page::default();
    let mut page_just_switched = false;
    let mut active_popup: Option<Popup> = None;
    let mut selected_alarm: u8 = 1;
    let mut city_preset_index = CITY_PRESETS
        .iter()
        .position(|city| *city == settings.manual_city)
        .unwrap_or(0);

    let mut render_state = RenderState::new();
    let mut face_fade = FaceColorTransition::new(settings.display_color.as_rgb());
    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");

    // FPS counter state (shown on the diagnostics page)
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // Clock face bounding box, below the header with breathing room
    let face_bounds = Rectangle::new(
        Point::new(FACE_MARGIN_X as i32, (HEADER_HEIGHT + FACE_MARGIN_Y) as i32),
        Size::new(
            SCREEN_WIDTH - 2 * FACE_MARGIN_X,
            SCREEN_HEIGHT - HEADER_HEIGHT - 2 * FACE_MARGIN_Y,
        ),
    );

    // Initial fetch: startup is a refresh trigger
    if weather.begin_fetch() {
        metrics.inc_weather_fetches();
        match weather_query(&settings, &location) {
            Some(query) => pending_fetch = Some((query, Instant::now())),
            // Mirrors the platform behavior: no location, immediate failure
            None => weather.complete(Err("Location unavailable".to_owned())),
        }
    }

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, key presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam
                    if repeat {
                        continue;
                    }
                    match keycode {
                        // Page cycle (cancels any popup)
                        Keycode::P => {
                            current_page = current_page.next();
                            page_just_switched = true;
                            active_popup = None;
                            debug_log.push(current_page.title());
                        }

                        // Segment color cycle
                        Keycode::C => {
                            settings.display_color = settings.display_color.next();
                            settings.persist(&mut store);
                            if let Err(err) = store.save() {
                                log::warn!("Failed to save settings: {err}");
                            }
                            active_popup = Some(Popup::Color(Instant::now()));
                            metrics.inc_popups_shown();
                        }

                        // Temperature unit toggle
                        Keycode::U => {
                            settings.temperature_unit = settings.temperature_unit.toggled();
                            settings.persist(&mut store);
                            if let Err(err) = store.save() {
                                log::warn!("Failed to save settings: {err}");
                            }
                            active_popup = Some(Popup::Unit(Instant::now()));
                            metrics.inc_popups_shown();
                        }

                        // Time format toggle
                        Keycode::T => {
                            settings.time_format = settings.time_format.toggled();
                            settings.persist(&mut store);
                            if let Err(err) = store.save() {
                                log::warn!("Failed to save settings: {err}");
                            }
                            active_popup = Some(Popup::Format(Instant::now()));
                            metrics.inc_popups_shown();
                        }

                        // Manual weather refresh (refused while one is pending)
                        Keycode::W => {
                            if weather.begin_fetch() {
                                metrics.inc_weather_fetches();
                                match weather_query(&settings, &location) {
                                    Some(query) => pending_fetch = Some((query, Instant::now())),
                                    None => weather.complete(Err("Location unavailable".to_owned())),
                                }
                                active_popup = Some(Popup::WeatherRefresh(Instant::now()));
                                metrics.inc_popups_shown();
                            } else {
                                debug_log.push("Fetch already pending");
                            }
                        }

                        // Manual city preset cycle; a location change is a
                        // refresh trigger
                        Keycode::L => {
                            city_preset_index = (city_preset_index + 1) % CITY_PRESETS.len();
                            settings.manual_city = CITY_PRESETS[city_preset_index].to_owned();
                            settings.persist(&mut store);
                            if let Err(err) = store.save() {
                                log::warn!("Failed to save settings: {err}");
                            }
                            debug_log.push(if settings.manual_city.is_empty() {
                                "City: device location"
                            } else {
                                CITY_PRESETS[city_preset_index]
                            });
                            if weather.begin_fetch() {
                                metrics.inc_weather_fetches();
                                match weather_query(&settings, &location) {
                                    Some(query) => pending_fetch = Some((query, Instant::now())),
                                    None => weather.complete(Err("Location unavailable".to_owned())),
                                }
                            }
                        }

                        // Simulated network failure toggle
                        Keycode::X => {
                            weather_provider.offline = !weather_provider.offline;
                            debug_log.push(if weather_provider.offline {
                                "Network: offline"
                            } else {
                                "Network: online"
                            });
                        }

                        // ------------------------------------------------------
                        // Alarm editor keys (Alarms page only)
                        // ------------------------------------------------------
                        Keycode::A if current_page == Page::Alarms => {
                            selected_alarm = if selected_alarm == 1 { 2 } else { 1 };
                        }
                        Keycode::E if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                alarm.is_enabled = !alarm.is_enabled;
                            }
                        }
                        Keycode::Up if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::adjust_hour(alarm, 1);
                            }
                        }
                        Keycode::Down if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::adjust_hour(alarm, -1);
                            }
                        }
                        Keycode::Right if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::adjust_minute(alarm, 1);
                            }
                        }
                        Keycode::Left if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::adjust_minute(alarm, -1);
                            }
                        }
                        Keycode::V if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::step_volume(alarm);
                            }
                        }
                        Keycode::F if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                alarm.fade_in_enabled = !alarm.fade_in_enabled;
                            }
                        }
                        Keycode::S if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::cycle_snooze(alarm);
                            }
                        }
                        Keycode::M if current_page == Page::Alarms => {
                            if let Some(alarm) = alarms.by_id_mut(selected_alarm) {
                                input::toggle_music_mode(alarm);
                            }
                        }
                        // Explicit save: edits stay in memory until Enter
                        Keycode::Return if current_page == Page::Alarms => {
                            match selected_alarm {
                                1 => alarms.save_alarm1(&mut store),
                                _ => alarms.save_alarm2(&mut store),
                            }
                            if let Err(err) = store.save() {
                                log::warn!("Failed to save alarms: {err}");
                            }
                            active_popup = Some(Popup::AlarmSaved(Instant::now()));
                            metrics.inc_popups_shown();
                        }

                        // Toggle day keys, Sun..Sat on 0..6
                        key if current_page == Page::Alarms => {
                            if let Some(day) = day_index(key)
                                && let Some(alarm) = alarms.by_id_mut(selected_alarm)
                            {
                                alarm.days_enabled[day] = !alarm.days_enabled[day];
                            }
                        }

                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Weather Completion Polling
        // ======================================================================

        if let Some((query, started)) = &pending_fetch
            && started.elapsed() >= WEATHER_FETCH_LATENCY
        {
            let result = weather_provider.fetch(query);
            debug_log.push(match &result {
                Ok(_) => "Weather: ready",
                Err(_) => "Weather: failed",
            });
            weather.complete(result);
            pending_fetch = None;
        }

        // ======================================================================
        // Popup Lifecycle
        // ======================================================================

        if let Some(ref popup) = active_popup
            && popup.is_expired()
        {
            active_popup = None;
        }
        render_state.update_popup(active_popup.as_ref());

        if render_state.is_first_frame() || render_state.popup_just_closed() || page_just_switched {
            display.clear(BLACK).ok();
            if page_just_switched {
                render_state.mark_display_cleared();
            }
        }

        // ======================================================================
        // Per-Tick Derivation
        // ======================================================================

        let now = Local::now();
        face_fade.set_target(settings.display_color.as_rgb());
        face_fade.update();
        let mut face_spec = ClockFaceSpec::derive(&now, &settings);
        face_spec.color = face_fade.current();

        // ======================================================================
        // Page Rendering
        // ======================================================================

        match current_page {
            Page::Clock => {
                let header_content = HeaderContent {
                    day_ordinal: now.ordinal(),
                    badge_mask: u8::from(alarms.alarm1.is_enabled)
                        | u8::from(alarms.alarm2.is_enabled) << 1
                        | u8::from(alarms.is_music_player_mode()) << 2,
                    color_key: settings.display_color as u8,
                };
                if render_state.check_header_dirty(header_content) {
                    // Repaint the bar background so stale badges disappear
                    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT))
                        .into_styled(PrimitiveStyle::with_fill(BLACK))
                        .draw(&mut display)
                        .ok();
                    draw_header(
                        &mut display,
                        now.date_naive(),
                        &alarms.enabled_alarm_indicators(),
                        alarms.is_music_player_mode(),
                        settings.display_color.as_rgb(),
                    );
                    metrics.inc_header_redraws();
                }

                // The face always redraws over a cleared area: its content
                // changes every minute and the fade every frame
                Rectangle::new(face_bounds.top_left, face_bounds.size)
                    .into_styled(PrimitiveStyle::with_fill(BLACK))
                    .draw(&mut display)
                    .ok();
                draw_clock_face(&mut display, face_bounds, &face_spec);
                metrics.inc_face_redraws();
            }

            Page::Forecast => {
                display.clear(BLACK).ok();
                draw_forecast_page(&mut display, &weather, settings.is_fahrenheit());
            }

            Page::Alarms => {
                display.clear(BLACK).ok();
                draw_alarms_page(&mut display, &alarms, selected_alarm);
            }

            Page::Diagnostics => {
                display.clear(BLACK).ok();
                let storefront = music.storefront().unwrap_or_else(|err| err);
                draw_diagnostics_page(
                    &mut display,
                    &metrics,
                    &debug_log,
                    location.authorization(),
                    music.status(),
                    &storefront,
                    &weather,
                    current_fps,
                );
            }
        }

        // Popups draw last so they sit on top of page content
        if let Some(ref popup) = active_popup {
            match popup {
                Popup::Color(_) => draw_color_popup(&mut display, settings.display_color),
                Popup::Unit(_) => draw_unit_popup(&mut display, settings.temperature_unit),
                Popup::Format(_) => draw_format_popup(&mut display, settings.time_format),
                Popup::AlarmSaved(_) => draw_alarm_saved_popup(&mut display, selected_alarm),
                Popup::WeatherRefresh(_) => draw_weather_refresh_popup(&mut display),
            }
        }

        // ======================================================================
        // Frame Timing
        // ======================================================================

        let render_time = frame_start.elapsed();

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        render_state.end_frame();
        page_just_switched = false;

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if pre_sleep < FRAME_TIME {
            thread::sleep(FRAME_TIME - pre_sleep);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

/// Map the 0-6 number keys to a day index (Sun..Sat), if applicable.
fn day_index(key: Keycode) -> Option<usize> {
    match key {
        Keycode::Num0 => Some(0),
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        Keycode::Num5 => Some(5),
        Keycode::Num6 => Some(6),
        _ => None,
    }
}
