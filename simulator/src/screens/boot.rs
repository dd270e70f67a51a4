//! Boot sequence: console-style init messages, then a segment lamp test.
//!
//! The console phase mimics a retro init log with an animated spinner.
//! The lamp test lights every segment ("88:88") for a moment before the
//! main loop starts - if a segment were broken you would see it here.

use core::fmt::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;

use nightstand_common::clock::ClockFaceSpec;
use nightstand_common::colors::{BLACK, BLUE, WHITE};
use nightstand_common::config::{FACE_MARGIN_X, FACE_MARGIN_Y, HEADER_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use nightstand_common::styles::{CENTERED, LEFT_ALIGNED};
use nightstand_common::widgets::clock_face::draw_clock_face;

// =============================================================================
// Layout Constants
// =============================================================================

/// Title text position (horizontally centered).
const TITLE_POS: Point = Point::new(160, 25);

/// Divider line endpoints under the title.
const LINE_START: Point = Point::new(10, 35);
const LINE_END: Point = Point::new(310, 35);

/// Console text origin and line spacing.
const CONSOLE_X: i32 = 10;
const CONSOLE_START_Y: i32 = 50;
const CONSOLE_LINE_HEIGHT: i32 = 14;

/// How long the all-segments lamp test stays up.
const LAMP_TEST_DURATION: Duration = Duration::from_millis(1200);

// =============================================================================
// Pre-computed Styles
// =============================================================================

/// Blue title text style (`FONT_10X20`).
const TITLE_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&embedded_graphics::mono_font::ascii::FONT_10X20, BLUE);

/// White console text style (`FONT_6X10`).
const CONSOLE_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&embedded_graphics::mono_font::ascii::FONT_6X10, WHITE);

/// Blue stroke style for the divider line (1px).
const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BLUE, 1);

// =============================================================================
// Boot Sequence
// =============================================================================

/// Run the boot sequence. Returns `false` if the window is closed.
pub fn run_boot_screen(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window) -> bool {
    // Init messages: (text, display duration in ms)
    let init_messages = [
        ("Restoring saved settings...", 600),
        ("Loading alarm profiles...", 500),
        ("Requesting location access...", 700),
        ("Starting weather service...", 600),
        ("Segment lamp test...", 400),
        ("Ready.", 400),
    ];

    // Spinner animation characters (classic text-mode spinner)
    let spinner_chars = ['|', '/', '-', '\\'];
    let mut spinner_idx = 0;
    let mut spinner_frame = 0u32;

    let mut console_lines: Vec<&str> = Vec::new();

    for (msg, duration_ms) in &init_messages {
        console_lines.push(msg);

        let msg_start = Instant::now();
        let msg_duration = Duration::from_millis(*duration_ms);

        while msg_start.elapsed() < msg_duration {
            for ev in window.events() {
                if matches!(ev, SimulatorEvent::Quit) {
                    return false;
                }
            }

            display.clear(BLACK).ok();

            // Update spinner every 8 frames for a calm spin
            spinner_frame = spinner_frame.wrapping_add(1);
            if spinner_frame.is_multiple_of(8) {
                spinner_idx = (spinner_idx + 1) % spinner_chars.len();
            }
            let spinner = spinner_chars[spinner_idx];

            let mut title: String<32> = String::new();
            let _ = write!(title, "{spinner}  nightstand  {spinner}");
            Text::with_text_style(&title, TITLE_POS, TITLE_STYLE, CENTERED)
                .draw(display)
                .ok();

            Line::new(LINE_START, LINE_END).into_styled(DIVIDER_STYLE).draw(display).ok();

            for (i, line) in console_lines.iter().enumerate() {
                let y_pos = CONSOLE_START_Y + (i as i32 * CONSOLE_LINE_HEIGHT);
                let prefix = if i == console_lines.len() - 1 { "> " } else { "  " };
                let mut full_line: String<64> = String::new();
                let _ = write!(full_line, "{prefix}{line}");
                Text::with_text_style(&full_line, Point::new(CONSOLE_X, y_pos), CONSOLE_STYLE, LEFT_ALIGNED)
                    .draw(display)
                    .ok();
            }

            window.update(display);
            thread::sleep(Duration::from_millis(16));
        }
    }

    run_lamp_test(display, window)
}

/// Light every segment for a moment: an "88:88" face with all bars on.
fn run_lamp_test(display: &mut SimulatorDisplay<Rgb565>, window: &mut Window) -> bool {
    let mut lamp_time: String<8> = String::new();
    let _ = lamp_time.push_str("88:88");
    let spec = ClockFaceSpec {
        time_text: lamp_time,
        color: BLUE,
        show_12_hour_indicator: false,
        is_afternoon: false,
    };
    let bounds = Rectangle::new(
        Point::new(FACE_MARGIN_X as i32, (HEADER_HEIGHT + FACE_MARGIN_Y) as i32),
        Size::new(
            SCREEN_WIDTH - 2 * FACE_MARGIN_X,
            SCREEN_HEIGHT - HEADER_HEIGHT - 2 * FACE_MARGIN_Y,
        ),
    );

    let start = Instant::now();
    while start.elapsed() < LAMP_TEST_DURATION {
        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                return false;
            }
        }
        display.clear(BLACK).ok();
        draw_clock_face(display, bounds, &spec);
        window.update(display);
        thread::sleep(Duration::from_millis(33));
    }
    true
}
