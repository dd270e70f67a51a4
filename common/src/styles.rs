//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder::build` are const fn in
//! embedded-graphics 0.8, so every fixed-color style lives in the binary's
//! read-only data section. Styles that need a dynamic color (anything drawn
//! in the user-selected segment color) are created at the call site from the
//! exposed font references; only the color varies, the font reference is
//! shared.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{GRAY, GREEN, ORANGE, RED, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text alignment. Used for popup text and forecast cell content.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the header date and diagnostics output.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Used for the alarm indicators in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

/// Centered text anchored at its bottom edge. Used for the AM/PM glyph,
/// which the clock face bottom-aligns against the digit baseline.
pub const CENTERED_BOTTOM: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Bottom)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels). Usage: `MonoTextStyle::new(LABEL_FONT, color)`.
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Medium font (`ProFont` 18pt). Used for the AM/PM glyph and forecast temps,
/// drawn in the user-selected display color.
pub const MEDIUM_FONT: &MonoFont = &PROFONT_18_POINT;

/// Large font (`ProFont` 24pt). Used for the current temperature readout.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Small white text for labels on the black background.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for dimmed labels (placeholder hints, day names).
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);

/// Small orange text for forecast placeholders and log lines.
pub const LABEL_STYLE_ORANGE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, ORANGE);

/// Small red text for service error messages.
pub const LABEL_STYLE_RED: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, RED);

/// Small green text for the diagnostics header and log prompt.
pub const LABEL_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);

/// Medium white text for popup messages (10x20 pixels).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Large white text for the current temperature (`ProFont` 24pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
