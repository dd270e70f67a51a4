//! Clock face composition: four digits, colon, and optional AM/PM glyph.
//!
//! The face is recomposed from a [`ClockFaceSpec`] on every tick. Layout is
//! proportional to the bounding box - cell widths are fractions of the total
//! width, never absolute pixels - so the same code renders correctly at any
//! display size.
//!
//! Cell order, left to right:
//!
//! ```text
//! [d0 | blank][d1][:][d2][d3][AM/PM]
//! ```
//!
//! The AM/PM column only exists in 12-hour mode. In that mode a leading zero
//! digit is suppressed entirely (a blank cell of the same width keeps the
//! remaining digits in place), reproducing conventional 12-hour clocks.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::Text,
};

use crate::clock::ClockFaceSpec;
use crate::styles::{CENTERED_BOTTOM, MEDIUM_FONT};
use crate::widgets::digit::{DigitGeometry, draw_digit};

/// Glyph substituted for any character that does not parse as a digit.
/// An 8 lights every segment, so a corrupted position still reads as a
/// plausible clock.
const FALLBACK_DIGIT: u8 = 8;

/// Extract the four face digits from an "HH:MM" string.
///
/// The separator is stripped and each of the four remaining positions is
/// parsed independently; a malformed or missing character yields
/// [`FALLBACK_DIGIT`] for that position only. This never fails.
pub fn face_digits(time_text: &str) -> [u8; 4] {
    let mut digits = [FALLBACK_DIGIT; 4];
    let mut positions = time_text.chars().filter(|c| *c != ':');
    for slot in &mut digits {
        *slot = positions
            .next()
            .and_then(|c| c.to_digit(10))
            .map_or(FALLBACK_DIGIT, |d| d as u8);
    }
    digits
}

/// Whether the leading digit cell renders blank instead of a glyph.
pub const fn suppress_leading_digit(digits: &[u8; 4], show_12_hour: bool) -> bool {
    show_12_hour && digits[0] == 0
}

// =============================================================================
// Proportional Layout
// =============================================================================

/// Computed cell rectangles for one face composition.
///
/// Widths are derived from the box in half-digit units: each digit cell is
/// two units, the colon one unit, and the AM/PM column (12-hour mode only)
/// two units. The exact fractions are visual tuning; the invariants are the
/// left-to-right order and that cells never overlap at any box size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceLayout {
    /// The four digit cells, left to right.
    pub digit_cells: [Rectangle; 4],
    /// The colon cell between hour and minute digits.
    pub colon_cell: Rectangle,
    /// AM/PM column, present only in 12-hour mode.
    pub ampm_cell: Option<Rectangle>,
}

impl FaceLayout {
    /// Split the bounding box into face cells.
    pub fn compute(bounds: Rectangle, show_ampm: bool) -> Self {
        // 4 digits x 2 units + colon x 1 unit (+ AM/PM x 2 units)
        let total_units: u32 = if show_ampm { 11 } else { 9 };
        let unit = bounds.size.width / total_units;
        let digit_w = unit * 2;
        let height = bounds.size.height;

        let x = bounds.top_left.x;
        let y = bounds.top_left.y;
        let cell = |offset_units: u32, width: u32| {
            Rectangle::new(
                Point::new(x + (offset_units * unit) as i32, y),
                Size::new(width, height),
            )
        };

        Self {
            digit_cells: [
                cell(0, digit_w),
                cell(2, digit_w),
                cell(5, digit_w),
                cell(7, digit_w),
            ],
            colon_cell: cell(4, unit),
            ampm_cell: show_ampm.then(|| cell(9, digit_w)),
        }
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Colon dot diameter as a fraction of the colon cell width.
/// Independent of the digit stroke width.
const COLON_DOT_DIVISOR: u32 = 2;

/// Vertical offset of each colon dot center from the face midline, as a
/// fraction of the face height.
const COLON_SPREAD_DIVISOR: u32 = 8;

/// Compose the full face into `bounds`.
///
/// Digit parse failures degrade to 8-glyphs per position; the composition
/// itself cannot fail. Pure given `(spec, bounds)` - no hidden state.
pub fn draw_clock_face<D>(display: &mut D, bounds: Rectangle, spec: &ClockFaceSpec)
where
    D: DrawTarget<Color = Rgb565>,
{
    let digits = face_digits(&spec.time_text);
    let layout = FaceLayout::compute(bounds, spec.show_12_hour_indicator);
    let geometry = DigitGeometry::scaled_to(bounds.size.height);
    let blank_leading = suppress_leading_digit(&digits, spec.show_12_hour_indicator);

    for (index, (digit, cell)) in digits.iter().zip(layout.digit_cells.iter()).enumerate() {
        if index == 0 && blank_leading {
            continue;
        }
        draw_digit(display, cell.top_left, cell.size, *digit, spec.color, geometry);
    }

    draw_colon(display, layout.colon_cell, spec.color);

    if let Some(ampm) = layout.ampm_cell {
        let label = if spec.is_afternoon { "PM" } else { "AM" };
        let style = embedded_graphics::mono_font::MonoTextStyle::new(MEDIUM_FONT, spec.color);
        // Bottom-aligned against the digit baseline, outside the digit cells
        let anchor = Point::new(
            ampm.top_left.x + ampm.size.width as i32 / 2,
            ampm.top_left.y + ampm.size.height as i32 - geometry.gap as i32,
        );
        Text::with_text_style(label, anchor, style, CENTERED_BOTTOM)
            .draw(display)
            .ok();
    }
}

/// Two filled circles stacked with a gap, vertically centered in the cell.
fn draw_colon<D>(display: &mut D, cell: Rectangle, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    let diameter = (cell.size.width / COLON_DOT_DIVISOR).max(2);
    let center_x = cell.top_left.x + cell.size.width as i32 / 2;
    let mid_y = cell.top_left.y + cell.size.height as i32 / 2;
    let spread = (cell.size.height / COLON_SPREAD_DIVISOR) as i32;

    for dot_center_y in [mid_y - spread, mid_y + spread] {
        let top_left = Point::new(
            center_x - diameter as i32 / 2,
            dot_center_y - diameter as i32 / 2,
        );
        Circle::new(top_left, diameter).into_styled(fill).draw(display).ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use heapless::String;

    fn spec(time: &str, twelve_hour: bool, afternoon: bool) -> ClockFaceSpec {
        let mut time_text: String<8> = String::new();
        let _ = time_text.push_str(time);
        ClockFaceSpec {
            time_text,
            color: Rgb565::WHITE,
            show_12_hour_indicator: twelve_hour,
            is_afternoon: afternoon,
        }
    }

    // -------------------------------------------------------------------------
    // Digit Extraction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_face_digits_happy_path() {
        assert_eq!(face_digits("12:34"), [1, 2, 3, 4]);
        assert_eq!(face_digits("00:00"), [0, 0, 0, 0]);
        assert_eq!(face_digits("23:59"), [2, 3, 5, 9]);
    }

    #[test]
    fn test_face_digits_malformed_positions_become_eight() {
        assert_eq!(face_digits("x2:34"), [8, 2, 3, 4], "Bad char falls back per position");
        assert_eq!(face_digits("1x:3x"), [1, 8, 3, 8]);
        assert_eq!(face_digits("::::"), [8, 8, 8, 8]);
    }

    #[test]
    fn test_face_digits_short_input_pads_with_eight() {
        assert_eq!(face_digits(""), [8, 8, 8, 8]);
        assert_eq!(face_digits("1:2"), [1, 2, 8, 8]);
    }

    #[test]
    fn test_face_digits_ignores_separator_position() {
        // The separator is stripped wherever it appears
        assert_eq!(face_digits("1234"), [1, 2, 3, 4]);
        assert_eq!(face_digits(":1234"), [1, 2, 3, 4]);
    }

    // -------------------------------------------------------------------------
    // Leading Zero Suppression Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_suppression_only_in_12_hour_mode() {
        let digits = face_digits("08:15");
        assert!(suppress_leading_digit(&digits, true), "08:15 in 12h mode blanks the 0");
        assert!(!suppress_leading_digit(&digits, false), "24h mode always shows the 0");
    }

    #[test]
    fn test_suppression_requires_leading_zero() {
        let digits = face_digits("12:15");
        assert!(!suppress_leading_digit(&digits, true), "12:15 keeps all four digits");
    }

    // -------------------------------------------------------------------------
    // Layout Tests
    // -------------------------------------------------------------------------

    fn right_edge(r: &Rectangle) -> i32 {
        r.top_left.x + r.size.width as i32
    }

    #[test]
    fn test_layout_cells_ordered_and_disjoint() {
        for show_ampm in [false, true] {
            for width in [180u32, 300, 320, 641] {
                let bounds = Rectangle::new(Point::new(10, 20), Size::new(width, 160));
                let layout = FaceLayout::compute(bounds, show_ampm);

                let mut cells = vec![
                    layout.digit_cells[0],
                    layout.digit_cells[1],
                    layout.colon_cell,
                    layout.digit_cells[2],
                    layout.digit_cells[3],
                ];
                if let Some(ampm) = layout.ampm_cell {
                    cells.push(ampm);
                }

                for pair in cells.windows(2) {
                    assert!(
                        right_edge(&pair[0]) <= pair[1].top_left.x,
                        "Cells must not overlap (width {width}, ampm {show_ampm})"
                    );
                }
                assert!(
                    right_edge(cells.last().unwrap()) <= right_edge(&bounds),
                    "Last cell must stay inside the box (width {width}, ampm {show_ampm})"
                );
            }
        }
    }

    #[test]
    fn test_layout_digit_cells_equal_width() {
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 160));
        let layout = FaceLayout::compute(bounds, true);
        let w = layout.digit_cells[0].size.width;
        for cell in &layout.digit_cells {
            assert_eq!(cell.size.width, w, "All digit cells share one width");
        }
        assert_eq!(layout.colon_cell.size.width * 2, w, "Colon is half a digit cell");
        assert_eq!(layout.ampm_cell.unwrap().size.width, w, "AM/PM column matches a digit cell");
    }

    #[test]
    fn test_layout_ampm_absent_in_24_hour_mode() {
        let bounds = Rectangle::new(Point::zero(), Size::new(320, 160));
        assert!(FaceLayout::compute(bounds, false).ampm_cell.is_none());
    }

    // -------------------------------------------------------------------------
    // Composition Tests
    // -------------------------------------------------------------------------

    /// Render into a mock display and collect the lit pixel positions.
    fn rendered_pixels(spec: &ClockFaceSpec) -> Vec<(i32, i32)> {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        // The AM/PM glyph font can spill past the 64x64 mock area
        display.set_allow_out_of_bounds_drawing(true);
        let bounds = Rectangle::new(Point::new(2, 2), Size::new(56, 40));
        draw_clock_face(&mut display, bounds, spec);

        let mut lit = Vec::new();
        for y in 0..64 {
            for x in 0..64 {
                if display.get_pixel(Point::new(x, y)).is_some() {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_compose_is_idempotent() {
        let s = spec("12:34", false, false);
        assert_eq!(
            rendered_pixels(&s),
            rendered_pixels(&s),
            "Same spec must produce identical output"
        );
    }

    #[test]
    fn test_leading_blank_renders_less_than_leading_zero() {
        // 08:15 in 12-hour mode suppresses the first glyph
        let suppressed = rendered_pixels(&spec("08:15", true, false));
        let full = rendered_pixels(&spec("08:15", false, false));
        assert_ne!(suppressed, full, "Suppressed face must differ from the full face");

        // The suppressed face draws nothing in the first digit cell
        let bounds = Rectangle::new(Point::new(2, 2), Size::new(56, 40));
        let layout = FaceLayout::compute(bounds, true);
        let first_cell = layout.digit_cells[0];
        let blank_limit = first_cell.top_left.x + first_cell.size.width as i32;
        let leftmost = suppressed.iter().map(|(x, _)| *x).min().unwrap();
        assert!(
            leftmost >= blank_limit,
            "First cell must be blank when the leading zero is suppressed \
             (leftmost lit pixel {leftmost}, cell ends at {blank_limit})"
        );
    }

    #[test]
    fn test_am_pm_selection_changes_output() {
        let am = rendered_pixels(&spec("09:00", true, false));
        let pm = rendered_pixels(&spec("09:00", true, true));
        assert_ne!(am, pm, "AM and PM glyphs must render differently");
    }
}
