//! Single seven-segment digit rendering.
//!
//! A digit glyph composites at most seven bar shapes from
//! [`crate::widgets::segments`] in one flat color. Segments that are not
//! active for the digit are omitted entirely, not dimmed. All bar positions
//! are derived from the bounding box plus two knobs (stroke width and
//! inter-segment gap), so the glyph stays correct at any display size as
//! long as the knobs scale with the box.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

use crate::config::{REFERENCE_DIGIT_HEIGHT, SEGMENT_GAP, SEGMENT_STROKE};
use crate::widgets::segments::{FULL_GLYPH, Segment, draw_horizontal_bar, draw_vertical_bar, segments_for};

/// Stroke width and inter-segment gap for one digit, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigitGeometry {
    /// Thickness of each bar.
    pub stroke: u32,
    /// Breathing room between bars.
    pub gap: u32,
}

impl Default for DigitGeometry {
    /// The reference proportions (stroke 12, gap 4).
    fn default() -> Self {
        Self { stroke: SEGMENT_STROKE, gap: SEGMENT_GAP }
    }
}

impl DigitGeometry {
    /// Scale the reference proportions to a digit cell of the given height.
    ///
    /// Keeps stroke and gap in their reference ratio to the cell so the
    /// glyph shape is size-independent. Both are clamped to at least 1px.
    pub fn scaled_to(height: u32) -> Self {
        Self {
            stroke: (SEGMENT_STROKE * height / REFERENCE_DIGIT_HEIGHT).max(1),
            gap: (SEGMENT_GAP * height / REFERENCE_DIGIT_HEIGHT).max(1),
        }
    }
}

/// Bounding rectangle of one segment bar inside a digit box, relative to
/// the box origin.
///
/// Horizontal bars span the box width minus a gap on each side and sit at
/// the top, middle, and bottom. Vertical bars occupy one half-height column
/// at the four corner quadrants. All positions are pure arithmetic on the
/// box size, `stroke`, and `gap`.
pub fn segment_rect(segment: Segment, box_size: Size, geometry: DigitGeometry) -> Rectangle {
    let w = box_size.width as i32;
    let h = box_size.height as i32;
    let s = geometry.stroke as i32;
    let g = geometry.gap as i32;

    let horizontal = Size::new((w - 2 * g).max(0) as u32, geometry.stroke);
    let vertical = Size::new(geometry.stroke, (h / 2 - 2 * g).max(0) as u32);

    match segment {
        Segment::Top => Rectangle::new(Point::new(g, g), horizontal),
        Segment::Middle => Rectangle::new(Point::new(g, h / 2 - s / 2), horizontal),
        Segment::Bottom => Rectangle::new(Point::new(g, h - s - g), horizontal),
        Segment::TopRight => Rectangle::new(Point::new(w - s - g, 2 * g), vertical),
        Segment::BottomRight => Rectangle::new(Point::new(w - s - g, h / 2 + g), vertical),
        Segment::BottomLeft => Rectangle::new(Point::new(g, h / 2 + g), vertical),
        Segment::TopLeft => Rectangle::new(Point::new(g, 2 * g), vertical),
    }
}

/// Draw one digit glyph into the box at `top_left`.
///
/// Values outside 0-9 render the full glyph (all seven segments, i.e. an 8)
/// rather than failing: a partially broken clock still shows a plausible
/// face.
pub fn draw_digit<D>(
    display: &mut D,
    top_left: Point,
    box_size: Size,
    digit: u8,
    color: Rgb565,
    geometry: DigitGeometry,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let active = segments_for(digit).unwrap_or(FULL_GLYPH);

    for segment in active {
        let rect = segment_rect(*segment, box_size, geometry);
        let origin = top_left + rect.top_left;
        if segment.is_horizontal() {
            draw_horizontal_bar(display, origin, rect.size, color);
        } else {
            draw_vertical_bar(display, origin, rect.size, color);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Size = Size::new(60, 100);
    const GEO: DigitGeometry = DigitGeometry { stroke: 12, gap: 4 };

    // -------------------------------------------------------------------------
    // Layout Formula Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_horizontal_segment_rects() {
        // 60x100 box, stroke 12, gap 4
        let top = segment_rect(Segment::Top, BOX, GEO);
        assert_eq!(top, Rectangle::new(Point::new(4, 4), Size::new(52, 12)));

        let middle = segment_rect(Segment::Middle, BOX, GEO);
        assert_eq!(middle, Rectangle::new(Point::new(4, 44), Size::new(52, 12)));

        let bottom = segment_rect(Segment::Bottom, BOX, GEO);
        assert_eq!(bottom, Rectangle::new(Point::new(4, 84), Size::new(52, 12)));
    }

    #[test]
    fn test_vertical_segment_rects() {
        let tr = segment_rect(Segment::TopRight, BOX, GEO);
        assert_eq!(tr, Rectangle::new(Point::new(44, 8), Size::new(12, 42)));

        let br = segment_rect(Segment::BottomRight, BOX, GEO);
        assert_eq!(br, Rectangle::new(Point::new(44, 54), Size::new(12, 42)));

        let bl = segment_rect(Segment::BottomLeft, BOX, GEO);
        assert_eq!(bl, Rectangle::new(Point::new(4, 54), Size::new(12, 42)));

        let tl = segment_rect(Segment::TopLeft, BOX, GEO);
        assert_eq!(tl, Rectangle::new(Point::new(4, 8), Size::new(12, 42)));
    }

    #[test]
    fn test_left_right_columns_are_mirrored() {
        let tl = segment_rect(Segment::TopLeft, BOX, GEO);
        let tr = segment_rect(Segment::TopRight, BOX, GEO);
        assert_eq!(tl.top_left.y, tr.top_left.y, "Both top columns start at the same y");
        assert_eq!(
            tl.top_left.x + tr.top_left.x + GEO.stroke as i32,
            BOX.width as i32,
            "Columns sit symmetrically inside the box"
        );
    }

    #[test]
    fn test_horizontal_bars_never_touch() {
        // Top/middle/bottom bars must be strictly separated for any
        // proportional scaling of the reference geometry
        for scale in [1u32, 2, 3, 5] {
            let size = Size::new(60 * scale, 100 * scale);
            let geo = DigitGeometry { stroke: 12 * scale, gap: 4 * scale };
            let top = segment_rect(Segment::Top, size, geo);
            let middle = segment_rect(Segment::Middle, size, geo);
            let bottom = segment_rect(Segment::Bottom, size, geo);

            assert!(
                top.top_left.y + top.size.height as i32 <= middle.top_left.y,
                "Scale {scale}: top bar must end before the middle bar starts"
            );
            assert!(
                middle.top_left.y + middle.size.height as i32 <= bottom.top_left.y,
                "Scale {scale}: middle bar must end before the bottom bar starts"
            );
        }
    }

    #[test]
    fn test_vertical_columns_never_cross_the_middle() {
        let tr = segment_rect(Segment::TopRight, BOX, GEO);
        let br = segment_rect(Segment::BottomRight, BOX, GEO);
        let half = BOX.height as i32 / 2;
        assert!(tr.top_left.y + tr.size.height as i32 <= half + GEO.stroke as i32);
        assert!(br.top_left.y >= half, "Bottom column starts at or below the midline");
    }

    #[test]
    fn test_rects_scale_proportionally() {
        // Doubling box and knobs doubles every rect - the ratio layout
        // required for size independence
        for seg in [
            Segment::Top,
            Segment::TopRight,
            Segment::BottomRight,
            Segment::Bottom,
            Segment::BottomLeft,
            Segment::TopLeft,
            Segment::Middle,
        ] {
            let base = segment_rect(seg, BOX, GEO);
            let doubled = segment_rect(
                seg,
                Size::new(BOX.width * 2, BOX.height * 2),
                DigitGeometry { stroke: GEO.stroke * 2, gap: GEO.gap * 2 },
            );
            assert_eq!(doubled.top_left.x, base.top_left.x * 2, "{seg:?} x should double");
            assert_eq!(doubled.top_left.y, base.top_left.y * 2, "{seg:?} y should double");
            assert_eq!(doubled.size.width, base.size.width * 2, "{seg:?} width should double");
            assert_eq!(doubled.size.height, base.size.height * 2, "{seg:?} height should double");
        }
    }

    #[test]
    fn test_rects_stay_inside_box() {
        for seg in [
            Segment::Top,
            Segment::TopRight,
            Segment::BottomRight,
            Segment::Bottom,
            Segment::BottomLeft,
            Segment::TopLeft,
            Segment::Middle,
        ] {
            let r = segment_rect(seg, BOX, GEO);
            assert!(r.top_left.x >= 0 && r.top_left.y >= 0, "{seg:?} origin inside box");
            assert!(
                r.top_left.x + r.size.width as i32 <= BOX.width as i32,
                "{seg:?} right edge inside box"
            );
            assert!(
                r.top_left.y + r.size.height as i32 <= BOX.height as i32,
                "{seg:?} bottom edge inside box"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Geometry Scaling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_default_geometry_is_reference() {
        let geo = DigitGeometry::default();
        assert_eq!(geo.stroke, 12);
        assert_eq!(geo.gap, 4);
    }

    #[test]
    fn test_scaled_geometry_at_reference_height() {
        assert_eq!(DigitGeometry::scaled_to(160), DigitGeometry::default());
    }

    #[test]
    fn test_scaled_geometry_halves() {
        let geo = DigitGeometry::scaled_to(80);
        assert_eq!(geo.stroke, 6);
        assert_eq!(geo.gap, 2);
    }

    #[test]
    fn test_scaled_geometry_never_zero() {
        let geo = DigitGeometry::scaled_to(8);
        assert!(geo.stroke >= 1 && geo.gap >= 1, "Tiny digits still get visible bars");
    }

    // -------------------------------------------------------------------------
    // Drawing Tests
    // -------------------------------------------------------------------------

    /// Draw one digit into a mock display and collect the lit pixels.
    fn digit_pixels(digit: u8) -> Vec<(i32, i32)> {
        use embedded_graphics::mock_display::MockDisplay;

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_digit(
            &mut display,
            Point::zero(),
            Size::new(24, 40),
            digit,
            Rgb565::WHITE,
            DigitGeometry { stroke: 4, gap: 2 },
        );

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
    fn test_draw_digit_out_of_range_falls_back_to_eight() {
        assert_eq!(
            digit_pixels(42),
            digit_pixels(8),
            "Out-of-range digits must render as a full 8 glyph"
        );
    }

    #[test]
    fn test_draw_digit_one_touches_only_right_column() {
        let geo = DigitGeometry { stroke: 4, gap: 2 };
        let expected_left = 24 - geo.stroke as i32 - geo.gap as i32;
        let leftmost = digit_pixels(1).iter().map(|(x, _)| *x).min().unwrap();
        assert!(
            leftmost >= expected_left,
            "Digit 1 must only draw in the right column (left edge {leftmost}, expected >= {expected_left})"
        );
    }
}
