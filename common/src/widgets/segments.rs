//! Seven-segment geometry: digit decomposition and LED-bar shapes.
//!
//! A digit glyph is built from up to seven bars in the classic layout
//! (conventionally lettered A-G):
//!
//! ```text
//!      ___A___
//!     |       |
//!     F       B
//!     |__ G __|
//!     |       |
//!     E       C
//!     |___D___|
//! ```
//!
//! Each bar is a six-vertex hexagon with pointed ends - the angled-end look
//! of a real LED segment display. This is a required visual property of the
//! face, not a styling choice. embedded-graphics has no filled polygon
//! primitive, so each hexagon is rasterized as one `Rectangle` body plus two
//! `Triangle` end caps; the union of the three covers exactly the hexagon.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, Triangle},
};

// =============================================================================
// Segment Identity
// =============================================================================

/// One of the seven fixed bar positions composing a digit glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Horizontal bar across the top (A).
    Top,
    /// Vertical bar, upper right (B).
    TopRight,
    /// Vertical bar, lower right (C).
    BottomRight,
    /// Horizontal bar across the bottom (D).
    Bottom,
    /// Vertical bar, lower left (E).
    BottomLeft,
    /// Vertical bar, upper left (F).
    TopLeft,
    /// Horizontal bar across the middle (G).
    Middle,
}

impl Segment {
    /// True for the three horizontal bars (top, middle, bottom).
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Middle | Self::Bottom)
    }
}

use Segment::{Bottom, BottomLeft, BottomRight, Middle, Top, TopLeft, TopRight};

/// Active segments for each decimal digit 0-9.
const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    &[Top, TopRight, BottomRight, Bottom, BottomLeft, TopLeft],         // 0
    &[TopRight, BottomRight],                                           // 1
    &[Top, TopRight, Bottom, BottomLeft, Middle],                       // 2
    &[Top, TopRight, BottomRight, Bottom, Middle],                      // 3
    &[TopRight, BottomRight, TopLeft, Middle],                          // 4
    &[Top, BottomRight, Bottom, TopLeft, Middle],                       // 5
    &[Top, BottomRight, Bottom, BottomLeft, TopLeft, Middle],           // 6
    &[Top, TopRight, BottomRight],                                      // 7
    &[Top, TopRight, BottomRight, Bottom, BottomLeft, TopLeft, Middle], // 8
    &[Top, TopRight, BottomRight, Bottom, TopLeft, Middle],             // 9
];

/// All seven segments - the glyph for 8, and the safe fallback for any
/// value that is not a decimal digit.
pub const FULL_GLYPH: &[Segment] = DIGIT_SEGMENTS[8];

/// Look up the active segments for a decimal digit.
///
/// Defined for exactly 0-9; any other value returns `None` and the caller
/// decides how to recover (the digit widget substitutes [`FULL_GLYPH`]).
pub fn segments_for(digit: u8) -> Option<&'static [Segment]> {
    DIGIT_SEGMENTS.get(usize::from(digit)).copied()
}

// =============================================================================
// Bar Shapes
// =============================================================================

/// Vertices of a horizontal bar hexagon with pointed left/right ends.
///
/// For a bar of width `w` and height `h`, in clockwise order from the
/// upper-left shoulder:
/// `(h/2,0) (w-h/2,0) (w,h/2) (w-h/2,h) (h/2,h) (0,h/2)`
pub fn horizontal_bar_vertices(w: u32, h: u32) -> [Point; 6] {
    let (w, h) = (w as i32, h as i32);
    [
        Point::new(h / 2, 0),
        Point::new(w - h / 2, 0),
        Point::new(w, h / 2),
        Point::new(w - h / 2, h),
        Point::new(h / 2, h),
        Point::new(0, h / 2),
    ]
}

/// Vertices of a vertical bar hexagon with pointed top/bottom ends.
///
/// For a bar of width `w` and height `h`, clockwise from the top point:
/// `(w/2,0) (w,w/2) (w,h-w/2) (w/2,h) (0,h-w/2) (0,w/2)`
pub fn vertical_bar_vertices(w: u32, h: u32) -> [Point; 6] {
    let (w, h) = (w as i32, h as i32);
    [
        Point::new(w / 2, 0),
        Point::new(w, w / 2),
        Point::new(w, h - w / 2),
        Point::new(w / 2, h),
        Point::new(0, h - w / 2),
        Point::new(0, w / 2),
    ]
}

/// Fill a horizontal bar hexagon at `top_left` with the given size.
///
/// Decomposed as left cap triangle + body rectangle + right cap triangle.
pub fn draw_horizontal_bar<D>(display: &mut D, top_left: Point, size: Size, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    let (x, y) = (top_left.x, top_left.y);
    let (w, h) = (size.width as i32, size.height as i32);
    let cap = h / 2;

    // Left point cap
    Triangle::new(
        Point::new(x + cap, y),
        Point::new(x, y + cap),
        Point::new(x + cap, y + h),
    )
    .into_styled(fill)
    .draw(display)
    .ok();

    // Body
    Rectangle::new(
        Point::new(x + cap, y),
        Size::new((w - 2 * cap).max(0) as u32, size.height),
    )
    .into_styled(fill)
    .draw(display)
    .ok();

    // Right point cap
    Triangle::new(
        Point::new(x + w - cap, y),
        Point::new(x + w, y + cap),
        Point::new(x + w - cap, y + h),
    )
    .into_styled(fill)
    .draw(display)
    .ok();
}

/// Fill a vertical bar hexagon at `top_left` with the given size.
///
/// Decomposed as top cap triangle + body rectangle + bottom cap triangle.
pub fn draw_vertical_bar<D>(display: &mut D, top_left: Point, size: Size, color: Rgb565)
where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    let (x, y) = (top_left.x, top_left.y);
    let (w, h) = (size.width as i32, size.height as i32);
    let cap = w / 2;

    // Top point cap
    Triangle::new(
        Point::new(x + cap, y),
        Point::new(x + w, y + cap),
        Point::new(x, y + cap),
    )
    .into_styled(fill)
    .draw(display)
    .ok();

    // Body
    Rectangle::new(
        Point::new(x, y + cap),
        Size::new(size.width, (h - 2 * cap).max(0) as u32),
    )
    .into_styled(fill)
    .draw(display)
    .ok();

    // Bottom point cap
    Triangle::new(
        Point::new(x, y + h - cap),
        Point::new(x + w, y + h - cap),
        Point::new(x + cap, y + h),
    )
    .into_styled(fill)
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
