//! Color transition for the clock face.
//!
//! When the user cycles the segment color, the face fades from the old
//! color to the new one over a handful of frames instead of snapping.
//! Interpolation runs in RGB565 space with 8-bit fixed-point integer math.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::colors::BLUE;

/// Speed of color interpolation (0.0-1.0). 1.0 = instant.
/// At 0.15 a full fade takes about 15-20 frames.
const COLOR_LERP_SPEED: f32 = 0.15;

/// Threshold for considering colors "close enough" to snap to target.
/// Prevents endless tiny adjustments.
const COLOR_SNAP_THRESHOLD: i32 = 2;

/// Fade state for the face color.
pub struct FaceColorTransition {
    current: Rgb565,
    target: Rgb565,
    transitioning: bool,
}

impl FaceColorTransition {
    /// Start at the given settings color with no active fade.
    pub const fn new(initial: Rgb565) -> Self {
        Self { current: initial, target: initial, transitioning: false }
    }

    /// Set the fade target. Returns `true` if a new fade started.
    pub fn set_target(&mut self, target: Rgb565) -> bool {
        if self.target == target {
            false
        } else {
            self.target = target;
            self.transitioning = true;
            true
        }
    }

    /// The color the face should draw with this frame.
    #[inline]
    pub const fn current(&self) -> Rgb565 {
        self.current
    }

    /// Advance the fade one frame. Returns `true` while the color is still
    /// changing.
    pub fn update(&mut self) -> bool {
        if !self.transitioning {
            return false;
        }
        if self.current == self.target {
            self.transitioning = false;
            return false;
        }

        let next = lerp_rgb565(self.current, self.target, COLOR_LERP_SPEED);
        if colors_close_enough(next, self.target) {
            self.current = self.target;
            self.transitioning = false;
        } else {
            self.current = next;
        }
        true
    }
}

impl Default for FaceColorTransition {
    fn default() -> Self {
        Self::new(BLUE)
    }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

/// Linear interpolation between two Rgb565 colors.
///
/// Fixed-point integer math on the unpacked 5/6/5 components. When the
/// computed step truncates to zero for a nonzero delta, a minimum step of
/// ±1 is forced so a fade can never stall short of its target.
fn lerp_rgb565(from: Rgb565, to: Rgb565, t: f32) -> Rgb565 {
    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    let t_fixed = (t * 256.0) as i32; // 8 bits fractional

    let compute_step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            0
        } else {
            let step = (delta * t_fixed) >> 8;
            if step == 0 {
                if delta > 0 { 1 } else { -1 }
            } else {
                step
            }
        }
    };

    let r = (from_r + compute_step(to_r - from_r)).clamp(0, 31) as u8;
    let g = (from_g + compute_step(to_g - from_g)).clamp(0, 63) as u8;
    let b = (from_b + compute_step(to_b - from_b)).clamp(0, 31) as u8;

    Rgb565::new(r, g, b)
}

/// Manhattan distance check in unpacked RGB space.
fn colors_close_enough(a: Rgb565, b: Rgb565) -> bool {
    let a_raw = a.into_storage();
    let b_raw = b.into_storage();

    let diff = (i32::from((a_raw >> 11) & 0x1F) - i32::from((b_raw >> 11) & 0x1F)).abs()
        + (i32::from((a_raw >> 5) & 0x3F) - i32::from((b_raw >> 5) & 0x3F)).abs()
        + (i32::from(a_raw & 0x1F) - i32::from(b_raw & 0x1F)).abs();
    diff <= COLOR_SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================
