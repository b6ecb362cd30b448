//! Blink timing and opacity blending for the simulator widgets.
//!
//! # Blink
//!
//! Blinking indicators and the seatbelt warning toggle every
//! [`BLINK_FRAMES`] frames (~4 Hz at 50 FPS). All blinking elements share
//! one phase, so hazards flash in sync.
//!
//! # Opacity
//!
//! The display has no alpha channel. An element at opacity `a` is drawn as
//! its color blended toward the background:
//! ```text
//! out = bg + (color - bg) * a
//! ```
//! per RGB565 component, in 8-bit fixed point.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};
use vehicle_hud::config::BLINK_FRAMES;

/// Whether blinking elements are lit on `frame`.
#[inline]
pub const fn blink_on(frame: u32) -> bool { (frame / BLINK_FRAMES).is_multiple_of(2) }

/// Blend `color` over `bg` at `opacity` (0.0-1.0).
pub fn fade_rgb565(
    color: Rgb565,
    bg: Rgb565,
    opacity: f32,
) -> Rgb565 {
    let a = (opacity.clamp(0.0, 1.0) * 256.0) as i32;
    if a >= 256 {
        return color;
    }

    let fg = color.into_storage();
    let bg = bg.into_storage();

    let mix = |shift: u16, mask: u16| -> u8 {
        let f = i32::from((fg >> shift) & mask);
        let b = i32::from((bg >> shift) & mask);
        (b + (((f - b) * a) >> 8)) as u8
    };

    Rgb565::new(mix(11, 0x1F), mix(5, 0x3F), mix(0, 0x1F))
}
