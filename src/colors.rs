//! Color constants for the HUD.
//!
//! Two palettes live here:
//!
//! - **HUD palette** ([`Rgb888`]): the exact tint values handed to the
//!   presenter for speed, health and fuel. These match the overlay's
//!   stylesheet, so they stay 24-bit.
//! - **Display palette** ([`Rgb565`]): chrome colors for the simulator
//!   window (backgrounds, dividers, log levels). Rgb565 is what the
//!   embedded-graphics simulator and the ST7789 panel speak natively.
//!
//! Presenters that draw to an Rgb565 target convert HUD tints with
//! `Rgb565::from(rgb888)`.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

// =============================================================================
// HUD Palette (24-bit, handed to the presenter)
// =============================================================================

/// Neutral speed readout (engine off, or standing still).
pub const HUD_WHITE: Rgb888 = Rgb888::WHITE;

/// Speed readout in the 1-40 band.
pub const HUD_SPEED_GREEN: Rgb888 = Rgb888::new(0x00, 0xFF, 0x41);

/// Health/fuel bars in the high tier.
pub const HUD_BAR_GREEN: Rgb888 = Rgb888::GREEN;

/// Medium tier bars and the 41-50 speed band.
pub const HUD_YELLOW: Rgb888 = Rgb888::YELLOW;

/// Low tier bars and speed above 50.
pub const HUD_RED: Rgb888 = Rgb888::RED;

/// Glow opacity around the speed readout.
pub const SPEED_GLOW: f32 = 0.8;

/// Glow opacity around the health and fuel bars.
pub const BAR_GLOW: f32 = 0.5;

// =============================================================================
// Paint
// =============================================================================

/// A tint applied to a HUD element: either nothing at all, or a solid color
/// with a glow of the same hue at the given opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Fully transparent, no glow (bars while the engine is off).
    Transparent,
    /// Solid color plus glow opacity (0.0-1.0).
    Solid { color: Rgb888, glow: f32 },
}

impl Paint {
    /// Solid paint with the given glow.
    #[inline]
    pub const fn solid(
        color: Rgb888,
        glow: f32,
    ) -> Self {
        Self::Solid { color, glow }
    }

    /// The visible color, if any.
    #[inline]
    pub const fn color(self) -> Option<Rgb888> {
        match self {
            Self::Transparent => None,
            Self::Solid { color, .. } => Some(color),
        }
    }
}

// =============================================================================
// Display Palette (Rgb565, simulator chrome)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Default text.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Error log lines, alarm badge.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Info log lines, active badges.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0). Warn log lines.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Indicator amber. RGB565: (31, 32, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for dividers and inactive icons. RGB565: (8, 16, 8).
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Headlight blue for the high beam badge. RGB565: (4, 24, 31).
pub const BEAM_BLUE: Rgb565 = Rgb565::new(4, 24, 31);

/// Bar track behind the health and fuel fills. RGB565: (3, 6, 3).
pub const TRACK: Rgb565 = Rgb565::new(3, 6, 3);
