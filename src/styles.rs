//! Pre-computed static text styles for the simulator widgets.
//!
//! Styles that never change color are `const`, so the render loop never
//! rebuilds them. HUD readouts take their color from the presenter each
//! frame; for those the font is exposed and callers build
//! `MonoTextStyle::new(FONT, color)` on the spot.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::FONT_6X10,
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};
use vehicle_hud::colors::{GRAY, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text. Speed, gear, icon badge labels.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Log terminal, status line.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter, RPM value.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Font References (dynamic color styles)
// =============================================================================

/// Small label font (6x10 pixels).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Speed readout font (`ProFont` 24pt).
pub const SPEED_FONT: &MonoFont = &PROFONT_24_POINT;

/// Gear readout font (`ProFont` 18pt).
pub const GEAR_FONT: &MonoFont = &PROFONT_18_POINT;

// =============================================================================
// Pre-computed Text Styles
// =============================================================================

/// Small white text for labels on dark backgrounds.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small grey text for hints and inactive labels.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GRAY);
