//! Speedometer dial, speed and gear readouts, and the RPM box.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use vehicle_hud::{
    colors::{BLACK, GRAY, GREEN, Paint, RED, TRACK, WHITE},
    config::{RPM_BOX_HEIGHT, RPM_BOX_WIDTH, RPM_BOX_X, RPM_BOX_Y, SPEEDO_CENTER, SPEEDO_RADIUS},
    presenter::{Element, Flag, Transform},
};

use crate::{
    animations::fade_rgb565,
    styles::{CENTERED, GEAR_FONT, LABEL_STYLE_GRAY, LABEL_STYLE_WHITE, RIGHT_ALIGNED, SPEED_FONT},
    surface::HudSurface,
};

/// Dial outline when no backdrop tint is set.
const DIAL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 2);

/// Speed readout baseline.
const SPEED_POS: Point = Point::new(SPEEDO_CENTER.0, SPEEDO_CENTER.1 + 4);

/// "MPH" caption under the speed.
const UNIT_POS: Point = Point::new(SPEEDO_CENTER.0, SPEEDO_CENTER.1 + 18);

/// Gear readout baseline.
const GEAR_POS: Point = Point::new(SPEEDO_CENTER.0, SPEEDO_CENTER.1 + 48);

/// RPM value, right-aligned inside the box.
const RPM_TEXT_POS: Point = Point::new(RPM_BOX_X + RPM_BOX_WIDTH as i32 - 2, RPM_BOX_Y + 8);

/// Speedometer backdrop. The tint comes from the `Speedo` element's paint
/// and opacity.
pub fn draw_dial(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
) {
    let view = surface.view(Element::Speedo);
    let dial = Circle::with_center(Point::new(SPEEDO_CENTER.0, SPEEDO_CENTER.1), SPEEDO_RADIUS * 2);

    if let Some(color) = view.paint.color() {
        let fill = fade_rgb565(Rgb565::from(color), BLACK, view.opacity);
        dial.into_styled(PrimitiveStyle::with_fill(fill)).draw(display).ok();
    }
    dial.into_styled(DIAL_STYLE).draw(display).ok();
}

/// Speed number in its band color.
pub fn draw_speed(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
) {
    let view = surface.view(Element::Speed);
    let color = match view.paint {
        Paint::Solid { color, .. } => Rgb565::from(color),
        Paint::Transparent => WHITE,
    };
    Text::with_text_style(&view.text, SPEED_POS, MonoTextStyle::new(SPEED_FONT, color), CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("MPH", UNIT_POS, LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();
}

/// Gear letter; reverse is drawn red.
pub fn draw_gear(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
) {
    let view = surface.view(Element::Gear);
    let color = if view.has(Flag::Reverse) { RED } else { WHITE };
    Text::with_text_style(&view.text, GEAR_POS, MonoTextStyle::new(GEAR_FONT, color), CENTERED)
        .draw(display)
        .ok();
}

/// Fill color for the RPM box from its flags.
pub fn rpm_color(
    on: bool,
    redline: bool,
) -> Rgb565 {
    if redline {
        RED
    } else if on {
        GREEN
    } else {
        GRAY
    }
}

/// RPM box: track, fill, and value when lit.
pub fn draw_rpm(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
) {
    let view = surface.view(Element::Rpm);
    let origin = Point::new(RPM_BOX_X, RPM_BOX_Y);

    Rectangle::new(origin, Size::new(RPM_BOX_WIDTH, RPM_BOX_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(TRACK))
        .draw(display)
        .ok();

    let fill = match view.transform {
        Some(Transform::FillWidth(pct)) => pct.clamp(0.0, 100.0),
        _ => 0.0,
    };
    let width = (fill * RPM_BOX_WIDTH as f32 / 100.0) as u32;
    if width > 0 {
        let color = rpm_color(view.has(Flag::On), view.has(Flag::Redline));
        Rectangle::new(origin, Size::new(width, RPM_BOX_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();
    }

    if !view.text.is_empty() {
        Text::with_text_style(&view.text, RPM_TEXT_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}
