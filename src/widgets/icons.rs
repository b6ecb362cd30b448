//! Icon row: engine, fuel, beams, indicators, seatbelt.
//!
//! Each icon is a labelled badge. The filter picks the badge color, opacity
//! fades it toward the background, and blinking flags (indicator blink,
//! seatbelt warning, low fuel) knock it down to the inactive opacity on the
//! off phase. Hidden icons (the seatbelt on a motorcycle) leave a gap.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use vehicle_hud::{
    colors::{BEAM_BLUE, BLACK, GRAY, GREEN, ORANGE, RED, WHITE, YELLOW},
    config::{ICON_GAP, ICON_ROW_Y, ICON_WIDTH, SCREEN_WIDTH},
    presenter::{Element, Filter, Flag},
    thresholds::INACTIVE_OPACITY,
};

use crate::{
    animations::fade_rgb565,
    styles::{CENTERED, LABEL_FONT},
    surface::HudSurface,
};

/// Badge height in pixels.
const ICON_HEIGHT: u32 = 18;

/// Left edge of the first badge, centering the row.
const ROW_X: i32 = ((SCREEN_WIDTH - (7 * ICON_WIDTH + 6 * ICON_GAP)) / 2) as i32;

/// Icons in row order with their badge labels.
const ICONS: [(Element, &str); 7] = [
    (Element::LeftIcon, "<"),
    (Element::EngineIcon, "ENG"),
    (Element::FuelIcon, "FUEL"),
    (Element::LowBeamIcon, "LOW"),
    (Element::HighBeamIcon, "HIGH"),
    (Element::SeatbeltIcon, "BELT"),
    (Element::RightIcon, ">"),
];

/// Badge color for a filter.
pub const fn filter_color(filter: Filter) -> Rgb565 {
    match filter {
        Filter::EngineGreen | Filter::FuelHigh | Filter::SeatbeltActive | Filter::LowBeamActive => GREEN,
        Filter::EngineYellow | Filter::FuelMedium => YELLOW,
        Filter::EngineRed | Filter::FuelLow | Filter::SeatbeltWarning => RED,
        Filter::LeftActive | Filter::RightActive => ORANGE,
        Filter::HighBeamActive => BEAM_BLUE,
        Filter::EngineGrey
        | Filter::FuelGrey
        | Filter::SeatbeltGrey
        | Filter::LeftGrey
        | Filter::RightGrey
        | Filter::LowBeamGrey
        | Filter::HighBeamGrey => GRAY,
    }
}

/// Effective opacity after the blink phase.
pub fn blinked_opacity(
    opacity: f32,
    blinking: bool,
    blink_on: bool,
) -> f32 {
    if blinking && !blink_on { opacity.min(INACTIVE_OPACITY) } else { opacity }
}

pub fn draw_icons(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
    blink_on: bool,
) {
    let mut x = ROW_X;
    for (element, label) in ICONS {
        draw_icon(display, surface, element, label, x, blink_on);
        x += (ICON_WIDTH + ICON_GAP) as i32;
    }
}

fn draw_icon(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
    element: Element,
    label: &str,
    x: i32,
    blink_on: bool,
) {
    let view = surface.view(element);
    if !view.visible {
        return;
    }

    let filter = view.filter.unwrap_or(Filter::EngineGrey);
    let blinking = view.has(Flag::Blinking) || view.has(Flag::SeatbeltWarning) || view.has(Flag::FuelLow);
    let opacity = blinked_opacity(view.opacity, blinking, blink_on);
    let color = fade_rgb565(filter_color(filter), BLACK, opacity);

    let badge = Rectangle::new(Point::new(x, ICON_ROW_Y - 13), Size::new(ICON_WIDTH, ICON_HEIGHT));
    let style = if filter.is_lit() {
        PrimitiveStyle::with_fill(color)
    } else {
        PrimitiveStyle::with_stroke(color, 1)
    };
    RoundedRectangle::with_equal_corners(badge, Size::new(3, 3))
        .into_styled(style)
        .draw(display)
        .ok();

    let text_color = if filter.is_lit() { BLACK } else { fade_rgb565(WHITE, BLACK, opacity) };
    Text::with_text_style(
        label,
        Point::new(x + ICON_WIDTH as i32 / 2, ICON_ROW_Y),
        MonoTextStyle::new(LABEL_FONT, text_color),
        CENTERED,
    )
    .draw(display)
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_colors() {
        assert_eq!(filter_color(Filter::EngineRed), RED);
        assert_eq!(filter_color(Filter::HighBeamActive), BEAM_BLUE);
        assert_eq!(filter_color(Filter::LeftGrey), GRAY);
    }

    #[test]
    fn test_blink_dims_on_off_phase() {
        assert_eq!(blinked_opacity(1.0, true, true), 1.0);
        assert_eq!(blinked_opacity(1.0, true, false), INACTIVE_OPACITY);
        assert_eq!(blinked_opacity(1.0, false, false), 1.0);
        assert_eq!(blinked_opacity(0.0, true, false), 0.0);
    }
}
