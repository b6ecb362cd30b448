//! Health and fuel bar stacks.
//!
//! ```text
//!   HP          FUEL
//!  ┌──┐         ┌──┐
//!  │  │         │  │   TranslateY(t) leaves the top t% empty
//!  │██│         │  │
//!  │██│         │██│
//!  └──┘         └──┘
//!  64%          25%
//! ```
//!
//! Each stack is positioned by its container's [`BarPlacement`]:
//! static stacks sit at the screen edge, or beside the dial when centered;
//! fixed and absolute stacks take their offsets from the screen edges.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use vehicle_hud::{
    colors::{BLACK, GRAY, Paint, TRACK},
    config::{
        BAR_DIAL_GAP, BAR_HEIGHT, BAR_TOP, BAR_WIDTH, CENTER_X, LEFT_BARS_X, RIGHT_BARS_X, SCREEN_HEIGHT,
        SCREEN_WIDTH, SPEEDO_RADIUS,
    },
    presenter::{Align, Anchor, BarPlacement, BarSide, Element, Transform},
};

use crate::{
    animations::fade_rgb565,
    styles::{CENTERED, LABEL_FONT, LABEL_STYLE_GRAY},
    surface::HudSurface,
};

/// Outline around the bar track.
const OUTLINE_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);

/// Track behind the fill.
const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(TRACK);

/// Top-left corner of a bar stack.
pub fn bar_origin(
    placement: &BarPlacement,
    side: BarSide,
) -> Point {
    let edge_x = match side {
        BarSide::Left => LEFT_BARS_X,
        BarSide::Right => RIGHT_BARS_X,
    };

    match placement.anchor {
        Anchor::Static => {
            let x = match (placement.align, side) {
                (Align::Center, BarSide::Left) => CENTER_X - SPEEDO_RADIUS as i32 - BAR_DIAL_GAP - BAR_WIDTH as i32,
                (Align::Center, BarSide::Right) => CENTER_X + SPEEDO_RADIUS as i32 + BAR_DIAL_GAP,
                _ => edge_x,
            };
            Point::new(x, BAR_TOP)
        }
        Anchor::Fixed | Anchor::Absolute => {
            let x = placement
                .left
                .or_else(|| placement.right.map(|r| SCREEN_WIDTH as i32 - r - BAR_WIDTH as i32))
                .unwrap_or(edge_x);
            let y = placement
                .top
                .or_else(|| placement.bottom.map(|b| SCREEN_HEIGHT as i32 - b - BAR_HEIGHT as i32))
                .unwrap_or(BAR_TOP);
            Point::new(x, y)
        }
    }
}

/// Filled height in pixels for a `TranslateY` offset in percent.
pub fn fill_height(transform: Option<Transform>) -> u32 {
    let empty = match transform {
        Some(Transform::TranslateY(t)) => t.clamp(0.0, 100.0),
        _ => 0.0,
    };
    ((100.0 - empty) * BAR_HEIGHT as f32 / 100.0) as u32
}

/// Draw both bar stacks.
pub fn draw_bars(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
) {
    draw_bar_stack(display, surface, BarSide::Left, Element::HealthBar, Element::HealthPercent, "HP");
    draw_bar_stack(display, surface, BarSide::Right, Element::FuelBar, Element::FuelPercent, "FUEL");
}

fn draw_bar_stack(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
    side: BarSide,
    bar: Element,
    readout: Element,
    label: &str,
) {
    let container = surface.view(side.element());
    if !container.visible {
        return;
    }
    let origin = bar_origin(&container.placement, side);
    let center_x = origin.x + BAR_WIDTH as i32 / 2;
    let track = Rectangle::new(origin, Size::new(BAR_WIDTH, BAR_HEIGHT));

    Text::with_text_style(label, Point::new(center_x, origin.y - 4), LABEL_STYLE_GRAY, CENTERED)
        .draw(display)
        .ok();

    track.into_styled(TRACK_STYLE).draw(display).ok();

    let view = surface.view(bar);
    if let Paint::Solid { color, glow } = view.paint {
        let color = Rgb565::from(color);
        let height = fill_height(view.transform);
        if height > 0 {
            let top = origin.y + (BAR_HEIGHT - height) as i32;
            Rectangle::new(Point::new(origin.x, top), Size::new(BAR_WIDTH, height))
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)
                .ok();
        }
        // Glow ring just outside the track
        track
            .offset(1)
            .into_styled(PrimitiveStyle::with_stroke(fade_rgb565(color, BLACK, glow), 1))
            .draw(display)
            .ok();
    } else {
        track.into_styled(OUTLINE_STYLE).draw(display).ok();
    }

    let text = surface.view(readout);
    let style = MonoTextStyle::new(LABEL_FONT, view.paint.color().map_or(GRAY, Rgb565::from));
    Text::with_text_style(
        &text.text,
        Point::new(center_x, origin.y + BAR_HEIGHT as i32 + 10),
        style,
        CENTERED,
    )
    .draw(display)
    .ok();
}
