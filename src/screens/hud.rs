//! HUD page: everything the reconciler presents, drawn from the surface.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  HP            .-"""-.               FUEL    │
//! │ ┌──┐          /       \              ┌──┐    │
//! │ │██│         |   42    |             │  │    │
//! │ │██│         |   MPH   |             │██│    │
//! │ └──┘          \   3   /              └──┘    │
//! │ 64%            '-...-'                25%    │
//! │              [████████    3400]              │
//! │ [<] [ENG] [FUEL] [LOW] [HIGH] [BELT] [>]     │
//! │ SND TICK                               +1    │
//! └──────────────────────────────────────────────┘
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::{
    sim_audio::SimAudio,
    surface::HudSurface,
    widgets::{draw_bars, draw_dial, draw_gear, draw_icons, draw_rpm, draw_speed, draw_status},
};

/// Draw the HUD page. The dial goes first so readouts land on top of it.
pub fn draw_hud_page(
    display: &mut SimulatorDisplay<Rgb565>,
    surface: &HudSurface,
    audio: &SimAudio,
    pending_cues: usize,
    blink_on: bool,
) {
    draw_dial(display, surface);
    draw_speed(display, surface);
    draw_gear(display, surface);
    draw_rpm(display, surface);
    draw_bars(display, surface);
    draw_icons(display, surface, blink_on);
    draw_status(display, audio, pending_cues);
}
