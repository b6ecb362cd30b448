// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->u32, u128->u32 casts for pixel math and timestamps
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is clamped non-negative
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Vehicle HUD simulator.
//!
//! Drives the [`Dashboard`] reconciler from the keyboard and renders what it
//! presents in an embedded-graphics simulator window. The reconciler only
//! ever talks to [`HudSurface`] (its presenter) and [`SimAudio`] (its audio
//! sink); the widgets draw from the surface each frame.
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | `E` | Engine on/off |
//! | `S` | Seatbelt buckle/unbuckle |
//! | `M` | Vehicle class (car / motorcycle) |
//! | `Q` / `W` | Left / right indicator |
//! | `H` | Headlights (off, low, high) |
//! | Up / Down | Speed +/- 1 m/s (held keys repeat) |
//! | `1`-`6`, `0` | Gear (0 reads as reverse once moving) |
//! | `F` / `G` | Fuel -/+ 5% |
//! | `J` / `K` | Health -/+ 5% |
//! | `R` | Refresh all icons |
//! | `B` | Bar placement (edge, beside dial, pinned low) |
//! | `T` | Dial backdrop tint |
//! | `V` | Block audio playback (exercise the failure path) |
//! | `L` | Toggle HUD / log page |
//!
//! RPM follows speed and gear while the engine runs.

mod animations;
mod pages;
mod screens;
mod sim_audio;
mod styles;
mod surface;
mod widgets;

use std::thread;
use std::time::Instant;

use animations::blink_on;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use pages::Page;
use screens::{draw_hud_page, draw_log_page};
use sim_audio::SimAudio;
use surface::HudSurface;
use vehicle_hud::colors::BLACK;
use vehicle_hud::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use vehicle_hud::log::{LogEntry, LogLevel};
use vehicle_hud::presenter::BarPlacement;
use vehicle_hud::{Dashboard, VehicleClass};

/// Speed change per Up/Down press, m/s.
const SPEED_STEP: f32 = 1.0;

/// Top speed the simulator allows, m/s (~134 mph).
const MAX_SPEED_MPS: f32 = 60.0;

/// Fuel/health change per key press.
const LEVEL_STEP: f32 = 0.05;

/// RPM fraction at idle.
const IDLE_RPM: f32 = 0.12;

/// Dial tints cycled with `T`. `None` clears the backdrop.
const DIAL_TINTS: [Option<(Rgb888, f32)>; 4] = [
    None,
    Some((Rgb888::new(0x10, 0x20, 0x40), 0.6)),
    Some((Rgb888::new(0x40, 0x10, 0x10), 0.6)),
    Some((Rgb888::new(0x20, 0x20, 0x20), 1.0)),
];

/// Bar layouts cycled with `B`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum BarLayout {
    Edge,
    BesideDial,
    PinnedLow,
}

impl BarLayout {
    const fn next(self) -> Self {
        match self {
            Self::Edge => Self::BesideDial,
            Self::BesideDial => Self::PinnedLow,
            Self::PinnedLow => Self::Edge,
        }
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Vehicle HUD Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Reconciler and Main Loop State
    // ==========================================================================

    let mut hud = Dashboard::new(HudSurface::new(), SimAudio::new());
    hud.set_vehicle_type(VehicleClass::Car);
    hud.set_speed(0.0);
    hud.set_gear(0);
    hud.refresh_all_icons();

    let start = Instant::now();
    let mut frame_count = 0u32;
    let mut page = Page::default();

    let mut speed_mps = 0.0f32;
    let mut gear = 0i32;
    let mut tint = 0usize;
    let mut bar_layout = BarLayout::Edge;

    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Replayed warnings fire from here
        hud.tick(start.elapsed());

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::Up => {
                        speed_mps = (speed_mps + SPEED_STEP).min(MAX_SPEED_MPS);
                        hud.set_speed(speed_mps);
                    }
                    Keycode::Down => {
                        speed_mps = (speed_mps - SPEED_STEP).max(0.0);
                        hud.set_speed(speed_mps);
                    }
                    // Everything else toggles; ignore OS key repeat
                    _ if repeat => {}
                    Keycode::E => hud.set_engine(!hud.state().engine_on),
                    Keycode::S => hud.set_seatbelt(!hud.state().seatbelt_buckled),
                    Keycode::M => {
                        let next = match hud.state().vehicle {
                            VehicleClass::Car => VehicleClass::Motorcycle,
                            VehicleClass::Motorcycle => VehicleClass::Car,
                        };
                        hud.set_vehicle_type(next);
                    }
                    Keycode::Q => hud.set_left_indicator(!hud.state().left_indicator),
                    Keycode::W => hud.set_right_indicator(!hud.state().right_indicator),
                    Keycode::H => hud.set_headlights(hud.state().headlights.next()),
                    Keycode::F => hud.set_fuel(hud.state().stored_fuel - LEVEL_STEP),
                    Keycode::G => hud.set_fuel(hud.state().stored_fuel + LEVEL_STEP),
                    Keycode::J => hud.set_health(hud.state().stored_health - LEVEL_STEP),
                    Keycode::K => hud.set_health(hud.state().stored_health + LEVEL_STEP),
                    Keycode::R => hud.refresh_all_icons(),
                    Keycode::B => {
                        bar_layout = bar_layout.next();
                        apply_bar_layout(&mut hud, bar_layout);
                    }
                    Keycode::T => {
                        tint = (tint + 1) % DIAL_TINTS.len();
                        match DIAL_TINTS[tint] {
                            Some((color, opacity)) => hud.set_speedo_background(color, Some(opacity)),
                            None => hud.set_speedo_opacity(0.0),
                        }
                    }
                    Keycode::V => {
                        let blocked = hud.audio_mut().toggle_blocked();
                        let ts = timestamp_ms(&start);
                        let msg = if blocked { "Audio: blocked" } else { "Audio: allowed" };
                        hud.log_mut().push(LogEntry::new(LogLevel::Debug, msg, ts));
                    }
                    Keycode::L => {
                        page = page.toggle();
                        let ts = timestamp_ms(&start);
                        hud.log_mut().push(LogEntry::new(LogLevel::Debug, page.label(), ts));
                    }
                    other => {
                        if let Some(g) = gear_for_key(other) {
                            gear = g;
                            hud.set_gear(gear);
                        }
                    }
                },
                _ => {}
            }
        }

        if hud.state().engine_on {
            hud.set_rpm(fake_rpm(speed_mps, gear));
        }

        // ======================================================================
        // FPS Calculation (updated once per second)
        // ======================================================================

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        // ======================================================================
        // Page-Based Rendering
        // ======================================================================

        display.clear(BLACK).ok();
        match page {
            Page::Hud => draw_hud_page(
                &mut display,
                hud.presenter(),
                hud.audio(),
                hud.pending_cues(),
                blink_on(frame_count),
            ),
            Page::Log => draw_log_page(
                &mut display,
                hud.state(),
                hud.pending_cues(),
                hud.log(),
                timestamp_ms(&start),
                current_fps,
            ),
        }

        window.update(&display);
        frame_count = frame_count.wrapping_add(1);

        // Sleep to maintain target frame rate (~50 FPS)
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

fn apply_bar_layout(
    hud: &mut Dashboard<HudSurface, SimAudio>,
    layout: BarLayout,
) {
    match layout {
        BarLayout::Edge => hud.set_bars_placement(Some(BarPlacement::default()), Some(BarPlacement::default())),
        BarLayout::BesideDial => hud.center_bars(),
        BarLayout::PinnedLow => hud.set_bars_placement(
            Some(BarPlacement::fixed(None, None, Some(60), Some(4))),
            Some(BarPlacement::fixed(None, Some(4), Some(60), None)),
        ),
    }
}

/// Milliseconds since the simulator started.
fn timestamp_ms(start: &Instant) -> u32 { start.elapsed().as_millis() as u32 }

/// Gear selected by a number key.
fn gear_for_key(keycode: Keycode) -> Option<i32> {
    match keycode {
        Keycode::Num0 => Some(0),
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        Keycode::Num5 => Some(5),
        Keycode::Num6 => Some(6),
        _ => None,
    }
}

/// Engine speed fraction for a road speed in a gear.
///
/// Forward gears spread ~9 m/s each across the rev range; neutral and
/// reverse rev gently with speed.
fn fake_rpm(
    speed_mps: f32,
    gear: i32,
) -> f32 {
    let revs = if gear > 0 {
        speed_mps / (gear as f32 * 9.0)
    } else {
        speed_mps * 0.03
    };
    (IDLE_RPM + revs).min(1.0)
}
