//! Log page: state summary and the reconciler's log terminal.
//!
//! Press `L` to toggle from the HUD.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ HUD LOG                                   00:01:12        50 FPS │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ VEHICLE             │ LEVELS            │ WARNINGS               │
//! │ Engine: ON          │ Health: 15%       │ H50 H20 F50 F10        │
//! │ Class:  Car         │ Fuel:   80%       │ Replay: 1              │
//! │ Belt:   OK          │ Speed:  42        │                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ I 1.2 Engine: ON                                                 │
//! │ I 1.2 Warning: ENG50                                             │
//! │ W 2.7 Audio play failed: ENG20 Blocked                           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use vehicle_hud::colors::{GRAY, GREEN, WHITE, YELLOW};
use vehicle_hud::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use vehicle_hud::log::{LogBuffer, LogEntry};
use vehicle_hud::warnings::Latch;
use vehicle_hud::DashboardState;

use crate::styles::LABEL_FONT;

// =============================================================================
// Layout Constants
// =============================================================================

/// Header Y position (text baseline)
const HEADER_Y: i32 = 12;

/// Y position of divider below header
const HEADER_DIVIDER_Y: i32 = 18;

/// Y position where section headers start
const SECTION_HEADER_Y: i32 = 28;

/// Y position where state values start
const STATS_Y: i32 = 40;

/// Line height for state values
const STAT_LINE_HEIGHT: i32 = 12;

/// Y position of divider above log
const LOG_DIVIDER_Y: i32 = 80;

/// Y position of the first log line
const LOG_Y: i32 = 92;

/// Height of each log line
const LOG_LINE_HEIGHT: i32 = 11;

/// Log lines that fit below the divider
const LOG_LINES: usize = ((SCREEN_HEIGHT as i32 - LOG_Y) / LOG_LINE_HEIGHT + 1) as usize;

const COL1_X: i32 = 4;
const COL2_X: i32 = 110;
const COL3_X: i32 = 215;

// =============================================================================
// Colors
// =============================================================================

const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const LATCHED_COLOR: Rgb565 = YELLOW;
const DIVIDER_COLOR: Rgb565 = GRAY;

/// Terminal background (very dark green tint)
const TERMINAL_BG: Rgb565 = Rgb565::new(1, 2, 1);

// =============================================================================
// Log Page Drawing
// =============================================================================

/// Draw the log page.
pub fn draw_log_page(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &DashboardState,
    pending_cues: usize,
    log: &LogBuffer,
    uptime_ms: u32,
    fps: f32,
) {
    draw_header(display, uptime_ms, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);

    draw_section_headers(display);
    draw_vehicle_column(display, state);
    draw_levels_column(display, state);
    draw_warnings_column(display, state, pending_cues);

    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header(
    display: &mut SimulatorDisplay<Rgb565>,
    uptime_ms: u32,
    fps: f32,
) {
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("HUD LOG", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let secs = uptime_ms / 1000;
    let mut s: String<16> = String::new();
    let _ = write!(s, "{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60);
    Text::new(&s, Point::new(180, HEADER_Y), info_style).draw(display).ok();

    let mut s: String<12> = String::new();
    let _ = write!(s, "{fps:.0} FPS");
    Text::new(&s, Point::new(270, HEADER_Y), info_style).draw(display).ok();
}

fn draw_section_headers(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);

    for (label, x) in [("VEHICLE", COL1_X), ("LEVELS", COL2_X), ("WARNINGS", COL3_X)] {
        Text::new(label, Point::new(x, SECTION_HEADER_Y), style).draw(display).ok();
    }
}

fn draw_vehicle_column(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &DashboardState,
) {
    let style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let mut y = STATS_Y;

    let engine = if state.engine_on { "Engine: ON" } else { "Engine: OFF" };
    Text::new(engine, Point::new(COL1_X, y), style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Class:  {:?}", state.vehicle);
    Text::new(&s, Point::new(COL1_X, y), style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let belt = match (state.seatbelt_applies(), state.seatbelt_buckled) {
        (false, _) => "Belt:   n/a",
        (true, true) => "Belt:   OK",
        (true, false) => "Belt:   OPEN",
    };
    Text::new(belt, Point::new(COL1_X, y), style).draw(display).ok();
}

fn draw_levels_column(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &DashboardState,
) {
    let style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let mut y = STATS_Y;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Health: {:.0}%", state.stored_health * 100.0);
    Text::new(&s, Point::new(COL2_X, y), style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Fuel:   {:.0}%", state.stored_fuel * 100.0);
    Text::new(&s, Point::new(COL2_X, y), style).draw(display).ok();
    y += STAT_LINE_HEIGHT;

    let mut s: String<20> = String::new();
    let _ = write!(s, "Speed:  {}", state.displayed_speed);
    Text::new(&s, Point::new(COL2_X, y), style).draw(display).ok();
}

/// Latch names, lit when set.
fn draw_warnings_column(
    display: &mut SimulatorDisplay<Rgb565>,
    state: &DashboardState,
    pending_cues: usize,
) {
    let mut x = COL3_X;
    for latch in Latch::ALL {
        let color = if state.warned.is_set(latch) { LATCHED_COLOR } else { SECTION_COLOR };
        let label = match latch {
            Latch::Health50 => "H50",
            Latch::Health20 => "H20",
            Latch::Fuel50 => "F50",
            Latch::Fuel10 => "F10",
        };
        Text::new(label, Point::new(x, STATS_Y), MonoTextStyle::new(LABEL_FONT, color))
            .draw(display)
            .ok();
        x += 24;
    }

    let mut s: String<20> = String::new();
    let _ = write!(s, "Replay: {pending_cues}");
    Text::new(&s, Point::new(COL3_X, STATS_Y + STAT_LINE_HEIGHT), MonoTextStyle::new(LABEL_FONT, VALUE_COLOR))
        .draw(display)
        .ok();
}

/// One terminal line: level prefix, seconds since start, message.
fn format_entry(entry: &LogEntry) -> String<56> {
    let mut s: String<56> = String::new();
    let _ = write!(
        s,
        "{} {}.{} {}",
        entry.level.prefix(),
        entry.timestamp_ms / 1000,
        (entry.timestamp_ms % 1000) / 100,
        entry.message
    );
    s
}

/// Newest entries that fit, oldest at the top.
fn draw_log_terminal(
    display: &mut SimulatorDisplay<Rgb565>,
    log: &LogBuffer,
) {
    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(TERMINAL_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;
    for entry in log.iter().skip(log.len().saturating_sub(LOG_LINES)) {
        let style = MonoTextStyle::new(LABEL_FONT, entry.level.color());
        Text::new(&format_entry(entry), Point::new(COL1_X, y), style)
            .draw(display)
            .ok();
        y += LOG_LINE_HEIGHT;
    }
}

fn draw_horizontal_line(
    display: &mut SimulatorDisplay<Rgb565>,
    y: i32,
) {
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
