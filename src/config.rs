//! Application configuration constants.
//!
//! Timing for the reconciler plus the simulator's screen layout. Layout
//! values are computed at compile time as `const` so the render loop never
//! recalculates positions.

use core::time::Duration;

// =============================================================================
// Startup Warning Timing
// =============================================================================

/// Gap between consecutive replayed warning cues so they do not overlap.
pub const STARTUP_WARNING_SPACING: Duration = Duration::from_millis(1500);

/// Most cues a single replay can queue (health 50/20, fuel 50/10).
pub const MAX_STARTUP_CUES: usize = 4;

// =============================================================================
// Display Configuration (simulator)
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames per half blink period (~4 Hz toggle at 50 FPS).
pub const BLINK_FRAMES: u32 = 6;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Width of each vertical bar (health, fuel).
pub const BAR_WIDTH: u32 = 18;

/// Height of each vertical bar.
pub const BAR_HEIGHT: u32 = 150;

/// Top edge of the bars.
pub const BAR_TOP: i32 = 30;

/// Default left edge of the left bar stack (health).
pub const LEFT_BARS_X: i32 = 12;

/// Default left edge of the right bar stack (fuel).
pub const RIGHT_BARS_X: i32 = (SCREEN_WIDTH - 12 - BAR_WIDTH) as i32;

/// Screen center X coordinate. Used for the speed and gear readouts.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Center of the speedometer dial.
pub const SPEEDO_CENTER: (i32, i32) = (CENTER_X, 100);

/// Radius of the speedometer dial.
pub const SPEEDO_RADIUS: u32 = 70;

/// Gap between the dial and a bar stack pulled in beside it.
pub const BAR_DIAL_GAP: i32 = 8;

/// RPM box geometry (top-left, size).
pub const RPM_BOX_X: i32 = CENTER_X - 60;
pub const RPM_BOX_Y: i32 = 178;
pub const RPM_BOX_WIDTH: u32 = 120;
pub const RPM_BOX_HEIGHT: u32 = 10;

/// Baseline of the icon row.
pub const ICON_ROW_Y: i32 = 206;

/// Width of one icon badge in the icon row.
pub const ICON_WIDTH: u32 = 34;

/// Baseline of the audio status line.
pub const STATUS_Y: i32 = 232;

/// Gap between icon badges.
pub const ICON_GAP: u32 = 8;

const _: () = assert!(BAR_TOP + BAR_HEIGHT as i32 <= ICON_ROW_Y - 16);
const _: () = assert!(SPEEDO_CENTER.1 + (SPEEDO_RADIUS as i32) < RPM_BOX_Y);
const _: () = assert!(7 * ICON_WIDTH + 6 * ICON_GAP <= SCREEN_WIDTH);
