//! Centralized HUD threshold configuration.
//!
//! All thresholds are compile-time constants with validation assertions.
//! This keeps tier coloring, warning cues and speed bands consistent
//! between the reconciler and the simulator.
//!
//! # Compile-Time Validation
//!
//! Each threshold group includes `const` assertions that verify ordering at
//! compile time. If thresholds are configured incorrectly (e.g.,
//! `HEALTH_CRITICAL > HEALTH_WARN`), compilation fails.
//!
//! Percent thresholds are on a 0-100 scale; inputs arrive as fractions and
//! are multiplied by 100 before comparison.

// =============================================================================
// Display Tier Breakpoints (health bar, fuel bar, engine and fuel icons)
// =============================================================================

/// At or above this percentage the tier is high (green).
pub const TIER_HIGH: f32 = 50.0;

/// At or above this percentage (and below `TIER_HIGH`) the tier is medium (yellow).
/// Below it the tier is low (red).
pub const TIER_MEDIUM: f32 = 25.0;

const _: () = assert!(TIER_MEDIUM < TIER_HIGH);

// =============================================================================
// Warning Cue Thresholds
// =============================================================================

/// Engine health at or below this fires the first engine warning.
pub const HEALTH_WARN: f32 = 50.0;

/// Engine health at or below this fires the second engine warning.
pub const HEALTH_CRITICAL: f32 = 20.0;

/// Fuel at or below this fires the half-tank warning.
pub const FUEL_WARN: f32 = 50.0;

/// Fuel at or below this fires the reserve warning.
/// Deliberately distinct from the fuel color tiers (50/25).
pub const FUEL_RESERVE: f32 = 10.0;

const _: () = assert!(HEALTH_CRITICAL < HEALTH_WARN);
const _: () = assert!(FUEL_RESERVE < FUEL_WARN);

// =============================================================================
// Speed
// =============================================================================

/// Metres per second to miles per hour.
pub const MPS_TO_MPH: f32 = 2.23694;

/// Highest display speed still shown green (1-40).
pub const SPEED_GREEN_MAX: u32 = 40;

/// Highest display speed still shown yellow (41-50). Above is red.
pub const SPEED_YELLOW_MAX: u32 = 50;

const _: () = assert!(SPEED_GREEN_MAX < SPEED_YELLOW_MAX);

// =============================================================================
// RPM
// =============================================================================

/// Display value for a fraction of 1.0.
pub const RPM_DISPLAY_MAX: f32 = 8000.0;

/// RPM box lights up above this fraction.
pub const RPM_ACTIVE: f32 = 0.1;

/// RPM box switches to redline styling above this fraction.
pub const RPM_REDLINE: f32 = 0.8;

const _: () = assert!(RPM_ACTIVE < RPM_REDLINE);

// =============================================================================
// Icon Opacity
// =============================================================================

/// Opacity of icons that are present but inactive (engine off, light off).
pub const INACTIVE_OPACITY: f32 = 0.3;

/// Opacity of lit icons.
pub const ACTIVE_OPACITY: f32 = 1.0;

// =============================================================================
// Helpers
// =============================================================================

/// Clamp an external fraction into [0, 1]. NaN becomes 0.
#[inline]
pub fn clamp_fraction(value: f32) -> f32 { if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) } }
