//! Pure presentation derivation.
//!
//! Everything here maps a number plus a little state onto a discrete
//! presentation bucket. No side effects: the reconciler applies the results.

use core::fmt;

use crate::colors::{BAR_GLOW, HUD_BAR_GREEN, HUD_RED, HUD_SPEED_GREEN, HUD_WHITE, HUD_YELLOW, Paint, SPEED_GLOW};
use crate::presenter::Filter;
use crate::thresholds::{
    MPS_TO_MPH,
    RPM_ACTIVE,
    RPM_DISPLAY_MAX,
    RPM_REDLINE,
    SPEED_GREEN_MAX,
    SPEED_YELLOW_MAX,
    TIER_HIGH,
    TIER_MEDIUM,
    clamp_fraction,
};

// =============================================================================
// Level Tiers (health and fuel)
// =============================================================================

/// Color tier for health and fuel bars and their icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelTier {
    /// Engine off: bars transparent, icons grey.
    Off,
    /// 50-100%.
    High,
    /// 25-49%.
    Medium,
    /// 0-24%.
    Low,
}

impl LevelTier {
    pub fn classify(
        percent: f32,
        engine_on: bool,
    ) -> Self {
        if !engine_on {
            Self::Off
        } else if percent >= TIER_HIGH {
            Self::High
        } else if percent >= TIER_MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Bar fill and glow.
    pub const fn bar_paint(self) -> Paint {
        match self {
            Self::Off => Paint::Transparent,
            Self::High => Paint::solid(HUD_BAR_GREEN, BAR_GLOW),
            Self::Medium => Paint::solid(HUD_YELLOW, BAR_GLOW),
            Self::Low => Paint::solid(HUD_RED, BAR_GLOW),
        }
    }

    pub const fn engine_filter(self) -> Filter {
        match self {
            Self::Off => Filter::EngineGrey,
            Self::High => Filter::EngineGreen,
            Self::Medium => Filter::EngineYellow,
            Self::Low => Filter::EngineRed,
        }
    }

    pub const fn fuel_filter(self) -> Filter {
        match self {
            Self::Off => Filter::FuelGrey,
            Self::High => Filter::FuelHigh,
            Self::Medium => Filter::FuelMedium,
            Self::Low => Filter::FuelLow,
        }
    }
}

// =============================================================================
// Speed
// =============================================================================

/// Convert metres per second to the displayed integer speed (mph).
/// Negative and NaN inputs display as 0.
pub fn display_speed(mps: f32) -> u32 {
    let mph = (mps * MPS_TO_MPH).max(0.0);
    micromath::F32(mph).round().0 as u32
}

/// Speed readout color band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedBand {
    White,
    Green,
    Yellow,
    Red,
}

impl SpeedBand {
    /// Band for a display value: engine off or standing still is white,
    /// 1-40 green, 41-50 yellow, above 50 red.
    pub const fn classify(
        display: u32,
        engine_on: bool,
    ) -> Self {
        if !engine_on || display == 0 {
            Self::White
        } else if display <= SPEED_GREEN_MAX {
            Self::Green
        } else if display <= SPEED_YELLOW_MAX {
            Self::Yellow
        } else {
            Self::Red
        }
    }

    pub const fn paint(self) -> Paint {
        match self {
            Self::White => Paint::solid(HUD_WHITE, SPEED_GLOW),
            Self::Green => Paint::solid(HUD_SPEED_GREEN, SPEED_GLOW),
            Self::Yellow => Paint::solid(HUD_YELLOW, SPEED_GLOW),
            Self::Red => Paint::solid(HUD_RED, SPEED_GLOW),
        }
    }
}

// =============================================================================
// Gear
// =============================================================================

/// What the gear readout shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GearDisplay {
    Neutral,
    Reverse,
    Forward(u32),
}

impl GearDisplay {
    /// Engine off always shows neutral. Gear 0 reads as reverse once the
    /// vehicle has moved this ignition cycle, neutral before that.
    pub const fn resolve(
        gear: i32,
        engine_on: bool,
        has_moved: bool,
    ) -> Self {
        if !engine_on {
            Self::Neutral
        } else if gear > 0 {
            Self::Forward(gear as u32)
        } else if gear == 0 && has_moved {
            Self::Reverse
        } else {
            Self::Neutral
        }
    }

    #[inline]
    pub const fn is_reverse(self) -> bool { matches!(self, Self::Reverse) }
}

impl fmt::Display for GearDisplay {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Neutral => f.write_str("N"),
            Self::Reverse => f.write_str("R"),
            Self::Forward(n) => write!(f, "{n}"),
        }
    }
}

// =============================================================================
// RPM
// =============================================================================

/// Derived RPM box presentation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RpmReadout {
    /// Scaled display value, 0-8000.
    pub value: u32,
    /// Fill width in percent, 0-100.
    pub fill: f32,
    /// Box lit and value shown.
    pub active: bool,
    /// Redline styling.
    pub redline: bool,
}

impl RpmReadout {
    pub fn from_fraction(rpm: f32) -> Self {
        let clamped = clamp_fraction(rpm);
        let active = clamped > RPM_ACTIVE;
        Self {
            value: micromath::F32(clamped * RPM_DISPLAY_MAX).round().0 as u32,
            fill: clamped * 100.0,
            active,
            redline: active && clamped > RPM_REDLINE,
        }
    }
}
