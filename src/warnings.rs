//! Threshold latches for one-shot warning cues.
//!
//! Each warning threshold has a latch. A cue fires when its metric is at or
//! below the threshold, the latch is clear and the caller's gate is open;
//! firing sets the latch. The latch clears only when the metric rises back
//! above the threshold, so a metric hovering below a threshold warns once,
//! and every fresh descent warns again.
//!
//! ```text
//!  100 ─┐            ┌──────┐
//!       │            │      │
//!   50 ─┼──●─────────┼──────┼──●────   ● = cue fires
//!       │  └──────── ┘      └──┘
//!    0 ─┘   latched    re-armed
//! ```

use heapless::Vec;

use crate::audio::Cue;
use crate::thresholds::{FUEL_RESERVE, FUEL_WARN, HEALTH_CRITICAL, HEALTH_WARN};

/// Metric being watched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Health,
    Fuel,
}

impl Metric {
    /// Latches for this metric, higher threshold first.
    #[inline]
    pub const fn latches(self) -> [Latch; 2] {
        match self {
            Self::Health => [Latch::Health50, Latch::Health20],
            Self::Fuel => [Latch::Fuel50, Latch::Fuel10],
        }
    }
}

/// One warning threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Latch {
    Health50,
    Health20,
    Fuel50,
    Fuel10,
}

impl Latch {
    /// All latches in replay order: health before fuel, milder before severe.
    pub const ALL: [Self; 4] = [Self::Health50, Self::Health20, Self::Fuel50, Self::Fuel10];

    /// Threshold in percent.
    pub const fn threshold(self) -> f32 {
        match self {
            Self::Health50 => HEALTH_WARN,
            Self::Health20 => HEALTH_CRITICAL,
            Self::Fuel50 => FUEL_WARN,
            Self::Fuel10 => FUEL_RESERVE,
        }
    }

    pub const fn cue(self) -> Cue {
        match self {
            Self::Health50 => Cue::EngineWarn1,
            Self::Health20 => Cue::EngineWarn2,
            Self::Fuel50 => Cue::Fuel50,
            Self::Fuel10 => Cue::Fuel10,
        }
    }

    pub const fn metric(self) -> Metric {
        match self {
            Self::Health50 | Self::Health20 => Metric::Health,
            Self::Fuel50 | Self::Fuel10 => Metric::Fuel,
        }
    }

    /// Whether `percent` is at or below this threshold.
    #[inline]
    pub fn breached(
        self,
        percent: f32,
    ) -> bool {
        percent <= self.threshold()
    }
}

/// The four warned flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WarningLatches {
    health_50: bool,
    health_20: bool,
    fuel_50: bool,
    fuel_10: bool,
}

impl WarningLatches {
    pub const fn new() -> Self {
        Self {
            health_50: false,
            health_20: false,
            fuel_50: false,
            fuel_10: false,
        }
    }

    pub const fn is_set(
        &self,
        latch: Latch,
    ) -> bool {
        match latch {
            Latch::Health50 => self.health_50,
            Latch::Health20 => self.health_20,
            Latch::Fuel50 => self.fuel_50,
            Latch::Fuel10 => self.fuel_10,
        }
    }

    pub fn set(
        &mut self,
        latch: Latch,
        warned: bool,
    ) {
        let slot = match latch {
            Latch::Health50 => &mut self.health_50,
            Latch::Health20 => &mut self.health_20,
            Latch::Fuel50 => &mut self.fuel_50,
            Latch::Fuel10 => &mut self.fuel_10,
        };
        *slot = warned;
    }

    /// Clear every latch (fresh warning cycle).
    pub fn clear_all(&mut self) { *self = Self::new(); }

    /// Whether any latch is set.
    pub const fn any(&self) -> bool { self.health_50 || self.health_20 || self.fuel_50 || self.fuel_10 }

    /// Evaluate a new reading for `metric`.
    ///
    /// Returns the cues to fire, higher threshold first. Latches above their
    /// threshold are re-armed whether or not the gate is open.
    pub fn evaluate(
        &mut self,
        metric: Metric,
        percent: f32,
        gate_open: bool,
    ) -> Vec<Cue, 2> {
        let mut cues = Vec::new();
        for latch in metric.latches() {
            if latch.breached(percent) {
                if gate_open && !self.is_set(latch) {
                    self.set(latch, true);
                    cues.push(latch.cue()).ok();
                }
            } else {
                self.set(latch, false);
            }
        }
        cues
    }

    /// Latches whose condition holds but that have not warned yet, in replay order.
    pub fn pending(
        &self,
        health_percent: f32,
        fuel_percent: f32,
    ) -> Vec<Latch, 4> {
        let mut out = Vec::new();
        for latch in Latch::ALL {
            let percent = match latch.metric() {
                Metric::Health => health_percent,
                Metric::Fuel => fuel_percent,
            };
            if latch.breached(percent) && !self.is_set(latch) {
                out.push(latch).ok();
            }
        }
        out
    }
}
