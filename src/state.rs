//! The HUD's single mutable state record.
//!
//! Owned by [`Dashboard`](crate::dashboard::Dashboard) and mutated only
//! through its setters. Everything the HUD shows can be re-derived from this
//! record, which is what `refresh_all_icons` relies on after the host
//! reattaches a display surface.

use crate::warnings::WarningLatches;

/// Vehicle class. Motorcycles have no seatbelt subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VehicleClass {
    Car,
    /// Until the host says otherwise, the HUD assumes a motorcycle and keeps
    /// the seatbelt subsystem quiet.
    #[default]
    Motorcycle,
}

impl VehicleClass {
    #[inline]
    pub const fn is_motorcycle(self) -> bool { matches!(self, Self::Motorcycle) }
}

/// Headlight setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeadlightLevel {
    #[default]
    Off,
    Low,
    High,
}

impl HeadlightLevel {
    /// Map the host's numeric level: 1 is low beam, 2 is high beam, anything
    /// else is off.
    #[inline]
    pub const fn from_level(level: u8) -> Self {
        match level {
            1 => Self::Low,
            2 => Self::High,
            _ => Self::Off,
        }
    }

    /// Cycle Off -> Low -> High -> Off.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Off => Self::Low,
            Self::Low => Self::High,
            Self::High => Self::Off,
        }
    }
}

impl From<u8> for HeadlightLevel {
    fn from(level: u8) -> Self { Self::from_level(level) }
}

/// Current dashboard state.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    /// Ignition state.
    pub engine_on: bool,

    /// Vehicle class; motorcycles ignore the seatbelt entirely.
    pub vehicle: VehicleClass,

    /// True once the displayed speed has been above zero since the engine
    /// last went off. Distinguishes reverse from neutral for gear 0.
    pub has_moved: bool,

    /// Health used for engine icon coloring, 0.0-1.0.
    pub engine_health: f32,

    /// Last health set by the host, kept across ignition cycles.
    pub stored_health: f32,

    /// Last fuel level set by the host, kept across ignition cycles.
    pub stored_fuel: f32,

    /// Seatbelt buckled. May be stale while the vehicle is a motorcycle.
    pub seatbelt_buckled: bool,

    /// One latch per warning threshold.
    pub warned: WarningLatches,

    pub left_indicator: bool,
    pub right_indicator: bool,

    pub headlights: HeadlightLevel,

    /// Last speed shown, in display units (mph).
    pub displayed_speed: u32,

    /// Last RPM fraction, 0.0-1.0.
    pub rpm: f32,
}

impl DashboardState {
    /// Initial state: engine off, full health and fuel, unbuckled, nothing warned.
    pub const fn new() -> Self {
        Self {
            engine_on: false,
            vehicle: VehicleClass::Motorcycle,
            has_moved: false,
            engine_health: 1.0,
            stored_health: 1.0,
            stored_fuel: 1.0,
            seatbelt_buckled: false,
            warned: WarningLatches::new(),
            left_indicator: false,
            right_indicator: false,
            headlights: HeadlightLevel::Off,
            displayed_speed: 0,
            rpm: 0.0,
        }
    }

    /// Whether the seatbelt subsystem is live (not a motorcycle).
    #[inline]
    pub const fn seatbelt_applies(&self) -> bool { !self.vehicle.is_motorcycle() }

    /// Seatbelt chime and alarm should be sounding.
    #[inline]
    pub const fn seatbelt_alarm(&self) -> bool {
        self.seatbelt_applies() && self.engine_on && !self.seatbelt_buckled
    }

    /// Whether live health/fuel updates may fire warning cues.
    ///
    /// Requires the engine running and the belt buckled (so warnings never
    /// talk over the seatbelt chime), for every vehicle class.
    #[inline]
    pub const fn warnings_enabled(&self) -> bool { self.engine_on && self.seatbelt_buckled }

    /// Whether either indicator is on.
    #[inline]
    pub const fn any_indicator(&self) -> bool { self.left_indicator || self.right_indicator }
}

impl Default for DashboardState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new();
        assert!(!state.engine_on);
        assert!(!state.seatbelt_buckled);
        assert_eq!(state.stored_health, 1.0);
        assert_eq!(state.stored_fuel, 1.0);
        assert!(!state.warned.any());
        assert_eq!(state.vehicle, VehicleClass::Motorcycle);
        assert_eq!(VehicleClass::default(), VehicleClass::Motorcycle);
    }

    #[test]
    fn test_headlight_level_mapping() {
        assert_eq!(HeadlightLevel::from(0), HeadlightLevel::Off);
        assert_eq!(HeadlightLevel::from(1), HeadlightLevel::Low);
        assert_eq!(HeadlightLevel::from(2), HeadlightLevel::High);
        assert_eq!(HeadlightLevel::from(9), HeadlightLevel::Off);
        assert_eq!(HeadlightLevel::High.next(), HeadlightLevel::Off);
    }

    #[test]
    fn test_seatbelt_alarm_conditions() {
        let mut state = DashboardState::new();
        state.engine_on = true;
        assert!(!state.seatbelt_alarm(), "motorcycle by default");

        state.vehicle = VehicleClass::Car;
        state.engine_on = false;
        assert!(!state.seatbelt_alarm(), "engine off never alarms");

        state.engine_on = true;
        assert!(state.seatbelt_alarm());

        state.vehicle = VehicleClass::Motorcycle;
        assert!(!state.seatbelt_alarm(), "motorcycles have no seatbelt");

        state.vehicle = VehicleClass::Car;
        state.seatbelt_buckled = true;
        assert!(!state.seatbelt_alarm());
        assert!(state.warnings_enabled());
    }
}
