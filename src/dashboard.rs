//! The HUD state reconciler.
//!
//! [`Dashboard`] owns the state record, the output surface, the audio sink,
//! the replay queue and the log. The host drives it through setters, each of
//! which:
//!
//! 1. clamps / normalizes its input,
//! 2. updates [`DashboardState`],
//! 3. derives presentation from state alone (see [`crate::tiers`]),
//! 4. applies it to the [`Presenter`],
//! 5. starts, stops or fires audio cues as thresholds are crossed.
//!
//! Setters never fail. Missing elements are skipped per call and failed
//! playback is logged.
//!
//! # Ignition
//!
//! ```text
//!            set_engine(true)
//!   ┌─────┐ ───────────────────▶ ┌─────┐
//!   │ Off │                      │ On  │──▶ clear latches, restore bars,
//!   └─────┘ ◀─────────────────── └─────┘    seatbelt check, replay warnings
//!            set_engine(false)
//!     ▲
//!     └── has_moved reset, gear N, loops stopped, replay cancelled
//! ```
//!
//! # Warning Replay
//!
//! Restoring health and fuel on ignition never fires cues directly. Pending
//! warnings are handed to the [`StartupSequencer`] instead, so they play one
//! after another. The same replay runs when the belt is buckled with the
//! engine running, since warnings are held back while the seatbelt chime
//! sounds. The host must call [`Dashboard::tick`] regularly for queued cues
//! after the first to play.

use core::fmt::Write;
use core::time::Duration;

use embedded_graphics::pixelcolor::Rgb888;
use heapless::String;

use crate::audio::{AudioSink, Cue, manage_loop, play_once};
use crate::colors::Paint;
use crate::log::{LogBuffer, LogLevel};
use crate::presenter::{BarPlacement, BarSide, Element, Filter, Flag, Presenter, Transform};
use crate::sequencer::StartupSequencer;
use crate::state::{DashboardState, HeadlightLevel, VehicleClass};
use crate::thresholds::{ACTIVE_OPACITY, INACTIVE_OPACITY, clamp_fraction};
use crate::tiers::{GearDisplay, LevelTier, RpmReadout, SpeedBand, display_speed};
use crate::warnings::Metric;

/// Which indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    const fn icon(self) -> Element {
        match self {
            Self::Left => Element::LeftIcon,
            Self::Right => Element::RightIcon,
        }
    }

    const fn filters(self) -> (Filter, Filter) {
        match self {
            Self::Left => (Filter::LeftActive, Filter::LeftGrey),
            Self::Right => (Filter::RightActive, Filter::RightGrey),
        }
    }
}

/// Vehicle HUD state reconciler.
pub struct Dashboard<P: Presenter, A: AudioSink> {
    state: DashboardState,
    presenter: P,
    audio: A,
    sequencer: StartupSequencer,
    log: LogBuffer,
    now: Duration,
}

impl<P: Presenter, A: AudioSink> Dashboard<P, A> {
    /// Create the HUD with the engine off and full bars, and paint the
    /// initial surface.
    pub fn new(
        presenter: P,
        audio: A,
    ) -> Self {
        let mut hud = Self {
            state: DashboardState::new(),
            presenter,
            audio,
            sequencer: StartupSequencer::new(),
            log: LogBuffer::new(),
            now: Duration::ZERO,
        };
        hud.presenter.set_transform(Element::HealthBar, Transform::TranslateY(0.0)).ok();
        hud.presenter.set_transform(Element::FuelBar, Transform::TranslateY(0.0)).ok();
        hud.set_rpm(0.0);
        hud.info(format_args!("HUD ready"));
        hud
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn state(&self) -> &DashboardState { &self.state }

    #[inline]
    pub const fn log(&self) -> &LogBuffer { &self.log }

    /// Host access to the log, for entries of its own.
    #[inline]
    pub fn log_mut(&mut self) -> &mut LogBuffer { &mut self.log }

    #[inline]
    pub const fn presenter(&self) -> &P { &self.presenter }

    #[inline]
    pub fn presenter_mut(&mut self) -> &mut P { &mut self.presenter }

    #[inline]
    pub const fn audio(&self) -> &A { &self.audio }

    #[inline]
    pub fn audio_mut(&mut self) -> &mut A { &mut self.audio }

    /// Current HUD clock.
    #[inline]
    pub const fn now(&self) -> Duration { self.now }

    /// Replayed warnings still waiting to play.
    #[inline]
    pub fn pending_cues(&self) -> usize { self.sequencer.pending() }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Advance the HUD clock to `now` and play any replayed warnings that are due.
    /// Going backwards is ignored.
    pub fn tick(
        &mut self,
        now: Duration,
    ) {
        if now > self.now {
            self.now = now;
        }
        self.fire_due();
    }

    // =========================================================================
    // Ignition
    // =========================================================================

    /// Switch the engine on or off. Setting the current state does nothing.
    pub fn set_engine(
        &mut self,
        on: bool,
    ) {
        if self.state.engine_on == on {
            return;
        }
        self.state.engine_on = on;
        self.info(format_args!("Engine: {}", if on { "ON" } else { "OFF" }));

        if on {
            self.set_gear(0);
            self.state.warned.clear_all();

            self.apply_health(self.state.stored_health, false);
            self.apply_fuel(self.state.stored_fuel, false);

            if self.state.vehicle.is_motorcycle() {
                self.silence_seatbelt();
            } else {
                self.apply_seatbelt();
            }

            if self.state.seatbelt_buckled {
                self.start_warning_replay();
            }
        } else {
            self.state.has_moved = false;
            self.set_gear(0);
            self.silence_seatbelt();
            if !self.state.vehicle.is_motorcycle() {
                self.apply_seatbelt();
            }
            self.cancel_warning_replay();

            self.apply_health(self.state.stored_health, false);
            self.apply_fuel(self.state.stored_fuel, false);
            self.set_rpm(0.0);
        }

        self.update_engine_icon();
        self.apply_indicator_icon(Side::Left);
        self.apply_indicator_icon(Side::Right);
        self.apply_speed_color();
    }

    /// Set the vehicle class. Motorcycles hide the seatbelt icon and silence
    /// its chime and alarm.
    pub fn set_vehicle_type(
        &mut self,
        vehicle: VehicleClass,
    ) {
        if self.state.vehicle != vehicle {
            self.info(format_args!("Vehicle: {vehicle:?}"));
        }
        self.state.vehicle = vehicle;

        if vehicle.is_motorcycle() {
            self.presenter.set_visible(Element::SeatbeltIcon, false).ok();
            self.silence_seatbelt();
        } else {
            self.presenter.set_visible(Element::SeatbeltIcon, true).ok();
        }
    }

    /// Set the seatbelt state. Ignored entirely on motorcycles.
    pub fn set_seatbelt(
        &mut self,
        buckled: bool,
    ) {
        if self.state.vehicle.is_motorcycle() {
            self.silence_seatbelt();
            return;
        }

        let changed = self.state.seatbelt_buckled != buckled;
        self.state.seatbelt_buckled = buckled;
        self.apply_seatbelt();

        if changed && self.state.engine_on {
            if buckled {
                self.start_warning_replay();
            } else {
                self.cancel_warning_replay();
            }
        }
    }

    // =========================================================================
    // Readouts
    // =========================================================================

    /// Set the speed in metres per second.
    pub fn set_speed(
        &mut self,
        mps: f32,
    ) {
        let display = display_speed(mps);
        self.state.displayed_speed = display;
        if display > 0 {
            self.state.has_moved = true;
        }

        let mut text: String<12> = String::new();
        write!(text, "{display}").ok();
        self.presenter.set_text(Element::Speed, &text).ok();
        self.apply_speed_color();
    }

    /// Set the gear. Positive values are forward gears, 0 is reverse once the
    /// vehicle has moved (neutral before that).
    pub fn set_gear(
        &mut self,
        gear: i32,
    ) {
        let display = GearDisplay::resolve(gear, self.state.engine_on, self.state.has_moved);

        let mut text: String<12> = String::new();
        write!(text, "{display}").ok();
        self.presenter.set_text(Element::Gear, &text).ok();
        self.presenter.set_flag(Element::Gear, Flag::Reverse, display.is_reverse()).ok();
    }

    /// Set the RPM as a fraction of the 8000 scale.
    pub fn set_rpm(
        &mut self,
        rpm: f32,
    ) {
        self.state.rpm = clamp_fraction(rpm);
        let readout = RpmReadout::from_fraction(rpm);

        self.presenter.set_flag(Element::Rpm, Flag::On, readout.active && !readout.redline).ok();
        self.presenter.set_flag(Element::Rpm, Flag::Redline, readout.redline).ok();

        let mut text: String<12> = String::new();
        if readout.active {
            write!(text, "{}", readout.value).ok();
        }
        self.presenter.set_text(Element::Rpm, &text).ok();
        self.presenter.set_transform(Element::Rpm, Transform::FillWidth(readout.fill)).ok();
    }

    /// Set the fuel level (fraction, clamped to 0.0-1.0).
    pub fn set_fuel(
        &mut self,
        fuel: f32,
    ) {
        self.apply_fuel(fuel, true);
    }

    /// Set the engine health (fraction, clamped to 0.0-1.0).
    pub fn set_health(
        &mut self,
        health: f32,
    ) {
        self.apply_health(health, true);
    }

    // =========================================================================
    // Lights
    // =========================================================================

    pub fn set_left_indicator(
        &mut self,
        on: bool,
    ) {
        self.state.left_indicator = on;
        self.apply_indicator_icon(Side::Left);
        self.update_indicators();
    }

    pub fn set_right_indicator(
        &mut self,
        on: bool,
    ) {
        self.state.right_indicator = on;
        self.apply_indicator_icon(Side::Right);
        self.update_indicators();
    }

    /// Set the headlights. Independent of ignition.
    pub fn set_headlights(
        &mut self,
        level: HeadlightLevel,
    ) {
        self.state.headlights = level;
        let p = &mut self.presenter;
        match level {
            HeadlightLevel::Low => {
                p.set_filter(Element::LowBeamIcon, Filter::LowBeamActive).ok();
                p.set_opacity(Element::LowBeamIcon, ACTIVE_OPACITY).ok();
                p.set_opacity(Element::HighBeamIcon, 0.0).ok();
            }
            HeadlightLevel::High => {
                p.set_filter(Element::HighBeamIcon, Filter::HighBeamActive).ok();
                p.set_opacity(Element::HighBeamIcon, ACTIVE_OPACITY).ok();
                p.set_opacity(Element::LowBeamIcon, 0.0).ok();
            }
            HeadlightLevel::Off => {
                p.set_filter(Element::LowBeamIcon, Filter::LowBeamGrey).ok();
                p.set_filter(Element::HighBeamIcon, Filter::HighBeamGrey).ok();
                p.set_opacity(Element::LowBeamIcon, INACTIVE_OPACITY).ok();
                p.set_opacity(Element::HighBeamIcon, INACTIVE_OPACITY).ok();
            }
        }
    }

    /// Re-derive every icon from current state, e.g. after the host swapped
    /// or reattached the display surface.
    pub fn refresh_all_icons(&mut self) {
        self.update_engine_icon();
        self.update_fuel_icon(self.state.stored_fuel * 100.0);

        if self.state.vehicle.is_motorcycle() {
            self.silence_seatbelt();
        } else {
            self.apply_seatbelt();
        }

        self.apply_indicator_icon(Side::Left);
        self.apply_indicator_icon(Side::Right);
        self.set_headlights(self.state.headlights);
    }

    // =========================================================================
    // Speedometer Styling
    // =========================================================================

    /// Tint the speedometer backdrop, optionally changing its opacity too.
    pub fn set_speedo_background(
        &mut self,
        color: Rgb888,
        opacity: Option<f32>,
    ) {
        self.presenter.set_color(Element::Speedo, Paint::solid(color, 0.0)).ok();
        if let Some(opacity) = opacity {
            self.set_speedo_opacity(opacity);
        }
    }

    pub fn set_speedo_opacity(
        &mut self,
        opacity: f32,
    ) {
        self.presenter.set_opacity(Element::Speedo, clamp_fraction(opacity)).ok();
    }

    /// Position one bar stack.
    pub fn set_bar_placement(
        &mut self,
        side: BarSide,
        placement: BarPlacement,
    ) {
        self.presenter.set_placement(side.element(), placement).ok();
    }

    /// Center both bar stacks within the speedometer.
    pub fn center_bars(&mut self) {
        self.set_bar_placement(BarSide::Left, BarPlacement::centered());
        self.set_bar_placement(BarSide::Right, BarPlacement::centered());
    }

    /// Position either or both bar stacks; `None` leaves a side untouched.
    pub fn set_bars_placement(
        &mut self,
        left: Option<BarPlacement>,
        right: Option<BarPlacement>,
    ) {
        if let Some(placement) = left {
            self.set_bar_placement(BarSide::Left, placement);
        }
        if let Some(placement) = right {
            self.set_bar_placement(BarSide::Right, placement);
        }
    }

    // =========================================================================
    // Health / Fuel
    // =========================================================================

    fn apply_health(
        &mut self,
        health: f32,
        live: bool,
    ) {
        let p = clamp_fraction(health);
        let percent = p * 100.0;
        self.state.stored_health = p;
        self.state.engine_health = p;

        self.apply_bar(Element::HealthBar, Element::HealthPercent, percent);
        self.update_engine_icon();
        self.evaluate_warnings(Metric::Health, percent, live);
    }

    fn apply_fuel(
        &mut self,
        fuel: f32,
        live: bool,
    ) {
        let p = clamp_fraction(fuel);
        let percent = p * 100.0;
        self.state.stored_fuel = p;

        self.apply_bar(Element::FuelBar, Element::FuelPercent, percent);
        self.update_fuel_icon(percent);
        self.evaluate_warnings(Metric::Fuel, percent, live);
    }

    fn apply_bar(
        &mut self,
        bar: Element,
        readout: Element,
        percent: f32,
    ) {
        let tier = LevelTier::classify(percent, self.state.engine_on);
        self.presenter.set_transform(bar, Transform::TranslateY(100.0 - percent)).ok();
        self.presenter.set_color(bar, tier.bar_paint()).ok();

        let mut text: String<8> = String::new();
        write!(text, "{}%", micromath::F32(percent).round().0 as u32).ok();
        self.presenter.set_text(readout, &text).ok();
    }

    /// Run the latches for a new reading. Only live updates may fire; restores
    /// during ignition changes re-arm but leave firing to the replay.
    fn evaluate_warnings(
        &mut self,
        metric: Metric,
        percent: f32,
        live: bool,
    ) {
        let gate = live && self.state.warnings_enabled();
        let cues = self.state.warned.evaluate(metric, percent, gate);
        for cue in cues {
            self.info(format_args!("Warning: {}", cue.label()));
            let ts = self.timestamp_ms();
            play_once(&mut self.audio, cue, &mut self.log, ts);
        }
    }

    fn start_warning_replay(&mut self) {
        let pending = self
            .state
            .warned
            .pending(self.state.engine_health * 100.0, self.state.stored_fuel * 100.0);
        if pending.is_empty() {
            return;
        }
        let queued = self.sequencer.schedule(self.now, &pending);
        self.info(format_args!("Replay: {queued} warning(s) queued"));
        self.fire_due();
    }

    fn cancel_warning_replay(&mut self) {
        let dropped = self.sequencer.cancel_all();
        if dropped > 0 {
            self.debug(format_args!("Replay: {dropped} cancelled"));
        }
    }

    /// Play replayed warnings that are due. A cue is skipped if the live path
    /// already fired it or its metric has since recovered.
    fn fire_due(&mut self) {
        for latch in self.sequencer.due(self.now) {
            let percent = match latch.metric() {
                Metric::Health => self.state.engine_health * 100.0,
                Metric::Fuel => self.state.stored_fuel * 100.0,
            };
            if self.state.warned.is_set(latch) || !latch.breached(percent) {
                continue;
            }
            self.state.warned.set(latch, true);
            self.info(format_args!("Warning: {}", latch.cue().label()));
            let ts = self.timestamp_ms();
            play_once(&mut self.audio, latch.cue(), &mut self.log, ts);
        }
    }

    // =========================================================================
    // Icons
    // =========================================================================

    fn update_engine_icon(&mut self) {
        let tier = LevelTier::classify(self.state.engine_health * 100.0, self.state.engine_on);
        self.presenter.set_filter(Element::EngineIcon, tier.engine_filter()).ok();
        self.presenter.set_opacity(Element::EngineIcon, icon_opacity(self.state.engine_on)).ok();
    }

    fn update_fuel_icon(
        &mut self,
        percent: f32,
    ) {
        let tier = LevelTier::classify(percent, self.state.engine_on);
        self.presenter.set_filter(Element::FuelIcon, tier.fuel_filter()).ok();
        self.presenter.set_opacity(Element::FuelIcon, icon_opacity(self.state.engine_on)).ok();
        self.presenter.set_flag(Element::FuelIcon, Flag::FuelLow, tier == LevelTier::Low).ok();
    }

    /// Seatbelt icon plus the chime/alarm pair, from current state.
    fn apply_seatbelt(&mut self) {
        let buckled = self.state.seatbelt_buckled;
        let p = &mut self.presenter;

        if self.state.engine_on {
            p.set_opacity(Element::SeatbeltIcon, ACTIVE_OPACITY).ok();
            let filter = if buckled { Filter::SeatbeltActive } else { Filter::SeatbeltWarning };
            p.set_filter(Element::SeatbeltIcon, filter).ok();
            p.set_flag(Element::SeatbeltIcon, Flag::SeatbeltWarning, !buckled).ok();
        } else {
            p.set_filter(Element::SeatbeltIcon, Filter::SeatbeltGrey).ok();
            p.set_opacity(Element::SeatbeltIcon, INACTIVE_OPACITY).ok();
            p.set_flag(Element::SeatbeltIcon, Flag::SeatbeltWarning, false).ok();
        }

        let alarm = self.state.seatbelt_alarm();
        let ts = self.timestamp_ms();
        manage_loop(&mut self.audio, Cue::SeatbeltWarning, alarm, &mut self.log, ts);
        manage_loop(&mut self.audio, Cue::Alarm, alarm, &mut self.log, ts);
    }

    /// Stop the seatbelt chime and alarm together.
    fn silence_seatbelt(&mut self) {
        let ts = self.timestamp_ms();
        manage_loop(&mut self.audio, Cue::SeatbeltWarning, false, &mut self.log, ts);
        manage_loop(&mut self.audio, Cue::Alarm, false, &mut self.log, ts);
    }

    fn apply_indicator_icon(
        &mut self,
        side: Side,
    ) {
        let on = match side {
            Side::Left => self.state.left_indicator,
            Side::Right => self.state.right_indicator,
        };
        let (active, grey) = side.filters();
        let icon = side.icon();

        if on {
            self.presenter.set_filter(icon, active).ok();
            self.presenter.set_opacity(icon, ACTIVE_OPACITY).ok();
        } else {
            // Inactive indicators stay dimmed regardless of ignition
            self.presenter.set_opacity(icon, INACTIVE_OPACITY).ok();
            self.presenter.set_filter(icon, grey).ok();
        }
        self.presenter.set_flag(icon, Flag::Active, on).ok();
    }

    /// Blink whichever indicators are on; tick while any is.
    fn update_indicators(&mut self) {
        let left = self.state.left_indicator;
        let right = self.state.right_indicator;

        self.presenter.set_flag(Element::LeftIcon, Flag::Blinking, left).ok();
        self.presenter.set_flag(Element::RightIcon, Flag::Blinking, right).ok();

        let ts = self.timestamp_ms();
        manage_loop(&mut self.audio, Cue::Tick, left || right, &mut self.log, ts);
    }

    fn apply_speed_color(&mut self) {
        let band = SpeedBand::classify(self.state.displayed_speed, self.state.engine_on);
        self.presenter.set_color(Element::Speed, band.paint()).ok();
    }

    // =========================================================================
    // Logging
    // =========================================================================

    /// Log timestamp; wraps with the `u32` millisecond counter.
    #[inline]
    fn timestamp_ms(&self) -> u32 { self.now.as_millis() as u32 }

    fn info(
        &mut self,
        args: core::fmt::Arguments<'_>,
    ) {
        let ts = self.timestamp_ms();
        self.log.push_fmt(LogLevel::Info, ts, args);
    }

    fn debug(
        &mut self,
        args: core::fmt::Arguments<'_>,
    ) {
        let ts = self.timestamp_ms();
        self.log.push_fmt(LogLevel::Debug, ts, args);
    }
}

#[inline]
const fn icon_opacity(engine_on: bool) -> f32 { if engine_on { ACTIVE_OPACITY } else { INACTIVE_OPACITY } }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingAudio, RecordingPresenter};

    type TestHud = Dashboard<RecordingPresenter, RecordingAudio>;

    /// A car HUD, engine off.
    fn hud() -> TestHud {
        let mut hud = Dashboard::new(RecordingPresenter::default(), RecordingAudio::default());
        hud.set_vehicle_type(VehicleClass::Car);
        hud
    }

    fn ms(v: u64) -> Duration { Duration::from_millis(v) }

    /// Engine on, belt buckled, nothing warned yet.
    fn running_buckled() -> TestHud {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_engine(true);
        hud
    }

    fn speed_paint(hud: &TestHud) -> Paint { hud.presenter().colors[&Element::Speed] }

    // -------------------------------------------------------------------------
    // Clamping
    // -------------------------------------------------------------------------

    #[test]
    fn test_fractions_are_clamped() {
        let mut hud = hud();
        for (input, stored) in [(-0.3, 0.0), (0.4, 0.4), (1.7, 1.0), (f32::NAN, 0.0)] {
            hud.set_fuel(input);
            hud.set_health(input);
            assert_eq!(hud.state().stored_fuel, stored);
            assert_eq!(hud.state().stored_health, stored);
            assert_eq!(hud.state().engine_health, stored);
        }
    }

    #[test]
    fn test_bar_transform_and_readout() {
        let mut hud = hud();
        hud.set_fuel(0.25);
        assert_eq!(hud.presenter().transforms[&Element::FuelBar], Transform::TranslateY(75.0));
        assert_eq!(hud.presenter().text_of(Element::FuelPercent), Some("25%"));

        hud.set_health(2.0);
        assert_eq!(hud.presenter().transforms[&Element::HealthBar], Transform::TranslateY(0.0));
        assert_eq!(hud.presenter().text_of(Element::HealthPercent), Some("100%"));
    }

    // -------------------------------------------------------------------------
    // Tiers
    // -------------------------------------------------------------------------

    #[test]
    fn test_bars_transparent_with_engine_off() {
        let mut hud = hud();
        hud.set_health(0.1);
        assert_eq!(hud.presenter().colors[&Element::HealthBar], Paint::Transparent);
        assert_eq!(hud.presenter().filters[&Element::EngineIcon], Filter::EngineGrey);
        assert_eq!(hud.presenter().opacity[&Element::EngineIcon], INACTIVE_OPACITY);
    }

    #[test]
    fn test_fuel_tiers_with_engine_on() {
        let mut hud = hud();
        hud.set_engine(true);

        hud.set_fuel(0.8);
        assert_eq!(hud.presenter().filters[&Element::FuelIcon], Filter::FuelHigh);
        hud.set_fuel(0.3);
        assert_eq!(hud.presenter().filters[&Element::FuelIcon], Filter::FuelMedium);
        assert!(!hud.presenter().has_flag(Element::FuelIcon, Flag::FuelLow));
        hud.set_fuel(0.2);
        assert_eq!(hud.presenter().filters[&Element::FuelIcon], Filter::FuelLow);
        assert!(hud.presenter().has_flag(Element::FuelIcon, Flag::FuelLow));
        assert_eq!(hud.presenter().colors[&Element::FuelBar], LevelTier::Low.bar_paint());
    }

    // -------------------------------------------------------------------------
    // Warnings
    // -------------------------------------------------------------------------

    #[test]
    fn test_live_health_warnings_fire_once() {
        let mut hud = running_buckled();
        hud.set_health(0.15);
        hud.set_health(0.12);
        hud.set_health(0.10);
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1, Cue::EngineWarn2]);
    }

    #[test]
    fn test_hysteresis_refires_after_recovery() {
        let mut hud = running_buckled();
        for fuel in [0.4, 0.3, 0.8, 0.9, 0.45, 0.35] {
            hud.set_fuel(fuel);
        }
        assert_eq!(hud.audio().play_count(Cue::Fuel50), 2);
        assert_eq!(hud.audio().play_count(Cue::Fuel10), 0);
    }

    #[test]
    fn test_no_warnings_while_unbuckled() {
        let mut hud = hud();
        hud.set_engine(true);
        hud.set_fuel(0.05);
        assert_eq!(hud.audio().play_count(Cue::Fuel50), 0);
        assert_eq!(hud.audio().play_count(Cue::Fuel10), 0);
    }

    #[test]
    fn test_no_warnings_with_engine_off() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_health(0.1);
        assert!(hud.audio().one_shots().is_empty());
        assert!(!hud.state().warned.any());
    }

    #[test]
    fn test_buckle_after_damage_warns_once_each() {
        let mut hud = hud();
        hud.set_engine(true);
        hud.set_health(0.15);
        hud.set_seatbelt(true);

        assert_eq!(hud.presenter().colors[&Element::HealthBar], LevelTier::Low.bar_paint());
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1]);

        hud.tick(ms(1500));
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1, Cue::EngineWarn2]);

        hud.tick(ms(10_000));
        hud.set_health(0.14);
        assert_eq!(hud.audio().play_count(Cue::EngineWarn1), 1);
        assert_eq!(hud.audio().play_count(Cue::EngineWarn2), 1);
    }

    #[test]
    fn test_engine_cycle_clears_latches() {
        let mut hud = running_buckled();
        hud.set_health(0.1);
        hud.set_fuel(0.05);
        assert!(hud.state().warned.any());

        hud.set_engine(false);
        hud.set_seatbelt(false);
        hud.set_engine(true);
        assert!(!hud.state().warned.any());
    }

    // -------------------------------------------------------------------------
    // Startup replay
    // -------------------------------------------------------------------------

    #[test]
    fn test_startup_replay_is_spaced() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_health(0.1);
        hud.set_fuel(0.05);
        hud.tick(ms(2000));

        hud.set_engine(true);
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1]);
        assert_eq!(hud.pending_cues(), 3);

        hud.tick(ms(3499));
        assert_eq!(hud.audio().one_shots().len(), 1);
        hud.tick(ms(3500));
        hud.tick(ms(5000));
        hud.tick(ms(6500));
        assert_eq!(
            hud.audio().one_shots(),
            [Cue::EngineWarn1, Cue::EngineWarn2, Cue::Fuel50, Cue::Fuel10]
        );
        assert!(hud.state().warned.is_set(crate::warnings::Latch::Fuel10));
    }

    #[test]
    fn test_latch_set_when_cue_fires_not_when_queued() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_fuel(0.05);
        hud.set_engine(true);

        assert!(hud.state().warned.is_set(crate::warnings::Latch::Fuel50));
        assert!(!hud.state().warned.is_set(crate::warnings::Latch::Fuel10));
        hud.tick(ms(1500));
        assert!(hud.state().warned.is_set(crate::warnings::Latch::Fuel10));
    }

    #[test]
    fn test_engine_off_cancels_replay() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_health(0.1);
        hud.set_fuel(0.05);
        hud.set_engine(true);
        hud.set_engine(false);

        assert_eq!(hud.pending_cues(), 0);
        hud.tick(ms(60_000));
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1]);
    }

    #[test]
    fn test_unbuckle_cancels_replay() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_fuel(0.05);
        hud.set_engine(true);
        hud.set_seatbelt(false);

        hud.tick(ms(60_000));
        assert_eq!(hud.audio().one_shots(), [Cue::Fuel50]);
    }

    #[test]
    fn test_replay_skips_recovered_metric() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_fuel(0.05);
        hud.set_engine(true);

        // Refuelled before the reserve cue came round
        hud.set_fuel(1.0);
        hud.tick(ms(1500));
        assert_eq!(hud.audio().one_shots(), [Cue::Fuel50]);
    }

    #[test]
    fn test_replay_skips_cue_fired_live() {
        let mut hud = hud();
        hud.set_seatbelt(true);
        hud.set_health(0.4);
        hud.set_fuel(0.4);
        hud.set_engine(true);
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1]);

        // Live drop below 20% fires immediately; fuel 50 still waits its turn
        hud.set_health(0.1);
        hud.tick(ms(1500));
        assert_eq!(hud.audio().one_shots(), [Cue::EngineWarn1, Cue::EngineWarn2, Cue::Fuel50]);
    }

    // -------------------------------------------------------------------------
    // Ignition / seatbelt
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_engine_is_idempotent() {
        let mut hud = hud();
        hud.set_engine(true);
        let writes = hud.presenter().writes_to(Element::EngineIcon);
        let logged = hud.log().len();

        hud.set_engine(true);
        assert_eq!(hud.presenter().writes_to(Element::EngineIcon), writes);
        assert_eq!(hud.log().len(), logged);
    }

    #[test]
    fn test_unbuckled_engine_on_sounds_chime_and_alarm() {
        let mut hud = hud();
        hud.set_engine(true);

        assert!(hud.audio().is_playing(Cue::SeatbeltWarning));
        assert!(hud.audio().is_playing(Cue::Alarm));
        assert_eq!(hud.presenter().filters[&Element::SeatbeltIcon], Filter::SeatbeltWarning);
        assert!(hud.presenter().has_flag(Element::SeatbeltIcon, Flag::SeatbeltWarning));

        hud.set_seatbelt(true);
        assert!(!hud.audio().is_playing(Cue::SeatbeltWarning));
        assert!(!hud.audio().is_playing(Cue::Alarm));
        assert_eq!(hud.presenter().filters[&Element::SeatbeltIcon], Filter::SeatbeltActive);
        assert!(!hud.presenter().has_flag(Element::SeatbeltIcon, Flag::SeatbeltWarning));
    }

    #[test]
    fn test_engine_off_stops_loops_and_greys_out() {
        let mut hud = hud();
        hud.set_engine(true);
        hud.set_rpm(0.9);
        hud.set_engine(false);

        assert!(!hud.audio().is_playing(Cue::SeatbeltWarning));
        assert!(!hud.audio().is_playing(Cue::Alarm));
        assert_eq!(hud.presenter().filters[&Element::SeatbeltIcon], Filter::SeatbeltGrey);
        assert!(!hud.presenter().has_flag(Element::SeatbeltIcon, Flag::SeatbeltWarning));
        assert_eq!(hud.presenter().filters[&Element::EngineIcon], Filter::EngineGrey);
        assert_eq!(hud.presenter().text_of(Element::Rpm), Some(""));
        assert_eq!(hud.state().rpm, 0.0);
    }

    #[test]
    fn test_seatbelt_grey_with_engine_off() {
        let mut hud = hud();
        hud.set_seatbelt(false);
        assert_eq!(hud.presenter().filters[&Element::SeatbeltIcon], Filter::SeatbeltGrey);
        assert_eq!(hud.presenter().opacity[&Element::SeatbeltIcon], INACTIVE_OPACITY);
        assert!(!hud.audio().is_playing(Cue::Alarm));
    }

    #[test]
    fn test_motorcycle_seatbelt_is_inert() {
        let mut hud = hud();
        hud.set_vehicle_type(VehicleClass::Motorcycle);
        hud.set_engine(true);
        assert!(!hud.presenter().visible[&Element::SeatbeltIcon]);

        let writes = hud.presenter().writes_to(Element::SeatbeltIcon);
        for buckled in [false, true, false, false, true, false] {
            hud.set_seatbelt(buckled);
        }

        assert_eq!(hud.presenter().writes_to(Element::SeatbeltIcon), writes);
        assert_eq!(hud.audio().play_count(Cue::SeatbeltWarning), 0);
        assert_eq!(hud.audio().play_count(Cue::Alarm), 0);
        assert!(!hud.state().seatbelt_buckled);
    }

    #[test]
    fn test_starts_as_motorcycle() {
        let mut hud = Dashboard::new(RecordingPresenter::default(), RecordingAudio::default());
        hud.set_engine(true);

        assert_eq!(hud.state().vehicle, VehicleClass::Motorcycle);
        assert!(!hud.audio().is_playing(Cue::Alarm));
        assert!(!hud.audio().is_playing(Cue::SeatbeltWarning));
        assert_eq!(hud.presenter().writes_to(Element::SeatbeltIcon), 0);
    }

    #[test]
    fn test_refresh_leaves_motorcycle_seatbelt_alone() {
        let mut hud = hud();
        hud.set_vehicle_type(VehicleClass::Motorcycle);
        hud.set_engine(true);

        *hud.presenter_mut() = RecordingPresenter::default();
        hud.refresh_all_icons();

        assert_eq!(hud.presenter().writes_to(Element::SeatbeltIcon), 0);
        assert!(!hud.audio().is_playing(Cue::SeatbeltWarning));
        assert!(!hud.audio().is_playing(Cue::Alarm));
        assert_eq!(hud.presenter().filters[&Element::EngineIcon], Filter::EngineGreen);
    }

    #[test]
    fn test_switching_to_motorcycle_silences_alarm() {
        let mut hud = hud();
        hud.set_engine(true);
        assert!(hud.audio().is_playing(Cue::Alarm));

        hud.set_vehicle_type(VehicleClass::Motorcycle);
        assert!(!hud.audio().is_playing(Cue::Alarm));
        assert!(!hud.audio().is_playing(Cue::SeatbeltWarning));

        hud.set_vehicle_type(VehicleClass::Car);
        assert!(hud.presenter().visible[&Element::SeatbeltIcon]);
    }

    // -------------------------------------------------------------------------
    // Speed / gear / RPM
    // -------------------------------------------------------------------------

    #[test]
    fn test_speed_display_and_color() {
        let mut hud = hud();
        hud.set_engine(true);

        hud.set_speed(10.0);
        assert_eq!(hud.presenter().text_of(Element::Speed), Some("22"));
        assert_eq!(speed_paint(&hud), SpeedBand::Green.paint());

        hud.set_speed(20.0);
        assert_eq!(hud.presenter().text_of(Element::Speed), Some("45"));
        assert_eq!(speed_paint(&hud), SpeedBand::Yellow.paint());

        hud.set_speed(27.0);
        assert_eq!(hud.presenter().text_of(Element::Speed), Some("60"));
        assert_eq!(speed_paint(&hud), SpeedBand::Red.paint());

        hud.set_engine(false);
        assert_eq!(speed_paint(&hud), SpeedBand::White.paint());
    }

    #[test]
    fn test_speed_color_restored_on_ignition() {
        let mut hud = hud();
        hud.set_speed(27.0);
        assert_eq!(speed_paint(&hud), SpeedBand::White.paint());
        hud.set_engine(true);
        assert_eq!(speed_paint(&hud), SpeedBand::Red.paint());
    }

    #[test]
    fn test_gear_neutral_then_reverse() {
        let mut hud = hud();
        hud.set_engine(true);

        hud.set_gear(0);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("N"));
        assert!(!hud.presenter().has_flag(Element::Gear, Flag::Reverse));

        hud.set_speed(3.0);
        hud.set_speed(0.0);
        hud.set_gear(0);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("R"));
        assert!(hud.presenter().has_flag(Element::Gear, Flag::Reverse));

        hud.set_gear(2);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("2"));

        hud.set_engine(false);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("N"));
        hud.set_engine(true);
        hud.set_gear(0);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("N"));
    }

    #[test]
    fn test_gear_neutral_with_engine_off() {
        let mut hud = hud();
        hud.set_gear(4);
        assert_eq!(hud.presenter().text_of(Element::Gear), Some("N"));
    }

    #[test]
    fn test_rpm_flags() {
        let mut hud = hud();
        hud.set_rpm(0.5);
        assert!(hud.presenter().has_flag(Element::Rpm, Flag::On));
        assert!(!hud.presenter().has_flag(Element::Rpm, Flag::Redline));
        assert_eq!(hud.presenter().text_of(Element::Rpm), Some("4000"));

        hud.set_rpm(0.85);
        assert!(!hud.presenter().has_flag(Element::Rpm, Flag::On));
        assert!(hud.presenter().has_flag(Element::Rpm, Flag::Redline));

        hud.set_rpm(0.0625);
        assert!(!hud.presenter().has_flag(Element::Rpm, Flag::On));
        assert_eq!(hud.presenter().text_of(Element::Rpm), Some(""));
        assert_eq!(hud.presenter().transforms[&Element::Rpm], Transform::FillWidth(6.25));
    }

    // -------------------------------------------------------------------------
    // Indicators / headlights
    // -------------------------------------------------------------------------

    #[test]
    fn test_indicator_or_rule() {
        let mut hud = hud();
        hud.set_left_indicator(true);
        hud.set_right_indicator(false);

        let p = hud.presenter();
        assert!(p.has_flag(Element::LeftIcon, Flag::Blinking));
        assert!(!p.has_flag(Element::RightIcon, Flag::Blinking));
        assert_eq!(p.filters[&Element::LeftIcon], Filter::LeftActive);
        assert_eq!(p.opacity[&Element::RightIcon], INACTIVE_OPACITY);
        assert!(hud.audio().is_playing(Cue::Tick));

        hud.set_left_indicator(false);
        assert!(!hud.audio().is_playing(Cue::Tick));
        assert!(!hud.presenter().has_flag(Element::LeftIcon, Flag::Blinking));
    }

    #[test]
    fn test_hazards_blink_both_with_one_tick() {
        let mut hud = hud();
        hud.set_left_indicator(true);
        hud.set_right_indicator(true);

        assert!(hud.presenter().has_flag(Element::LeftIcon, Flag::Blinking));
        assert!(hud.presenter().has_flag(Element::RightIcon, Flag::Blinking));
        assert_eq!(hud.audio().play_count(Cue::Tick), 1);

        hud.set_right_indicator(false);
        assert!(hud.audio().is_playing(Cue::Tick));
        hud.set_left_indicator(false);
        assert!(!hud.audio().is_playing(Cue::Tick));
    }

    #[test]
    fn test_headlights() {
        let mut hud = hud();
        hud.set_headlights(HeadlightLevel::High);
        assert_eq!(hud.presenter().filters[&Element::HighBeamIcon], Filter::HighBeamActive);
        assert_eq!(hud.presenter().opacity[&Element::HighBeamIcon], ACTIVE_OPACITY);
        assert_eq!(hud.presenter().opacity[&Element::LowBeamIcon], 0.0);

        hud.set_headlights(HeadlightLevel::from(0));
        assert_eq!(hud.presenter().filters[&Element::LowBeamIcon], Filter::LowBeamGrey);
        assert_eq!(hud.presenter().opacity[&Element::HighBeamIcon], INACTIVE_OPACITY);
    }

    // -------------------------------------------------------------------------
    // Refresh / degraded surfaces
    // -------------------------------------------------------------------------

    #[test]
    fn test_refresh_repaints_new_surface() {
        let mut hud = hud();
        hud.set_engine(true);
        hud.set_seatbelt(true);
        hud.set_fuel(0.2);
        hud.set_left_indicator(true);
        hud.set_headlights(HeadlightLevel::Low);

        *hud.presenter_mut() = RecordingPresenter::default();
        hud.refresh_all_icons();

        let p = hud.presenter();
        assert_eq!(p.filters[&Element::EngineIcon], Filter::EngineGreen);
        assert_eq!(p.filters[&Element::FuelIcon], Filter::FuelLow);
        assert_eq!(p.filters[&Element::SeatbeltIcon], Filter::SeatbeltActive);
        assert_eq!(p.filters[&Element::LeftIcon], Filter::LeftActive);
        assert_eq!(p.filters[&Element::RightIcon], Filter::RightGrey);
        assert_eq!(p.filters[&Element::LowBeamIcon], Filter::LowBeamActive);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut presenter = RecordingPresenter::default();
        presenter.remove(Element::SeatbeltIcon);
        presenter.remove(Element::Speed);
        let mut hud = Dashboard::new(presenter, RecordingAudio::default());
        hud.set_vehicle_type(VehicleClass::Car);

        hud.set_engine(true);
        hud.set_speed(30.0);

        // Audio still follows state even without the icon
        assert!(hud.audio().is_playing(Cue::Alarm));
        assert_eq!(hud.presenter().writes_to(Element::SeatbeltIcon), 0);
        assert_eq!(hud.state().displayed_speed, 67);
    }

    #[test]
    fn test_blocked_audio_is_logged() {
        let mut audio = RecordingAudio::default();
        audio.block(Cue::Fuel50);
        let mut hud = Dashboard::new(RecordingPresenter::default(), audio);
        hud.set_vehicle_type(VehicleClass::Car);
        hud.set_seatbelt(true);
        hud.set_engine(true);
        hud.set_fuel(0.3);

        // Latch is still set: a blocked cue is not retried
        assert!(hud.state().warned.is_set(crate::warnings::Latch::Fuel50));
        let entry = hud.log().last().unwrap();
        assert_eq!(entry.level, LogLevel::Warn);
        assert!(entry.message.contains("FUEL50"));

        hud.set_fuel(0.25);
        assert_eq!(hud.log().iter().filter(|e| e.level == LogLevel::Warn).count(), 1);
    }

    // -------------------------------------------------------------------------
    // Speedometer styling
    // -------------------------------------------------------------------------

    #[test]
    fn test_speedo_background_and_bars() {
        let mut hud = hud();
        hud.set_speedo_background(Rgb888::new(10, 20, 30), Some(1.5));
        assert_eq!(hud.presenter().colors[&Element::Speedo].color(), Some(Rgb888::new(10, 20, 30)));
        assert_eq!(hud.presenter().opacity[&Element::Speedo], 1.0);

        hud.center_bars();
        assert_eq!(hud.presenter().placements[&Element::LeftBars], BarPlacement::centered());

        let pinned = BarPlacement::fixed(Some(10), None, None, Some(4));
        hud.set_bars_placement(None, Some(pinned));
        assert_eq!(hud.presenter().placements[&Element::RightBars], pinned);
        assert_eq!(hud.presenter().placements[&Element::LeftBars], BarPlacement::centered());
    }

    #[test]
    fn test_log_timestamp_wraps() {
        let mut hud = hud();
        hud.tick(ms(u64::from(u32::MAX) + 1 + 500));
        hud.set_engine(true);
        let entry = hud.log().iter().find(|e| e.message.as_str() == "Engine: ON").unwrap();
        assert_eq!(entry.timestamp_ms, 500);
    }

    #[test]
    fn test_ignition_is_logged() {
        let mut hud = hud();
        hud.tick(ms(250));
        hud.set_engine(true);
        let entry = hud.log().iter().find(|e| e.message.as_str() == "Engine: ON").unwrap();
        assert_eq!(entry.timestamp_ms, 250);
    }
}
