//! Audio cues and playback management.
//!
//! The HUD has two kinds of cues:
//!
//! - **Looping**: indicator tick, seatbelt chime, alarm. They run until
//!   stopped. Starting a playing loop and stopping a stopped loop are both
//!   no-ops; a fresh start always plays from the beginning.
//! - **One-shot**: engine and fuel warnings. Each trigger restarts the clip.
//!
//! Playback is best effort. A failed `play` (e.g. blocked by an autoplay
//! policy) is logged at warn level and otherwise ignored; nothing is retried
//! and nothing reaches the caller of the setter.

use core::fmt;

use crate::log::{LogBuffer, LogLevel};

/// Every cue the HUD can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Indicator tick (looping).
    Tick,
    /// Seatbelt reminder chime (looping).
    SeatbeltWarning,
    /// Alarm paired with the seatbelt chime (looping).
    Alarm,
    /// Engine health at or below 50%.
    EngineWarn1,
    /// Engine health at or below 20%.
    EngineWarn2,
    /// Fuel at or below 50%.
    Fuel50,
    /// Fuel at or below 10%.
    Fuel10,
}

impl Cue {
    /// All cues, loops first.
    pub const ALL: [Self; 7] = [
        Self::Tick,
        Self::SeatbeltWarning,
        Self::Alarm,
        Self::EngineWarn1,
        Self::EngineWarn2,
        Self::Fuel50,
        Self::Fuel10,
    ];

    /// Whether the clip loops until stopped.
    #[inline]
    pub const fn is_looping(self) -> bool { matches!(self, Self::Tick | Self::SeatbeltWarning | Self::Alarm) }

    /// Short label for logs and the simulator status line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tick => "TICK",
            Self::SeatbeltWarning => "BELT",
            Self::Alarm => "ALARM",
            Self::EngineWarn1 => "ENG50",
            Self::EngineWarn2 => "ENG20",
            Self::Fuel50 => "FUEL50",
            Self::Fuel10 => "FUEL10",
        }
    }
}

/// Playback backend.
pub trait AudioSink {
    type Error: fmt::Debug;

    /// Rewind the cue and start it.
    fn play(
        &mut self,
        cue: Cue,
    ) -> Result<(), Self::Error>;

    /// Pause the cue and rewind it.
    fn stop(
        &mut self,
        cue: Cue,
    );

    /// Whether the cue is currently playing.
    fn is_playing(
        &self,
        cue: Cue,
    ) -> bool;
}

/// Play a one-shot cue from the start, logging failures.
pub fn play_once<A: AudioSink>(
    sink: &mut A,
    cue: Cue,
    log: &mut LogBuffer,
    timestamp_ms: u32,
) {
    if let Err(e) = sink.play(cue) {
        log.push_fmt(
            LogLevel::Warn,
            timestamp_ms,
            format_args!("Audio play failed: {} {:?}", cue.label(), e),
        );
    }
}

/// Start or stop a looping cue, idempotently.
///
/// Starting rewinds to the beginning; a loop that is already playing is left
/// alone. Stopping a stopped loop does nothing.
pub fn manage_loop<A: AudioSink>(
    sink: &mut A,
    cue: Cue,
    should_play: bool,
    log: &mut LogBuffer,
    timestamp_ms: u32,
) {
    match (should_play, sink.is_playing(cue)) {
        (true, false) => play_once(sink, cue, log, timestamp_ms),
        (false, true) => sink.stop(cue),
        _ => {}
    }
}
