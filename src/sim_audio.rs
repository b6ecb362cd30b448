//! Simulator audio sink.
//!
//! There is no sound output on the simulator. [`SimAudio`] tracks which
//! loops are running and which one-shot played last, and the status line
//! shows both. Pressing `V` blocks playback to exercise the failure path
//! (the equivalent of a browser refusing autoplay).

use std::time::{Duration, Instant};

use vehicle_hud::audio::{AudioSink, Cue};

/// How long a one-shot stays on the status line.
const ONE_SHOT_DISPLAY: Duration = Duration::from_millis(1500);

/// Playback was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blocked;

pub struct SimAudio {
    playing: [bool; Cue::ALL.len()],
    last_one_shot: Option<(Cue, Instant)>,
    blocked: bool,
}

impl SimAudio {
    pub const fn new() -> Self {
        Self {
            playing: [false; Cue::ALL.len()],
            last_one_shot: None,
            blocked: false,
        }
    }

    /// Toggle refusing playback. Returns the new state.
    pub fn toggle_blocked(&mut self) -> bool {
        self.blocked = !self.blocked;
        self.blocked
    }

    #[inline]
    pub const fn is_blocked(&self) -> bool { self.blocked }

    /// Loops currently running.
    pub fn loops(&self) -> impl Iterator<Item = Cue> + '_ {
        Cue::ALL.into_iter().filter(|cue| cue.is_looping() && self.playing[*cue as usize])
    }

    /// The one-shot that played most recently, if it is still "sounding".
    pub fn recent_one_shot(&self) -> Option<Cue> {
        self.last_one_shot
            .filter(|(_, at)| at.elapsed() < ONE_SHOT_DISPLAY)
            .map(|(cue, _)| cue)
    }
}

impl AudioSink for SimAudio {
    type Error = Blocked;

    fn play(
        &mut self,
        cue: Cue,
    ) -> Result<(), Self::Error> {
        if self.blocked {
            return Err(Blocked);
        }
        if cue.is_looping() {
            self.playing[cue as usize] = true;
        } else {
            self.last_one_shot = Some((cue, Instant::now()));
        }
        Ok(())
    }

    fn stop(
        &mut self,
        cue: Cue,
    ) {
        self.playing[cue as usize] = false;
    }

    fn is_playing(
        &self,
        cue: Cue,
    ) -> bool {
        self.playing[cue as usize]
    }
}
