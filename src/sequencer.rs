//! Spaced replay of pending warnings.
//!
//! When the driver starts the engine (or buckles up with the engine running)
//! any warning whose condition already holds is announced again, one cue at a
//! time, [`STARTUP_WARNING_SPACING`] apart so they never overlap.
//!
//! The queue is an explicit, cancellable timer list. The reconciler cancels
//! it when the engine goes off or the belt comes off, and polls it from
//! `tick`. Time is a `Duration` since HUD start supplied by the host, which
//! keeps replay deterministic in tests.
//!
//! ```text
//!  t=0        t=1.5s     t=3.0s     t=4.5s
//!  ENG50      ENG20      FUEL50     FUEL10
//! ```

use core::time::Duration;

use heapless::Vec;

use crate::config::{MAX_STARTUP_CUES, STARTUP_WARNING_SPACING};
use crate::warnings::Latch;

/// A replayed warning waiting for its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledCue {
    /// HUD time at which the cue becomes due.
    pub due: Duration,
    /// Warning to announce (its latch is set when it fires).
    pub latch: Latch,
}

/// Cancellable queue of replayed warnings.
#[derive(Clone, Debug, Default)]
pub struct StartupSequencer {
    queue: Vec<ScheduledCue, MAX_STARTUP_CUES>,
}

impl StartupSequencer {
    pub const fn new() -> Self { Self { queue: Vec::new() } }

    /// Queue `latches` in order starting at `now`, spaced by
    /// [`STARTUP_WARNING_SPACING`]. Replaces anything already queued.
    ///
    /// Returns the number of cues queued.
    pub fn schedule(
        &mut self,
        now: Duration,
        latches: &[Latch],
    ) -> usize {
        self.queue.clear();
        let mut offset = Duration::ZERO;
        for &latch in latches.iter().take(MAX_STARTUP_CUES) {
            self.queue.push(ScheduledCue { due: now + offset, latch }).ok();
            offset += STARTUP_WARNING_SPACING;
        }
        self.queue.len()
    }

    /// Remove and return every cue due at `now`, in schedule order.
    pub fn due(
        &mut self,
        now: Duration,
    ) -> Vec<Latch, MAX_STARTUP_CUES> {
        let mut ready = Vec::new();
        for entry in self.queue.iter().filter(|e| e.due <= now) {
            ready.push(entry.latch).ok();
        }
        self.queue.retain(|e| e.due > now);
        ready
    }

    /// Drop every queued cue. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Number of cues still queued.
    #[inline]
    pub fn pending(&self) -> usize { self.queue.len() }

    #[inline]
    pub fn is_idle(&self) -> bool { self.queue.is_empty() }

    /// When the next queued cue becomes due.
    pub fn next_due(&self) -> Option<Duration> { self.queue.iter().map(|e| e.due).min() }

    /// Queued cues in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledCue> { self.queue.iter() }
}
