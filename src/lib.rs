//! Vehicle HUD library - the state reconciler behind the heads-up display.
//!
//! This library holds everything that decides *what* the HUD shows and
//! *which* cues play. Drawing and playback live behind the
//! [`Presenter`](presenter::Presenter) and [`AudioSink`](audio::AudioSink)
//! traits, so the same reconciler drives the desktop simulator (`main.rs`)
//! and the recording doubles used in tests.
//!
//! - [`dashboard`]: The reconciler and its setter API
//! - [`state`]: The single mutable state record
//! - [`warnings`]: Threshold latches for one-shot warning cues
//! - [`sequencer`]: Spaced replay of warnings after ignition / buckling up
//! - [`tiers`]: Pure presentation derivation (tiers, bands, gear, RPM)
//! - [`presenter`]: Output surface trait and element/filter vocabulary
//! - [`audio`]: Cue vocabulary, sink trait, loop management
//! - [`log`]: Levelled, timestamped log ring buffer
//! - [`colors`], [`thresholds`], [`config`]: Compile-time constants
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the library itself stays `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod audio;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod log;
pub mod presenter;
pub mod sequencer;
pub mod state;
pub mod thresholds;
pub mod tiers;
pub mod warnings;

#[cfg(test)]
mod testing;

// Re-export commonly used items
pub use audio::{AudioSink, Cue};
pub use dashboard::Dashboard;
pub use presenter::{Element, Filter, Flag, Presenter, SurfaceError, Transform};
pub use state::{DashboardState, HeadlightLevel, VehicleClass};
