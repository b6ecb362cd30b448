//! Widget components for the simulator HUD.
//!
//! Every widget reads its element state back from the [`HudSurface`](crate::surface::HudSurface)
//! and draws it. None of them decide anything: tiers, bands and flags all
//! arrive already resolved by the reconciler.
//!
//! - [`bars`]: Health and fuel bar stacks with percentage readouts
//! - [`readouts`]: Dial backdrop, speed, gear, RPM box
//! - [`icons`]: Icon row (indicators, engine, fuel, beams, seatbelt)
//! - [`status`]: Audio status line
//!
//! All text goes through `heapless::String` and the const styles in
//! [`styles`](crate::styles).

mod bars;
mod icons;
mod readouts;
mod status;

pub use bars::draw_bars;
pub use icons::draw_icons;
pub use readouts::{draw_dial, draw_gear, draw_rpm, draw_speed};
pub use status::draw_status;
