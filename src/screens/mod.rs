//! Simulator pages.
//!
//! - **HUD** ([`hud`]): the heads-up display as the reconciler left it
//! - **Log** ([`log`]): state summary and log terminal (toggle with `L`)
//!
//! Both pages are redrawn in full every frame: blinking badges and the
//! status line change continuously.

mod hud;
mod log;

pub use hud::draw_hud_page;
pub use log::draw_log_page;
