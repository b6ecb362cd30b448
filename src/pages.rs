//! Page navigation for the simulator.
//!
//! Press `L` to toggle between pages.
//!
//! # Pages
//!
//! - [`Page::Hud`]: The heads-up display driven by the reconciler
//! - [`Page::Log`]: State summary and the reconciler's log terminal

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Bars, speed, gear, RPM, icon row and audio status.
    #[default]
    Hud,

    /// State summary plus log terminal.
    Log,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Hud => Self::Log,
            Self::Log => Self::Hud,
        }
    }

    /// Name written to the log on switching.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hud => "Page: HUD",
            Self::Log => "Page: Log",
        }
    }
}
