//! Output surface abstraction.
//!
//! The reconciler never draws. It addresses HUD elements by [`Element`] and
//! hands them presentation tokens (paint, filter, opacity, text, transform,
//! state flags, visibility, placement). A presenter maps those onto whatever
//! backend it wraps: a DOM overlay, a game UI, the embedded-graphics
//! simulator, or a recording double in tests.
//!
//! # Missing Elements
//!
//! Every method returns `Result`. A presenter that has no such element
//! returns an error and the reconciler discards it for that call only, so a
//! partially built surface degrades to "do nothing" for the absent parts.

use core::fmt;

use crate::colors::Paint;

/// Addressable HUD elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// Vertical engine health bar.
    HealthBar,
    /// Vertical fuel bar.
    FuelBar,
    /// Numeric readout next to the health bar.
    HealthPercent,
    /// Numeric readout next to the fuel bar.
    FuelPercent,
    /// Speed readout.
    Speed,
    /// Gear readout.
    Gear,
    /// RPM box (fill plus value).
    Rpm,
    /// Backdrop behind the speedometer.
    Speedo,
    /// Container holding the left bar stack.
    LeftBars,
    /// Container holding the right bar stack.
    RightBars,
    EngineIcon,
    FuelIcon,
    LowBeamIcon,
    HighBeamIcon,
    LeftIcon,
    RightIcon,
    SeatbeltIcon,
}

impl Element {
    /// Every element, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::HealthBar,
        Self::FuelBar,
        Self::HealthPercent,
        Self::FuelPercent,
        Self::Speed,
        Self::Gear,
        Self::Rpm,
        Self::Speedo,
        Self::LeftBars,
        Self::RightBars,
        Self::EngineIcon,
        Self::FuelIcon,
        Self::LowBeamIcon,
        Self::HighBeamIcon,
        Self::LeftIcon,
        Self::RightIcon,
        Self::SeatbeltIcon,
    ];

    /// Position in [`Element::ALL`].
    #[inline]
    pub const fn index(self) -> usize { self as usize }

    /// Stable identifier, matching the overlay's element ids.
    pub const fn id(self) -> &'static str {
        match self {
            Self::HealthBar => "health-bar",
            Self::FuelBar => "fuel-bar",
            Self::HealthPercent => "health-percent",
            Self::FuelPercent => "fuel-percent",
            Self::Speed => "speed-display",
            Self::Gear => "gear-display",
            Self::Rpm => "rpm-boxes",
            Self::Speedo => "speedo-root",
            Self::LeftBars => "left-bars",
            Self::RightBars => "right-bars",
            Self::EngineIcon => "icon-engine",
            Self::FuelIcon => "icon-fuel",
            Self::LowBeamIcon => "icon-low-beam",
            Self::HighBeamIcon => "icon-high-beam",
            Self::LeftIcon => "icon-left",
            Self::RightIcon => "icon-right",
            Self::SeatbeltIcon => "icon-seatbelt",
        }
    }
}

/// Icon color filters. Each names a filter definition in the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    EngineGrey,
    EngineGreen,
    EngineYellow,
    EngineRed,
    FuelGrey,
    FuelHigh,
    FuelMedium,
    FuelLow,
    SeatbeltGrey,
    SeatbeltActive,
    SeatbeltWarning,
    LeftActive,
    LeftGrey,
    RightActive,
    RightGrey,
    LowBeamActive,
    LowBeamGrey,
    HighBeamActive,
    HighBeamGrey,
}

impl Filter {
    /// Whether this filter shows the icon lit (not greyed out).
    pub const fn is_lit(self) -> bool {
        !matches!(
            self,
            Self::EngineGrey
                | Self::FuelGrey
                | Self::SeatbeltGrey
                | Self::LeftGrey
                | Self::RightGrey
                | Self::LowBeamGrey
                | Self::HighBeamGrey
        )
    }
}

/// Boolean state flags toggled on elements (CSS classes in the overlay).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Indicator is switched on.
    Active,
    /// Indicator blink animation.
    Blinking,
    /// Seatbelt icon red flashing.
    SeatbeltWarning,
    /// Fuel icon in the low tier.
    FuelLow,
    /// Gear readout shows reverse.
    Reverse,
    /// RPM box lit.
    On,
    /// RPM box in redline styling.
    Redline,
}

/// Geometric transforms, in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Vertical offset of a bar fill; 0 is full, 100 is empty.
    TranslateY(f32),
    /// Horizontal fill of the RPM box, 0-100.
    FillWidth(f32),
}

/// Positioning scheme for a bar stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Laid out inside the speedometer (default).
    #[default]
    Static,
    /// Relative to the viewport.
    Fixed,
    /// Relative to the nearest positioned container.
    Absolute,
}

/// Cross-axis alignment of a bar stack within the speedometer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
}

/// Where a bar stack sits. Offsets are pixels; `None` means automatic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct BarPlacement {
    pub anchor: Anchor,
    pub top: Option<i32>,
    pub right: Option<i32>,
    pub bottom: Option<i32>,
    pub left: Option<i32>,
    pub align: Align,
}

impl BarPlacement {
    /// Static placement, centered in the speedometer.
    pub const fn centered() -> Self {
        Self {
            anchor: Anchor::Static,
            top: None,
            right: None,
            bottom: None,
            left: None,
            align: Align::Center,
        }
    }

    /// Viewport-fixed placement at the given offsets.
    pub const fn fixed(
        top: Option<i32>,
        right: Option<i32>,
        bottom: Option<i32>,
        left: Option<i32>,
    ) -> Self {
        Self {
            anchor: Anchor::Fixed,
            top,
            right,
            bottom,
            left,
            align: Align::Start,
        }
    }
}

/// The two bar stacks that can be repositioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarSide {
    Left,
    Right,
}

impl BarSide {
    /// Container element for this side.
    pub const fn element(self) -> Element {
        match self {
            Self::Left => Element::LeftBars,
            Self::Right => Element::RightBars,
        }
    }
}

/// Error for presenters that need a concrete type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface has no such element.
    Missing(Element),
    /// The element exists but does not take this kind of update.
    Unsupported(Element),
}

impl fmt::Display for SurfaceError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Missing(el) => write!(f, "missing element {}", el.id()),
            Self::Unsupported(el) => write!(f, "unsupported update on {}", el.id()),
        }
    }
}

/// Output surface the reconciler applies presentation to.
pub trait Presenter {
    type Error: fmt::Debug;

    fn set_color(
        &mut self,
        element: Element,
        paint: Paint,
    ) -> Result<(), Self::Error>;

    fn set_filter(
        &mut self,
        element: Element,
        filter: Filter,
    ) -> Result<(), Self::Error>;

    /// Opacity in 0.0-1.0.
    fn set_opacity(
        &mut self,
        element: Element,
        opacity: f32,
    ) -> Result<(), Self::Error>;

    fn set_text(
        &mut self,
        element: Element,
        text: &str,
    ) -> Result<(), Self::Error>;

    fn set_transform(
        &mut self,
        element: Element,
        transform: Transform,
    ) -> Result<(), Self::Error>;

    fn set_flag(
        &mut self,
        element: Element,
        flag: Flag,
        on: bool,
    ) -> Result<(), Self::Error>;

    fn set_visible(
        &mut self,
        element: Element,
        visible: bool,
    ) -> Result<(), Self::Error>;

    fn set_placement(
        &mut self,
        element: Element,
        placement: BarPlacement,
    ) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_index_matches_all() {
        for (i, el) in Element::ALL.iter().enumerate() {
            assert_eq!(el.index(), i, "{el:?}");
        }
    }

    #[test]
    fn test_filter_lit() {
        assert!(Filter::LeftActive.is_lit());
        assert!(Filter::FuelLow.is_lit());
        assert!(!Filter::EngineGrey.is_lit());
        assert!(!Filter::LowBeamGrey.is_lit());
    }

    #[test]
    fn test_centered_placement() {
        let p = BarPlacement::centered();
        assert_eq!(p.anchor, Anchor::Static);
        assert_eq!(p.align, Align::Center);
        assert_eq!(p.top, None);
    }

    #[test]
    fn test_bar_side_element() {
        assert_eq!(BarSide::Left.element(), Element::LeftBars);
        assert_eq!(BarSide::Right.element().id(), "right-bars");
    }
}
