//! In-memory presenter for the simulator.
//!
//! [`HudSurface`] keeps the last presentation token written to every
//! [`Element`]. The widgets read it back each frame and draw; the reconciler
//! never touches the display directly.

use heapless::String;
use vehicle_hud::colors::Paint;
use vehicle_hud::presenter::{Align, Anchor, BarPlacement, Element, Filter, Flag, Presenter, SurfaceError, Transform};

/// Longest text an element can hold ("8000", "100%", ...).
pub const TEXT_LEN: usize = 12;

// =============================================================================
// Element View
// =============================================================================

/// Everything the surface knows about one element.
#[derive(Clone, Debug)]
pub struct ElementView {
    pub paint: Paint,
    pub filter: Option<Filter>,
    pub opacity: f32,
    pub text: String<TEXT_LEN>,
    pub transform: Option<Transform>,
    pub visible: bool,
    pub placement: BarPlacement,
    flags: u8,
}

impl ElementView {
    const fn new() -> Self {
        Self {
            paint: Paint::Transparent,
            filter: None,
            opacity: 1.0,
            text: String::new(),
            transform: None,
            visible: true,
            placement: BarPlacement {
                anchor: Anchor::Static,
                top: None,
                right: None,
                bottom: None,
                left: None,
                align: Align::Start,
            },
            flags: 0,
        }
    }

    /// Whether `flag` is set on this element.
    #[inline]
    pub const fn has(
        &self,
        flag: Flag,
    ) -> bool {
        self.flags & flag_bit(flag) != 0
    }
}

#[inline]
const fn flag_bit(flag: Flag) -> u8 { 1 << flag as u8 }

// =============================================================================
// Surface
// =============================================================================

/// Element store implementing [`Presenter`].
pub struct HudSurface {
    views: [ElementView; Element::ALL.len()],
}

impl HudSurface {
    pub const fn new() -> Self { Self { views: [const { ElementView::new() }; Element::ALL.len()] } }

    #[inline]
    pub const fn view(
        &self,
        element: Element,
    ) -> &ElementView {
        &self.views[element.index()]
    }

    #[inline]
    fn view_mut(
        &mut self,
        element: Element,
    ) -> &mut ElementView {
        &mut self.views[element.index()]
    }
}

impl Presenter for HudSurface {
    type Error = SurfaceError;

    fn set_color(
        &mut self,
        element: Element,
        paint: Paint,
    ) -> Result<(), Self::Error> {
        self.view_mut(element).paint = paint;
        Ok(())
    }

    fn set_filter(
        &mut self,
        element: Element,
        filter: Filter,
    ) -> Result<(), Self::Error> {
        self.view_mut(element).filter = Some(filter);
        Ok(())
    }

    fn set_opacity(
        &mut self,
        element: Element,
        opacity: f32,
    ) -> Result<(), Self::Error> {
        self.view_mut(element).opacity = opacity.clamp(0.0, 1.0);
        Ok(())
    }

    fn set_text(
        &mut self,
        element: Element,
        text: &str,
    ) -> Result<(), Self::Error> {
        let view = self.view_mut(element);
        view.text.clear();
        view.text.push_str(text).map_err(|_| SurfaceError::Unsupported(element))
    }

    fn set_transform(
        &mut self,
        element: Element,
        transform: Transform,
    ) -> Result<(), Self::Error> {
        match (element, transform) {
            (Element::HealthBar | Element::FuelBar, Transform::TranslateY(_))
            | (Element::Rpm, Transform::FillWidth(_)) => {
                self.view_mut(element).transform = Some(transform);
                Ok(())
            }
            _ => Err(SurfaceError::Unsupported(element)),
        }
    }

    fn set_flag(
        &mut self,
        element: Element,
        flag: Flag,
        on: bool,
    ) -> Result<(), Self::Error> {
        let view = self.view_mut(element);
        if on {
            view.flags |= flag_bit(flag);
        } else {
            view.flags &= !flag_bit(flag);
        }
        Ok(())
    }

    fn set_visible(
        &mut self,
        element: Element,
        visible: bool,
    ) -> Result<(), Self::Error> {
        self.view_mut(element).visible = visible;
        Ok(())
    }

    fn set_placement(
        &mut self,
        element: Element,
        placement: BarPlacement,
    ) -> Result<(), Self::Error> {
        if !matches!(element, Element::LeftBars | Element::RightBars) {
            return Err(SurfaceError::Unsupported(element));
        }
        self.view_mut(element).placement = placement;
        Ok(())
    }
}
