//! Recording doubles for the presenter and audio traits (tests only).

use std::collections::{HashMap, HashSet};

use crate::audio::{AudioSink, Cue};
use crate::colors::Paint;
use crate::presenter::{BarPlacement, Element, Filter, Flag, Presenter, SurfaceError, Transform};

/// Presenter that remembers the last value written to each element.
#[derive(Default)]
pub struct RecordingPresenter {
    pub colors: HashMap<Element, Paint>,
    pub filters: HashMap<Element, Filter>,
    pub opacity: HashMap<Element, f32>,
    pub text: HashMap<Element, String>,
    pub transforms: HashMap<Element, Transform>,
    pub flags: HashSet<(Element, Flag)>,
    pub visible: HashMap<Element, bool>,
    pub placements: HashMap<Element, BarPlacement>,
    /// Successful writes per element.
    pub writes: HashMap<Element, usize>,
    missing: HashSet<Element>,
}

impl RecordingPresenter {
    /// Make `element` absent from the surface.
    pub fn remove(
        &mut self,
        element: Element,
    ) {
        self.missing.insert(element);
    }

    pub fn has_flag(
        &self,
        element: Element,
        flag: Flag,
    ) -> bool {
        self.flags.contains(&(element, flag))
    }

    pub fn text_of(
        &self,
        element: Element,
    ) -> Option<&str> {
        self.text.get(&element).map(String::as_str)
    }

    pub fn writes_to(
        &self,
        element: Element,
    ) -> usize {
        self.writes.get(&element).copied().unwrap_or(0)
    }

    fn touch(
        &mut self,
        element: Element,
    ) -> Result<(), SurfaceError> {
        if self.missing.contains(&element) {
            return Err(SurfaceError::Missing(element));
        }
        *self.writes.entry(element).or_default() += 1;
        Ok(())
    }
}

impl Presenter for RecordingPresenter {
    type Error = SurfaceError;

    fn set_color(
        &mut self,
        element: Element,
        paint: Paint,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.colors.insert(element, paint);
        Ok(())
    }

    fn set_filter(
        &mut self,
        element: Element,
        filter: Filter,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.filters.insert(element, filter);
        Ok(())
    }

    fn set_opacity(
        &mut self,
        element: Element,
        opacity: f32,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.opacity.insert(element, opacity);
        Ok(())
    }

    fn set_text(
        &mut self,
        element: Element,
        text: &str,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.text.insert(element, text.to_string());
        Ok(())
    }

    fn set_transform(
        &mut self,
        element: Element,
        transform: Transform,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.transforms.insert(element, transform);
        Ok(())
    }

    fn set_flag(
        &mut self,
        element: Element,
        flag: Flag,
        on: bool,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        if on {
            self.flags.insert((element, flag));
        } else {
            self.flags.remove(&(element, flag));
        }
        Ok(())
    }

    fn set_visible(
        &mut self,
        element: Element,
        visible: bool,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.visible.insert(element, visible);
        Ok(())
    }

    fn set_placement(
        &mut self,
        element: Element,
        placement: BarPlacement,
    ) -> Result<(), Self::Error> {
        self.touch(element)?;
        self.placements.insert(element, placement);
        Ok(())
    }
}

/// Why a blocked cue refused to play.
#[derive(Debug, PartialEq, Eq)]
pub struct Blocked;

/// Audio sink that records every play and stop.
#[derive(Default)]
pub struct RecordingAudio {
    playing: HashSet<Cue>,
    blocked: HashSet<Cue>,
    /// Every successful `play`, in order.
    pub played: Vec<Cue>,
    /// Every `stop`, in order.
    pub stopped: Vec<Cue>,
}

impl RecordingAudio {
    /// Make `play(cue)` fail from now on.
    pub fn block(
        &mut self,
        cue: Cue,
    ) {
        self.blocked.insert(cue);
    }

    pub fn play_count(
        &self,
        cue: Cue,
    ) -> usize {
        self.played.iter().filter(|c| **c == cue).count()
    }

    pub fn stop_count(
        &self,
        cue: Cue,
    ) -> usize {
        self.stopped.iter().filter(|c| **c == cue).count()
    }

    /// One-shot cues played so far, in order.
    pub fn one_shots(&self) -> Vec<Cue> { self.played.iter().copied().filter(|c| !c.is_looping()).collect() }
}

impl AudioSink for RecordingAudio {
    type Error = Blocked;

    fn play(
        &mut self,
        cue: Cue,
    ) -> Result<(), Self::Error> {
        if self.blocked.contains(&cue) {
            return Err(Blocked);
        }
        self.played.push(cue);
        if cue.is_looping() {
            self.playing.insert(cue);
        }
        Ok(())
    }

    fn stop(
        &mut self,
        cue: Cue,
    ) {
        self.stopped.push(cue);
        self.playing.remove(&cue);
    }

    fn is_playing(
        &self,
        cue: Cue,
    ) -> bool {
        self.playing.contains(&cue)
    }
}
