//! Audio status line along the bottom edge.
//!
//! ```text
//! SND TICK ALARM BELT > FUEL50                      +2 [MUTE]
//! ```
//!
//! Running loops, then the one-shot still sounding, then the number of
//! replayed warnings waiting and whether playback is blocked.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::Text,
};
use embedded_graphics_simulator::SimulatorDisplay;
use heapless::String;
use vehicle_hud::{
    colors::{GRAY, RED},
    config::{SCREEN_WIDTH, STATUS_Y},
};

use crate::{
    sim_audio::SimAudio,
    styles::{LABEL_FONT, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED},
};

const DIVIDER_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 1);
const DIVIDER_START: Point = Point::new(0, STATUS_Y - 11);
const DIVIDER_END: Point = Point::new((SCREEN_WIDTH - 1) as i32, STATUS_Y - 11);
const TEXT_POS: Point = Point::new(4, STATUS_Y);
const RIGHT_POS: Point = Point::new((SCREEN_WIDTH - 4) as i32, STATUS_Y);

/// Left half of the status line.
pub fn playing_text(audio: &SimAudio) -> String<48> {
    let mut s: String<48> = String::new();
    let _ = s.push_str("SND");
    let mut any = false;
    for cue in audio.loops() {
        let _ = write!(s, " {}", cue.label());
        any = true;
    }
    if let Some(cue) = audio.recent_one_shot() {
        let _ = write!(s, " > {}", cue.label());
        any = true;
    }
    if !any {
        let _ = s.push_str(" -");
    }
    s
}

pub fn draw_status(
    display: &mut SimulatorDisplay<Rgb565>,
    audio: &SimAudio,
    pending_cues: usize,
) {
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(DIVIDER_STYLE)
        .draw(display)
        .ok();

    Text::with_text_style(&playing_text(audio), TEXT_POS, LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    let mut right: String<16> = String::new();
    if pending_cues > 0 {
        let _ = write!(right, "+{pending_cues}");
    }
    if audio.is_blocked() {
        let _ = right.push_str(" [MUTE]");
    }
    let color = if audio.is_blocked() { RED } else { GRAY };
    Text::with_text_style(&right, RIGHT_POS, MonoTextStyle::new(LABEL_FONT, color), RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use vehicle_hud::audio::{AudioSink, Cue};

    use super::*;

    #[test]
    fn test_idle_status() {
        assert_eq!(playing_text(&SimAudio::new()).as_str(), "SND -");
    }

    #[test]
    fn test_loops_and_one_shot() {
        let mut audio = SimAudio::new();
        audio.play(Cue::Tick).ok();
        audio.play(Cue::EngineWarn1).ok();
        assert_eq!(playing_text(&audio).as_str(), "SND TICK > ENG50");
    }
}
