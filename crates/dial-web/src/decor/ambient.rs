#![forbid(unsafe_code)]

//! Ambient track with fade-in/fade-out driven by the sound button pair.

use std::cell::Cell;
use std::rc::Rc;

use dial_core::DialConfig;
use dial_core::decor::fade::FadeRamp;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement, Window};

use crate::dom::{self, Listener};

#[derive(Clone)]
struct Fader {
    window: Window,
    audio: HtmlAudioElement,
    /// Bumped on every new fade; stale tick chains stop when they see a newer
    /// value.
    generation: Rc<Cell<u64>>,
    fade_ms: u32,
    tick_ms: u32,
}

impl Fader {
    fn fade_to(&self, target: f64) {
        let token = self.generation.get().wrapping_add(1);
        self.generation.set(token);

        if target > 0.0 {
            self.audio.set_loop(true);
            if let Err(err) = dom::play_quietly(&self.audio) {
                debug!(error = %err, "ambient playback refused");
                return;
            }
        }
        let ramp = FadeRamp::new(self.audio.volume(), target, self.fade_ms, self.tick_ms);
        self.schedule(ramp, token);
    }

    fn schedule(&self, mut ramp: FadeRamp, token: u64) {
        let fader = self.clone();
        let tick = Closure::once_into_js(move || {
            if fader.generation.get() != token {
                return;
            }
            let Some(volume) = ramp.next() else {
                return;
            };
            fader.audio.set_volume(volume);
            if !ramp.is_done() {
                fader.schedule(ramp, token);
            } else if volume == 0.0 {
                let _ = fader.audio.pause();
            }
        });
        let delay = i32::try_from(self.tick_ms).unwrap_or(i32::MAX);
        let _ = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(tick.unchecked_ref(), delay);
    }
}

pub fn install(
    window: &Window,
    document: &Document,
    config: &DialConfig,
) -> Result<Vec<Listener>, JsValue> {
    let Some(audio) = dom::audio_by_id(document, "ambient") else {
        return Ok(Vec::new());
    };
    audio.set_volume(0.0);
    let fader = Fader {
        window: window.clone(),
        audio,
        generation: Rc::new(Cell::new(0)),
        fade_ms: config.fade_ms,
        tick_ms: config.fade_tick_ms,
    };

    let mut listeners = Vec::with_capacity(2);
    if let Some(on) = dom::by_id(document, "soundOn") {
        let fader = fader.clone();
        listeners.push(Listener::attach(&on, "click", move |_| fader.fade_to(1.0))?);
    }
    if let Some(off) = dom::by_id(document, "soundOff") {
        let fader = fader.clone();
        listeners.push(Listener::attach(&off, "click", move |_| fader.fade_to(0.0))?);
    }
    Ok(listeners)
}
