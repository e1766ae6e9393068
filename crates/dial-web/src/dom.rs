#![forbid(unsafe_code)]

//! DOM helpers shared by the page and the decorative layers.
//!
//! Every lookup returns `Option`: a missing element turns the integration that
//! needed it into a no-op instead of failing the page.

use dial_core::{CueError, CueSink, DialView};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlAudioElement, HtmlElement};

use crate::setup::{Detach, Mounted};

/// Listeners and inserted elements owned by a page or one of its layers.
pub type PageParts = Mounted<Listener, Element>;

/// An attached event listener. Detaches itself on drop.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

impl Detach for Element {
    fn detach(&self) {
        self.remove();
    }
}

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        debug!(id, "element not found, skipping");
    }
    found
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

pub fn set_style(element: &Element, name: &str, value: &str) {
    if let Some(el) = html(element) {
        let _ = el.style().set_property(name, value);
    }
}

pub fn clear_style(element: &Element, name: &str) {
    if let Some(el) = html(element) {
        let _ = el.style().remove_property(name);
    }
}

pub fn audio_by_id(document: &Document, id: &str) -> Option<HtmlAudioElement> {
    by_id(document, id)?.dyn_into::<HtmlAudioElement>().ok()
}

/// Start playback, swallowing autoplay rejections.
pub fn play_quietly(audio: &HtmlAudioElement) -> Result<(), CueError> {
    let promise = audio
        .play()
        .map_err(|err| CueError(js_error_message(&err)))?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            debug!(error = %js_error_message(&err), "audio playback rejected");
        }
    });
    Ok(())
}

/// Best-effort human-readable text for a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.to_string());
    }
    format!("{value:?}")
}

/// Dial label and content targets.
pub struct DomView {
    label: Option<Element>,
    content: Option<Element>,
}

impl DomView {
    #[must_use]
    pub fn new(label: Option<Element>, content: Option<Element>) -> Self {
        Self { label, content }
    }
}

impl DialView for DomView {
    fn set_label(&mut self, label: &str) {
        if let Some(el) = &self.label {
            el.set_text_content(Some(label));
        }
    }

    fn set_content(&mut self, html: &str) {
        if let Some(el) = &self.content {
            el.set_inner_html(html);
        }
    }
}

/// Click cue played from the start on each dial transition.
pub struct DomCue {
    audio: Option<HtmlAudioElement>,
}

impl DomCue {
    #[must_use]
    pub fn new(audio: Option<HtmlAudioElement>) -> Self {
        Self { audio }
    }
}

impl CueSink for DomCue {
    fn play(&mut self) -> Result<(), CueError> {
        let Some(audio) = &self.audio else {
            return Ok(());
        };
        audio.set_current_time(0.0);
        play_quietly(audio)
    }
}
