#![forbid(unsafe_code)]

//! Scene switching by class toggle, plus the keypad overlay.

use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{self, Listener};

const ACTIVE: &str = "active";

pub fn install(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for link in dom::query_all(document, ".new-page-link") {
        let document = document.clone();
        let link_handle = link.clone();
        listeners.push(Listener::attach(&link, "click", move |event| {
            event.prevent_default();
            let Some(target) = link_handle
                .get_attribute("data-scene")
                .filter(|id| !id.is_empty())
            else {
                return;
            };
            show_scene(&document, &target);
        })?);
    }

    if let (Some(button), Some(overlay)) = (
        dom::by_id(document, "keypadBtn"),
        dom::by_id(document, "keypadOverlay"),
    ) {
        let open = overlay.clone();
        listeners.push(Listener::attach(&button, "click", move |_| {
            let _ = open.class_list().add_1(ACTIVE);
        })?);
        let close = overlay.clone();
        listeners.push(Listener::attach(&overlay, "click", move |_| {
            let _ = close.class_list().remove_1(ACTIVE);
        })?);
    }

    Ok(listeners)
}

fn show_scene(document: &Document, id: &str) {
    let Some(next) = dom::by_id(document, id) else {
        return;
    };
    for scene in dom::query_all(document, ".scene") {
        let _ = scene.class_list().remove_1(ACTIVE);
    }
    let _ = next.class_list().add_1(ACTIVE);
    debug!(scene = id, "scene switched");
}
