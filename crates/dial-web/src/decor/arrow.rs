#![forbid(unsafe_code)]

//! Swipe instruction arrow, hidden after the first touch.

use dial_core::decor::arrow::swipe_arrow_svg;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget};

use crate::dom::{self, Listener};

const ARROW_WIDTH: u32 = 120;
const ARROW_HEIGHT: u32 = 60;

/// Draw the arrow and hide it on the first touch-start on `surface`.
pub fn install(document: &Document, surface: &EventTarget) -> Result<Vec<Listener>, JsValue> {
    let Some(arrow) = dom::query(document, ".instruction-arrow") else {
        return Ok(Vec::new());
    };
    arrow.set_inner_html(&swipe_arrow_svg(ARROW_WIDTH, ARROW_HEIGHT));

    let hide = Listener::attach(surface, "touchstart", move |_| {
        dom::set_style(&arrow, "display", "none");
    })?;
    Ok(vec![hide])
}
