#![forbid(unsafe_code)]

//! Tap-to-fullscreen overlay with forced landscape on touch devices.

use dial_core::DialConfig;
use dial_core::decor::orientation::{
    ROTATION_PROPERTIES, Viewport, fullscreen_method, is_landscape_type, landscape_rotation,
};
use js_sys::{Function, Promise, Reflect};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, OrientationLockType, ScreenOrientation, Window};

use crate::dom::{self, Listener, PageParts};

const OVERLAY_CSS: &str = "position:fixed;inset:0;z-index:9999;background:rgba(0,0,0,0.85);\
display:flex;align-items:center;justify-content:center;cursor:pointer;";
const OVERLAY_HTML: &str = "<div style=\"color:#4bb8e9;font-family:Quicksand,sans-serif;\
font-size:clamp(1.2rem,4vw,2rem);text-align:center;padding:20px;\">Tap to go fullscreen</div>";

pub fn install(
    window: &Window,
    document: &Document,
    config: &DialConfig,
) -> Result<PageParts, JsValue> {
    let mut parts = PageParts::default();
    if !Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false) {
        debug!("no touch support, fullscreen overlay skipped");
        return Ok(parts);
    }
    let Some(body) = document.body() else {
        return Ok(parts);
    };

    let overlay = document.create_element("div")?;
    overlay.set_attribute("style", OVERLAY_CSS)?;
    overlay.set_inner_html(OVERLAY_HTML);

    let delay_ms = i32::try_from(config.rotation_delay_ms).unwrap_or(i32::MAX);
    {
        let window = window.clone();
        let document = document.clone();
        let overlay_el = overlay.clone();
        parts.push_listener(Listener::attach(&overlay, "click", move |_| {
            enter_fullscreen(&window, &document, delay_ms);
            dom::set_style(&overlay_el, "display", "none");
        })?);
    }

    {
        let document_handle = document.clone();
        let body: Element = body.clone().into();
        let overlay_el = overlay.clone();
        parts.push_listener(Listener::attach(document, "fullscreenchange", move |_| {
            if document_handle.fullscreen_element().is_none() {
                clear_rotation(&body);
                dom::set_style(&overlay_el, "display", "flex");
            }
        })?);
    }

    match screen_orientation(window) {
        Some(orientation) => {
            let body: Element = body.clone().into();
            let orientation_handle = orientation.clone();
            parts.push_listener(Listener::attach(&orientation, "change", move |_| {
                let kind = Reflect::get(&orientation_handle, &JsValue::from_str("type"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                if is_landscape_type(&kind) {
                    clear_rotation(&body);
                }
            })?);
        }
        None => debug!("screen.orientation unavailable, rotation watch skipped"),
    }

    body.append_child(&overlay)?;
    parts.push_element(overlay);
    Ok(parts)
}

/// `screen.orientation`, or `None` on browsers that do not expose it.
fn screen_orientation(window: &Window) -> Option<ScreenOrientation> {
    let screen = window.screen().ok()?;
    let orientation = Reflect::get(&screen, &JsValue::from_str("orientation")).ok()?;
    if orientation.is_undefined() || orientation.is_null() {
        return None;
    }
    orientation.dyn_into::<ScreenOrientation>().ok()
}

fn enter_fullscreen(window: &Window, document: &Document, delay_ms: i32) {
    let Some(root) = document.document_element() else {
        return;
    };
    let method = fullscreen_method(|name| {
        Reflect::get(&root, &JsValue::from_str(name)).is_ok_and(|v| v.is_function())
    });
    let Some(request) = method
        .and_then(|name| Reflect::get(&root, &JsValue::from_str(name)).ok())
        .and_then(|v| v.dyn_into::<Function>().ok())
    else {
        debug!("fullscreen not supported");
        return;
    };

    let returned = match request.call0(&root) {
        Ok(returned) => returned,
        Err(err) => {
            debug!(error = %dom::js_error_message(&err), "fullscreen request refused");
            return;
        }
    };

    // The standard call returns a promise; the prefixed ones return nothing.
    match returned.dyn_into::<Promise>() {
        Ok(promise) => {
            let window = window.clone();
            let document = document.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        lock_landscape(&window);
                        schedule_rotation_check(&window, &document, delay_ms);
                    }
                    Err(err) => {
                        let error = dom::js_error_message(&err);
                        debug!(%error, "fullscreen request rejected");
                    }
                }
            });
        }
        Err(_) => {
            lock_landscape(window);
            schedule_rotation_check(window, document, delay_ms);
        }
    }
}

fn lock_landscape(window: &Window) {
    let Some(orientation) = screen_orientation(window) else {
        return;
    };
    match orientation.lock(OrientationLockType::Landscape) {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                debug!(error = %dom::js_error_message(&err), "orientation lock rejected");
            }
        }),
        Err(err) => debug!(error = %dom::js_error_message(&err), "orientation lock unsupported"),
    }
}

fn schedule_rotation_check(window: &Window, document: &Document, delay_ms: i32) {
    let window_handle = window.clone();
    let document = document.clone();
    let check = Closure::once_into_js(move || {
        let (Some(width), Some(height)) = (
            window_handle.inner_width().ok().and_then(|v| v.as_f64()),
            window_handle.inner_height().ok().and_then(|v| v.as_f64()),
        ) else {
            return;
        };
        let Some(style) = landscape_rotation(Viewport::new(width, height)) else {
            return;
        };
        if let Some(body) = document.body() {
            let body: Element = body.into();
            for (name, value) in &style {
                dom::set_style(&body, name, value);
            }
            debug!(width, height, "applied landscape rotation fallback");
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        check.unchecked_ref(),
        delay_ms,
    );
}

fn clear_rotation(body: &Element) {
    for name in ROTATION_PROPERTIES {
        dom::clear_style(body, name);
    }
}
