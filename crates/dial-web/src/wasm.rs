#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use dial_core::{DialConfig, DialController, DialInput, load_episodes};
use thiserror::Error;
use tracing::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, TouchEvent, Window};

use crate::decor;
use crate::dom::{self, DomCue, DomView, Listener, PageParts};
use crate::input::DialInputJson;
use crate::setup::{self, Layer, PageHost};
use crate::source::ModuleSource;
use crate::telemetry;

type SharedDial = Rc<RefCell<DialController<DomView, DomCue>>>;

const TOUCH_AREA_CSS: &str = "position:absolute;width:225px;height:150px;left:50%;top:50%;\
transform:translate(-50%, -50%);z-index:10;";

#[derive(Debug, Error)]
enum PageError {
    #[error("no global `window`")]
    MissingWindow,
    #[error("no `document` on window")]
    MissingDocument,
    #[error(transparent)]
    Config(#[from] dial_core::ConfigError),
    #[error("invalid input event: {0}")]
    Input(#[from] serde_json::Error),
    #[error("non-finite touch coordinates")]
    NonFinite,
    #[error("page not initialized")]
    NotInitialized,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// The episode dial page.
///
/// JS usage:
///
/// ```js
/// const page = new DialPage();
/// page.init({ content_url: "./data/generatedEpisodes.js" });
/// ```
///
/// `init` wires the DOM, renders the placeholder, and starts the episode
/// import in the background. The dial responds to input immediately.
#[wasm_bindgen]
pub struct DialPage {
    dial: Option<SharedDial>,
    parts: PageParts,
    initialized: bool,
}

impl Default for DialPage {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DialPage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            dial: None,
            parts: PageParts::default(),
            initialized: false,
        }
    }

    /// Wire the page. `options` is a plain object in the `DialConfig` shape;
    /// missing fields use defaults.
    ///
    /// Fails only for invalid options or a missing window/document. Any other
    /// DOM problem disables the piece that needed it.
    pub fn init(&mut self, options: Option<JsValue>) -> Result<(), JsValue> {
        if self.initialized {
            return Ok(());
        }
        let config = parse_options(options)?;
        telemetry::init(telemetry::parse_level(&config.log_level));

        let window = web_sys::window().ok_or(PageError::MissingWindow)?;
        let document = window.document().ok_or(PageError::MissingDocument)?;

        let dial_el = dom::by_id(&document, "dial");
        let label = dial_el
            .as_ref()
            .and_then(|dial_el| match append_label(&document, dial_el) {
                Ok(label) => {
                    self.parts.push_element(label.clone());
                    Some(label)
                }
                Err(err) => {
                    debug!(error = %err, "dial label unavailable");
                    None
                }
            });
        let view = DomView::new(label, dom::by_id(&document, "episode"));
        let cue = DomCue::new(dom::audio_by_id(&document, "dialCue"));
        let dial: SharedDial = Rc::new(RefCell::new(DialController::with_cue(&config, view, cue)));
        dial.borrow_mut().render();
        self.dial = Some(Rc::clone(&dial));
        self.initialized = true;

        let mut host = WebHost {
            window: &window,
            document: &document,
            config: &config,
            dial_el: dial_el.as_ref(),
            dial: &dial,
        };
        let report = setup::bring_up(&mut host, &mut self.parts);
        info!(
            listeners = self.parts.listener_count(),
            elements = self.parts.element_count(),
            dial_wired = report.dial_wired,
            skipped = report.skipped.len(),
            "dial page initialized"
        );
        Ok(())
    }

    /// Push one host-driven input event (`DialInputJson`). Returns whether the
    /// dial moved.
    pub fn input(&mut self, event: &str) -> Result<bool, JsValue> {
        let dial = self.dial.as_ref().ok_or(PageError::NotInitialized)?;
        let parsed = DialInputJson::from_json_str(event).map_err(PageError::from)?;
        if !parsed.is_finite() {
            return Err(PageError::NonFinite.into());
        }
        Ok(dial.borrow_mut().handle(parsed.into()).is_some())
    }

    /// Current dial position.
    pub fn current(&self) -> u32 {
        self.dial.as_ref().map_or(0, |dial| dial.borrow().current())
    }

    /// Highest reachable position.
    #[wasm_bindgen(js_name = maxIndex)]
    pub fn max_index(&self) -> u32 {
        self.dial.as_ref().map_or(0, |dial| dial.borrow().max_index())
    }

    /// Whether the episode import has finished (successfully or not).
    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.dial.as_ref().is_some_and(|dial| dial.borrow().is_loaded())
    }

    /// Detach every listener, remove the nodes `init` inserted, and drop the
    /// controller. A load still in flight completes into nothing.
    pub fn destroy(&mut self) {
        self.parts.teardown();
        self.dial = None;
        self.initialized = false;
    }
}

/// Browser side of the bring-up sequence.
struct WebHost<'a> {
    window: &'a Window,
    document: &'a Document,
    config: &'a DialConfig,
    dial_el: Option<&'a Element>,
    dial: &'a SharedDial,
}

impl PageHost for WebHost<'_> {
    type Listener = Listener;
    type Element = Element;
    type Error = PageError;

    fn mount_dial(&mut self) -> Result<PageParts, PageError> {
        match self.dial_el {
            Some(dial_el) => Ok(wire_dial(self.document, dial_el, self.dial)?),
            None => Ok(PageParts::default()),
        }
    }

    fn spawn_loader(&mut self) {
        spawn_loader(self.document, self.config, Rc::downgrade(self.dial));
    }

    fn install_layer(&mut self, layer: Layer) -> Result<PageParts, PageError> {
        let parts = match layer {
            Layer::Arrow => match self.dial_el {
                Some(dial_el) => {
                    PageParts::from_listeners(decor::arrow::install(self.document, dial_el)?)
                }
                None => PageParts::default(),
            },
            Layer::Fullscreen => {
                decor::fullscreen::install(self.window, self.document, self.config)?
            }
            Layer::Scenes => PageParts::from_listeners(decor::scenes::install(self.document)?),
            Layer::Ambient => PageParts::from_listeners(decor::ambient::install(
                self.window,
                self.document,
                self.config,
            )?),
        };
        Ok(parts)
    }
}

fn parse_options(options: Option<JsValue>) -> Result<DialConfig, PageError> {
    let Some(options) = options.filter(|v| !v.is_undefined() && !v.is_null()) else {
        return Ok(DialConfig::default());
    };
    let json = match options.as_string() {
        Some(json) => json,
        None => js_sys::JSON::stringify(&options)?
            .as_string()
            .unwrap_or_else(|| "{}".to_owned()),
    };
    Ok(DialConfig::from_json_str(&json)?)
}

fn append_label(document: &Document, dial_el: &Element) -> Result<Element, PageError> {
    let text = document.create_element("span")?;
    text.set_id("dial-text");
    dial_el.append_child(&text)?;
    Ok(text)
}

fn wire_dial(
    document: &Document,
    dial_el: &Element,
    dial: &SharedDial,
) -> Result<PageParts, JsValue> {
    let mut parts = PageParts::default();
    let touch_area = document.create_element("div")?;
    touch_area.set_attribute("style", TOUCH_AREA_CSS)?;
    dial_el.append_child(&touch_area)?;
    parts.push_element(touch_area.clone());

    let on_click = Rc::clone(dial);
    parts.push_listener(Listener::attach(dial_el, "click", move |_| {
        on_click.borrow_mut().handle(DialInput::Activate);
    })?);

    let on_start = Rc::clone(dial);
    parts.push_listener(Listener::attach(&touch_area, "touchstart", move |event| {
        if let Some((x, y)) = first_touch(&event) {
            on_start.borrow_mut().handle(DialInput::TouchStart { x, y });
        }
        event.prevent_default();
    })?);

    let on_move = Rc::clone(dial);
    parts.push_listener(Listener::attach(&touch_area, "touchmove", move |event| {
        if let Some((x, y)) = first_touch(&event) {
            on_move.borrow_mut().handle(DialInput::TouchMove { x, y });
        }
        event.prevent_default();
    })?);

    for kind in ["touchend", "touchcancel"] {
        let on_end = Rc::clone(dial);
        parts.push_listener(Listener::attach(&touch_area, kind, move |_| {
            on_end.borrow_mut().handle(DialInput::TouchEnd);
        })?);
    }

    Ok(parts)
}

fn first_touch(event: &web_sys::Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn spawn_loader(
    document: &Document,
    config: &DialConfig,
    dial: Weak<RefCell<DialController<DomView, DomCue>>>,
) {
    let base_uri = document.base_uri().ok().flatten();
    let source = ModuleSource::new(base_uri.as_deref(), &config.content_url, &config.export_name);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = load_episodes(&source, cache_bust_token()).await;
        match dial.upgrade() {
            Some(dial) => dial.borrow_mut().apply_outcome(&outcome),
            None => debug!("page destroyed before episodes arrived"),
        }
        if outcome.is_degraded() {
            warn!("episode content unavailable for this session");
        }
    });
}

fn cache_bust_token() -> String {
    js_sys::Math::random().to_string()
}
