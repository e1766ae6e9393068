#![forbid(unsafe_code)]

//! Episode source backed by a dynamic ES module import.

use dial_core::{EpisodeSource, LoadError, Retrieval};
use js_sys::{Array, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

use crate::dom::js_error_message;

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<Promise, JsValue>;
}

/// Imports `content_url` and reads the array export `export_name`.
pub struct ModuleSource {
    content_url: String,
    export_name: String,
}

impl ModuleSource {
    /// `content_url` is resolved against `base_uri` so relative paths refer to
    /// the page rather than the generated glue module.
    #[must_use]
    pub fn new(base_uri: Option<&str>, content_url: &str, export_name: &str) -> Self {
        let content_url = base_uri
            .and_then(|base| Url::new_with_base(content_url, base).ok())
            .map(|url| url.href())
            .unwrap_or_else(|| content_url.to_owned());
        Self {
            content_url,
            export_name: export_name.to_owned(),
        }
    }
}

impl EpisodeSource for ModuleSource {
    async fn fetch(&self, retrieval: &Retrieval) -> Result<Vec<String>, LoadError> {
        let url = retrieval.url(&self.content_url);
        let import_failed = |err: JsValue| LoadError::Import {
            url: url.clone(),
            reason: js_error_message(&err),
        };

        let promise = import_module(&url).map_err(import_failed)?;
        let module = JsFuture::from(promise).await.map_err(import_failed)?;

        let export = Reflect::get(&module, &JsValue::from_str(&self.export_name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or_else(|| LoadError::MissingExport {
                url: url.clone(),
                export: self.export_name.clone(),
            })?;

        decode_episodes(&export)
    }
}

fn decode_episodes(export: &JsValue) -> Result<Vec<String>, LoadError> {
    if !Array::is_array(export) {
        return Err(LoadError::Decode("export is not an array".into()));
    }
    Array::from(export)
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_string()
                .ok_or_else(|| LoadError::Decode(format!("entry {i} is not a string")))
        })
        .collect()
}
