#![forbid(unsafe_code)]

//! WASM frontend for the episode dial page.
//!
//! This crate is host-specific (web/WASM). It exposes a `wasm-bindgen` API
//! surface ([`DialPage`]) that:
//! - binds the dial controller from `dial-core` to the page's DOM,
//! - imports the episode module with a cache-busting first attempt,
//! - installs the decorative layers (fullscreen overlay, scenes, instruction
//!   arrow, ambient audio),
//! - routes `tracing` output to the browser console.
//!
//! The JSON input schema, the bring-up sequence, and level parsing are
//! target-independent so they can be tested natively.

pub mod input;
pub mod setup;
pub mod telemetry;

#[cfg(target_arch = "wasm32")]
mod decor;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod source;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::DialPage;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct DialPage;

#[cfg(not(target_arch = "wasm32"))]
impl DialPage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}
