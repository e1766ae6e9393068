#![forbid(unsafe_code)]

//! Host-agnostic core of the episode dial page.
//!
//! - [`dial`]: the bounded circular counter and its label.
//! - [`gesture`]: threshold-gated swipe steps.
//! - [`episodes`]: the loaded content list and placeholder lookup.
//! - [`loader`]: fresh-then-cached retrieval returning a [`loader::LoadOutcome`].
//! - [`controller`]: ties the above together behind a [`controller::DialView`].
//! - [`decor`]: pure helpers for the decorative layers (rotation fallback,
//!   volume fades, the instruction arrow).
//!
//! Nothing here touches the DOM; `dial-web` supplies the host bindings.

pub mod config;
pub mod controller;
pub mod decor;
pub mod dial;
pub mod episodes;
pub mod error;
pub mod gesture;
pub mod loader;
pub(crate) mod logging;

pub use config::DialConfig;
pub use controller::{CueSink, DialController, DialInput, DialView, NoCue};
pub use dial::{DialState, RebindPolicy, Step, render_label};
pub use episodes::{EpisodeList, LOADING_PLACEHOLDER};
pub use error::{ConfigError, CueError, LoadError};
pub use loader::{EpisodeSource, LoadOutcome, Retrieval, load_episodes};
