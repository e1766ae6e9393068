#![forbid(unsafe_code)]

//! Decorative page layers. Each installs its own listeners and shares no
//! state with the dial.

pub mod ambient;
pub mod arrow;
pub mod fullscreen;
pub mod scenes;
