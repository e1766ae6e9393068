#![forbid(unsafe_code)]

//! Pure pieces of the decorative page layers.
//!
//! These carry no dial state. The web crate drives them from its own
//! listeners.

pub mod arrow;
pub mod fade;
pub mod orientation;
