#![forbid(unsafe_code)]

//! Page configuration, supplied by the host as a JSON object.
//!
//! Every field is optional; missing fields take the defaults below.

use serde::Deserialize;

use crate::dial::{DEFAULT_MAX_INDEX, RebindPolicy};
use crate::episodes::LOADING_PLACEHOLDER;
use crate::error::ConfigError;
use crate::gesture::DEFAULT_SWIPE_THRESHOLD;

pub const DEFAULT_CONTENT_URL: &str = "./data/generatedEpisodes.js";
pub const DEFAULT_EXPORT_NAME: &str = "episodes";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Bound used until the episode list arrives.
    pub default_max_index: u32,
    /// Horizontal pixels a drag must exceed to register one step.
    pub swipe_threshold: f64,
    /// Content shown while the list is empty.
    pub placeholder: String,
    /// ES module holding the episode export.
    pub content_url: String,
    /// Name of the array export inside `content_url`.
    pub export_name: String,
    pub rebind: RebindPolicy,
    /// Play the dial click cue on every transition.
    pub cue_enabled: bool,
    /// Ambient audio fade length.
    pub fade_ms: u32,
    pub fade_tick_ms: u32,
    /// Delay before checking whether the landscape CSS fallback is needed.
    pub rotation_delay_ms: u32,
    /// Max `tracing` level forwarded to the console.
    pub log_level: String,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            default_max_index: DEFAULT_MAX_INDEX,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            placeholder: LOADING_PLACEHOLDER.to_owned(),
            content_url: DEFAULT_CONTENT_URL.to_owned(),
            export_name: DEFAULT_EXPORT_NAME.to_owned(),
            rebind: RebindPolicy::Clamp,
            cue_enabled: true,
            fade_ms: 1200,
            fade_tick_ms: 50,
            rotation_delay_ms: 300,
            log_level: "info".to_owned(),
        }
    }
}

impl DialConfig {
    /// Parse and validate a JSON options object.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::Invalid {
                field: "swipe_threshold",
                reason: "must be a positive number",
            });
        }
        if self.fade_tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "fade_tick_ms",
                reason: "must be non-zero",
            });
        }
        if self.export_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "export_name",
                reason: "must not be empty",
            });
        }
        if self.content_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "content_url",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
