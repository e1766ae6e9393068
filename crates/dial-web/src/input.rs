#![forbid(unsafe_code)]

//! JSON input schema for host-driven dial input.
//!
//! Besides the DOM listeners installed by the page, a host can push input
//! directly (`DialPage::input`) using a small `kind`-tagged object. The same
//! encoding is suitable for recording and replaying a session.
//!
//! Coordinates are CSS pixels relative to the viewport (`clientX`/`clientY`).

use dial_core::DialInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DialInputJson {
    Activate,
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd,
}

impl DialInputJson {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Reject coordinates the swipe tracker cannot compare.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::TouchStart { x, y } | Self::TouchMove { x, y } => x.is_finite() && y.is_finite(),
            Self::Activate | Self::TouchEnd => true,
        }
    }
}

impl From<DialInputJson> for DialInput {
    fn from(json: DialInputJson) -> Self {
        match json {
            DialInputJson::Activate => Self::Activate,
            DialInputJson::TouchStart { x, y } => Self::TouchStart { x, y },
            DialInputJson::TouchMove { x, y } => Self::TouchMove { x, y },
            DialInputJson::TouchEnd => Self::TouchEnd,
        }
    }
}

impl From<DialInput> for DialInputJson {
    fn from(input: DialInput) -> Self {
        match input {
            DialInput::Activate => Self::Activate,
            DialInput::TouchStart { x, y } => Self::TouchStart { x, y },
            DialInput::TouchMove { x, y } => Self::TouchMove { x, y },
            DialInput::TouchEnd => Self::TouchEnd,
        }
    }
}
