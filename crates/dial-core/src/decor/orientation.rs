#![forbid(unsafe_code)]

//! Landscape fallback for browsers that refuse `screen.orientation.lock`.
//!
//! When the viewport is still portrait after entering fullscreen, the body is
//! rotated 90 degrees counter-clockwise and resized so the page lays out as if
//! the device were held sideways.

/// Inline style properties touched by the rotation. Clearing all of them
/// restores the body.
pub const ROTATION_PROPERTIES: [&str; 8] = [
    "transform",
    "transform-origin",
    "width",
    "height",
    "position",
    "top",
    "left",
    "overflow",
];

/// Fullscreen entry points in order of preference. Older WebKit (iOS and
/// iPadOS Safari) and legacy Edge only expose the prefixed names.
pub const FULLSCREEN_METHODS: [&str; 3] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "msRequestFullscreen",
];

/// First entry of [`FULLSCREEN_METHODS`] the element exposes.
#[must_use]
pub fn fullscreen_method(mut supported: impl FnMut(&str) -> bool) -> Option<&'static str> {
    FULLSCREEN_METHODS.into_iter().find(|name| supported(name))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Style to apply to `<body>`, or `None` when already landscape.
#[must_use]
pub fn landscape_rotation(viewport: Viewport) -> Option<Vec<(&'static str, String)>> {
    if !viewport.is_portrait() {
        return None;
    }
    let Viewport { width, height } = viewport;
    Some(vec![
        ("transform", "rotate(-90deg)".to_owned()),
        ("transform-origin", "top left".to_owned()),
        ("width", format!("{height}px")),
        ("height", format!("{width}px")),
        ("position", "absolute".to_owned()),
        ("top", format!("{height}px")),
        ("left", "0".to_owned()),
        ("overflow", "hidden".to_owned()),
    ])
}

/// Whether a `screen.orientation.type` value is a landscape variant.
#[must_use]
pub fn is_landscape_type(orientation_type: &str) -> bool {
    orientation_type.starts_with("landscape")
}
