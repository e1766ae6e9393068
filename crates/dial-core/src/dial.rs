#![forbid(unsafe_code)]

//! Bounded circular counter backing the dial.
//!
//! [`DialState`] holds the current episode index and the highest valid index.
//! All mutation goes through methods that wrap modulo `max_index + 1`, so
//! `current <= max_index` holds after every call.

use serde::Deserialize;

/// Bound used until the episode list has loaded.
pub const DEFAULT_MAX_INDEX: u32 = 192;

/// Direction of a single dial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Forward,
    Backward,
}

impl Step {
    /// Step matching the sign of a horizontal displacement.
    #[must_use]
    pub fn from_delta(dx: f64) -> Self {
        if dx > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    #[must_use]
    pub const fn signum(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// What to do with `current` when a smaller bound arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebindPolicy {
    /// Pull `current` down to the new bound.
    #[default]
    Clamp,
    /// Leave `current` as is, even past the new bound.
    Keep,
}

/// Current dial position and its inclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialState {
    current: u32,
    max_index: u32,
}

impl Default for DialState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INDEX)
    }
}

impl DialState {
    /// Start at index 0 with the given bound.
    #[must_use]
    pub const fn new(max_index: u32) -> Self {
        Self {
            current: 0,
            max_index,
        }
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn max_index(&self) -> u32 {
        self.max_index
    }

    /// Number of positions on the dial (`max_index + 1`).
    #[must_use]
    pub const fn span(&self) -> u64 {
        self.max_index as u64 + 1
    }

    /// Advance by one, wrapping from `max_index` back to 0.
    pub fn increment(&mut self) -> u32 {
        self.apply(Step::Forward)
    }

    /// Move one position in `step`'s direction with wraparound in both
    /// directions.
    pub fn apply(&mut self, step: Step) -> u32 {
        let span = self.span() as i64;
        // `current` may sit past the bound under `RebindPolicy::Keep`; the
        // Euclidean remainder brings it back into range on the next step.
        let next = (i64::from(self.current) + step.signum()).rem_euclid(span);
        self.current = next as u32;
        self.current
    }

    /// Replace the bound. Returns the resulting `current`.
    pub fn rebind(&mut self, max_index: u32, policy: RebindPolicy) -> u32 {
        self.max_index = max_index;
        if policy == RebindPolicy::Clamp && self.current > max_index {
            self.current = max_index;
        }
        self.current
    }

    /// Whether `current` is inside `[0, max_index]`.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.current <= self.max_index
    }
}

/// Zero-padded three-digit label for a dial position.
///
/// Values of 1000 and above are rendered unpadded.
#[must_use]
pub fn render_label(n: u32) -> String {
    format!("{n:03}")
}
