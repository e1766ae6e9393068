#![forbid(unsafe_code)]

//! Threshold-gated horizontal swipe detection.
//!
//! A drag is discretized into unit steps: each time the pointer has moved more
//! than `threshold` pixels horizontally from the reference point, one
//! [`Step`] fires and the reference point moves to the current position.

use crate::dial::Step;

/// Default horizontal distance, in CSS pixels, that must be exceeded.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    x: f64,
    // Tracked for parity with the touch-start payload; direction ignores it.
    y: f64,
}

/// Per-gesture swipe state.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    threshold: f64,
    anchor: Option<Anchor>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            anchor: None,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }

    /// Reference point of the current gesture, if any.
    #[must_use]
    pub fn anchor(&self) -> Option<(f64, f64)> {
        self.anchor.map(|a| (a.x, a.y))
    }

    /// Begin a gesture at `(x, y)`.
    pub fn start(&mut self, x: f64, y: f64) {
        self.anchor = Some(Anchor { x, y });
    }

    /// Feed a pointer move. Returns a step when the threshold is exceeded.
    pub fn move_to(&mut self, x: f64, _y: f64) -> Option<Step> {
        let anchor = self.anchor.as_mut()?;
        let dx = x - anchor.x;
        if dx.abs() > self.threshold {
            anchor.x = x;
            Some(Step::from_delta(dx))
        } else {
            None
        }
    }

    /// End the gesture; later moves are ignored until the next start.
    pub fn end(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn below_threshold_produces_no_step() {
        let mut swipe = SwipeTracker::default();
        swipe.start(100.0, 50.0);
        assert_eq!(swipe.move_to(107.0, 50.0), None);
        assert_eq!(swipe.move_to(93.0, 50.0), None);
    }

    #[test]
    fn exactly_threshold_is_not_enough() {
        let mut swipe = SwipeTracker::default();
        swipe.start(0.0, 0.0);
        assert_eq!(swipe.move_to(8.0, 0.0), None);
    }

    #[test]
    fn past_threshold_steps_in_sign_direction() {
        let mut swipe = SwipeTracker::default();
        swipe.start(100.0, 0.0);
        assert_eq!(swipe.move_to(109.0, 0.0), Some(Step::Forward));

        let mut swipe = SwipeTracker::default();
        swipe.start(100.0, 0.0);
        assert_eq!(swipe.move_to(91.0, 0.0), Some(Step::Backward));
    }

    #[test]
    fn continued_drag_steps_again_after_reset() {
        let mut swipe = SwipeTracker::default();
        swipe.start(0.0, 0.0);
        assert_eq!(swipe.move_to(9.0, 0.0), Some(Step::Forward));
        assert_eq!(swipe.anchor(), Some((9.0, 0.0)));
        assert_eq!(swipe.move_to(15.0, 0.0), None);
        assert_eq!(swipe.move_to(18.0, 0.0), Some(Step::Forward));
    }

    #[test]
    fn large_jump_is_a_single_step() {
        let mut swipe = SwipeTracker::default();
        swipe.start(0.0, 0.0);
        assert_eq!(swipe.move_to(200.0, 0.0), Some(Step::Forward));
        assert_eq!(swipe.move_to(200.0, 0.0), None);
    }

    #[test]
    fn vertical_motion_never_steps() {
        let mut swipe = SwipeTracker::default();
        swipe.start(0.0, 0.0);
        assert_eq!(swipe.move_to(0.0, 300.0), None);
        assert_eq!(swipe.move_to(3.0, -300.0), None);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.move_to(50.0, 0.0), None);
        swipe.start(0.0, 0.0);
        swipe.end();
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.move_to(50.0, 0.0), None);
    }
}
