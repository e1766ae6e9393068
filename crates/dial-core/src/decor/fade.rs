#![forbid(unsafe_code)]

//! Linear volume ramps for the ambient track.

/// Volume sequence from `from` to `to`, one value per timer tick.
///
/// The last value is exactly `to`. Both endpoints are clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeRamp {
    from: f64,
    to: f64,
    steps: u32,
    index: u32,
}

impl FadeRamp {
    /// Ramp lasting `duration_ms`, sampled every `tick_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = duration_ms.div_ceil(tick_ms.max(1)).max(1);
        Self {
            from: clamp_volume(from),
            to: clamp_volume(to),
            steps,
            index: 0,
        }
    }

    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.index >= self.steps
    }
}

impl Iterator for FadeRamp {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_done() {
            return None;
        }
        self.index += 1;
        if self.index == self.steps {
            return Some(self.to);
        }
        let t = f64::from(self.index) / f64::from(self.steps);
        Some(clamp_volume(self.from + (self.to - self.from) * t))
    }
}

#[must_use]
pub fn clamp_volume(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
