//! Keyboard-Driven Slider Model
//!
//! Holds a normalized value in `[0.0, 1.0]` and the step used by the
//! left/right keys. Every mutation clamps, so the value can never leave range.

/// Clamped normalized value with a fixed adjustment step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderModel {
    value: f64,
    step: f64,
}

impl SliderModel {
    /// Creates a slider; the initial value is clamped into range.
    pub fn new(initial: f64, step: f64) -> Self {
        SliderModel {
            value: initial.clamp(0.0, 1.0),
            step,
        }
    }

    /// Adds `delta` and saturates at the bounds
    pub fn adjust(&mut self, delta: f64) {
        self.value = (self.value + delta).clamp(0.0, 1.0);
    }

    /// One step up (right key)
    pub fn increase(&mut self) {
        self.adjust(self.step);
    }

    /// One step down (left key)
    pub fn decrease(&mut self) {
        self.adjust(-self.step);
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value as a whole percentage, truncated (0.75 -> 75)
    pub fn percent(&self) -> u32 {
        // Nudge before truncating so 0.7 + 0.05 reads as 75, not 74.
        ((self.value * 100.0) + 1e-9).floor() as u32
    }
}
