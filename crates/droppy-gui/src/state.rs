use droppy_core::consts::{TUNER_INITIAL_HIGH, TUNER_INITIAL_LOW, TUNER_SIGMA_MAX};
use droppy_core::EdgeParams;

/// Slider values of the edge tuner.
///
/// Keeps `sigma` in `[0, TUNER_SIGMA_MAX]`, both thresholds in `[0, 1]` and
/// `high >= low`; lowering `high` below `low` raises it back to `low`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunerState {
    pub sigma: f64,
    pub low: f64,
    pub high: f64,
    initial: (f64, f64, f64),
}

impl TunerState {
    /// Start from `initial`; missing thresholds use the tuner's own defaults.
    pub fn new(initial: EdgeParams) -> Self {
        let mut state = Self {
            sigma: initial.sigma.clamp(0.0, TUNER_SIGMA_MAX),
            low: initial.low.unwrap_or(TUNER_INITIAL_LOW).clamp(0.0, 1.0),
            high: initial.high.unwrap_or(TUNER_INITIAL_HIGH).clamp(0.0, 1.0),
            initial: (0.0, 0.0, 0.0),
        };
        state.enforce_order();
        state.initial = (state.sigma, state.low, state.high);
        state
    }

    pub fn set_sigma(&mut self, sigma: f64) {
        self.sigma = sigma.clamp(0.0, TUNER_SIGMA_MAX);
    }

    pub fn set_low(&mut self, low: f64) {
        self.low = low.clamp(0.0, 1.0);
        self.enforce_order();
    }

    pub fn set_high(&mut self, high: f64) {
        self.high = high.clamp(0.0, 1.0);
        self.enforce_order();
    }

    /// Restore the values the tuner opened with.
    pub fn reset(&mut self) {
        (self.sigma, self.low, self.high) = self.initial;
    }

    pub fn params(&self) -> EdgeParams {
        EdgeParams::new(self.sigma, Some(self.low), Some(self.high))
    }

    fn enforce_order(&mut self) {
        if self.high < self.low {
            self.high = self.low;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_params() {
        let s = TunerState::new(EdgeParams::default());
        assert_eq!((s.sigma, s.low, s.high), (1.0, 0.1, 0.3));
    }

    #[test]
    fn test_high_follows_low_up() {
        let mut s = TunerState::new(EdgeParams::default());
        s.set_low(0.5);
        assert_eq!((s.low, s.high), (0.5, 0.5));
        s.set_high(0.2);
        assert_eq!((s.low, s.high), (0.5, 0.5));
        s.set_high(0.8);
        assert_eq!(s.high, 0.8);
    }

    #[test]
    fn test_values_clamped_to_slider_ranges() {
        let mut s = TunerState::new(EdgeParams::default());
        s.set_sigma(25.0);
        s.set_low(-0.5);
        s.set_high(3.0);
        assert_eq!((s.sigma, s.low, s.high), (10.0, 0.0, 1.0));
    }

    #[test]
    fn test_inverted_initial_thresholds_fixed() {
        let s = TunerState::new(EdgeParams::new(2.0, Some(0.6), Some(0.2)));
        assert_eq!((s.low, s.high), (0.6, 0.6));
        assert!(s.params().resolved_thresholds().is_ok());
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut s = TunerState::new(EdgeParams::new(2.0, Some(0.05), None));
        s.set_sigma(7.0);
        s.set_low(0.9);
        s.reset();
        assert_eq!((s.sigma, s.low, s.high), (2.0, 0.05, 0.3));
        assert_eq!(s.params(), EdgeParams::new(2.0, Some(0.05), Some(0.3)));
    }
}
