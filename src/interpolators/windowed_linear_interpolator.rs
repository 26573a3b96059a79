use crate::config::{ConfigError, InterpolatorConfig, InterpolatorToggles, WindowedLinearParams};
use crate::core::fits::LinearFit;
use crate::core::history::HistoryRing;
use crate::interpolators::Interpolator;
use tracing::debug;

/// Total weight held by each part of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowWeights {
    pub head: f64,
    pub main: f64,
    pub tail: f64,
}

impl WindowWeights {
    pub fn total(&self) -> f64 {
        self.head + self.main + self.tail
    }
}

/// Linear interpolator for `f(x) = y` over a tapering rolling window.
///
/// The newest `head_length` samples ramp up geometrically in weight, from
/// `head_factor ^ head_length` for the newest to `head_factor` for the oldest
/// one in the head. They then join the main window at weight 1. Samples
/// leaving the main window are folded into the tail, which is scaled by
/// `tail_factor` at every step instead of being dropped. Only the last
/// `head_length + main_length` raw samples are kept.
///
/// Not synchronized: one instance per clock stream, driven from one thread.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedLinearInterpolator {
    params: WindowedLinearParams,
    head: LinearFit,
    main: LinearFit,
    tail: LinearFit,
    history: HistoryRing,
    head_factor_inv: f64,
    first_weight: f64,
    num_samples: usize,
    toggles: InterpolatorToggles,
    staged_toggles: InterpolatorToggles,
    stabilized_offset: Option<f64>,
    overflow_reported: bool,
}

impl WindowedLinearInterpolator {
    pub fn new(params: WindowedLinearParams) -> Result<Self, ConfigError> {
        Self::with_toggles(params, InterpolatorToggles::default())
    }

    pub fn with_toggles(
        params: WindowedLinearParams,
        toggles: InterpolatorToggles,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let mut interpolator = Self::build(params, toggles);
        interpolator.reset();
        Ok(interpolator)
    }

    // `params` must already be validated.
    fn build(params: WindowedLinearParams, toggles: InterpolatorToggles) -> Self {
        Self {
            params,
            head: LinearFit::new(),
            main: LinearFit::new(),
            tail: LinearFit::new(),
            history: HistoryRing::new(params.history_length()),
            head_factor_inv: params.head_factor_inv(),
            first_weight: params.first_weight(),
            num_samples: 0,
            toggles,
            staged_toggles: toggles,
            stabilized_offset: None,
            overflow_reported: false,
        }
    }

    pub fn from_config(config: &InterpolatorConfig) -> Result<Self, ConfigError> {
        Self::with_toggles(config.window, config.toggles)
    }

    pub fn params(&self) -> &WindowedLinearParams {
        &self.params
    }

    /// Toggles currently in effect.
    pub fn toggles(&self) -> InterpolatorToggles {
        self.toggles
    }

    /// Stages new toggles. They take effect at the next [`reset`](Interpolator::reset).
    pub fn set_toggles(&mut self, toggles: InterpolatorToggles) {
        self.staged_toggles = toggles;
    }

    /// Samples recorded since the last reset, saturating at the history length.
    pub fn samples_seen(&self) -> usize {
        self.num_samples
    }

    pub fn is_warmed_up(&self) -> bool {
        self.num_samples == self.history.capacity()
    }

    /// Offset from `x` frozen by stabilize mode, once the window has filled.
    pub fn stabilized_offset(&self) -> Option<f64> {
        self.stabilized_offset
    }

    pub fn window_weights(&self) -> WindowWeights {
        WindowWeights {
            head: self.head.weight(),
            main: self.main.weight(),
            tail: self.tail.weight(),
        }
    }

    /// Hands the sample leaving the head to the main window, and the sample
    /// leaving the main window to the tail. Runs before the new sample is
    /// written, so the slot under the cursor still holds the oldest sample.
    fn age_window(&mut self) {
        let head_length = self.params.head_length;
        if head_length > 0 && self.num_samples >= head_length {
            let (x, y) = self.history.get_from_cursor(head_length);
            self.main.add(x, y, 1.0);
        }
        if self.num_samples >= self.history.capacity() {
            let (x, y) = self.history.get_from_cursor(0);
            self.main.remove(x, y);
            self.tail.add(x, y, 1.0);
            self.tail.scale(self.params.tail_factor);
        }
    }

    // Rebuilt from scratch on every sample. Amplifying the previous head in
    // place would let rounding error grow without bound.
    fn rebuild_head(&mut self) {
        self.head.reset();
        let mut w = self.first_weight;
        for age in 0..self.params.head_length.min(self.num_samples) {
            let (x, y) = self.history.get_from_cursor(age);
            self.head.add(x, y, w);
            w *= self.head_factor_inv;
        }
    }

    fn total_fit(&mut self) -> LinearFit {
        let mut total = LinearFit::new();
        total.combine(&self.head);
        total.combine(&self.main);
        total.combine(&self.tail);
        if !self.overflow_reported && total.is_overflowing() {
            total.size();
            self.overflow_reported = true;
        }
        total
    }
}

impl Default for WindowedLinearInterpolator {
    fn default() -> Self {
        Self::build(
            WindowedLinearParams::default(),
            InterpolatorToggles::default(),
        )
    }
}

impl Interpolator for WindowedLinearInterpolator {
    fn estimate(&mut self, x: f64, y: f64) -> f64 {
        if !self.toggles.enabled {
            return y;
        }
        if let Some(offset) = self.stabilized_offset {
            return offset + x;
        }

        self.age_window();

        self.history.write(x, y);
        if self.num_samples < self.history.capacity() {
            self.num_samples += 1;
        }
        if self.params.head_length == 0 {
            // no head: the new sample goes straight to the main window
            self.main.add(x, y, 1.0);
        }

        self.rebuild_head();
        self.history.advance();

        let estimate = self.total_fit().interpolate(x);

        if self.toggles.stabilize && self.is_warmed_up() {
            let offset = estimate - x;
            self.stabilized_offset = Some(offset);
            debug!(offset, "interpolator stabilized at offset + x");
            return offset + x;
        }

        estimate
    }

    fn reset(&mut self) {
        self.head.reset();
        self.main.reset();
        self.tail.reset();
        self.history.clear();
        self.num_samples = 0;
        self.toggles = self.staged_toggles;
        self.stabilized_offset = None;
        self.overflow_reported = false;
        debug!(
            enabled = self.toggles.enabled,
            stabilize = self.toggles.stabilize,
            "interpolator reset"
        );
    }
}
