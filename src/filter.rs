//! Streaming scalar filters.
//!
//! Every filter here is single-pass and constant-memory: consume one raw
//! sample, update internal state, return one filtered sample. No batch mode,
//! no look-ahead, no clock or randomness — for a fixed instance and call
//! history, output is fully determined by input.
//!
//! Redesign note: the filters are free-standing structs composing a
//! `CircularHistoryBuffer` value where they need history, rather than
//! inheriting buffer storage from a shared base.

use crate::buffer::CircularHistoryBuffer;
use crate::error::ConfigError;

/// Default coefficient for the recursive high-pass filter.
pub const DEFAULT_HIGH_PASS_ALPHA: f32 = 0.7;

/// Default coefficient for the stateless exponential low-pass helper.
pub const DEFAULT_LOW_PASS_ALPHA: f32 = 0.1;

/// The common shape of every streaming filter.
///
/// One raw scalar in, one filtered scalar out, state preserved between
/// calls. There is no way to peek without advancing state.
pub trait StreamFilter {
    /// Consumes the next raw sample and returns the filtered sample.
    fn process(&mut self, sample: f32) -> f32;
}

/// Single-pole recursive high-pass filter.
///
/// Removes slow-varying components (gravity, DC bias) from an acceleration
/// channel while passing rapid changes. O(1) time and memory per sample.
///
/// Recursion: `y = alpha * (last_filtered + x - last_raw)`.
///
/// The first call primes `last_raw` with the input, leaves `last_filtered`
/// at zero, and returns `alpha * x` directly — so a constant input produces
/// `alpha * x` once and exactly zero thereafter, with no decay transient.
#[derive(Debug, Clone)]
pub struct HighPassFilter {
    alpha: f32,
    last_raw: f32,
    last_filtered: f32,
    primed: bool,
}

impl HighPassFilter {
    /// Creates a high-pass filter with the given coefficient.
    ///
    /// `alpha` must lie strictly inside (0, 1); anything else fails with
    /// `ConfigError::InvalidAlpha` at construction.
    pub fn new(alpha: f32) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidAlpha(alpha));
        }
        Ok(Self {
            alpha,
            last_raw: 0.0,
            last_filtered: 0.0,
            primed: false,
        })
    }

    /// Creates a high-pass filter with the standard 0.7 coefficient.
    pub fn standard() -> Self {
        Self {
            alpha: DEFAULT_HIGH_PASS_ALPHA,
            last_raw: 0.0,
            last_filtered: 0.0,
            primed: false,
        }
    }

    /// The configured coefficient.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

impl StreamFilter for HighPassFilter {
    fn process(&mut self, sample: f32) -> f32 {
        if !self.primed {
            self.primed = true;
            self.last_raw = sample;
            self.last_filtered = 0.0;
            return self.alpha * sample;
        }

        let filtered = self.alpha * (self.last_filtered + sample - self.last_raw);
        self.last_raw = sample;
        self.last_filtered = filtered;
        filtered
    }
}

/// Fixed-window running-mean filter (low-pass).
///
/// Composes a `CircularHistoryBuffer` of the window size and maintains the
/// mean incrementally: subtract the value leaving the window, add the value
/// entering it, divide the delta by the window size. O(1) per sample.
///
/// Known property: the incremental update accumulates floating-point
/// rounding error over very long streams. Recomputing the full sum would
/// remove the drift but break the O(1)-per-sample contract, so the drift is
/// documented and kept.
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    buffer: CircularHistoryBuffer,
    window: usize,
    average: f32,
}

impl MovingAverageFilter {
    /// Creates a moving-average filter over the last `window` samples.
    ///
    /// `window` must be at least 1; zero fails with
    /// `ConfigError::InvalidWindow`.
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        let buffer = CircularHistoryBuffer::new(window).map_err(|_| ConfigError::InvalidWindow)?;
        Ok(Self {
            buffer,
            window,
            average: 0.0,
        })
    }

    /// The configured window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Current running mean without consuming a sample.
    pub fn average(&self) -> f32 {
        self.average
    }
}

impl StreamFilter for MovingAverageFilter {
    fn process(&mut self, sample: f32) -> f32 {
        if !self.buffer.is_primed() {
            // First sample ever: priming makes every slot equal to it, so
            // the mean is the sample itself.
            self.buffer.push(sample);
            self.average = sample;
        } else {
            let evicted = self.buffer.push(sample);
            self.average += (sample - evicted) / self.window as f32;
        }
        self.average
    }
}

/// Stateless exponential low-pass step with the standard 0.1 coefficient.
///
/// `low_pass(current, previous) = previous * (1 - a) + current * a`.
///
/// The caller carries `previous` between calls; use this where no filter
/// object lifecycle is wanted.
pub fn low_pass(current: f32, previous: f32) -> f32 {
    low_pass_with_alpha(current, previous, DEFAULT_LOW_PASS_ALPHA)
}

/// Stateless exponential low-pass step with an explicit coefficient.
pub fn low_pass_with_alpha(current: f32, previous: f32, alpha: f32) -> f32 {
    previous * (1.0 - alpha) + current * alpha
}
