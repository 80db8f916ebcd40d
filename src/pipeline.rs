//! Per-sample processing pipeline.
//!
//! Orchestrates the full data flow for one stream: raw sample → optional
//! per-axis filtering → magnitude → movement detection. Each incoming sample
//! is processed to completion before the next is accepted; the pipeline owns
//! one filter instance per axis and never shares state across channels or
//! threads.
//!
//! The pipeline performs no I/O and reads no clock — for a fixed
//! configuration and input sequence, the output sequence is identical on
//! every replay. Fan-out to recorder and plotter lives in `session.rs`.

use crate::detector::{self, MovementDetector, DEFAULT_MOVEMENT_THRESHOLD};
use crate::error::ConfigError;
use crate::filter::{
    HighPassFilter, MovingAverageFilter, StreamFilter, DEFAULT_HIGH_PASS_ALPHA,
};
use crate::types::{AccelSample, ProcessedSample};

/// Default moving-average window when that mode is selected.
pub const DEFAULT_WINDOW: usize = 16;

/// Default plot series capacity (points per channel).
pub const DEFAULT_PLOT_CAPACITY: usize = 30;

/// Default minimum interval between plot refreshes, in milliseconds.
pub const DEFAULT_PLOT_REFRESH_MS: u64 = 125;

/// Which per-axis filter the pipeline applies before deriving magnitude.
///
/// `HighPass` is the production path for gravity removal; `MovingAverage`
/// exists for experiments with raw-accelerometer smoothing, and `Raw`
/// covers sensors that already report linear acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// No filtering; axes pass through unchanged (e.g., the sensor already
    /// reports linear acceleration).
    Raw,
    /// Recursive high-pass per axis: removes gravity / DC bias.
    HighPass,
    /// Fixed-window running mean per axis: smooths noise, keeps trends.
    MovingAverage,
}

/// Configuration for a `MotionPipeline`.
///
/// All knobs are explicit constructor parameters; the pipeline reads no
/// ambient or global configuration. Validation happens once, at
/// construction — processing can never fail.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Per-axis filter selection.
    pub filter_mode: FilterMode,

    /// High-pass coefficient, strictly inside (0, 1). Typical: 0.7.
    pub high_pass_alpha: f32,

    /// Moving-average window in samples, at least 1. Only used in
    /// `MovingAverage` mode, but validated regardless so a bad value fails
    /// fast instead of on a later mode switch.
    pub window: usize,

    /// Movement threshold in m/s², compared strictly against the magnitude.
    pub movement_threshold: f32,

    /// Maximum points retained per plot channel before drop-oldest.
    pub plot_capacity: usize,

    /// Minimum interval between plot refreshes, in milliseconds.
    pub plot_refresh_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::HighPass,
            high_pass_alpha: DEFAULT_HIGH_PASS_ALPHA, // 0.7
            window: DEFAULT_WINDOW,                   // 16 samples
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD, // 2.0 m/s²
            plot_capacity: DEFAULT_PLOT_CAPACITY,     // 30 points
            plot_refresh_ms: DEFAULT_PLOT_REFRESH_MS, // 125 ms
        }
    }
}

/// One filter instance per axis, matching the selected mode.
#[derive(Debug, Clone)]
enum AxisFilters {
    Raw,
    HighPass([HighPassFilter; 3]),
    MovingAverage([MovingAverageFilter; 3]),
}

impl AxisFilters {
    fn new(config: &PipelineConfig) -> Result<Self, ConfigError> {
        match config.filter_mode {
            FilterMode::Raw => Ok(AxisFilters::Raw),
            FilterMode::HighPass => {
                let alpha = config.high_pass_alpha;
                Ok(AxisFilters::HighPass([
                    HighPassFilter::new(alpha)?,
                    HighPassFilter::new(alpha)?,
                    HighPassFilter::new(alpha)?,
                ]))
            }
            FilterMode::MovingAverage => {
                let window = config.window;
                Ok(AxisFilters::MovingAverage([
                    MovingAverageFilter::new(window)?,
                    MovingAverageFilter::new(window)?,
                    MovingAverageFilter::new(window)?,
                ]))
            }
        }
    }

    fn apply(&mut self, axes: [f32; 3]) -> [f32; 3] {
        match self {
            AxisFilters::Raw => axes,
            AxisFilters::HighPass(filters) => [
                filters[0].process(axes[0]),
                filters[1].process(axes[1]),
                filters[2].process(axes[2]),
            ],
            AxisFilters::MovingAverage(filters) => [
                filters[0].process(axes[0]),
                filters[1].process(axes[1]),
                filters[2].process(axes[2]),
            ],
        }
    }
}

/// Streaming pipeline: per-axis filters plus magnitude and movement stages.
///
/// Create one instance per stream; drop it when the stream stops. Filter
/// state never persists across streams and the instance must not be shared
/// between concurrent callers.
#[derive(Debug, Clone)]
pub struct MotionPipeline {
    config: PipelineConfig,
    filters: AxisFilters,
    detector: MovementDetector,
    samples_processed: u64,
}

impl MotionPipeline {
    /// Creates a pipeline, validating every configuration knob.
    ///
    /// Fails fast with a `ConfigError` on a non-positive window, an alpha
    /// outside (0, 1), a non-finite threshold, or a zero plot capacity —
    /// never at processing time.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        // Validate knobs that this instance may never exercise, so a bad
        // value cannot lie dormant in the configuration.
        HighPassFilter::new(config.high_pass_alpha)?;
        if config.window == 0 {
            return Err(ConfigError::InvalidWindow);
        }
        if config.plot_capacity == 0 {
            return Err(ConfigError::InvalidPlotCapacity);
        }

        let filters = AxisFilters::new(&config)?;
        let detector = MovementDetector::new(config.movement_threshold)?;

        Ok(Self {
            config,
            filters,
            detector,
            samples_processed: 0,
        })
    }

    /// Processes one raw sample to completion.
    ///
    /// Filter update, magnitude, and movement decision happen synchronously;
    /// nothing blocks, suspends, or performs I/O.
    pub fn process(&mut self, sample: AccelSample) -> ProcessedSample {
        let filtered = self.filters.apply(sample.axes);
        let magnitude = detector::magnitude(filtered[0], filtered[1], filtered[2]);
        let is_moving = self.detector.is_moving(magnitude);

        self.samples_processed += 1;

        ProcessedSample {
            timestamp_ns: sample.timestamp_ns,
            filtered,
            magnitude,
            is_moving,
        }
    }

    /// The configuration this pipeline was built with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Total samples processed since construction.
    pub fn samples_processed(&self) -> u64 {
        self.samples_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.filter_mode, FilterMode::HighPass);
        assert_eq!(config.high_pass_alpha, 0.7);
        assert_eq!(config.movement_threshold, 2.0);
        assert_eq!(config.plot_capacity, 30);
        assert_eq!(config.plot_refresh_ms, 125);
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let mut config = PipelineConfig::default();
        config.high_pass_alpha = 1.5;
        assert_eq!(
            MotionPipeline::new(config).unwrap_err(),
            ConfigError::InvalidAlpha(1.5)
        );

        let mut config = PipelineConfig::default();
        config.window = 0;
        assert_eq!(
            MotionPipeline::new(config).unwrap_err(),
            ConfigError::InvalidWindow
        );

        let mut config = PipelineConfig::default();
        config.plot_capacity = 0;
        assert_eq!(
            MotionPipeline::new(config).unwrap_err(),
            ConfigError::InvalidPlotCapacity
        );
    }

    #[test]
    fn test_unused_window_knob_still_validated() {
        // High-pass mode never builds the moving-average filters, but a
        // zero window must still fail fast.
        let config = PipelineConfig {
            filter_mode: FilterMode::HighPass,
            window: 0,
            ..PipelineConfig::default()
        };
        assert!(MotionPipeline::new(config).is_err());
    }

    #[test]
    fn test_raw_mode_passes_axes_through() {
        let config = PipelineConfig {
            filter_mode: FilterMode::Raw,
            ..PipelineConfig::default()
        };
        let mut pipeline = MotionPipeline::new(config).unwrap();

        let out = pipeline.process(AccelSample::new(0, 3.0, 4.0, 0.0));
        assert_eq!(out.filtered, [3.0, 4.0, 0.0]);
        assert!((out.magnitude - 5.0).abs() < 1e-6);
        assert!(out.is_moving); // 5.0 > 2.0
    }

    #[test]
    fn test_high_pass_mode_suppresses_constant_bias() {
        let mut pipeline = MotionPipeline::new(PipelineConfig::default()).unwrap();

        // Constant gravity on z: after the first sample the filtered
        // magnitude is zero and no movement fires.
        let first = pipeline.process(AccelSample::new(0, 0.0, 0.0, 9.8));
        assert!(first.is_moving); // transient: 0.7 * 9.8

        for i in 1..10u64 {
            let out = pipeline.process(AccelSample::new(i * 20_000_000, 0.0, 0.0, 9.8));
            assert_eq!(out.magnitude, 0.0);
            assert!(!out.is_moving);
        }
    }

    #[test]
    fn test_moving_average_mode_smooths() {
        let config = PipelineConfig {
            filter_mode: FilterMode::MovingAverage,
            window: 4,
            ..PipelineConfig::default()
        };
        let mut pipeline = MotionPipeline::new(config).unwrap();

        pipeline.process(AccelSample::new(0, 0.0, 0.0, 8.0));
        let out = pipeline.process(AccelSample::new(20_000_000, 0.0, 0.0, 0.0));
        // Window primed to 8.0, one zero entered: mean is 6.0.
        assert!((out.filtered[2] - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_counter() {
        let mut pipeline = MotionPipeline::new(PipelineConfig::default()).unwrap();
        assert_eq!(pipeline.samples_processed(), 0);
        pipeline.process(AccelSample::new(0, 0.0, 0.0, 0.0));
        pipeline.process(AccelSample::new(1, 0.0, 0.0, 0.0));
        assert_eq!(pipeline.samples_processed(), 2);
    }
}
