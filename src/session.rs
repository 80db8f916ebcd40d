//! Recording session: fan-out shell around the pipeline.
//!
//! Owns one pipeline, one recorder, and an optional plotter. Every
//! processed sample is recorded, the plotter is refreshed at most once per
//! configured interval, and movement events are logged as they fire (never
//! deduplicated).
//!
//! A recorder I/O failure is logged and swallowed — persistence problems
//! must not corrupt or halt the filter state machine, and the session keeps
//! processing subsequent samples.
//!
//! Determinism note: the refresh rate limit is driven by sample-derived
//! elapsed time, not wall clock, so replaying a capture reproduces the same
//! plot refreshes along with the same filtered output.

use log::{info, warn};

use crate::error::ConfigError;
use crate::pipeline::{MotionPipeline, PipelineConfig};
use crate::plotter::Plotter;
use crate::recorder::{SampleRecord, SampleRecorder};
use crate::types::{AccelSample, ProcessedSample};

/// Drives one stream: pipeline plus recorder and plotter fan-out.
///
/// Create a session when streaming starts and drop it (after `finish`) when
/// streaming stops; no filter state survives across sessions.
pub struct RecordingSession<R: SampleRecorder, P: Plotter> {
    pipeline: MotionPipeline,
    recorder: R,
    plotter: Option<P>,
    start_time_ms: i64,
    refresh_interval_ms: i64,
    last_refresh_ms: Option<i64>,
}

impl<R: SampleRecorder, P: Plotter> RecordingSession<R, P> {
    /// Creates a session.
    ///
    /// `start_time_ms` is the session epoch in the sensor clock's
    /// millisecond domain; elapsed time in records and plots is measured
    /// from it. Pass `None` for `plotter` when no display is attached.
    pub fn new(
        config: PipelineConfig,
        recorder: R,
        plotter: Option<P>,
        start_time_ms: i64,
    ) -> Result<Self, ConfigError> {
        let refresh_interval_ms = config.plot_refresh_ms as i64;
        let pipeline = MotionPipeline::new(config)?;
        Ok(Self {
            pipeline,
            recorder,
            plotter,
            start_time_ms,
            refresh_interval_ms,
            last_refresh_ms: None,
        })
    }

    /// Processes one raw sample and fans the result out.
    ///
    /// Always returns the processed sample; recorder failures are logged,
    /// never propagated, and never affect filter state.
    pub fn handle_sample(&mut self, sample: AccelSample) -> ProcessedSample {
        let processed = self.pipeline.process(sample);
        let elapsed_ms = processed.timestamp_ms() as i64 - self.start_time_ms;

        let record = SampleRecord {
            x: processed.filtered[0],
            y: processed.filtered[1],
            z: processed.filtered[2],
            magnitude: processed.magnitude,
            elapsed_ms,
        };
        if let Err(err) = self.recorder.record(&record) {
            warn!("failed to record sample at {}ms: {}", elapsed_ms, err);
        }

        if let Some(plotter) = self.plotter.as_mut() {
            let due = match self.last_refresh_ms {
                None => true,
                Some(last) => elapsed_ms - last >= self.refresh_interval_ms,
            };
            if due {
                plotter.plot(elapsed_ms, processed.filtered, processed.magnitude);
                self.last_refresh_ms = Some(elapsed_ms);
            }
        }

        if processed.is_moving {
            info!(
                "movement detected: magnitude {:.3} at {}ms",
                processed.magnitude, elapsed_ms
            );
        }

        processed
    }

    /// Flushes the recorder. Call when the stream stops.
    pub fn finish(&mut self) {
        if let Err(err) = self.recorder.finish() {
            warn!("failed to flush recorder: {}", err);
        }
    }

    /// The attached plotter, for hosts that render the series.
    pub fn plotter(&self) -> Option<&P> {
        self.plotter.as_ref()
    }

    /// The underlying pipeline, for diagnostics.
    pub fn pipeline(&self) -> &MotionPipeline {
        &self.pipeline
    }
}
