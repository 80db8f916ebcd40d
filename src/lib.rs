//! Motion-stream: a streaming filter kernel for 3-axis motion sensor data.
//!
//! Converts a live stream of accelerometer samples into filtered axis
//! values, a scalar magnitude, and coarse movement events. The reusable core
//! is a family of single-pass, constant-memory digital filters: each
//! consumes one scalar, updates internal state, and returns one filtered
//! scalar, with no look-ahead and no allocation on the hot path.
//!
//! # Design principles
//!
//! - **One sample in, one sample out**: processing is synchronous and
//!   push-driven; a sample is handled to completion before the next.
//! - **Fail fast on configuration**: every knob is validated at
//!   construction; nothing can fail mid-stream.
//! - **Deterministic**: the core reads no clock and holds no hidden state —
//!   replaying a capture reproduces identical output.
//! - **O(1) per sample**: fixed memory, constant time, suitable for
//!   continuous on-device execution.
//!
//! # Example
//!
//! ```
//! use motion_stream::{AccelSample, MotionPipeline, PipelineConfig};
//!
//! let mut pipeline = MotionPipeline::new(PipelineConfig::default()).unwrap();
//!
//! // Constant gravity on z: the high-pass filter removes the bias, so the
//! // filtered magnitude settles to zero and no movement fires.
//! let mut out = pipeline.process(AccelSample::new(0, 0.0, 0.0, 9.8));
//! for i in 1..10u64 {
//!     out = pipeline.process(AccelSample::new(i * 20_000_000, 0.0, 0.0, 9.8));
//! }
//! assert_eq!(out.magnitude, 0.0);
//! assert!(!out.is_moving);
//! ```

pub mod buffer;
pub mod detector;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod plotter;
pub mod recorder;
pub mod session;
pub mod types;


// Re-export commonly used types
pub use buffer::CircularHistoryBuffer;
pub use detector::{magnitude, MovementDetector};
pub use error::ConfigError;
pub use filter::{low_pass, HighPassFilter, MovingAverageFilter, StreamFilter};
pub use pipeline::{FilterMode, MotionPipeline, PipelineConfig};
pub use plotter::{ChannelSeries, PlotPoint, Plotter, SeriesPlotter};
pub use recorder::{CsvRecorder, NullRecorder, SampleRecord, SampleRecorder};
pub use session::RecordingSession;
pub use types::{AccelSample, ProcessedSample};
