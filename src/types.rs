//! Core data types for the motion-stream kernel.
//!
//! This module defines the value types that cross module boundaries. All
//! types are small, copyable, and allocation-free so the per-sample hot path
//! never touches the heap.
//!
//! Design principle: if a concept exists, it gets a type. Raw tuples never
//! cross a module boundary.

/// A single raw 3-axis accelerometer sample.
///
/// This is the minimal input contract: three axis readings and a monotonic
/// timestamp. The kernel never interprets the sample, only filters it.
///
/// Design note: axes are f32 to match on-device sensor precision; the filter
/// formulas do not benefit from f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSample {
    /// Monotonic timestamp in nanoseconds (sensor clock, arbitrary epoch).
    /// Must be increasing within a stream.
    pub timestamp_ns: u64,

    /// Accelerometer reading [x, y, z] in m/s².
    pub axes: [f32; 3],
}

impl AccelSample {
    /// Creates a new sample.
    ///
    /// Assumptions:
    /// - `timestamp_ns` is monotonically increasing within a sequence
    /// - axis values are finite (calibrated sensor output)
    pub fn new(timestamp_ns: u64, x: f32, y: f32, z: f32) -> Self {
        Self {
            timestamp_ns,
            axes: [x, y, z],
        }
    }

    /// Timestamp converted to whole milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ns / 1_000_000
    }
}

/// Output of one pipeline step: the filtered axes plus derived values.
///
/// One `ProcessedSample` is produced per input sample, synchronously. The
/// movement decision is recomputed every sample, never cached across samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessedSample {
    /// Timestamp of the originating raw sample (nanoseconds).
    pub timestamp_ns: u64,

    /// Axis values after the configured per-axis filter [x, y, z] in m/s².
    /// Equal to the raw axes when filtering is disabled.
    pub filtered: [f32; 3],

    /// Euclidean magnitude of the filtered axes in m/s².
    pub magnitude: f32,

    /// Whether the magnitude exceeded the movement threshold.
    pub is_moving: bool,
}

impl ProcessedSample {
    /// Timestamp converted to whole milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ns / 1_000_000
    }
}
