//! Error taxonomy for the motion-stream kernel.
//!
//! Configuration errors are the only errors the core can produce, and they
//! are reported at construction time, never during sample processing. The
//! filter math itself is pure arithmetic on finite floats and cannot fail
//! mid-stream.
//!
//! Recorder I/O failures are a host concern: they surface as
//! `std::io::Error` on the recorder trait and must not disturb filter state
//! (see `session.rs`).

use thiserror::Error;

/// Invalid configuration detected while constructing a filter, buffer, or
/// pipeline.
///
/// Every variant is unrecoverable: the caller supplied a parameter outside
/// its documented domain and no instance is produced.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Ring buffer capacity must be at least 1.
    #[error("ring buffer capacity must be at least 1")]
    InvalidCapacity,

    /// Moving-average window must hold at least one sample.
    #[error("moving-average window must be at least 1")]
    InvalidWindow,

    /// Filter coefficient must lie strictly inside (0, 1).
    #[error("filter alpha must lie in (0, 1), got {0}")]
    InvalidAlpha(f32),

    /// Movement threshold must be a finite, non-negative magnitude.
    #[error("movement threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),

    /// Plot series must hold at least one point.
    #[error("plot series capacity must be at least 1")]
    InvalidPlotCapacity,
}
