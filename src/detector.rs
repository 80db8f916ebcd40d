//! Magnitude extraction and movement detection.
//!
//! The magnitude collapses the three filtered axes into a single scalar that
//! is independent of device orientation; the detector compares it against a
//! fixed threshold. Both are pure: no state, no clock, the decision is
//! recomputed for every sample.

use crate::error::ConfigError;

/// Default movement threshold in m/s² (same unit as the magnitude).
pub const DEFAULT_MOVEMENT_THRESHOLD: f32 = 2.0;

/// Euclidean magnitude of a 3-axis reading.
///
/// Always non-negative for finite inputs. The formula is fixed; any
/// defensive clamping belongs to callers, not here.
pub fn magnitude(x: f32, y: f32, z: f32) -> f32 {
    (x * x + y * y + z * z).sqrt()
}

/// Threshold-based movement predicate.
///
/// Strict greater-than at the boundary, no hysteresis, no debounce: every
/// sample is evaluated independently, so a value flapping around the
/// threshold produces repeated independent events. Consumers log these;
/// nothing deduplicates them.
#[derive(Debug, Clone, Copy)]
pub struct MovementDetector {
    threshold: f32,
}

impl MovementDetector {
    /// Creates a detector with the given threshold.
    ///
    /// The threshold must be finite and non-negative; anything else fails
    /// with `ConfigError::InvalidThreshold`.
    pub fn new(threshold: f32) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether `magnitude` counts as movement.
    pub fn is_moving(&self, magnitude: f32) -> bool {
        magnitude > self.threshold
    }
}

impl Default for MovementDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_MOVEMENT_THRESHOLD,
        }
    }
}
