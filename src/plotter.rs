//! Plotting interface and the bounded in-memory series implementation.
//!
//! The plotter receives one point per channel (x, y, z, magnitude) per
//! refresh. Rendering is a host concern; the kernel only fixes the series
//! semantics: a fixed maximum point count with oldest-point eviction, so the
//! display always shows the most recent window of the stream.
//!
//! Refresh rate limiting lives in the session, not here — the plotter is
//! rate-limited, the filter never is.

use std::collections::VecDeque;

use crate::error::ConfigError;

/// One displayed point: elapsed time on the domain axis, value on the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    /// Milliseconds since the session started.
    pub elapsed_ms: i64,
    /// Channel value in m/s².
    pub value: f32,
}

/// Receives one point per channel per refresh.
pub trait Plotter {
    /// Appends a point to each channel: filtered axes plus magnitude.
    fn plot(&mut self, elapsed_ms: i64, axes: [f32; 3], magnitude: f32);
}

/// Bounded time series for a single channel.
///
/// Holds at most `capacity` points; appending to a full series drops the
/// oldest point first.
#[derive(Debug, Clone)]
pub struct ChannelSeries {
    points: VecDeque<PlotPoint>,
    capacity: usize,
}

impl ChannelSeries {
    /// Creates a series holding at most `capacity` points.
    ///
    /// Zero capacity fails with `ConfigError::InvalidPlotCapacity`.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidPlotCapacity);
        }
        Ok(Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Appends a point, evicting the oldest if the series is full.
    pub fn push(&mut self, point: PlotPoint) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Points in insertion order, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter()
    }

    /// Current number of retained points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points have been plotted yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of retained points.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// In-memory plotter holding one bounded series per channel.
///
/// Stands in for the charting surface: tests and headless hosts read the
/// series back, UI hosts would render them.
#[derive(Debug, Clone)]
pub struct SeriesPlotter {
    x: ChannelSeries,
    y: ChannelSeries,
    z: ChannelSeries,
    magnitude: ChannelSeries,
}

impl SeriesPlotter {
    /// Creates a plotter with the given per-channel capacity.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            x: ChannelSeries::new(capacity)?,
            y: ChannelSeries::new(capacity)?,
            z: ChannelSeries::new(capacity)?,
            magnitude: ChannelSeries::new(capacity)?,
        })
    }

    /// The x-axis channel.
    pub fn x(&self) -> &ChannelSeries {
        &self.x
    }

    /// The y-axis channel.
    pub fn y(&self) -> &ChannelSeries {
        &self.y
    }

    /// The z-axis channel.
    pub fn z(&self) -> &ChannelSeries {
        &self.z
    }

    /// The magnitude channel.
    pub fn magnitude(&self) -> &ChannelSeries {
        &self.magnitude
    }
}

impl Plotter for SeriesPlotter {
    fn plot(&mut self, elapsed_ms: i64, axes: [f32; 3], magnitude: f32) {
        self.x.push(PlotPoint {
            elapsed_ms,
            value: axes[0],
        });
        self.y.push(PlotPoint {
            elapsed_ms,
            value: axes[1],
        });
        self.z.push(PlotPoint {
            elapsed_ms,
            value: axes[2],
        });
        self.magnitude.push(PlotPoint {
            elapsed_ms,
            value: magnitude,
        });
    }
}
