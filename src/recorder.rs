//! Sample recording interface and the flat CSV implementation.
//!
//! The recorder receives one record per processed sample. Persistence policy
//! (file naming, rotation, storage location) is a host concern; the kernel
//! only fixes the record shape and the serialized CSV layout, which must be
//! preserved bit-for-bit for compatibility with previously captured traces:
//!
//! ```text
//! X Axis,Y Axis,Z Axis,Acceleration,Time
//! <x>,<y>,<z>,<magnitude>,<elapsed_ms>
//! ```

use std::io::{self, BufWriter, Write};

/// Column header row of the CSV trace format.
pub const CSV_HEADER: &str = "X Axis,Y Axis,Z Axis,Acceleration,Time";

/// Field delimiter of the CSV trace format.
pub const CSV_DELIM: char = ',';

/// One record handed to a recorder, per processed sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRecord {
    /// Filtered (or raw) x-axis value in m/s².
    pub x: f32,
    /// Filtered (or raw) y-axis value in m/s².
    pub y: f32,
    /// Filtered (or raw) z-axis value in m/s².
    pub z: f32,
    /// Euclidean magnitude of the three axes in m/s².
    pub magnitude: f32,
    /// Milliseconds since the session started. Signed: a recorder must not
    /// panic if the sensor clock reads slightly before the session start.
    pub elapsed_ms: i64,
}

/// Receives one record per processed sample.
///
/// Implementations own their I/O; a failed write is reported to the caller
/// and must leave the implementation usable for subsequent records.
pub trait SampleRecorder {
    /// Persists one record.
    fn record(&mut self, record: &SampleRecord) -> io::Result<()>;

    /// Flushes any buffered output. Called when the stream stops.
    fn finish(&mut self) -> io::Result<()>;
}

/// CSV recorder writing the flat delimited trace format.
///
/// Buffers the underlying writer and emits the header row at construction,
/// so a capture file always opens with the column names.
pub struct CsvRecorder<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> CsvRecorder<W> {
    /// Wraps `writer` and writes the header row.
    pub fn new(writer: W) -> io::Result<Self> {
        let mut writer = BufWriter::new(writer);
        writeln!(writer, "{}", CSV_HEADER)?;
        Ok(Self { writer })
    }
}

impl<W: Write> SampleRecorder for CsvRecorder<W> {
    fn record(&mut self, record: &SampleRecord) -> io::Result<()> {
        writeln!(
            self.writer,
            "{x}{d}{y}{d}{z}{d}{mag}{d}{t}",
            x = record.x,
            y = record.y,
            z = record.z,
            mag = record.magnitude,
            t = record.elapsed_ms,
            d = CSV_DELIM,
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Recorder that drops every record.
///
/// Used when the host runs detection without persistence, e.g. plotting
/// live without a capture file selected.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl SampleRecorder for NullRecorder {
    fn record(&mut self, _record: &SampleRecord) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
