//! Demo binary for the motion-stream kernel.
//!
//! Synthesizes a short accelerometer trace (rest under gravity, then a
//! shake, then rest again), runs it through a full recording session, and
//! writes the CSV capture to a file given on the command line (default
//! `motion_trace.csv`).

use std::env;
use std::fs::File;

use anyhow::{Context, Result};

use motion_stream::{
    AccelSample, CsvRecorder, PipelineConfig, RecordingSession, SeriesPlotter,
};

/// Synthetic 50Hz trace: 2s rest, 1s shake, 2s rest.
fn synthesize_trace() -> Vec<AccelSample> {
    let mut samples = Vec::new();
    for i in 0..250u64 {
        let timestamp_ns = i * 20_000_000;
        let t = i as f32 * 0.02;
        let shaking = (2.0..3.0).contains(&t);
        let (x, y) = if shaking {
            ((t * 40.0).sin() * 5.0, (t * 40.0).cos() * 3.0)
        } else {
            (0.0, 0.0)
        };
        samples.push(AccelSample::new(timestamp_ns, x, y, 9.81));
    }
    samples
}

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "motion_trace.csv".to_string());

    let file = File::create(&path).with_context(|| format!("creating {}", path))?;
    let recorder = CsvRecorder::new(file).context("writing CSV header")?;
    let plotter = SeriesPlotter::new(30)?;

    let mut session = RecordingSession::new(PipelineConfig::default(), recorder, Some(plotter), 0)?;

    let mut movement_samples = 0u32;
    for sample in synthesize_trace() {
        if session.handle_sample(sample).is_moving {
            movement_samples += 1;
        }
    }
    session.finish();

    println!("wrote trace to {}", path);
    println!(
        "movement detected on {} of {} samples",
        movement_samples,
        session.pipeline().samples_processed()
    );
    if let Some(plotter) = session.plotter() {
        println!(
            "plot holds {} points per channel (capacity {})",
            plotter.magnitude().len(),
            plotter.magnitude().capacity()
        );
    }

    Ok(())
}
