use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use motion_stream::{
    AccelSample, CircularHistoryBuffer, HighPassFilter, MotionPipeline, MovingAverageFilter,
    PipelineConfig, StreamFilter,
};

// Per-sample cost must stay O(1); these benches watch for regressions in
// the hot paths (buffer push, per-axis filter step, full pipeline step).

fn bench_buffer_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_push");

    for capacity in [16, 128, 1024].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            capacity,
            |b, &capacity| {
                let mut buffer = CircularHistoryBuffer::new(capacity).unwrap();
                b.iter(|| buffer.push(black_box(1.5)));
            },
        );
    }

    group.finish();
}

fn bench_high_pass(c: &mut Criterion) {
    let mut filter = HighPassFilter::new(0.7).unwrap();
    c.bench_function("high_pass_process", |b| {
        b.iter(|| filter.process(black_box(9.8)))
    });
}

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average_process");

    // Cost must not scale with the window.
    for window in [4, 64, 512].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &window| {
            let mut filter = MovingAverageFilter::new(window).unwrap();
            b.iter(|| filter.process(black_box(9.8)));
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_process");
    group.throughput(Throughput::Elements(1));

    let mut pipeline = MotionPipeline::new(PipelineConfig::default()).unwrap();
    let mut timestamp = 0u64;

    group.bench_function("high_pass_full_sample", |b| {
        b.iter(|| {
            timestamp += 20_000_000;
            pipeline.process(black_box(AccelSample::new(timestamp, 0.1, -0.1, 9.8)))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_buffer_push,
    bench_high_pass,
    bench_moving_average,
    bench_pipeline
);
criterion_main!(benches);
