//! Card playback benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tinsel::placement::coordinates_for;
use tinsel::prelude::*;

fn bench_coordinates(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinates_for");

    for (y_min, y_max) in [(-25, 40), (40, 120), (120, 190)] {
        let label = format!("{y_min}..{y_max}");
        group.bench_with_input(
            BenchmarkId::new("tier", label),
            &(y_min, y_max),
            |b, &(lo, hi)| {
                let mut rng = CardRng::new(42);
                b.iter(|| black_box(coordinates_for(&mut rng, lo, hi)));
            },
        );
    }

    group.finish();
}

fn bench_populate_lights(c: &mut Criterion) {
    c.bench_function("populate_lights", |b| {
        b.iter(|| {
            let config = CardConfig::builder().seed(42).build();
            let mut scene = SceneController::new(MemorySurface::card_skeleton(), &config);
            scene.populate_lights().ok();
            black_box(scene.surface().fragments().len())
        });
    });
}

fn bench_full_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_timeline");
    group.sample_size(100);

    group.bench_function("run_to_completion", |b| {
        b.iter(|| {
            let config = CardConfig::builder().seed(42).build();
            let mut scene = SceneController::new(MemorySurface::card_skeleton(), &config);
            scene.run_to_completion().ok();
            black_box(scene.report())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_coordinates,
    bench_populate_lights,
    bench_full_timeline
);
criterion_main!(benches);
