//! Criterion benchmarks for the grid tiler and full scene generation.
//! Densities: {1, 2, 4} on a quarter of the reference canvas.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quadlens::geometry::{Point, Polygon};
use quadlens::rng::Rng;
use quadlens::scene::{SceneConfig, generate_scene};
use quadlens::tiling::{Lattice, TileParams, tile_region};

fn corner_region() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 280.0),
        Point::new(310.0, 295.0),
        Point::new(325.0, 0.0),
    ])
}

fn bench_tiling(c: &mut Criterion) {
    let region = corner_region();
    let mut group = c.benchmark_group("tiling");

    for &density in &[1.0f64, 2.0, 4.0] {
        let params = TileParams::new(0.3, 40.0, density);

        group.bench_with_input(BenchmarkId::new("lattice", density), &params, |b, params| {
            b.iter(|| Lattice::new(black_box(&region), params).map(|l| l.count()))
        });

        group.bench_with_input(BenchmarkId::new("tile_region", density), &params, |b, params| {
            b.iter(|| {
                let mut rng = Rng::new(42);
                tile_region(black_box(&region), params, 32, &mut rng).map(|t| t.count())
            })
        });
    }
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let config = SceneConfig::default();
    c.bench_function("generate_scene", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            generate_scene(black_box(&config), &mut Rng::new(seed)).map(|s| s.placement_count())
        })
    });
}

criterion_group!(benches, bench_tiling, bench_scene);
criterion_main!(benches);
