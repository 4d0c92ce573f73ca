mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use path_tiler::prelude::*;

const TRIWS: [f64; 3] = [32.0, 16.0, 8.0];

/// Paths of a p6m tiling; their vertices are full of near-duplicates from the mirrors.
fn p6m_paths(triw: f64) -> Vec<Path> {
    let mut tiler = PathTiler::new(Canvas::new(512.0, 512.0));
    let mut draw = draw_fn(|t: &mut PathTiler<Canvas>| {
        t.move_to(0.0, 0.0);
        t.line_to(triw * 0.4, triw * 0.2)?;
        t.line_to(triw * 0.5, 0.0)
    });
    tiler.tile_p6m(&mut draw, triw).expect("valid radius");
    tiler.into_paths()
}

fn pointmap_dedup_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointmap/dedup_p6m");

    for &triw in &TRIWS {
        let paths = p6m_paths(triw);
        group.throughput(common::vertex_throughput(&paths));
        let points: Vec<Point> = paths.into_iter().flat_map(Path::into_points).collect();

        group.bench_with_input(BenchmarkId::from_parameter(triw), &points, |b, pts| {
            b.iter(|| {
                let mut map: PointMap<usize> = PointMap::default();
                for &p in pts {
                    *map.get_or_create(p) += 1;
                }
                black_box(map.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::sweep_criterion();
    targets = pointmap_dedup_benches
}
criterion_main!(benches);
